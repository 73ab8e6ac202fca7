//! Console Logging
//!
//! `[Tag] message` lines in the browser console. Debug lines are dropped
//! unless the page config turns them on.

use std::cell::Cell;

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug(enabled: bool) {
    DEBUG.with(|d| d.set(enabled));
}

pub fn debug(tag: &str, message: impl AsRef<str>) {
    if DEBUG.with(|d| d.get()) {
        web_sys::console::log_1(&format!("[{}] {}", tag, message.as_ref()).into());
    }
}

pub fn warn(tag: &str, message: impl AsRef<str>) {
    web_sys::console::warn_1(&format!("[{}] {}", tag, message.as_ref()).into());
}

pub fn error(tag: &str, message: impl AsRef<str>) {
    web_sys::console::error_1(&format!("[{}] {}", tag, message.as_ref()).into());
}
