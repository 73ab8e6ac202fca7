//! Viewy Interactions Entry Point
//!
//! Optimistic favorite and follow toggles for the server-rendered pages.

mod commands;
mod config;
mod console;
mod dom;
mod error;
mod handlers;
mod indicator;
mod models;

use std::rc::Rc;

use leptos::prelude::document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

fn main() {
    console_error_panic_hook::set_once();

    let document = document();
    if document.ready_state() == "loading" {
        // Direct bindings need the controls parsed first
        let on_ready = Closure::once(move || init(&leptos::prelude::document()));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
            console::error("Init", error::describe_js(&e));
        }
        on_ready.forget();
    } else {
        init(&document);
    }
}

fn init(document: &Document) {
    let config = config::load(document);
    console::set_debug(config.debug);

    match handlers::install(document, Rc::new(config)) {
        Ok(()) => console::debug("Init", "Toggle handlers installed"),
        Err(e) => console::error("Init", e.to_string()),
    }
}
