//! Toggle Handlers
//!
//! Change listeners for the favorite and follow controls. Each change
//! locks the control, flips its indicators, and settles in a local task
//! once the server answers.

mod control;

use std::rc::Rc;

use leptos::prelude::document;
use leptos::task::spawn_local;
use optimistic_toggle::{OnFailure, Outcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use crate::commands::{self, FormSubmission};
use crate::config::{Binding, InteractionConfig};
use crate::console;
use crate::dom;
use crate::error::InteractionError;
use crate::models::ControlKind;

use control::ControlIndicators;

/// Attach listeners for every configured control
pub fn install(document: &Document, config: Rc<InteractionConfig>) -> Result<(), InteractionError> {
    let (delegated, direct): (Vec<ControlKind>, Vec<ControlKind>) = ControlKind::ALL
        .into_iter()
        .partition(|kind| config.control(*kind).binding == Binding::Delegated);

    if !delegated.is_empty() {
        bind_delegated(document, delegated, config.clone())?;
    }

    for kind in direct {
        let inputs = dom::inputs_matching(document, &config.control(kind).selector)?;
        console::debug(kind.tag(), format!("Binding {} controls", inputs.len()));
        for input in inputs {
            bind_direct(kind, input, config.clone())?;
        }
    }
    Ok(())
}

/// One document listener; `change` bubbles, so controls added later are covered
fn bind_delegated(document: &Document, kinds: Vec<ControlKind>, config: Rc<InteractionConfig>) -> Result<(), InteractionError> {
    let on_change = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let matched = kinds.iter().find_map(|kind| {
            dom::matching_input(&ev, &config.control(*kind).selector).map(|input| (*kind, input))
        });
        if let Some((kind, input)) = matched {
            toggle(kind, input, config.clone());
        }
    });
    document.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn bind_direct(kind: ControlKind, input: HtmlInputElement, config: Rc<InteractionConfig>) -> Result<(), InteractionError> {
    let target = input.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        toggle(kind, target.clone(), config.clone());
    });
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn toggle(kind: ControlKind, input: HtmlInputElement, config: Rc<InteractionConfig>) {
    if let Err(e) = start(kind, input, config) {
        console::error(kind.tag(), e.to_string());
    }
}

/// Synchronous half: everything up to the request runs inside the event callback
fn start(kind: ControlKind, input: HtmlInputElement, config: Rc<InteractionConfig>) -> Result<(), InteractionError> {
    let form = dom::enclosing_form(&input)?;
    let token = dom::csrf_token(&document(), &config.csrf_field)?;
    let submission = FormSubmission::capture(&form, &config.csrf_field, &token)?;
    let target = format!("{} (pk={})", submission.url(), submission.pk().unwrap_or("-"));

    let on_failure = OnFailure::from_revert_flag(config.control(kind).revert_on_failure);
    let indicators = ControlIndicators::new(kind, form.into(), config);
    let pending = optimistic_toggle::begin(input, indicators, on_failure);
    console::debug(kind.tag(), format!("{} checked={}", target, pending.checked()));

    spawn_local(async move {
        match pending.settle(commands::submit(kind, submission)).await {
            Outcome::Confirmed => console::debug(kind.tag(), format!("{} confirmed", target)),
            Outcome::Kept(e) => console::error(kind.tag(), format!("{} failed: {}", target, e)),
            Outcome::Reverted(e) => console::error(kind.tag(), format!("{} failed, reverted: {}", target, e)),
        }
    });
    Ok(())
}
