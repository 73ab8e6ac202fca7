//! DOM Helpers

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement};

use crate::error::InteractionError;

/// The input an event came from, if it matches `selector`
pub fn matching_input(event: &Event, selector: &str) -> Option<HtmlInputElement> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    if !element.matches(selector).unwrap_or(false) {
        return None;
    }
    element.dyn_into::<HtmlInputElement>().ok()
}

/// All inputs in the document matching `selector`
pub fn inputs_matching(document: &Document, selector: &str) -> Result<Vec<HtmlInputElement>, InteractionError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

pub fn enclosing_form(element: &Element) -> Result<HtmlFormElement, InteractionError> {
    element
        .closest("form")?
        .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
        .ok_or_else(|| InteractionError::MissingElement("form".to_string()))
}

/// Value of the page's hidden CSRF input
pub fn csrf_token(document: &Document, field: &str) -> Result<String, InteractionError> {
    document
        .query_selector(&format!("[name={}]", field))?
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or_else(|| InteractionError::MissingCsrfToken(field.to_string()))
}

pub fn find_in(root: &Element, selector: &str) -> Result<Option<Element>, InteractionError> {
    Ok(root.query_selector(selector)?)
}

pub fn swap_classes(element: &Element, add: &[String], remove: &[String]) -> Result<(), InteractionError> {
    let list = element.class_list();
    for name in remove {
        list.remove_1(name)?;
    }
    for name in add {
        list.add_1(name)?;
    }
    Ok(())
}

enum Saved {
    Classes(Element, String),
    Text(Element, Option<String>),
}

/// Exact pre-toggle state of the elements an optimistic update touched
#[derive(Default)]
pub struct Snapshot(Vec<Saved>);

impl Snapshot {
    pub fn save_classes(&mut self, element: &Element) {
        self.0.push(Saved::Classes(element.clone(), element.class_name()));
    }

    pub fn save_text(&mut self, element: &Element) {
        self.0.push(Saved::Text(element.clone(), element.text_content()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Put everything back, latest change first
    pub fn restore(self) {
        for saved in self.0.into_iter().rev() {
            match saved {
                Saved::Classes(element, class_name) => element.set_class_name(&class_name),
                Saved::Text(element, text) => element.set_text_content(text.as_deref()),
            }
        }
    }
}
