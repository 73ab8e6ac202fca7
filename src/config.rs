//! Page Configuration
//!
//! Selectors, class names and labels for the toggle controls. The defaults
//! match the server-rendered markup; a page can override any part of them
//! with a JSON object in `<script type="application/json" id="viewy-interactions-config">`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use web_sys::Document;

use crate::console;
use crate::models::ControlKind;

pub const CONFIG_ELEMENT_ID: &str = "viewy-interactions-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractionConfig {
    /// Name of the hidden CSRF input, also used as the submitted field name
    pub csrf_field: String,
    /// Log lifecycle detail to the console
    pub debug: bool,
    pub favorite: ControlConfig,
    pub mini_follow: ControlConfig,
    pub follow: ControlConfig,
}

/// How a control's change listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Binding {
    /// One document listener; covers controls inserted after load
    Delegated,
    /// A listener on each control present at load
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlConfig {
    pub selector: String,
    pub binding: Binding,
    pub indicator: Indicator,
    /// Count element inside the form, adjusted by one on toggle
    pub counter: Option<String>,
    pub revert_on_failure: bool,
}

/// The element whose classes (and optionally text) flip with the toggle.
///
/// `on_target` finds it while the toggle is on, `off_target` while off.
/// Both are looked up inside the control's form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Indicator {
    pub on_target: String,
    pub off_target: String,
    pub on_classes: Vec<String>,
    pub off_classes: Vec<String>,
    pub on_text: Option<String>,
    pub off_text: Option<String>,
}

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl ControlConfig {
    pub fn favorite() -> Self {
        Self {
            selector: ".like-button".to_string(),
            binding: Binding::Delegated,
            indicator: Indicator {
                on_target: ".fa-heart".to_string(),
                off_target: ".fa-heart".to_string(),
                on_classes: classes(&["liked", "fa-solid"]),
                off_classes: classes(&["not-liked", "fa-regular"]),
                on_text: None,
                off_text: None,
            },
            counter: Some(".favorite-count".to_string()),
            revert_on_failure: false,
        }
    }

    pub fn mini_follow() -> Self {
        Self {
            selector: ".mini-follow-button".to_string(),
            binding: Binding::Delegated,
            indicator: Indicator {
                on_target: ".fa-solid.fa-check".to_string(),
                off_target: ".fa-solid.fa-plus".to_string(),
                on_classes: classes(&["fa-check"]),
                off_classes: classes(&["fa-plus"]),
                on_text: None,
                off_text: None,
            },
            counter: None,
            revert_on_failure: false,
        }
    }

    pub fn follow() -> Self {
        Self {
            selector: ".follow-button".to_string(),
            binding: Binding::Direct,
            indicator: Indicator {
                on_target: ".followed".to_string(),
                off_target: ".follow".to_string(),
                on_classes: classes(&["followed"]),
                off_classes: classes(&["follow"]),
                on_text: Some("フォロー中".to_string()),
                off_text: Some("フォローする".to_string()),
            },
            counter: Some(".follow-count".to_string()),
            revert_on_failure: true,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            csrf_field: "csrfmiddlewaretoken".to_string(),
            debug: false,
            favorite: ControlConfig::favorite(),
            mini_follow: ControlConfig::mini_follow(),
            follow: ControlConfig::follow(),
        }
    }
}

impl InteractionConfig {
    /// Defaults with a JSON object deep-merged over them
    pub fn from_overrides(json: &str) -> Result<Self, serde_json::Error> {
        let patch: Value = serde_json::from_str(json)?;
        let mut base = serde_json::to_value(Self::default())?;
        merge(&mut base, patch);
        serde_json::from_value(base)
    }

    pub fn control(&self, kind: ControlKind) -> &ControlConfig {
        match kind {
            ControlKind::Favorite => &self.favorite,
            ControlKind::MiniFollow => &self.mini_follow,
            ControlKind::Follow => &self.follow,
        }
    }
}

/// Objects merge key by key, anything else replaces
fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Read the page's config element, falling back to defaults
pub fn load(document: &Document) -> InteractionConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return InteractionConfig::default();
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return InteractionConfig::default();
    }

    match InteractionConfig::from_overrides(&text) {
        Ok(config) => config,
        Err(e) => {
            console::error("Config", format!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e));
            InteractionConfig::default()
        }
    }
}
