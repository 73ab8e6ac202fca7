//! Optimistic side of a toggle control: indicator classes, label text and
//! counter inside the control's form.

use std::rc::Rc;

use optimistic_toggle::Optimistic;
use web_sys::Element;

use crate::config::{ControlConfig, InteractionConfig};
use crate::console;
use crate::dom::{self, Snapshot};
use crate::error::InteractionError;
use crate::indicator;
use crate::models::ControlKind;

pub struct ControlIndicators {
    kind: ControlKind,
    form: Element,
    config: Rc<InteractionConfig>,
}

impl ControlIndicators {
    pub fn new(kind: ControlKind, form: Element, config: Rc<InteractionConfig>) -> Self {
        Self { kind, form, config }
    }

    fn settings(&self) -> &ControlConfig {
        self.config.control(self.kind)
    }

    fn require(&self, selector: &str) -> Result<Element, InteractionError> {
        dom::find_in(&self.form, selector)?.ok_or_else(|| InteractionError::MissingElement(selector.to_string()))
    }

    fn flip_indicator(&self, checked: bool, snapshot: &mut Snapshot) -> Result<(), InteractionError> {
        let step = indicator::transition(&self.settings().indicator, checked);
        let target = self.require(step.target)?;

        snapshot.save_classes(&target);
        if step.text.is_some() {
            snapshot.save_text(&target);
        }

        dom::swap_classes(&target, step.add, step.remove)?;
        if let Some(text) = step.text {
            target.set_text_content(Some(text));
        }
        Ok(())
    }

    fn bump_counter(&self, checked: bool, snapshot: &mut Snapshot) -> Result<(), InteractionError> {
        let Some(selector) = self.settings().counter.as_deref() else {
            return Ok(());
        };
        let counter = self.require(selector)?;
        let text = counter.text_content().unwrap_or_default();
        let count = indicator::parse_count(&text).ok_or_else(|| InteractionError::InvalidCount(text.trim().to_string()))?;

        snapshot.save_text(&counter);
        counter.set_text_content(Some(&indicator::adjust_count(count, checked).to_string()));
        Ok(())
    }
}

impl Optimistic for ControlIndicators {
    type Snapshot = Snapshot;
    type Output = Option<i64>;

    fn apply(&self, checked: bool) -> Snapshot {
        let mut snapshot = Snapshot::default();
        // Indicator and counter are independent; a broken one leaves the other working
        if let Err(e) = self.flip_indicator(checked, &mut snapshot) {
            console::warn(self.kind.tag(), format!("Indicator not updated: {}", e));
        }
        if let Err(e) = self.bump_counter(checked, &mut snapshot) {
            console::warn(self.kind.tag(), format!("Counter not updated: {}", e));
        }
        snapshot
    }

    fn reconcile(&self, output: Option<i64>) {
        let Some(count) = output else { return };
        let Some(selector) = self.settings().counter.as_deref() else { return };
        match self.require(selector) {
            Ok(counter) => counter.set_text_content(Some(&count.to_string())),
            Err(e) => console::warn(self.kind.tag(), format!("Server count {} not shown: {}", count, e)),
        }
    }

    fn revert(&self, snapshot: Snapshot) {
        if snapshot.is_empty() {
            return;
        }
        console::debug(self.kind.tag(), "Restoring pre-toggle state");
        snapshot.restore();
    }
}
