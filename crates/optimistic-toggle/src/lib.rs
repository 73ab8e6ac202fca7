//! Optimistic Toggle
//!
//! Disable a toggle control, apply the visual change right away, then
//! reconcile or revert once the request behind it settles.
//!
//! The flow is split in two so the synchronous half can run inside the
//! event callback: [`begin`] disables the control and applies the update,
//! [`Pending::settle`] awaits the request and finishes.

use std::future::Future;

/// A checkbox-like control that can be locked while its request runs
pub trait Control {
    fn is_checked(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

impl Control for web_sys::HtmlInputElement {
    fn is_checked(&self) -> bool {
        self.checked()
    }

    fn set_disabled(&self, disabled: bool) {
        web_sys::HtmlInputElement::set_disabled(self, disabled);
    }
}

/// The visible side of a toggle
pub trait Optimistic {
    /// Whatever is needed to put the page back as it was
    type Snapshot;
    /// Authoritative data returned by the server
    type Output;

    /// Apply the change for the new `checked` state, returning what it replaced
    fn apply(&self, checked: bool) -> Self::Snapshot;
    /// Overwrite optimistic values with the server's
    fn reconcile(&self, output: Self::Output);
    /// Restore a snapshot taken by [`Optimistic::apply`]
    fn revert(&self, snapshot: Self::Snapshot);
}

/// What to do with the optimistic change when the request fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnFailure {
    /// Leave the optimistic change on the page
    #[default]
    Keep,
    /// Restore the pre-toggle snapshot
    Revert,
}

impl OnFailure {
    pub fn from_revert_flag(revert: bool) -> Self {
        if revert { Self::Revert } else { Self::Keep }
    }
}

/// How a toggle ended
#[derive(Debug, PartialEq)]
pub enum Outcome<E> {
    /// Server accepted, output reconciled
    Confirmed,
    /// Request failed, optimistic change left in place
    Kept(E),
    /// Request failed, page restored
    Reverted(E),
}

impl<E> Outcome<E> {
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Confirmed => None,
            Outcome::Kept(e) | Outcome::Reverted(e) => Some(e),
        }
    }
}

/// A toggle whose optimistic half has been applied
pub struct Pending<C, A: Optimistic> {
    control: C,
    action: A,
    checked: bool,
    snapshot: A::Snapshot,
    on_failure: OnFailure,
}

/// Lock the control and apply the optimistic change.
///
/// Must be called from the event callback itself, before any request is
/// started, so repeated activations of the same control are refused.
pub fn begin<C: Control, A: Optimistic>(control: C, action: A, on_failure: OnFailure) -> Pending<C, A> {
    control.set_disabled(true);
    let checked = control.is_checked();
    let snapshot = action.apply(checked);
    Pending {
        control,
        action,
        checked,
        snapshot,
        on_failure,
    }
}

impl<C: Control, A: Optimistic> Pending<C, A> {
    /// The toggle state the optimistic change was applied for
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Wait for `request`, unlock the control and reconcile or fail
    pub async fn settle<E, F>(self, request: F) -> Outcome<E>
    where
        F: Future<Output = Result<A::Output, E>>,
    {
        let result = request.await;
        self.control.set_disabled(false);

        match result {
            Ok(output) => {
                self.action.reconcile(output);
                Outcome::Confirmed
            }
            Err(e) => match self.on_failure {
                OnFailure::Keep => Outcome::Kept(e),
                OnFailure::Revert => {
                    self.action.revert(self.snapshot);
                    Outcome::Reverted(e)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeControl {
        checked: bool,
        disabled: Rc<Cell<bool>>,
    }

    impl Control for FakeControl {
        fn is_checked(&self) -> bool {
            self.checked
        }

        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(disabled);
        }
    }

    /// A counter display: apply adjusts by one, snapshot is the old value
    #[derive(Clone, Default)]
    struct FakeCounter {
        shown: Rc<Cell<i64>>,
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Optimistic for FakeCounter {
        type Snapshot = i64;
        type Output = i64;

        fn apply(&self, checked: bool) -> i64 {
            self.calls.borrow_mut().push("apply");
            let before = self.shown.get();
            self.shown.set(if checked { before + 1 } else { before - 1 });
            before
        }

        fn reconcile(&self, output: i64) {
            self.calls.borrow_mut().push("reconcile");
            self.shown.set(output);
        }

        fn revert(&self, snapshot: i64) {
            self.calls.borrow_mut().push("revert");
            self.shown.set(snapshot);
        }
    }

    fn counter_at(n: i64) -> FakeCounter {
        let counter = FakeCounter::default();
        counter.shown.set(n);
        counter
    }

    #[test]
    fn test_begin_disables_and_applies_synchronously() {
        let control = FakeControl { checked: true, ..Default::default() };
        let counter = counter_at(4);

        let pending = begin(control.clone(), counter.clone(), OnFailure::Keep);

        assert!(control.disabled.get());
        assert!(pending.checked());
        assert_eq!(counter.shown.get(), 5);
    }

    #[test]
    fn test_control_is_disabled_while_request_runs() {
        let control = FakeControl { checked: true, ..Default::default() };
        let disabled = control.disabled.clone();
        let pending = begin(control.clone(), counter_at(0), OnFailure::Keep);

        let outcome = block_on(pending.settle(async move {
            assert!(disabled.get());
            Ok::<_, String>(1)
        }));

        assert_eq!(outcome, Outcome::Confirmed);
        assert!(!control.disabled.get());
    }

    #[test]
    fn test_success_overwrites_optimistic_value() {
        let control = FakeControl { checked: true, ..Default::default() };
        let counter = counter_at(10);
        let pending = begin(control, counter.clone(), OnFailure::Keep);
        assert_eq!(counter.shown.get(), 11);

        let outcome = block_on(pending.settle(async { Ok::<_, String>(42) }));

        assert_eq!(outcome, Outcome::Confirmed);
        assert_eq!(counter.shown.get(), 42);
        assert_eq!(*counter.calls.borrow(), vec!["apply", "reconcile"]);
    }

    #[test]
    fn test_failure_with_keep_leaves_optimistic_value() {
        let control = FakeControl { checked: false, ..Default::default() };
        let counter = counter_at(3);
        let pending = begin(control.clone(), counter.clone(), OnFailure::Keep);

        let outcome = block_on(pending.settle(async { Err::<i64, _>("offline") }));

        assert_eq!(outcome, Outcome::Kept("offline"));
        assert_eq!(counter.shown.get(), 2);
        assert!(!control.disabled.get());
        assert_eq!(*counter.calls.borrow(), vec!["apply"]);
    }

    #[test]
    fn test_failure_with_revert_restores_snapshot() {
        let control = FakeControl { checked: true, ..Default::default() };
        let counter = counter_at(7);
        let pending = begin(control.clone(), counter.clone(), OnFailure::Revert);

        let outcome = block_on(pending.settle(async { Err::<i64, _>(500u16) }));

        assert_eq!(outcome.error(), Some(&500));
        assert_eq!(counter.shown.get(), 7);
        assert!(!control.disabled.get());
        assert_eq!(*counter.calls.borrow(), vec!["apply", "revert"]);
    }

    #[test]
    fn test_from_revert_flag() {
        assert_eq!(OnFailure::from_revert_flag(true), OnFailure::Revert);
        assert_eq!(OnFailure::from_revert_flag(false), OnFailure::Keep);
        assert_eq!(OnFailure::default(), OnFailure::Keep);
    }
}
