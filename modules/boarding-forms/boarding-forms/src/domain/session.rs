//! Editing session state: unsaved-change tracking and the admin mode flag.

use boarding_forms_sdk::SessionContext;
use tokio::sync::watch;

/// A value being edited together with the snapshot it was loaded from.
///
/// The session owns the only mutable copy, so every change goes through
/// [`EditSession::value_mut`].
#[derive(Debug, Clone)]
pub struct EditSession<T> {
    baseline: T,
    current: T,
}

impl<T: Clone + PartialEq> EditSession<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            baseline: value.clone(),
            current: value,
        }
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        &self.current
    }

    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.current
    }

    /// Whether the value differs from the last loaded or saved snapshot.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.current != self.baseline
    }

    /// Replaces both the value and the baseline, e.g. with what the store
    /// returned from a save.
    pub fn mark_saved(&mut self, saved: T) {
        self.baseline = saved.clone();
        self.current = saved;
    }

    /// Drops edits and returns to the baseline.
    pub fn discard(&mut self) {
        self.current = self.baseline.clone();
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.current
    }
}

/// Process-wide admin mode switch.
///
/// One writer toggles the flag; any number of subscribers observe the latest
/// value. Calls into the service take a [`SessionContext`] snapshot instead
/// of reading the flag themselves.
#[derive(Debug)]
pub struct AdminMode {
    tx: watch::Sender<bool>,
}

impl Default for AdminMode {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AdminMode {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        let (tx, _rx) = watch::channel(enabled);
        Self { tx }
    }

    /// Publishes a new value. Subscribers are only woken when it changes.
    pub fn set(&self, enabled: bool) {
        self.tx.send_if_modified(|current| {
            if *current == enabled {
                false
            } else {
                *current = enabled;
                true
            }
        });
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Snapshot of the current flag for a service call.
    #[must_use]
    pub fn context(&self) -> SessionContext {
        SessionContext::new(self.is_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_changes_tracking() {
        let mut session = EditSession::new(vec!["https://example.com".to_owned()]);
        assert!(!session.has_unsaved_changes());

        session.value_mut().push("localhost:4200".to_owned());
        assert!(session.has_unsaved_changes());

        session.value_mut().pop();
        assert!(!session.has_unsaved_changes());

        session.value_mut().clear();
        session.discard();
        assert_eq!(session.value().len(), 1);

        session.value_mut().clear();
        let saved = session.value().clone();
        session.mark_saved(saved);
        assert!(!session.has_unsaved_changes());
        assert!(session.into_value().is_empty());
    }

    #[test]
    fn test_admin_mode_context_snapshot() {
        let mode = AdminMode::default();
        let before = mode.context();
        mode.set(true);
        assert!(!before.is_admin());
        assert!(mode.context().is_admin());
        assert!(mode.is_enabled());
    }

    #[tokio::test]
    async fn test_admin_mode_subscribers_see_changes() {
        let mode = AdminMode::new(false);
        let mut rx = mode.subscribe();
        assert!(!*rx.borrow_and_update());

        mode.set(false);
        assert!(!rx.has_changed().unwrap());

        mode.set(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());
    }
}
