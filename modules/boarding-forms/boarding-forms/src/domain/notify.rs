//! Fire-and-forget user notifications.

use tracing::{error, info, warn};

/// Sink for success/warning/error messages shown to the administrator.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "boarding_forms::notify", "{message}");
    }

    fn warning(&self, message: &str) {
        warn!(target: "boarding_forms::notify", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "boarding_forms::notify", "{message}");
    }
}
