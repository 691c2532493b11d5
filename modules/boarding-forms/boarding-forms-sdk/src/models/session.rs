/// Per-call session context.
///
/// Carries the caller's admin-mode flag explicitly instead of reading it from
/// process-wide state. Custom form field configuration requires admin mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    admin: bool,
}

impl SessionContext {
    #[must_use]
    pub const fn new(admin: bool) -> Self {
        Self { admin }
    }

    #[must_use]
    pub const fn admin() -> Self {
        Self { admin: true }
    }

    #[must_use]
    pub const fn regular() -> Self {
        Self { admin: false }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }
}
