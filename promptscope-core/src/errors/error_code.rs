//! Stable machine-readable error codes.

/// Maps every error variant to a stable string code.
///
/// Collaborator layers (CLI menus, dashboards, desktop shells) key their
/// user-facing messages off these codes, so they must never change once
/// released.
pub trait PromptscopeErrorCode {
    fn error_code(&self) -> &'static str;
}
