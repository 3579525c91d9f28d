//! Common error infrastructure for encounter-core.
//!
//! Domain-specific errors (e.g. [`ActionRejection`](crate::engine::ActionRejection),
//! [`SnapshotError`](crate::snapshot::SnapshotError)) live next to the code that
//! produces them and implement [`EncounterError`] for uniform classification.
//!
//! Rejections are ordinary values: an action method either applies completely
//! or returns an error before touching any state, so every rejection is safe to
//! recover from by choosing a different action.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may pick another action (e.g. insufficient energy)
/// - **Validation**: the request referenced something that does not exist
/// - **Internal**: unexpected inconsistency, should be investigated
/// - **Fatal**: the encounter cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all encounter-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not by impact
/// - Error codes are stable identifiers; never reuse one for a different variant
pub trait EncounterError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
