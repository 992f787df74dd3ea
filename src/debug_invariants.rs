//! Structural self-checks for complexes, flag spaces, groups and tables.
//!
//! Builders call [`debug_invariants!`](crate::debug_invariants) on their
//! result; the check compiles away unless `debug_assertions` or one of the
//! `strict-invariants` / `check-invariants` features is on. Readers that take
//! untrusted input call [`DebugInvariants::validated`] instead, which always
//! runs.

use crate::flag_error::FlagError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Panic on a broken invariant when invariant checking is enabled.
    fn debug_assert_invariants(&self);

    /// Validate invariants and return the first violation.
    fn validate_invariants(&self) -> Result<(), FlagError>;

    /// Run [`validate_invariants`](Self::validate_invariants) unconditionally
    /// and hand `self` back on success.
    fn validated(self) -> Result<Self, FlagError>
    where
        Self: Sized,
    {
        self.validate_invariants()?;
        Ok(self)
    }
}

/// Run a fallible check and panic with `ctx` when invariant checking is
/// enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
