//! Results of an extraction pass.

use jsbind_core::{Diagnostics, Rejection};

/// Counters collected while walking one header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Registered classes found and bound into the module.
    pub classes_bound: usize,
    /// Classes skipped because they are not registered.
    pub classes_skipped: usize,
    /// Base classes dropped because they are not registered.
    pub bases_unresolved: usize,
    /// Member functions appended to a class.
    pub functions_bound: usize,
    /// Public member functions that were rejected.
    pub functions_rejected: usize,
    /// Free scalar declarations registered as constants.
    pub constants_registered: usize,
}

/// Output of the header pass.
///
/// The binding model itself lives in the registry and module the pass was
/// given; this is the summary of what happened to them.
#[derive(Debug, Default)]
pub struct ExtractionOutput {
    /// Header that was processed.
    pub header: String,
    pub stats: ExtractionStats,
    /// Why each rejected function was left unbound, in visit order.
    pub rejections: Vec<Rejection>,
    /// Advisory diagnostics (unresolved base classes).
    pub diagnostics: Diagnostics,
}

impl ExtractionOutput {
    /// Check if nothing was dropped with a diagnostic.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Find the rejection for a function by name.
    pub fn rejection_for(&self, function: &str) -> Option<&Rejection> {
        self.rejections.iter().find(|r| r.function() == function)
    }
}
