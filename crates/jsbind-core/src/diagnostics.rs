//! Advisory diagnostics produced while extracting bindings.
//!
//! Diagnostics never abort processing. Each one is recorded in a
//! [`Diagnostics`] collection for the caller and mirrored to `tracing` as a
//! warning with structured fields.

use std::fmt;

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A bound class names a base class that is not in the registry.
    UnresolvedBase {
        /// The derived class being bound.
        class: String,
        /// The base class as written in the header.
        base: String,
    },
}

impl Diagnostic {
    pub fn unresolved_base(class: impl Into<String>, base: impl Into<String>) -> Self {
        Diagnostic::UnresolvedBase {
            class: class.into(),
            base: base.into(),
        }
    }

    /// The class the diagnostic is about.
    pub fn class(&self) -> &str {
        match self {
            Diagnostic::UnresolvedBase { class, .. } => class,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedBase { class, base } => {
                write!(f, "{class} baseclass {base} not in bindings")
            }
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it through `tracing`.
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::UnresolvedBase { class, base } => {
                tracing::warn!(class = %class, base = %base, "baseclass not in bindings");
            }
        }
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.entries {
            writeln!(f, "warning: {diagnostic}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
