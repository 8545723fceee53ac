//! ExtractionContext - shared state for one extraction run.
//!
//! The context borrows the registry, the module being built and the options
//! for the duration of a run. The visitors reach everything through it; there
//! is no global state.

use jsbind_core::{BindingModule, BindingOptions, Diagnostic, Diagnostics, Rejection};
use jsbind_registry::BindingRegistry;

use crate::output::{ExtractionOutput, ExtractionStats};

/// Mutable state threaded through the visitors.
pub struct ExtractionContext<'a> {
    registry: &'a mut BindingRegistry,
    module: &'a mut BindingModule,
    options: &'a BindingOptions,

    // === Per-header state ===
    header: String,
    stats: ExtractionStats,
    rejections: Vec<Rejection>,
    diagnostics: Diagnostics,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(
        registry: &'a mut BindingRegistry,
        module: &'a mut BindingModule,
        options: &'a BindingOptions,
    ) -> Self {
        Self {
            registry,
            module,
            options,
            header: String::new(),
            stats: ExtractionStats::default(),
            rejections: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    // ==========================================================================
    // Accessors
    // ==========================================================================

    pub fn registry(&self) -> &BindingRegistry {
        &*self.registry
    }

    pub fn registry_mut(&mut self) -> &mut BindingRegistry {
        self.registry
    }

    pub fn module(&self) -> &BindingModule {
        &*self.module
    }

    pub fn module_mut(&mut self) -> &mut BindingModule {
        self.module
    }

    pub fn options(&self) -> &'a BindingOptions {
        self.options
    }

    /// Header currently being processed.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut ExtractionStats {
        &mut self.stats
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    // ==========================================================================
    // Recording
    // ==========================================================================

    /// Record a warning diagnostic.
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.warn(diagnostic);
    }

    /// Record a rejected function.
    pub fn record_rejection(&mut self, rejection: Rejection) {
        tracing::debug!(
            header = %self.header,
            function = rejection.function(),
            reason = %rejection,
            "function left unbound"
        );
        self.stats.functions_rejected += 1;
        self.rejections.push(rejection);
    }

    // ==========================================================================
    // Lifecycle
    // ==========================================================================

    /// Start processing a header, clearing per-header state.
    pub fn begin_header(&mut self, header: &str) {
        self.header = header.to_string();
        self.stats = ExtractionStats::default();
        self.rejections.clear();
        self.diagnostics = Diagnostics::new();
        self.module.add_header(header);
    }

    /// Finish the current header and hand back its summary.
    pub fn finish(&mut self) -> ExtractionOutput {
        ExtractionOutput {
            header: std::mem::take(&mut self.header),
            stats: std::mem::take(&mut self.stats),
            rejections: std::mem::take(&mut self.rejections),
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsbind_core::Unsupported;

    #[test]
    fn begin_header_records_header() {
        let mut registry = BindingRegistry::new();
        let mut module = BindingModule::new("Scene");
        let options = BindingOptions::default();
        let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);

        ctx.begin_header("Scene/Node.h");
        assert_eq!(ctx.header(), "Scene/Node.h");
        assert_eq!(ctx.module().headers(), ["Scene/Node.h".to_string()]);
    }

    #[test]
    fn finish_drains_state() {
        let mut registry = BindingRegistry::new();
        let mut module = BindingModule::new("Scene");
        let options = BindingOptions::default();
        let mut ctx = ExtractionContext::new(&mut registry, &mut module, &options);

        ctx.begin_header("Scene/Node.h");
        ctx.warn(Diagnostic::unresolved_base("Node", "Widget"));
        ctx.record_rejection(Rejection::UnsupportedReturn {
            function: "GetRaw".into(),
            cause: Unsupported::Undefined,
        });

        let output = ctx.finish();
        assert_eq!(output.header, "Scene/Node.h");
        assert_eq!(output.stats.functions_rejected, 1);
        assert_eq!(output.diagnostics.len(), 1);
        assert!(output.rejection_for("GetRaw").is_some());

        assert!(ctx.diagnostics().is_empty());
        assert_eq!(ctx.stats(), &ExtractionStats::default());
    }
}
