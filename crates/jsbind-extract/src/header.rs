//! Header Pass - walks one translation unit into the binding model.
//!
//! The pass dispatches each symbol explicitly and uses the returned
//! [`Traversal`] to decide whether to walk its children.
//!
//! ## Dispatch
//!
//! | Symbol       | Handling                          | Traversal      |
//! |--------------|-----------------------------------|----------------|
//! | Namespace    | none                              | `Descend`      |
//! | Class        | [`ClassVisitor`]                  | `SkipChildren` |
//! | Declaration  | [`DeclarationVisitor`]            | `Descend`      |
//! | Template     | rejected                          | `SkipChildren` |
//! | Enum         | handled by the discovery pre-pass | `SkipChildren` |
//! | Function     | free functions are not bound      | `SkipChildren` |
//! | Argument     | none                              | `SkipChildren` |

use jsbind_ast::{NamespaceDecl, Symbol, TranslationUnit};

use crate::class::ClassVisitor;
use crate::context::ExtractionContext;
use crate::declaration::DeclarationVisitor;
use crate::names::NameResolver;
use crate::output::ExtractionOutput;
use crate::traversal::Traversal;

/// Walks a translation unit and binds what it finds.
pub struct HeaderPass<'c, 'a> {
    ctx: &'c mut ExtractionContext<'a>,
}

impl<'c, 'a> HeaderPass<'c, 'a> {
    pub fn new(ctx: &'c mut ExtractionContext<'a>) -> Self {
        Self { ctx }
    }

    /// Run the pass over a whole translation unit.
    pub fn run(self, unit: &TranslationUnit<'_>) -> ExtractionOutput {
        self.run_while(unit, || true)
    }

    /// Run the pass, checking `keep_going` before each top-level symbol of
    /// the global namespace. Once it returns `false` the remaining symbols
    /// are left unvisited.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run_while(
        mut self,
        unit: &TranslationUnit<'_>,
        mut keep_going: impl FnMut() -> bool,
    ) -> ExtractionOutput {
        self.ctx.begin_header(unit.file_name);
        tracing::debug!(
            header = %unit.file_name,
            module = %self.ctx.module().name,
            "extracting bindings"
        );

        for symbol in unit.symbols() {
            if !keep_going() {
                tracing::debug!(header = %unit.file_name, "extraction stopped early");
                break;
            }
            self.walk(symbol);
        }

        let output = self.ctx.finish();
        tracing::debug!(
            header = %output.header,
            classes = output.stats.classes_bound,
            functions = output.stats.functions_bound,
            rejected = output.stats.functions_rejected,
            constants = output.stats.constants_registered,
            "extraction finished"
        );
        output
    }

    /// Visit a symbol and, if it asks for it, its children.
    pub fn walk(&mut self, symbol: &Symbol<'_>) {
        if self.visit(symbol).descends() {
            for child in Self::children(symbol) {
                self.walk(child);
            }
        }
    }

    /// Dispatch a single symbol.
    pub fn visit(&mut self, symbol: &Symbol<'_>) -> Traversal {
        match symbol {
            Symbol::Namespace(ns) => self.visit_namespace(ns),
            Symbol::Class(class) => ClassVisitor::new(&mut *self.ctx).visit(class),
            Symbol::Declaration(decl) => DeclarationVisitor::new(&mut *self.ctx).visit(decl),
            Symbol::Template(_) => {
                tracing::trace!("skipping template");
                Traversal::SkipChildren
            }
            Symbol::Enum(_) | Symbol::Function(_) | Symbol::Argument(_) => Traversal::SkipChildren,
        }
    }

    fn visit_namespace(&mut self, ns: &NamespaceDecl<'_>) -> Traversal {
        tracing::trace!(namespace = %NameResolver::resolve_opt(ns.name), "entering namespace");
        Traversal::Descend
    }

    fn children<'s, 'ast>(symbol: &'s Symbol<'ast>) -> &'s [Symbol<'ast>] {
        match symbol {
            Symbol::Namespace(ns) => ns.members,
            Symbol::Class(_)
            | Symbol::Function(_)
            | Symbol::Declaration(_)
            | Symbol::Argument(_)
            | Symbol::Template(_)
            | Symbol::Enum(_) => &[],
        }
    }
}
