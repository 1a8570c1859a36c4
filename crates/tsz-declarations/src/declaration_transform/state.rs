//! Mutable per-file state threaded through the declaration transform.

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use tsz_ast::NodeIndex;
use tsz_common::diagnostics::DiagnosticMessage;

use crate::diagnostics::{AccessibilityDiagnosticContext, PendingDiagnostic};
use crate::resolver::{SymbolAccessibility, SymbolAccessibilityResult};

pub(crate) struct EmitState {
    /// File whose statements are being transformed.
    pub current_source_file: NodeIndex,
    pub file_name: String,
    /// Scope that type references are resolved from.
    pub enclosing_declaration: NodeIndex,

    /// Top-level declarations get a `declare` modifier.
    pub needs_declare: bool,
    pub is_bundled_emit: bool,
    /// The output contains an import, export or `export`-modified statement.
    pub result_has_external_module_indicator: bool,
    /// A non-exported statement survived in a scope that exports by default.
    pub needs_scope_fix_marker: bool,
    /// The current scope already has an export declaration or assignment.
    pub result_has_scope_marker: bool,
    /// Keep the current diagnostic context for the whole subtree.
    pub suppress_new_diagnostic_contexts: bool,

    /// Alias statements waiting to be painted visible, oldest first.
    pub late_marked_statements: IndexSet<NodeIndex, FxBuildHasher>,
    /// Statements already painted; these are never queued again.
    pub late_painted: FxHashSet<NodeIndex>,
    /// Transformed output per top-level statement. An empty vector elides
    /// the statement.
    pub late_statement_replacement_map: FxHashMap<NodeIndex, Vec<NodeIndex>>,

    pub diagnostic_context: Option<AccessibilityDiagnosticContext>,
    pub error_name_node: NodeIndex,
    pub error_fallback_node: NodeIndex,
    /// Display name of the declaration at the error location.
    pub error_declaration_name: String,
    pub pending_diagnostics: Vec<PendingDiagnostic>,
}

impl EmitState {
    pub fn new(source_file: NodeIndex, file_name: &str, is_bundled_emit: bool) -> Self {
        EmitState {
            current_source_file: source_file,
            file_name: file_name.to_string(),
            enclosing_declaration: source_file,
            needs_declare: true,
            is_bundled_emit,
            result_has_external_module_indicator: false,
            needs_scope_fix_marker: false,
            result_has_scope_marker: false,
            suppress_new_diagnostic_contexts: false,
            late_marked_statements: IndexSet::default(),
            late_painted: FxHashSet::default(),
            late_statement_replacement_map: FxHashMap::default(),
            diagnostic_context: None,
            error_name_node: NodeIndex::NONE,
            error_fallback_node: NodeIndex::NONE,
            error_declaration_name: String::new(),
            pending_diagnostics: Vec::new(),
        }
    }

    /// Queue alias statements for painting or record an accessibility error.
    /// Returns `true` when an error was recorded.
    pub fn handle_symbol_accessibility_error(&mut self, result: SymbolAccessibilityResult) -> bool {
        match result.accessibility {
            SymbolAccessibility::Accessible => {
                for alias in result.aliases_to_make_visible {
                    if !self.late_painted.contains(&alias) {
                        tracing::trace!(alias = alias.0, "queueing alias for late painting");
                        self.late_marked_statements.insert(alias);
                    }
                }
                false
            }
            SymbolAccessibility::NotResolved => false,
            SymbolAccessibility::NotAccessible | SymbolAccessibility::CannotBeNamed => {
                let diagnostic = match &self.diagnostic_context {
                    Some(context) => context.diagnostic_for(&result),
                    None => AccessibilityDiagnosticContext::for_file(self.current_source_file)
                        .diagnostic_for(&result),
                };
                tracing::debug!(
                    code = diagnostic.message.code,
                    symbol = result.error_symbol_name.as_deref().unwrap_or_default(),
                    "symbol is not accessible from declaration output"
                );
                self.pending_diagnostics.push(diagnostic);
                true
            }
        }
    }

    /// Report at the current error name, or the fallback node when the
    /// declaration has no name. Dropped when neither is set.
    pub fn report_at_error_node(&mut self, message: &'static DiagnosticMessage, args: Vec<String>) {
        let node = if self.error_name_node.is_some() {
            self.error_name_node
        } else {
            self.error_fallback_node
        };
        if node.is_some() {
            self.pending_diagnostics.push(PendingDiagnostic::new(node, message, args));
        }
    }
}
