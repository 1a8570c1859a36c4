use tsz_ast::NodeIndex;
use tsz_common::diagnostics::diagnostic_messages as msg;

use super::state::EmitState;
use crate::resolver::{EmitResolver, SymbolId, SymbolMeaning, SymbolTracker};

/// Symbol tracker handed to the resolver while it serializes a type.
///
/// Holds only the emit state, so it can be borrowed next to the factory.
pub(crate) struct DeclarationTracker<'t> {
    pub resolver: &'t dyn EmitResolver,
    pub state: &'t mut EmitState,
}

impl DeclarationTracker<'_> {
    fn declaration_name(&self) -> String {
        self.state.error_declaration_name.clone()
    }
}

impl SymbolTracker for DeclarationTracker<'_> {
    fn track_symbol(
        &mut self,
        symbol: SymbolId,
        enclosing_declaration: NodeIndex,
        meaning: SymbolMeaning,
    ) -> bool {
        let result = self
            .resolver
            .is_symbol_accessible(symbol, enclosing_declaration, meaning, true);
        self.state.handle_symbol_accessibility_error(result)
    }

    fn report_inaccessible_this_error(&mut self) {
        let name = self.declaration_name();
        self.state.report_at_error_node(
            &msg::THE_INFERRED_TYPE_OF_0_REFERENCES_AN_INACCESSIBLE_1_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY,
            vec![name, "this".to_string()],
        );
    }

    fn report_inaccessible_unique_symbol_error(&mut self) {
        let name = self.declaration_name();
        self.state.report_at_error_node(
            &msg::THE_INFERRED_TYPE_OF_0_REFERENCES_AN_INACCESSIBLE_1_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY,
            vec![name, "unique symbol".to_string()],
        );
    }

    fn report_cyclic_structure_error(&mut self) {
        let name = self.declaration_name();
        self.state.report_at_error_node(
            &msg::THE_INFERRED_TYPE_OF_0_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE,
            vec![name],
        );
    }

    fn report_truncation_error(&mut self) {
        self.state.report_at_error_node(
            &msg::THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH,
            Vec::new(),
        );
    }

    fn report_non_serializable_property(&mut self, property_name: &str) {
        self.state.report_at_error_node(
            &msg::THE_TYPE_OF_THIS_NODE_CANNOT_BE_SERIALIZED_BECAUSE_ITS_PROPERTY_0_CANNOT_BE_SERIALIZED,
            vec![property_name.to_string()],
        );
    }

    fn report_likely_unsafe_import_required_error(&mut self, specifier: &str) {
        let name = self.declaration_name();
        self.state.report_at_error_node(
            &msg::THE_INFERRED_TYPE_OF_0_CANNOT_BE_NAMED_WITHOUT_A_REFERENCE_TO_1_THIS_IS_LIKELY_NOT_PORTABLE,
            vec![name, specifier.to_string()],
        );
    }

    fn report_private_in_base_of_class_expression(&mut self, property_name: &str) {
        self.state.report_at_error_node(
            &msg::PROPERTY_0_OF_EXPORTED_CLASS_EXPRESSION_MAY_NOT_BE_PRIVATE_OR_PROTECTED,
            vec![property_name.to_string()],
        );
    }
}
