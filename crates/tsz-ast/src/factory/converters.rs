//! Node converters: reshape one node form into an equivalent other form
//! (binding pattern to assignment pattern, declaration to expression, ...).

use super::NodeFactory;
use crate::base::NodeIndex;
use crate::node::{BindingElementData, ClassData, FunctionData, ListData};
use crate::syntax_kind::SyntaxKind;

pub trait NodeConverters: Send + Sync {
    /// Wrap a concise arrow body in `{ return body; }`; blocks pass through.
    fn convert_to_function_block(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
        multi_line: bool,
    ) -> NodeIndex;
    fn convert_to_function_expression(&self, factory: &mut NodeFactory, node: NodeIndex)
    -> NodeIndex;
    fn convert_to_class_expression(&self, factory: &mut NodeFactory, node: NodeIndex) -> NodeIndex;
    fn convert_to_array_assignment_element(
        &self,
        factory: &mut NodeFactory,
        element: NodeIndex,
    ) -> NodeIndex;
    fn convert_to_object_assignment_element(
        &self,
        factory: &mut NodeFactory,
        element: NodeIndex,
    ) -> NodeIndex;
    fn convert_to_assignment_pattern(&self, factory: &mut NodeFactory, node: NodeIndex)
    -> NodeIndex;
    fn convert_to_object_assignment_pattern(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
    ) -> NodeIndex;
    fn convert_to_array_assignment_pattern(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
    ) -> NodeIndex;
    fn convert_to_assignment_element_target(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
    ) -> NodeIndex;
}

#[derive(Debug, Default)]
pub struct DefaultNodeConverters;

pub static DEFAULT_NODE_CONVERTERS: DefaultNodeConverters = DefaultNodeConverters;

/// Converters for factories created with `NO_NODE_CONVERTERS`; every entry
/// point panics.
#[derive(Debug, Default)]
pub struct NullNodeConverters;

pub static NULL_NODE_CONVERTERS: NullNodeConverters = NullNodeConverters;

fn finish_conversion(factory: &mut NodeFactory, converted: NodeIndex, source: NodeIndex) -> NodeIndex {
    factory.set_text_range_from(converted, source);
    factory.set_original_node(converted, source)
}

impl NodeConverters for DefaultNodeConverters {
    fn convert_to_function_block(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
        multi_line: bool,
    ) -> NodeIndex {
        if factory.arena().is_kind(node, SyntaxKind::Block) {
            return node;
        }
        let return_statement = factory.create_return_statement(node);
        factory.set_text_range_from(return_statement, node);
        let statements = factory.node_list(vec![return_statement]);
        let body = factory.create_block(statements, multi_line);
        factory.set_text_range_from(body, node)
    }

    #[track_caller]
    fn convert_to_function_expression(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
    ) -> NodeIndex {
        let data: FunctionData = factory.data_of(node, &[SyntaxKind::FunctionDeclaration]);
        if data.body.is_none() {
            panic!("cannot convert a function declaration without a body");
        }
        let expression = factory.create_function_expression(
            data.modifiers,
            data.asterisk_token,
            data.name,
            data.type_parameters,
            data.parameters,
            data.type_annotation,
            data.body,
        );
        finish_conversion(factory, expression, node)
    }

    fn convert_to_class_expression(&self, factory: &mut NodeFactory, node: NodeIndex) -> NodeIndex {
        let data: ClassData = factory.data_of(node, &[SyntaxKind::ClassDeclaration]);
        let expression = factory.create_class_expression(
            data.modifiers,
            data.name,
            data.type_parameters,
            data.heritage_clauses,
            data.members,
        );
        finish_conversion(factory, expression, node)
    }

    #[track_caller]
    fn convert_to_array_assignment_element(
        &self,
        factory: &mut NodeFactory,
        element: NodeIndex,
    ) -> NodeIndex {
        if !factory.arena().is_kind(element, SyntaxKind::BindingElement) {
            return element;
        }
        let data: BindingElementData = factory.data_of(element, &[SyntaxKind::BindingElement]);
        if data.dot_dot_dot_token {
            if data.initializer.is_some() {
                panic!("a rest element cannot have an initializer");
            }
            let spread = factory.create_spread_element(data.name);
            return finish_conversion(factory, spread, element);
        }
        let target = self.convert_to_assignment_element_target(factory, data.name);
        let converted = if data.initializer.is_some() {
            factory.create_assignment(target, data.initializer)
        } else {
            target
        };
        finish_conversion(factory, converted, element)
    }

    #[track_caller]
    fn convert_to_object_assignment_element(
        &self,
        factory: &mut NodeFactory,
        element: NodeIndex,
    ) -> NodeIndex {
        if !factory.arena().is_kind(element, SyntaxKind::BindingElement) {
            return element;
        }
        let data: BindingElementData = factory.data_of(element, &[SyntaxKind::BindingElement]);
        if data.dot_dot_dot_token {
            if data.initializer.is_some() {
                panic!("a rest element cannot have an initializer");
            }
            let spread = factory.create_spread_assignment(data.name);
            return finish_conversion(factory, spread, element);
        }
        let converted = if data.property_name.is_some() {
            let target = self.convert_to_assignment_element_target(factory, data.name);
            let initializer = if data.initializer.is_some() {
                factory.create_assignment(target, data.initializer)
            } else {
                target
            };
            factory.create_property_assignment(data.property_name, initializer)
        } else {
            if !factory.arena().is_identifier(data.name) {
                panic!("a shorthand binding element must be named by an identifier");
            }
            factory.create_shorthand_property_assignment(data.name, data.initializer)
        };
        finish_conversion(factory, converted, element)
    }

    fn convert_to_assignment_pattern(&self, factory: &mut NodeFactory, node: NodeIndex) -> NodeIndex {
        match factory.arena().kind(node) {
            Some(SyntaxKind::ArrayBindingPattern | SyntaxKind::ArrayLiteralExpression) => {
                self.convert_to_array_assignment_pattern(factory, node)
            }
            Some(SyntaxKind::ObjectBindingPattern | SyntaxKind::ObjectLiteralExpression) => {
                self.convert_to_object_assignment_pattern(factory, node)
            }
            _ => node,
        }
    }

    fn convert_to_object_assignment_pattern(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
    ) -> NodeIndex {
        if !factory.arena().is_kind(node, SyntaxKind::ObjectBindingPattern) {
            return node;
        }
        let data: ListData = factory.data_of(node, &[SyntaxKind::ObjectBindingPattern]);
        let properties = factory
            .list_elements(Some(data.elements))
            .into_iter()
            .map(|element| self.convert_to_object_assignment_element(factory, element))
            .collect::<Vec<_>>();
        let properties = factory.node_list(properties);
        let literal = factory.create_object_literal_expression(properties, false);
        finish_conversion(factory, literal, node)
    }

    fn convert_to_array_assignment_pattern(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
    ) -> NodeIndex {
        if !factory.arena().is_kind(node, SyntaxKind::ArrayBindingPattern) {
            return node;
        }
        let data: ListData = factory.data_of(node, &[SyntaxKind::ArrayBindingPattern]);
        let elements = factory
            .list_elements(Some(data.elements))
            .into_iter()
            .map(|element| self.convert_to_array_assignment_element(factory, element))
            .collect::<Vec<_>>();
        let elements = factory.node_list(elements);
        let literal = factory.create_array_literal_expression(elements, false);
        finish_conversion(factory, literal, node)
    }

    fn convert_to_assignment_element_target(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
    ) -> NodeIndex {
        if factory.arena().is_binding_pattern(node) {
            self.convert_to_assignment_pattern(factory, node)
        } else {
            node
        }
    }
}

impl NodeConverters for NullNodeConverters {
    fn convert_to_function_block(&self, _: &mut NodeFactory, _: NodeIndex, _: bool) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_function_expression(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_class_expression(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_array_assignment_element(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_object_assignment_element(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_assignment_pattern(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_object_assignment_pattern(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_array_assignment_pattern(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }

    fn convert_to_assignment_element_target(&self, _: &mut NodeFactory, _: NodeIndex) -> NodeIndex {
        panic!("node converters are disabled for this factory")
    }
}
