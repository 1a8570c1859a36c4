//! JSX elements, fragments, attributes and embedded expressions.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::TransformFlags;
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl NodeFactory {
    fn create_jsx_container(
        &mut self,
        kind: SyntaxKind,
        opening_element: NodeIndex,
        children: NodeList,
        closing_element: NodeIndex,
    ) -> NodeIndex {
        let children = self.create_node_array(children, None);
        let flags = self.child_flags(opening_element)
            | self.children_flags(Some(children))
            | self.child_flags(closing_element)
            | TransformFlags::CONTAINS_JSX;
        let node = self.alloc(
            kind,
            JsxElementData {
                opening_element,
                children,
                closing_element,
            },
        );
        self.finish(node, flags)
    }

    fn update_jsx_container(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        opening_element: NodeIndex,
        children: NodeList,
        closing_element: NodeIndex,
    ) -> NodeIndex {
        let data: JsxElementData = self.data_of(node, &[kind]);
        if data.opening_element == opening_element
            && data.children == children
            && data.closing_element == closing_element
        {
            return node;
        }
        let updated = self.create_jsx_container(kind, opening_element, children, closing_element);
        self.update(updated, node)
    }

    pub fn create_jsx_element(
        &mut self,
        opening_element: NodeIndex,
        children: NodeList,
        closing_element: NodeIndex,
    ) -> NodeIndex {
        self.create_jsx_container(SyntaxKind::JsxElement, opening_element, children, closing_element)
    }

    pub fn update_jsx_element(
        &mut self,
        node: NodeIndex,
        opening_element: NodeIndex,
        children: NodeList,
        closing_element: NodeIndex,
    ) -> NodeIndex {
        self.update_jsx_container(
            node,
            SyntaxKind::JsxElement,
            opening_element,
            children,
            closing_element,
        )
    }

    pub fn create_jsx_fragment(
        &mut self,
        opening_fragment: NodeIndex,
        children: NodeList,
        closing_fragment: NodeIndex,
    ) -> NodeIndex {
        self.create_jsx_container(SyntaxKind::JsxFragment, opening_fragment, children, closing_fragment)
    }

    pub fn update_jsx_fragment(
        &mut self,
        node: NodeIndex,
        opening_fragment: NodeIndex,
        children: NodeList,
        closing_fragment: NodeIndex,
    ) -> NodeIndex {
        self.update_jsx_container(
            node,
            SyntaxKind::JsxFragment,
            opening_fragment,
            children,
            closing_fragment,
        )
    }

    pub fn create_jsx_opening_fragment(&mut self) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::JsxOpeningFragment);
        self.finish(node, TransformFlags::CONTAINS_JSX)
    }

    pub fn create_jsx_closing_fragment(&mut self) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::JsxClosingFragment);
        self.finish(node, TransformFlags::CONTAINS_JSX)
    }

    fn create_jsx_opening_like(
        &mut self,
        kind: SyntaxKind,
        tag_name: NodeIndex,
        type_arguments: Option<NodeList>,
        attributes: NodeIndex,
    ) -> NodeIndex {
        let type_arguments = self.as_node_array(type_arguments);
        let mut flags = self.child_flags(tag_name)
            | self.children_flags(type_arguments)
            | self.child_flags(attributes)
            | TransformFlags::CONTAINS_JSX;
        if type_arguments.is_some() {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let node = self.alloc(
            kind,
            JsxOpeningData {
                tag_name,
                type_arguments,
                attributes,
            },
        );
        self.finish(node, flags)
    }

    fn update_jsx_opening_like(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        tag_name: NodeIndex,
        type_arguments: Option<NodeList>,
        attributes: NodeIndex,
    ) -> NodeIndex {
        let data: JsxOpeningData = self.data_of(node, &[kind]);
        if data.tag_name == tag_name
            && data.type_arguments == type_arguments
            && data.attributes == attributes
        {
            return node;
        }
        let updated = self.create_jsx_opening_like(kind, tag_name, type_arguments, attributes);
        self.update(updated, node)
    }

    pub fn create_jsx_self_closing_element(
        &mut self,
        tag_name: NodeIndex,
        type_arguments: Option<NodeList>,
        attributes: NodeIndex,
    ) -> NodeIndex {
        self.create_jsx_opening_like(
            SyntaxKind::JsxSelfClosingElement,
            tag_name,
            type_arguments,
            attributes,
        )
    }

    pub fn update_jsx_self_closing_element(
        &mut self,
        node: NodeIndex,
        tag_name: NodeIndex,
        type_arguments: Option<NodeList>,
        attributes: NodeIndex,
    ) -> NodeIndex {
        self.update_jsx_opening_like(
            node,
            SyntaxKind::JsxSelfClosingElement,
            tag_name,
            type_arguments,
            attributes,
        )
    }

    pub fn create_jsx_opening_element(
        &mut self,
        tag_name: NodeIndex,
        type_arguments: Option<NodeList>,
        attributes: NodeIndex,
    ) -> NodeIndex {
        self.create_jsx_opening_like(
            SyntaxKind::JsxOpeningElement,
            tag_name,
            type_arguments,
            attributes,
        )
    }

    pub fn update_jsx_opening_element(
        &mut self,
        node: NodeIndex,
        tag_name: NodeIndex,
        type_arguments: Option<NodeList>,
        attributes: NodeIndex,
    ) -> NodeIndex {
        self.update_jsx_opening_like(
            node,
            SyntaxKind::JsxOpeningElement,
            tag_name,
            type_arguments,
            attributes,
        )
    }

    pub fn create_jsx_closing_element(&mut self, tag_name: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(tag_name) | TransformFlags::CONTAINS_JSX;
        let node = self.alloc(
            SyntaxKind::JsxClosingElement,
            ExpressionData {
                expression: tag_name,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_jsx_closing_element(&mut self, node: NodeIndex, tag_name: NodeIndex) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::JsxClosingElement]);
        if data.expression == tag_name {
            return node;
        }
        let updated = self.create_jsx_closing_element(tag_name);
        self.update(updated, node)
    }

    pub fn create_jsx_attributes(&mut self, properties: NodeList) -> NodeIndex {
        let properties = self.create_node_array(properties, None);
        let flags = self.children_flags(Some(properties)) | TransformFlags::CONTAINS_JSX;
        let node = self.alloc(
            SyntaxKind::JsxAttributes,
            ListData {
                elements: properties,
                multi_line: false,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_jsx_attributes(&mut self, node: NodeIndex, properties: NodeList) -> NodeIndex {
        let data: ListData = self.data_of(node, &[SyntaxKind::JsxAttributes]);
        if data.elements == properties {
            return node;
        }
        let updated = self.create_jsx_attributes(properties);
        self.update(updated, node)
    }

    pub fn create_jsx_attribute(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(name) | self.child_flags(initializer) | TransformFlags::CONTAINS_JSX;
        let node = self.alloc(
            SyntaxKind::JsxAttribute,
            PropertyAssignmentData { name, initializer },
        );
        self.finish(node, flags)
    }

    pub fn update_jsx_attribute(&mut self, node: NodeIndex, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let data: PropertyAssignmentData = self.data_of(node, &[SyntaxKind::JsxAttribute]);
        if data.name == name && data.initializer == initializer {
            return node;
        }
        let updated = self.create_jsx_attribute(name, initializer);
        self.update(updated, node)
    }

    pub fn create_jsx_spread_attribute(&mut self, expression: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(expression) | TransformFlags::CONTAINS_JSX;
        let node = self.alloc(SyntaxKind::JsxSpreadAttribute, ExpressionData { expression });
        self.finish(node, flags)
    }

    pub fn update_jsx_spread_attribute(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::JsxSpreadAttribute]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_jsx_spread_attribute(expression);
        self.update(updated, node)
    }

    pub fn create_jsx_expression(&mut self, dot_dot_dot_token: bool, expression: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(expression) | TransformFlags::CONTAINS_JSX;
        let node = self.alloc(
            SyntaxKind::JsxExpression,
            JsxExpressionData {
                dot_dot_dot_token,
                expression,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_jsx_expression(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let data: JsxExpressionData = self.data_of(node, &[SyntaxKind::JsxExpression]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_jsx_expression(data.dot_dot_dot_token, expression);
        self.update(updated, node)
    }

    /// `namespace:name` tag or attribute name.
    pub fn create_jsx_namespaced_name(&mut self, namespace: NodeIndex, name: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(namespace) | self.child_flags(name) | TransformFlags::CONTAINS_JSX;
        let node = self.alloc(
            SyntaxKind::JsxNamespacedName,
            QualifiedNameData {
                left: namespace,
                right: name,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_jsx_namespaced_name(
        &mut self,
        node: NodeIndex,
        namespace: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        let data: QualifiedNameData = self.data_of(node, &[SyntaxKind::JsxNamespacedName]);
        if data.left == namespace && data.right == name {
            return node;
        }
        let updated = self.create_jsx_namespaced_name(namespace, name);
        self.update(updated, node)
    }
}
