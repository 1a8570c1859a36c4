//! NodeArena: node headers, typed data pools and node arrays.
//!
//! The arena is also the base allocator (`BaseNodeFactory`): it creates bare
//! nodes of a kind without computing anything else. The `NodeFactory` layers
//! field validation, parenthesization and transform flags on top of it.

use crate::base::{NodeIndex, NodeList, TextRange};
use crate::flags::{NodeFlags, TransformFlags};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

/// A data struct stored in one of the arena's category pools.
pub trait PooledData: Clone + Sized {
    const CATEGORY: NodeCategory;
    fn pool(arena: &NodeArena) -> &Vec<Self>;
    fn pool_mut(arena: &mut NodeArena) -> &mut Vec<Self>;
}

macro_rules! node_pools {
    ($( $category:ident => $field:ident : $data:ty, $getter:ident; )*) => {
        /// Arena owning every node of a compilation (input and output trees).
        #[derive(Clone, Debug, Default)]
        pub struct NodeArena {
            pub nodes: Vec<Node>,
            pub extended_info: Vec<ExtendedNodeInfo>,
            pub node_arrays: Vec<NodeArray>,
            $(pub $field: Vec<$data>,)*
        }

        $(
            impl PooledData for $data {
                const CATEGORY: NodeCategory = NodeCategory::$category;

                #[inline]
                fn pool(arena: &NodeArena) -> &Vec<Self> {
                    &arena.$field
                }

                #[inline]
                fn pool_mut(arena: &mut NodeArena) -> &mut Vec<Self> {
                    &mut arena.$field
                }
            }
        )*

        impl NodeArena {
            $(
                #[inline]
                pub fn $getter(&self, node: &Node) -> Option<&$data> {
                    self.data::<$data>(node)
                }
            )*

            /// Duplicate a node's pool entry, returning the new data index.
            pub(crate) fn clone_data(&mut self, category: NodeCategory, data_index: u32) -> u32 {
                match category {
                    NodeCategory::Token => Node::NO_DATA,
                    $(
                        NodeCategory::$category => {
                            let Some(data) = self.$field.get(data_index as usize).cloned() else {
                                return Node::NO_DATA;
                            };
                            let index = self.$field.len() as u32;
                            self.$field.push(data);
                            index
                        }
                    )*
                }
            }

            pub fn clear(&mut self) {
                self.nodes.clear();
                self.extended_info.clear();
                self.node_arrays.clear();
                $(self.$field.clear();)*
            }
        }
    };
}

node_pools! {
    Identifier => identifiers: IdentifierData, get_identifier;
    Literal => literals: LiteralData, get_literal;
    QualifiedName => qualified_names: QualifiedNameData, get_qualified_name;
    Expression => expressions: ExpressionData, get_expression;
    WrappedType => wrapped_types: WrappedTypeData, get_wrapped_type;
    TypeParameter => type_parameters: TypeParameterData, get_type_parameter;
    Parameter => parameters: ParameterData, get_parameter;
    Signature => signatures: SignatureData, get_signature;
    Function => functions: FunctionData, get_function;
    PropertyDecl => property_decls: PropertyDeclData, get_property_decl;
    Class => classes: ClassData, get_class;
    TypeAlias => type_aliases: TypeAliasData, get_type_alias;
    Enum => enums: EnumData, get_enum;
    PropertyAssignment => property_assignments: PropertyAssignmentData, get_property_assignment;
    Module => modules: ModuleData, get_module;
    Block => blocks: BlockData, get_block;
    Heritage => heritage_clauses: HeritageData, get_heritage;
    TypeRef => type_refs: TypeRefData, get_type_ref;
    List => lists: ListData, get_list_data;
    ImportAttributes => import_attributes: ImportAttributesData, get_import_attributes;
    ConditionalType => conditional_types: ConditionalTypeData, get_conditional_type;
    TypeOperator => type_operators: TypeOperatorData, get_type_operator;
    IndexedAccessType => indexed_access_types: IndexedAccessTypeData, get_indexed_access_type;
    MappedType => mapped_types: MappedTypeData, get_mapped_type;
    ImportType => import_types: ImportTypeData, get_import_type;
    Template => templates: TemplateData, get_template;
    TemplateSpan => template_spans: TemplateSpanData, get_template_span;
    NamedTupleMember => named_tuple_members: NamedTupleMemberData, get_named_tuple_member;
    TypePredicate => type_predicates: TypePredicateData, get_type_predicate;
    BindingElement => binding_elements: BindingElementData, get_binding_element;
    AccessExpr => access_exprs: AccessExprData, get_access_expr;
    CallExpr => call_exprs: CallExprData, get_call_expr;
    TaggedTemplate => tagged_templates: TaggedTemplateData, get_tagged_template;
    TypeAssertion => type_assertions: TypeAssertionData, get_type_assertion;
    UnaryExpr => unary_exprs: UnaryExprData, get_unary_expr;
    BinaryExpr => binary_exprs: BinaryExprData, get_binary_expr;
    ConditionalExpr => conditional_exprs: ConditionalExprData, get_conditional_expr;
    Yield => yields: YieldData, get_yield;
    MetaProperty => meta_properties: MetaPropertyData, get_meta_property;
    VariableStatement => variables: VariableData, get_variable;
    VariableDeclaration => variable_declarations: VariableDeclarationData, get_variable_declaration;
    If => if_statements: IfStatementData, get_if_statement;
    Loop => loops: LoopData, get_loop;
    ForInOf => for_in_of: ForInOfData, get_for_in_of;
    Name => names: NameData, get_name_data;
    Labeled => labeled: LabeledData, get_labeled_statement;
    With => with_data: WithData, get_with_statement;
    Switch => switch_data: SwitchData, get_switch;
    CaseClause => case_clauses: CaseClauseData, get_case_clause;
    Try => try_data: TryData, get_try;
    CatchClause => catch_clauses: CatchClauseData, get_catch_clause;
    ImportEquals => import_equals: ImportEqualsData, get_import_equals;
    ImportDecl => import_decls: ImportDeclData, get_import_decl;
    ImportClause => import_clauses: ImportClauseData, get_import_clause;
    Specifier => specifiers: SpecifierData, get_specifier;
    ExportDecl => export_decls: ExportDeclData, get_export_decl;
    ExportAssignment => export_assignments: ExportAssignmentData, get_export_assignment;
    JsxElement => jsx_elements: JsxElementData, get_jsx_element;
    JsxOpening => jsx_openings: JsxOpeningData, get_jsx_opening;
    JsxExpression => jsx_expressions: JsxExpressionData, get_jsx_expression;
    SourceFile => source_files: SourceFileData, get_source_file;
    Bundle => bundles: BundleData, get_bundle;
}

/// Base allocator: creates nodes of a kind with no derived state.
pub trait BaseNodeFactory {
    /// Create a data-less node (tokens, keywords, `this` type, ...).
    fn create_base_token_node(&mut self, kind: SyntaxKind, flags: NodeFlags) -> NodeIndex;

    /// Create a node whose fields live in the pool for `D`.
    fn create_base_node<D: PooledData>(
        &mut self,
        kind: SyntaxKind,
        flags: NodeFlags,
        data: D,
    ) -> NodeIndex;

    /// Store a node array and return its identity handle.
    fn create_base_node_array(&mut self, array: NodeArray) -> NodeList;
}

impl BaseNodeFactory for NodeArena {
    fn create_base_token_node(&mut self, kind: SyntaxKind, flags: NodeFlags) -> NodeIndex {
        let index = self.nodes.len() as u32;
        let mut node = Node::new(kind, TextRange::SYNTHESIZED, Node::NO_DATA);
        node.flags = flags;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    fn create_base_node<D: PooledData>(
        &mut self,
        kind: SyntaxKind,
        flags: NodeFlags,
        data: D,
    ) -> NodeIndex {
        assert!(
            NodeCategory::of(kind) == D::CATEGORY,
            "node kind {kind:?} is not stored in the {:?} pool",
            D::CATEGORY
        );
        let pool = D::pool_mut(self);
        let data_index = pool.len() as u32;
        pool.push(data);
        let index = self.nodes.len() as u32;
        let mut node = Node::new(kind, TextRange::SYNTHESIZED, data_index);
        node.flags = flags;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    fn create_base_node_array(&mut self, array: NodeArray) -> NodeList {
        let index = self.node_arrays.len() as u32;
        self.node_arrays.push(array);
        NodeList(index)
    }
}

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow on huge inputs.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with room for roughly `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(safe_capacity),
            extended_info: Vec::with_capacity(safe_capacity),
            node_arrays: Vec::with_capacity(safe_capacity / 8),
            identifiers: Vec::with_capacity(safe_capacity / 4),
            literals: Vec::with_capacity(safe_capacity / 8),
            ..NodeArena::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Headers and extended info
    // ========================================================================

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(index) == Some(kind)
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended_mut(&mut self, index: NodeIndex) -> Option<&mut ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get_mut(index.0 as usize)
        }
    }

    /// Typed access to a node's pool entry. `None` when the node is stored in
    /// a different pool.
    #[inline]
    pub fn data<D: PooledData>(&self, node: &Node) -> Option<&D> {
        if node.has_data() && node.category() == D::CATEGORY {
            D::pool(self).get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Typed access by index.
    #[inline]
    pub fn node_data<D: PooledData>(&self, index: NodeIndex) -> Option<&D> {
        self.get(index).and_then(|node| self.data::<D>(node))
    }

    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    #[inline]
    pub fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(info) = self.get_extended_mut(child) {
            info.parent = parent;
        }
    }

    #[inline]
    pub fn original(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.original)
    }

    /// Record that `node` was produced from `original`.
    pub fn set_original(&mut self, node: NodeIndex, original: NodeIndex) {
        if node == original {
            return;
        }
        if let Some(info) = self.get_extended_mut(node) {
            info.original = original;
        }
    }

    /// Follow `original` links to the first parse-tree node (one that is not
    /// synthesized). Returns `NONE` when the chain ends in synthesized nodes.
    pub fn parse_tree_node(&self, index: NodeIndex) -> NodeIndex {
        let mut current = index;
        while let Some(node) = self.get(current) {
            if !node.flags.contains(NodeFlags::SYNTHESIZED) {
                return current;
            }
            current = self.original(current);
        }
        NodeIndex::NONE
    }

    #[inline]
    pub fn is_parse_tree_node(&self, index: NodeIndex) -> bool {
        self.get(index)
            .is_some_and(|node| !node.flags.contains(NodeFlags::SYNTHESIZED))
    }

    #[inline]
    pub fn transform_flags(&self, index: NodeIndex) -> TransformFlags {
        self.get_extended(index)
            .map_or(TransformFlags::empty(), |info| info.transform_flags)
    }

    #[inline]
    pub fn set_transform_flags(&mut self, index: NodeIndex, flags: TransformFlags) {
        if let Some(info) = self.get_extended_mut(index) {
            info.transform_flags = flags;
        }
    }

    pub fn set_text_range(&mut self, index: NodeIndex, range: TextRange) {
        if let Some(node) = self.get_mut(index) {
            node.pos = range.pos;
            node.end = range.end;
        }
    }

    // ========================================================================
    // Node arrays
    // ========================================================================

    #[inline]
    pub fn get_list(&self, list: NodeList) -> Option<&NodeArray> {
        self.node_arrays.get(list.0 as usize)
    }

    #[inline]
    pub fn get_list_mut(&mut self, list: NodeList) -> Option<&mut NodeArray> {
        self.node_arrays.get_mut(list.0 as usize)
    }

    /// Elements of a list (empty for an unknown handle).
    #[inline]
    pub fn list_nodes(&self, list: NodeList) -> &[NodeIndex] {
        self.get_list(list).map_or(&[], |array| array.nodes.as_slice())
    }

    /// Elements of an optional list.
    #[inline]
    pub fn opt_list_nodes(&self, list: Option<NodeList>) -> &[NodeIndex] {
        match list {
            Some(list) => self.list_nodes(list),
            None => &[],
        }
    }

    /// Set the parent of every element of a list.
    pub fn set_parent_list(&mut self, list: Option<NodeList>, parent: NodeIndex) {
        let children: Vec<NodeIndex> = self.opt_list_nodes(list).to_vec();
        for child in children {
            self.set_parent(child, parent);
        }
    }

    /// Bind `parent` on every node reachable from `root`.
    pub fn set_parent_recursive(&mut self, root: NodeIndex) {
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            for child in self.children(parent) {
                self.set_parent(child, parent);
                stack.push(child);
            }
        }
    }
}
