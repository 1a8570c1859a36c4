//! Thin node headers and typed data pools.
//!
//! Every node is a small `Node` header (kind, flags, range, data index) stored
//! in `NodeArena::nodes`. Kind-specific fields live in typed pools, one pool
//! per `NodeCategory`; `data_index` points into the pool selected by the
//! node's category. Kinds with the same field layout share a category.
//!
//! Children are owned edges expressed as `NodeIndex`/`NodeList` handles.
//! `parent` and `original` are weak back-references kept in
//! `ExtendedNodeInfo`, never in the data pools.

use crate::base::{NodeIndex, NodeList, TextRange};
use crate::flags::{GeneratedIdentifierFlags, NodeFlags, TransformFlags};
use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Serialize};

/// Node header.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: NodeFlags,
    /// Start position in source (`TextRange::NO_POS` when synthesized)
    pub pos: u32,
    /// End position in source (`TextRange::NO_POS` when synthesized)
    pub end: u32,
    /// Index into the category pool (`NO_DATA` for tokens)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: SyntaxKind, range: TextRange, data_index: u32) -> Node {
        Node {
            kind,
            flags: NodeFlags::empty(),
            pos: range.pos,
            end: range.end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        TextRange::new(self.pos, self.end)
    }

    #[inline]
    pub fn category(&self) -> NodeCategory {
        NodeCategory::of(self.kind)
    }
}

/// Auxiliary per-node info that is not part of the node's children.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
    /// The node this one was produced from by a transform or clone.
    pub original: NodeIndex,
    pub transform_flags: TransformFlags,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
            original: NodeIndex::NONE,
            transform_flags: TransformFlags::empty(),
        }
    }
}

/// An ordered node sequence with its own range and cached aggregated flags.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArray {
    pub nodes: Vec<NodeIndex>,
    pub pos: u32,
    pub end: u32,
    pub has_trailing_comma: bool,
    /// Union of `propagate_child_flags` over the elements, filled once.
    pub transform_flags: Option<TransformFlags>,
}

impl NodeArray {
    pub fn new(nodes: Vec<NodeIndex>, has_trailing_comma: bool) -> NodeArray {
        NodeArray {
            nodes,
            pos: TextRange::NO_POS,
            end: TextRange::NO_POS,
            has_trailing_comma,
            transform_flags: None,
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
}

// =============================================================================
// Node Category Classification
// =============================================================================

/// Storage categories. Nodes in the same category share a data layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// Tokens, keywords and leaf nodes without fields
    Token,
    Identifier,
    Literal,
    QualifiedName,
    /// Nodes wrapping a single expression-like child
    Expression,
    /// Nodes wrapping a single type-like child
    WrappedType,
    TypeParameter,
    Parameter,
    /// Type members and function/constructor types
    Signature,
    /// Function-like declarations with a body
    Function,
    PropertyDecl,
    /// Classes and interfaces
    Class,
    TypeAlias,
    Enum,
    /// `name = initializer` shapes
    PropertyAssignment,
    Module,
    Block,
    Heritage,
    TypeRef,
    /// Nodes whose only child is a list
    List,
    ImportAttributes,
    ConditionalType,
    TypeOperator,
    IndexedAccessType,
    MappedType,
    ImportType,
    Template,
    TemplateSpan,
    NamedTupleMember,
    TypePredicate,
    BindingElement,
    AccessExpr,
    CallExpr,
    TaggedTemplate,
    TypeAssertion,
    UnaryExpr,
    BinaryExpr,
    ConditionalExpr,
    Yield,
    MetaProperty,
    VariableStatement,
    VariableDeclaration,
    If,
    Loop,
    ForInOf,
    /// Nodes whose only child is a name or label
    Name,
    Labeled,
    With,
    Switch,
    CaseClause,
    Try,
    CatchClause,
    ImportEquals,
    ImportDecl,
    ImportClause,
    Specifier,
    ExportDecl,
    ExportAssignment,
    JsxElement,
    JsxOpening,
    JsxExpression,
    SourceFile,
    Bundle,
}

impl NodeCategory {
    /// Storage category for a kind. Total over `SyntaxKind`.
    pub fn of(kind: SyntaxKind) -> NodeCategory {
        use SyntaxKind as K;
        match kind {
            K::Identifier | K::PrivateIdentifier => NodeCategory::Identifier,
            K::NumericLiteral
            | K::BigIntLiteral
            | K::StringLiteral
            | K::JsxText
            | K::RegularExpressionLiteral
            | K::NoSubstitutionTemplateLiteral
            | K::TemplateHead
            | K::TemplateMiddle
            | K::TemplateTail => NodeCategory::Literal,
            K::QualifiedName | K::JsxNamespacedName => NodeCategory::QualifiedName,
            K::ComputedPropertyName
            | K::Decorator
            | K::ParenthesizedExpression
            | K::DeleteExpression
            | K::TypeOfExpression
            | K::VoidExpression
            | K::AwaitExpression
            | K::SpreadElement
            | K::NonNullExpression
            | K::ExpressionStatement
            | K::ThrowStatement
            | K::ReturnStatement
            | K::ExternalModuleReference
            | K::SpreadAssignment
            | K::JsxSpreadAttribute
            | K::JsxClosingElement
            | K::PartiallyEmittedExpression => NodeCategory::Expression,
            K::ArrayType
            | K::OptionalType
            | K::RestType
            | K::ParenthesizedType
            | K::InferType
            | K::LiteralType => NodeCategory::WrappedType,
            K::TypeParameter => NodeCategory::TypeParameter,
            K::Parameter => NodeCategory::Parameter,
            K::PropertySignature
            | K::MethodSignature
            | K::CallSignature
            | K::ConstructSignature
            | K::IndexSignature
            | K::FunctionType
            | K::ConstructorType => NodeCategory::Signature,
            K::FunctionDeclaration
            | K::FunctionExpression
            | K::ArrowFunction
            | K::MethodDeclaration
            | K::Constructor
            | K::GetAccessor
            | K::SetAccessor
            | K::ClassStaticBlockDeclaration => NodeCategory::Function,
            K::PropertyDeclaration => NodeCategory::PropertyDecl,
            K::ClassDeclaration | K::ClassExpression | K::InterfaceDeclaration => {
                NodeCategory::Class
            }
            K::TypeAliasDeclaration => NodeCategory::TypeAlias,
            K::EnumDeclaration => NodeCategory::Enum,
            K::EnumMember
            | K::PropertyAssignment
            | K::ShorthandPropertyAssignment
            | K::JsxAttribute
            | K::ImportAttribute => NodeCategory::PropertyAssignment,
            K::ModuleDeclaration => NodeCategory::Module,
            K::Block | K::ModuleBlock | K::CaseBlock => NodeCategory::Block,
            K::HeritageClause => NodeCategory::Heritage,
            K::TypeReference | K::ExpressionWithTypeArguments | K::TypeQuery => {
                NodeCategory::TypeRef
            }
            K::UnionType
            | K::IntersectionType
            | K::TupleType
            | K::TypeLiteral
            | K::ObjectBindingPattern
            | K::ArrayBindingPattern
            | K::ArrayLiteralExpression
            | K::ObjectLiteralExpression
            | K::NamedImports
            | K::NamedExports
            | K::JsxAttributes
            | K::CommaListExpression
            | K::VariableDeclarationList => NodeCategory::List,
            K::ImportAttributes => NodeCategory::ImportAttributes,
            K::ConditionalType => NodeCategory::ConditionalType,
            K::TypeOperator => NodeCategory::TypeOperator,
            K::IndexedAccessType => NodeCategory::IndexedAccessType,
            K::MappedType => NodeCategory::MappedType,
            K::ImportType => NodeCategory::ImportType,
            K::TemplateExpression | K::TemplateLiteralType => NodeCategory::Template,
            K::TemplateSpan | K::TemplateLiteralTypeSpan => NodeCategory::TemplateSpan,
            K::NamedTupleMember => NodeCategory::NamedTupleMember,
            K::TypePredicate => NodeCategory::TypePredicate,
            K::BindingElement => NodeCategory::BindingElement,
            K::PropertyAccessExpression | K::ElementAccessExpression => NodeCategory::AccessExpr,
            K::CallExpression | K::NewExpression => NodeCategory::CallExpr,
            K::TaggedTemplateExpression => NodeCategory::TaggedTemplate,
            K::TypeAssertionExpression | K::AsExpression | K::SatisfiesExpression => {
                NodeCategory::TypeAssertion
            }
            K::PrefixUnaryExpression | K::PostfixUnaryExpression => NodeCategory::UnaryExpr,
            K::BinaryExpression => NodeCategory::BinaryExpr,
            K::ConditionalExpression => NodeCategory::ConditionalExpr,
            K::YieldExpression => NodeCategory::Yield,
            K::MetaProperty => NodeCategory::MetaProperty,
            K::VariableStatement => NodeCategory::VariableStatement,
            K::VariableDeclaration => NodeCategory::VariableDeclaration,
            K::IfStatement => NodeCategory::If,
            K::ForStatement | K::WhileStatement | K::DoStatement => NodeCategory::Loop,
            K::ForInStatement | K::ForOfStatement => NodeCategory::ForInOf,
            K::BreakStatement
            | K::ContinueStatement
            | K::NamespaceImport
            | K::NamespaceExport
            | K::NamespaceExportDeclaration => NodeCategory::Name,
            K::LabeledStatement => NodeCategory::Labeled,
            K::WithStatement => NodeCategory::With,
            K::SwitchStatement => NodeCategory::Switch,
            K::CaseClause | K::DefaultClause => NodeCategory::CaseClause,
            K::TryStatement => NodeCategory::Try,
            K::CatchClause => NodeCategory::CatchClause,
            K::ImportEqualsDeclaration => NodeCategory::ImportEquals,
            K::ImportDeclaration => NodeCategory::ImportDecl,
            K::ImportClause => NodeCategory::ImportClause,
            K::ImportSpecifier | K::ExportSpecifier => NodeCategory::Specifier,
            K::ExportDeclaration => NodeCategory::ExportDecl,
            K::ExportAssignment => NodeCategory::ExportAssignment,
            K::JsxElement | K::JsxFragment => NodeCategory::JsxElement,
            K::JsxSelfClosingElement | K::JsxOpeningElement => NodeCategory::JsxOpening,
            K::JsxExpression => NodeCategory::JsxExpression,
            K::SourceFile => NodeCategory::SourceFile,
            K::Bundle => NodeCategory::Bundle,
            _ => NodeCategory::Token,
        }
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Bookkeeping for identifiers created by the name generators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoGenerateInfo {
    pub flags: GeneratedIdentifierFlags,
    /// Process-wide unique id; the printer uses it to keep names apart.
    pub id: u32,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Source node for `GeneratedIdentifierFlags::NODE` names
    pub node: NodeIndex,
}

/// Data for identifier nodes (Identifier, PrivateIdentifier)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
    pub auto_generate: Option<AutoGenerateInfo>,
    /// Keyword kind when the text spells a keyword
    pub original_keyword_kind: Option<SyntaxKind>,
}

/// Data for literal tokens (numeric, string, template parts, JSX text)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
    /// Raw source text for template parts
    pub raw_text: Option<String>,
    pub is_single_quote: bool,
    /// JsxText only
    pub contains_only_trivia_white_spaces: bool,
}

/// QualifiedName (`left.right`) and JsxNamespacedName (`left:right`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// Nodes with a single expression child
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionData {
    pub expression: NodeIndex,
}

/// Nodes with a single type child (array element type, `infer` parameter, literal)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedTypeData {
    pub type_node: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Type members and function/constructor types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    /// `None` for property signatures
    pub parameters: Option<NodeList>,
    pub type_annotation: NodeIndex,
}

/// Function-like declarations: functions, arrows, methods, constructors,
/// accessors and class static blocks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Classes and interfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub type_node: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

/// EnumMember, PropertyAssignment, ShorthandPropertyAssignment (object
/// assignment initializer), JsxAttribute and ImportAttribute (value)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub body: NodeIndex,
}

/// Block, ModuleBlock and CaseBlock (clauses)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
    pub multi_line: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageData {
    /// ExtendsKeyword or ImplementsKeyword
    pub token: SyntaxKind,
    pub types: NodeList,
}

/// TypeReference, ExpressionWithTypeArguments and TypeQuery
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListData {
    pub elements: NodeList,
    pub multi_line: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportAttributesData {
    /// WithKeyword or AssertKeyword
    pub token: SyntaxKind,
    pub elements: NodeList,
    pub multi_line: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalTypeData {
    pub check_type: NodeIndex,
    pub extends_type: NodeIndex,
    pub true_type: NodeIndex,
    pub false_type: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOperatorData {
    /// KeyOfKeyword, UniqueKeyword or ReadonlyKeyword
    pub operator: SyntaxKind,
    pub type_node: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedAccessTypeData {
    pub object_type: NodeIndex,
    pub index_type: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedTypeData {
    /// ReadonlyKeyword, PlusToken or MinusToken
    pub readonly_token: Option<SyntaxKind>,
    pub type_parameter: NodeIndex,
    pub name_type: NodeIndex,
    /// QuestionToken, PlusToken or MinusToken
    pub question_token: Option<SyntaxKind>,
    pub type_node: NodeIndex,
    pub members: Option<NodeList>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTypeData {
    pub is_type_of: bool,
    pub argument: NodeIndex,
    pub attributes: NodeIndex,
    pub qualifier: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// TemplateExpression and TemplateLiteralType
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
    pub head: NodeIndex,
    pub spans: NodeList,
}

/// TemplateSpan (expression) and TemplateLiteralTypeSpan (type)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSpanData {
    pub expression: NodeIndex,
    pub literal: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTupleMemberData {
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_node: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePredicateData {
    pub asserts_modifier: bool,
    pub parameter_name: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// PropertyAccessExpression (name) and ElementAccessExpression (argument)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub question_dot_token: bool,
    pub name_or_argument: NodeIndex,
}

/// CallExpression and NewExpression
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub question_dot_token: bool,
    pub type_arguments: Option<NodeList>,
    /// Always `Some` for calls; `None` for `new X` without parentheses
    pub arguments: Option<NodeList>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedTemplateData {
    pub tag: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub template: NodeIndex,
}

/// `<T>x`, `x as T` and `x satisfies T`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAssertionData {
    pub expression: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldData {
    pub asterisk_token: bool,
    pub expression: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaPropertyData {
    /// NewKeyword or ImportKeyword
    pub keyword_token: SyntaxKind,
    pub name: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableData {
    pub modifiers: Option<NodeList>,
    pub declaration_list: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// for / while / do loops
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForInOfData {
    pub await_modifier: bool,
    pub initializer: NodeIndex,
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// break/continue labels, namespace import/export names
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameData {
    pub name: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithData {
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub case_block: NodeIndex,
}

/// CaseClause and DefaultClause (no expression)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseClauseData {
    pub expression: NodeIndex,
    pub statements: NodeList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryData {
    pub try_block: NodeIndex,
    pub catch_clause: NodeIndex,
    pub finally_block: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchClauseData {
    pub variable_declaration: NodeIndex,
    pub block: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEqualsData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub name: NodeIndex,
    pub module_reference: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclData {
    pub modifiers: Option<NodeList>,
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
    pub attributes: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    pub name: NodeIndex,
    pub named_bindings: NodeIndex,
}

/// ImportSpecifier and ExportSpecifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecifierData {
    pub is_type_only: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDeclData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
    pub attributes: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportAssignmentData {
    pub modifiers: Option<NodeList>,
    pub is_export_equals: bool,
    pub expression: NodeIndex,
}

/// JsxElement and JsxFragment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsxElementData {
    pub opening_element: NodeIndex,
    pub children: NodeList,
    pub closing_element: NodeIndex,
}

/// JsxOpeningElement and JsxSelfClosingElement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsxOpeningData {
    pub tag_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub attributes: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsxExpressionData {
    pub dot_dot_dot_token: bool,
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub end_of_file_token: NodeIndex,
    pub file_name: String,
    pub is_declaration_file: bool,
    pub has_no_default_lib: bool,
    /// Set when the file contains an import/export (an external module).
    pub is_external_module: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleData {
    pub source_files: Vec<NodeIndex>,
}
