//! Syntax kinds for every grammar production the factory can build.
//!
//! The discriminant order mirrors `tsc`'s `SyntaxKind` so that range checks
//! (`is_keyword`, `is_type_node_kind`, ...) are simple comparisons.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    // Trivia and literals
    Unknown,
    EndOfFileToken,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    NewLineTrivia,
    WhitespaceTrivia,
    ShebangTrivia,
    ConflictMarkerTrivia,
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    JsxText,
    JsxTextAllWhiteSpaces,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    LessThanSlashToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,
    QuestionQuestionToken,
    BacktickToken,
    HashToken,
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,
    CaretEqualsToken,

    // Identifiers
    Identifier,
    PrivateIdentifier,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // Contextual keywords
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AssertKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IntrinsicKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    OutKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    UsingKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,

    // Names
    QualifiedName,
    ComputedPropertyName,

    // Signature elements
    TypeParameter,
    Parameter,
    Decorator,

    // Type members and class elements
    PropertySignature,
    PropertyDeclaration,
    MethodSignature,
    MethodDeclaration,
    ClassStaticBlockDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    CallSignature,
    ConstructSignature,
    IndexSignature,

    // Types
    TypePredicate,
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    TupleType,
    OptionalType,
    RestType,
    UnionType,
    IntersectionType,
    ConditionalType,
    InferType,
    ParenthesizedType,
    ThisType,
    TypeOperator,
    IndexedAccessType,
    MappedType,
    LiteralType,
    NamedTupleMember,
    TemplateLiteralType,
    TemplateLiteralTypeSpan,
    ImportType,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    TypeAssertionExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    DeleteExpression,
    TypeOfExpression,
    VoidExpression,
    AwaitExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    TemplateExpression,
    YieldExpression,
    SpreadElement,
    ClassExpression,
    OmittedExpression,
    ExpressionWithTypeArguments,
    AsExpression,
    NonNullExpression,
    MetaProperty,
    SatisfiesExpression,

    // Misc
    TemplateSpan,
    SemicolonClassElement,

    // Statements and declarations
    Block,
    EmptyStatement,
    VariableStatement,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    DebuggerStatement,
    VariableDeclaration,
    VariableDeclarationList,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ModuleDeclaration,
    ModuleBlock,
    CaseBlock,
    NamespaceExportDeclaration,
    ImportEqualsDeclaration,
    ImportDeclaration,
    ImportClause,
    NamespaceImport,
    NamedImports,
    ImportSpecifier,
    ExportAssignment,
    ExportDeclaration,
    NamedExports,
    NamespaceExport,
    ExportSpecifier,

    // Module references
    ExternalModuleReference,

    // JSX
    JsxElement,
    JsxSelfClosingElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
    JsxOpeningFragment,
    JsxClosingFragment,
    JsxAttribute,
    JsxAttributes,
    JsxSpreadAttribute,
    JsxExpression,
    JsxNamespacedName,

    // Clauses
    CaseClause,
    DefaultClause,
    HeritageClause,
    CatchClause,
    ImportAttributes,
    ImportAttribute,

    // Property assignments
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    EnumMember,

    // Top-level nodes
    SourceFile,
    Bundle,

    // Transformation nodes
    NotEmittedStatement,
    PartiallyEmittedExpression,
    CommaListExpression,
}

impl SyntaxKind {
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
    pub const LAST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::ImplementsKeyword;
    pub const LAST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_TYPE_NODE: SyntaxKind = SyntaxKind::TypePredicate;
    pub const LAST_TYPE_NODE: SyntaxKind = SyntaxKind::ImportType;
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const FIRST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const LAST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::TemplateTail;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::QualifiedName;

    /// Tokens are every kind before the first composite node.
    #[inline]
    pub fn is_token(self) -> bool {
        self < Self::FIRST_NODE
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= Self::FIRST_PUNCTUATION && self <= Self::LAST_PUNCTUATION
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self >= Self::FIRST_ASSIGNMENT && self <= Self::LAST_ASSIGNMENT
    }

    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        self >= Self::FIRST_COMPOUND_ASSIGNMENT && self <= Self::LAST_COMPOUND_ASSIGNMENT
    }

    #[inline]
    pub fn is_literal_kind(self) -> bool {
        self >= Self::FIRST_LITERAL_TOKEN && self <= Self::LAST_LITERAL_TOKEN
    }

    #[inline]
    pub fn is_template_literal_kind(self) -> bool {
        self >= Self::FIRST_TEMPLATE_TOKEN && self <= Self::LAST_TEMPLATE_TOKEN
    }

    /// Type nodes proper plus the keyword types (`any`, `string`, ...).
    pub fn is_type_node_kind(self) -> bool {
        (self >= Self::FIRST_TYPE_NODE && self <= Self::LAST_TYPE_NODE)
            || matches!(
                self,
                SyntaxKind::AnyKeyword
                    | SyntaxKind::UnknownKeyword
                    | SyntaxKind::NumberKeyword
                    | SyntaxKind::BigIntKeyword
                    | SyntaxKind::ObjectKeyword
                    | SyntaxKind::BooleanKeyword
                    | SyntaxKind::StringKeyword
                    | SyntaxKind::SymbolKeyword
                    | SyntaxKind::VoidKeyword
                    | SyntaxKind::UndefinedKeyword
                    | SyntaxKind::NeverKeyword
                    | SyntaxKind::IntrinsicKeyword
                    | SyntaxKind::ExpressionWithTypeArguments
            )
    }

    /// Keywords usable as a `KeywordTypeNode`.
    pub fn is_keyword_type_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::IntrinsicKeyword
        )
    }

    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::InKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::OutKeyword
                | SyntaxKind::OverrideKeyword
        )
    }

    /// Reserved and strict-mode reserved words; these cannot name a binding.
    #[inline]
    pub fn is_non_contextual_keyword(self) -> bool {
        self.is_keyword() && self <= Self::LAST_FUTURE_RESERVED_WORD
    }

    /// Source text of a punctuation or keyword token.
    pub fn token_text(self) -> Option<&'static str> {
        TOKEN_TEXT
            .binary_search_by_key(&self, |&(kind, _)| kind)
            .ok()
            .map(|i| TOKEN_TEXT[i].1)
    }
}

/// Look up the keyword kind for a piece of identifier text.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    static KEYWORDS: Lazy<FxHashMap<&'static str, SyntaxKind>> = Lazy::new(|| {
        TOKEN_TEXT
            .iter()
            .filter(|(kind, _)| kind.is_keyword())
            .map(|&(kind, text)| (text, kind))
            .collect()
    });
    KEYWORDS.get(text).copied()
}

/// `true` for reserved words that can never be used as an identifier.
pub fn is_string_a_non_contextual_keyword(text: &str) -> bool {
    text_to_keyword(text).is_some_and(SyntaxKind::is_non_contextual_keyword)
}

static TOKEN_TEXT: &[(SyntaxKind, &str)] = &[
    (SyntaxKind::OpenBraceToken, "{"),
    (SyntaxKind::CloseBraceToken, "}"),
    (SyntaxKind::OpenParenToken, "("),
    (SyntaxKind::CloseParenToken, ")"),
    (SyntaxKind::OpenBracketToken, "["),
    (SyntaxKind::CloseBracketToken, "]"),
    (SyntaxKind::DotToken, "."),
    (SyntaxKind::DotDotDotToken, "..."),
    (SyntaxKind::SemicolonToken, ";"),
    (SyntaxKind::CommaToken, ","),
    (SyntaxKind::QuestionDotToken, "?."),
    (SyntaxKind::LessThanToken, "<"),
    (SyntaxKind::LessThanSlashToken, "</"),
    (SyntaxKind::GreaterThanToken, ">"),
    (SyntaxKind::LessThanEqualsToken, "<="),
    (SyntaxKind::GreaterThanEqualsToken, ">="),
    (SyntaxKind::EqualsEqualsToken, "=="),
    (SyntaxKind::ExclamationEqualsToken, "!="),
    (SyntaxKind::EqualsEqualsEqualsToken, "==="),
    (SyntaxKind::ExclamationEqualsEqualsToken, "!=="),
    (SyntaxKind::EqualsGreaterThanToken, "=>"),
    (SyntaxKind::PlusToken, "+"),
    (SyntaxKind::MinusToken, "-"),
    (SyntaxKind::AsteriskToken, "*"),
    (SyntaxKind::AsteriskAsteriskToken, "**"),
    (SyntaxKind::SlashToken, "/"),
    (SyntaxKind::PercentToken, "%"),
    (SyntaxKind::PlusPlusToken, "++"),
    (SyntaxKind::MinusMinusToken, "--"),
    (SyntaxKind::LessThanLessThanToken, "<<"),
    (SyntaxKind::GreaterThanGreaterThanToken, ">>"),
    (SyntaxKind::GreaterThanGreaterThanGreaterThanToken, ">>>"),
    (SyntaxKind::AmpersandToken, "&"),
    (SyntaxKind::BarToken, "|"),
    (SyntaxKind::CaretToken, "^"),
    (SyntaxKind::ExclamationToken, "!"),
    (SyntaxKind::TildeToken, "~"),
    (SyntaxKind::AmpersandAmpersandToken, "&&"),
    (SyntaxKind::BarBarToken, "||"),
    (SyntaxKind::QuestionToken, "?"),
    (SyntaxKind::ColonToken, ":"),
    (SyntaxKind::AtToken, "@"),
    (SyntaxKind::QuestionQuestionToken, "??"),
    (SyntaxKind::BacktickToken, "`"),
    (SyntaxKind::HashToken, "#"),
    (SyntaxKind::EqualsToken, "="),
    (SyntaxKind::PlusEqualsToken, "+="),
    (SyntaxKind::MinusEqualsToken, "-="),
    (SyntaxKind::AsteriskEqualsToken, "*="),
    (SyntaxKind::AsteriskAsteriskEqualsToken, "**="),
    (SyntaxKind::SlashEqualsToken, "/="),
    (SyntaxKind::PercentEqualsToken, "%="),
    (SyntaxKind::LessThanLessThanEqualsToken, "<<="),
    (SyntaxKind::GreaterThanGreaterThanEqualsToken, ">>="),
    (SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken, ">>>="),
    (SyntaxKind::AmpersandEqualsToken, "&="),
    (SyntaxKind::BarEqualsToken, "|="),
    (SyntaxKind::BarBarEqualsToken, "||="),
    (SyntaxKind::AmpersandAmpersandEqualsToken, "&&="),
    (SyntaxKind::QuestionQuestionEqualsToken, "??="),
    (SyntaxKind::CaretEqualsToken, "^="),
    (SyntaxKind::BreakKeyword, "break"),
    (SyntaxKind::CaseKeyword, "case"),
    (SyntaxKind::CatchKeyword, "catch"),
    (SyntaxKind::ClassKeyword, "class"),
    (SyntaxKind::ConstKeyword, "const"),
    (SyntaxKind::ContinueKeyword, "continue"),
    (SyntaxKind::DebuggerKeyword, "debugger"),
    (SyntaxKind::DefaultKeyword, "default"),
    (SyntaxKind::DeleteKeyword, "delete"),
    (SyntaxKind::DoKeyword, "do"),
    (SyntaxKind::ElseKeyword, "else"),
    (SyntaxKind::EnumKeyword, "enum"),
    (SyntaxKind::ExportKeyword, "export"),
    (SyntaxKind::ExtendsKeyword, "extends"),
    (SyntaxKind::FalseKeyword, "false"),
    (SyntaxKind::FinallyKeyword, "finally"),
    (SyntaxKind::ForKeyword, "for"),
    (SyntaxKind::FunctionKeyword, "function"),
    (SyntaxKind::IfKeyword, "if"),
    (SyntaxKind::ImportKeyword, "import"),
    (SyntaxKind::InKeyword, "in"),
    (SyntaxKind::InstanceOfKeyword, "instanceof"),
    (SyntaxKind::NewKeyword, "new"),
    (SyntaxKind::NullKeyword, "null"),
    (SyntaxKind::ReturnKeyword, "return"),
    (SyntaxKind::SuperKeyword, "super"),
    (SyntaxKind::SwitchKeyword, "switch"),
    (SyntaxKind::ThisKeyword, "this"),
    (SyntaxKind::ThrowKeyword, "throw"),
    (SyntaxKind::TrueKeyword, "true"),
    (SyntaxKind::TryKeyword, "try"),
    (SyntaxKind::TypeOfKeyword, "typeof"),
    (SyntaxKind::VarKeyword, "var"),
    (SyntaxKind::VoidKeyword, "void"),
    (SyntaxKind::WhileKeyword, "while"),
    (SyntaxKind::WithKeyword, "with"),
    (SyntaxKind::ImplementsKeyword, "implements"),
    (SyntaxKind::InterfaceKeyword, "interface"),
    (SyntaxKind::LetKeyword, "let"),
    (SyntaxKind::PackageKeyword, "package"),
    (SyntaxKind::PrivateKeyword, "private"),
    (SyntaxKind::ProtectedKeyword, "protected"),
    (SyntaxKind::PublicKeyword, "public"),
    (SyntaxKind::StaticKeyword, "static"),
    (SyntaxKind::YieldKeyword, "yield"),
    (SyntaxKind::AbstractKeyword, "abstract"),
    (SyntaxKind::AccessorKeyword, "accessor"),
    (SyntaxKind::AsKeyword, "as"),
    (SyntaxKind::AssertsKeyword, "asserts"),
    (SyntaxKind::AssertKeyword, "assert"),
    (SyntaxKind::AnyKeyword, "any"),
    (SyntaxKind::AsyncKeyword, "async"),
    (SyntaxKind::AwaitKeyword, "await"),
    (SyntaxKind::BooleanKeyword, "boolean"),
    (SyntaxKind::ConstructorKeyword, "constructor"),
    (SyntaxKind::DeclareKeyword, "declare"),
    (SyntaxKind::GetKeyword, "get"),
    (SyntaxKind::InferKeyword, "infer"),
    (SyntaxKind::IntrinsicKeyword, "intrinsic"),
    (SyntaxKind::IsKeyword, "is"),
    (SyntaxKind::KeyOfKeyword, "keyof"),
    (SyntaxKind::ModuleKeyword, "module"),
    (SyntaxKind::NamespaceKeyword, "namespace"),
    (SyntaxKind::NeverKeyword, "never"),
    (SyntaxKind::OutKeyword, "out"),
    (SyntaxKind::ReadonlyKeyword, "readonly"),
    (SyntaxKind::RequireKeyword, "require"),
    (SyntaxKind::NumberKeyword, "number"),
    (SyntaxKind::ObjectKeyword, "object"),
    (SyntaxKind::SatisfiesKeyword, "satisfies"),
    (SyntaxKind::SetKeyword, "set"),
    (SyntaxKind::StringKeyword, "string"),
    (SyntaxKind::SymbolKeyword, "symbol"),
    (SyntaxKind::TypeKeyword, "type"),
    (SyntaxKind::UndefinedKeyword, "undefined"),
    (SyntaxKind::UniqueKeyword, "unique"),
    (SyntaxKind::UnknownKeyword, "unknown"),
    (SyntaxKind::UsingKeyword, "using"),
    (SyntaxKind::FromKeyword, "from"),
    (SyntaxKind::GlobalKeyword, "global"),
    (SyntaxKind::BigIntKeyword, "bigint"),
    (SyntaxKind::OverrideKeyword, "override"),
    (SyntaxKind::OfKeyword, "of"),
];
