//! Identifiers, generated names, tokens, modifiers and literals.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::{GeneratedIdentifierFlags, ModifierFlags, TransformFlags};
use crate::node::{AutoGenerateInfo, IdentifierData, LiteralData};
use crate::syntax_kind::{SyntaxKind, text_to_keyword};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

/// Source of generated-identifier ids. Shared by every factory in the
/// process and never reset, so two generated names never share an id.
static NEXT_AUTO_GENERATE_ID: AtomicU32 = AtomicU32::new(1);

fn next_auto_generate_id() -> u32 {
    NEXT_AUTO_GENERATE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Order in which `create_modifiers_from_modifier_flags` emits modifiers.
const MODIFIER_ORDER: &[(ModifierFlags, SyntaxKind)] = &[
    (ModifierFlags::EXPORT, SyntaxKind::ExportKeyword),
    (ModifierFlags::AMBIENT, SyntaxKind::DeclareKeyword),
    (ModifierFlags::DEFAULT, SyntaxKind::DefaultKeyword),
    (ModifierFlags::CONST, SyntaxKind::ConstKeyword),
    (ModifierFlags::PUBLIC, SyntaxKind::PublicKeyword),
    (ModifierFlags::PRIVATE, SyntaxKind::PrivateKeyword),
    (ModifierFlags::PROTECTED, SyntaxKind::ProtectedKeyword),
    (ModifierFlags::ABSTRACT, SyntaxKind::AbstractKeyword),
    (ModifierFlags::STATIC, SyntaxKind::StaticKeyword),
    (ModifierFlags::OVERRIDE, SyntaxKind::OverrideKeyword),
    (ModifierFlags::READONLY, SyntaxKind::ReadonlyKeyword),
    (ModifierFlags::ACCESSOR, SyntaxKind::AccessorKeyword),
    (ModifierFlags::ASYNC, SyntaxKind::AsyncKeyword),
    (ModifierFlags::IN, SyntaxKind::InKeyword),
    (ModifierFlags::OUT, SyntaxKind::OutKeyword),
];

/// Intrinsic flags of a token node.
fn token_transform_flags(kind: SyntaxKind) -> TransformFlags {
    use SyntaxKind as K;
    match kind {
        K::AsyncKeyword => TransformFlags::CONTAINS_ES2017 | TransformFlags::CONTAINS_ES2018,
        K::UsingKeyword => TransformFlags::CONTAINS_ESNEXT,
        K::PublicKeyword
        | K::PrivateKeyword
        | K::ProtectedKeyword
        | K::ReadonlyKeyword
        | K::AbstractKeyword
        | K::DeclareKeyword
        | K::ConstKeyword
        | K::AnyKeyword
        | K::NumberKeyword
        | K::BigIntKeyword
        | K::NeverKeyword
        | K::ObjectKeyword
        | K::InKeyword
        | K::OutKeyword
        | K::OverrideKeyword
        | K::StringKeyword
        | K::BooleanKeyword
        | K::SymbolKeyword
        | K::VoidKeyword
        | K::UnknownKeyword
        | K::UndefinedKeyword => TransformFlags::CONTAINS_TYPESCRIPT,
        K::SuperKeyword => TransformFlags::CONTAINS_ES2015 | TransformFlags::CONTAINS_LEXICAL_SUPER,
        K::StaticKeyword => TransformFlags::CONTAINS_ES2015,
        K::AccessorKeyword => TransformFlags::CONTAINS_CLASS_FIELDS,
        K::ThisKeyword => TransformFlags::CONTAINS_LEXICAL_THIS,
        _ => TransformFlags::empty(),
    }
}

/// Render a number the way JavaScript's `String(value)` does for the values
/// a declaration file can contain.
pub(crate) fn number_to_js_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        // `{:e}` gives the shortest digits; JS spells positive exponents `e+`.
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        format!("{value}")
    }
}

impl NodeFactory {
    // ========================================================================
    // Identifiers
    // ========================================================================

    pub fn create_identifier(&mut self, text: &str) -> NodeIndex {
        let original_keyword_kind = text_to_keyword(text);
        let node = self.alloc(
            SyntaxKind::Identifier,
            IdentifierData {
                escaped_text: text.to_string(),
                auto_generate: None,
                original_keyword_kind,
            },
        );
        let flags = if original_keyword_kind == Some(SyntaxKind::AwaitKeyword) {
            TransformFlags::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT
        } else {
            TransformFlags::empty()
        };
        self.finish(node, flags)
    }

    /// Panics unless `text` starts with `#`.
    pub fn create_private_identifier(&mut self, text: &str) -> NodeIndex {
        if !text.starts_with('#') {
            panic!("first character of private identifier must be #: {text}");
        }
        let node = self.alloc(
            SyntaxKind::PrivateIdentifier,
            IdentifierData {
                escaped_text: text.to_string(),
                auto_generate: None,
                original_keyword_kind: None,
            },
        );
        self.finish(node, TransformFlags::CONTAINS_CLASS_FIELDS)
    }

    fn create_base_generated_identifier(
        &mut self,
        kind: SyntaxKind,
        text: &str,
        flags: GeneratedIdentifierFlags,
        prefix: Option<&str>,
        suffix: Option<&str>,
        source: NodeIndex,
    ) -> NodeIndex {
        let id = next_auto_generate_id();
        trace!(id, text, ?flags, "generated identifier");
        let node = self.alloc(
            kind,
            IdentifierData {
                escaped_text: text.to_string(),
                auto_generate: Some(AutoGenerateInfo {
                    flags,
                    id,
                    prefix: prefix.map(str::to_string),
                    suffix: suffix.map(str::to_string),
                    node: source,
                }),
                original_keyword_kind: None,
            },
        );
        let transform_flags = if kind == SyntaxKind::PrivateIdentifier {
            TransformFlags::CONTAINS_CLASS_FIELDS
        } else {
            TransformFlags::empty()
        };
        self.finish(node, transform_flags)
    }

    /// A temporary variable name (`_a`, `_b`, ...) chosen by the printer.
    pub fn create_temp_variable(
        &mut self,
        reserved_in_nested_scopes: bool,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> NodeIndex {
        let mut flags = GeneratedIdentifierFlags::AUTO;
        if reserved_in_nested_scopes {
            flags |= GeneratedIdentifierFlags::RESERVED_IN_NESTED_SCOPES;
        }
        self.create_base_generated_identifier(
            SyntaxKind::Identifier,
            "",
            flags,
            prefix,
            suffix,
            NodeIndex::NONE,
        )
    }

    /// A loop variable name (`_i`, `_j`, ...).
    pub fn create_loop_variable(&mut self, reserved_in_nested_scopes: bool) -> NodeIndex {
        let mut flags = GeneratedIdentifierFlags::LOOP;
        if reserved_in_nested_scopes {
            flags |= GeneratedIdentifierFlags::RESERVED_IN_NESTED_SCOPES;
        }
        self.create_base_generated_identifier(
            SyntaxKind::Identifier,
            "",
            flags,
            None,
            None,
            NodeIndex::NONE,
        )
    }

    /// A name based on `text` made unique by the printer. `flags` may carry
    /// the optional bits only; the kind is always `UNIQUE`.
    pub fn create_unique_name(
        &mut self,
        text: &str,
        flags: GeneratedIdentifierFlags,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> NodeIndex {
        if !flags.kind().is_empty() {
            panic!("generated name kind is fixed by create_unique_name: {flags:?}");
        }
        let scope_bits = flags
            & (GeneratedIdentifierFlags::OPTIMISTIC | GeneratedIdentifierFlags::FILE_LEVEL);
        if scope_bits == GeneratedIdentifierFlags::FILE_LEVEL {
            panic!("file-level names must also be optimistic: {flags:?}");
        }
        self.create_base_generated_identifier(
            SyntaxKind::Identifier,
            text,
            GeneratedIdentifierFlags::UNIQUE | flags,
            prefix,
            suffix,
            NodeIndex::NONE,
        )
    }

    /// A unique `#name` for a private member.
    pub fn create_unique_private_name(
        &mut self,
        text: Option<&str>,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> NodeIndex {
        if let Some(text) = text.filter(|text| !text.starts_with('#')) {
            panic!("first character of private identifier must be #: {text}");
        }
        self.create_base_generated_identifier(
            SyntaxKind::PrivateIdentifier,
            text.unwrap_or(""),
            GeneratedIdentifierFlags::UNIQUE,
            prefix,
            suffix,
            NodeIndex::NONE,
        )
    }

    /// A name derived from `node` (its own name when it is an identifier).
    pub fn get_generated_name_for_node(
        &mut self,
        node: NodeIndex,
        flags: GeneratedIdentifierFlags,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> NodeIndex {
        if !flags.kind().is_empty() {
            panic!("generated name kind is fixed by get_generated_name_for_node: {flags:?}");
        }
        let text = match self.arena.identifier_text(node) {
            Some(text) => text.to_string(),
            None if node.is_some() => format!("generated@{}", node.0),
            None => String::new(),
        };
        self.create_base_generated_identifier(
            SyntaxKind::Identifier,
            &text,
            GeneratedIdentifierFlags::NODE | flags,
            prefix,
            suffix,
            node,
        )
    }

    /// A private name derived from `node`.
    pub fn get_generated_private_name_for_node(
        &mut self,
        node: NodeIndex,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> NodeIndex {
        let text = match self.arena.identifier_text(node) {
            Some(text) if text.starts_with('#') => text.to_string(),
            Some(text) => format!("#{text}"),
            None => format!("#generated@{}", node.0),
        };
        self.create_base_generated_identifier(
            SyntaxKind::PrivateIdentifier,
            &text,
            GeneratedIdentifierFlags::NODE,
            prefix,
            suffix,
            node,
        )
    }

    // ========================================================================
    // Tokens and modifiers
    // ========================================================================

    /// Panics for kinds that are not punctuation or keywords.
    #[track_caller]
    pub fn create_token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let valid = kind.is_punctuation()
            || kind.is_keyword()
            || matches!(kind, SyntaxKind::EndOfFileToken | SyntaxKind::Unknown);
        if !valid {
            panic!("invalid token kind {kind:?}");
        }
        let node = self.alloc_token(kind);
        self.finish(node, token_transform_flags(kind))
    }

    pub fn create_super(&mut self) -> NodeIndex {
        self.create_token(SyntaxKind::SuperKeyword)
    }

    pub fn create_this(&mut self) -> NodeIndex {
        self.create_token(SyntaxKind::ThisKeyword)
    }

    pub fn create_null(&mut self) -> NodeIndex {
        self.create_token(SyntaxKind::NullKeyword)
    }

    pub fn create_true(&mut self) -> NodeIndex {
        self.create_token(SyntaxKind::TrueKeyword)
    }

    pub fn create_false(&mut self) -> NodeIndex {
        self.create_token(SyntaxKind::FalseKeyword)
    }

    /// Panics for kinds that are not modifiers.
    #[track_caller]
    pub fn create_modifier(&mut self, kind: SyntaxKind) -> NodeIndex {
        if !kind.is_modifier_kind() {
            panic!("{kind:?} is not a modifier");
        }
        self.create_token(kind)
    }

    /// Modifier tokens for a flag set in canonical order; `None` when empty.
    pub fn create_modifiers_from_modifier_flags(
        &mut self,
        flags: ModifierFlags,
    ) -> Option<NodeList> {
        let modifiers: Vec<NodeIndex> = MODIFIER_ORDER
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .map(|&(_, kind)| self.create_modifier(kind))
            .collect();
        if modifiers.is_empty() {
            None
        } else {
            Some(self.node_list(modifiers))
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    fn create_literal(&mut self, kind: SyntaxKind, data: LiteralData) -> NodeIndex {
        let flags = match kind {
            SyntaxKind::BigIntLiteral => TransformFlags::CONTAINS_ES2020,
            SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::TemplateMiddle
            | SyntaxKind::TemplateTail => TransformFlags::CONTAINS_ES2015,
            SyntaxKind::JsxText => TransformFlags::CONTAINS_JSX,
            _ => TransformFlags::empty(),
        };
        let node = self.alloc(kind, data);
        self.finish(node, flags)
    }

    fn literal_data(text: &str) -> LiteralData {
        LiteralData {
            text: text.to_string(),
            raw_text: None,
            is_single_quote: false,
            contains_only_trivia_white_spaces: false,
        }
    }

    pub fn create_numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.create_literal(SyntaxKind::NumericLiteral, Self::literal_data(text))
    }

    /// Numeric literal for a non-negative value. Negative values are written
    /// as a prefix minus applied to the absolute value.
    #[track_caller]
    pub fn create_numeric_literal_from_value(&mut self, value: f64) -> NodeIndex {
        if value < 0.0 || (value == 0.0 && value.is_sign_negative()) {
            panic!("negative numbers should be created with a prefix minus: {value}");
        }
        let text = number_to_js_string(value);
        self.create_numeric_literal(&text)
    }

    pub fn create_big_int_literal(&mut self, text: &str) -> NodeIndex {
        self.create_literal(SyntaxKind::BigIntLiteral, Self::literal_data(text))
    }

    pub fn create_string_literal(&mut self, text: &str, is_single_quote: bool) -> NodeIndex {
        let mut data = Self::literal_data(text);
        data.is_single_quote = is_single_quote;
        self.create_literal(SyntaxKind::StringLiteral, data)
    }

    /// String literal with the text of an identifier or literal node.
    pub fn create_string_literal_from_node(&mut self, source: NodeIndex) -> NodeIndex {
        let (text, is_single_quote) = match self.arena.get(source) {
            Some(node) => match (self.arena.get_identifier(node), self.arena.get_literal(node)) {
                (Some(ident), _) => (ident.escaped_text.clone(), false),
                (None, Some(literal)) => (literal.text.clone(), literal.is_single_quote),
                (None, None) => (String::new(), false),
            },
            None => (String::new(), false),
        };
        let node = self.create_string_literal(&text, is_single_quote);
        self.set_original_node(node, source)
    }

    pub fn create_regular_expression_literal(&mut self, text: &str) -> NodeIndex {
        self.create_literal(SyntaxKind::RegularExpressionLiteral, Self::literal_data(text))
    }

    /// Template literal parts. `raw_text` defaults to the cooked text.
    pub fn create_template_literal_like(
        &mut self,
        kind: SyntaxKind,
        text: &str,
        raw_text: Option<&str>,
    ) -> NodeIndex {
        if !kind.is_template_literal_kind() {
            panic!("{kind:?} is not a template literal kind");
        }
        let mut data = Self::literal_data(text);
        data.raw_text = raw_text.map(str::to_string);
        self.create_literal(kind, data)
    }

    pub fn create_no_substitution_template_literal(&mut self, text: &str) -> NodeIndex {
        self.create_template_literal_like(SyntaxKind::NoSubstitutionTemplateLiteral, text, None)
    }

    pub fn create_template_head(&mut self, text: &str) -> NodeIndex {
        self.create_template_literal_like(SyntaxKind::TemplateHead, text, None)
    }

    pub fn create_template_middle(&mut self, text: &str) -> NodeIndex {
        self.create_template_literal_like(SyntaxKind::TemplateMiddle, text, None)
    }

    pub fn create_template_tail(&mut self, text: &str) -> NodeIndex {
        self.create_template_literal_like(SyntaxKind::TemplateTail, text, None)
    }

    pub fn create_jsx_text(&mut self, text: &str, contains_only_trivia_white_spaces: bool) -> NodeIndex {
        let mut data = Self::literal_data(text);
        data.contains_only_trivia_white_spaces = contains_only_trivia_white_spaces;
        self.create_literal(SyntaxKind::JsxText, data)
    }

    pub fn update_jsx_text(
        &mut self,
        node: NodeIndex,
        text: &str,
        contains_only_trivia_white_spaces: bool,
    ) -> NodeIndex {
        let data: LiteralData = self.data_of(node, &[SyntaxKind::JsxText]);
        if data.text == text && data.contains_only_trivia_white_spaces == contains_only_trivia_white_spaces {
            return node;
        }
        let updated = self.create_jsx_text(text, contains_only_trivia_white_spaces);
        self.update(updated, node)
    }

    /// Literal node of any literal kind with the given text.
    pub fn create_literal_like_node(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        match kind {
            SyntaxKind::NumericLiteral => self.create_numeric_literal(text),
            SyntaxKind::BigIntLiteral => self.create_big_int_literal(text),
            SyntaxKind::StringLiteral => self.create_string_literal(text, false),
            SyntaxKind::JsxText => self.create_jsx_text(text, false),
            SyntaxKind::JsxTextAllWhiteSpaces => self.create_jsx_text(text, true),
            SyntaxKind::RegularExpressionLiteral => self.create_regular_expression_literal(text),
            SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::TemplateMiddle
            | SyntaxKind::TemplateTail => self.create_template_literal_like(kind, text, None),
            _ => panic!("{kind:?} is not a literal kind"),
        }
    }
}
