//! Bit sets carried on nodes and on the factory.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Parser-level node flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NodeFlags: u32 {
        const LET = 1 << 0;
        const CONST = 1 << 1;
        const USING = 1 << 2;
        const NESTED_NAMESPACE = 1 << 3;
        /// Node was created by the factory rather than the parser.
        const SYNTHESIZED = 1 << 4;
        const NAMESPACE = 1 << 5;
        const OPTIONAL_CHAIN = 1 << 6;
        const EXPORT_CONTEXT = 1 << 7;
        const CONTAINS_THIS = 1 << 8;
        const HAS_IMPLICIT_RETURN = 1 << 9;
        const HAS_EXPLICIT_RETURN = 1 << 10;
        /// `declare global { }`
        const GLOBAL_AUGMENTATION = 1 << 11;
        const HAS_ASYNC_FUNCTIONS = 1 << 12;
        const THIS_NODE_HAS_ERROR = 1 << 18;
        const JAVASCRIPT_FILE = 1 << 19;
        const AMBIENT = 1 << 25;
        const JSON_FILE = 1 << 27;

        const AWAIT_USING = Self::CONST.bits() | Self::USING.bits();
        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits();
    }
}

bitflags! {
    /// Effective modifier flags computed from a node's modifier list.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const READONLY = 1 << 3;
        const OVERRIDE = 1 << 4;
        const EXPORT = 1 << 5;
        const ABSTRACT = 1 << 6;
        const AMBIENT = 1 << 7;
        const STATIC = 1 << 8;
        const ACCESSOR = 1 << 9;
        const ASYNC = 1 << 10;
        const DEFAULT = 1 << 11;
        const CONST = 1 << 12;
        const IN = 1 << 13;
        const OUT = 1 << 14;
        const DECORATOR = 1 << 15;

        const ACCESSIBILITY_MODIFIER =
            Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER =
            Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
        const NON_PUBLIC_ACCESSIBILITY_MODIFIER = Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const TYPESCRIPT_MODIFIER = Self::AMBIENT.bits()
            | Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::READONLY.bits()
            | Self::ABSTRACT.bits()
            | Self::CONST.bits()
            | Self::OVERRIDE.bits()
            | Self::IN.bits()
            | Self::OUT.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
        const ALL = Self::EXPORT.bits()
            | Self::AMBIENT.bits()
            | Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::STATIC.bits()
            | Self::READONLY.bits()
            | Self::ABSTRACT.bits()
            | Self::ACCESSOR.bits()
            | Self::ASYNC.bits()
            | Self::DEFAULT.bits()
            | Self::CONST.bits()
            | Self::DECORATOR.bits()
            | Self::IN.bits()
            | Self::OUT.bits()
            | Self::OVERRIDE.bits();
        const MODIFIER = Self::ALL.bits() & !Self::DECORATOR.bits();
    }
}

bitflags! {
    /// Per-subtree summary of constructs that later lowering passes must handle.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TransformFlags: u32 {
        const CONTAINS_TYPESCRIPT = 1 << 0;
        const CONTAINS_JSX = 1 << 1;
        const CONTAINS_ESNEXT = 1 << 2;
        const CONTAINS_ES2022 = 1 << 3;
        const CONTAINS_ES2021 = 1 << 4;
        const CONTAINS_ES2020 = 1 << 5;
        const CONTAINS_ES2019 = 1 << 6;
        const CONTAINS_ES2018 = 1 << 7;
        const CONTAINS_ES2017 = 1 << 8;
        const CONTAINS_ES2016 = 1 << 9;
        const CONTAINS_ES2015 = 1 << 10;
        const CONTAINS_GENERATOR = 1 << 11;
        const CONTAINS_DESTRUCTURING_ASSIGNMENT = 1 << 12;
        const CONTAINS_TYPESCRIPT_CLASS_SYNTAX = 1 << 13;
        const CONTAINS_LEXICAL_THIS = 1 << 14;
        const CONTAINS_REST_OR_SPREAD = 1 << 15;
        const CONTAINS_OBJECT_REST_OR_SPREAD = 1 << 16;
        const CONTAINS_COMPUTED_PROPERTY_NAME = 1 << 17;
        const CONTAINS_BLOCK_SCOPED_BINDING = 1 << 18;
        const CONTAINS_BINDING_PATTERN = 1 << 19;
        const CONTAINS_YIELD = 1 << 20;
        const CONTAINS_AWAIT = 1 << 21;
        const CONTAINS_HOISTED_DECLARATION_OR_COMPLETION = 1 << 22;
        const CONTAINS_DYNAMIC_IMPORT = 1 << 23;
        const CONTAINS_CLASS_FIELDS = 1 << 24;
        const CONTAINS_DECORATORS = 1 << 25;
        const CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT = 1 << 26;
        const CONTAINS_LEXICAL_SUPER = 1 << 27;
        const CONTAINS_UPDATE_EXPRESSION_FOR_IDENTIFIER = 1 << 28;
        const CONTAINS_PRIVATE_IDENTIFIER_IN_EXPRESSION = 1 << 29;
        const HAS_COMPUTED_FLAGS = 1 << 31;

        // Exclusion masks: bits that stop propagating at a node of the given shape.
        const OUTER_EXPRESSION_EXCLUDES = Self::HAS_COMPUTED_FLAGS.bits();
        const PROPERTY_ACCESS_EXCLUDES = Self::OUTER_EXPRESSION_EXCLUDES.bits();
        const NODE_EXCLUDES = Self::PROPERTY_ACCESS_EXCLUDES.bits();
        const ARROW_FUNCTION_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_TYPESCRIPT_CLASS_SYNTAX.bits()
            | Self::CONTAINS_BLOCK_SCOPED_BINDING.bits()
            | Self::CONTAINS_YIELD.bits()
            | Self::CONTAINS_AWAIT.bits()
            | Self::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION.bits()
            | Self::CONTAINS_BINDING_PATTERN.bits()
            | Self::CONTAINS_OBJECT_REST_OR_SPREAD.bits()
            | Self::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT.bits();
        const FUNCTION_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_TYPESCRIPT_CLASS_SYNTAX.bits()
            | Self::CONTAINS_LEXICAL_THIS.bits()
            | Self::CONTAINS_LEXICAL_SUPER.bits()
            | Self::CONTAINS_BLOCK_SCOPED_BINDING.bits()
            | Self::CONTAINS_YIELD.bits()
            | Self::CONTAINS_AWAIT.bits()
            | Self::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION.bits()
            | Self::CONTAINS_BINDING_PATTERN.bits()
            | Self::CONTAINS_OBJECT_REST_OR_SPREAD.bits()
            | Self::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT.bits();
        const CONSTRUCTOR_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_LEXICAL_THIS.bits()
            | Self::CONTAINS_LEXICAL_SUPER.bits()
            | Self::CONTAINS_BLOCK_SCOPED_BINDING.bits()
            | Self::CONTAINS_YIELD.bits()
            | Self::CONTAINS_AWAIT.bits()
            | Self::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION.bits()
            | Self::CONTAINS_BINDING_PATTERN.bits()
            | Self::CONTAINS_OBJECT_REST_OR_SPREAD.bits()
            | Self::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT.bits();
        const METHOD_OR_ACCESSOR_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_LEXICAL_THIS.bits()
            | Self::CONTAINS_LEXICAL_SUPER.bits()
            | Self::CONTAINS_BLOCK_SCOPED_BINDING.bits()
            | Self::CONTAINS_YIELD.bits()
            | Self::CONTAINS_AWAIT.bits()
            | Self::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION.bits()
            | Self::CONTAINS_BINDING_PATTERN.bits()
            | Self::CONTAINS_OBJECT_REST_OR_SPREAD.bits();
        const PROPERTY_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_LEXICAL_THIS.bits()
            | Self::CONTAINS_LEXICAL_SUPER.bits();
        const CLASS_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_TYPESCRIPT_CLASS_SYNTAX.bits()
            | Self::CONTAINS_COMPUTED_PROPERTY_NAME.bits();
        const MODULE_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_TYPESCRIPT_CLASS_SYNTAX.bits()
            | Self::CONTAINS_LEXICAL_THIS.bits()
            | Self::CONTAINS_LEXICAL_SUPER.bits()
            | Self::CONTAINS_BLOCK_SCOPED_BINDING.bits()
            | Self::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION.bits()
            | Self::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT.bits();
        /// Type nodes only ever report that they are TypeScript syntax.
        const TYPE_EXCLUDES = !Self::CONTAINS_TYPESCRIPT.bits();
        const OBJECT_LITERAL_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_TYPESCRIPT_CLASS_SYNTAX.bits()
            | Self::CONTAINS_COMPUTED_PROPERTY_NAME.bits()
            | Self::CONTAINS_OBJECT_REST_OR_SPREAD.bits();
        const ARRAY_LITERAL_OR_CALL_OR_NEW_EXCLUDES =
            Self::NODE_EXCLUDES.bits() | Self::CONTAINS_REST_OR_SPREAD.bits();
        const VARIABLE_DECLARATION_LIST_EXCLUDES = Self::NODE_EXCLUDES.bits()
            | Self::CONTAINS_BINDING_PATTERN.bits()
            | Self::CONTAINS_OBJECT_REST_OR_SPREAD.bits();
        const PARAMETER_EXCLUDES = Self::NODE_EXCLUDES.bits();
        const CATCH_CLAUSE_EXCLUDES =
            Self::NODE_EXCLUDES.bits() | Self::CONTAINS_OBJECT_REST_OR_SPREAD.bits();
        const BINDING_PATTERN_EXCLUDES =
            Self::NODE_EXCLUDES.bits() | Self::CONTAINS_REST_OR_SPREAD.bits();

        const CONTAINS_LEXICAL_THIS_OR_SUPER =
            Self::CONTAINS_LEXICAL_THIS.bits() | Self::CONTAINS_LEXICAL_SUPER.bits();
        /// Bits a computed property name leaks past its declaration's exclusion mask.
        const PROPERTY_NAME_PROPAGATING_FLAGS =
            Self::CONTAINS_LEXICAL_THIS.bits() | Self::CONTAINS_LEXICAL_SUPER.bits();
    }
}

bitflags! {
    /// Flags on auto-generated identifiers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct GeneratedIdentifierFlags: u32 {
        // Kinds. Exactly one of these is set.
        /// Function-scoped temporary (`_a`, `_b`, ...).
        const AUTO = 1;
        /// Loop variable (`_i`, `_j`, ...).
        const LOOP = 2;
        /// Name derived from a base string and made unique.
        const UNIQUE = 3;
        /// Name derived from a node.
        const NODE = 4;
        const KIND_MASK = 7;

        /// Reserve the name in nested scopes as well.
        const RESERVED_IN_NESTED_SCOPES = 1 << 3;
        /// Try the base name before appending a suffix.
        const OPTIMISTIC = 1 << 4;
        /// Unique within the whole file rather than the current scope.
        const FILE_LEVEL = 1 << 5;
        /// The printer may substitute the name.
        const ALLOW_NAME_SUBSTITUTION = 1 << 6;
    }
}

impl GeneratedIdentifierFlags {
    #[inline]
    pub fn kind(self) -> GeneratedIdentifierFlags {
        self & GeneratedIdentifierFlags::KIND_MASK
    }
}

bitflags! {
    /// Factory-wide policy switches.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NodeFactoryFlags: u32 {
        /// Use the identity parenthesizer instead of the precedence-aware one.
        const NO_PARENTHESIZER_RULES = 1 << 0;
        /// Node conversions (binding pattern to assignment pattern, ...) are unavailable.
        const NO_NODE_CONVERTERS = 1 << 1;
        /// Property accesses created by the factory are printed without indentation.
        const NO_INDENTATION_ON_FRESH_PROPERTY_ACCESS = 1 << 2;
        /// `update_*` does not record the replaced node as `original`.
        const NO_ORIGINAL_NODE = 1 << 3;
    }
}
