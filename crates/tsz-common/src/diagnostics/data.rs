//! Declaration-emit diagnostic messages.
//!
//! Entries are kept sorted by code.

use super::DiagnosticMessage;

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::THE_INFERRED_TYPE_OF_0_REFERENCES_AN_INACCESSIBLE_1_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY,
    diagnostic_messages::THE_INFERRED_TYPE_OF_0_CANNOT_BE_NAMED_WITHOUT_A_REFERENCE_TO_1_THIS_IS_LIKELY_NOT_PORTABLE,
    diagnostic_messages::IMPORT_DECLARATION_0_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::IMPLEMENTS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::EXTENDS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::EXTENDS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::EXTENDS_CLAUSE_OF_EXPORTED_INTERFACE_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
    diagnostic_messages::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
    diagnostic_messages::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
    diagnostic_messages::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
    diagnostic_messages::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
    diagnostic_messages::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
    diagnostic_messages::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::DEFAULT_EXPORT_OF_THE_MODULE_HAS_OR_IS_USING_PRIVATE_NAME_0,
    diagnostic_messages::TYPE_PARAMETER_0_OF_EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1_FROM_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PROPERTY_0_OF_EXPORTED_CLASS_EXPRESSION_MAY_NOT_BE_PRIVATE_OR_PROTECTED,
    diagnostic_messages::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
    diagnostic_messages::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
    diagnostic_messages::METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::TYPE_PARAMETER_0_OF_EXPORTED_MAPPED_OBJECT_TYPE_IS_USING_PRIVATE_NAME_1,
    diagnostic_messages::THE_TYPE_OF_THIS_NODE_CANNOT_BE_SERIALIZED_BECAUSE_ITS_PROPERTY_0_CANNOT_BE_SERIALIZED,
    diagnostic_messages::RESOLUTION_MODE_ASSERTIONS_ARE_UNSTABLE,
    diagnostic_messages::THE_INFERRED_TYPE_OF_0_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE,
    diagnostic_messages::THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH,
    diagnostic_messages::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0,
    diagnostic_messages::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0_FROM_MODULE_1,
];

pub mod diagnostic_codes {
    pub const THE_INFERRED_TYPE_OF_0_REFERENCES_AN_INACCESSIBLE_1_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY: u32 = 2527;
    pub const THE_INFERRED_TYPE_OF_0_CANNOT_BE_NAMED_WITHOUT_A_REFERENCE_TO_1_THIS_IS_LIKELY_NOT_PORTABLE: u32 = 2742;
    pub const IMPORT_DECLARATION_0_IS_USING_PRIVATE_NAME_1: u32 = 4000;
    pub const TYPE_PARAMETER_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4002;
    pub const TYPE_PARAMETER_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4004;
    pub const TYPE_PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4006;
    pub const TYPE_PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4008;
    pub const TYPE_PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4010;
    pub const TYPE_PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4012;
    pub const TYPE_PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4014;
    pub const TYPE_PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4016;
    pub const IMPLEMENTS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4019;
    pub const EXTENDS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4020;
    pub const EXTENDS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4021;
    pub const EXTENDS_CLAUSE_OF_EXPORTED_INTERFACE_0_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4022;
    pub const EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4023;
    pub const EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4024;
    pub const EXPORTED_VARIABLE_0_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4025;
    pub const PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4026;
    pub const PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4027;
    pub const PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4028;
    pub const PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4029;
    pub const PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4030;
    pub const PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4031;
    pub const PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4032;
    pub const PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4033;
    pub const PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4034;
    pub const PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4035;
    pub const PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4036;
    pub const PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4037;
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4038;
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4039;
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4040;
    pub const RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4041;
    pub const RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4042;
    pub const RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4043;
    pub const RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: u32 = 4044;
    pub const RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4045;
    pub const RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: u32 = 4046;
    pub const RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4047;
    pub const RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: u32 = 4048;
    pub const RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4049;
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED: u32 = 4050;
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: u32 = 4051;
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4052;
    pub const RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED: u32 = 4053;
    pub const RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: u32 = 4054;
    pub const RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4055;
    pub const RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: u32 = 4056;
    pub const RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4057;
    pub const RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED: u32 = 4058;
    pub const RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: u32 = 4059;
    pub const RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4060;
    pub const PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4061;
    pub const PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4062;
    pub const PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4063;
    pub const PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4064;
    pub const PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4065;
    pub const PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4066;
    pub const PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4067;
    pub const PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4068;
    pub const PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4069;
    pub const PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4070;
    pub const PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4071;
    pub const PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4072;
    pub const PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4073;
    pub const PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4074;
    pub const PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4075;
    pub const PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4076;
    pub const PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4077;
    pub const PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4078;
    pub const EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4081;
    pub const DEFAULT_EXPORT_OF_THE_MODULE_HAS_OR_IS_USING_PRIVATE_NAME_0: u32 = 4082;
    pub const TYPE_PARAMETER_0_OF_EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4083;
    pub const EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1_FROM_MODULE_2: u32 = 4084;
    pub const PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4091;
    pub const PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4092;
    pub const PROPERTY_0_OF_EXPORTED_CLASS_EXPRESSION_MAY_NOT_BE_PRIVATE_OR_PROTECTED: u32 = 4094;
    pub const PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4095;
    pub const PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4096;
    pub const PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4097;
    pub const PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: u32 = 4098;
    pub const PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4099;
    pub const PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4100;
    pub const METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: u32 = 4101;
    pub const METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: u32 = 4102;
    pub const TYPE_PARAMETER_0_OF_EXPORTED_MAPPED_OBJECT_TYPE_IS_USING_PRIVATE_NAME_1: u32 = 4103;
    pub const THE_TYPE_OF_THIS_NODE_CANNOT_BE_SERIALIZED_BECAUSE_ITS_PROPERTY_0_CANNOT_BE_SERIALIZED: u32 = 4118;
    pub const RESOLUTION_MODE_ASSERTIONS_ARE_UNSTABLE: u32 = 4125;
    pub const THE_INFERRED_TYPE_OF_0_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE: u32 = 5088;
    pub const THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH: u32 = 7056;
    pub const DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0: u32 = 9005;
    pub const DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0_FROM_MODULE_1: u32 = 9006;
}

pub mod diagnostic_messages {
    use super::diagnostic_codes;
    use crate::diagnostics::{DiagnosticCategory, DiagnosticMessage};

    pub const THE_INFERRED_TYPE_OF_0_REFERENCES_AN_INACCESSIBLE_1_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::THE_INFERRED_TYPE_OF_0_REFERENCES_AN_INACCESSIBLE_1_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY,
        category: DiagnosticCategory::Error,
        message: "The inferred type of '{0}' references an inaccessible '{1}' type. A type annotation is necessary.",
    };
    pub const THE_INFERRED_TYPE_OF_0_CANNOT_BE_NAMED_WITHOUT_A_REFERENCE_TO_1_THIS_IS_LIKELY_NOT_PORTABLE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::THE_INFERRED_TYPE_OF_0_CANNOT_BE_NAMED_WITHOUT_A_REFERENCE_TO_1_THIS_IS_LIKELY_NOT_PORTABLE,
        category: DiagnosticCategory::Error,
        message: "The inferred type of '{0}' cannot be named without a reference to '{1}'. This is likely not portable. A type annotation is necessary.",
    };
    pub const IMPORT_DECLARATION_0_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::IMPORT_DECLARATION_0_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Import declaration '{0}' is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of exported class has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of exported interface has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of constructor signature from exported interface has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of call signature from exported interface has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of public static method from exported class has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of public method from exported class has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of method from exported interface has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of exported function has or is using private name '{1}'.",
    };
    pub const IMPLEMENTS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::IMPLEMENTS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Implements clause of exported class '{0}' has or is using private name '{1}'.",
    };
    pub const EXTENDS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXTENDS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "'extends' clause of exported class '{0}' has or is using private name '{1}'.",
    };
    pub const EXTENDS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXTENDS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "'extends' clause of exported class has or is using private name '{0}'.",
    };
    pub const EXTENDS_CLAUSE_OF_EXPORTED_INTERFACE_0_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXTENDS_CLAUSE_OF_EXPORTED_INTERFACE_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "'extends' clause of exported interface '{0}' has or is using private name '{1}'.",
    };
    pub const EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Exported variable '{0}' has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Exported variable '{0}' has or is using name '{1}' from private module '{2}'.",
    };
    pub const EXPORTED_VARIABLE_0_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Exported variable '{0}' has or is using private name '{1}'.",
    };
    pub const PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Public static property '{0}' of exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Public static property '{0}' of exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Public static property '{0}' of exported class has or is using private name '{1}'.",
    };
    pub const PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Public property '{0}' of exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Public property '{0}' of exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Public property '{0}' of exported class has or is using private name '{1}'.",
    };
    pub const PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Property '{0}' of exported interface has or is using name '{1}' from private module '{2}'.",
    };
    pub const PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Property '{0}' of exported interface has or is using private name '{1}'.",
    };
    pub const PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter type of public static setter '{0}' from exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter type of public static setter '{0}' from exported class has or is using private name '{1}'.",
    };
    pub const PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter type of public setter '{0}' from exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter type of public setter '{0}' from exported class has or is using private name '{1}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Return type of public static getter '{0}' from exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Return type of public static getter '{0}' from exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Return type of public static getter '{0}' from exported class has or is using private name '{1}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Return type of public getter '{0}' from exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Return type of public getter '{0}' from exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Return type of public getter '{0}' from exported class has or is using private name '{1}'.",
    };
    pub const RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Return type of constructor signature from exported interface has or is using name '{0}' from private module '{1}'.",
    };
    pub const RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Return type of constructor signature from exported interface has or is using private name '{0}'.",
    };
    pub const RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Return type of call signature from exported interface has or is using name '{0}' from private module '{1}'.",
    };
    pub const RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Return type of call signature from exported interface has or is using private name '{0}'.",
    };
    pub const RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Return type of index signature from exported interface has or is using name '{0}' from private module '{1}'.",
    };
    pub const RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Return type of index signature from exported interface has or is using private name '{0}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Return type of public static method from exported class has or is using name '{0}' from external module {1} but cannot be named.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Return type of public static method from exported class has or is using name '{0}' from private module '{1}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Return type of public static method from exported class has or is using private name '{0}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Return type of public method from exported class has or is using name '{0}' from external module {1} but cannot be named.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Return type of public method from exported class has or is using name '{0}' from private module '{1}'.",
    };
    pub const RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Return type of public method from exported class has or is using private name '{0}'.",
    };
    pub const RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Return type of method from exported interface has or is using name '{0}' from private module '{1}'.",
    };
    pub const RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Return type of method from exported interface has or is using private name '{0}'.",
    };
    pub const RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Return type of exported function has or is using name '{0}' from external module {1} but cannot be named.",
    };
    pub const RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Return type of exported function has or is using name '{0}' from private module '{1}'.",
    };
    pub const RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Return type of exported function has or is using private name '{0}'.",
    };
    pub const PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of constructor from exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of constructor from exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of constructor from exported class has or is using private name '{1}'.",
    };
    pub const PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of constructor signature from exported interface has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of constructor signature from exported interface has or is using private name '{1}'.",
    };
    pub const PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of call signature from exported interface has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of call signature from exported interface has or is using private name '{1}'.",
    };
    pub const PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of public static method from exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of public static method from exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of public static method from exported class has or is using private name '{1}'.",
    };
    pub const PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of public method from exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of public method from exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of public method from exported class has or is using private name '{1}'.",
    };
    pub const PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of method from exported interface has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of method from exported interface has or is using private name '{1}'.",
    };
    pub const PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of exported function has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of exported function has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of exported function has or is using private name '{1}'.",
    };
    pub const EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Exported type alias '{0}' has or is using private name '{1}'.",
    };
    pub const DEFAULT_EXPORT_OF_THE_MODULE_HAS_OR_IS_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::DEFAULT_EXPORT_OF_THE_MODULE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Default export of the module has or is using private name '{0}'.",
    };
    pub const TYPE_PARAMETER_0_OF_EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of exported type alias has or is using private name '{1}'.",
    };
    pub const EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1_FROM_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1_FROM_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Exported type alias '{0}' has or is using private name '{1}' from module {2}.",
    };
    pub const PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of index signature from exported interface has or is using name '{1}' from private module '{2}'.",
    };
    pub const PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Parameter '{0}' of index signature from exported interface has or is using private name '{1}'.",
    };
    pub const PROPERTY_0_OF_EXPORTED_CLASS_EXPRESSION_MAY_NOT_BE_PRIVATE_OR_PROTECTED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PROPERTY_0_OF_EXPORTED_CLASS_EXPRESSION_MAY_NOT_BE_PRIVATE_OR_PROTECTED,
        category: DiagnosticCategory::Error,
        message: "Property '{0}' of exported class expression may not be private or protected.",
    };
    pub const PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Public static method '{0}' of exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Public static method '{0}' of exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Public static method '{0}' of exported class has or is using private name '{1}'.",
    };
    pub const PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
        category: DiagnosticCategory::Error,
        message: "Public method '{0}' of exported class has or is using name '{1}' from external module {2} but cannot be named.",
    };
    pub const PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Public method '{0}' of exported class has or is using name '{1}' from private module '{2}'.",
    };
    pub const PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Public method '{0}' of exported class has or is using private name '{1}'.",
    };
    pub const METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
        category: DiagnosticCategory::Error,
        message: "Method '{0}' of exported interface has or is using name '{1}' from private module '{2}'.",
    };
    pub const METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Method '{0}' of exported interface has or is using private name '{1}'.",
    };
    pub const TYPE_PARAMETER_0_OF_EXPORTED_MAPPED_OBJECT_TYPE_IS_USING_PRIVATE_NAME_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETER_0_OF_EXPORTED_MAPPED_OBJECT_TYPE_IS_USING_PRIVATE_NAME_1,
        category: DiagnosticCategory::Error,
        message: "Type parameter '{0}' of exported mapped object type is using private name '{1}'.",
    };
    pub const THE_TYPE_OF_THIS_NODE_CANNOT_BE_SERIALIZED_BECAUSE_ITS_PROPERTY_0_CANNOT_BE_SERIALIZED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::THE_TYPE_OF_THIS_NODE_CANNOT_BE_SERIALIZED_BECAUSE_ITS_PROPERTY_0_CANNOT_BE_SERIALIZED,
        category: DiagnosticCategory::Error,
        message: "The type of this node cannot be serialized because its property '{0}' cannot be serialized.",
    };
    pub const RESOLUTION_MODE_ASSERTIONS_ARE_UNSTABLE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RESOLUTION_MODE_ASSERTIONS_ARE_UNSTABLE,
        category: DiagnosticCategory::Error,
        message: "'resolution-mode' assertions are unstable. Use nightly TypeScript to silence this error. Try updating with 'npm install -D typescript@next'.",
    };
    pub const THE_INFERRED_TYPE_OF_0_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::THE_INFERRED_TYPE_OF_0_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE,
        category: DiagnosticCategory::Error,
        message: "The inferred type of '{0}' references a type with a cyclic structure which cannot be trivially serialized. A type annotation is necessary.",
    };
    pub const THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH,
        category: DiagnosticCategory::Error,
        message: "The inferred type of this node exceeds the maximum length the compiler will serialize. An explicit type annotation is needed.",
    };
    pub const DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0,
        category: DiagnosticCategory::Error,
        message: "Declaration emit for this file requires using private name '{0}'. An explicit type annotation may unblock declaration emit.",
    };
    pub const DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0_FROM_MODULE_1: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0_FROM_MODULE_1,
        category: DiagnosticCategory::Error,
        message: "Declaration emit for this file requires using private name '{0}' from module '{1}'. An explicit type annotation may unblock declaration emit.",
    };
}
