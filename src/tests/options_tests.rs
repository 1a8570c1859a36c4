use super::parse_emit_options;

#[test]
fn test_parse_emit_options_from_compiler_options() {
    let options = parse_emit_options(
        r#"{
            "declaration": true,
            "stripInternal": true,
            "isNightly": true
        }"#,
    )
    .expect("valid options");
    assert!(options.strip_internal);
    assert!(options.is_nightly);
}

#[test]
fn test_parse_emit_options_defaults() {
    let options = parse_emit_options("{}").expect("valid options");
    assert!(!options.strip_internal);
    assert!(!options.is_nightly);
}

#[test]
fn test_parse_emit_options_rejects_wrong_types() {
    assert!(parse_emit_options(r#"{ "stripInternal": "yes" }"#).is_err());
}
