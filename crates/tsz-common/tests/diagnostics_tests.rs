use super::*;

#[test]
fn message_table_is_sorted_by_code() {
    let codes: Vec<u32> = DIAGNOSTIC_MESSAGES.iter().map(|m| m.code).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted, "message table must be sorted with unique codes");
}

#[test]
fn lookup_by_code() {
    let message = get_diagnostic_message(diagnostic_codes::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_PRIVATE_NAME_1)
        .expect("4025 should be in the table");
    assert_eq!(message.code, 4025);
    assert_eq!(message.category, DiagnosticCategory::Error);
    assert!(get_message_template(1).is_none());
}

#[test]
fn format_message_fills_placeholders_in_order() {
    let text = format_message(
        diagnostic_messages::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2.message,
        &["x", "Foo", "mod"],
    );
    assert_eq!(
        text,
        "Parameter 'x' of exported function has or is using name 'Foo' from private module 'mod'."
    );
}

#[test]
fn diagnostic_serializes_without_empty_related_information() {
    let diag = Diagnostic::from_message(
        "a.ts".to_string(),
        3,
        1,
        &diagnostic_messages::THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH,
        &[],
    );
    let json = serde_json::to_value(&diag).expect("serialize");
    assert_eq!(json["code"], 7056);
    assert!(json.get("related_information").is_none());

    let with_related = diag.with_related("b.ts".to_string(), 0, 2, "declared here".to_string());
    let json = serde_json::to_value(&with_related).expect("serialize");
    assert_eq!(json["related_information"][0]["file"], "b.ts");
}
