use super::*;

#[test]
fn test_tool_call_serializes_type_field() {
    let tool_call = ToolCall::function("call-1", "travel_budget_allocator", r#"{"total_budget": 1000}"#);

    let value = serde_json::to_value(&tool_call).unwrap();

    assert_eq!(value["type"], "function");
    assert_eq!(value["function"]["name"], "travel_budget_allocator");
    assert_eq!(tool_call.id, "call-1");
}

#[test]
fn test_tool_result_constructors() {
    let ok = ToolResult::ok("done");
    assert!(ok.success);
    assert!(ok.display_preference.is_none());

    let json = ToolResult::json(&serde_json::json!({"food": 100.0}));
    assert!(json.success);
    assert_eq!(json.display_preference.as_deref(), Some("json"));
    assert_eq!(json.result, r#"{"food":100.0}"#);

    let failed = ToolResult::failed("nope");
    assert!(!failed.success);
    assert_eq!(failed.result, "nope");
}

#[test]
fn test_tool_result_omits_missing_display_preference() {
    let value = serde_json::to_value(ToolResult::ok("x")).unwrap();
    assert!(value.get("display_preference").is_none());

    let parsed: ToolResult = serde_json::from_str(r#"{"success": true, "result": "x"}"#).unwrap();
    assert_eq!(parsed, ToolResult::ok("x"));
}

#[test]
fn test_allocation_reexports_line_up() {
    let allocation = allocate(1200.0, "Low", 4).unwrap();
    let named = allocation.to_named();

    assert_eq!(named.len(), BudgetCategory::ALL.len());
    assert_eq!(named["accommodation"], 420.0);
    assert_eq!(TripTier::from_price_level(3), TripTier::Medium);
}
