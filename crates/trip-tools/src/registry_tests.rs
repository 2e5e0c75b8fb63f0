//! Integration tests for the travel tool registry and executor

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;
    use trip_core::estimator::FixedEstimator;
    use trip_core::tools::{
        RegistryError, Tool, ToolCall, ToolError, ToolExecutor, ToolRegistry, ToolResult,
    };

    use crate::{TravelToolExecutor, TravelToolExecutorBuilder, BUILTIN_TOOL_NAMES};

    // Stand-in for an API-backed tool such as a currency converter
    struct ExchangeRateTool {
        rate: f64,
    }

    #[async_trait]
    impl Tool for ExchangeRateTool {
        fn name(&self) -> &str {
            "get_exchange_rate"
        }

        fn description(&self) -> &str {
            "Converts an amount into the base currency"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            json!({
                "type": "object",
                "properties": {
                    "amount": { "type": "number", "description": "Amount to convert" }
                },
                "required": ["amount"]
            })
        }

        async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
            let amount = args["amount"]
                .as_f64()
                .ok_or_else(|| ToolError::InvalidArguments("Missing 'amount'".to_string()))?;
            Ok(ToolResult::ok((amount * self.rate).to_string()))
        }
    }

    fn call(name: &str, args: serde_json::Value) -> ToolCall {
        ToolCall::function(format!("call_{}", name), name, args.to_string())
    }

    fn parse(result: &ToolResult) -> serde_json::Value {
        serde_json::from_str(&result.result).expect("json result")
    }

    mod tool_registration {
        use super::*;

        #[tokio::test]
        async fn test_custom_tool_alongside_builtins() {
            let executor = TravelToolExecutorBuilder::new()
                .with_default_tools()
                .with_tool(ExchangeRateTool { rate: 2.0 })
                .build();

            assert_eq!(executor.registry().len(), BUILTIN_TOOL_NAMES.len() + 1);

            let result = executor
                .execute(&call("get_exchange_rate", json!({"amount": 21})))
                .await
                .unwrap();
            assert_eq!(result.result, "42");
        }

        #[tokio::test]
        async fn test_custom_tool_cannot_shadow_builtin() {
            struct FakeAdd;

            #[async_trait]
            impl Tool for FakeAdd {
                fn name(&self) -> &str {
                    "add"
                }
                fn description(&self) -> &str {
                    "always zero"
                }
                fn parameters_schema(&self) -> serde_json::Value {
                    json!({"type": "object", "properties": {}})
                }
                async fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
                    Ok(ToolResult::ok("0"))
                }
            }

            let executor = TravelToolExecutorBuilder::new()
                .with_default_tools()
                .with_tool(FakeAdd)
                .build();

            let result = executor
                .execute(&call("add", json!({"a": 1, "b": 2})))
                .await
                .unwrap();
            assert_eq!(result.result, "3");
        }

        #[test]
        fn test_register_tool_after_build() {
            let executor = TravelToolExecutor::new();

            executor
                .register_tool(ExchangeRateTool { rate: 1.1 })
                .unwrap();
            let duplicate = executor.register_tool(ExchangeRateTool { rate: 0.9 });

            assert!(matches!(duplicate, Err(ToolError::Execution(_))));
            assert!(executor.registry().contains("get_exchange_rate"));
        }

        #[test]
        fn test_registry_rejects_duplicate_builtin() {
            let registry = ToolRegistry::new();
            registry.register(crate::AddTool::new()).unwrap();

            let result = registry.register(crate::AddTool::new());
            assert!(matches!(result, Err(RegistryError::DuplicateTool(name)) if name == "add"));
        }
    }

    mod schemas {
        use super::*;

        #[test]
        fn test_schemas_are_functions_with_object_parameters() {
            for schema in TravelToolExecutor::tool_schemas() {
                assert_eq!(schema.schema_type, "function");
                assert!(!schema.function.description.is_empty());
                assert_eq!(
                    schema.function.parameters["type"], "object",
                    "{} parameters should be an object",
                    schema.function.name
                );
            }
        }

        #[test]
        fn test_allocator_schema_requires_budget_tier_and_days() {
            let schemas = TravelToolExecutor::tool_schemas();
            let allocator = schemas
                .iter()
                .find(|schema| schema.function.name == "travel_budget_allocator")
                .expect("allocator schema");

            assert_eq!(
                allocator.function.parameters["required"],
                json!(["total_budget", "trip_tier", "duration_days"])
            );
        }
    }

    mod planning_session {
        use super::*;

        #[tokio::test]
        async fn test_budget_then_hotel_estimate() {
            let executor = TravelToolExecutor::new();

            let budget = executor
                .execute(&call(
                    "travel_budget_allocator",
                    json!({"total_budget": 2000, "trip_tier": "High", "duration_days": 4}),
                ))
                .await
                .unwrap();
            let amounts = parse(&budget);
            assert_eq!(amounts["accommodation"], 818.18);
            assert_eq!(amounts["transportation"], 454.55);
            assert_eq!(amounts["food"], 363.64);
            assert_eq!(amounts["activities"], 272.73);
            assert_eq!(amounts["miscellaneous"], 90.91);

            let tier = executor
                .execute(&call("classify_price_level", json!({"price_level": 4})))
                .await
                .unwrap();
            assert_eq!(parse(&tier)["tier"], "High");
        }

        #[tokio::test]
        async fn test_route_price_with_estimator() {
            let executor = TravelToolExecutor::with_estimator(Arc::new(FixedEstimator::new(
                r#"{"estimated_price": "35", "currency": "USD"}"#,
            )));

            let result = executor
                .execute(&call(
                    "calculate_estimated_route_price",
                    json!({
                        "origin": "Hotel",
                        "destination": "Airport",
                        "total_distance": "12 mi",
                        "total_duration": "25 mins",
                        "directions": []
                    }),
                ))
                .await
                .unwrap();

            assert_eq!(parse(&result), json!({"estimated_price": 35.0, "currency": "USD"}));
        }

        #[tokio::test]
        async fn test_sessions_do_not_share_visited_places() {
            let first = TravelToolExecutor::new();
            let second = TravelToolExecutor::new();
            let places = json!({"places": [{"place_id": "louvre", "name": "Louvre", "rating": 4.7}]});

            let a = first
                .execute(&call("filter_unvisited_places", places.clone()))
                .await
                .unwrap();
            let b = second
                .execute(&call("filter_unvisited_places", places))
                .await
                .unwrap();

            assert_eq!(parse(&a).as_array().map(Vec::len), Some(1));
            assert_eq!(parse(&b).as_array().map(Vec::len), Some(1));
        }

        #[tokio::test]
        async fn test_concurrent_calls_mark_each_place_once() {
            let executor = Arc::new(TravelToolExecutor::new());
            let mut handles = Vec::new();

            for _ in 0..8 {
                let executor = Arc::clone(&executor);
                handles.push(tokio::spawn(async move {
                    let result = executor
                        .execute(&call(
                            "filter_unvisited_places",
                            json!({"places": [{"place_id": "eiffel", "name": "Eiffel Tower"}]}),
                        ))
                        .await
                        .unwrap();
                    parse(&result).as_array().map(Vec::len).unwrap_or_default()
                }));
            }

            let mut returned = 0;
            for handle in handles {
                returned += handle.await.unwrap();
            }

            assert_eq!(returned, 1);
            assert_eq!(executor.visited_places().len(), 1);
        }
    }
}
