#[cfg(test)]
mod tests {
    use call_analytics_dashboard::hooks::use_dashboard::DashboardState;
    use call_analytics_dashboard::models::{
        analytics::{CallAnalytics, DealCount, evolution_series},
        call_log::{CallLogRecord, CallStatus},
        dashboard::DashboardData,
        error::AppError,
    };
    use call_analytics_dashboard::utils::format::{PLACEHOLDER, or_placeholder};
    use indexmap::IndexMap;
    use std::rc::Rc;

    // Helper function to decode an analytics payload
    fn analytics(json: &str) -> CallAnalytics {
        serde_json::from_str(json).expect("analytics fixture should decode")
    }

    // Helper function to create a call record from JSON fields
    fn call_record(fields: serde_json::Value) -> CallLogRecord {
        let mut base = serde_json::json!({
            "Run_ID": "run-1",
            "date_time": "2024-02-10T14:03:22",
            "Origin": "Dallas, TX",
            "destination": "Atlanta, GA",
            "turns": 2,
            "flag_closed_deal": false,
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), fields.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(base).expect("call fixture should decode")
    }

    fn full_payload() -> &'static str {
        r#"{
            "summary": {
                "success_rate": 62.5,
                "rate_efficiency_ratio": 94.2,
                "avg_negotiation_turns": 2.4,
                "total_calls": 32
            },
            "evolution": {
                "2024-02-10": {"closed": 2, "total": 4},
                "2024-02-09": {"closed": 3, "total": 3}
            },
            "origin_success": {
                "Dallas, TX": {"closed": 2, "total": 3},
                "Chicago, IL": {"closed": 1, "total": 4}
            },
            "sentiment_distribution": {
                "positive": 14,
                "neutral": 10,
                "negative": 8
            }
        }"#
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_timeout_display() {
        let error = AppError::Timeout("no response within 15000ms".to_string());
        assert_eq!(error.to_string(), "Request timed out: no response within 15000ms");
    }

    // ===== Evolution Series Tests =====

    #[test]
    fn test_evolution_series_is_chronological() {
        let payload = analytics(full_payload());
        let series = evolution_series(&payload.evolution);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "2024-02-09");
        assert_eq!(series[0].rate, 100.0);
        assert_eq!(series[0].total_loads, 3);
        assert_eq!(series[1].date, "2024-02-10");
        assert_eq!(series[1].rate, 50.0);
        assert_eq!(series[1].total_loads, 4);
    }

    #[test]
    fn test_evolution_series_sorted_and_stable() {
        // Same day in two spellings: equal timestamps keep response order
        let payload = analytics(
            r#"{
                "evolution": {
                    "2024-03-02": {"closed": 1, "total": 2},
                    "2024-03-01T00:00:00Z": {"closed": 1, "total": 1},
                    "2024-02-28": {"closed": 0, "total": 5},
                    "2024-03-01": {"closed": 0, "total": 1}
                }
            }"#,
        );

        let series = evolution_series(&payload.evolution);
        let timestamps: Vec<i64> = series.iter().filter_map(|p| p.timestamp).collect();

        assert_eq!(timestamps.len(), 4);
        assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(series[1].date, "2024-03-01T00:00:00Z");
        assert_eq!(series[2].date, "2024-03-01");
    }

    #[test]
    fn test_evolution_rate_matches_rounded_ratio() {
        let mut evolution = IndexMap::new();
        for (day, (closed, total)) in [(1, 3), (2, 3), (5, 7), (0, 9), (9, 9)].iter().enumerate() {
            evolution.insert(
                format!("2024-01-{:02}", day + 1),
                DealCount {
                    closed: *closed,
                    total: *total,
                },
            );
        }

        for (point, counts) in evolution_series(&evolution).iter().zip(evolution.values()) {
            let expected = (counts.closed as f64 / counts.total as f64 * 1000.0).round() / 10.0;
            assert_eq!(point.rate, expected);
        }
    }

    #[test]
    fn test_evolution_zero_total_is_zero_rate() {
        let payload = analytics(r#"{"evolution": {"2024-02-11": {"closed": 0, "total": 0}}}"#);
        let series = evolution_series(&payload.evolution);

        assert_eq!(series[0].rate, 0.0);
        assert!(series[0].rate.is_finite());
        assert_eq!(series[0].total_loads, 0);
    }

    // ===== Missing Section Tests =====

    #[test]
    fn test_summary_only_payload_renders_empty_series() {
        let payload = analytics(
            r#"{"summary": {"success_rate": 50, "rate_efficiency_ratio": 90,
                "avg_negotiation_turns": 3, "total_calls": 10}}"#,
        );
        let data = DashboardData::merge(payload, vec![]).unwrap();

        assert_eq!(
            or_placeholder(data.summary.success_rate_label()),
            "50.0%"
        );
        assert_eq!(or_placeholder(data.summary.total_calls_label()), "10");
        assert!(data.evolution_series().is_empty());
        assert!(data.origin_series().is_empty());
        assert!(data.sentiment_series().is_empty());
        assert!(data.raw_logs.is_empty());
    }

    #[test]
    fn test_null_sections_are_treated_as_absent() {
        let payload = analytics(
            r#"{"summary": {}, "evolution": null, "origin_success": null,
                "sentiment_distribution": null}"#,
        );

        assert!(payload.evolution.is_empty());
        assert!(payload.origin_success.is_empty());
        assert!(payload.sentiment_distribution.is_empty());
    }

    #[test]
    fn test_partial_summary_uses_placeholder() {
        let payload = analytics(r#"{"summary": {"total_calls": 7}}"#);
        let summary = payload.summary.unwrap();

        assert_eq!(or_placeholder(summary.success_rate_label()), PLACEHOLDER);
        assert_eq!(or_placeholder(summary.avg_turns_label()), PLACEHOLDER);
        assert_eq!(or_placeholder(summary.total_calls_label()), "7");
    }

    #[test]
    fn test_missing_summary_blocks_dashboard() {
        let payload = analytics(r#"{"evolution": {"2024-02-10": {"closed": 1, "total": 2}}}"#);
        let result = DashboardData::merge(payload, vec![]);

        assert!(matches!(result, Err(AppError::MissingSummary)));
        assert_eq!(DashboardState::settle(result), DashboardState::Unavailable);
    }

    // ===== Origin & Sentiment Tests =====

    #[test]
    fn test_origin_series_formats_rate_strings() {
        let data = DashboardData::merge(analytics(full_payload()), vec![]).unwrap();
        let origins = data.origin_series();

        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0].name, "Dallas, TX");
        assert_eq!(origins[0].rate, "66.7");
        assert_eq!(origins[1].name, "Chicago, IL");
        assert_eq!(origins[1].rate, "25.0");
    }

    #[test]
    fn test_sentiment_series_passes_raw_counts() {
        let data = DashboardData::merge(analytics(full_payload()), vec![]).unwrap();
        let slices = data.sentiment_series();

        let pairs: Vec<(&str, u64)> = slices.iter().map(|s| (s.name.as_str(), s.value)).collect();
        assert_eq!(pairs, vec![("positive", 14), ("neutral", 10), ("negative", 8)]);
    }

    // ===== Call Log Tests =====

    #[test]
    fn test_display_amount_prefers_final_rate() {
        let negotiated = call_record(serde_json::json!({"final_rate": 950, "original_rate": 1200}));
        let fallback = call_record(serde_json::json!({"original_rate": 1200}));

        assert_eq!(negotiated.display_amount(), Some(950.0));
        assert_eq!(negotiated.amount_label(), "$950");
        assert_eq!(fallback.display_amount(), Some(1200.0));
        assert_eq!(fallback.amount_label(), "$1200");
    }

    #[test]
    fn test_null_final_rate_falls_back() {
        let record = call_record(serde_json::json!({"final_rate": null, "original_rate": 800.5}));
        assert_eq!(record.amount_label(), "$800.5");
    }

    #[test]
    fn test_carrier_fallback() {
        let unnamed = call_record(serde_json::json!({}));
        let named = call_record(serde_json::json!({
            "Carrier_Legal_Name": "Lone Star Freight LLC",
            "mc_number": "MC-123456"
        }));

        assert_eq!(unnamed.carrier_label(), "N/A");
        assert_eq!(named.carrier_label(), "Lone Star Freight LLC");
        assert_eq!(named.mc_number.as_deref(), Some("MC-123456"));
    }

    #[test]
    fn test_status_is_binary() {
        let closed = call_record(serde_json::json!({"flag_closed_deal": true}));
        let failed = call_record(serde_json::json!({}));

        assert_eq!(closed.status(), CallStatus::Closed);
        assert_eq!(failed.status(), CallStatus::Failed);
        assert_eq!(failed.status().label(), "Failed");
    }

    #[test]
    fn test_logs_keep_response_order() {
        let logs: Vec<CallLogRecord> = serde_json::from_str(
            r#"[
                {"Run_ID": "c", "date_time": "2024-02-12T09:00:00"},
                {"Run_ID": "a", "date_time": "2024-02-10T09:00:00"},
                {"Run_ID": "b", "date_time": "2024-02-11T09:00:00"}
            ]"#,
        )
        .unwrap();

        let data = DashboardData::merge(analytics(full_payload()), logs).unwrap();
        let ids: Vec<&str> = data.raw_logs.iter().map(|r| r.run_id.as_str()).collect();

        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(data.duplicate_rows, 0);
    }

    // ===== DashboardState Tests =====

    #[test]
    fn test_dashboard_state_settles_ready() {
        let data = DashboardData::merge(analytics(full_payload()), vec![]).unwrap();
        let state = DashboardState::settle(Ok(data.clone()));

        assert!(state.is_terminal());
        assert_eq!(state.data(), Some(&Rc::new(data)));
    }

    #[test]
    fn test_dashboard_state_settles_unavailable_on_error() {
        let state = DashboardState::settle(Err(AppError::ApiError(
            "Server error 500 Internal Server Error".to_string(),
        )));

        assert_eq!(state, DashboardState::Unavailable);
        assert!(state.is_terminal());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_dashboard_state_loading() {
        let state = DashboardState::Loading;

        assert!(state.is_loading());
        assert!(!state.is_terminal());
        assert!(state.data().is_none());
    }
}
