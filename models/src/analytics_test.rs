use super::*;

#[test]
fn chart_data_populates_only_matching_series() {
    let raw = r#"{"labels":["Jan","Feb"],"earnings":[10.5,22.0]}"#;
    let chart: ChartData = serde_json::from_str(raw).expect("decode");
    assert_eq!(chart.labels, vec!["Jan", "Feb"]);
    assert_eq!(chart.earnings, Some(vec![10.5, 22.0]));
    assert_eq!(chart.spending, None);
    assert_eq!(chart.messages, None);
}

#[test]
fn user_analytics_tolerates_missing_last_purchase() {
    let raw = r#"{
        "total_spending": "$0.00",
        "total_tokens_purchased": 0,
        "total_tokens_spent": 0,
        "current_balance": 0,
        "messages_sent": 0,
        "active_chats": 0,
        "favorite_profiles": 0,
        "account_created_days_ago": 1
    }"#;
    let analytics: UserAnalytics = serde_json::from_str(raw).expect("decode");
    assert_eq!(analytics.last_purchase, None);
}

#[test]
fn chart_period_defaults_to_monthly() {
    assert_eq!(ChartPeriod::default(), ChartPeriod::Monthly);
    assert_eq!(ChartPeriod::default().as_str(), "monthly");
}

#[test]
fn chart_period_parse_round_trips_and_rejects_unknowns() {
    for period in [ChartPeriod::Daily, ChartPeriod::Weekly, ChartPeriod::Monthly] {
        assert_eq!(ChartPeriod::parse(period.as_str()), Some(period));
    }
    assert_eq!(ChartPeriod::parse("yearly"), None);
}
