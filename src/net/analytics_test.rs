use super::*;

#[test]
fn period_query_carries_the_wire_period_name() {
    assert_eq!(period_query(ChartPeriod::Daily), vec![("period", "daily".to_owned())]);
    assert_eq!(
        period_query(ChartPeriod::default()),
        vec![("period", "monthly".to_owned())]
    );
}
