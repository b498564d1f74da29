use async_trait::async_trait;
use deskcalc::core::RateSource;
use deskcalc::utils::error::{CalcError, Result};
use deskcalc::MenuSession;
use std::io::Cursor;

struct FixedRate(f64);

#[async_trait]
impl RateSource for FixedRate {
    async fn fetch_rate(&self, _from: &str, _to: &str) -> Result<f64> {
        Ok(self.0)
    }
}

struct FailingRates;

#[async_trait]
impl RateSource for FailingRates {
    async fn fetch_rate(&self, _from: &str, to: &str) -> Result<f64> {
        Err(CalcError::UnknownCurrency {
            code: to.to_string(),
        })
    }
}

async fn run_session<S: RateSource>(input: &str, rates: S) -> String {
    let mut output = Vec::new();
    let mut session = MenuSession::new(Cursor::new(input.to_string()), &mut output, rates);
    session.run().await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_basic_calculator_flow() {
    let out = run_session("1\n2+3*4\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Basic Calculator"));
    assert!(out.contains("Result: 14"));
}

#[tokio::test]
async fn test_scientific_calculator_flow() {
    let out = run_session("2\nsqrt(16)\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Scientific Calculator"));
    assert!(out.contains("Result: 4"));
}

#[tokio::test]
async fn test_currency_flow_formats_two_decimals() {
    let out = run_session("3\n100\nusd\neur\n5\n", FixedRate(0.9)).await;
    assert!(out.contains("Result: 90.00 EUR"));
}

#[tokio::test]
async fn test_unit_conversion_flow() {
    let out = run_session("4\ntemperature\n0\nc\nf\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Categories: length, weight, temperature"));
    assert!(out.contains("Result: 32.00 F"));
}

#[tokio::test]
async fn test_invalid_choice_reports_and_continues() {
    let out = run_session("9\n1\n2+2\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Error: invalid menu choice: 9"));
    assert!(out.contains("Result: 4"));
}

#[tokio::test]
async fn test_evaluation_error_reports_and_continues() {
    let out = run_session("1\n2+\n1\n2+2\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Error: invalid expression"));
    assert!(out.contains("Result: 4"));
}

#[tokio::test]
async fn test_unknown_category_reports_and_continues() {
    let out = run_session("4\nvolume\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Error: unknown conversion category: volume"));
}

#[tokio::test]
async fn test_unknown_unit_reports_and_continues() {
    let out = run_session("4\nlength\n5\nlightyear\nm\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Error: unknown unit: lightyear"));
}

#[tokio::test]
async fn test_invalid_amount_reports_and_continues() {
    let out = run_session("3\nabc\n5\n", FixedRate(1.0)).await;
    assert!(out.contains("Error: invalid number: abc"));
}

#[tokio::test]
async fn test_rate_lookup_failure_reports_and_continues() {
    let out = run_session("3\n10\nusd\neur\n1\n1+1\n5\n", FailingRates).await;
    assert!(out.contains("Error: unknown currency code: EUR"));
    assert!(out.contains("Result: 2"));
}

#[tokio::test]
async fn test_end_of_input_terminates_loop() {
    let out = run_session("1\n2+2\n", FixedRate(1.0)).await;
    assert!(out.contains("Result: 4"));
}

#[tokio::test]
async fn test_end_of_input_mid_feature_terminates_loop() {
    let out = run_session("3\n10\n", FixedRate(1.0)).await;
    assert!(out.contains("From currency"));
}

#[tokio::test]
async fn test_empty_input_terminates_immediately() {
    let out = run_session("", FixedRate(1.0)).await;
    assert!(out.contains("Options:"));
}
