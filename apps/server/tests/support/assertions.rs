use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "{context}: unexpected status");
}

pub fn as_array<'a>(value: &'a Value, what: &str) -> anyhow::Result<&'a Vec<Value>> {
    value
        .as_array()
        .with_context(|| format!("{what} is an array"))
}

/// Find the row whose `key` equals `id`.
pub fn row_with<'a>(rows: &'a [Value], key: &str, id: i64) -> anyhow::Result<&'a Value> {
    rows.iter()
        .find(|row| row.get(key).and_then(Value::as_i64) == Some(id))
        .with_context(|| format!("row with {key} = {id}"))
}

pub fn ids(rows: &[Value], key: &str) -> Vec<i64> {
    rows.iter()
        .filter_map(|row| row.get(key).and_then(Value::as_i64))
        .collect()
}

/// Assert a `{"detail": ...}` error body mentioning `needle`.
pub fn assert_detail(body: &Value, needle: &str) {
    let detail = body
        .get("detail")
        .and_then(Value::as_str)
        .unwrap_or_default();
    assert!(
        detail.contains(needle),
        "expected detail containing {needle:?}, got {body}"
    );
}
