use serde_json::Value;

/// Emits one structured audit record on the `audit` target.
pub fn log_audit(
    user_id: Option<i64>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        target: "audit",
        user_id = ?user_id,
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata,
        "audit"
    );
}
