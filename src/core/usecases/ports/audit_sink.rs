/// One structured audit event, mirroring the field list in spec §6's
/// "Audit log format" verbatim.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub correlation_id: String,
    pub kind: &'static str,
    pub ip: Option<String>,
    pub route: String,
    pub user_agent: Option<String>,
    pub user_id: Option<String>,
    pub status_code: Option<u16>,
    pub details: Option<serde_json::Value>,
}

/// Contract for shipping audit events. An external collaborator (spec §1
/// Out of scope) — this crate ships only a structured-log default.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent);
}
