use tracing::info;

use crate::core::usecases::ports::{AuditEvent, AuditSink};

/// Emits one structured log line per event under the `auth.audit` target
/// (spec §6 audit log format), rather than shipping to any particular
/// aggregator — deployments attach a subscriber layer that routes this
/// target wherever they need it.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        info!(
            target: "auth.audit",
            correlation_id = %event.correlation_id,
            kind = event.kind,
            ip = event.ip.as_deref().unwrap_or_default(),
            route = %event.route,
            user_agent = event.user_agent.as_deref().unwrap_or_default(),
            user_id = event.user_id.as_deref().unwrap_or_default(),
            status_code = event.status_code.unwrap_or_default(),
            details = event.details.map(|v| v.to_string()).unwrap_or_default(),
            "audit event",
        );
    }
}
