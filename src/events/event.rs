//! Metric event types and the emission envelope.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{AttemptRecord, CampaignSummary, DownloadRecord};
use crate::taxonomy::{
    CertificateCheckResult, CheckReaction, CheckResult, DownloadErrorCode, ErrorCode,
    RollbackResult, ServerToCheck,
};

/// One metric event, tagged by kind.
///
/// Every reporting operation maps to exactly one variant; the variant
/// fields are the operation's fields, unmodified. Events are
/// independent: N calls produce N events, never coalesced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MetricEvent {
    /// One update attempt terminated with a verdict.
    UpdateAttempt(AttemptRecord),
    /// A download phase of an attempt terminated.
    UpdateAttemptDownload(DownloadRecord),
    /// An attempt was interrupted before reaching any verdict.
    AbnormallyTerminatedUpdateAttempt,
    /// The whole campaign succeeded end-to-end.
    SuccessfulUpdate(CampaignSummary),
    /// A rollback completed.
    Rollback { result: RollbackResult },
    /// An enterprise-initiated rollback completed.
    EnterpriseRollback {
        success: bool,
        rollback_version: String,
    },
    /// An update check against the server completed.
    UpdateCheck {
        result: CheckResult,
        reaction: CheckReaction,
        download_error_code: Option<DownloadErrorCode>,
    },
    /// A certificate pinning check completed.
    CertificateCheck {
        server_to_check: ServerToCheck,
        result: CertificateCheckResult,
    },
    /// Daily OS age telemetry point.
    DailyOsAge { os_age: Duration },
    /// Minutes between applying an update and the reboot into it.
    TimeToReboot { minutes: i32 },
    /// Attempt number at which the update was declared failed.
    FailedUpdateCount { target_attempt: i32 },
    /// A bare internal error code observation.
    InternalErrorCode { error_code: ErrorCode },
    /// Where the install date was provisioned from.
    InstallDateProvisioningSource { source: i32, max: i32 },
    /// Kernel key version rollforward telemetry.
    KeyVersion {
        kernel_min_version: i32,
        kernel_max_rollforward_version: i32,
        kernel_max_rollforward_success: bool,
    },
    /// Days between an enterprise update being seen and downloaded.
    EnterpriseUpdateSeenToDownload {
        has_time_restriction_policy: bool,
        time_to_update_days: i32,
    },
}

impl MetricEvent {
    /// Stable event-kind name used by the sink and in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            MetricEvent::UpdateAttempt(_) => "update_attempt",
            MetricEvent::UpdateAttemptDownload(_) => "update_attempt_download",
            MetricEvent::AbnormallyTerminatedUpdateAttempt => {
                "abnormally_terminated_update_attempt"
            }
            MetricEvent::SuccessfulUpdate(_) => "successful_update",
            MetricEvent::Rollback { .. } => "rollback",
            MetricEvent::EnterpriseRollback { .. } => "enterprise_rollback",
            MetricEvent::UpdateCheck { .. } => "update_check",
            MetricEvent::CertificateCheck { .. } => "certificate_check",
            MetricEvent::DailyOsAge { .. } => "daily_os_age",
            MetricEvent::TimeToReboot { .. } => "time_to_reboot",
            MetricEvent::FailedUpdateCount { .. } => "failed_update_count",
            MetricEvent::InternalErrorCode { .. } => "internal_error_code",
            MetricEvent::InstallDateProvisioningSource { .. } => {
                "install_date_provisioning_source"
            }
            MetricEvent::KeyVersion { .. } => "key_version",
            MetricEvent::EnterpriseUpdateSeenToDownload { .. } => {
                "enterprise_update_seen_to_download"
            }
        }
    }
}

/// A metric event stamped with its emission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub emitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: MetricEvent,
}

impl EventEnvelope {
    pub fn new(event: MetricEvent) -> Self {
        Self {
            emitted_at: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{AttemptResult, PayloadType};

    #[test]
    fn test_name_matches_serde_tag() {
        let events = [
            MetricEvent::AbnormallyTerminatedUpdateAttempt,
            MetricEvent::Rollback {
                result: RollbackResult::Success,
            },
            MetricEvent::UpdateCheck {
                result: CheckResult::NoUpdateAvailable,
                reaction: CheckReaction::Ignored,
                download_error_code: None,
            },
            MetricEvent::KeyVersion {
                kernel_min_version: 1,
                kernel_max_rollforward_version: 2,
                kernel_max_rollforward_success: true,
            },
        ];
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["event"], event.name());
        }
    }

    #[test]
    fn test_attempt_event_flattens_record_fields() {
        let event = MetricEvent::UpdateAttempt(AttemptRecord {
            attempt_number: 2,
            payload_type: PayloadType::Delta,
            duration: Duration::from_secs(45),
            duration_uptime: Duration::from_secs(40),
            payload_size: 50_000_000,
            attempt_result: AttemptResult::Succeeded,
            internal_error_code: None,
        });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "update_attempt");
        assert_eq!(value["attempt_number"], 2);
        assert_eq!(value["payload_type"], "delta");
        assert_eq!(value["payload_size"], 50_000_000i64);
    }

    #[test]
    fn test_envelope_carries_tag_beside_timestamp() {
        let envelope = EventEnvelope::new(MetricEvent::TimeToReboot { minutes: 12 });
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["event"], "time_to_reboot");
        assert_eq!(value["minutes"], 12);
        assert!(value["emitted_at"].is_string());
    }
}
