//! Reporting capability interface.

use std::time::Duration;

use crate::records::{AttemptRecord, CampaignSummary, DownloadRecord};
use crate::taxonomy::{
    CertificateCheckResult, CheckReaction, CheckResult, DownloadErrorCode, ErrorCode,
    RollbackResult, ServerToCheck,
};

/// The full reporting surface between the update lifecycle and the
/// metrics backend. One method per metric event kind.
///
/// All operations are one-way and fire-and-forget: implementations must
/// never block the caller, never fault the update pipeline, and must be
/// safe to call with the backend unavailable. The implementation is
/// selected once at process start (see [`crate::reporter::registry`])
/// and never switched at runtime.
pub trait MetricsReporter: Send + Sync {
    /// Report one terminated update attempt.
    fn report_update_attempt_metrics(&self, record: &AttemptRecord);

    /// Report one terminated download phase of an attempt.
    fn report_update_attempt_download_metrics(&self, record: &DownloadRecord);

    /// Report an attempt interrupted before reaching a clean verdict.
    ///
    /// This is a distinct outcome category: there is no error code to
    /// classify, so it is never folded into ordinary failure reporting.
    fn report_abnormally_terminated_update_attempt_metrics(&self);

    /// Report the campaign-level summary. Called at most once per
    /// campaign, at the moment the update succeeds end-to-end.
    fn report_successful_update_metrics(&self, summary: &CampaignSummary);

    /// Report a completed rollback.
    fn report_rollback_metrics(&self, result: RollbackResult);

    /// Report a completed enterprise rollback.
    fn report_enterprise_rollback_metrics(&self, success: bool, rollback_version: &str);

    /// Report the outcome of an update check.
    fn report_update_check_metrics(
        &self,
        result: CheckResult,
        reaction: CheckReaction,
        download_error_code: Option<DownloadErrorCode>,
    );

    /// Report the outcome of a certificate pinning check.
    fn report_certificate_check_metrics(
        &self,
        server_to_check: ServerToCheck,
        result: CertificateCheckResult,
    );

    /// Report the daily OS age telemetry point.
    fn report_daily_metrics(&self, os_age: Duration);

    /// Report minutes between applying an update and rebooting into it.
    fn report_time_to_reboot(&self, time_to_reboot_minutes: i32);

    /// Report the attempt number at which an update was declared failed.
    fn report_failed_update_count(&self, target_attempt: i32);

    /// Report a bare internal error code observation.
    fn report_internal_error_code(&self, error_code: ErrorCode);

    /// Report where the install date was provisioned from.
    fn report_install_date_provisioning_source(&self, source: i32, max: i32);

    /// Report kernel key version rollforward telemetry.
    fn report_key_version_metrics(
        &self,
        kernel_min_version: i32,
        kernel_max_rollforward_version: i32,
        kernel_max_rollforward_success: bool,
    );

    /// Report days between an enterprise update being seen and its
    /// download starting.
    fn report_enterprise_update_seen_to_download_days(
        &self,
        has_time_restriction_policy: bool,
        time_to_update_days: i32,
    );
}

/// Reporter that intentionally reports nothing.
///
/// The documented selection for environments without a metrics backend;
/// call sites stay identical to production.
#[derive(Debug, Default)]
pub struct NoopMetricsReporter;

impl NoopMetricsReporter {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsReporter for NoopMetricsReporter {
    fn report_update_attempt_metrics(&self, _record: &AttemptRecord) {}

    fn report_update_attempt_download_metrics(&self, _record: &DownloadRecord) {}

    fn report_abnormally_terminated_update_attempt_metrics(&self) {}

    fn report_successful_update_metrics(&self, _summary: &CampaignSummary) {}

    fn report_rollback_metrics(&self, _result: RollbackResult) {}

    fn report_enterprise_rollback_metrics(&self, _success: bool, _rollback_version: &str) {}

    fn report_update_check_metrics(
        &self,
        _result: CheckResult,
        _reaction: CheckReaction,
        _download_error_code: Option<DownloadErrorCode>,
    ) {
    }

    fn report_certificate_check_metrics(
        &self,
        _server_to_check: ServerToCheck,
        _result: CertificateCheckResult,
    ) {
    }

    fn report_daily_metrics(&self, _os_age: Duration) {}

    fn report_time_to_reboot(&self, _time_to_reboot_minutes: i32) {}

    fn report_failed_update_count(&self, _target_attempt: i32) {}

    fn report_internal_error_code(&self, _error_code: ErrorCode) {}

    fn report_install_date_provisioning_source(&self, _source: i32, _max: i32) {}

    fn report_key_version_metrics(
        &self,
        _kernel_min_version: i32,
        _kernel_max_rollforward_version: i32,
        _kernel_max_rollforward_success: bool,
    ) {
    }

    fn report_enterprise_update_seen_to_download_days(
        &self,
        _has_time_restriction_policy: bool,
        _time_to_update_days: i32,
    ) {
    }
}
