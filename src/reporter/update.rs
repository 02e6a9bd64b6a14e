//! Production metrics reporter.
//!
//! Validates each record at the call boundary, logs the verdict, and
//! hands the event to the sink. Malformed input is logged and dropped;
//! nothing here can fault the update pipeline.

use std::sync::Arc;
use std::time::Duration;

use crate::events::MetricEvent;
use crate::logging::structured::ReportContext;
use crate::records::{AttemptRecord, CampaignSummary, DownloadRecord};
use crate::reporter::interface::MetricsReporter;
use crate::sink::{Emitter, MetricsSink};
use crate::taxonomy::{
    CertificateCheckResult, CheckReaction, CheckResult, DownloadErrorCode, ErrorCode,
    RollbackResult, ServerToCheck,
};
use crate::validation::{validate_attempt, validate_download, validate_summary};

/// Read-only view of installation state owned by the update driver.
///
/// The reporter only reads from it to enrich attempt log lines; it
/// never mutates the underlying state, and the driver keeps ownership
/// for the whole reporter lifetime.
pub trait InstallContext: Send + Sync {
    /// Version the campaign is updating to.
    fn target_version(&self) -> String;

    /// Whether the install plan is a rollback to an older build.
    fn is_rollback(&self) -> bool;
}

/// Reporter wired to a metrics sink.
pub struct UpdateMetricsReporter {
    emitter: Emitter,
    ctx: ReportContext,
    install_context: Option<Arc<dyn InstallContext>>,
}

impl UpdateMetricsReporter {
    pub fn new(sink: Arc<dyn MetricsSink>) -> Self {
        let ctx = ReportContext::new();
        Self {
            emitter: Emitter::new(sink, ctx.clone()),
            ctx,
            install_context: None,
        }
    }

    /// Attach the driver's read-only installation view.
    pub fn with_install_context(mut self, install_context: Arc<dyn InstallContext>) -> Self {
        self.install_context = Some(install_context);
        self
    }
}

impl MetricsReporter for UpdateMetricsReporter {
    fn report_update_attempt_metrics(&self, record: &AttemptRecord) {
        let ctx = self.ctx.with_attempt(record.attempt_number);

        if let Err(reason) = validate_attempt(record) {
            log::warn!("{} RECORD_REJECTED kind=update_attempt reason={}", ctx, reason);
            return;
        }

        match &self.install_context {
            Some(install) => log::info!(
                "{} ATTEMPT_REPORTED result={} payload_type={} target_version={} rollback={}",
                ctx,
                record.attempt_result.as_str(),
                record.payload_type.as_str(),
                install.target_version(),
                install.is_rollback()
            ),
            None => log::info!(
                "{} ATTEMPT_REPORTED result={} payload_type={}",
                ctx,
                record.attempt_result.as_str(),
                record.payload_type.as_str()
            ),
        }

        self.emitter.emit(MetricEvent::UpdateAttempt(record.clone()));
    }

    fn report_update_attempt_download_metrics(&self, record: &DownloadRecord) {
        if let Err(reason) = validate_download(record) {
            log::warn!(
                "{} RECORD_REJECTED kind=update_attempt_download reason={}",
                self.ctx,
                reason
            );
            return;
        }

        log::debug!(
            "{} DOWNLOAD_REPORTED source={} connection={} bytes={}",
            self.ctx,
            record.download_source.as_str(),
            record.connection_type.as_str(),
            record.bytes_downloaded
        );

        self.emitter
            .emit(MetricEvent::UpdateAttemptDownload(record.clone()));
    }

    fn report_abnormally_terminated_update_attempt_metrics(&self) {
        // No record to validate: the interruption happened before any
        // verdict or error code existed.
        log::info!("{} ABNORMAL_TERMINATION_REPORTED", self.ctx);
        self.emitter
            .emit(MetricEvent::AbnormallyTerminatedUpdateAttempt);
    }

    fn report_successful_update_metrics(&self, summary: &CampaignSummary) {
        if let Err(reason) = validate_summary(summary) {
            log::warn!(
                "{} RECORD_REJECTED kind=successful_update reason={}",
                self.ctx,
                reason
            );
            return;
        }

        log::info!(
            "{} CAMPAIGN_SUCCESS_REPORTED attempts={} abandoned={} reboots={} url_switches={} total_bytes={} overhead_pct={}",
            self.ctx,
            summary.attempt_count,
            summary.updates_abandoned_count,
            summary.reboot_count,
            summary.url_switch_count,
            summary.num_bytes_downloaded.total(),
            summary.download_overhead_percentage
        );

        self.emitter
            .emit(MetricEvent::SuccessfulUpdate(summary.clone()));
    }

    fn report_rollback_metrics(&self, result: RollbackResult) {
        self.emitter.emit(MetricEvent::Rollback { result });
    }

    fn report_enterprise_rollback_metrics(&self, success: bool, rollback_version: &str) {
        self.emitter.emit(MetricEvent::EnterpriseRollback {
            success,
            rollback_version: rollback_version.to_string(),
        });
    }

    fn report_update_check_metrics(
        &self,
        result: CheckResult,
        reaction: CheckReaction,
        download_error_code: Option<DownloadErrorCode>,
    ) {
        self.emitter.emit(MetricEvent::UpdateCheck {
            result,
            reaction,
            download_error_code,
        });
    }

    fn report_certificate_check_metrics(
        &self,
        server_to_check: ServerToCheck,
        result: CertificateCheckResult,
    ) {
        self.emitter.emit(MetricEvent::CertificateCheck {
            server_to_check,
            result,
        });
    }

    fn report_daily_metrics(&self, os_age: Duration) {
        self.emitter.emit(MetricEvent::DailyOsAge { os_age });
    }

    fn report_time_to_reboot(&self, time_to_reboot_minutes: i32) {
        self.emitter.emit(MetricEvent::TimeToReboot {
            minutes: time_to_reboot_minutes,
        });
    }

    fn report_failed_update_count(&self, target_attempt: i32) {
        self.emitter
            .emit(MetricEvent::FailedUpdateCount { target_attempt });
    }

    fn report_internal_error_code(&self, error_code: ErrorCode) {
        self.emitter.emit(MetricEvent::InternalErrorCode { error_code });
    }

    fn report_install_date_provisioning_source(&self, source: i32, max: i32) {
        self.emitter
            .emit(MetricEvent::InstallDateProvisioningSource { source, max });
    }

    fn report_key_version_metrics(
        &self,
        kernel_min_version: i32,
        kernel_max_rollforward_version: i32,
        kernel_max_rollforward_success: bool,
    ) {
        self.emitter.emit(MetricEvent::KeyVersion {
            kernel_min_version,
            kernel_max_rollforward_version,
            kernel_max_rollforward_success,
        });
    }

    fn report_enterprise_update_seen_to_download_days(
        &self,
        has_time_restriction_policy: bool,
        time_to_update_days: i32,
    ) {
        self.emitter.emit(MetricEvent::EnterpriseUpdateSeenToDownload {
            has_time_restriction_policy,
            time_to_update_days,
        });
    }
}
