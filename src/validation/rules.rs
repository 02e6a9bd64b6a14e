//! Record validation rules.
//!
//! One check function per record kind. Each returns the first violated
//! rule as a typed `RecordError`; the reporter turns that into a
//! log-and-drop, never a fault.

use thiserror::Error;

use crate::records::{AttemptRecord, CampaignSummary, DownloadRecord};

/// Reason a record was refused at the reporting boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("attempt_number is negative: {0}")]
    NegativeAttemptNumber(i32),
    #[error("payload_size is negative: {0}")]
    NegativePayloadSize(i64),
    #[error("failed attempt carries no internal error code")]
    MissingErrorCode,
    #[error("failed attempt carries the unspecific error code {0}")]
    UnspecificErrorCode(&'static str),
    #[error("bytes_downloaded is negative: {0}")]
    NegativeBytesDownloaded(i64),
    #[error("download_speed_bps is negative: {0}")]
    NegativeDownloadSpeed(i64),
    #[error("attempt_count must be at least 1, got {0}")]
    NoAttempts(i32),
    #[error("updates_abandoned_count is negative: {0}")]
    NegativeAbandonedCount(i32),
    #[error("attempt_count {attempt_count} cannot cover {abandoned} abandoned updates plus the successful one")]
    AbandonedExceedsAttempts { attempt_count: i32, abandoned: i32 },
    #[error("byte count for source {source_name} is negative: {bytes}")]
    NegativeSourceBytes { source_name: &'static str, bytes: i64 },
    #[error("download_overhead_percentage is negative: {0}")]
    NegativeOverheadPercentage(i32),
    #[error("reboot_count is negative: {0}")]
    NegativeRebootCount(i32),
    #[error("url_switch_count is negative: {0}")]
    NegativeUrlSwitchCount(i32),
}

/// Check an attempt record.
///
/// A failed attempt must carry a specific internal error code; it is
/// the diagnostic payload for failure triage and `Unknown` defeats it.
pub fn validate_attempt(record: &AttemptRecord) -> Result<(), RecordError> {
    if record.attempt_number < 0 {
        return Err(RecordError::NegativeAttemptNumber(record.attempt_number));
    }
    if record.payload_size < 0 {
        return Err(RecordError::NegativePayloadSize(record.payload_size));
    }
    if record.attempt_result.is_failure() {
        match record.internal_error_code {
            None => return Err(RecordError::MissingErrorCode),
            Some(code) if !code.is_specific() => {
                return Err(RecordError::UnspecificErrorCode(code.as_str()));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Check a download-phase record.
pub fn validate_download(record: &DownloadRecord) -> Result<(), RecordError> {
    if record.bytes_downloaded < 0 {
        return Err(RecordError::NegativeBytesDownloaded(record.bytes_downloaded));
    }
    if record.download_speed_bps < 0 {
        return Err(RecordError::NegativeDownloadSpeed(record.download_speed_bps));
    }
    Ok(())
}

/// Check a campaign summary.
///
/// The successful attempt is never an abandoned one, so the attempt
/// count must cover every abandoned attempt plus one.
pub fn validate_summary(summary: &CampaignSummary) -> Result<(), RecordError> {
    if summary.attempt_count < 1 {
        return Err(RecordError::NoAttempts(summary.attempt_count));
    }
    if summary.updates_abandoned_count < 0 {
        return Err(RecordError::NegativeAbandonedCount(
            summary.updates_abandoned_count,
        ));
    }
    if summary.attempt_count - 1 < summary.updates_abandoned_count {
        return Err(RecordError::AbandonedExceedsAttempts {
            attempt_count: summary.attempt_count,
            abandoned: summary.updates_abandoned_count,
        });
    }
    if summary.payload_size < 0 {
        return Err(RecordError::NegativePayloadSize(summary.payload_size));
    }
    for (source, bytes) in summary.num_bytes_downloaded.iter() {
        if bytes < 0 {
            return Err(RecordError::NegativeSourceBytes {
                source_name: source.as_str(),
                bytes,
            });
        }
    }
    if summary.download_overhead_percentage < 0 {
        return Err(RecordError::NegativeOverheadPercentage(
            summary.download_overhead_percentage,
        ));
    }
    if summary.reboot_count < 0 {
        return Err(RecordError::NegativeRebootCount(summary.reboot_count));
    }
    if summary.url_switch_count < 0 {
        return Err(RecordError::NegativeUrlSwitchCount(summary.url_switch_count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::records::SourceByteCounts;
    use crate::taxonomy::{
        AttemptResult, ConnectionType, DownloadSource, ErrorCode, PayloadType,
    };

    fn attempt(result: AttemptResult, code: Option<ErrorCode>) -> AttemptRecord {
        AttemptRecord {
            attempt_number: 1,
            payload_type: PayloadType::Delta,
            duration: Duration::from_secs(30),
            duration_uptime: Duration::from_secs(28),
            payload_size: 1_000_000,
            attempt_result: result,
            internal_error_code: code,
        }
    }

    fn summary() -> CampaignSummary {
        CampaignSummary {
            attempt_count: 3,
            updates_abandoned_count: 1,
            payload_type: PayloadType::Full,
            payload_size: 100_000_000,
            num_bytes_downloaded: SourceByteCounts::from([90_000_000, 20_000_000, 0]),
            download_overhead_percentage: 10,
            total_duration: Duration::from_secs(120),
            total_duration_uptime: Duration::from_secs(100),
            reboot_count: 1,
            url_switch_count: 1,
        }
    }

    #[test]
    fn test_valid_success_attempt_without_error_code() {
        assert!(validate_attempt(&attempt(AttemptResult::Succeeded, None)).is_ok());
    }

    #[test]
    fn test_failed_attempt_requires_error_code() {
        assert_eq!(
            validate_attempt(&attempt(AttemptResult::InternalError, None)),
            Err(RecordError::MissingErrorCode)
        );
    }

    #[test]
    fn test_failed_attempt_rejects_unknown_error_code() {
        assert_eq!(
            validate_attempt(&attempt(
                AttemptResult::PayloadDownloadError,
                Some(ErrorCode::Unknown)
            )),
            Err(RecordError::UnspecificErrorCode("unknown"))
        );
    }

    #[test]
    fn test_failed_attempt_with_specific_error_code() {
        assert!(validate_attempt(&attempt(
            AttemptResult::PayloadDownloadError,
            Some(ErrorCode::DownloadTransferError)
        ))
        .is_ok());
    }

    #[test]
    fn test_negative_attempt_number_rejected() {
        let mut record = attempt(AttemptResult::Succeeded, None);
        record.attempt_number = -1;
        assert_eq!(
            validate_attempt(&record),
            Err(RecordError::NegativeAttemptNumber(-1))
        );
    }

    #[test]
    fn test_negative_download_bytes_rejected() {
        let record = DownloadRecord {
            bytes_downloaded: -5,
            download_speed_bps: 0,
            download_source: DownloadSource::PrimaryServer,
            download_error_code: None,
            connection_type: ConnectionType::Wifi,
        };
        assert_eq!(
            validate_download(&record),
            Err(RecordError::NegativeBytesDownloaded(-5))
        );
    }

    #[test]
    fn test_valid_summary() {
        assert!(validate_summary(&summary()).is_ok());
    }

    #[test]
    fn test_abandoned_count_must_leave_room_for_success() {
        // Three attempts with three abandoned leaves no successful one.
        let mut s = summary();
        s.updates_abandoned_count = 3;
        assert_eq!(
            validate_summary(&s),
            Err(RecordError::AbandonedExceedsAttempts {
                attempt_count: 3,
                abandoned: 3,
            })
        );

        // attempt_count == abandoned + 1 is the boundary and is valid.
        s.updates_abandoned_count = 2;
        assert!(validate_summary(&s).is_ok());
    }

    #[test]
    fn test_summary_rejects_negative_source_bytes() {
        let mut s = summary();
        s.num_bytes_downloaded = SourceByteCounts::from([90_000_000, -1, 0]);
        assert_eq!(
            validate_summary(&s),
            Err(RecordError::NegativeSourceBytes {
                source_name: "fallback_server",
                bytes: -1,
            })
        );
    }

    #[test]
    fn test_summary_rejects_zero_attempts() {
        let mut s = summary();
        s.attempt_count = 0;
        s.updates_abandoned_count = 0;
        assert_eq!(validate_summary(&s), Err(RecordError::NoAttempts(0)));
    }
}
