//! Per-attempt reporting records.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::taxonomy::{
    AttemptResult, ConnectionType, DownloadErrorCode, DownloadSource, ErrorCode, PayloadType,
};

/// One terminated update attempt.
///
/// Created by the update driver when an attempt reaches a verdict and
/// consumed immediately by the reporter; never retained afterward.
/// `internal_error_code` must name a specific cause whenever
/// `attempt_result` is a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt_number: i32,
    pub payload_type: PayloadType,
    /// Wall-clock time spent on the attempt.
    pub duration: Duration,
    /// Attempt time excluding suspend.
    pub duration_uptime: Duration,
    pub payload_size: i64,
    pub attempt_result: AttemptResult,
    pub internal_error_code: Option<ErrorCode>,
}

/// One download phase within an attempt.
///
/// `download_speed_bps` is derived by the driver so that driver and
/// reporter share a single definition of elapsed time; the reporter
/// never recomputes it. `download_error_code` is present only when the
/// phase failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub bytes_downloaded: i64,
    pub download_speed_bps: i64,
    pub download_source: DownloadSource,
    pub download_error_code: Option<DownloadErrorCode>,
    pub connection_type: ConnectionType,
}

/// Average download speed in bytes per second.
///
/// Reference derivation for `DownloadRecord::download_speed_bps`. A zero
/// elapsed time yields 0 rather than a division fault.
pub fn download_speed_bps(bytes_downloaded: i64, elapsed: Duration) -> i64 {
    let millis = elapsed.as_millis();
    if millis == 0 {
        return 0;
    }
    ((bytes_downloaded as i128 * 1000) / millis as i128) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_speed_zero_elapsed() {
        assert_eq!(download_speed_bps(50_000_000, Duration::ZERO), 0);
    }

    #[test]
    fn test_speed_known_value() {
        // 10 MB over 4 seconds = 2.5 MB/s.
        assert_eq!(
            download_speed_bps(10_000_000, Duration::from_secs(4)),
            2_500_000
        );
    }

    #[test]
    fn test_speed_sub_second_elapsed() {
        assert_eq!(
            download_speed_bps(1_000, Duration::from_millis(250)),
            4_000
        );
    }

    proptest! {
        #[test]
        fn speed_is_non_negative_for_non_negative_bytes(
            bytes in 0i64..,
            millis in 0u64..u64::MAX / 2,
        ) {
            prop_assert!(download_speed_bps(bytes, Duration::from_millis(millis)) >= 0);
        }
    }
}
