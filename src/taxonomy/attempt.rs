//! Attempt outcome taxonomy.
//!
//! Classification of a single update attempt: the payload that was
//! applied, the terminal verdict, and the internal cause when the
//! verdict is a failure.

use serde::{Deserialize, Serialize};

/// Classification of the update artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadType {
    Full,
    Delta,
    Unknown,
}

impl PayloadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadType::Full => "full",
            PayloadType::Delta => "delta",
            PayloadType::Unknown => "unknown",
        }
    }
}

/// Terminal verdict of one update attempt.
///
/// Abnormal termination (process interrupted before any verdict) is not
/// part of this set; it is reported through its own event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptResult {
    Succeeded,
    InternalError,
    PayloadDownloadError,
    MetadataMalformed,
    OperationExecutionError,
    PayloadVerificationFailed,
    PostInstallFailed,
    UpdateCanceled,
}

impl AttemptResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptResult::Succeeded => "succeeded",
            AttemptResult::InternalError => "internal_error",
            AttemptResult::PayloadDownloadError => "payload_download_error",
            AttemptResult::MetadataMalformed => "metadata_malformed",
            AttemptResult::OperationExecutionError => "operation_execution_error",
            AttemptResult::PayloadVerificationFailed => "payload_verification_failed",
            AttemptResult::PostInstallFailed => "post_install_failed",
            AttemptResult::UpdateCanceled => "update_canceled",
        }
    }

    /// Whether the verdict denotes a failed attempt.
    pub fn is_failure(&self) -> bool {
        !matches!(self, AttemptResult::Succeeded)
    }
}

/// Internal failure cause assigned by the update engine.
///
/// Immutable once assigned to an attempt. `Unknown` exists so engine
/// code can always produce a value, but a failed attempt reported with
/// `Unknown` is refused at the reporting boundary: the error code is
/// the diagnostic payload for failure triage and must name a cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    PayloadParseError,
    PayloadVerificationError,
    SignatureVerificationError,
    DownloadTransferError,
    NetworkUnavailable,
    DiskWriteError,
    InstallDeviceOpenError,
    PostinstallRunnerError,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::PayloadParseError => "payload_parse_error",
            ErrorCode::PayloadVerificationError => "payload_verification_error",
            ErrorCode::SignatureVerificationError => "signature_verification_error",
            ErrorCode::DownloadTransferError => "download_transfer_error",
            ErrorCode::NetworkUnavailable => "network_unavailable",
            ErrorCode::DiskWriteError => "disk_write_error",
            ErrorCode::InstallDeviceOpenError => "install_device_open_error",
            ErrorCode::PostinstallRunnerError => "postinstall_runner_error",
            ErrorCode::Unknown => "unknown",
        }
    }

    /// Whether the code names a concrete cause usable for triage.
    pub fn is_specific(&self) -> bool {
        !matches!(self, ErrorCode::Unknown)
    }
}
