//! Update-check, rollback, and certificate-check taxonomy.

use serde::{Deserialize, Serialize};

/// Outcome of an update check against the update server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    UpdateAvailable,
    NoUpdateAvailable,
    DownloadError,
    ParsingError,
    RebootPending,
}

impl CheckResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckResult::UpdateAvailable => "update_available",
            CheckResult::NoUpdateAvailable => "no_update_available",
            CheckResult::DownloadError => "download_error",
            CheckResult::ParsingError => "parsing_error",
            CheckResult::RebootPending => "reboot_pending",
        }
    }
}

/// What the agent did with an available update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckReaction {
    Updating,
    Ignored,
    Deferring,
    BackingOff,
}

impl CheckReaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckReaction::Updating => "updating",
            CheckReaction::Ignored => "ignored",
            CheckReaction::Deferring => "deferring",
            CheckReaction::BackingOff => "backing_off",
        }
    }
}

/// Outcome of a completed rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollbackResult {
    Success,
    Failed,
}

impl RollbackResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            RollbackResult::Success => "success",
            RollbackResult::Failed => "failed",
        }
    }
}

/// Which server a certificate pinning check ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerToCheck {
    Update,
    Download,
}

impl ServerToCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerToCheck::Update => "update",
            ServerToCheck::Download => "download",
        }
    }
}

/// Outcome of a certificate pinning check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateCheckResult {
    Valid,
    Failed,
}

impl CertificateCheckResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateCheckResult::Valid => "valid",
            CertificateCheckResult::Failed => "failed",
        }
    }
}
