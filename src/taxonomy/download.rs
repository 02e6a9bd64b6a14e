//! Download-phase taxonomy.
//!
//! Where a payload chunk came from, how the connection was made, and
//! how a download failed. `DownloadSource` also defines the dense index
//! space used by per-source byte accounting.

use serde::{Deserialize, Serialize};

/// Origin a payload chunk was fetched from.
///
/// The declaration order is the wire order of per-source byte arrays.
/// Appending a new source is safe; reordering existing ones breaks the
/// positional contract with the metrics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadSource {
    PrimaryServer,
    FallbackServer,
    LocalCache,
}

impl DownloadSource {
    /// All sources, in wire order.
    pub const ALL: [DownloadSource; 3] = [
        DownloadSource::PrimaryServer,
        DownloadSource::FallbackServer,
        DownloadSource::LocalCache,
    ];

    /// Number of defined download sources.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense positional index into per-source arrays.
    pub fn index(self) -> usize {
        match self {
            DownloadSource::PrimaryServer => 0,
            DownloadSource::FallbackServer => 1,
            DownloadSource::LocalCache => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadSource::PrimaryServer => "primary_server",
            DownloadSource::FallbackServer => "fallback_server",
            DownloadSource::LocalCache => "local_cache",
        }
    }
}

/// How a download phase failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadErrorCode {
    HttpError,
    ConnectionFailed,
    Timeout,
    PayloadTruncated,
    InputMalformed,
}

impl DownloadErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadErrorCode::HttpError => "http_error",
            DownloadErrorCode::ConnectionFailed => "connection_failed",
            DownloadErrorCode::Timeout => "timeout",
            DownloadErrorCode::PayloadTruncated => "payload_truncated",
            DownloadErrorCode::InputMalformed => "input_malformed",
        }
    }
}

/// Network the download ran over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Wifi,
    Cellular,
    Ethernet,
    Unknown,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Wifi => "wifi",
            ConnectionType::Cellular => "cellular",
            ConnectionType::Ethernet => "ethernet",
            ConnectionType::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_indices_are_dense_and_stable() {
        for (position, source) in DownloadSource::ALL.iter().enumerate() {
            assert_eq!(source.index(), position);
        }
        assert_eq!(DownloadSource::COUNT, DownloadSource::ALL.len());
    }

    #[test]
    fn test_source_wire_order() {
        // Positional contract with the backend: primary first.
        assert_eq!(DownloadSource::PrimaryServer.index(), 0);
        assert_eq!(DownloadSource::FallbackServer.index(), 1);
        assert_eq!(DownloadSource::LocalCache.index(), 2);
    }
}
