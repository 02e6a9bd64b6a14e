//! Campaign-level summary records.
//!
//! A campaign is the full sequence of attempts, possibly across
//! reboots, that ends in one successful update. The driver reconstructs
//! these counters from persisted state; the reporter holds none of it.

use std::ops::Index;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::taxonomy::{DownloadSource, PayloadType};

/// Cumulative downloaded bytes per source, positionally indexed by
/// `DownloadSource`.
///
/// Serializes as a bare array in source wire order. The exhaustive
/// `DownloadSource::index` match keeps slot assignment in one place, so
/// adding a source without widening the array fails to compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceByteCounts([i64; DownloadSource::COUNT]);

impl SourceByteCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: DownloadSource) -> i64 {
        self.0[source.index()]
    }

    pub fn set(&mut self, source: DownloadSource, bytes: i64) {
        self.0[source.index()] = bytes;
    }

    pub fn add(&mut self, source: DownloadSource, bytes: i64) {
        self.0[source.index()] = self.0[source.index()].saturating_add(bytes);
    }

    /// Total bytes across all sources.
    pub fn total(&self) -> i64 {
        self.0.iter().fold(0i64, |acc, b| acc.saturating_add(*b))
    }

    /// Per-source counts in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (DownloadSource, i64)> + '_ {
        DownloadSource::ALL.iter().map(|s| (*s, self.get(*s)))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl From<[i64; DownloadSource::COUNT]> for SourceByteCounts {
    fn from(counts: [i64; DownloadSource::COUNT]) -> Self {
        Self(counts)
    }
}

impl Index<DownloadSource> for SourceByteCounts {
    type Output = i64;

    fn index(&self, source: DownloadSource) -> &i64 {
        &self.0[source.index()]
    }
}

/// Terminal record for one successful update campaign.
///
/// Constructed once, at the moment the campaign is deemed successful;
/// never mutated after emission. `download_overhead_percentage` is
/// computed by the driver (see [`download_overhead_percentage`]) so
/// rounding is defined in exactly one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub attempt_count: i32,
    /// Attempts started and then superseded by a newer payload.
    pub updates_abandoned_count: i32,
    pub payload_type: PayloadType,
    pub payload_size: i64,
    pub num_bytes_downloaded: SourceByteCounts,
    pub download_overhead_percentage: i32,
    pub total_duration: Duration,
    pub total_duration_uptime: Duration,
    pub reboot_count: i32,
    pub url_switch_count: i32,
}

/// Extra bytes downloaded beyond the payload's nominal size, as an
/// integer percentage of that size.
///
/// Reference derivation for `CampaignSummary::download_overhead_percentage`.
/// A non-positive payload size yields 0 rather than a division fault;
/// the result is truncated toward zero and never negative.
pub fn download_overhead_percentage(total_bytes_downloaded: i64, payload_size: i64) -> i32 {
    if payload_size <= 0 {
        return 0;
    }
    let overhead = total_bytes_downloaded.saturating_sub(payload_size).max(0);
    let percentage = (overhead as i128 * 100) / payload_size as i128;
    percentage.min(i32::MAX as i128) as i32
}
