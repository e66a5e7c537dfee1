use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// State reported for the xDSL line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XdslInfo {
    /// `"Connected"` once the line is synchronised.
    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub up: XdslDirection,

    #[serde(default)]
    pub down: XdslDirection,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl XdslInfo {
    pub fn is_connected(&self) -> bool {
        self.state == "Connected"
    }
}

/// One direction of the xDSL line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XdslDirection {
    /// Synchronised bitrate in kbps.
    #[serde(default)]
    pub bitrates: f64,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl XdslDirection {
    /// Synchronised bitrate in Mbps.
    pub fn mbps(&self) -> f64 {
        self.bitrates / 1000.0
    }
}

/// Traffic counters of the WAN IP interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpStats {
    /// Download direction.
    pub rx: BandwidthStats,

    /// Upload direction.
    pub tx: BandwidthStats,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Instant bandwidth measure for one direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandwidthStats {
    #[serde(default)]
    pub bandwidth: f64,

    #[serde(rename = "maxBandwidth", default)]
    pub max_bandwidth: f64,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl BandwidthStats {
    /// Share of the maximum bandwidth in use, truncated toward zero.
    ///
    /// Returns `None` when the router reports no maximum.
    pub fn used_percentage(&self) -> Option<i64> {
        if self.max_bandwidth == 0.0 {
            return None;
        }
        Some((self.bandwidth * 100.0 / self.max_bandwidth) as i64)
    }
}
