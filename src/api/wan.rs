use crate::auth::Endpoint;
use crate::models::wan::{BandwidthStats, IpStats, XdslInfo};
use crate::{BboxClient, BboxError, BboxResult};

impl BboxClient {
    /// Returns the state of the xDSL line.
    pub async fn get_xdsl_info(&self) -> BboxResult<XdslInfo> {
        self.fetch(Endpoint::WanXdsl, Some("xdsl".into()), &["wan", "xdsl"])
            .await
    }

    /// Returns the line statistics of the xDSL link.
    pub async fn get_xdsl_stats(&self) -> BboxResult<serde_json::Value> {
        self.fetch(
            Endpoint::WanXdslStats,
            Some("xdsl/stats".into()),
            &["wan", "xdsl", "stats"],
        )
        .await
    }

    /// Returns the traffic counters of the WAN IP interface.
    pub async fn get_ip_stats(&self) -> BboxResult<IpStats> {
        self.fetch(Endpoint::WanIpStats, Some("ip/stats".into()), &["wan", "ip", "stats"])
            .await
    }

    /// Returns true if the xDSL line is synchronised.
    pub async fn is_bbox_connected(&self) -> BboxResult<bool> {
        Ok(self.get_xdsl_info().await?.is_connected())
    }

    /// Upload bitrate of the xDSL line in Mbps.
    pub async fn get_up_bitrates(&self) -> BboxResult<f64> {
        Ok(self.get_xdsl_info().await?.up.mbps())
    }

    /// Download bitrate of the xDSL line in Mbps.
    pub async fn get_down_bitrates(&self) -> BboxResult<f64> {
        Ok(self.get_xdsl_info().await?.down.mbps())
    }

    /// Share of the upload bandwidth in use right now, from 0 to 100.
    ///
    /// This is an instant measure and can vary a lot between calls.
    pub async fn get_up_used_bandwidth(&self) -> BboxResult<i64> {
        used_percentage(&self.get_ip_stats().await?.tx, "tx")
    }

    /// Share of the download bandwidth in use right now, from 0 to 100.
    pub async fn get_down_used_bandwidth(&self) -> BboxResult<i64> {
        used_percentage(&self.get_ip_stats().await?.rx, "rx")
    }
}

fn used_percentage(stats: &BandwidthStats, direction: &str) -> BboxResult<i64> {
    stats.used_percentage().ok_or_else(|| {
        BboxError::UnexpectedResponse(format!("{direction} maxBandwidth is zero"))
    })
}
