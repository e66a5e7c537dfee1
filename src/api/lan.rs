use reqwest::Method;
use serde_json::Value;

use crate::auth::Endpoint;
use crate::models::lan::{Host, Ip6Request};
use crate::{BboxClient, BboxResult};

impl BboxClient {
    /// Lists every device in the router's host table.
    pub async fn get_all_connected_devices(&self) -> BboxResult<Vec<Host>> {
        self.fetch(Endpoint::Hosts, None, &["hosts", "list"]).await
    }

    /// Returns true if the host table has an active entry for `ip`.
    ///
    /// Only the first entry with a matching address is considered.
    pub async fn is_device_connected(&self, ip: &str) -> BboxResult<bool> {
        let hosts = self.get_all_connected_devices().await?;

        Ok(hosts
            .iter()
            .find(|host| host.ipaddress.as_deref() == Some(ip))
            .is_some_and(Host::is_active))
    }

    /// Enables or disables IPv6 on the LAN.
    ///
    /// Returns true if the router answered 200.
    pub async fn configure_ipv6(&self, enable: bool) -> BboxResult<bool> {
        let form = Ip6Request {
            enable: u8::from(enable),
        };
        let response = self
            .call(Endpoint::LanIp6, Some("ip6".into()), Method::PUT, Some(&form))
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            log::warn!("IPv6 configuration rejected with status {status}");
        }
        Ok(status == reqwest::StatusCode::OK)
    }

    /// Returns the IP configuration of the LAN.
    pub async fn get_lan_ip(&self) -> BboxResult<Value> {
        self.fetch(Endpoint::LanIp, Some("ip".into()), &["lan"]).await
    }
}
