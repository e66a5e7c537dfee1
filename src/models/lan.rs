use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A device known to the router's LAN host table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    /// IPv4 address leased to the device. The router reports `null` for
    /// devices it has not leased an address to.
    pub ipaddress: Option<String>,

    /// `1` while the device is connected.
    pub active: Option<i64>,

    /// MAC address of the device.
    pub macaddress: Option<String>,

    /// Name reported by the device, if any.
    pub hostname: Option<String>,

    /// Remaining attributes reported by the router.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Host {
    /// Returns true if the router reports the device as active.
    pub fn is_active(&self) -> bool {
        self.active == Some(1)
    }
}

/// Form sent to toggle IPv6 on the LAN.
#[derive(Debug, Clone, Serialize)]
pub struct Ip6Request {
    /// `1` to enable, `0` to disable.
    pub enable: u8,
}
