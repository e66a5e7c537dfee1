use std::fmt;

use serde::Serialize;

use crate::BboxError;

/// Longest description the router accepts for a rule.
pub const MAX_DESCRIPTION_LEN: usize = 48;

/// Protocols a NAT-PMP rule can forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NatProtocol {
    #[default]
    Tcp,
    Udp,
    Esp,
    All,
}

impl fmt::Display for NatProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NatProtocol::Tcp => "tcp",
            NatProtocol::Udp => "udp",
            NatProtocol::Esp => "esp",
            NatProtocol::All => "all",
        };
        f.write_str(name)
    }
}

/// A NAT-PMP forwarding rule to create.
#[derive(Debug, Clone, Default)]
pub struct NatRule {
    /// Whether the rule is active once created.
    pub enable: bool,
    /// Free-form label.
    pub description: String,
    pub protocol: NatProtocol,
    /// Local address packets are forwarded to.
    pub ipaddress: String,
    /// Local port packets are forwarded to.
    pub internal_port: u16,
    /// Only forward packets coming from this address.
    pub ipremote: Option<String>,
    /// Only forward packets arriving on this port.
    pub external_port: Option<u16>,
}

impl NatRule {
    /// Create a new NAT rule builder.
    pub fn builder() -> NatRuleBuilder {
        NatRuleBuilder::default()
    }
}

/// Builder for NAT-PMP rules.
#[derive(Default)]
pub struct NatRuleBuilder {
    rule: NatRule,
}

impl NatRuleBuilder {
    /// Enable or disable the rule.
    pub fn enable(mut self, enable: bool) -> Self {
        self.rule.enable = enable;
        self
    }

    /// Set the rule description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.rule.description = description.into();
        self
    }

    /// Set the forwarded protocol.
    pub fn protocol(mut self, protocol: NatProtocol) -> Self {
        self.rule.protocol = protocol;
        self
    }

    /// Set the local destination address.
    pub fn ipaddress(mut self, ipaddress: impl Into<String>) -> Self {
        self.rule.ipaddress = ipaddress.into();
        self
    }

    /// Set the local destination port.
    pub fn internal_port(mut self, port: u16) -> Self {
        self.rule.internal_port = port;
        self
    }

    /// Restrict the rule to one remote address.
    pub fn ipremote(mut self, ipremote: impl Into<String>) -> Self {
        self.rule.ipremote = Some(ipremote.into());
        self
    }

    /// Restrict the rule to one external port.
    pub fn external_port(mut self, port: u16) -> Self {
        self.rule.external_port = Some(port);
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<NatRule, BboxError> {
        if self.rule.ipaddress.is_empty() {
            return Err(BboxError::ConfigurationError("Rule IP address is required".into()));
        }
        if self.rule.internal_port == 0 {
            return Err(BboxError::ConfigurationError("Rule internal port is required".into()));
        }
        if self.rule.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(BboxError::ConfigurationError(format!(
                "Rule description must be at most {MAX_DESCRIPTION_LEN} characters"
            )));
        }
        Ok(self.rule)
    }
}

/// Form body sent to create a NAT-PMP rule.
///
/// Optional filters are sent as empty strings when unset.
#[derive(Debug, Clone, Serialize)]
pub struct CreateNatRuleRequest {
    pub enable: u8,
    pub description: String,
    pub protocol: NatProtocol,
    pub ipremote: String,
    pub external_port: String,
    pub ipaddress: String,
    pub internal_port: u16,
}

impl From<NatRule> for CreateNatRuleRequest {
    fn from(rule: NatRule) -> Self {
        Self {
            enable: u8::from(rule.enable),
            description: rule.description,
            protocol: rule.protocol,
            ipremote: rule.ipremote.unwrap_or_default(),
            external_port: rule
                .external_port
                .map(|port| port.to_string())
                .unwrap_or_default(),
            ipaddress: rule.ipaddress,
            internal_port: rule.internal_port,
        }
    }
}
