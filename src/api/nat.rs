use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::auth::Endpoint;
use crate::models::nat::{CreateNatRuleRequest, NatRule};
use crate::{BboxClient, BboxResult};

impl BboxClient {
    /// Creates a NAT-PMP rule.
    ///
    /// Fetches a fresh one-time token first. Returns true only if the router
    /// answered 201 Created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &bbox_client::BboxClient) -> bbox_client::BboxResult<()> {
    /// use bbox_client::{NatProtocol, NatRule};
    ///
    /// let rule = NatRule::builder()
    ///     .enable(true)
    ///     .description("game server")
    ///     .protocol(NatProtocol::Udp)
    ///     .ipaddress("192.168.1.20")
    ///     .internal_port(27015)
    ///     .build()?;
    ///
    /// let created = client.create_nat_rule(rule).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_nat_rule(&self, rule: NatRule) -> BboxResult<bool> {
        let token = self.get_token().await?;
        let form = CreateNatRuleRequest::from(rule);
        let response = self
            .call(
                Endpoint::NatRules,
                Some(format!("rules?btoken={token}")),
                Method::POST,
                Some(&form),
            )
            .await?;

        Ok(response.status() == StatusCode::CREATED)
    }

    /// Deletes the NAT-PMP rule `id`.
    ///
    /// Returns true if the router answered 200 or 202.
    pub async fn delete_nat_rule(&self, id: u32) -> BboxResult<bool> {
        let response = self
            .call(Endpoint::NatRules, Some(format!("rules/{id}")), Method::DELETE, None::<&()>)
            .await?;

        Ok(matches!(response.status(), StatusCode::OK | StatusCode::ACCEPTED))
    }

    /// Returns every NAT-PMP rule.
    pub async fn get_all_nat_rules(&self) -> BboxResult<Value> {
        self.fetch(Endpoint::NatRules, Some("rules".into()), &["nat"]).await
    }
}
