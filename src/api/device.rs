use reqwest::Method;
use serde_json::Value;

use crate::auth::Endpoint;
use crate::client::success_body;
use crate::models::device::DisplayRequest;
use crate::{BboxClient, BboxError, BboxResult};

impl BboxClient {
    /// Returns the router's own description (model, firmware, uptime...).
    pub async fn get_device_info(&self) -> BboxResult<Value> {
        self.fetch(Endpoint::DeviceInfo, None, &["device"]).await
    }

    /// Changes the front panel brightness, from 0 (off) to 100.
    ///
    /// # Errors
    ///
    /// Returns `BboxError::ConfigurationError` without sending anything if
    /// `luminosity` is outside `0..=100`, and `BboxError::ApiError` if the
    /// router rejects the change.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &bbox_client::BboxClient) -> bbox_client::BboxResult<()> {
    /// client.set_display_luminosity(50).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_display_luminosity(&self, luminosity: i32) -> BboxResult<()> {
        let luminosity = u8::try_from(luminosity)
            .ok()
            .filter(|value| *value <= 100)
            .ok_or_else(|| {
                BboxError::ConfigurationError(format!(
                    "Luminosity must be between 0 and 100, got {luminosity}"
                ))
            })?;

        let form = DisplayRequest { luminosity };
        let response = self
            .call(Endpoint::DeviceDisplay, Some("display".into()), Method::PUT, Some(&form))
            .await?;
        success_body(response).await?;
        Ok(())
    }

    /// Reboots the router.
    ///
    /// Fetches a fresh one-time token first, so two requests are sent. A
    /// non-success answer to the reboot itself is returned as
    /// `BboxError::ApiError`.
    pub async fn reboot(&self) -> BboxResult<()> {
        let token = self.get_token().await?;
        let suffix = format!("reboot?btoken={token}");
        let response = self
            .call(Endpoint::DeviceReboot, Some(suffix), Method::POST, None::<&()>)
            .await?;
        success_body(response).await?;
        log::info!("reboot requested");
        Ok(())
    }

    /// Returns a one-time token required by some mutating calls.
    pub async fn get_token(&self) -> BboxResult<String> {
        self.fetch(Endpoint::DeviceToken, Some("token".into()), &["device", "token"])
            .await
    }

    /// Returns the router's status log.
    pub async fn get_logs(&self) -> BboxResult<Value> {
        self.fetch(Endpoint::DeviceLog, Some("log".into()), &["log"]).await
    }
}
