use reqwest::{Method, StatusCode};

use crate::auth::{Endpoint, SESSION_COOKIE};
use crate::models::auth::LoginRequest;
use crate::{BboxClient, BboxError, BboxResult};

impl BboxClient {
    /// Opens a session with the administrator password.
    ///
    /// Returns true if the router answered 200 and the session now holds a
    /// token. Any other status leaves the session untouched and returns false.
    ///
    /// # Errors
    ///
    /// Returns `BboxError::AuthenticationError` if the router answered 200
    /// without setting the `BBOX_ID` cookie.
    pub async fn login(&mut self, password: &str) -> BboxResult<bool> {
        let form = LoginRequest { password };
        let response = self.call(Endpoint::Login, None, Method::POST, Some(&form)).await?;

        if response.status() != StatusCode::OK {
            log::warn!("login rejected with status {}", response.status());
            return Ok(self.session.is_authenticated());
        }

        let token = response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| {
                BboxError::AuthenticationError(format!("No {SESSION_COOKIE} cookie received"))
            })?;

        self.session.set_token(token);
        log::info!("session opened in {} mode", self.access_mode());

        Ok(self.session.is_authenticated())
    }

    /// Closes the current session.
    ///
    /// Returns true if no session is held afterwards.
    pub async fn logout(&mut self) -> BboxResult<bool> {
        let response = self.call(Endpoint::Logout, None, Method::POST, None::<&()>).await?;

        if response.status() == StatusCode::OK {
            self.session.clear();
            log::info!("session closed");
        } else {
            log::warn!("logout rejected with status {}", response.status());
        }

        Ok(!self.session.is_authenticated())
    }
}
