use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, COOKIE};
use reqwest::{Client as ReqwestClient, Method, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::{AccessPolicy, Endpoint, Session, SESSION_COOKIE};
use crate::endpoint::{AccessMode, EndpointDescriptor, UrlBuilder, DEFAULT_LOCAL_ADDRESS};
use crate::models::api_response;
use crate::{BboxError, BboxResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for Bbox clients.
///
/// The address is validated at build time; no request is sent until the
/// first operation is called.
#[derive(Default)]
pub struct BboxClientBuilder {
    address: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_invalid_certs: bool,
    http_client: Option<ReqwestClient>,
}

impl BboxClientBuilder {
    /// Sets the router address: a LAN IP (optionally with a port) or the
    /// remote relay host. Defaults to `192.168.1.254`.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Accept self-signed certificates on the remote relay.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> BboxResult<BboxClient> {
        let address = self.address.unwrap_or_else(|| DEFAULT_LOCAL_ADDRESS.to_string());
        let urls = UrlBuilder::new(&address)?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| concat!("bbox-client/", env!("CARGO_PKG_VERSION")).to_string());

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .danger_accept_invalid_certs(self.accept_invalid_certs)
                .user_agent(user_agent.as_str())
                .build()
                .map_err(|e| {
                    BboxError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        log::debug!("bbox client for {address} in {} mode", urls.mode());

        Ok(BboxClient {
            urls,
            timeout,
            user_agent,
            http_client,
            session: Session::new(),
        })
    }
}

/// Client for one Bbox router.
///
/// The access mode is fixed when the client is built. Session state is owned
/// by the client, so login and logout take `&mut self`; share a client across
/// tasks only behind your own lock.
pub struct BboxClient {
    urls: UrlBuilder,
    timeout: Duration,
    user_agent: String,
    http_client: ReqwestClient,
    pub(crate) session: Session,
}

impl fmt::Debug for BboxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BboxClient")
            .field("mode", &self.urls.mode())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("session", &self.session)
            .finish()
    }
}

impl BboxClient {
    pub fn builder() -> BboxClientBuilder {
        BboxClientBuilder::default()
    }

    /// Client for the router at the default LAN address.
    pub fn new() -> BboxResult<Self> {
        Self::builder().build()
    }

    /// Whether the router is reached locally or through the relay.
    pub fn access_mode(&self) -> AccessMode {
        self.urls.mode()
    }

    /// Returns true while the session holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolves `endpoint` against this client's address and mode.
    pub fn url_for(&self, endpoint: &EndpointDescriptor) -> BboxResult<Url> {
        self.urls.build(endpoint)
    }

    /// Makes a raw request to the router API.
    ///
    /// The call goes through the same access gate as the typed operations,
    /// using `policy`. The response is returned untouched: non-2xx statuses
    /// are not turned into errors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint cannot be resolved to a URL.
    /// - `policy` requires a session in the current mode and none is open.
    /// - The request fails at the transport level.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use bbox_client::{AccessPolicy, ApiFamily, AuthLevel, BboxClient, EndpointDescriptor};
    /// # use reqwest::Method;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), bbox_client::BboxError> {
    /// let client = BboxClient::new()?;
    /// let endpoint = EndpointDescriptor::new(ApiFamily::Device).with_suffix("summary");
    /// let policy = AccessPolicy::new(AuthLevel::Public, AuthLevel::Private);
    ///
    /// let response = client
    ///     .raw_request(Method::GET, &endpoint, policy, None::<&()>)
    ///     .await?;
    /// println!("status: {}", response.status());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<T>(
        &self,
        method: Method,
        endpoint: &EndpointDescriptor,
        policy: AccessPolicy,
        form: Option<&T>,
    ) -> BboxResult<Response>
    where
        T: Serialize + ?Sized,
    {
        let url = self.urls.build(endpoint)?;
        self.session.authorize(policy, self.urls.mode())?;
        self.execute(method, url, form).await
    }

    /// Runs one typed operation through the gate and the executor.
    pub(crate) async fn call<T>(
        &self,
        endpoint: Endpoint,
        suffix: Option<String>,
        method: Method,
        form: Option<&T>,
    ) -> BboxResult<Response>
    where
        T: Serialize + ?Sized,
    {
        self.raw_request(method, &endpoint.descriptor(suffix), endpoint.policy(), form)
            .await
    }

    /// GETs `endpoint` and decodes the document found at `path`.
    pub(crate) async fn fetch<R>(
        &self,
        endpoint: Endpoint,
        suffix: Option<String>,
        path: &[&str],
    ) -> BboxResult<R>
    where
        R: DeserializeOwned,
    {
        let response = self.call(endpoint, suffix, Method::GET, None::<&()>).await?;
        let body = success_body(response).await?;
        api_response::extract(&body, path)
    }

    /// Sends exactly one request, with the session cookie when there is one.
    async fn execute<T>(&self, method: Method, url: Url, form: Option<&T>) -> BboxResult<Response>
    where
        T: Serialize + ?Sized,
    {
        log::debug!("{method} {url}");

        let mut request = self.http_client.request(method, url);

        if let Some(token) = self.session.token() {
            let mut cookie =
                HeaderValue::from_str(&format!("{SESSION_COOKIE}={}", token.expose_secret()))
                    .map_err(|e| {
                        BboxError::AuthenticationError(format!("Invalid session token: {e}"))
                    })?;
            cookie.set_sensitive(true);
            request = request.header(COOKIE, cookie);
        }

        if let Some(data) = form {
            request = request.form(data);
        }

        let response = request.send().await?;
        log::debug!("response status {}", response.status());

        Ok(response)
    }
}

/// Reads the body of a response that a typed accessor expects to succeed.
pub(crate) async fn success_body(response: Response) -> BboxResult<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(BboxError::ApiError { status, body });
    }

    Ok(body)
}
