use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::{Method, Request};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;
#[cfg(feature = "verbose")]
use tracing::trace;
use crate::config::ClientConfig;
use crate::error::{HttpError, Result};

/// An HTTP method and a path relative to the API root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into() }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Sends one request to the API and hands back the raw body of a successful response
///
/// Non-success statuses must be reported as errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, route: Route, body: Option<Value>) -> Result<Vec<u8>>;
}

/// The default [Transport], built on a shared `reqwest` client
pub struct ReqwestTransport {
    client: reqwest::Client,
    api_url: String,
    token: Arc<String>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let token = normalize_token(&config.token);
        if token.is_empty() {
            return Err(HttpError::Config("the token is empty".to_string()));
        }

        reqwest::Url::parse(&config.api_url)
            .map_err(|e| HttpError::Config(format!("invalid API url {:?}: {e}", config.api_url)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: Arc::new(token),
        })
    }

    pub fn get_token(&self) -> Arc<String> {
        self.token.clone()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The authenticated request for `route`, with `body` as JSON when given
    fn build_request(&self, route: &Route, body: Option<&Value>) -> reqwest::Result<Request> {
        let mut builder = self.client
            .request(route.method.clone(), crate::url!(&self.api_url, "{}", route.path))
            .header(AUTHORIZATION, format!("Bot {}", self.token));

        if let Some(body) = body {
            builder = builder.json(body);
        }

        builder.build()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, route: Route, body: Option<Value>) -> Result<Vec<u8>> {
        let request = self.build_request(&route, body.as_ref())?;

        debug!(target: "iris::http", "Sending {route}");
        let response = self.client.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        #[cfg(feature = "verbose")]
        trace!(target: "iris::http", "{route} answered {status} with {} byte(s)", bytes.len());

        if !status.is_success() {
            debug!(target: "iris::http", "{route} failed with status {status}");
            return Err(HttpError::from_response(status, &bytes));
        }

        Ok(bytes.to_vec())
    }
}

/// Accept tokens copied with their `Bot ` prefix
fn normalize_token(token: &str) -> String {
    let token = token.trim_start();
    token.strip_prefix("Bot ").unwrap_or(token).trim().to_string()
}

/// Helper to build urls
///
/// Joins the API root and a formatted path with exactly one `/`
#[macro_export]
macro_rules! url {
    ($base:expr, $($arg:tt)*) => {{
        let base: &str = $base;
        let path = format!($($arg)*);

        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_has_a_single_separator() {
        assert_eq!(crate::url!("https://discord.com/api/v10/", "{}", "gateway"), "https://discord.com/api/v10/gateway");
        assert_eq!(crate::url!("https://discord.com/api/v10", "/users/{}", "@me"), "https://discord.com/api/v10/users/@me");
    }

    #[test]
    fn token_prefix_is_stripped() {
        assert_eq!(normalize_token("Bot abc.def"), "abc.def");
        assert_eq!(normalize_token("  abc.def \n"), "abc.def");
    }

    #[test]
    fn requests_are_authenticated() {
        let transport = ReqwestTransport::new(&ClientConfig::new("Bot abc")).unwrap();

        let request = transport.build_request(&Route::get("gateway"), None).unwrap();
        assert_eq!(request.url().as_str(), "https://discord.com/api/v10/gateway");
        assert_eq!(request.headers()[AUTHORIZATION], "Bot abc");
        assert!(request.body().is_none());

        let body = serde_json::json!({ "tts": false });
        let request = transport.build_request(&Route::post("channels/1/messages"), Some(&body)).unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body().and_then(|b| b.as_bytes()), Some(br#"{"tts":false}"#.as_slice()));
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(ReqwestTransport::new(&ClientConfig::new("Bot ")), Err(HttpError::Config(_))));
        assert!(matches!(
            ReqwestTransport::new(&ClientConfig::new("abc").with_api_url("not a url")),
            Err(HttpError::Config(_))
        ));
    }

    #[test]
    fn route_display() {
        assert_eq!(Route::delete("channels/1/messages/2").to_string(), "DELETE channels/1/messages/2");
    }
}
