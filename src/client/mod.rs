//! Client layer: orchestrates the single `sms/send` exchange.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::domain::{ApiId, SendSms, SendSmsReply, ServiceCode};

/// Endpoint the tool talks to unless overridden.
pub const DEFAULT_SEND_ENDPOINT: &str = "http://sms.ru/sms/send";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsSendClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - gateway-reported failures (a non-100 service code),
/// - malformed replies.
pub enum SmsSendError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The gateway returned a service code other than 100.
    #[error("gateway returned code {}: {}", code.as_i32(), code.describe())]
    Service { code: ServiceCode },

    /// Response body could not be parsed as the expected plaintext format.
    #[error("malformed gateway reply: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] crate::domain::ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsSendClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SmsSendClientBuilder {
    api_id: ApiId,
    send_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsSendClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(api_id: ApiId) -> Self {
        Self {
            api_id,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `sms/send` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsSendClient`].
    pub fn build(self) -> Result<SmsSendClient, SmsSendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsSendError::Transport(Box::new(err)))?;

        Ok(SmsSendClient {
            api_id: self.api_id,
            send_endpoint: self.send_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level client for the gateway's `sms/send` call.
///
/// This type orchestrates query encoding, the single HTTP GET, and reply
/// parsing. By default it talks to `http://sms.ru/sms/send`.
pub struct SmsSendClient {
    api_id: ApiId,
    send_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsSendClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmsSendClient::builder`].
    pub fn new(api_id: ApiId) -> Self {
        Self {
            api_id,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_id: ApiId) -> SmsSendClientBuilder {
        SmsSendClientBuilder::new(api_id)
    }

    /// Send one SMS message through the gateway.
    ///
    /// Performs exactly one HTTP GET; there is no retry on any failure path.
    ///
    /// Errors:
    /// - [`SmsSendError::Transport`] when the request never completes,
    /// - [`SmsSendError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`SmsSendError::Parse`] when the reply is not the expected plaintext,
    /// - [`SmsSendError::Service`] when the gateway returns a non-100 code.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsReply, SmsSendError> {
        let mut params = Vec::<(String, String)>::new();
        params.push((ApiId::FIELD.to_owned(), self.api_id.as_str().to_owned()));
        params.extend(crate::transport::encode_send_sms_query(&request));

        let mut url = Url::parse(&self.send_endpoint)?;
        url.query_pairs_mut().extend_pairs(&params);

        debug!(url = %url, "requesting sms/send");

        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(SmsSendError::Transport)?;

        debug!(
            status = response.status,
            bytes = response.body.len(),
            "gateway replied"
        );

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsSendError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let reply = crate::transport::decode_send_sms_plain_response(&response.body)
            .map_err(|err| SmsSendError::Parse(Box::new(err)))?;

        if !reply.code.is_accepted() {
            return Err(SmsSendError::Service { code: reply.code });
        }

        Ok(reply)
    }
}
