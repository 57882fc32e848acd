//! Client layer: one remote call per method, mapping domain ↔ transport.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use xmltree::Element;

use crate::domain::{
    AccountInfo, BlockNumbers, BlockNumbersResult, BlockedNumbersResult, CheckReplies,
    CheckReports, ConfirmReplies, ConfirmReports, DeleteScheduledMessages, DeleteScheduledResult,
    GetBlockedNumbers, RepliesResult, ReportsResult, SendMessage, SendMessages,
    SendMessagesResult, UnblockNumbers, UnblockNumbersResult,
};
use crate::transport::{self, EnvelopeError, Operation};

const DEFAULT_ENDPOINT: &str = "https://soap.m4u.com.au/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_xml<'a>(
        &'a self,
        url: &'a str,
        soap_action: String,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_xml<'a>(
        &'a self,
        url: &'a str,
        soap_action: String,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "text/xml; charset=utf-8")
                .header("SOAPAction", soap_action)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Gateway account credentials.
///
/// Sent verbatim with every request. They are not checked locally; bad
/// credentials surface as a [`GatewayError::Fault`] on the first call.
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayClient`].
///
/// Failures are passed through as received. Nothing is retried or validated
/// locally.
pub enum GatewayError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with a SOAP fault (bad credentials, malformed request,
    /// rate limiting, outages).
    #[error("SOAP fault {code}: {message}")]
    Fault {
        code: String,
        message: String,
        detail: Option<String>,
    },

    /// Non-successful HTTP status code without a SOAP fault in the body.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not the expected SOAP response.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request envelope could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// Endpoint passed to [`GatewayClientBuilder::endpoint`] is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl GatewayError {
    fn parse(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Parse(Box::new(err))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct GatewayClientBuilder {
    credentials: Credentials,
    endpoint: String,
    debug: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GatewayClientBuilder {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            debug: false,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the SOAP endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Log full request/response envelopes (password masked) at `DEBUG`.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
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

    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        url::Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayError::Transport(Box::new(err)))?;

        Ok(GatewayClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            debug: self.debug,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// MessageMedia SOAP gateway client.
///
/// Every method makes exactly one remote call: it wraps the credentials and an
/// operation-specific body into a SOAP envelope, posts it, and decodes the
/// `<result>` of the response. The client holds no per-call state and can be
/// shared freely.
///
/// `check_replies` / `check_reports` only peek: the same items come back on every
/// call until they are acknowledged with `confirm_replies` / `confirm_reports`.
pub struct GatewayClient {
    credentials: Credentials,
    endpoint: String,
    debug: bool,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl GatewayClient {
    /// Create a client for the default endpoint.
    ///
    /// Never fails; credentials are first checked by the gateway on the first call.
    /// `debug` only turns on envelope logging.
    pub fn new(username: impl Into<String>, password: impl Into<String>, debug: bool) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            debug,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> GatewayClientBuilder {
        GatewayClientBuilder::new(username, password)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message to one destination.
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<SendMessagesResult, GatewayError> {
        self.send_messages(request.into_batch()).await
    }

    /// Send a batch of messages in a single `sendMessages` call.
    pub async fn send_messages(
        &self,
        request: SendMessages,
    ) -> Result<SendMessagesResult, GatewayError> {
        let body = transport::encode_send_messages_body(&request);
        let response = self.invoke(Operation::SendMessages, body).await?;
        transport::decode_send_messages_response(&response).map_err(GatewayError::parse)
    }

    /// Account type and credit (`checkUser`).
    pub async fn get_account_info(&self) -> Result<AccountInfo, GatewayError> {
        let response = self
            .invoke(Operation::CheckUser, Element::new("requestBody"))
            .await?;
        transport::decode_check_user_response(&response).map_err(GatewayError::parse)
    }

    /// Peek at pending replies. Repeated calls return the same replies until confirmed.
    pub async fn check_replies(&self, request: CheckReplies) -> Result<RepliesResult, GatewayError> {
        let body = transport::encode_check_replies_body(&request);
        let response = self.invoke(Operation::CheckReplies, body).await?;
        transport::decode_check_replies_response(&response).map_err(GatewayError::parse)
    }

    /// Acknowledge replies; returns how many the gateway confirmed.
    pub async fn confirm_replies(&self, request: ConfirmReplies) -> Result<u32, GatewayError> {
        let body = transport::encode_confirm_replies_body(&request);
        let response = self.invoke(Operation::ConfirmReplies, body).await?;
        transport::decode_confirm_replies_response(&response).map_err(GatewayError::parse)
    }

    /// Peek at pending delivery reports. Repeated calls return the same reports until confirmed.
    pub async fn check_reports(&self, request: CheckReports) -> Result<ReportsResult, GatewayError> {
        let body = transport::encode_check_reports_body(&request);
        let response = self.invoke(Operation::CheckReports, body).await?;
        transport::decode_check_reports_response(&response).map_err(GatewayError::parse)
    }

    /// Acknowledge delivery reports; returns how many the gateway confirmed.
    pub async fn confirm_reports(&self, request: ConfirmReports) -> Result<u32, GatewayError> {
        let body = transport::encode_confirm_reports_body(&request);
        let response = self.invoke(Operation::ConfirmReports, body).await?;
        transport::decode_confirm_reports_response(&response).map_err(GatewayError::parse)
    }

    pub async fn get_blocked_numbers(
        &self,
        request: GetBlockedNumbers,
    ) -> Result<BlockedNumbersResult, GatewayError> {
        let body = transport::encode_get_blocked_numbers_body(&request);
        let response = self.invoke(Operation::GetBlockedNumbers, body).await?;
        transport::decode_get_blocked_numbers_response(&response).map_err(GatewayError::parse)
    }

    pub async fn block_numbers(
        &self,
        request: BlockNumbers,
    ) -> Result<BlockNumbersResult, GatewayError> {
        let body = transport::encode_block_numbers_body(&request);
        let response = self.invoke(Operation::BlockNumbers, body).await?;
        transport::decode_block_numbers_response(&response).map_err(GatewayError::parse)
    }

    pub async fn unblock_numbers(
        &self,
        request: UnblockNumbers,
    ) -> Result<UnblockNumbersResult, GatewayError> {
        let body = transport::encode_unblock_numbers_body(&request);
        let response = self.invoke(Operation::UnblockNumbers, body).await?;
        transport::decode_unblock_numbers_response(&response).map_err(GatewayError::parse)
    }

    /// Cancel messages that were submitted with a scheduled delivery time.
    pub async fn delete_scheduled_messages(
        &self,
        request: DeleteScheduledMessages,
    ) -> Result<DeleteScheduledResult, GatewayError> {
        let body = transport::encode_delete_scheduled_body(&request);
        let response = self.invoke(Operation::DeleteScheduledMessages, body).await?;
        transport::decode_delete_scheduled_response(&response).map_err(GatewayError::parse)
    }

    /// Wrap `request_body` with credentials, post it, and return `<operationResponse>`.
    async fn invoke(
        &self,
        operation: Operation,
        request_body: Element,
    ) -> Result<Element, GatewayError> {
        let request = transport::encode_request(
            operation,
            self.credentials.username(),
            self.credentials.password(),
            request_body,
        );
        let envelope =
            transport::encode_envelope(request).map_err(|err| GatewayError::Encode(Box::new(err)))?;

        tracing::debug!(
            operation = operation.name(),
            endpoint = %self.endpoint,
            "invoking gateway operation"
        );
        if self.debug {
            tracing::debug!(
                operation = operation.name(),
                envelope = %transport::mask_password(&envelope),
                "SOAP request envelope"
            );
        }

        let response = self
            .http
            .post_xml(&self.endpoint, operation.soap_action(), envelope)
            .await
            .map_err(GatewayError::Transport)?;

        if self.debug {
            tracing::debug!(
                operation = operation.name(),
                status = response.status,
                envelope = %response.body,
                "SOAP response envelope"
            );
        }

        let success = (200..=299).contains(&response.status);
        match transport::unwrap_response(operation, &response.body) {
            Err(EnvelopeError::Fault(fault)) => {
                tracing::warn!(
                    operation = operation.name(),
                    code = %fault.code,
                    fault_message = %fault.message,
                    "gateway returned SOAP fault"
                );
                Err(GatewayError::Fault {
                    code: fault.code,
                    message: fault.message,
                    detail: fault.detail,
                })
            }
            Ok(element) if success => Ok(element),
            Err(err) if success => Err(GatewayError::parse(err)),
            _ => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                Err(GatewayError::HttpStatus {
                    status: response.status,
                    body,
                })
            }
        }
    }
}
