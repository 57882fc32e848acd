//! Typed Rust client for the MessageMedia (m4u) SOAP SMS gateway.
//!
//! The crate is split the usual way: a domain layer of plain types (the message
//! model, per-operation requests and response records), a transport layer that
//! owns the SOAP envelope and XML wire quirks, and a small client layer that
//! issues exactly one remote call per method.
//!
//! ```rust,no_run
//! use m4u_soap::{CheckReplies, ConfirmReplies, GatewayClient, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), m4u_soap::GatewayError> {
//!     let client = GatewayClient::new("user", "secret", false);
//!     let sent = client
//!         .send_message(SendMessage::new("+61400000001", "hello").message_id("42"))
//!         .await?;
//!     println!("sent: {}", sent.sent);
//!
//!     // Replies stay pending until they are confirmed.
//!     let replies = client.check_replies(CheckReplies::default()).await?;
//!     let ids = replies.replies.iter().map(|reply| reply.receipt_id.clone());
//!     client.confirm_replies(ConfirmReplies::new(ids)).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, GatewayClient, GatewayClientBuilder, GatewayError};
pub use domain::{
    AccountDetails, AccountInfo, BlockNumbers, BlockNumbersResult, BlockedNumber,
    BlockedNumbersResult, CheckReplies, CheckReports, ConfirmReplies, ConfirmReports,
    DeleteScheduledMessages, DeleteScheduledResult, DeliveryReport, DestinationNumber,
    GetBlockedNumbers, Message, MessageFormat, MessageId, ReceiptId, Recipient,
    RecipientError, RenderedMessage, RenderedRecipient, RepliesResult, Reply, ReportsResult,
    SendMessage, SendMessages, SendMessagesResult, SendMode, UnblockNumbers,
    UnblockNumbersResult,
};
