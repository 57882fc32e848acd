use serde::Serialize;

use crate::domain::message::MessageFormat;
use crate::domain::value::{DestinationNumber, MessageId, ReceiptId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountDetails {
    /// Billing period type reported by the gateway (e.g. `daily`, `monthly`).
    pub account_type: Option<String>,
    pub credit_limit: Option<u64>,
    pub credit_remaining: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub account: Option<AccountDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Per-item failure reported by the gateway inside an otherwise successful call.
pub struct RecipientError {
    pub code: Option<String>,
    pub sequence_number: Option<String>,
    pub recipients: Vec<DestinationNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessagesResult {
    pub sent: u32,
    pub scheduled: u32,
    pub failed: u32,
    pub account: Option<AccountDetails>,
    pub errors: Vec<RecipientError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Id of the original outbound message, when one was given.
    pub uid: Option<MessageId>,
    pub receipt_id: ReceiptId,
    pub format: Option<MessageFormat>,
    pub origin: Option<String>,
    pub received: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepliesResult {
    pub returned: u32,
    pub remaining: u32,
    /// Never absent: a response without replies yields an empty list.
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    pub uid: Option<MessageId>,
    pub receipt_id: ReceiptId,
    /// Delivery state as reported (e.g. `delivered`, `failed`, `pending`).
    pub status: Option<String>,
    pub recipient: Option<DestinationNumber>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportsResult {
    pub returned: u32,
    pub remaining: u32,
    pub reports: Vec<DeliveryReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedNumber {
    pub uid: Option<String>,
    pub number: DestinationNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedNumbersResult {
    pub found: u32,
    pub returned: u32,
    pub numbers: Vec<BlockedNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNumbersResult {
    pub blocked: u32,
    pub failed: u32,
    pub errors: Vec<RecipientError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnblockNumbersResult {
    pub unblocked: u32,
    pub failed: u32,
    pub errors: Vec<RecipientError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteScheduledResult {
    pub unscheduled: u32,
    pub errors: Vec<RecipientError>,
}
