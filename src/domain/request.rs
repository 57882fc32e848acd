use crate::domain::message::Message;
use crate::domain::value::{DestinationNumber, MessageId, ReceiptId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Batch handling mode for `sendMessages`.
///
/// Everything except [`SendMode::Normal`] is a gateway test mode: messages are
/// accepted and reported but never delivered.
pub enum SendMode {
    #[default]
    Normal,
    DropAll,
    DropAllWithErrors,
    DropAllWithSuccess,
}

impl SendMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::DropAll => "dropAll",
            Self::DropAllWithErrors => "dropAllWithErrors",
            Self::DropAllWithSuccess => "dropAllWithSuccess",
        }
    }
}

#[derive(Debug, Clone)]
/// Single message to a single destination.
///
/// A delivery report is requested unless turned off with
/// [`SendMessage::delivery_report`].
pub struct SendMessage {
    destination: DestinationNumber,
    content: String,
    message_id: Option<MessageId>,
    origin: Option<String>,
    delivery_report: bool,
}

impl SendMessage {
    pub fn new(destination: impl Into<DestinationNumber>, content: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            content: content.into(),
            message_id: None,
            origin: None,
            delivery_report: true,
        }
    }

    pub fn message_id(mut self, message_id: impl Into<MessageId>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn delivery_report(mut self, delivery_report: bool) -> Self {
        self.delivery_report = delivery_report;
        self
    }

    /// Expand into the one-message batch that is actually submitted.
    pub fn into_batch(self) -> SendMessages {
        let mut message = Message::new(self.content);
        message.add_recipient(self.message_id, self.destination);
        message.set_origin(self.origin);
        message.set_delivery_report(self.delivery_report);
        SendMessages::new(vec![message])
    }
}

#[derive(Debug, Clone)]
/// Ordered batch of pre-built messages.
pub struct SendMessages {
    messages: Vec<Message>,
    send_mode: SendMode,
}

impl SendMessages {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            send_mode: SendMode::Normal,
        }
    }

    pub fn send_mode(mut self, send_mode: SendMode) -> Self {
        self.send_mode = send_mode;
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn mode(&self) -> SendMode {
        self.send_mode
    }
}

impl From<SendMessage> for SendMessages {
    fn from(value: SendMessage) -> Self {
        value.into_batch()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Peek at pending replies. Returned replies stay pending until confirmed.
pub struct CheckReplies {
    pub maximum: Option<u32>,
}

impl CheckReplies {
    pub fn at_most(maximum: u32) -> Self {
        Self {
            maximum: Some(maximum),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Peek at pending delivery reports. Returned reports stay pending until confirmed.
pub struct CheckReports {
    pub maximum: Option<u32>,
}

impl CheckReports {
    pub fn at_most(maximum: u32) -> Self {
        Self {
            maximum: Some(maximum),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetBlockedNumbers {
    pub maximum: Option<u32>,
}

impl GetBlockedNumbers {
    pub fn at_most(maximum: u32) -> Self {
        Self {
            maximum: Some(maximum),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Acknowledge replies so they are no longer returned by `check_replies`.
pub struct ConfirmReplies {
    receipt_ids: Vec<ReceiptId>,
}

impl ConfirmReplies {
    pub fn new<I, T>(receipt_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ReceiptId>,
    {
        Self {
            receipt_ids: receipt_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn receipt_ids(&self) -> &[ReceiptId] {
        &self.receipt_ids
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Acknowledge delivery reports so they are no longer returned by `check_reports`.
pub struct ConfirmReports {
    receipt_ids: Vec<ReceiptId>,
}

impl ConfirmReports {
    pub fn new<I, T>(receipt_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ReceiptId>,
    {
        Self {
            receipt_ids: receipt_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn receipt_ids(&self) -> &[ReceiptId] {
        &self.receipt_ids
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNumbers {
    numbers: Vec<DestinationNumber>,
}

impl BlockNumbers {
    pub fn new<I, T>(numbers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<DestinationNumber>,
    {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numbers(&self) -> &[DestinationNumber] {
        &self.numbers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnblockNumbers {
    numbers: Vec<DestinationNumber>,
}

impl UnblockNumbers {
    pub fn new<I, T>(numbers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<DestinationNumber>,
    {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numbers(&self) -> &[DestinationNumber] {
        &self.numbers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Cancel messages that were submitted with a `scheduled` time.
pub struct DeleteScheduledMessages {
    message_ids: Vec<MessageId>,
}

impl DeleteScheduledMessages {
    pub fn new<I, T>(message_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MessageId>,
    {
        Self {
            message_ids: message_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn message_ids(&self) -> &[MessageId] {
        &self.message_ids
    }
}
