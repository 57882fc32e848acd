use serde::Serialize;

use crate::domain::value::{DestinationNumber, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
/// How the gateway transmits a message.
pub enum MessageFormat {
    #[default]
    Sms,
    Voice,
}

impl MessageFormat {
    /// Wire spelling (`SMS` / `VOICE`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Voice => "VOICE",
        }
    }

    pub(crate) fn from_wire(value: &str) -> Option<Self> {
        match value {
            "SMS" => Some(Self::Sms),
            "VOICE" => Some(Self::Voice),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One destination of a [`Message`], with the optional id used to correlate replies.
pub struct Recipient {
    pub message_id: Option<MessageId>,
    pub destination: DestinationNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outbound message.
///
/// Built by the caller, filled through setters and [`Message::add_recipient`], then
/// rendered once per submission. Nothing is validated locally: an empty recipient
/// list or malformed number is reported by the gateway.
pub struct Message {
    content: String,
    format: MessageFormat,
    origin: Option<String>,
    validity_period: u32,
    delivery_report: bool,
    scheduled: Option<String>,
    recipients: Vec<Recipient>,
}

impl Message {
    /// Validity period the gateway applies when a client has no preference.
    pub const DEFAULT_VALIDITY_PERIOD: u32 = 169;

    /// Create an SMS with a delivery report requested and no recipients yet.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format: MessageFormat::Sms,
            origin: None,
            validity_period: Self::DEFAULT_VALIDITY_PERIOD,
            delivery_report: true,
            scheduled: None,
            recipients: Vec::new(),
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_format(&mut self, format: MessageFormat) {
        self.format = format;
    }

    /// Source number. Leave unset to let the gateway pick its rotary number.
    pub fn set_origin(&mut self, origin: Option<String>) {
        self.origin = origin;
    }

    pub fn set_validity_period(&mut self, validity_period: u32) {
        self.validity_period = validity_period;
    }

    pub fn set_delivery_report(&mut self, delivery_report: bool) {
        self.delivery_report = delivery_report;
    }

    /// Delay delivery until the given gateway timestamp (e.g. `2026-10-18T09:00:00Z`).
    pub fn set_scheduled(&mut self, scheduled: Option<String>) {
        self.scheduled = scheduled;
    }

    /// Append a destination. Duplicates are kept.
    pub fn add_recipient(
        &mut self,
        message_id: Option<MessageId>,
        destination: impl Into<DestinationNumber>,
    ) {
        self.recipients.push(Recipient {
            message_id,
            destination: destination.into(),
        });
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn format(&self) -> MessageFormat {
        self.format
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn validity_period(&self) -> u32 {
        self.validity_period
    }

    pub fn delivery_report(&self) -> bool {
        self.delivery_report
    }

    pub fn scheduled(&self) -> Option<&str> {
        self.scheduled.as_deref()
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Flatten the message into the shape the gateway expects.
    ///
    /// The wire message carries a single id attribute, so only the first
    /// recipient's `message_id` survives; ids of further recipients are dropped.
    pub fn render(&self) -> RenderedMessage {
        RenderedMessage {
            message_id: self
                .recipients
                .first()
                .and_then(|recipient| recipient.message_id.clone()),
            format: self.format.as_str(),
            content: self.content.clone(),
            validity_period: self.validity_period,
            delivery_report: if self.delivery_report { "true" } else { "false" },
            origin: self.origin.clone(),
            scheduled: self.scheduled.clone(),
            recipients: self
                .recipients
                .iter()
                .map(|recipient| RenderedRecipient {
                    destination: recipient.destination.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Wire-level view of a [`Message`].
///
/// Optional fields are skipped entirely when unset, never sent as empty values.
pub struct RenderedMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<MessageId>,
    pub format: &'static str,
    pub content: String,
    pub validity_period: u32,
    /// Literal `"true"` / `"false"`.
    pub delivery_report: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    pub recipients: Vec<RenderedRecipient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRecipient {
    pub destination: DestinationNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_takes_message_id_from_single_recipient() {
        let mut message = Message::new("hello");
        message.add_recipient(Some(MessageId::new("id1")), "+61400000001");

        let rendered = message.render();
        assert_eq!(rendered.message_id, Some(MessageId::new("id1")));
        assert_eq!(rendered.recipients.len(), 1);
        assert_eq!(rendered.recipients[0].destination.raw(), "+61400000001");
    }

    #[test]
    fn render_keeps_only_first_recipient_id() {
        let mut message = Message::new("hello");
        message.add_recipient(None, "+61400000001");
        message.add_recipient(Some(MessageId::new("second")), "+61400000002");

        let rendered = message.render();
        assert_eq!(rendered.message_id, None);
        assert_eq!(
            rendered
                .recipients
                .iter()
                .map(|r| r.destination.raw())
                .collect::<Vec<_>>(),
            vec!["+61400000001", "+61400000002"]
        );
    }

    #[test]
    fn render_uses_string_booleans() {
        let mut message = Message::new("hello");
        assert_eq!(message.render().delivery_report, "true");
        message.set_delivery_report(false);
        assert_eq!(message.render().delivery_report, "false");
    }

    #[test]
    fn render_copies_fields_without_defaulting() {
        let mut message = Message::new("call me");
        message.set_format(MessageFormat::Voice);
        message.set_validity_period(3);
        message.set_origin(Some("61411111111".to_owned()));
        message.set_scheduled(Some("2026-10-18T09:00:00Z".to_owned()));

        let rendered = message.render();
        assert_eq!(rendered.format, "VOICE");
        assert_eq!(rendered.content, "call me");
        assert_eq!(rendered.validity_period, 3);
        assert_eq!(rendered.origin.as_deref(), Some("61411111111"));
        assert_eq!(rendered.scheduled.as_deref(), Some("2026-10-18T09:00:00Z"));
    }

    #[test]
    fn render_without_origin_has_no_origin_key() {
        let mut message = Message::new("hello");
        message.add_recipient(None, "+61400000001");

        let value = serde_json::to_value(message.render()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("origin"));
        assert!(!object.contains_key("message_id"));
        assert_eq!(object["delivery_report"], "true");
    }

    #[test]
    fn empty_recipient_list_renders_without_error() {
        let rendered = Message::new("hello").render();
        assert!(rendered.recipients.is_empty());
        assert_eq!(rendered.message_id, None);
    }

    #[test]
    fn add_recipient_does_not_dedup() {
        let mut message = Message::new("hello");
        message.add_recipient(None, "+61400000001");
        message.add_recipient(None, "+61400000001");
        assert_eq!(message.recipients().len(), 2);
    }
}
