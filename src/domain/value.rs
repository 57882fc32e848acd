use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Caller-chosen message identifier.
///
/// It goes out as the `uid` of each recipient, comes back as the `uid` of
/// replies and delivery reports, and addresses scheduled messages. The value
/// is sent verbatim; the gateway decides what is acceptable.
pub struct MessageId(String);

impl MessageId {
    /// Wire attribute name (`messageId`) used when addressing a scheduled message.
    pub const ATTRIBUTE: &'static str = "messageId";

    /// Wire attribute name (`uid`) on sent recipients, replies and reports.
    pub const UID_ATTRIBUTE: &'static str = "uid";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Gateway-assigned receipt id of a reply or delivery report.
///
/// Pass these back to `confirm_replies` / `confirm_reports` to acknowledge items.
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wire attribute name (`receiptId`).
    pub const ATTRIBUTE: &'static str = "receiptId";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Destination phone number exactly as sent to the gateway.
///
/// No normalization or format checks happen here; the gateway rejects numbers it
/// cannot route.
pub struct DestinationNumber(String);

impl DestinationNumber {
    /// Wire element name (`recipient`) wrapping a single number.
    pub const ELEMENT: &'static str = "recipient";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Value as sent on the wire.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DestinationNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DestinationNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_keep_values_verbatim() {
        assert_eq!(MessageId::from(" 42 ").as_str(), " 42 ");
        assert_eq!(ReceiptId::from("r-1".to_owned()).as_str(), "r-1");
        assert_eq!(DestinationNumber::from("0400 000 001").raw(), "0400 000 001");
        assert_eq!(MessageId::new("abc").to_string(), "abc");
    }
}
