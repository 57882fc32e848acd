//! Transport layer: SOAP envelope and XML wire-format details.

mod account;
mod blocked;
mod envelope;
mod replies;
mod reports;
mod scheduled;
mod send_messages;
pub(crate) mod xml;

pub use account::decode_check_user_response;
pub use blocked::{
    decode_block_numbers_response, decode_get_blocked_numbers_response,
    decode_unblock_numbers_response, encode_block_numbers_body, encode_get_blocked_numbers_body,
    encode_unblock_numbers_body,
};
pub use envelope::{
    EnvelopeError, encode_envelope, encode_request, mask_password, unwrap_response,
};
pub use replies::{
    decode_check_replies_response, decode_confirm_replies_response, encode_check_replies_body,
    encode_confirm_replies_body,
};
pub use reports::{
    decode_check_reports_response, decode_confirm_reports_response, encode_check_reports_body,
    encode_confirm_reports_body,
};
pub use scheduled::{decode_delete_scheduled_response, encode_delete_scheduled_body};
pub use send_messages::{decode_send_messages_response, encode_send_messages_body};

/// XML namespace of every gateway operation.
pub const NAMESPACE: &str = "http://xml.m4u.com.au/2009";

/// Remote operations exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SendMessages,
    CheckUser,
    CheckReplies,
    ConfirmReplies,
    CheckReports,
    ConfirmReports,
    GetBlockedNumbers,
    BlockNumbers,
    UnblockNumbers,
    DeleteScheduledMessages,
}

impl Operation {
    /// Element name of the request, e.g. `sendMessages`.
    pub fn name(self) -> &'static str {
        match self {
            Self::SendMessages => "sendMessages",
            Self::CheckUser => "checkUser",
            Self::CheckReplies => "checkReplies",
            Self::ConfirmReplies => "confirmReplies",
            Self::CheckReports => "checkReports",
            Self::ConfirmReports => "confirmReports",
            Self::GetBlockedNumbers => "getBlockedNumbers",
            Self::BlockNumbers => "blockNumbers",
            Self::UnblockNumbers => "unblockNumbers",
            Self::DeleteScheduledMessages => "deleteScheduledMessages",
        }
    }

    /// Element name of the matching response, e.g. `sendMessagesResponse`.
    pub fn response_name(self) -> String {
        format!("{}Response", self.name())
    }

    /// Value of the `SOAPAction` HTTP header.
    pub fn soap_action(self) -> String {
        format!("\"{NAMESPACE}/{}\"", self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response is missing element <{name}>")]
    MissingElement { name: &'static str },

    #[error("response element <{element}> has invalid {attribute}: {value:?}")]
    InvalidNumber {
        element: String,
        attribute: &'static str,
        value: String,
    },

    #[error("response element <{element}> is missing attribute {attribute}")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_names_and_actions() {
        assert_eq!(Operation::CheckUser.name(), "checkUser");
        assert_eq!(
            Operation::DeleteScheduledMessages.response_name(),
            "deleteScheduledMessagesResponse"
        );
        assert_eq!(
            Operation::SendMessages.soap_action(),
            "\"http://xml.m4u.com.au/2009/sendMessages\""
        );
    }
}
