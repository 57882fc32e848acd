//! Domain layer: message model, per-operation requests, and response records (no I/O).

mod message;
mod request;
mod response;
mod value;

pub use message::{Message, MessageFormat, Recipient, RenderedMessage, RenderedRecipient};
pub use request::{
    BlockNumbers, CheckReplies, CheckReports, ConfirmReplies, ConfirmReports,
    DeleteScheduledMessages, GetBlockedNumbers, SendMessage, SendMessages, SendMode,
    UnblockNumbers,
};
pub use response::{
    AccountDetails, AccountInfo, BlockNumbersResult, BlockedNumber, BlockedNumbersResult,
    DeleteScheduledResult, DeliveryReport, RecipientError, RepliesResult, Reply, ReportsResult,
    SendMessagesResult, UnblockNumbersResult,
};
pub use value::{DestinationNumber, MessageId, ReceiptId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_expands_to_one_message_batch() {
        let batch = SendMessage::new("+61400000001", "hello")
            .message_id("m-1")
            .into_batch();

        assert_eq!(batch.mode(), SendMode::Normal);
        assert_eq!(batch.messages().len(), 1);

        let rendered = batch.messages()[0].render();
        assert_eq!(rendered.delivery_report, "true");
        assert_eq!(rendered.message_id, Some(MessageId::new("m-1")));
        assert_eq!(rendered.origin, None);
        assert_eq!(rendered.recipients.len(), 1);
    }

    #[test]
    fn send_message_options_flow_into_message() {
        let batch: SendMessages = SendMessage::new("+61400000001", "hello")
            .origin("61411111111")
            .delivery_report(false)
            .into();

        let message = &batch.messages()[0];
        assert_eq!(message.origin(), Some("61411111111"));
        assert!(!message.delivery_report());
        assert_eq!(message.render().delivery_report, "false");
    }

    #[test]
    fn send_mode_wire_names() {
        assert_eq!(SendMode::default().as_str(), "normal");
        assert_eq!(SendMode::DropAll.as_str(), "dropAll");
        assert_eq!(SendMode::DropAllWithErrors.as_str(), "dropAllWithErrors");
        assert_eq!(SendMode::DropAllWithSuccess.as_str(), "dropAllWithSuccess");
    }

    #[test]
    fn confirm_requests_preserve_order() {
        let request = ConfirmReplies::new(["c", "a", "b"]);
        assert_eq!(
            request
                .receipt_ids()
                .iter()
                .map(ReceiptId::as_str)
                .collect::<Vec<_>>(),
            vec!["c", "a", "b"]
        );

        let request = ConfirmReports::new(vec![ReceiptId::new("2"), ReceiptId::new("1")]);
        assert_eq!(request.receipt_ids()[0].as_str(), "2");
    }

    #[test]
    fn check_requests_default_to_no_maximum() {
        assert_eq!(CheckReplies::default().maximum, None);
        assert_eq!(CheckReports::at_most(5).maximum, Some(5));
        assert_eq!(GetBlockedNumbers::at_most(10).maximum, Some(10));
    }
}
