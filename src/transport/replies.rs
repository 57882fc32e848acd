use xmltree::Element;

use super::TransportError;
use super::xml::{
    attribute, child_text, collection, count, push_child, required_attribute, required_child,
    text_element, with_attribute,
};
use crate::domain::{
    CheckReplies, ConfirmReplies, MessageFormat, MessageId, ReceiptId, RepliesResult, Reply,
};

pub fn encode_check_replies_body(request: &CheckReplies) -> Element {
    let mut body = Element::new("requestBody");
    if let Some(maximum) = request.maximum {
        push_child(&mut body, text_element("maximumReplies", maximum.to_string()));
    }
    body
}

/// `<requestBody><replies><reply receiptId=".."/>...</replies></requestBody>`
pub fn encode_confirm_replies_body(request: &ConfirmReplies) -> Element {
    let mut replies = Element::new("replies");
    for receipt_id in request.receipt_ids() {
        push_child(
            &mut replies,
            with_attribute(Element::new("reply"), ReceiptId::ATTRIBUTE, receipt_id.as_str()),
        );
    }

    let mut body = Element::new("requestBody");
    push_child(&mut body, replies);
    body
}

pub fn decode_check_replies_response(response: &Element) -> Result<RepliesResult, TransportError> {
    let result = required_child(response, "result")?;
    let replies = collection(result, "replies", "reply")
        .map(decode_reply)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RepliesResult {
        returned: count(result, "returned")?,
        remaining: count(result, "remaining")?,
        replies,
    })
}

fn decode_reply(reply: &Element) -> Result<Reply, TransportError> {
    Ok(Reply {
        uid: attribute(reply, MessageId::UID_ATTRIBUTE).map(MessageId::new),
        receipt_id: ReceiptId::new(required_attribute(reply, ReceiptId::ATTRIBUTE)?),
        format: attribute(reply, "format").and_then(|format| MessageFormat::from_wire(&format)),
        origin: child_text(reply, "origin"),
        received: child_text(reply, "received"),
        content: child_text(reply, "content"),
    })
}

pub fn decode_confirm_replies_response(response: &Element) -> Result<u32, TransportError> {
    count(required_child(response, "result")?, "confirmed")
}
