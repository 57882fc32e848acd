use xmltree::Element;

use super::TransportError;
use super::account::decode_account_details;
use super::xml::{count, push_child, recipient_errors, required_child, text_element, with_attribute};
use crate::domain::{
    DestinationNumber, MessageId, RenderedMessage, SendMessages, SendMessagesResult,
};

/// `<requestBody><messages sendMode=".."><message/>...</messages></requestBody>`
///
/// All messages of a batch share one `<messages>` collection.
pub fn encode_send_messages_body(request: &SendMessages) -> Element {
    let mut messages = with_attribute(Element::new("messages"), "sendMode", request.mode().as_str());
    for message in request.messages() {
        push_child(&mut messages, encode_message(&message.render()));
    }

    let mut body = Element::new("requestBody");
    push_child(&mut body, messages);
    body
}

fn encode_message(rendered: &RenderedMessage) -> Element {
    let mut message = with_attribute(Element::new("message"), "format", rendered.format);

    // The message id goes out as `uid` on every recipient.
    let mut recipients = Element::new("recipients");
    for recipient in &rendered.recipients {
        let mut element = text_element(DestinationNumber::ELEMENT, recipient.destination.raw());
        if let Some(message_id) = rendered.message_id.as_ref() {
            element = with_attribute(element, MessageId::UID_ATTRIBUTE, message_id.as_str());
        }
        push_child(&mut recipients, element);
    }
    push_child(&mut message, recipients);

    if let Some(origin) = rendered.origin.as_deref() {
        push_child(&mut message, text_element("origin", origin));
    }
    push_child(
        &mut message,
        text_element("deliveryReport", rendered.delivery_report),
    );
    push_child(
        &mut message,
        text_element("validityPeriod", rendered.validity_period.to_string()),
    );
    if let Some(scheduled) = rendered.scheduled.as_deref() {
        push_child(&mut message, text_element("scheduled", scheduled));
    }
    push_child(&mut message, text_element("content", rendered.content.as_str()));
    message
}

pub fn decode_send_messages_response(
    response: &Element,
) -> Result<SendMessagesResult, TransportError> {
    let result = required_child(response, "result")?;
    Ok(SendMessagesResult {
        sent: count(result, "sent")?,
        scheduled: count(result, "scheduled")?,
        failed: count(result, "failed")?,
        account: result
            .get_child("accountDetails")
            .map(decode_account_details)
            .transpose()?,
        errors: recipient_errors(result),
    })
}
