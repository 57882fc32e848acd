use xmltree::Element;

use super::TransportError;
use super::xml::{count, push_child, recipient_errors, required_child, with_attribute};
use crate::domain::{DeleteScheduledMessages, DeleteScheduledResult, MessageId};

/// `<requestBody><messages><message messageId=".."/></messages>...</requestBody>`
///
/// Unlike `sendMessages`, every id gets its own `<messages>` wrapper holding a
/// single `<message>`; the gateway expects this shape.
pub fn encode_delete_scheduled_body(request: &DeleteScheduledMessages) -> Element {
    let mut body = Element::new("requestBody");
    for message_id in request.message_ids() {
        let mut messages = Element::new("messages");
        push_child(
            &mut messages,
            with_attribute(Element::new("message"), MessageId::ATTRIBUTE, message_id.as_str()),
        );
        push_child(&mut body, messages);
    }
    body
}

pub fn decode_delete_scheduled_response(
    response: &Element,
) -> Result<DeleteScheduledResult, TransportError> {
    let result = required_child(response, "result")?;
    Ok(DeleteScheduledResult {
        unscheduled: count(result, "unscheduled")?,
        errors: recipient_errors(result),
    })
}
