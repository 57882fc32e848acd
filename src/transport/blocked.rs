use xmltree::Element;

use super::TransportError;
use super::xml::{
    attribute, collection, count, push_child, recipient_errors, required_child, text,
    text_element,
};
use crate::domain::{
    BlockNumbers, BlockNumbersResult, BlockedNumber, BlockedNumbersResult, DestinationNumber,
    GetBlockedNumbers, UnblockNumbers, UnblockNumbersResult,
};

pub fn encode_get_blocked_numbers_body(request: &GetBlockedNumbers) -> Element {
    let mut body = Element::new("requestBody");
    if let Some(maximum) = request.maximum {
        push_child(
            &mut body,
            text_element("maximumRecipients", maximum.to_string()),
        );
    }
    body
}

pub fn encode_block_numbers_body(request: &BlockNumbers) -> Element {
    recipients_body(request.numbers())
}

pub fn encode_unblock_numbers_body(request: &UnblockNumbers) -> Element {
    recipients_body(request.numbers())
}

/// `<requestBody><recipients><recipient>..</recipient>...</recipients></requestBody>`
fn recipients_body(numbers: &[DestinationNumber]) -> Element {
    let mut recipients = Element::new("recipients");
    for number in numbers {
        push_child(
            &mut recipients,
            text_element(DestinationNumber::ELEMENT, number.raw()),
        );
    }

    let mut body = Element::new("requestBody");
    push_child(&mut body, recipients);
    body
}

pub fn decode_get_blocked_numbers_response(
    response: &Element,
) -> Result<BlockedNumbersResult, TransportError> {
    let result = required_child(response, "result")?;
    let numbers = collection(result, "recipients", DestinationNumber::ELEMENT)
        .filter_map(|recipient| {
            text(recipient).map(|number| BlockedNumber {
                uid: attribute(recipient, "uid"),
                number: DestinationNumber::new(number),
            })
        })
        .collect();

    Ok(BlockedNumbersResult {
        found: count(result, "found")?,
        returned: count(result, "returned")?,
        numbers,
    })
}

pub fn decode_block_numbers_response(
    response: &Element,
) -> Result<BlockNumbersResult, TransportError> {
    let result = required_child(response, "result")?;
    Ok(BlockNumbersResult {
        blocked: count(result, "blocked")?,
        failed: count(result, "failed")?,
        errors: recipient_errors(result),
    })
}

pub fn decode_unblock_numbers_response(
    response: &Element,
) -> Result<UnblockNumbersResult, TransportError> {
    let result = required_child(response, "result")?;
    Ok(UnblockNumbersResult {
        unblocked: count(result, "unblocked")?,
        failed: count(result, "failed")?,
        errors: recipient_errors(result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::xml::{child_text, children};

    fn numbers_in(body: &Element) -> Vec<String> {
        children(body.get_child("recipients").unwrap(), "recipient")
            .filter_map(text)
            .collect()
    }

    #[test]
    fn encode_block_and_unblock_use_recipients_list() {
        let block = encode_block_numbers_body(&BlockNumbers::new(["+61400000001", "+61400000002"]));
        assert_eq!(numbers_in(&block), vec!["+61400000001", "+61400000002"]);

        let unblock = encode_unblock_numbers_body(&UnblockNumbers::new(["+61400000003"]));
        assert_eq!(numbers_in(&unblock), vec!["+61400000003"]);
    }

    #[test]
    fn encode_get_blocked_numbers_maximum() {
        assert!(encode_get_blocked_numbers_body(&GetBlockedNumbers::default())
            .children
            .is_empty());
        let body = encode_get_blocked_numbers_body(&GetBlockedNumbers::at_most(50));
        assert_eq!(child_text(&body, "maximumRecipients").as_deref(), Some("50"));
    }

    #[test]
    fn decode_blocked_numbers() {
        let response = Element::parse(
            r#"<getBlockedNumbersResponse>
                 <result found="3" returned="2">
                   <recipients>
                     <recipient uid="1">+61400000001</recipient>
                     <recipient>+61400000002</recipient>
                   </recipients>
                 </result>
               </getBlockedNumbersResponse>"#
                .as_bytes(),
        )
        .unwrap();

        let result = decode_get_blocked_numbers_response(&response).unwrap();
        assert_eq!(result.found, 3);
        assert_eq!(result.returned, 2);
        assert_eq!(
            result.numbers,
            vec![
                BlockedNumber {
                    uid: Some("1".to_owned()),
                    number: DestinationNumber::new("+61400000001"),
                },
                BlockedNumber {
                    uid: None,
                    number: DestinationNumber::new("+61400000002"),
                },
            ]
        );
    }

    #[test]
    fn decode_blocked_numbers_defaults_to_empty() {
        let response = Element::parse(
            r#"<getBlockedNumbersResponse><result found="0" returned="0"/></getBlockedNumbersResponse>"#
                .as_bytes(),
        )
        .unwrap();
        assert!(decode_get_blocked_numbers_response(&response)
            .unwrap()
            .numbers
            .is_empty());
    }

    #[test]
    fn decode_block_and_unblock_counts() {
        let response = Element::parse(
            r#"<blockNumbersResponse><result blocked="2" failed="1">
                 <errors><error code="alreadyBlocked"/></errors>
               </result></blockNumbersResponse>"#
                .as_bytes(),
        )
        .unwrap();
        let result = decode_block_numbers_response(&response).unwrap();
        assert_eq!((result.blocked, result.failed), (2, 1));
        assert_eq!(result.errors[0].code.as_deref(), Some("alreadyBlocked"));

        let response = Element::parse(
            r#"<unblockNumbersResponse><result unblocked="1"/></unblockNumbersResponse>"#
                .as_bytes(),
        )
        .unwrap();
        let result = decode_unblock_numbers_response(&response).unwrap();
        assert_eq!((result.unblocked, result.failed), (1, 0));
        assert!(result.errors.is_empty());
    }
}
