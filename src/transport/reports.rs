use xmltree::Element;

use super::TransportError;
use super::xml::{
    attribute, child_text, collection, count, push_child, required_attribute, required_child,
    text_element, with_attribute,
};
use crate::domain::{
    CheckReports, ConfirmReports, DeliveryReport, DestinationNumber, MessageId, ReceiptId,
    ReportsResult,
};

pub fn encode_check_reports_body(request: &CheckReports) -> Element {
    let mut body = Element::new("requestBody");
    if let Some(maximum) = request.maximum {
        push_child(&mut body, text_element("maximumReports", maximum.to_string()));
    }
    body
}

/// `<requestBody><reports><report receiptId=".."/>...</reports></requestBody>`
pub fn encode_confirm_reports_body(request: &ConfirmReports) -> Element {
    let mut reports = Element::new("reports");
    for receipt_id in request.receipt_ids() {
        push_child(
            &mut reports,
            with_attribute(Element::new("report"), ReceiptId::ATTRIBUTE, receipt_id.as_str()),
        );
    }

    let mut body = Element::new("requestBody");
    push_child(&mut body, reports);
    body
}

pub fn decode_check_reports_response(response: &Element) -> Result<ReportsResult, TransportError> {
    let result = required_child(response, "result")?;
    let reports = collection(result, "reports", "report")
        .map(|report| -> Result<DeliveryReport, TransportError> {
            Ok(DeliveryReport {
                uid: attribute(report, MessageId::UID_ATTRIBUTE).map(MessageId::new),
                receipt_id: ReceiptId::new(required_attribute(report, ReceiptId::ATTRIBUTE)?),
                status: attribute(report, "status"),
                recipient: child_text(report, "recipient").map(DestinationNumber::new),
                timestamp: child_text(report, "timestamp"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReportsResult {
        returned: count(result, "returned")?,
        remaining: count(result, "remaining")?,
        reports,
    })
}

pub fn decode_confirm_reports_response(response: &Element) -> Result<u32, TransportError> {
    count(required_child(response, "result")?, "confirmed")
}
