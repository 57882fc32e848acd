//! SOAP 1.1 envelope: wrapping request bodies and unwrapping responses or faults.

use xmltree::{Element, Namespace, XMLNode};

use super::xml::{child_text, push_child, text_element};
use super::{NAMESPACE, Operation};

pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const SOAP_ENV_PREFIX: &str = "soap";
const MASK: &str = "********";

/// Fault returned by the gateway in place of a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    pub code: String,
    pub message: String,
    pub detail: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("invalid XML: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("failed to write XML: {0}")]
    Write(#[from] xmltree::Error),

    #[error("response is not a SOAP envelope (root <{found}>)")]
    NotAnEnvelope { found: String },

    #[error("SOAP envelope has no body")]
    MissingBody,

    #[error("expected <{expected}>, found <{found}>")]
    UnexpectedResponse { expected: String, found: String },

    #[error("SOAP fault {}: {}", .0.code, .0.message)]
    Fault(SoapFault),
}

/// Operation element carrying the credentials and the operation-specific body.
///
/// ```xml
/// <sendMessages xmlns="http://xml.m4u.com.au/2009">
///   <authentication><userId>..</userId><password>..</password></authentication>
///   <requestBody>..</requestBody>
/// </sendMessages>
/// ```
pub fn encode_request(
    operation: Operation,
    username: &str,
    password: &str,
    request_body: Element,
) -> Element {
    let mut namespaces = Namespace::empty();
    namespaces.put("", NAMESPACE);

    let mut request = Element::new(operation.name());
    request.namespace = Some(NAMESPACE.to_owned());
    request.namespaces = Some(namespaces);

    let mut authentication = Element::new("authentication");
    push_child(&mut authentication, text_element("userId", username));
    push_child(&mut authentication, text_element("password", password));

    push_child(&mut request, authentication);
    push_child(&mut request, request_body);
    request
}

/// Serialize `request` inside `<soap:Envelope><soap:Body>`.
pub fn encode_envelope(request: Element) -> Result<String, EnvelopeError> {
    let mut namespaces = Namespace::empty();
    namespaces.put(SOAP_ENV_PREFIX, SOAP_ENV_NAMESPACE);

    let mut body = soap_element("Body");
    push_child(&mut body, request);

    let mut envelope = soap_element("Envelope");
    envelope.namespaces = Some(namespaces);
    push_child(&mut envelope, body);

    let mut out = Vec::new();
    envelope.write(&mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn soap_element(name: &str) -> Element {
    let mut element = Element::new(name);
    element.prefix = Some(SOAP_ENV_PREFIX.to_owned());
    element.namespace = Some(SOAP_ENV_NAMESPACE.to_owned());
    element
}

/// Parse a response envelope and return the `<operationResponse>` element.
///
/// A `<Fault>` body is returned as [`EnvelopeError::Fault`] whatever the HTTP
/// status was.
pub fn unwrap_response(operation: Operation, xml: &str) -> Result<Element, EnvelopeError> {
    let envelope = Element::parse(xml.as_bytes())?;
    if envelope.name != "Envelope" {
        return Err(EnvelopeError::NotAnEnvelope {
            found: envelope.name,
        });
    }

    let body = envelope
        .children
        .into_iter()
        .find_map(|node| match node {
            XMLNode::Element(element) if element.name == "Body" => Some(element),
            _ => None,
        })
        .ok_or(EnvelopeError::MissingBody)?;

    let content = body
        .children
        .into_iter()
        .find_map(|node| match node {
            XMLNode::Element(element) => Some(element),
            _ => None,
        })
        .ok_or(EnvelopeError::MissingBody)?;

    if content.name == "Fault" {
        return Err(EnvelopeError::Fault(decode_fault(&content)));
    }

    let expected = operation.response_name();
    if content.name != expected {
        return Err(EnvelopeError::UnexpectedResponse {
            expected,
            found: content.name,
        });
    }

    Ok(content)
}

fn decode_fault(fault: &Element) -> SoapFault {
    SoapFault {
        code: child_text(fault, "faultcode").unwrap_or_default(),
        message: child_text(fault, "faultstring").unwrap_or_default(),
        detail: child_text(fault, "detail"),
    }
}

/// Copy of a serialized envelope with every `<password>` value replaced, for logging.
pub fn mask_password(xml: &str) -> String {
    let Ok(mut envelope) = Element::parse(xml.as_bytes()) else {
        return xml.to_owned();
    };
    mask_element(&mut envelope);

    let mut out = Vec::new();
    match envelope.write(&mut out) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => String::new(),
    }
}

fn mask_element(element: &mut Element) {
    if element.name == "password" {
        element.children = vec![XMLNode::Text(MASK.to_owned())];
        return;
    }
    for node in &mut element.children {
        if let XMLNode::Element(child) = node {
            mask_element(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> Element {
        let mut body = Element::new("requestBody");
        push_child(&mut body, text_element("maximumReplies", "5"));
        encode_request(Operation::CheckReplies, "user", "secret", body)
    }

    #[test]
    fn envelope_wraps_operation_with_credentials() {
        let xml = encode_envelope(sample_request()).unwrap();
        assert!(xml.contains(SOAP_ENV_NAMESPACE));
        assert!(xml.contains(NAMESPACE));

        let envelope = Element::parse(xml.as_bytes()).unwrap();
        assert_eq!(envelope.name, "Envelope");
        assert_eq!(envelope.namespace.as_deref(), Some(SOAP_ENV_NAMESPACE));

        let request = envelope
            .get_child("Body")
            .and_then(|body| body.get_child("checkReplies"))
            .unwrap();
        assert_eq!(request.namespace.as_deref(), Some(NAMESPACE));

        let auth = request.get_child("authentication").unwrap();
        assert_eq!(child_text(auth, "userId").as_deref(), Some("user"));
        assert_eq!(child_text(auth, "password").as_deref(), Some("secret"));

        let body = request.get_child("requestBody").unwrap();
        assert_eq!(child_text(body, "maximumReplies").as_deref(), Some("5"));
    }

    #[test]
    fn envelope_escapes_text() {
        let mut body = Element::new("requestBody");
        push_child(&mut body, text_element("content", "a < b & c"));
        let request = encode_request(Operation::SendMessages, "user", "p&ss", body);
        let xml = encode_envelope(request).unwrap();
        assert!(xml.contains("a &lt; b &amp; c"));

        let envelope = Element::parse(xml.as_bytes()).unwrap();
        let password = envelope
            .get_child("Body")
            .and_then(|b| b.get_child("sendMessages"))
            .and_then(|r| r.get_child("authentication"))
            .and_then(|a| child_text(a, "password"));
        assert_eq!(password.as_deref(), Some("p&ss"));
    }

    #[test]
    fn unwrap_response_returns_operation_element() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
          <SOAP-ENV:Body>
            <checkUserResponse xmlns="http://xml.m4u.com.au/2009">
              <result/>
            </checkUserResponse>
          </SOAP-ENV:Body>
        </SOAP-ENV:Envelope>"#;

        let response = unwrap_response(Operation::CheckUser, xml).unwrap();
        assert_eq!(response.name, "checkUserResponse");
        assert!(response.get_child("result").is_some());
    }

    #[test]
    fn unwrap_response_maps_fault() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
          <soap:Body>
            <soap:Fault>
              <faultcode>SOAP-ENV:Client</faultcode>
              <faultstring>Invalid authentication details</faultstring>
            </soap:Fault>
          </soap:Body>
        </soap:Envelope>"#;

        let err = unwrap_response(Operation::CheckUser, xml).unwrap_err();
        match err {
            EnvelopeError::Fault(fault) => {
                assert_eq!(fault.code, "SOAP-ENV:Client");
                assert_eq!(fault.message, "Invalid authentication details");
                assert_eq!(fault.detail, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unwrap_response_rejects_mismatched_operation() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
          <soap:Body><checkUserResponse/></soap:Body>
        </soap:Envelope>"#;

        let err = unwrap_response(Operation::CheckReplies, xml).unwrap_err();
        assert!(matches!(err, EnvelopeError::UnexpectedResponse { .. }));
    }

    #[test]
    fn unwrap_response_rejects_non_envelopes() {
        assert!(matches!(
            unwrap_response(Operation::CheckUser, "<html/>"),
            Err(EnvelopeError::NotAnEnvelope { .. })
        ));
        assert!(matches!(
            unwrap_response(Operation::CheckUser, "not xml"),
            Err(EnvelopeError::Xml(_))
        ));
        assert!(matches!(
            unwrap_response(
                Operation::CheckUser,
                r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"/>"#
            ),
            Err(EnvelopeError::MissingBody)
        ));
    }

    #[test]
    fn mask_password_hides_credentials_only() {
        let xml = encode_envelope(sample_request()).unwrap();
        let masked = mask_password(&xml);
        assert!(!masked.contains("secret"));
        assert!(masked.contains(MASK));
        assert!(masked.contains("user"));
    }
}
