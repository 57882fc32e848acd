//! Small helpers over `xmltree` shared by the per-operation codecs.

use xmltree::{Element, XMLNode};

use super::TransportError;
use crate::domain::{DestinationNumber, RecipientError};

pub fn text_element(name: &str, text: impl Into<String>) -> Element {
    let mut element = Element::new(name);
    element.children.push(XMLNode::Text(text.into()));
    element
}

pub fn push_child(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}

pub fn with_attribute(mut element: Element, name: &str, value: impl Into<String>) -> Element {
    element.attributes.insert(name.to_owned(), value.into());
    element
}

/// Child elements named `name`, in document order.
pub fn children<'a>(parent: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    parent.children.iter().filter_map(move |node| match node {
        XMLNode::Element(element) if element.name == name => Some(element),
        _ => None,
    })
}

/// Items of an optional `<collection><item/>...</collection>` wrapper.
///
/// A missing wrapper yields no items rather than an error.
pub fn collection<'a>(
    parent: &'a Element,
    collection: &'a str,
    item: &'a str,
) -> impl Iterator<Item = &'a Element> {
    parent
        .get_child(collection)
        .into_iter()
        .flat_map(move |wrapper| children(wrapper, item))
}

pub fn required_child<'a>(
    parent: &'a Element,
    name: &'static str,
) -> Result<&'a Element, TransportError> {
    parent
        .get_child(name)
        .ok_or(TransportError::MissingElement { name })
}

/// Text content as sent, `None` when the element has no text.
pub fn text(element: &Element) -> Option<String> {
    element.get_text().map(|text| text.into_owned())
}

pub fn child_text(parent: &Element, name: &str) -> Option<String> {
    parent.get_child(name).and_then(text)
}

pub fn attribute(element: &Element, name: &str) -> Option<String> {
    element.attributes.get(name).cloned()
}

pub fn required_attribute(
    element: &Element,
    name: &'static str,
) -> Result<String, TransportError> {
    attribute(element, name).ok_or_else(|| TransportError::MissingAttribute {
        element: element.name.clone(),
        attribute: name,
    })
}

pub fn optional_number<T: std::str::FromStr>(
    element: &Element,
    name: &'static str,
) -> Result<Option<T>, TransportError> {
    element
        .attributes
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| TransportError::InvalidNumber {
                    element: element.name.clone(),
                    attribute: name,
                    value: value.to_owned(),
                })
        })
        .transpose()
}

/// Counter attribute; the gateway omits zero counters.
pub fn count(element: &Element, name: &'static str) -> Result<u32, TransportError> {
    Ok(optional_number(element, name)?.unwrap_or(0))
}

/// `<errors><error code=".." sequenceNumber=".."><recipients>..</recipients></error></errors>`
pub fn recipient_errors(result: &Element) -> Vec<RecipientError> {
    collection(result, "errors", "error")
        .map(|error| RecipientError {
            code: attribute(error, "code"),
            sequence_number: attribute(error, "sequenceNumber"),
            recipients: collection(error, "recipients", "recipient")
                .filter_map(text)
                .map(DestinationNumber::new)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn collection_is_empty_when_wrapper_is_missing() {
        let result = parse(r#"<result returned="0"/>"#);
        assert_eq!(collection(&result, "replies", "reply").count(), 0);
    }

    #[test]
    fn collection_skips_foreign_children() {
        let result = parse("<result><replies><reply/><other/><reply/></replies></result>");
        assert_eq!(collection(&result, "replies", "reply").count(), 2);
    }

    #[test]
    fn count_defaults_to_zero_and_rejects_garbage() {
        let result = parse(r#"<result sent="3" failed="x"/>"#);
        assert_eq!(count(&result, "sent").unwrap(), 3);
        assert_eq!(count(&result, "scheduled").unwrap(), 0);
        assert!(matches!(
            count(&result, "failed"),
            Err(TransportError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn text_and_attributes_are_kept_as_sent() {
        let element = parse(r#"<a uid=" 42 "><b>  x  </b><c/></a>"#);
        assert_eq!(child_text(&element, "b").as_deref(), Some("  x  "));
        assert_eq!(child_text(&element, "c"), None);
        assert_eq!(child_text(&element, "d"), None);
        assert_eq!(attribute(&element, "uid").as_deref(), Some(" 42 "));
    }

    #[test]
    fn counters_tolerate_surrounding_whitespace() {
        let result = parse(r#"<result sent=" 3 " failed=""/>"#);
        assert_eq!(count(&result, "sent").unwrap(), 3);
        assert_eq!(count(&result, "failed").unwrap(), 0);
    }

    #[test]
    fn recipient_errors_are_collected() {
        let result = parse(
            r#"<result><errors>
                 <error code="invalidRecipient" sequenceNumber="7">
                   <recipients><recipient>123</recipient></recipients>
                 </error>
               </errors></result>"#,
        );
        let errors = recipient_errors(&result);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code.as_deref(), Some("invalidRecipient"));
        assert_eq!(errors[0].sequence_number.as_deref(), Some("7"));
        assert_eq!(errors[0].recipients, vec![DestinationNumber::new("123")]);
    }
}
