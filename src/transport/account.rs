use xmltree::Element;

use super::TransportError;
use super::xml::{attribute, optional_number, required_child};
use crate::domain::{AccountDetails, AccountInfo};

/// `<accountDetails type="daily" creditLimit="500" creditRemaining="497"/>`
pub(super) fn decode_account_details(details: &Element) -> Result<AccountDetails, TransportError> {
    Ok(AccountDetails {
        account_type: attribute(details, "type"),
        credit_limit: optional_number(details, "creditLimit")?,
        credit_remaining: optional_number(details, "creditRemaining")?,
    })
}

pub fn decode_check_user_response(response: &Element) -> Result<AccountInfo, TransportError> {
    let result = required_child(response, "result")?;
    Ok(AccountInfo {
        account: result
            .get_child("accountDetails")
            .map(decode_account_details)
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_account_details_from_result() {
        let response = Element::parse(
            r#"<checkUserResponse><result>
                 <accountDetails type="monthly" creditLimit="1000" creditRemaining="12"/>
               </result></checkUserResponse>"#
                .as_bytes(),
        )
        .unwrap();

        let info = decode_check_user_response(&response).unwrap();
        assert_eq!(
            info.account,
            Some(AccountDetails {
                account_type: Some("monthly".to_owned()),
                credit_limit: Some(1000),
                credit_remaining: Some(12),
            })
        );
    }

    #[test]
    fn decode_without_account_details() {
        let response =
            Element::parse("<checkUserResponse><result/></checkUserResponse>".as_bytes()).unwrap();
        assert_eq!(decode_check_user_response(&response).unwrap().account, None);
    }

    #[test]
    fn decode_rejects_non_numeric_credit() {
        let response = Element::parse(
            r#"<checkUserResponse><result>
                 <accountDetails creditLimit="lots"/>
               </result></checkUserResponse>"#
                .as_bytes(),
        )
        .unwrap();
        assert!(matches!(
            decode_check_user_response(&response),
            Err(TransportError::InvalidNumber { .. })
        ));
    }
}
