//! Client for the third-party form backend.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use thiserror::Error;

use super::state::FieldValues;

/// Form-backend inbox for the site.
pub const ENDPOINT: &str = "https://formspree.io/f/mwpkqnaw";

/// JSON body posted to the endpoint. `name`, `email` and `message` are
/// always present; the optional keys are omitted entirely (never sent as an
/// empty string or null) when the visitor left them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
}

impl ContactPayload {
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
            company: non_empty(&values.company),
            interest: non_empty(&values.interest),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint returned status {0}")]
    Status(u16),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Send the payload. One attempt, no retry, no explicit timeout (the
/// platform default applies). Any 2xx status counts as accepted; the
/// response body is never inspected.
pub async fn send_contact(payload: &ContactPayload) -> Result<(), SubmitError> {
    let response = reqwest::Client::new()
        .post(ENDPOINT)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(SubmitError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> FieldValues {
        FieldValues {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            message: "Hello there, I am interested.".into(),
            ..FieldValues::default()
        }
    }

    #[test]
    fn minimal_payload_has_exactly_the_mandatory_keys() {
        let payload = ContactPayload::from_values(&values());
        let json = serde_json::to_value(&payload).expect("payload serializes");
        let object = json.as_object().expect("payload is an object");

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "message", "name"]);
    }

    #[test]
    fn company_is_present_iff_non_empty() {
        let mut filled = values();
        filled.company = "Acme".into();
        let json = serde_json::to_value(ContactPayload::from_values(&filled)).unwrap();
        assert_eq!(json["company"], "Acme");

        filled.company.clear();
        let json = serde_json::to_value(ContactPayload::from_values(&filled)).unwrap();
        assert!(json.get("company").is_none(), "empty company must be omitted, not null");
    }

    #[test]
    fn interest_is_carried_when_selected() {
        let mut filled = values();
        filled.interest = "formazione".into();
        let json = serde_json::to_value(ContactPayload::from_values(&filled)).unwrap();
        assert_eq!(json["interest"], "formazione");
    }

    #[test]
    fn phone_never_reaches_the_payload() {
        let mut filled = values();
        filled.phone = "0212345678".into();
        let json = serde_json::to_value(ContactPayload::from_values(&filled)).unwrap();
        assert!(json.get("phone").is_none());
    }
}
