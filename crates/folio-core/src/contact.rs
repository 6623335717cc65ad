//! Contact form submission.
//!
//! ```text
//! Idle ─► Validating ─┬─ consent missing ──────────► ConsentRequired
//!                     └─► Sending ─┬─ 2xx ─────────► Sent (form reset)
//!                                  ├─ non-2xx ─────► Rejected(message)
//!                                  └─ no response ─► NetworkError
//! ```
//!
//! The controller keeps no state between calls. Two overlapping submissions
//! each report their own outcome, so the last response to arrive wins the
//! status line.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;

use crate::error::FolioResult;

pub const CONSENT_REQUIRED: &str = "Please agree to be contacted back.";
pub const SENDING: &str = "Sending…";
pub const SENT: &str = "✅ Thanks! Your message has been sent.";
pub const GENERIC_FAILURE: &str = "❌ Something went wrong. Please try again.";
pub const NETWORK_ERROR: &str = "❌ Network error. Check your connection and try again.";

/// Target of diagnostic events; captured by `logging::DiagnosticLayer`.
pub const DIAGNOSTICS_TARGET: &str = "folio::diagnostics";

/// Name of the consent checkbox as submitted with the form.
pub const CONSENT_FIELD: &str = "consent";

/// Default request timeout for [`HttpTransport`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP method configured on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMethod {
    #[default]
    Post,
    Get,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Post => "POST",
            FormMethod::Get => "GET",
        }
    }
}

impl std::str::FromStr for FormMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "post" => Ok(FormMethod::Post),
            "get" => Ok(FormMethod::Get),
            other => Err(format!("unsupported form method: {}", other)),
        }
    }
}

/// Value of a single form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File {
        file_name: String,
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::File { .. } => None,
        }
    }
}

/// A named form control with the value it resets to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
    default: FieldValue,
}

impl FormField {
    /// Text control with an empty default.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::empty(),
            default: FieldValue::empty(),
        }
    }

    /// Text control that resets to `default`.
    pub fn text_with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        let default = FieldValue::Text(default.into());
        Self {
            name: name.into(),
            value: default.clone(),
            default,
        }
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    pub fn is_default(&self) -> bool {
        self.value == self.default
    }
}

/// The contact form: action, method, controls and the consent flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    action: String,
    method: FormMethod,
    fields: Vec<FormField>,
    consent: bool,
}

impl ContactForm {
    pub fn new(action: impl Into<String>, method: FormMethod) -> Self {
        Self {
            action: action.into(),
            method,
            fields: Vec::new(),
            consent: false,
        }
    }

    /// The page's form: name, email and message, all empty.
    pub fn standard(action: impl Into<String>, method: FormMethod) -> Self {
        Self::new(action, method)
            .with_field(FormField::text("name"))
            .with_field(FormField::text("email"))
            .with_field(FormField::text("message"))
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn method(&self) -> FormMethod {
        self.method
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Current text of a control, empty for unknown or file controls.
    pub fn text(&self, name: &str) -> &str {
        self.field(name)
            .and_then(|f| f.value.as_text())
            .unwrap_or_default()
    }

    /// Set a control's value. Returns `false` for an unknown name.
    pub fn set(&mut self, name: &str, value: FieldValue) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.set(name, FieldValue::Text(value.into()))
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    /// Return every control, consent included, to its default.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.consent = false;
    }

    pub fn is_pristine(&self) -> bool {
        !self.consent && self.fields.iter().all(FormField::is_default)
    }

    /// Snapshot of what would be submitted right now.
    pub fn to_request(&self) -> ContactRequest {
        let mut fields: Vec<(String, FieldValue)> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        if self.consent {
            fields.push((CONSENT_FIELD.to_string(), FieldValue::Text("on".to_string())));
        }
        ContactRequest {
            action: self.action.clone(),
            method: self.method,
            fields,
        }
    }
}

/// One outbound submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub action: String,
    pub method: FormMethod,
    pub fields: Vec<(String, FieldValue)>,
}

/// A response that made it back, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Sends a submission somewhere and reports what came back.
pub trait ContactTransport {
    fn send(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// reqwest-backed transport.
///
/// POST sends a multipart body (text and file parts); GET sends the text
/// fields as a query string. Both ask for a JSON response.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> FolioResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn multipart(fields: &[(String, FieldValue)]) -> Result<reqwest::multipart::Form, TransportError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = match value {
                FieldValue::Text(text) => form.text(name.clone(), text.clone()),
                FieldValue::File {
                    file_name,
                    mime,
                    bytes,
                } => {
                    let mut part =
                        reqwest::multipart::Part::bytes(bytes.clone()).file_name(file_name.clone());
                    if let Some(mime) = mime {
                        part = part.mime_str(mime)?;
                    }
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, request: &ContactRequest) -> Result<TransportResponse, TransportError> {
        let builder = match request.method {
            FormMethod::Post => self
                .client
                .post(&request.action)
                .multipart(Self::multipart(&request.fields)?),
            FormMethod::Get => {
                let query: Vec<(&str, &str)> = request
                    .fields
                    .iter()
                    .filter_map(|(name, value)| value.as_text().map(|text| (name.as_str(), text)))
                    .collect();
                self.client.get(&request.action).query(&query)
            }
        };

        let response = builder.header(ACCEPT, "application/json").send().await?;
        let status = response.status().as_u16();
        // An unreadable body is treated like an absent one.
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}

/// Where a submission ended up (or currently is).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactState {
    #[default]
    Idle,
    Validating,
    ConsentRequired,
    Sending,
    Sent,
    Rejected(String),
    NetworkError,
}

impl ContactState {
    /// Text for the status line under the form.
    pub fn status_text(&self) -> &str {
        match self {
            ContactState::Idle | ContactState::Validating => "",
            ContactState::ConsentRequired => CONSENT_REQUIRED,
            ContactState::Sending => SENDING,
            ContactState::Sent => SENT,
            ContactState::Rejected(message) => message,
            ContactState::NetworkError => NETWORK_ERROR,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ContactState::ConsentRequired
                | ContactState::Sent
                | ContactState::Rejected(_)
                | ContactState::NetworkError
        )
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    message: Option<String>,
}

/// Status text for a non-success response.
///
/// Joins `errors[].message` with ", "; anything else falls back to the
/// generic failure text.
pub fn rejection_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return GENERIC_FAILURE.to_string();
    };
    let joined = parsed
        .errors
        .into_iter()
        .filter_map(|e| e.message)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        joined
    }
}

/// State a submission settles in without reaching the network, if any.
/// Missing consent is reported before an unavailable transport.
pub fn local_outcome(form: &ContactForm, transport_ready: bool) -> Option<ContactState> {
    if !form.consent() {
        Some(ContactState::ConsentRequired)
    } else if !transport_ready {
        Some(ContactState::NetworkError)
    } else {
        None
    }
}

/// Drives one form submission through validation and sending.
#[derive(Debug, Clone)]
pub struct ContactController<T> {
    transport: T,
}

impl<T: ContactTransport> ContactController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit `form`, reporting every state change to `on_state`.
    ///
    /// Returns the terminal state. The form is reset only on success.
    pub async fn submit<F>(&self, form: &mut ContactForm, mut on_state: F) -> ContactState
    where
        F: FnMut(&ContactState),
    {
        on_state(&ContactState::Validating);
        if let Some(state) = local_outcome(form, true) {
            on_state(&state);
            return state;
        }

        let request = form.to_request();
        on_state(&ContactState::Sending);
        tracing::info!(action = %request.action, method = request.method.as_str(), "sending contact form");

        let state = match self.transport.send(&request).await {
            Ok(response) if response.is_success() => {
                form.reset();
                tracing::info!(status = response.status, "contact form sent");
                ContactState::Sent
            }
            Ok(response) => {
                tracing::warn!(status = response.status, "contact form rejected");
                ContactState::Rejected(rejection_message(&response.body))
            }
            Err(err) => {
                tracing::error!(
                    target: DIAGNOSTICS_TARGET,
                    error = %err,
                    action = %request.action,
                    "contact submission failed"
                );
                ContactState::NetworkError
            }
        };

        on_state(&state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_joins_errors() {
        let body = r#"{"errors":[{"message":"Email invalid"},{"message":"Message required"}]}"#;
        assert_eq!(rejection_message(body), "Email invalid, Message required");
    }

    #[test]
    fn test_rejection_message_fallbacks() {
        assert_eq!(rejection_message(""), GENERIC_FAILURE);
        assert_eq!(rejection_message("<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(rejection_message("{}"), GENERIC_FAILURE);
        assert_eq!(rejection_message(r#"{"errors":[]}"#), GENERIC_FAILURE);
        assert_eq!(rejection_message(r#"{"errors":[{"code":"x"}]}"#), GENERIC_FAILURE);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(ContactState::Idle.status_text(), "");
        assert_eq!(ContactState::ConsentRequired.status_text(), CONSENT_REQUIRED);
        assert_eq!(ContactState::Sending.status_text(), SENDING);
        assert_eq!(ContactState::Rejected("Nope".into()).status_text(), "Nope");
        assert!(ContactState::NetworkError.is_terminal());
        assert!(!ContactState::Sending.is_terminal());
    }

    #[test]
    fn test_local_outcome_reports_consent_before_transport() {
        let mut form = ContactForm::standard("http://localhost/contact", FormMethod::Post);
        form.set_text("name", "Ada");

        assert_eq!(local_outcome(&form, false), Some(ContactState::ConsentRequired));
        assert_eq!(local_outcome(&form, true), Some(ContactState::ConsentRequired));

        form.set_consent(true);
        assert_eq!(local_outcome(&form, false), Some(ContactState::NetworkError));
        assert_eq!(local_outcome(&form, true), None);
    }

    #[test]
    fn test_form_method_parse() {
        assert_eq!("POST".parse::<FormMethod>(), Ok(FormMethod::Post));
        assert_eq!("get".parse::<FormMethod>(), Ok(FormMethod::Get));
        assert!("put".parse::<FormMethod>().is_err());
    }

    #[test]
    fn test_form_reset_restores_defaults() {
        let mut form = ContactForm::standard("https://example.com/f", FormMethod::Post)
            .with_field(FormField::text_with_default("subject", "Hello"));
        form.set_text("name", "Ada");
        form.set_text("subject", "Job offer");
        form.set_consent(true);
        assert!(!form.is_pristine());

        form.reset();
        assert!(form.is_pristine());
        assert_eq!(form.text("name"), "");
        assert_eq!(form.text("subject"), "Hello");
        assert!(!form.consent());
    }

    #[test]
    fn test_set_unknown_field() {
        let mut form = ContactForm::standard("https://example.com/f", FormMethod::Post);
        assert!(!form.set_text("phone", "123"));
        assert!(form.set_text("email", "a@b.c"));
        assert_eq!(form.text("email"), "a@b.c");
    }

    #[test]
    fn test_request_includes_consent_only_when_checked() {
        let mut form = ContactForm::standard("https://example.com/f", FormMethod::Post);
        let names: Vec<String> = form.to_request().fields.into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "email", "message"]);

        form.set_consent(true);
        let request = form.to_request();
        assert_eq!(
            request.fields.last(),
            Some(&(CONSENT_FIELD.to_string(), FieldValue::Text("on".to_string())))
        );
    }
}
