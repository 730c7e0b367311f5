use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::result::ResultRecord;

/// Respondent contact fields collected with the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub company: String,
    pub position: String,
    pub phone: String,
    pub email: String,
}

impl ContactDetails {
    /// Trims every field and checks that all are present and the email is well formed.
    pub fn validate(self) -> Result<Self, ContactError> {
        let contact = Self {
            name: self.name.trim().to_string(),
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        };

        let fields = [
            ("name", &contact.name),
            ("company", &contact.company),
            ("position", &contact.position),
            ("phone", &contact.phone),
            ("email", &contact.email),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(ContactError::MissingField(*field));
        }

        if !is_valid_email(&contact.email) {
            return Err(ContactError::InvalidEmail(contact.email));
        }

        Ok(contact)
    }

    pub fn summary(&self) -> String {
        format!(
            "Name: {}\nCompany: {}\nPosition: {}\nPhone: {}\nEmail: {}",
            self.name, self.company, self.position, self.phone, self.email
        )
    }
}

/// Request for a follow-up consultation. Consent must be given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub contact: ContactDetails,
    #[serde(default)]
    pub consent: bool,
}

impl ConsultationRequest {
    pub fn validate(self) -> Result<ContactDetails, ContactError> {
        let contact = self.contact.validate()?;
        if !self.consent {
            return Err(ContactError::ConsentRequired);
        }
        Ok(contact)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("contact field `{0}` is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("consultation requests require explicit consent")]
    ConsentRequired,
}

/// Structural address check: one `@`, a non-empty local part, and a dotted domain.
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Document produced from a result record by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub generated_at: DateTime<Utc>,
}

/// Turns a result record into a deliverable document.
pub trait ReportRenderer: Send + Sync {
    fn render(
        &self,
        record: &ResultRecord,
        contact: &ContactDetails,
    ) -> Result<RenderedReport, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("report rendering failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTemplate {
    AssessmentReport,
    ConsultationRequest,
}

/// Outbound message handed to a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub template: NotificationTemplate,
    pub sender: String,
    pub recipient: String,
    pub bcc: Option<String>,
    pub subject: String,
    pub body: String,
    pub attachment: Option<RenderedReport>,
}

/// Outbound messaging hook (mail relay, chat webhook, test double).
pub trait Notifier: Send + Sync {
    fn dispatch(&self, notification: Notification) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Independent status of the render and delivery steps for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryStatus {
    pub report_rendered: bool,
    pub report_delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryStatus {
    pub fn delivered() -> Self {
        Self {
            report_rendered: true,
            report_delivered: true,
            error: None,
        }
    }

    pub fn render_failed(error: impl Into<String>) -> Self {
        Self {
            report_rendered: false,
            report_delivered: false,
            error: Some(error.into()),
        }
    }

    pub fn dispatch_failed(error: impl Into<String>) -> Self {
        Self {
            report_rendered: true,
            report_delivered: false,
            error: Some(error.into()),
        }
    }
}
