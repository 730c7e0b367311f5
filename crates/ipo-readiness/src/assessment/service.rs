use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::delivery::{
    ConsultationRequest, ContactDetails, ContactError, DeliveryStatus, Notification,
    NotificationTemplate, Notifier, NotifyError, ReportRenderer,
};
use super::engine::AssessmentEngine;
use super::result::ResultRecord;
use super::scoring::ScoringError;
use crate::config::NotificationConfig;

/// Completed questionnaire plus the respondent's contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub answers: AnswerSet,
    pub contact: ContactDetails,
}

/// Result of a submission: the record always exists once scoring succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionOutcome {
    pub result: ResultRecord,
    pub delivery: DeliveryStatus,
}

/// Service composing the engine with the report renderer and notifier.
pub struct AssessmentService<R, N> {
    engine: Arc<AssessmentEngine>,
    renderer: Arc<R>,
    notifier: Arc<N>,
    settings: NotificationConfig,
}

impl<R, N> AssessmentService<R, N>
where
    R: ReportRenderer + 'static,
    N: Notifier + 'static,
{
    pub fn new(renderer: Arc<R>, notifier: Arc<N>, settings: NotificationConfig) -> Self {
        Self::with_engine(
            Arc::new(AssessmentEngine::standard()),
            renderer,
            notifier,
            settings,
        )
    }

    pub fn with_engine(
        engine: Arc<AssessmentEngine>,
        renderer: Arc<R>,
        notifier: Arc<N>,
        settings: NotificationConfig,
    ) -> Self {
        Self {
            engine,
            renderer,
            notifier,
            settings,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.engine.catalog()
    }

    /// Headless scoring with no rendering or delivery.
    pub fn score(&self, answers: &AnswerSet) -> Result<ResultRecord, ScoringError> {
        self.engine.score(answers)
    }

    /// Validate contact details, score, then render and deliver the report once.
    ///
    /// Rendering and delivery failures are reported on the outcome rather than returned as
    /// errors so the computed record is never lost.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let AssessmentSubmission { answers, contact } = submission;
        let contact = contact.validate()?;
        let result = self.engine.score(&answers)?;

        info!(
            company = %contact.company,
            tier = ?result.tier(),
            percentage = result.total_percentage(),
            "assessment submitted"
        );

        let delivery = self.deliver(&result, &contact);
        Ok(SubmissionOutcome { result, delivery })
    }

    fn deliver(&self, result: &ResultRecord, contact: &ContactDetails) -> DeliveryStatus {
        let report = match self.renderer.render(result, contact) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "assessment report could not be rendered");
                return DeliveryStatus::render_failed(err.to_string());
            }
        };

        let notification = Notification {
            template: NotificationTemplate::AssessmentReport,
            sender: self.settings.sender.clone(),
            recipient: contact.email.clone(),
            bcc: self.settings.bcc.clone(),
            subject: "Your IPO readiness assessment".to_string(),
            body: format!(
                "Your IPO readiness report is attached.\n\nContact details:\n{}",
                contact.summary()
            ),
            attachment: Some(report),
        };

        match self.notifier.dispatch(notification) {
            Ok(()) => DeliveryStatus::delivered(),
            Err(err) => {
                warn!(error = %err, recipient = %contact.email, "assessment report not delivered");
                DeliveryStatus::dispatch_failed(err.to_string())
            }
        }
    }

    /// Forward a consultation request to the advisory inbox.
    pub fn request_consultation(
        &self,
        request: ConsultationRequest,
    ) -> Result<(), ConsultationError> {
        let contact = request.validate()?;

        let notification = Notification {
            template: NotificationTemplate::ConsultationRequest,
            sender: self.settings.sender.clone(),
            recipient: self.settings.consultation_inbox.clone(),
            bcc: None,
            subject: "IPO consultation request".to_string(),
            body: format!("Consultation request:\n\n{}", contact.summary()),
            attachment: None,
        };

        self.notifier.dispatch(notification).map_err(|err| {
            warn!(error = %err, "consultation request not delivered");
            ConsultationError::Delivery(err)
        })?;

        info!(company = %contact.company, "consultation requested");
        Ok(())
    }
}

/// Error raised when a submission cannot be scored.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error("consultation request could not be sent: {0}")]
    Delivery(NotifyError),
}
