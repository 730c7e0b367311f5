use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    AnswerSet, AssessmentEngine, AssessmentService, AssessmentSubmission, Category,
    ContactDetails, Notification, Notifier, NotifyError, QuestionCatalog, RenderError,
    RenderedReport, ReportRenderer, ResultRecord, ScoringConfig, ScoringEngine,
    StaticRecommendationStore, PlainTextReportRenderer,
};
use crate::config::NotificationConfig;

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::standard()
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard()
}

/// Engine that accepts any point value, used for the all-zero reference case.
pub(super) fn lenient_engine() -> AssessmentEngine {
    AssessmentEngine::new(
        ScoringEngine::new(
            QuestionCatalog::standard(),
            ScoringConfig {
                strict_option_values: false,
            },
        ),
        StaticRecommendationStore,
    )
}

pub(super) fn max_answers() -> AnswerSet {
    catalog()
        .questions()
        .iter()
        .map(|question| (question.id, question.max_value()))
        .collect()
}

pub(super) fn lowest_answers() -> AnswerSet {
    catalog()
        .questions()
        .iter()
        .map(|question| {
            let lowest = question
                .options
                .iter()
                .map(|option| option.value)
                .min()
                .unwrap_or(0);
            (question.id, lowest)
        })
        .collect()
}

pub(super) fn zero_answers() -> AnswerSet {
    AnswerSet::from_values(std::iter::repeat(0).take(25))
}

/// Every question at its maximum except the members of `category`, which take `value`.
pub(super) fn answers_with_category(category: Category, value: u32) -> AnswerSet {
    let catalog = catalog();
    catalog
        .questions()
        .iter()
        .map(|question| {
            if question.category == category {
                (question.id, value)
            } else {
                (question.id, question.max_value())
            }
        })
        .collect()
}

pub(super) fn contact() -> ContactDetails {
    ContactDetails {
        name: "Irina Volkova".to_string(),
        company: "Northwind Logistics".to_string(),
        position: "CFO".to_string(),
        phone: "+7 495 000 00 00".to_string(),
        email: "irina.volkova@northwind.example".to_string(),
    }
}

pub(super) fn submission(answers: AnswerSet) -> AssessmentSubmission {
    AssessmentSubmission {
        answers,
        contact: contact(),
    }
}

pub(super) fn notification_config() -> NotificationConfig {
    NotificationConfig {
        sender: "no-reply@advisory.example".to_string(),
        bcc: Some("partners@advisory.example".to_string()),
        consultation_inbox: "desk@advisory.example".to_string(),
    }
}

pub(super) fn build_service() -> (
    AssessmentService<PlainTextReportRenderer, MemoryNotifier>,
    Arc<MemoryNotifier>,
) {
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentService::new(
        Arc::new(PlainTextReportRenderer),
        notifier.clone(),
        notification_config(),
    );
    (service, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub(super) fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn dispatch(&self, notification: Notification) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl Notifier for OfflineNotifier {
    fn dispatch(&self, _notification: Notification) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct BrokenRenderer;

impl ReportRenderer for BrokenRenderer {
    fn render(
        &self,
        _record: &ResultRecord,
        _contact: &ContactDetails,
    ) -> Result<RenderedReport, RenderError> {
        Err(RenderError::Failed("font cache unavailable".to_string()))
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
