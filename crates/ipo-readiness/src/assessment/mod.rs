//! IPO readiness questionnaire: scoring, readiness classification, and recommendation
//! selection, plus the collaborator seams used to render and deliver results.
//!
//! The engine is pure. [`AssessmentEngine::score`] turns a complete [`AnswerSet`] into an
//! immutable [`ResultRecord`]; rendering and delivery happen afterwards in
//! [`AssessmentService`] and never feed back into scoring.

pub mod answers;
pub mod catalog;
pub mod delivery;
pub mod domain;
mod engine;
pub mod readiness;
pub mod recommendations;
pub mod report;
mod result;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{CatalogSection, CatalogView, QuestionCatalog};
pub use delivery::{
    is_valid_email, ConsultationRequest, ContactDetails, ContactError, DeliveryStatus,
    Notification, NotificationTemplate, Notifier, NotifyError, RenderError, RenderedReport,
    ReportRenderer,
};
pub use domain::{AnswerOption, Category, CategoryDefinition, Question, QuestionId};
pub use engine::AssessmentEngine;
pub use readiness::{ReadinessAssessment, ReadinessTier};
pub use recommendations::{
    select_recommendations, RecommendationBundle, RecommendationSource, RecommendationStore,
    SelectedRecommendation, StaticRecommendationStore, FOCUS_THRESHOLD, MAX_FOCUS_AREAS,
};
pub use report::{PlainTextReportRenderer, TextReport};
pub use result::ResultRecord;
pub use router::assessment_router;
pub use scoring::{CategoryResult, ScoreSheet, ScoringConfig, ScoringEngine, ScoringError};
pub use service::{
    AssessmentService, AssessmentSubmission, ConsultationError, SubmissionError,
    SubmissionOutcome,
};
