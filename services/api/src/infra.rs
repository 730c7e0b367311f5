use ipo_readiness::assessment::{AnswerSet, Notification, Notifier, NotifyError};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Notifier that keeps every message in memory and logs it instead of sending mail.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotifier {
    outbox: Arc<Mutex<Vec<Notification>>>,
}

impl Notifier for InMemoryNotifier {
    fn dispatch(&self, notification: Notification) -> Result<(), NotifyError> {
        info!(
            template = ?notification.template,
            recipient = %notification.recipient,
            bcc = ?notification.bcc,
            subject = %notification.subject,
            attachment = notification
                .attachment
                .as_ref()
                .map(|report| report.file_name.as_str()),
            "notification queued"
        );

        let mut guard = self.outbox.lock().expect("outbox mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryNotifier {
    pub(crate) fn sent(&self) -> Vec<Notification> {
        self.outbox.lock().expect("outbox mutex poisoned").clone()
    }
}

#[derive(Debug, Deserialize)]
struct WrappedAnswers {
    answers: AnswerSet,
}

/// Answer files may hold the bare `{"1": 20, ...}` map or wrap it in `{"answers": ...}`.
pub(crate) fn parse_answers(raw: &str) -> Result<AnswerSet, serde_json::Error> {
    let document: serde_json::Value = serde_json::from_str(raw)?;
    if document.get("answers").is_some() {
        let wrapped: WrappedAnswers = serde_json::from_value(document)?;
        return Ok(wrapped.answers);
    }
    serde_json::from_value(document)
}

pub(crate) fn read_answers_file(path: &Path) -> Result<AnswerSet, ipo_readiness::error::AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse_answers(&raw)?)
}

/// Parses `v1,v2,...` into answers for questions 1, 2, ... in order.
pub(crate) fn parse_value_list(raw: &str) -> Result<AnswerSet, String> {
    let values = raw
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<u32>()
                .map_err(|err| format!("'{value}' is not a point value ({err})"))
        })
        .collect::<Result<Vec<u32>, String>>()?;
    Ok(AnswerSet::from_values(values))
}
