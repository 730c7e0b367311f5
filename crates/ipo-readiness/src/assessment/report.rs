use chrono::Utc;
use std::fmt;

use super::delivery::{ContactDetails, RenderError, RenderedReport, ReportRenderer};
use super::result::ResultRecord;

/// Plain-text layout of a result record, suitable for terminals and mail attachments.
pub struct TextReport<'a> {
    record: &'a ResultRecord,
    contact: Option<&'a ContactDetails>,
}

impl<'a> TextReport<'a> {
    pub fn new(record: &'a ResultRecord) -> Self {
        Self {
            record,
            contact: None,
        }
    }

    pub fn for_contact(mut self, contact: &'a ContactDetails) -> Self {
        self.contact = Some(contact);
        self
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;

        writeln!(f, "IPO readiness report")?;
        if let Some(contact) = self.contact {
            writeln!(
                f,
                "Prepared for {}, {} at {}",
                contact.name, contact.position, contact.company
            )?;
        }
        writeln!(f)?;

        for result in record.categories() {
            writeln!(
                f,
                "{}: {} of {} ({:.2}%)",
                result.label, result.score, result.max_score, result.percentage
            )?;
        }

        writeln!(f, "\nResults by category")?;
        let width = record
            .categories()
            .iter()
            .map(|result| result.category.short_label().len())
            .max()
            .unwrap_or(0);
        for result in record.categories() {
            writeln!(
                f,
                "  {:<width$}  {:>6.2}%",
                result.category.short_label(),
                result.percentage,
                width = width
            )?;
        }

        writeln!(
            f,
            "\nOverall score: {} of {} ({:.2}%)",
            record.total_score(),
            record.max_total(),
            record.total_percentage()
        )?;
        writeln!(f, "Readiness level: {}", record.readiness().label)?;

        writeln!(f, "\nGeneral assessment")?;
        writeln!(f, "{}", record.readiness().narrative)?;

        writeln!(f, "\nRecommendations")?;
        for selected in record.recommendations() {
            let bundle = &selected.bundle;
            writeln!(f, "\n{}", bundle.title)?;
            for paragraph in bundle.paragraphs {
                writeln!(f, "{paragraph}")?;
            }
            writeln!(f, "Step-by-step plan:")?;
            for (sequence, step) in bundle.numbered_plan() {
                writeln!(f, "{sequence}. {step}")?;
            }
        }

        Ok(())
    }
}

/// Renders the [`TextReport`] layout as a UTF-8 attachment.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextReportRenderer;

impl ReportRenderer for PlainTextReportRenderer {
    fn render(
        &self,
        record: &ResultRecord,
        contact: &ContactDetails,
    ) -> Result<RenderedReport, RenderError> {
        let generated_at = Utc::now();
        let body = TextReport::new(record).for_contact(contact).to_string();

        Ok(RenderedReport {
            file_name: format!("ipo-readiness-{}.txt", generated_at.format("%Y%m%d%H%M%S")),
            content_type: "text/plain; charset=utf-8",
            body: body.into_bytes(),
            generated_at,
        })
    }
}
