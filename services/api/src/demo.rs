use crate::infra::{parse_value_list, read_answers_file, InMemoryNotifier};
use chrono::Local;
use clap::Args;
use ipo_readiness::assessment::{
    AnswerSet, AssessmentEngine, AssessmentService, AssessmentSubmission, Category,
    ContactDetails, PlainTextReportRenderer, QuestionCatalog, ResultRecord, ScoringConfig,
    ScoringEngine, StaticRecommendationStore, TextReport,
};
use ipo_readiness::config::NotificationConfig;
use ipo_readiness::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file with answers keyed by question number
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with = "values",
        required_unless_present = "values"
    )]
    pub(crate) answers: Option<PathBuf>,
    /// Comma-separated point values for questions 1 to 25, in order
    #[arg(long, value_parser = parse_value_list)]
    pub(crate) values: Option<AnswerSet>,
    /// Print the result record as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Accept any point value instead of only the values offered by each question
    #[arg(long)]
    pub(crate) lenient: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full text report for every scenario
    #[arg(long)]
    pub(crate) full_reports: bool,
    /// Skip the submission and delivery walkthrough
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    let view = catalog.view();

    println!("IPO readiness questionnaire");
    for section in &view.sections {
        println!("\n{} (max {} points)", section.label, section.max_score);
        for question in &section.questions {
            println!("  {:>2}. {}", question.id, question.prompt);
            for option in &question.options {
                println!("      [{:>2}] {}", option.value, option.label);
            }
        }
    }
    println!("\nMaximum total: {}", view.max_total);

    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        values,
        json,
        lenient,
    } = args;

    let answers = match (answers, values) {
        (Some(path), _) => read_answers_file(&path)?,
        (None, Some(values)) => values,
        (None, None) => AnswerSet::new(),
    };

    let engine = engine(lenient);
    let record = engine.score(&answers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", TextReport::new(&record));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        full_reports,
        skip_submission,
    } = args;

    let catalog = QuestionCatalog::standard();
    println!(
        "IPO readiness demo ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );

    let scenarios = [
        ("Every answer at its strongest option", false, strongest(&catalog)),
        ("Every answer at zero points", true, AnswerSet::from_values([0; 25])),
        (
            "Legal readiness at zero, everything else at maximum",
            true,
            with_category(&catalog, Category::Legal, 0),
        ),
    ];

    for (index, (title, lenient, answers)) in scenarios.into_iter().enumerate() {
        let record = engine(lenient).score(&answers)?;
        println!("\nScenario {}: {}", index + 1, title);
        if full_reports {
            print!("{}", TextReport::new(&record));
        } else {
            render_summary(&record);
        }
    }

    if !skip_submission {
        run_submission_walkthrough(&catalog)?;
    }

    Ok(())
}

fn engine(lenient: bool) -> AssessmentEngine {
    if !lenient {
        return AssessmentEngine::standard();
    }
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

fn strongest(catalog: &QuestionCatalog) -> AnswerSet {
    catalog
        .questions()
        .iter()
        .map(|question| (question.id, question.max_value()))
        .collect()
}

fn with_category(catalog: &QuestionCatalog, category: Category, value: u32) -> AnswerSet {
    catalog
        .questions()
        .iter()
        .map(|question| {
            let points = if question.category == category {
                value
            } else {
                question.max_value()
            };
            (question.id, points)
        })
        .collect()
}

fn render_summary(record: &ResultRecord) {
    println!(
        "  Overall: {} of {} ({:.2}%), {}",
        record.total_score(),
        record.max_total(),
        record.total_percentage(),
        record.readiness().label
    );
    for result in record.categories() {
        println!(
            "  - {:<28} {:>3} / {:<3} {:>6.2}%",
            result.label, result.score, result.max_score, result.percentage
        );
    }
    println!("  Recommendations:");
    for selected in record.recommendations() {
        println!(
            "  * {} ({} plan steps)",
            selected.bundle.title,
            selected.bundle.plan.len()
        );
    }
}

fn run_submission_walkthrough(catalog: &QuestionCatalog) -> Result<(), AppError> {
    let notifier = Arc::new(InMemoryNotifier::default());
    let service = AssessmentService::new(
        Arc::new(PlainTextReportRenderer),
        notifier.clone(),
        NotificationConfig::default(),
    );

    let answers = with_category(catalog, Category::Communications, 0)
        .with_answer(22, 15)
        .with_answer(23, 10);
    let outcome = service.submit(AssessmentSubmission {
        answers,
        contact: ContactDetails {
            name: "Demo Respondent".to_string(),
            company: "Demo Holdings".to_string(),
            position: "Chief Financial Officer".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "cfo@demo-holdings.example".to_string(),
        },
    })?;

    println!("\nSubmission walkthrough");
    render_summary(&outcome.result);
    println!(
        "  Report rendered: {}, delivered: {}",
        outcome.delivery.report_rendered, outcome.delivery.report_delivered
    );
    if let Some(error) = &outcome.delivery.error {
        println!("  Delivery error: {error}");
    }

    for notification in notifier.sent() {
        let attachment = notification
            .attachment
            .as_ref()
            .map(|report| format!("{} ({} bytes)", report.file_name, report.body.len()))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "  Queued '{}' for {} with attachment {}",
            notification.subject, notification.recipient, attachment
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipo_readiness::assessment::ReadinessTier;

    #[test]
    fn demo_runs_every_scenario() {
        run_demo(DemoArgs::default()).expect("demo completes");
    }

    #[test]
    fn catalog_listing_succeeds() {
        run_catalog().expect("catalog prints");
    }

    #[test]
    fn lenient_engine_scores_zero_answers() {
        let record = engine(true)
            .score(&AnswerSet::from_values([0; 25]))
            .expect("zero answers accepted");
        assert_eq!(record.tier(), ReadinessTier::Critical);
        assert!(engine(false)
            .score(&AnswerSet::from_values([0; 25]))
            .is_err());
    }

    #[test]
    fn assess_reports_incomplete_value_lists() {
        let args = AssessArgs {
            answers: None,
            values: Some(AnswerSet::from_values([20, 30, 30])),
            json: false,
            lenient: false,
        };
        let err = run_assess(args).expect_err("only three answers");
        assert!(matches!(err, AppError::Scoring(_)));
    }

    #[test]
    fn assess_prints_json_for_complete_answers() {
        let catalog = QuestionCatalog::standard();
        let args = AssessArgs {
            answers: None,
            values: Some(strongest(&catalog)),
            json: true,
            lenient: false,
        };
        run_assess(args).expect("complete answers score");
    }
}
