use super::domain::{AnswerOption, Category, CategoryDefinition, Question, QuestionId};
use serde::Serialize;

/// The IPO readiness questionnaire: 25 single-select questions in six categories.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|question| question.id)
    }

    pub fn category_of(&self, id: QuestionId) -> Option<Category> {
        self.question(id).map(|question| question.category)
    }

    pub fn max_value(&self, id: QuestionId) -> Option<u32> {
        self.question(id).map(Question::max_value)
    }

    pub fn category(&self, category: Category) -> CategoryDefinition {
        let members: Vec<&Question> = self
            .questions
            .iter()
            .filter(|question| question.category == category)
            .collect();

        CategoryDefinition {
            category,
            label: category.label(),
            questions: members.iter().map(|question| question.id).collect(),
            max_score: members.iter().map(|question| question.max_value()).sum(),
        }
    }

    /// All categories in display order.
    pub fn categories(&self) -> Vec<CategoryDefinition> {
        Category::ordered()
            .into_iter()
            .map(|category| self.category(category))
            .collect()
    }

    pub fn overall_max(&self) -> u32 {
        self.questions.iter().map(Question::max_value).sum()
    }

    /// Serializable questionnaire layout for presentation layers.
    pub fn view(&self) -> CatalogView<'_> {
        let sections = Category::ordered()
            .into_iter()
            .map(|category| {
                let definition = self.category(category);
                CatalogSection {
                    category,
                    label: definition.label,
                    max_score: definition.max_score,
                    questions: self
                        .questions
                        .iter()
                        .filter(|question| question.category == category)
                        .collect(),
                }
            })
            .collect();

        CatalogView {
            sections,
            max_total: self.overall_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSection<'a> {
    pub category: Category,
    pub label: &'static str,
    pub max_score: u32,
    pub questions: Vec<&'a Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub sections: Vec<CatalogSection<'a>>,
    pub max_total: u32,
}

fn question(
    id: QuestionId,
    category: Category,
    prompt: &'static str,
    options: &[(&'static str, u32)],
) -> Question {
    Question {
        id,
        category,
        prompt,
        options: options
            .iter()
            .map(|&(label, value)| AnswerOption { label, value })
            .collect(),
    }
}

fn standard_questions() -> Vec<Question> {
    use Category::*;

    vec![
        question(
            1,
            Strategic,
            "What is the purpose of your company's IPO?",
            &[
                ("Raising capital for growth", 20),
                ("Selling part of the shares", 20),
                ("Refinancing debt", 10),
                ("Raising brand awareness", 10),
                ("Other", 0),
            ],
        ),
        question(
            2,
            Strategic,
            "What is your company's strategy?",
            &[
                ("The strategy is formalized and used as a management tool", 30),
                ("A strategy document exists but is not kept up to date", 9),
                ("There is no documented strategy", 0),
            ],
        ),
        question(
            3,
            Strategic,
            "Is the company ready for transparency?",
            &[
                ("Ready to disclose to public company standards", 30),
                (
                    "Disclosure is possible when regulators require it or investors request it",
                    9,
                ),
                ("Ready to disclose only the bare minimum", 9),
            ],
        ),
        question(
            4,
            Strategic,
            "What is the company's dividend policy?",
            &[
                ("Clearly documented and agreed with shareholders", 3),
                ("Dividends are paid by decision of the general meeting", 2),
                ("Formally written down but not followed", 1),
                ("Not defined", 0),
            ],
        ),
        question(
            5,
            Market,
            "What was the company's revenue for the last reporting period?",
            &[
                ("More than RUB 50 bn", 30),
                ("RUB 10-50 bn", 30),
                ("RUB 1-10 bn", 15),
                ("Up to RUB 1 bn", 0),
            ],
        ),
        question(
            6,
            Market,
            "How fast did revenue grow over the last year?",
            &[
                ("Growth above 30%", 20),
                ("Growth of 10-30%", 16),
                ("Growth below 10%", 6),
                ("No growth or a decline", 0),
            ],
        ),
        question(
            7,
            Market,
            "How strong is the company's market leadership?",
            &[
                ("Leads in several niches or in a broad market", 30),
                ("Leader in its niche or vertical", 30),
                ("Among the top 10 players", 15),
                ("Has not assessed its market position", 0),
            ],
        ),
        question(
            8,
            Market,
            "How profitable is the company?",
            &[
                ("Net profit margin above 20%", 20),
                ("Net profit margin of 5-20%", 16),
                ("Net profit margin below 5%", 6),
                ("Other", 0),
            ],
        ),
        question(
            9,
            Market,
            "How unique is the product and what technological advantage does it have?",
            &[
                (
                    "Demonstrates technological leadership and potential to scale",
                    30,
                ),
                ("Products are valuable to customers but not unique", 24),
                ("Does not stand out among competitors", 0),
            ],
        ),
        question(
            10,
            Financial,
            "How is the company's financial reporting prepared?",
            &[
                ("Audited consolidated IFRS statements for 1-3 years", 30),
                ("Unaudited IFRS statements", 15),
                ("Transition to IFRS in progress", 15),
                ("Russian accounting standards only", 9),
                ("Group management reporting only", 0),
            ],
        ),
        question(
            11,
            Financial,
            "How is management reporting prepared?",
            &[
                ("Management reporting is fully automated", 30),
                ("Management reporting is partially automated", 15),
                ("Prepared irregularly, forms are compiled when needed", 9),
                ("There is no regular management accounting", 0),
            ],
        ),
        question(
            12,
            Financial,
            "Does the company have a financial model?",
            &[
                ("An IFRS-based model covering the next 5-10 years", 30),
                ("A cash-flow based model", 15),
                ("A basic three-year model without scenarios", 9),
                ("There is no formal financial model", 0),
            ],
        ),
        question(
            13,
            Financial,
            "What is the company's debt load?",
            &[
                ("No debt obligations", 20),
                ("Debt/EBITDA below 2x", 20),
                ("Debt/EBITDA between 3x and 4x", 10),
                ("Not applicable", 20),
            ],
        ),
        question(
            14,
            Financial,
            "Is an external audit performed?",
            &[
                ("Audited by a Big Four firm", 30),
                ("Audited by a firm accredited by the central bank", 24),
                ("No audit is performed", 0),
            ],
        ),
        question(
            15,
            Organizational,
            "How does the board of directors function?",
            &[
                ("The board operates and meets public company requirements", 10),
                ("The board plays an informal role", 5),
                ("No board has been formed", 0),
                ("Not applicable", 0),
            ],
        ),
        question(
            16,
            Organizational,
            "How are internal audit and risk control organized?",
            &[
                (
                    "An internal audit function and risk management rules are in place",
                    10,
                ),
                ("Partially implemented", 5),
                ("Not implemented", 0),
            ],
        ),
        question(
            17,
            Organizational,
            "How mature are business processes and digitalization?",
            &[
                ("Processes are well established and follow best practice", 20),
                ("Processes are established but need further work", 16),
                ("Some processes have been automated and digitized", 6),
                ("We rely on traditional management methods", 0),
            ],
        ),
        question(
            18,
            Organizational,
            "How are key employees incentivized?",
            &[
                ("A long-term incentive plan based on options or shares", 20),
                ("A KPI system with cash bonuses", 16),
                ("No incentive system", 0),
            ],
        ),
        question(
            19,
            Organizational,
            "Has a working group been set up to prepare for the IPO?",
            &[
                ("A professional adviser has been selected", 30),
                ("There is an internal working group", 24),
                ("Not yet", 0),
            ],
        ),
        question(
            20,
            Legal,
            "What is the legal form of the prospective issuer?",
            &[
                ("Public joint-stock company (or ready to re-register)", 30),
                ("Joint-stock company", 24),
                ("Limited liability company", 15),
            ],
        ),
        question(
            21,
            Legal,
            "What is the company's legal structure?",
            &[
                (
                    "All group companies are consolidated under the prospective issuer",
                    30,
                ),
                ("Consolidation is in progress", 15),
                ("The business runs through separate legal entities", 0),
            ],
        ),
        question(
            22,
            Communications,
            "What is the PR strategy and communications plan?",
            &[
                ("Developed with the IPO in mind, including investor relations", 30),
                ("Fully formed and working well towards customers", 24),
                ("Partially formed", 15),
                ("None", 0),
            ],
        ),
        question(
            23,
            Communications,
            "Does the corporate website have an investor relations section?",
            &[
                (
                    "A full IR section with financials and investor presentations, updated regularly",
                    20,
                ),
                ("A basic corporate website", 10),
                ("No corporate website, or no section about the company", 0),
            ],
        ),
        question(
            24,
            Communications,
            "How are social media and public channels run?",
            &[
                ("Systematically, with a consistent tone of voice", 20),
                ("Irregularly", 10),
                ("They are not run", 0),
            ],
        ),
        question(
            25,
            Communications,
            "How are spokespeople and public appearances organized?",
            &[
                (
                    "Spokespeople are appointed and speak regularly at public events",
                    20,
                ),
                ("No common policy and no appointed spokespeople", 6),
                ("Not appointed", 0),
            ],
        ),
    ]
}
