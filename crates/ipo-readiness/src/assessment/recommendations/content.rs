use super::RecommendationBundle;

pub(super) const HIGH_DEFAULT: RecommendationBundle = RecommendationBundle {
    title: "Final preparation for listing",
    paragraphs: &[
        "Your company is at a high level of IPO readiness. Keep up the current standards of transparency and governance.",
        "Consider engaging investment banks for the final stage of preparation. Streamline investor interaction to strengthen market confidence.",
        "Update the financial model regularly to reflect market trends, and make sure every process meets regulatory requirements.",
    ],
    plan: &[
        "Run a final audit of the financial statements (1 month).",
        "Prepare the investor presentation (2-3 weeks).",
        "Hold a roadshow to build investor interest (1-2 months).",
        "Optimize the investor relations section of the website (1 month).",
    ],
};

pub(super) const MEDIUM_DEFAULT: RecommendationBundle = RecommendationBundle {
    title: "Closing the remaining gaps",
    paragraphs: &[
        "Your company has the potential for a successful IPO but needs more work in specific areas. Focus on weaknesses such as financial transparency or the communications strategy.",
        "Draw up a detailed action plan with professional advisers. Run an internal review of processes to uncover hidden risks.",
        "Track preparation progress regularly. This will make the company more attractive to investors.",
    ],
    plan: &[
        "Hire an IPO adviser (1 month).",
        "Run an internal process audit (2-3 months).",
        "Develop a communications strategy (1-2 months).",
        "Start preparing IFRS statements (3-6 months).",
    ],
};

pub(super) const LOW_DEFAULT: RecommendationBundle = RecommendationBundle {
    title: "Building the foundations",
    paragraphs: &[
        "Significant work is needed to prepare your company for an IPO. Start with a clear strategy and IFRS financial reporting.",
        "Bring in advisers to build a preparation roadmap. Strengthen the organizational structure by introducing internal audit and risk management.",
        "Build communication with potential investors step by step. This lays the groundwork for a successful placement.",
    ],
    plan: &[
        "Form an IPO working group (1 month).",
        "Develop a baseline strategy (2-3 months).",
        "Start the transition to IFRS (3-6 months).",
        "Introduce internal audit (2-4 months).",
    ],
};

pub(super) const CRITICAL_DEFAULT: RecommendationBundle = RecommendationBundle {
    title: "Comprehensive preparation programme",
    paragraphs: &[
        "Your company is not yet ready for an IPO and needs comprehensive preparation. Start with the basics: a strategy, a financial model and legal consolidation of assets.",
        "Engage professional advisers to shape an action plan. Introduce basic risk management and reporting processes.",
        "Build your market reputation gradually through PR activity. This lays the foundation for further progress.",
    ],
    plan: &[
        "Hire a strategy adviser (1 month).",
        "Build a basic financial model (2-3 months).",
        "Start consolidating assets (3-6 months).",
        "Launch a PR campaign (2-4 months).",
    ],
};

pub(super) const STRATEGIC: RecommendationBundle = RecommendationBundle {
    title: "Strategic readiness",
    paragraphs: &[
        "Your strategic readiness needs significant improvement. Develop a clear, documented strategy with long-term goals and concrete KPIs to make the business more manageable.",
        "Bring in experts to formalize your plans. Review the strategy on a regular schedule so it adapts to market changes.",
        "Hold strategy sessions with management to agree on a shared vision. This strengthens investor confidence.",
    ],
    plan: &[
        "Hire a strategy adviser (1 month).",
        "Hold strategy sessions (1-2 months).",
        "Develop a strategy with KPIs (2-3 months).",
        "Set up a process for updating plans (1 month).",
        "Prepare an expansion plan (3-6 months).",
    ],
};

pub(super) const MARKET: RecommendationBundle = RecommendationBundle {
    title: "Size and market position",
    paragraphs: &[
        "To strengthen your market position, concentrate on competitive advantages. Run a detailed market analysis to find niches for growth.",
        "Draw up a plan for scaling operations, including new products or regions. Grow the customer base through targeted marketing campaigns.",
        "Consider strategic partnerships or acquisitions to increase market share, and monitor competitors continuously.",
    ],
    plan: &[
        "Run a market analysis (1-2 months).",
        "Develop a scaling plan (2-3 months).",
        "Launch a marketing campaign (2-4 months).",
        "Find partners to work with (3-6 months).",
        "Assess competitors (1 month).",
    ],
};

pub(super) const FINANCIAL: RecommendationBundle = RecommendationBundle {
    title: "Financial readiness",
    paragraphs: &[
        "Financial readiness needs further work. Move to IFRS reporting to meet public company standards.",
        "Arrange a regular external audit with an accredited firm. Build a detailed 5-10 year financial model covering growth and risk scenarios.",
        "Train the finance team to work with investors, and reduce the debt load if it exceeds target levels.",
    ],
    plan: &[
        "Hire an auditor to review the statements (1 month).",
        "Start the transition to IFRS (3-6 months).",
        "Develop a financial model (2-3 months).",
        "Train the team (1-2 months).",
        "Optimize the debt load (3-12 months).",
    ],
};

pub(super) const ORGANIZATIONAL: RecommendationBundle = RecommendationBundle {
    title: "Organizational readiness",
    paragraphs: &[
        "The organizational structure needs optimizing. Set up an internal audit function to oversee processes.",
        "Develop risk management rules to reduce threats. Create a long-term incentive plan for key employees based on options or shares.",
        "Train managers in public company governance standards and make sure every process is documented.",
    ],
    plan: &[
        "Set up an internal audit function (2-3 months).",
        "Develop risk management rules (1-2 months).",
        "Introduce an incentive plan (2-3 months).",
        "Organize management training (1-2 months).",
        "Document processes (2-4 months).",
    ],
};

pub(super) const LEGAL: RecommendationBundle = RecommendationBundle {
    title: "Legal readiness",
    paragraphs: &[
        "The company's legal readiness needs improvement. Complete the consolidation of all assets under a single issuer to simplify the ownership structure.",
        "Consider converting to a public joint-stock company if this has not been done yet. Run a legal audit to remove potential risks.",
        "Prepare regulatory filings in advance. This minimizes obstacles on the way to the IPO.",
    ],
    plan: &[
        "Hire a lawyer for an audit (1 month).",
        "Complete the consolidation of assets (3-6 months).",
        "Prepare the conversion to a public company (2-4 months).",
        "Audit corporate documents (1-2 months).",
        "Prepare regulatory filings (2-3 months).",
    ],
};

pub(super) const COMMUNICATIONS: RecommendationBundle = RecommendationBundle {
    title: "Communications readiness",
    paragraphs: &[
        "The communications strategy needs development. Create a full investor relations section on the website with financial information and presentations.",
        "Develop a PR strategy focused on investor relations, including media coverage. Appoint spokespeople for public appearances and train them.",
        "Update social media and public channels regularly to raise awareness.",
    ],
    plan: &[
        "Create an IR section on the website (1-2 months).",
        "Develop a PR strategy (2-3 months).",
        "Appoint and train spokespeople (1-2 months).",
        "Launch social media activity (2-4 months).",
        "Prepare a media plan (1 month).",
    ],
};
