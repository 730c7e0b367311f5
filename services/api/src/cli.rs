use crate::demo::{run_assess, run_catalog, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ipo_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "IPO Readiness Assessment",
    about = "Score IPO readiness questionnaires and serve the assessment API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the questionnaire with every option and its point value
    Catalog,
    /// Score a completed questionnaire and print the report
    Assess(AssessArgs),
    /// Score the reference scenarios and walk through a full submission
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog => run_catalog(),
        Command::Assess(args) => run_assess(args),
        Command::Demo(args) => run_demo(args),
    }
}
