use crate::server;
use clap::{Args, Parser, Subcommand};
use hireflow::error::AppError;
use hireflow::workflows::sourcing::{ProgressStage, ProjectProgress};

#[derive(Parser, Debug)]
#[command(
    name = "HireFlow Sourcing Orchestrator",
    about = "Run the HireFlow sourcing and scoring notification pipeline from the command line",
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
    /// Print the progress stage for a set of completion counts
    Progress(ProgressArgs),
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

#[derive(Args, Debug)]
pub(crate) struct ProgressArgs {
    /// Candidates that have completed their proof-of-work tasks
    #[arg(long)]
    completed: u32,
    /// Total candidates sourced for the project
    #[arg(long)]
    total: u32,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Progress(args) => run_progress_report(args),
    }
}

fn run_progress_report(args: ProgressArgs) -> Result<(), AppError> {
    let progress = ProjectProgress {
        candidates_completed: args.completed,
        total_candidates: args.total,
    };
    let percentage = progress.completion_percentage();
    let stage = ProgressStage::for_percentage(percentage);

    println!("Sourcing progress report");
    println!(
        "Completed: {}/{} candidates ({percentage}%)",
        progress.candidates_completed, progress.total_candidates
    );
    println!("Stage: {}", stage.label());
    println!("{}", stage.message());

    Ok(())
}
