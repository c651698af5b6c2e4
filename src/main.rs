use std::path::PathBuf;

use clap::{
    ArgAction, Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use omnivox::{cli, config, error, types::EnvelopeSpec, utils, workflow};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upload recordings, create the engagement and schedule it
    Launch(LaunchOptions),

    /// Schedule an engagement created earlier
    Schedule(ScheduleOptions),

    /// List recorded launches
    Runs(RunsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

/// API credentials; each flag overrides its environment variable.
#[derive(Args, Debug, Clone)]
pub struct ApiOptions {
    /// API token key [env: OMNIGAGE_TOKEN_KEY]
    #[clap(long)]
    pub token_key: Option<String>,

    /// API token secret [env: OMNIGAGE_TOKEN_SECRET]
    #[clap(long)]
    pub token_secret: Option<String>,

    /// Account key [env: OMNIGAGE_ACCOUNT_KEY]
    #[clap(long)]
    pub account_key: Option<String>,

    /// API host path, e.g. https://api.omnigage.io/api/v1/ [env: OMNIGAGE_API_URL]
    #[clap(long)]
    pub host: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LaunchOptions {
    #[command(flatten)]
    pub api: ApiOptions,

    /// Recording played when a person answers (.wav or .mp3)
    #[clap(long)]
    pub human_recording: PathBuf,

    /// Recording played when an answering machine is detected (.wav or .mp3)
    #[clap(long)]
    pub machine_recording: PathBuf,

    /// Caller ID used for the voice activity
    #[clap(long)]
    pub caller_id: String,

    /// Recipient as PHONE[,key=value...]; can be repeated
    #[clap(
        long = "envelope",
        value_parser = utils::parse_envelope,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub envelopes: Vec<EnvelopeSpec>,

    /// JSON file with an array of {"phone-number": .., "meta": {..}} objects
    #[clap(long)]
    pub envelopes_file: Option<PathBuf>,

    #[clap(long, default_value = workflow::DEFAULT_ENGAGEMENT_NAME)]
    pub engagement_name: String,

    #[clap(long, default_value = workflow::DEFAULT_ACTIVITY_NAME)]
    pub activity_name: String,

    #[clap(long, default_value = workflow::DEFAULT_HUMAN_RECORDING_NAME)]
    pub human_name: String,

    #[clap(long, default_value = workflow::DEFAULT_MACHINE_RECORDING_NAME)]
    pub machine_name: String,

    /// Create everything but leave the engagement unscheduled
    #[clap(long)]
    pub no_schedule: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ScheduleOptions {
    #[command(flatten)]
    pub api: ApiOptions,

    /// ID of the engagement to schedule
    pub engagement_id: String,

    /// Also rename the engagement
    #[clap(long)]
    pub name: Option<String>,

    /// Also change the engagement direction
    #[clap(long)]
    pub direction: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RunsOptions {
    /// Only show the most recent N runs
    #[clap(long)]
    pub last: Option<usize>,

    /// Only show runs that created this engagement
    #[clap(long)]
    pub engagement: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn credentials(api: ApiOptions) -> omnivox::types::Credentials {
    match config::credentials(api.token_key, api.token_secret, api.account_key, api.host) {
        Ok(credentials) => credentials,
        Err(e) => error!("{}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Launch(opt) => {
            let plan = cli::LaunchPlan {
                human_recording: opt.human_recording,
                machine_recording: opt.machine_recording,
                caller_id: opt.caller_id,
                envelopes: opt.envelopes,
                envelopes_file: opt.envelopes_file,
                engagement_name: opt.engagement_name,
                activity_name: opt.activity_name,
                human_name: opt.human_name,
                machine_name: opt.machine_name,
                schedule: !opt.no_schedule,
            };
            cli::launch(credentials(opt.api), plan).await
        }
        Command::Schedule(opt) => {
            cli::schedule(
                credentials(opt.api),
                opt.engagement_id,
                opt.name,
                opt.direction,
            )
            .await
        }
        Command::Runs(opt) => cli::runs(opt.last, opt.engagement).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
