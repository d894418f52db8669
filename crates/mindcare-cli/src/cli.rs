use std::path::PathBuf;
use std::sync::Arc;

use clap::ArgAction;
use eyre::Result;

use mindcare_client::ApiClient;
use mindcare_client::config::{ClientConfig, default_config_path, load_config};
use mindcare_client::token::{FileTokenStore, Session};

mod account;
mod chat;
mod config;
mod mood;
mod render;
mod score;

#[derive(Debug, clap::Parser)]
#[command(name = "mindcare", version, about = "Student wellness portal from the terminal")]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Backend base URL (overrides config and MINDCARE_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Score a PHQ-9 or GAD-7 answer set locally
    Score(score::Score),

    /// Print the questions and response scale of a questionnaire
    Questions(score::Questions),

    /// Render a chatbot reply into blocks
    Render(render::Render),

    /// Sign in and remember the session
    Login(account::Login),

    /// Create an account and sign in
    Register(account::Register),

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Score an answer set and submit it
    Submit(score::Submit),

    /// Show the latest PHQ-9 and GAD-7 results on record
    Scores,

    /// Send a message to the support chatbot
    Chat(chat::Chat),

    /// Log or view moods
    #[command(subcommand)]
    Mood(mood::MoodCommand),

    /// Show or modify configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Shared by every command that talks to the backend.
pub struct Context {
    pub config: ClientConfig,
    pub config_path: PathBuf,
}

impl Context {
    /// The session file lives beside the config file in use.
    pub fn session_path(&self) -> PathBuf {
        self.config_path.with_file_name("session.json")
    }

    pub fn client(&self) -> Result<ApiClient> {
        let store = FileTokenStore::new(self.session_path());
        Ok(ApiClient::new(&self.config, Session::new(Arc::new(store)))?)
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        Self::setup_logging(self.verbose, self.log_json);

        let config_path = match self.config {
            Some(path) => path,
            None => default_config_path()?,
        };
        let config = load_config(&config_path)?.with_overrides(self.base_url.as_deref());
        tracing::debug!(base_url = %config.base_url, path = %config_path.display(), "config loaded");
        let ctx = Context {
            config,
            config_path,
        };

        match self.command {
            Command::Score(cmd) => cmd.run(),
            Command::Questions(cmd) => cmd.run(),
            Command::Render(cmd) => cmd.run(),
            Command::Login(cmd) => cmd.run(&ctx).await,
            Command::Register(cmd) => cmd.run(&ctx).await,
            Command::Logout => account::logout(&ctx),
            Command::Whoami => account::whoami(&ctx).await,
            Command::Submit(cmd) => cmd.run(&ctx).await,
            Command::Scores => score::latest_scores(&ctx).await,
            Command::Chat(cmd) => cmd.run(&ctx).await,
            Command::Mood(cmd) => cmd.run(&ctx).await,
            Command::Config(cmd) => cmd.run(&ctx),
        }
    }

    fn setup_logging(verbosity: u8, json: bool) {
        let level = match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);
        if json {
            builder.json().init();
        } else {
            builder.init();
        }
    }
}

/// The signed-in user's id, or an error telling the user to log in.
pub fn require_user_id(client: &ApiClient) -> Result<String> {
    client
        .session()
        .user_id()?
        .ok_or_else(|| eyre::eyre!("not logged in; run `mindcare login` first"))
}
