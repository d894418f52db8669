use eyre::Result;

use mindcare_client::config::{load_config, save_config};

use super::Context;

#[derive(Debug, clap::Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Persist a new backend base URL
    SetBaseUrl { url: String },

    /// Persist a new request timeout
    SetTimeout { seconds: u64 },
}

impl ConfigCommand {
    pub fn run(self, ctx: &Context) -> Result<()> {
        match self {
            ConfigCommand::Show => {
                println!("path:     {}", ctx.config_path.display());
                println!("base_url: {}", ctx.config.base_url);
                println!("timeout:  {}s", ctx.config.timeout_secs);
            }
            ConfigCommand::SetBaseUrl { url } => {
                let mut config = load_config(&ctx.config_path)?;
                config.base_url = url.trim().trim_end_matches('/').to_string();
                save_config(&ctx.config_path, &config)?;
                println!("base_url set to {}", config.base_url);
            }
            ConfigCommand::SetTimeout { seconds } => {
                let mut config = load_config(&ctx.config_path)?;
                config.timeout_secs = seconds;
                save_config(&ctx.config_path, &config)?;
                println!("timeout set to {seconds}s");
            }
        }
        Ok(())
    }
}
