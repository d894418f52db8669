use eyre::Result;

use mindcare_client::services::chat;

use super::render::plain;
use super::{Context, require_user_id};

#[derive(Debug, clap::Args)]
pub struct Chat {
    /// What to say
    #[arg(required_unless_present = "list")]
    message: Option<String>,

    /// Continue an existing session instead of starting a new one
    #[arg(long)]
    session: Option<String>,

    /// List your chat sessions instead of sending
    #[arg(long, conflicts_with = "session")]
    list: bool,
}

impl Chat {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let user_id = require_user_id(&client)?;

        if self.list {
            for s in chat::get_sessions(&client, &user_id).await? {
                println!(
                    "{}  {} messages  stress: {}  started {}",
                    s.id, s.message_count, s.detected_stress_level, s.session_start
                );
            }
            return Ok(());
        }

        let Some(message) = self.message else {
            return Ok(());
        };

        let session_id = match self.session {
            Some(id) => id,
            None => {
                let session = chat::create_session(&client, &user_id).await?;
                tracing::info!(session_id = %session.id, "started chat session");
                session.id
            }
        };

        let reply = chat::send_message(&client, &session_id, &message).await?;
        println!("{}", plain(&mindcare_render::render(&reply.bot_reply)));
        tracing::debug!(
            sentiment = %reply.sentiment,
            stress_level = %reply.stress_level,
            "reply received"
        );
        eprintln!("\n(session {session_id}; continue with --session {session_id})");
        Ok(())
    }
}
