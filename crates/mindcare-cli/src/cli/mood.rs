use eyre::Result;

use mindcare_client::services::mood as mood_service;
use mindcare_instruments::mood::{Mood, mood_value, wellness_bucket, wellness_score};

use super::{Context, require_user_id};

#[derive(Debug, clap::Subcommand)]
pub enum MoodCommand {
    /// Record how you feel right now
    Log {
        /// Happy, Sad, Anxious, Stressed or Neutral
        mood: Mood,

        #[arg(long, default_value = "")]
        note: String,
    },

    /// Show the most recent mood and wellness score
    Latest,
}

impl MoodCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let user_id = require_user_id(&client)?;

        match self {
            MoodCommand::Log { mood, note } => {
                let entry = mood_service::log_mood(&client, &user_id, mood, &note).await?;
                println!("Logged {} at {}.", entry.mood, entry.created_at);
                print_wellness(Some(mood));
            }
            MoodCommand::Latest => {
                let entry = mood_service::get_latest_mood(&client, &user_id).await?;
                println!(
                    "{} ({}/5) at {}",
                    entry.mood,
                    mood_value(&entry.mood),
                    entry.created_at
                );
                if !entry.note.is_empty() {
                    println!("note: {}", entry.note);
                }
                print_wellness(entry.mood.parse().ok());
            }
        }
        Ok(())
    }
}

fn print_wellness(mood: Option<Mood>) {
    let score = wellness_score(mood);
    println!("Wellness score: {score} ({} concern)", wellness_bucket(score).as_str());
}
