use mindcare_core::endpoints;
use mindcare_core::models::mood::{CreateMoodRequest, MoodEntry};
use mindcare_instruments::mood::Mood;

use crate::client::ApiClient;
use crate::error::ClientError;

pub async fn log_mood(
    client: &ApiClient,
    user_id: &str,
    mood: Mood,
    note: &str,
) -> Result<MoodEntry, ClientError> {
    let request = CreateMoodRequest {
        user_id: user_id.to_string(),
        mood: mood.label().to_string(),
        note: note.to_string(),
    };
    client.post(endpoints::MOOD, &request).await
}

pub async fn get_latest_mood(client: &ApiClient, user_id: &str) -> Result<MoodEntry, ClientError> {
    client.get(&endpoints::mood_latest(user_id)).await
}
