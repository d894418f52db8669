use tracing::info;

use mindcare_core::endpoints;
use mindcare_core::models::assessment::{
    AssessmentRecord, AssessmentScoresSummary, AssessmentSubmission,
};
use mindcare_instruments::InstrumentKind;
use mindcare_instruments::questionnaire::Questionnaire;

use crate::client::ApiClient;
use crate::error::ClientError;

pub async fn get_scores(
    client: &ApiClient,
    user_id: &str,
) -> Result<AssessmentScoresSummary, ClientError> {
    client.get(&endpoints::assessment_scores(user_id)).await
}

pub async fn submit(
    client: &ApiClient,
    submission: &AssessmentSubmission,
) -> Result<AssessmentRecord, ClientError> {
    let record: AssessmentRecord = client.post(endpoints::ASSESSMENT_SUBMIT, submission).await?;
    info!(kind = %record.kind, score = record.score, "assessment submitted");
    Ok(record)
}

pub async fn submit_phq9(
    client: &ApiClient,
    user_id: &str,
    score: u32,
) -> Result<AssessmentRecord, ClientError> {
    submit_kind(client, InstrumentKind::Phq9, user_id, score).await
}

pub async fn submit_gad7(
    client: &ApiClient,
    user_id: &str,
    score: u32,
) -> Result<AssessmentRecord, ClientError> {
    submit_kind(client, InstrumentKind::Gad7, user_id, score).await
}

/// Submit a finished questionnaire. Fails locally, without a request, while
/// any question is unanswered.
pub async fn submit_questionnaire(
    client: &ApiClient,
    questionnaire: &Questionnaire,
    user_id: &str,
) -> Result<AssessmentRecord, ClientError> {
    let submission = questionnaire.submission(user_id)?;
    submit(client, &submission).await
}

async fn submit_kind(
    client: &ApiClient,
    kind: InstrumentKind,
    user_id: &str,
    score: u32,
) -> Result<AssessmentRecord, ClientError> {
    let submission = AssessmentSubmission {
        user_id: user_id.to_string(),
        kind: kind.instrument().wire_type().to_string(),
        score,
    };
    submit(client, &submission).await
}
