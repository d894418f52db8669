use mindcare_core::endpoints;
use mindcare_core::models::chat::{
    ChatSessionDetail, ChatSessionSummary, CreateChatSessionRequest, SendMessageRequest,
    SendMessageResponse,
};

use crate::client::ApiClient;
use crate::error::ClientError;

pub async fn create_session(
    client: &ApiClient,
    user_id: &str,
) -> Result<ChatSessionDetail, ClientError> {
    let request = CreateChatSessionRequest {
        user_id: user_id.to_string(),
    };
    client.post(endpoints::CHAT_SESSION, &request).await
}

/// Send one message. The reply's `bot_reply` is plain text for the renderer.
pub async fn send_message(
    client: &ApiClient,
    session_id: &str,
    message: &str,
) -> Result<SendMessageResponse, ClientError> {
    let request = SendMessageRequest {
        session_id: session_id.to_string(),
        message: message.to_string(),
    };
    client.post(endpoints::CHAT_MESSAGE, &request).await
}

pub async fn get_session(
    client: &ApiClient,
    session_id: &str,
) -> Result<ChatSessionDetail, ClientError> {
    client.get(&endpoints::chat_session(session_id)).await
}

pub async fn get_sessions(
    client: &ApiClient,
    user_id: &str,
) -> Result<Vec<ChatSessionSummary>, ClientError> {
    client
        .get_with_query(endpoints::CHAT_SESSIONS, &[("userId", user_id)])
        .await
}

pub async fn delete_session(
    client: &ApiClient,
    session_id: &str,
    user_id: &str,
) -> Result<(), ClientError> {
    client
        .delete(&endpoints::chat_session_for_user(session_id, user_id))
        .await
}
