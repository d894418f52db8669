use mindcare_core::endpoints;
use mindcare_core::models::forum::{
    CreateCommentRequest, CreateThreadRequest, ForumComment, ForumThread, UpdateThreadRequest,
};

use crate::client::ApiClient;
use crate::error::ClientError;

pub async fn create_thread(
    client: &ApiClient,
    request: &CreateThreadRequest,
) -> Result<ForumThread, ClientError> {
    client.post(endpoints::FORUM_THREAD, request).await
}

pub async fn get_all_threads(client: &ApiClient) -> Result<Vec<ForumThread>, ClientError> {
    client.get(endpoints::FORUM_THREADS).await
}

pub async fn get_thread(client: &ApiClient, thread_id: &str) -> Result<ForumThread, ClientError> {
    client.get(&endpoints::forum_thread(thread_id)).await
}

pub async fn update_thread(
    client: &ApiClient,
    thread_id: &str,
    request: &UpdateThreadRequest,
) -> Result<ForumThread, ClientError> {
    client.put(&endpoints::forum_thread(thread_id), request).await
}

pub async fn delete_thread(client: &ApiClient, thread_id: &str) -> Result<(), ClientError> {
    client.delete(&endpoints::forum_thread(thread_id)).await
}

pub async fn create_comment(
    client: &ApiClient,
    request: &CreateCommentRequest,
) -> Result<ForumComment, ClientError> {
    client.post(endpoints::FORUM_COMMENT, request).await
}

pub async fn get_thread_comments(
    client: &ApiClient,
    thread_id: &str,
) -> Result<Vec<ForumComment>, ClientError> {
    client.get(&endpoints::forum_thread_comments(thread_id)).await
}

pub async fn delete_comment(
    client: &ApiClient,
    comment_id: &str,
    user_id: &str,
) -> Result<(), ClientError> {
    client
        .delete_with_query(&endpoints::forum_comment(comment_id), &[("userId", user_id)])
        .await
}
