use mindcare_core::endpoints;
use mindcare_core::models::user::{UpdateUserRequest, User};

use crate::client::ApiClient;
use crate::error::ClientError;

/// Profile of the signed-in user.
pub async fn get_profile(client: &ApiClient) -> Result<User, ClientError> {
    client.get(endpoints::USER_PROFILE).await
}

pub async fn get_user(client: &ApiClient, user_id: &str) -> Result<User, ClientError> {
    client.get(&endpoints::user(user_id)).await
}

pub async fn update_profile(
    client: &ApiClient,
    user_id: &str,
    update: &UpdateUserRequest,
) -> Result<User, ClientError> {
    client.put(&endpoints::user(user_id), update).await
}

pub async fn delete_account(client: &ApiClient, user_id: &str) -> Result<(), ClientError> {
    client.delete(&endpoints::user(user_id)).await
}
