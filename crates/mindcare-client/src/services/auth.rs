use tracing::info;

use mindcare_core::endpoints;
use mindcare_core::models::auth::{AuthUserData, LoginRequest, RegisterRequest};
use mindcare_core::models::user::User;

use crate::client::ApiClient;
use crate::error::ClientError;

/// Create an account and sign in as it.
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<AuthUserData, ClientError> {
    let data: AuthUserData = client.post(endpoints::AUTH_REGISTER, request).await?;
    remember(client, &data)?;
    info!(user_id = %data.user_id, "registered");
    Ok(data)
}

pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthUserData, ClientError> {
    let data: AuthUserData = client.post(endpoints::AUTH_LOGIN, request).await?;
    remember(client, &data)?;
    info!(user_id = %data.user_id, has_token = data.token.is_some(), "logged in");
    Ok(data)
}

pub fn logout(client: &ApiClient) -> Result<(), ClientError> {
    client.session().clear()?;
    info!("logged out");
    Ok(())
}

/// A stored token or a cached user both count as signed in.
pub fn is_authenticated(client: &ApiClient) -> Result<bool, ClientError> {
    let session = client.session();
    Ok(session.token()?.is_some() || session.user()?.is_some())
}

pub fn current_user(client: &ApiClient) -> Result<Option<User>, ClientError> {
    client.session().user()
}

/// Replace the cached user after a profile edit.
pub fn update_cached_user(client: &ApiClient, user: &User) -> Result<(), ClientError> {
    client.session().set_user(user)
}

fn remember(client: &ApiClient, data: &AuthUserData) -> Result<(), ClientError> {
    let session = client.session();
    if let Some(token) = data.token.as_deref() {
        session.set_token(token)?;
    }
    session.set_user(&data.to_user())?;
    session.set_user_id(&data.user_id)
}
