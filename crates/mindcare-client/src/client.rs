use std::collections::HashMap;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use mindcare_core::models::envelope::ApiEnvelope;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::token::Session;

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    title: Option<String>,
    errors: Option<HashMap<String, Vec<String>>>,
}

/// HTTP client bound to one backend and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let req = self.request(Method::GET, path)?;
        self.send_enveloped(req, &Method::GET, path).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        let req = self.request(Method::GET, path)?.query(query);
        self.send_enveloped(req, &Method::GET, path).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let req = self.request(Method::POST, path)?.json(body);
        self.send_enveloped(req, &Method::POST, path).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let req = self.request(Method::PUT, path)?.json(body);
        self.send_enveloped(req, &Method::PUT, path).await
    }

    /// DELETE. Any 2xx counts as success; the body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, path)?;
        self.send(req, &Method::DELETE, path).await?;
        Ok(())
    }

    pub async fn delete_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, path)?.query(query);
        self.send(req, &Method::DELETE, path).await?;
        Ok(())
    }

    /// Build a request with the bearer token attached when one is stored.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, url);
        if let Some(token) = self.session.token()? {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    async fn send_enveloped<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        method: &Method,
        path: &str,
    ) -> Result<T, ClientError> {
        let resp = self.send(req, method, path).await?;
        let bytes = resp.bytes().await?;
        // Check the success flag before the payload shape: a rejected
        // request usually carries `data: null`.
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::Decode(format!("{method} {path}: {e}")))?;
        let data = envelope.into_data()?;
        serde_json::from_value(data)
            .map_err(|e| ClientError::Decode(format!("{method} {path}: {e}")))
    }

    /// Send, then turn non-2xx statuses into errors. A 401 clears the
    /// session before returning.
    async fn send(
        &self,
        req: RequestBuilder,
        method: &Method,
        path: &str,
    ) -> Result<Response, ClientError> {
        debug!(%method, path, "sending request");
        let resp = req.send().await?;
        let status = resp.status();
        debug!(%method, path, status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(resp);
        }

        let body: ErrorBody = resp
            .bytes()
            .await
            .ok()
            .and_then(|b| serde_json::from_slice(&b).ok())
            .unwrap_or_default();
        let message = body
            .message
            .filter(|m| !m.is_empty())
            .or(body.title.filter(|t| !t.is_empty()))
            .unwrap_or_else(|| default_message(status));

        if status == StatusCode::UNAUTHORIZED {
            warn!(%method, path, "unauthorized; clearing session");
            self.session.clear()?;
            return Err(ClientError::Unauthorized { message });
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            errors: body.errors,
        })
    }
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| "An error occurred".to_string())
}
