use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::utils::build_http_client;

use super::config::AppwriteConfig;
use super::errors::IdentityError;
use super::types::{Account, IdentityProvider, OAuthProvider, ProviderSession};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const SESSION_HEADER: &str = "X-Appwrite-Session";

/// REST client for the Appwrite account API
///
/// Cloning is cheap; the underlying connection pool is shared. Use
/// [`AppwriteAccountClient::with_session`] to get a handle bound to one caller.
#[derive(Debug, Clone)]
pub struct AppwriteAccountClient {
    client: reqwest::Client,
    config: AppwriteConfig,
    session: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AppwriteErrorBody {
    #[serde(default)]
    message: String,
}

impl AppwriteAccountClient {
    pub fn new(config: AppwriteConfig) -> Result<Self, IdentityError> {
        Ok(Self::with_client(build_http_client()?, config))
    }

    pub fn with_client(client: reqwest::Client, config: AppwriteConfig) -> Self {
        Self {
            client,
            config,
            session: None,
        }
    }

    /// A handle that acts on behalf of the session identified by `secret`
    pub fn with_session(&self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
            session: (!secret.is_empty()).then_some(secret),
        }
    }

    pub fn config(&self) -> &AppwriteConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, IdentityError> {
        let Some(session) = &self.session else {
            tracing::debug!("No session bound to identity client");
            return Err(IdentityError::NoSession);
        };

        Ok(self
            .client
            .request(method, format!("{}{}", self.config.endpoint, path))
            .header(PROJECT_HEADER, &self.config.project_id)
            .header(SESSION_HEADER, session))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, IdentityError> {
        let response = self.request(Method::GET, path)?.send().await?;
        let response = check_status(response).await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| IdentityError::Serde(e.to_string()))
    }
}

async fn check_status(response: Response) -> Result<Response, IdentityError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(IdentityError::NoSession);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<AppwriteErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);

    Err(IdentityError::Service {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl IdentityProvider for AppwriteAccountClient {
    #[tracing::instrument(skip(self))]
    async fn get_current_account(&self) -> Result<Account, IdentityError> {
        self.get_json("/account").await
    }

    #[tracing::instrument(skip(self))]
    async fn get_current_session(&self) -> Result<ProviderSession, IdentityError> {
        self.get_json("/account/sessions/current").await
    }

    async fn create_oauth2_session(
        &self,
        provider: OAuthProvider,
        success_url: &str,
        failure_url: &str,
    ) -> Result<String, IdentityError> {
        let mut url = Url::parse(&format!(
            "{}/account/sessions/oauth2/{}",
            self.config.endpoint, provider
        ))
        .map_err(|e| IdentityError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("project", &self.config.project_id)
            .append_pair("success", success_url)
            .append_pair("failure", failure_url);

        tracing::debug!(provider = %provider, "Prepared OAuth2 session url");
        Ok(url.into())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_current_session(&self) -> Result<(), IdentityError> {
        let response = self
            .request(Method::DELETE, "/account/sessions/current")?
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
