use async_trait::async_trait;
use std::{env, sync::LazyLock};

use crate::utils::build_http_client;

use super::errors::ProfileError;
use super::types::{PeopleResponse, ProfileProvider};

/// People API endpoint returning the signed-in user's photos
pub(crate) static GOOGLE_PEOPLE_API_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("GOOGLE_PEOPLE_API_URL").unwrap_or_else(|_| {
        "https://people.googleapis.com/v1/people/me?personFields=photos".to_string()
    })
});

#[derive(Debug, Clone)]
pub struct GooglePeopleClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GooglePeopleClient {
    pub fn new() -> Result<Self, ProfileError> {
        Ok(Self::with_endpoint(
            build_http_client()?,
            GOOGLE_PEOPLE_API_URL.as_str(),
        ))
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    async fn fetch_photo_url(&self, access_token: &str) -> Result<Option<String>, ProfileError> {
        let response = self
            .client
            .get(&self.endpoint)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let people: PeopleResponse =
            serde_json::from_str(&body).map_err(|e| ProfileError::Serde(e.to_string()))?;

        Ok(people.first_photo_url())
    }
}

#[async_trait]
impl ProfileProvider for GooglePeopleClient {
    async fn fetch_avatar(&self, access_token: &str) -> Option<String> {
        match self.fetch_photo_url(access_token).await {
            Ok(url) => {
                tracing::debug!(found = url.is_some(), "Profile picture lookup completed");
                url
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching Google picture");
                None
            }
        }
    }
}
