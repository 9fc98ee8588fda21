use async_trait::async_trait;
use serde::Deserialize;

/// Best-effort lookup of a profile picture for a provider access token
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// `None` when the picture cannot be fetched for any reason
    async fn fetch_avatar(&self, access_token: &str) -> Option<String>;
}

/// Subset of the People API `people.get` response with `personFields=photos`
#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct PeopleResponse {
    #[serde(default)]
    pub(super) photos: Option<Vec<Photo>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct Photo {
    #[serde(default)]
    pub(super) url: Option<String>,
}

impl PeopleResponse {
    pub(super) fn first_photo_url(self) -> Option<String> {
        self.photos?
            .into_iter()
            .next()?
            .url
            .filter(|url| !url.is_empty())
    }
}
