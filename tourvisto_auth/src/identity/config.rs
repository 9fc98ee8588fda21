use crate::config::{ConfigError, parse_url, required_env};

/// Connection settings for the Appwrite account service
#[derive(Debug, Clone, PartialEq)]
pub struct AppwriteConfig {
    /// API endpoint such as `https://cloud.appwrite.io/v1`, without a trailing slash
    pub endpoint: String,
    pub project_id: String,
}

impl AppwriteConfig {
    pub fn new(endpoint: &str, project_id: &str) -> Result<Self, ConfigError> {
        parse_url("APPWRITE_API_ENDPOINT", endpoint)?;
        if project_id.trim().is_empty() {
            return Err(ConfigError::Missing("APPWRITE_PROJECT_ID"));
        }
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            &required_env("APPWRITE_API_ENDPOINT")?,
            &required_env("APPWRITE_PROJECT_ID")?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appwrite_config_trims_endpoint() {
        let config = AppwriteConfig::new("https://cloud.appwrite.io/v1/", "tourvisto")
            .expect("valid config");
        assert_eq!(config.endpoint, "https://cloud.appwrite.io/v1");
        assert_eq!(config.project_id, "tourvisto");
    }

    #[test]
    fn test_appwrite_config_validation() {
        assert!(matches!(
            AppwriteConfig::new("cloud.appwrite.io", "tourvisto"),
            Err(ConfigError::Invalid {
                name: "APPWRITE_API_ENDPOINT",
                ..
            })
        ));
        assert_eq!(
            AppwriteConfig::new("https://cloud.appwrite.io/v1", " "),
            Err(ConfigError::Missing("APPWRITE_PROJECT_ID"))
        );
    }
}
