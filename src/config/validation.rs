use crate::config::types::{Config, CrawlConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl target configuration
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_base_url("base-url", &config.base_url)?;
    validate_base_url("author-base-url", &config.author_base_url)?;

    if let Some(agent) = &config.user_agent {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be blank".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates that a configured URL is absolute, http(s), and has a host
fn validate_base_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} must use http or https, got '{}'",
            field,
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "{} must include a host",
            field
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.quotes_path.is_empty() {
        return Err(ConfigError::Validation(
            "quotes_path cannot be empty".to_string(),
        ));
    }

    if config.authors_path.is_empty() {
        return Err(ConfigError::Validation(
            "authors_path cannot be empty".to_string(),
        ));
    }

    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("base-url", "https://quotes.toscrape.com").is_ok());
        assert!(validate_base_url("base-url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_base_url("base-url", "http://example.com/quotes").is_ok());

        assert!(validate_base_url("base-url", "").is_err());
        assert!(validate_base_url("base-url", "not a url").is_err());
        assert!(validate_base_url("base-url", "ftp://example.com").is_err());
        assert!(validate_base_url("base-url", "/just/a/path").is_err());
    }

    #[test]
    fn test_blank_user_agent_rejected() {
        let config = CrawlConfig {
            base_url: "https://quotes.toscrape.com".to_string(),
            author_base_url: "http://quotes.toscrape.com".to_string(),
            user_agent: Some("   ".to_string()),
        };

        let result = validate_crawl_config(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_output_paths_rejected() {
        let config = OutputConfig {
            quotes_path: String::new(),
            authors_path: "./authors.json".to_string(),
            database_path: "./quotes.db".to_string(),
        };

        assert!(validate_output_config(&config).is_err());
    }
}
