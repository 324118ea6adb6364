use crate::api::{API_URL_ENV, DEFAULT_API_URL};
use crate::error::{GalleryError, Result};
use crate::filters::Filter;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "gallery", about = "Browse a portfolio gallery and filter it by category")]
pub struct CliConfig {
    /// Base URL of the portfolio backend
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Start with this category selected
    #[arg(long)]
    pub category: Option<i64>,

    /// Render the page to an HTML file and exit
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_url).map_err(|e| GalleryError::Config {
            message: format!("invalid API URL '{}': {}", self.api_url, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GalleryError::Config {
                message: format!("API URL must use http or https, got '{}'", parsed.scheme()),
            });
        }
        Ok(())
    }

    pub fn initial_filter(&self) -> Filter {
        self.category.map_or(Filter::All, Filter::Category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str) -> CliConfig {
        CliConfig {
            api_url: api_url.to_string(),
            category: None,
            export: None,
            verbose: false,
        }
    }

    #[test]
    fn accepts_http_urls() {
        assert!(config("http://localhost:5678").validate().is_ok());
        assert!(config("https://portfolio.example.com/").validate().is_ok());
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(matches!(config("not a url").validate(), Err(GalleryError::Config { .. })));
        assert!(matches!(config("ftp://host").validate(), Err(GalleryError::Config { .. })));
    }

    #[test]
    fn parses_flags() {
        let cfg = CliConfig::try_parse_from([
            "gallery",
            "--api-url",
            "http://127.0.0.1:9000",
            "--category",
            "2",
            "--export",
            "out.html",
        ])
        .unwrap();
        assert_eq!(cfg.api_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.initial_filter(), Filter::Category(2));
        assert_eq!(cfg.export, Some(PathBuf::from("out.html")));
        assert_eq!(config("http://x").initial_filter(), Filter::All);
    }

    #[test]
    fn api_url_falls_back_to_env_then_default() {
        let cfg = CliConfig::try_parse_from(["gallery"]).unwrap();
        let expected = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        assert_eq!(cfg.api_url, expected);
        assert!(!cfg.verbose);
    }
}
