//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use anyhow::bail;

/// How error responses are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorFormat {
    /// `text/plain` body carrying only the message.
    #[default]
    Plain,
    /// RFC 7807 Problem Details JSON.
    Problem,
}

impl FromStr for ErrorFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(ErrorFormat::Plain),
            "problem" | "json" => Ok(ErrorFormat::Problem),
            other => bail!("unknown ERROR_FORMAT `{other}` (expected `plain` or `problem`)"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix the blog posts router is mounted under.
    pub posts_path: String,
    /// Load the example posts at startup.
    pub seed_posts: bool,
    pub error_format: ErrorFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            posts_path: "/blog-posts".to_string(),
            seed_posts: true,
            error_format: ErrorFormat::Plain,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let error_format = match env::var("ERROR_FORMAT") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.error_format,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            posts_path: env::var("BLOG_POSTS_PATH")
                .map(|p| normalize_path(&p))
                .unwrap_or(defaults.posts_path),
            seed_posts: env::var("SEED_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_posts),
            error_format,
        })
    }
}

/// Ensure a leading slash and no trailing slash, so the prefix joins cleanly
/// with route paths. The root prefix becomes the empty string.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_format() {
        assert_eq!("plain".parse::<ErrorFormat>().unwrap(), ErrorFormat::Plain);
        assert_eq!("Problem".parse::<ErrorFormat>().unwrap(), ErrorFormat::Problem);
        assert!("xml".parse::<ErrorFormat>().is_err());
    }

    #[test]
    fn normalizes_mount_path() {
        assert_eq!(normalize_path("blog-posts/"), "/blog-posts");
        assert_eq!(normalize_path("/api/posts"), "/api/posts");
        assert_eq!(normalize_path("/"), "");
    }
}
