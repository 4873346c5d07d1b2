use crate::seo::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub base_url: String,
    pub login_url: String,
    pub contact_url: String,

    // Server
    pub port: u16,
    pub admin_api_key: Option<String>,

    // Content
    pub messages_dir: Option<PathBuf>,
    pub blog_posts_file: PathBuf,
    pub blog_reload_schedule: String,

    // Static export
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_url: "/login".to_string(),
            contact_url: "https://lokalingo.com/en/contact".to_string(),
            port: 8080,
            admin_api_key: None,
            messages_dir: None,
            blog_posts_file: PathBuf::from("data/blog-posts.json"),
            blog_reload_schedule: "0 */10 * * * *".to_string(),
            export_dir: PathBuf::from("dist"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Site
            base_url: std::env::var("SITE_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            login_url: std::env::var("LOGIN_URL").unwrap_or(defaults.login_url),
            contact_url: std::env::var("CONTACT_URL").unwrap_or(defaults.contact_url),

            // Server
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("PORT is not a valid port: {}", v))?,
                Err(_) => defaults.port,
            },
            admin_api_key: std::env::var("ADMIN_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            // Content
            messages_dir: std::env::var("MESSAGES_DIR").ok().map(PathBuf::from),
            blog_posts_file: std::env::var("BLOG_POSTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.blog_posts_file),
            blog_reload_schedule: std::env::var("BLOG_RELOAD_SCHEDULE")
                .unwrap_or(defaults.blog_reload_schedule),

            // Static export
            export_dir: std::env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "SITE_BASE_URL",
        "LOGIN_URL",
        "CONTACT_URL",
        "PORT",
        "ADMIN_API_KEY",
        "MESSAGES_DIR",
        "BLOG_POSTS_FILE",
        "BLOG_RELOAD_SCHEDULE",
        "EXPORT_DIR",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let config = Config::from_env().expect("should load");

        assert_eq!(config.base_url, "https://thelivingtextbook.lokalingo.com");
        assert_eq!(config.port, 8080);
        assert_eq!(config.login_url, "/login");
        assert!(config.admin_api_key.is_none());
        assert!(config.messages_dir.is_none());
        assert_eq!(config.blog_posts_file, PathBuf::from("data/blog-posts.json"));
        assert_eq!(config.blog_reload_schedule, "0 */10 * * * *");
        assert_eq!(config.export_dir, PathBuf::from("dist"));
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("SITE_BASE_URL", "http://localhost:3000/");
        std::env::set_var("PORT", "3000");
        std::env::set_var("ADMIN_API_KEY", "secret");
        std::env::set_var("MESSAGES_DIR", "/srv/messages");

        let config = Config::from_env().expect("should load");
        clear_env();

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_api_key.as_deref(), Some("secret"));
        assert_eq!(config.messages_dir, Some(PathBuf::from("/srv/messages")));
    }

    #[test]
    #[serial]
    fn test_blank_api_key_disables_admin() {
        clear_env();
        std::env::set_var("ADMIN_API_KEY", "   ");
        let config = Config::from_env().expect("should load");
        clear_env();

        assert!(config.admin_api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
