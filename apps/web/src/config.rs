use anyhow::{Context, Result};

use crate::projector::{LanguageVisibility, ProjectorOptions};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the profile data source, e.g. `https://example.com`.
    pub upstream_base_url: String,
    /// Hosts the image proxy is willing to fetch from.
    pub allowed_image_hosts: Vec<String>,
    pub projector: ProjectorOptions,
    pub port: u16,
    pub rust_log: String,
}

/// Remote avatar hosts seen in production profiles.
const DEFAULT_IMAGE_HOSTS: &str = "media.licdn.com,img.clerk.com";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let projector = ProjectorOptions {
            always_show_about: bool_env("ALWAYS_SHOW_ABOUT", false)?,
            language_visibility: match std::env::var("LANGUAGE_VISIBILITY").as_deref() {
                Ok("any") => LanguageVisibility::Any,
                Ok("several") | Err(_) => LanguageVisibility::Several,
                Ok(other) => anyhow::bail!(
                    "LANGUAGE_VISIBILITY must be 'any' or 'several', got '{other}'"
                ),
            },
            show_proficiency_meter: bool_env("SHOW_PROFICIENCY_METER", true)?,
        };

        Ok(Config {
            upstream_base_url: require_env("UPSTREAM_BASE_URL")?,
            allowed_image_hosts: std::env::var("IMAGE_PROXY_ALLOWED_HOSTS")
                .unwrap_or_else(|_| DEFAULT_IMAGE_HOSTS.to_string())
                .split(',')
                .map(|h| h.trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
            projector,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn bool_env(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => match v.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            other => anyhow::bail!("'{key}' must be a boolean, got '{other}'"),
        },
    }
}
