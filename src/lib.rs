pub mod api;
pub mod error;
pub mod github;
pub mod signature;
pub mod title;

use std::env;
use std::sync::Arc;

use crate::error::{HookError, Result};
use crate::github::CommentPoster;
use crate::title::TitlePolicy;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Process-wide configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared secret GitHub uses to sign webhook payloads.
    pub shared_secret: String,
    /// Full name ("owner/name") of the one repository this app serves.
    pub repo_full_name: String,
    /// Token for the user/bot that posts the advisory comment.
    pub github_token: String,
    pub bind_address: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            shared_secret: require_env("GITHUB_SHARED_SECRET")?,
            repo_full_name: require_env("GITHUB_REPO_NAME")?,
            github_token: require_env("GITHUB_TOKEN")?,
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }

    /// Splits the configured repo full name into (owner, name).
    pub fn repo_parts(&self) -> Result<(&str, &str)> {
        self.repo_full_name.split_once('/').ok_or_else(|| {
            HookError::Config(format!(
                "GITHUB_REPO_NAME must be of the form owner/name, got '{}'",
                self.repo_full_name
            ))
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| HookError::Config(format!("{} must be set", name)))
}

pub struct AppState<P> {
    pub config: AppConfig,
    pub title_policy: TitlePolicy,
    pub poster: P,
}

pub type SharedState<P> = Arc<AppState<P>>;

impl<P: CommentPoster> AppState<P> {
    pub fn new(config: AppConfig, poster: P) -> Self {
        Self {
            config,
            title_policy: TitlePolicy::new(),
            poster,
        }
    }
}
