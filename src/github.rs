//! GitHub wire types and the comment-posting client.

use std::future::Future;

use reqwest::header;
use serde::Deserialize;
use serde_json::json;

use crate::error::{HookError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("pr_title_guard/", env!("CARGO_PKG_VERSION"));

/// Payload of a `pull_request` webhook event.
///
/// Only the fields this app reads; everything else in the delivery is
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub number: u64,
    pub pull_request: PullRequest,
    pub repository: Repository,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

/// Capability to leave a comment on a pull request.
///
/// The webhook handler depends on this rather than a concrete HTTP client
/// so tests can substitute a fake.
pub trait CommentPoster: Send + Sync {
    fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Posts comments through the GitHub REST API.
pub struct HttpCommentPoster {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl HttpCommentPoster {
    pub fn new(token: String) -> Self {
        Self::with_api_base(token, GITHUB_API_BASE.to_string())
    }

    /// Overrides the API base URL; tests point this at a local mock server.
    pub fn with_api_base(token: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            token,
        }
    }
}

impl CommentPoster for HttpCommentPoster {
    async fn create_comment(&self, owner: &str, repo: &str, number: u64, body: &str) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base, owner, repo, number
        );

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, USER_AGENT)
            .json(&json!({ "body": body }))
            .send()
            .await
            .map_err(|e| HookError::CommentPost(e.to_string()))?;

        if !response.status().is_success() {
            return Err(HookError::CommentPost(format!(
                "GitHub responded with status {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn pull_request_event_deserializes_from_a_delivery() {
        let raw = r#"{
            "action": "opened",
            "number": 42,
            "pull_request": {
                "title": "[stable/mariadb] fix typo",
                "state": "open",
                "draft": false
            },
            "repository": {
                "full_name": "helm/charts",
                "private": false
            },
            "sender": { "login": "someone" }
        }"#;

        let event: PullRequestEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.action, "opened");
        assert_eq!(event.number, 42);
        assert_eq!(event.pull_request.title, "[stable/mariadb] fix typo");
        assert_eq!(event.repository.full_name, "helm/charts");
    }

    #[tokio::test]
    async fn posts_to_the_issue_comments_endpoint() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/repos/helm/charts/issues/42/comments")
            .match_header("authorization", "Bearer test_token")
            .match_header("accept", "application/vnd.github+json")
            .match_body(mockito::Matcher::Json(json!({ "body": "please fix" })))
            .with_status(201)
            .with_body(r#"{"id": 1}"#)
            .create_async()
            .await;

        let poster = HttpCommentPoster::with_api_base("test_token".to_string(), server.url());
        poster
            .create_comment("helm", "charts", 42, "please fix")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_2xx_response_is_an_error() {
        let mut server = Server::new_async().await;

        server
            .mock("POST", "/repos/helm/charts/issues/42/comments")
            .with_status(403)
            .create_async()
            .await;

        let poster = HttpCommentPoster::with_api_base("test_token".to_string(), server.url());
        let err = poster
            .create_comment("helm", "charts", 42, "please fix")
            .await
            .unwrap_err();

        assert!(matches!(err, HookError::CommentPost(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        // Nothing listens on this port.
        let poster = HttpCommentPoster::with_api_base(
            "test_token".to_string(),
            "http://127.0.0.1:9".to_string(),
        );
        let err = poster
            .create_comment("helm", "charts", 42, "please fix")
            .await
            .unwrap_err();

        assert!(matches!(err, HookError::CommentPost(_)));
    }
}
