//! Webhook handler for GitHub pull_request events.

use axum::{
    Json,
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::SharedState;
use crate::error::HookError;
use crate::github::{CommentPoster, PullRequestEvent};
use crate::signature::verify_github_signature;
use crate::title::TITLE_HINT_COMMENT;

/// Header carrying the HMAC-SHA1 signature of the payload.
const HEADER_SIGNATURE: &str = "X-Hub-Signature";
/// Header carrying the GitHub event type.
const HEADER_EVENT: &str = "X-GitHub-Event";

/// JSON body returned for acknowledged requests.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: &'static str,
}

/// Handles the GitHub webhook POST request.
///
/// Verifies the payload signature, then filters down to `opened`
/// pull_request events for the configured repository and leaves an advisory
/// comment when the PR title misses the naming convention. Everything else
/// is acknowledged without side effects.
pub async fn handle_webhook<P: CommentPoster>(
    AxumState(state): AxumState<SharedState<P>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Ack>), HookError> {
    // Validate payload before touching it
    let signature = headers
        .get(HEADER_SIGNATURE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            error!("no {} header supplied", HEADER_SIGNATURE);
            HookError::MissingSignature
        })?;

    if !verify_github_signature(&state.config.shared_secret, &body, signature) {
        error!("payload failed signature verification");
        return Err(HookError::SignatureMismatch);
    }

    // We are only interested in pull requests
    let event = headers.get(HEADER_EVENT).and_then(|v| v.to_str().ok());
    if event != Some("pull_request") {
        info!("skipping {:?} event", event);
        return Ok((
            StatusCode::OK,
            Json(Ack {
                message: "Skipping event type",
            }),
        ));
    }

    let payload: PullRequestEvent = serde_json::from_slice(&body).map_err(|e| {
        error!("failed to parse pull_request payload: {}", e);
        HookError::MalformedBody(e)
    })?;

    // Filter by repo name
    if payload.repository.full_name != state.config.repo_full_name {
        warn!(
            "payload submitted for wrong repo '{}'",
            payload.repository.full_name
        );
        return Err(HookError::WrongRepository(payload.repository.full_name));
    }

    // Filter pull request actions we aren't interested in, like labels
    // being added or removed
    if payload.action != "opened" {
        info!(
            "skipping '{}' action for PR #{}",
            payload.action, payload.number
        );
        return Ok((
            StatusCode::OK,
            Json(Ack {
                message: "Skipping action",
            }),
        ));
    }

    // Check the title of the PR and leave a comment if it misses the format
    if !state.title_policy.is_valid(&payload.pull_request.title) {
        let (owner, repo) = state.config.repo_parts()?;
        info!(
            "PR #{} title does not match the required format, leaving comment",
            payload.number
        );
        state
            .poster
            .create_comment(owner, repo, payload.number, TITLE_HINT_COMMENT)
            .await
            .map_err(|e| {
                error!("failed to post comment to PR #{}: {}", payload.number, e);
                e
            })?;
    }

    Ok((StatusCode::OK, Json(Ack { message: "Success" })))
}
