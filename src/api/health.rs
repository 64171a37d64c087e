//! Liveness check endpoint.

/// GET /healthz - used to check the app is online.
///
/// Always returns 200 regardless of configuration state. Deliberately does
/// not log, so liveness probes don't clutter the output.
pub async fn healthz() -> &'static str {
    "OK"
}
