//! HTTP helpers for the Shopme backend JSON API with consistent timeouts and
//! error handling. Feature clients use these helpers to avoid duplicating
//! request setup and to enforce a predictable timeout policy. The dashboard
//! only reads data, so every helper issues GET requests.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON from the configured backend.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches JSON and returns `None` when the record does not exist. The
/// backend reports a missing user either as a 404 or as a JSON `null`
/// body, so both are folded into `Ok(None)`.
pub async fn get_optional_json<T: DeserializeOwned>(path: &str) -> Result<Option<T>, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_optional_json_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Parses optional JSON responses and treats 404 or a `null` body as absent.
async fn handle_optional_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<Option<T>, AppError> {
    if response.ok() {
        response
            .json::<Option<T>>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        if status == 404 {
            return Ok(None);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, sanitize_body};

    #[test]
    fn build_url_with_base_joins_and_trims_slashes() {
        assert_eq!(
            build_url_with_base("https://backend.shopme.app/", "/api/user/getConsumers"),
            "https://backend.shopme.app/api/user/getConsumers"
        );
        assert_eq!(
            build_url_with_base("  https://backend.shopme.app ", "api/user/getResellers"),
            "https://backend.shopme.app/api/user/getResellers"
        );
    }

    #[test]
    fn build_url_with_base_accepts_empty_base() {
        assert_eq!(
            build_url_with_base("", "/api/post/getPostByUserId/?userId=42"),
            "/api/post/getPostByUserId/?userId=42"
        );
    }

    #[test]
    fn build_url_with_base_formats_every_endpoint() {
        // The backend routes are case sensitive, getReqByUserid included.
        let paths = [
            "/api/user/getConsumers",
            "/api/user/getResellers",
            "/api/user/getConsumer/?id=663a01",
            "/api/user/getReseller/?id=663a01",
            "/api/post/getPostByUserId/?userId=663a01",
            "/api/requirement/getReqByUserid/?userId=663a01",
            "/api/catalog/getAllByUserId/?userId=663a01",
        ];

        for path in paths {
            assert_eq!(
                build_url_with_base("https://backend.shopme.app", path),
                format!("https://backend.shopme.app{path}")
            );
        }
    }

    #[test]
    fn sanitize_body_trims_truncates_and_defaults() {
        assert_eq!(sanitize_body("  \n ".to_string()), "Request failed.");
        assert_eq!(sanitize_body(" oops ".to_string()), "oops");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).chars().count(), 200);
    }
}
