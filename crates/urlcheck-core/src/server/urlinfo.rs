//! `GET /urlinfo/{request_id}/{hostname_and_port}/{*original_path}` handler.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use super::AppState;

const DEFAULT_SCHEME: &str = "http";

#[derive(Debug, Deserialize)]
pub struct UrlInfoQuery {
    /// URL scheme to assume for the lookup; defaults to http.
    scheme: Option<String>,
}

/// Lookup response. PascalCase field names are part of the wire contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UrlInfoResponse {
    pub request_id: String,
    pub url: String,
    pub risk: String,
    pub category: String,
}

/// Reassembles the requested URL from the path parameters, validates it, and
/// reports its reputation. Unknown URLs still answer 200 with
/// `Unknown`/`Unknown` labels; malformed URLs answer 400.
pub async fn get_url_info(
    State(state): State<AppState>,
    Path((request_id, hostname_and_port, original_path)): Path<(String, String, String)>,
    Query(query): Query<UrlInfoQuery>,
) -> Result<Json<UrlInfoResponse>, (StatusCode, Json<Value>)> {
    let scheme = query.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
    let search_url = format!("{scheme}://{hostname_and_port}/{original_path}");

    if !is_well_formed(&search_url, &hostname_and_port) {
        tracing::debug!(%search_url, "rejected malformed lookup url");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid URL" })),
        ));
    }

    let info = state.store.get_info(&search_url);
    tracing::debug!(url = %info.url, risk = %info.risk, "urlinfo lookup");
    Ok(Json(UrlInfoResponse {
        request_id,
        url: info.url,
        risk: info.risk,
        category: info.category,
    }))
}

/// The WHATWG parser folds `\` and friends into the path instead of
/// rejecting them, so a successful parse alone is not enough: the parsed
/// host must still be exactly the one the caller supplied.
fn is_well_formed(search_url: &str, hostname_and_port: &str) -> bool {
    let Ok(parsed) = Url::parse(search_url) else {
        return false;
    };
    let supplied_host = hostname_and_port.split(':').next().unwrap_or("");
    parsed
        .host_str()
        .is_some_and(|host| host.eq_ignore_ascii_case(supplied_host))
}
