//! HTTP API Client
//!
//! Functions for communicating with the calorie tracker REST API.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

/// Local storage key for overriding the API base URL
const API_BASE_KEY: &str = "calorietracker_api_url";

/// Get the API base URL from local storage, or derive it from the page origin
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                origin_api_base()
            }
        } else {
            origin_api_base()
        }
    } else {
        origin_api_base()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// API base on the serving origin, matching the server's URL layout
fn origin_api_base() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/api", origin)
}

// ============ Response Types ============

/// A username search result entry
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserEntry {
    pub id: i64,
    pub username: String,
}

// ============ API Functions ============

/// Fetch usernames starting with the given query
pub async fn fetch_usernames(query: &str) -> Result<Vec<UserEntry>, String> {
    let api_base = get_api_base();
    let encoded = String::from(js_sys::encode_uri_component(query));

    let response = Request::get(&format!("{}/usernames/{}/", api_base, encoded))
        .credentials(RequestCredentials::SameOrigin)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Username search failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Acknowledge a single notification server-side
pub async fn clear_notification(id: i64, csrf: &str) -> Result<serde_json::Value, String> {
    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/notification/{}/clear/", api_base, id))
        .credentials(RequestCredentials::SameOrigin)
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .header("X-CSRFToken", csrf)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Clear failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Acknowledge every notification server-side
pub async fn clear_all_notifications(csrf: &str) -> Result<serde_json::Value, String> {
    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/notifications/clear/", api_base))
        .credentials(RequestCredentials::SameOrigin)
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .header("X-CSRFToken", csrf)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Clear failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a friend request by posting the hidden `to_user` form
pub async fn send_friend_request(action: &str, to_user: i64, csrf: &str) -> Result<(), String> {
    let body = format!(
        "csrfmiddlewaretoken={}&to_user={}",
        String::from(js_sys::encode_uri_component(csrf)),
        to_user
    );

    let response = Request::post(action)
        .credentials(RequestCredentials::SameOrigin)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("X-Requested-With", "XMLHttpRequest")
        .header("X-CSRFToken", csrf)
        .body(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Friend request failed: HTTP {}", response.status()));
    }

    Ok(())
}
