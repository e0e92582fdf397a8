//! Page Context
//!
//! Typed snapshot of the values the server template injects into the page
//! as JS globals. Everything is read once at startup; components receive the
//! snapshot through Leptos context instead of touching globals themselves.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::global::Notification;

/// Snapshot of the server-injected page globals.
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    /// Logged-in user.
    pub username: String,
    /// Anti-forgery token for state-changing requests.
    pub csrftoken: String,
    /// Usernames of accepted friends.
    pub all_friends: Vec<String>,
    /// Usernames with an outstanding outgoing friend request.
    pub pending_outgoing_requests_usernames: Vec<String>,
    /// X-axis labels for the calorie chart.
    pub timestamps: Vec<String>,
    /// Logged caloric intake per day.
    pub calories_in: Vec<f64>,
    /// Goal caloric intake per day.
    pub goal_calories_in: Vec<f64>,
    /// Estimated TDEE per day, may be empty.
    pub estimated_tdee: Vec<f64>,
    /// Doughnut segment labels.
    pub pie_labels: Vec<String>,
    /// Days over goal.
    pub pie_cal_in_red: f64,
    /// Days on goal.
    pub pie_cal_in_green: f64,
    /// Days close to goal.
    pub pie_cal_in_yellow: f64,
    /// Notifications rendered by the server at page load.
    pub notifications: Vec<Notification>,
    /// POST target for sending a friend request.
    pub friend_request_action: String,
}

impl PageContext {
    /// Read the snapshot from the JS global scope.
    pub fn from_window() -> Self {
        Self {
            username: read_global_json("username").unwrap_or_default(),
            csrftoken: csrf_token(),
            all_friends: read_global_json("all_friends").unwrap_or_default(),
            pending_outgoing_requests_usernames: read_global_json(
                "pending_outgoing_requests_usernames",
            )
            .unwrap_or_default(),
            timestamps: read_global_json("timestamps").unwrap_or_default(),
            calories_in: read_global_json("calories_in").unwrap_or_default(),
            goal_calories_in: read_global_json("goal_calories_in").unwrap_or_default(),
            estimated_tdee: read_global_json("estimated_TDEE").unwrap_or_default(),
            pie_labels: read_global_json("pie_labels").unwrap_or_default(),
            pie_cal_in_red: read_global_json("pie_cal_in_red").unwrap_or_default(),
            pie_cal_in_green: read_global_json("pie_cal_in_green").unwrap_or_default(),
            pie_cal_in_yellow: read_global_json("pie_cal_in_yellow").unwrap_or_default(),
            notifications: read_global_json("notifications").unwrap_or_default(),
            friend_request_action: read_global_json("friend_request_action")
                .unwrap_or_else(|| "/send_friend_request/".to_string()),
        }
    }
}

/// Read a raw JS global, treating `undefined`/`null` as absent.
fn read_global(key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Read a JS global and decode it through its JSON representation.
fn read_global_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = read_global(key)?;
    let json = js_sys::JSON::stringify(&raw).ok()?;
    serde_json::from_str(&String::from(json)).ok()
}

/// CSRF token for this page.
///
/// Sourced from the `csrftoken` cookie; a template-injected global of the
/// same name is the fallback when the cookie is absent.
pub fn csrf_token() -> String {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Ok(html_doc) = document.dyn_into::<web_sys::HtmlDocument>() {
                if let Ok(cookies) = html_doc.cookie() {
                    if let Some(token) = cookie_value(&cookies, "csrftoken") {
                        return token;
                    }
                }
            }
        }
    }

    read_global_json("csrftoken").unwrap_or_default()
}

/// Extract a named cookie from a `document.cookie` string.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_found() {
        let cookies = "sessionid=abc123; csrftoken=tok456; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("tok456".to_string()));
    }

    #[test]
    fn test_cookie_value_first_entry() {
        assert_eq!(
            cookie_value("csrftoken=solo", "csrftoken"),
            Some("solo".to_string())
        );
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("sessionid=abc123", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn test_cookie_value_no_partial_name_match() {
        let cookies = "xcsrftoken=wrong; csrftoken=right";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("right".to_string()));
    }
}
