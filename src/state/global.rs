//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::client::UserEntry;
use crate::state::page_context::PageContext;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active notifications, newest first
    pub notifications: RwSignal<Vec<Notification>>,
    /// Usernames of accepted friends
    pub friends: RwSignal<Vec<String>>,
    /// Usernames with an outstanding outgoing friend request
    pub pending_requests: RwSignal<Vec<String>>,
    /// Current (already filtered) search results
    pub search_results: RwSignal<Vec<UserEntry>>,
    /// Prompt or empty-result message for the search panel
    pub search_status: RwSignal<Option<String>>,
    /// Token of the most recent search request; stale responses are dropped
    pub search_token: RwSignal<u64>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A notification targeted at the current user
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Notification {
    pub id: i64,
    /// Human-readable action text, e.g. "Friend Request from alice"
    pub verb: String,
    #[serde(default)]
    pub timestamp_ms: i64,
}

/// Prompt shown before any search has been made
pub const SEARCH_PROMPT: &str = "Search for a username above";

/// Provide global state to the component tree, seeded from the page context
pub fn provide_global_state(ctx: &PageContext) {
    let state = GlobalState {
        notifications: create_rw_signal(ctx.notifications.clone()),
        friends: create_rw_signal(ctx.all_friends.clone()),
        pending_requests: create_rw_signal(ctx.pending_outgoing_requests_usernames.clone()),
        search_results: create_rw_signal(Vec::new()),
        search_status: create_rw_signal(Some(SEARCH_PROMPT.to_string())),
        search_token: create_rw_signal(0),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Badge text for the current notification count
    pub fn badge_label(&self) -> Option<String> {
        badge_label(self.notifications.get().len())
    }

    /// Remove a single notification locally
    pub fn remove_notification(&self, id: i64) {
        self.notifications.update(|list| {
            remove_by_id(list, id);
        });
    }

    /// Remove every notification locally
    pub fn clear_notifications(&self) {
        self.notifications.set(Vec::new());
    }

    /// Record an outgoing friend request and drop the user from the results
    pub fn mark_pending(&self, username: &str) {
        let name = username.to_string();
        self.pending_requests.update(|pending| {
            if !pending.contains(&name) {
                pending.push(name);
            }
        });
        self.search_results
            .update(|results| results.retain(|entry| entry.username != username));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Badge text for a notification count: `None` removes the badge entirely
pub fn badge_label(count: usize) -> Option<String> {
    if count == 0 {
        None
    } else {
        Some(format!("{}+", count))
    }
}

/// Drop a notification by id, returning whether anything was removed
pub fn remove_by_id(list: &mut Vec<Notification>, id: i64) -> bool {
    let before = list.len();
    list.retain(|n| n.id != id);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64) -> Notification {
        Notification {
            id,
            verb: format!("Friend Request from user{}", id),
            timestamp_ms: 1_600_000_000_000 + id,
        }
    }

    #[test]
    fn test_badge_label_zero_removes_badge() {
        assert_eq!(badge_label(0), None);
    }

    #[test]
    fn test_badge_label_counts() {
        assert_eq!(badge_label(1), Some("1+".to_string()));
        assert_eq!(badge_label(12), Some("12+".to_string()));
    }

    #[test]
    fn test_remove_by_id_decrements_by_one() {
        let mut list = vec![sample(41), sample(42), sample(43)];
        assert!(remove_by_id(&mut list, 42));
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|n| n.id != 42));
    }

    #[test]
    fn test_remove_by_id_unknown_is_noop() {
        let mut list = vec![sample(1)];
        assert!(!remove_by_id(&mut list, 99));
        assert_eq!(list.len(), 1);
    }
}
