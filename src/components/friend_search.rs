//! Friend Search
//!
//! Live search-as-you-type over usernames, filtered against the viewer,
//! accepted friends, and pending outgoing requests.
//!
//! Each trigger bumps a request token; a response that comes back carrying
//! a superseded token is discarded so a stale slow response can never
//! overwrite a fresher one.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::client::UserEntry;
use crate::state::global::{GlobalState, SEARCH_PROMPT};
use crate::state::page_context::PageContext;

/// Search input field; `compact` renders the navbar variant
#[component]
pub fn SearchBar(
    id: &'static str,
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ctx = use_context::<PageContext>().expect("PageContext not found");
    let navigate = use_navigate();

    let class = if compact {
        "w-48 bg-gray-100 rounded-lg px-3 py-1.5 text-sm text-gray-700 \
         border border-gray-200 focus:border-blue-400 focus:outline-none"
    } else {
        "w-full bg-white rounded-lg px-4 py-3 text-gray-700 \
         border border-gray-300 focus:border-blue-400 focus:outline-none"
    };

    view! {
        <input
            type="text"
            id=id
            placeholder="Search users..."
            on:input=move |ev| {
                // The navbar variant reveals the search panel, like the
                // original's tab switch
                if compact {
                    navigate(
                        "/contacts",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                run_search(&state, &ctx, event_target_value(&ev));
            }
            class=class
        />
    }
}

/// Issue a search for `query`, updating the shared result state.
///
/// An empty query resets to the prompt text and issues no request.
pub fn run_search(state: &GlobalState, ctx: &PageContext, query: String) {
    if query.is_empty() {
        state.search_results.set(Vec::new());
        state.search_status.set(Some(SEARCH_PROMPT.to_string()));
        return;
    }

    let token = state.search_token.get() + 1;
    state.search_token.set(token);
    state.loading.set(true);

    let state = state.clone();
    let viewer = ctx.username.clone();
    let friends = state.friends.get();
    let pending = state.pending_requests.get();

    spawn_local(async move {
        let result = api::fetch_usernames(&query).await;

        // A newer request has been issued since; drop this response
        if state.search_token.get() != token {
            return;
        }
        state.loading.set(false);

        match result {
            Ok(entries) => {
                let (visible, status) =
                    apply_search_response(entries, &viewer, &friends, &pending, &query);
                state.search_results.set(visible);
                state.search_status.set(status);
            }
            Err(e) => {
                state.search_results.set(Vec::new());
                state.search_status.set(None);
                state.show_error(&e);
            }
        }
    });
}

/// Filter a server response and derive the panel status message
pub fn apply_search_response(
    entries: Vec<UserEntry>,
    viewer: &str,
    friends: &[String],
    pending: &[String],
    query: &str,
) -> (Vec<UserEntry>, Option<String>) {
    let visible: Vec<UserEntry> = entries
        .into_iter()
        .filter(|entry| entry.username != viewer)
        .filter(|entry| !friends.contains(&entry.username))
        .filter(|entry| !pending.contains(&entry.username))
        .collect();

    if visible.is_empty() {
        (Vec::new(), Some(format!("No users found matching: {}", query)))
    } else {
        (visible, None)
    }
}

/// Result list with per-entry profile links and send-request controls
#[component]
pub fn SearchResults() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_status = state.clone();
    let state_for_list = state.clone();

    view! {
        <div>
            <p id="ErrorText" class="text-gray-500 text-sm mb-2">
                {move || state_for_status.search_status.get().unwrap_or_default()}
            </p>

            <ul id="search-results" class="divide-y divide-gray-200">
                {move || {
                    state_for_list
                        .search_results
                        .get()
                        .into_iter()
                        .map(|entry| view! { <SearchResultItem entry=entry /> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// One search result: username, profile link, send-request button
#[component]
fn SearchResultItem(entry: UserEntry) -> impl IntoView {
    let profile_url = format!("/profile/{}", entry.username);

    view! {
        <li class="flex items-center justify-between py-3">
            <a href=profile_url class="text-gray-800 hover:underline" style="font-size: 1.15rem;">
                {entry.username.clone()}
            </a>

            <AddFriendButton to_user=entry.id username=entry.username />
        </li>
    }
}

/// POSTs the hidden `to_user` form to the friend-request endpoint
#[component]
fn AddFriendButton(to_user: i64, username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ctx = use_context::<PageContext>().expect("PageContext not found");

    let (sending, set_sending) = create_signal(false);

    let on_click = move |_| {
        set_sending.set(true);

        let state = state.clone();
        let action = ctx.friend_request_action.clone();
        let csrf = ctx.csrftoken.clone();
        let username = username.clone();

        spawn_local(async move {
            match api::send_friend_request(&action, to_user, &csrf).await {
                Ok(()) => {
                    state.show_success("Friend Request Sent");
                    state.mark_pending(&username);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <button
            on:click=on_click
            disabled=move || sending.get()
            class="px-3 py-1.5 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                   text-white text-sm rounded-lg font-medium transition-colors"
        >
            {move || if sending.get() { "Sending..." } else { "Add friend" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, username: &str) -> UserEntry {
        UserEntry {
            id,
            username: username.to_string(),
        }
    }

    #[test]
    fn test_filter_excludes_self_friends_and_pending() {
        let entries = vec![
            entry(1, "me"),
            entry(2, "friend"),
            entry(3, "pending"),
            entry(4, "stranger"),
        ];
        let friends = vec!["friend".to_string()];
        let pending = vec!["pending".to_string()];

        let (visible, status) = apply_search_response(entries, "me", &friends, &pending, "e");

        assert_eq!(visible, vec![entry(4, "stranger")]);
        assert_eq!(status, None);
    }

    #[test]
    fn test_empty_result_message_quotes_query() {
        let (visible, status) = apply_search_response(Vec::new(), "me", &[], &[], "zz");
        assert!(visible.is_empty());
        assert_eq!(status, Some("No users found matching: zz".to_string()));
    }

    #[test]
    fn test_fully_filtered_result_reports_no_match() {
        let entries = vec![entry(1, "me")];
        let (visible, status) = apply_search_response(entries, "me", &[], &[], "m");
        assert!(visible.is_empty());
        assert_eq!(status, Some("No users found matching: m".to_string()));
    }

    #[test]
    fn test_server_order_preserved() {
        let entries = vec![entry(3, "carol"), entry(1, "alice"), entry(2, "bob")];
        let (visible, _) = apply_search_response(entries, "me", &[], &[], "a");
        let names: Vec<_> = visible.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }
}
