//! Notification Panel
//!
//! Topbar bell with badge counter and a dropdown of clearable notifications.
//!
//! Removal is optimistic: the node and badge update immediately, then the
//! server acknowledgement PATCH is fired without retry or rollback.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, Notification};
use crate::state::page_context::PageContext;

/// Bell icon with badge counter and dropdown panel
#[component]
pub fn NotificationBell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (open, set_open) = create_signal(false);

    let state_for_badge = state.clone();

    view! {
        <div class="relative">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="relative p-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            >
                <span class="text-xl">"🔔"</span>

                // Badge counter; removed entirely at zero
                {move || {
                    state_for_badge.badge_label().map(|label| view! {
                        <span
                            id="notifications_badge_counter"
                            class="absolute -top-1 -right-1 bg-red-600 text-white text-xs rounded-full px-1.5 py-0.5"
                        >
                            {label}
                        </span>
                    })
                }}
            </button>

            {move || {
                if open.get() {
                    view! { <NotificationPanel /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Dropdown list of notifications with clear-one and clear-all controls
#[component]
fn NotificationPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ctx = use_context::<PageContext>().expect("PageContext not found");

    let state_for_list = state.clone();
    let state_for_clear = state.clone();
    let csrf_for_clear = ctx.csrftoken.clone();

    let clear_all = move |_| {
        // Local removal first: every node and the badge go away unconditionally
        state_for_clear.clear_notifications();

        let state = state_for_clear.clone();
        let csrf = csrf_for_clear.clone();
        spawn_local(async move {
            match api::clear_all_notifications(&csrf).await {
                Ok(body) => {
                    web_sys::console::log_1(&"Cleared all notifications".into());
                    web_sys::console::log_1(&body.to_string().into());
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="absolute right-0 mt-2 w-80 bg-white border border-gray-200 rounded-xl shadow-lg z-50">
            <div class="flex items-center justify-between px-4 py-3 border-b border-gray-200">
                <span class="font-semibold text-gray-700">"Notifications"</span>
                <button
                    on:click=clear_all
                    class="text-sm text-gray-500 hover:text-gray-800 transition-colors"
                >
                    "Clear all"
                </button>
            </div>

            <ul class="max-h-80 overflow-y-auto">
                {move || {
                    let notifications = state_for_list.notifications.get();
                    if notifications.is_empty() {
                        view! {
                            <li class="px-4 py-6 text-center text-sm text-gray-400">
                                "No new notifications"
                            </li>
                        }.into_view()
                    } else {
                        notifications
                            .into_iter()
                            .map(|n| view! { <NotificationItem notification=n /> })
                            .collect_view()
                    }
                }}
            </ul>
        </div>
    }
}

/// Single notification row with its clear control
#[component]
fn NotificationItem(notification: Notification) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ctx = use_context::<PageContext>().expect("PageContext not found");

    let id = notification.id;
    let csrf = ctx.csrftoken.clone();

    let time = chrono::DateTime::from_timestamp_millis(notification.timestamp_ms)
        .map(|dt| dt.format("%b %d, %H:%M").to_string())
        .unwrap_or_default();

    let clear_one = move |_| {
        // Local removal decrements the badge by exactly one
        state.remove_notification(id);

        let state = state.clone();
        let csrf = csrf.clone();
        spawn_local(async move {
            match api::clear_notification(id, &csrf).await {
                Ok(body) => {
                    web_sys::console::log_1(&"Cleared notification".into());
                    web_sys::console::log_1(&body.to_string().into());
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <li
            id=format!("notification{}", id)
            class="notification flex items-start justify-between px-4 py-3 border-b border-gray-100 last:border-0"
        >
            <div>
                <p class="text-sm text-gray-700">{notification.verb}</p>
                <p class="text-xs text-gray-400 mt-1">{time}</p>
            </div>
            <button
                on:click=clear_one
                class="ml-3 text-gray-400 hover:text-gray-700"
                title="Clear"
            >
                "×"
            </button>
        </li>
    }
}
