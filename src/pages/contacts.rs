//! Contacts Page
//!
//! Friend management: live user search, accepted friends, and pending
//! outgoing requests.

use leptos::*;

use crate::components::{InlineLoading, SearchBar, SearchResults};
use crate::state::global::GlobalState;

/// Contacts page component
#[component]
pub fn Contacts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_spinner = state.clone();
    let state_for_friends = state.clone();
    let state_for_pending = state;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-800">"Contacts"</h1>
                <p class="text-gray-500 mt-1">"Find users and manage your friends"</p>
            </div>

            // Live user search
            <section class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
                <div class="flex items-center space-x-3 mb-4">
                    <h2 class="text-xl font-semibold text-gray-800">"Search Users"</h2>
                    {move || {
                        if state_for_spinner.loading.get() {
                            view! { <InlineLoading /> }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>

                <SearchBar id="searchbarLg" />

                <div class="mt-4">
                    <SearchResults />
                </div>
            </section>

            // Accepted friends
            <section class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">"Friends"</h2>

                <ul class="divide-y divide-gray-200">
                    {move || {
                        let friends = state_for_friends.friends.get();
                        if friends.is_empty() {
                            view! {
                                <li class="py-3 text-sm text-gray-400">"No friends yet"</li>
                            }.into_view()
                        } else {
                            friends
                                .into_iter()
                                .map(|username| {
                                    let profile_url = format!("/profile/{}", username);
                                    view! {
                                        <li class="py-3">
                                            <a
                                                href=profile_url
                                                class="text-gray-800 hover:underline"
                                            >
                                                {username}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }}
                </ul>
            </section>

            // Pending outgoing requests
            <section class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">"Pending Requests"</h2>

                <ul class="divide-y divide-gray-200">
                    {move || {
                        let pending = state_for_pending.pending_requests.get();
                        if pending.is_empty() {
                            view! {
                                <li class="py-3 text-sm text-gray-400">"No pending requests"</li>
                            }.into_view()
                        } else {
                            pending
                                .into_iter()
                                .map(|username| view! {
                                    <li class="py-3 text-gray-600">{username}</li>
                                })
                                .collect_view()
                        }
                    }}
                </ul>
            </section>
        </div>
    }
}
