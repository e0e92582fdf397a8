//! Navigation Component
//!
//! Header navigation bar with brand, links, compact user search, and the
//! notification bell.

use leptos::*;
use leptos_router::*;

use crate::components::friend_search::SearchBar;
use crate::components::notifications::NotificationBell;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🍎"</span>
                        <span class="text-xl font-bold text-gray-800">"CalorieTracker"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/contacts" label="Contacts" />
                    </div>

                    // Compact search and notifications
                    <div class="flex items-center space-x-3">
                        <SearchBar id="searchbarSm" compact=true />
                        <NotificationBell />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            {label}
        </A>
    }
}
