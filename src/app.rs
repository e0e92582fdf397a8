//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Contacts, Dashboard, Profile};
use crate::state::global::provide_global_state;
use crate::state::page_context::PageContext;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Snapshot the server-injected globals once, then provide everything
    // through context; no component reads a JS global directly
    let ctx = PageContext::from_window();
    provide_global_state(&ctx);
    provide_context(ctx);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-800 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/contacts" view=Contacts />
                        <Route path="/profile/:username" view=Profile />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
