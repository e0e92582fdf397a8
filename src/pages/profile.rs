//! Profile Page
//!
//! A user's profile with their caloric intake trend.

use leptos::*;
use leptos_router::*;

use crate::components::chart::CALORIE_CHART_ID;
use crate::components::{CalorieChart, ChartDownloadLink, SeriesSpec};
use crate::state::page_context::PageContext;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not found");
    let params = use_params_map();

    let username = move || {
        params
            .with(|p| p.get("username").cloned())
            .unwrap_or_default()
    };

    let series = vec![SeriesSpec::profile_intake(ctx.calories_in.clone())];

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-800">{username}</h1>
                <p class="text-gray-500 mt-1">"Caloric intake history"</p>
            </div>

            // Intake trend chart
            <section class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold text-gray-800">"Caloric Intake"</h2>
                    <ChartDownloadLink
                        canvas_id=CALORIE_CHART_ID
                        anchor_id="downloadCIC"
                        file_name="caloric-intake.jpg"
                    />
                </div>

                <CalorieChart labels=ctx.timestamps.clone() series=series />
            </section>
        </div>
    }
}
