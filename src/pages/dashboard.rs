//! Dashboard Page
//!
//! Main view: calorie trend chart, goal breakdown doughnut, and a snapshot
//! of the latest logged values.

use leptos::*;

use crate::components::chart::CALORIE_CHART_ID;
use crate::components::pie_chart::PIE_CHART_ID;
use crate::components::{CalorieChart, ChartDownloadLink, PieChart, SeriesSpec};
use crate::state::page_context::PageContext;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not found");

    let mut series = vec![
        SeriesSpec::goal(ctx.goal_calories_in.clone()),
        SeriesSpec::intake(ctx.calories_in.clone()),
    ];
    if !ctx.estimated_tdee.is_empty() {
        series.push(SeriesSpec::tdee(ctx.estimated_tdee.clone()));
    }

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-800">"Dashboard"</h1>
                <p class="text-gray-500 mt-1">"Your caloric intake at a glance"</p>
            </div>

            // Snapshot of the latest logged values
            <section>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <SnapshotCard label="Last Caloric Intake" value=last_value(&ctx.calories_in) />
                    <SnapshotCard label="Goal Caloric Intake" value=last_value(&ctx.goal_calories_in) />
                    <SnapshotCard label="Estimated TDEE" value=last_value(&ctx.estimated_tdee) />
                </div>
            </section>

            // Calorie trend chart
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

            // Goal breakdown doughnut
            <section class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold text-gray-800">"Days vs. Goal"</h2>
                    <ChartDownloadLink
                        canvas_id=PIE_CHART_ID
                        anchor_id="downloadCIPC"
                        file_name="days-vs-goal.jpg"
                    />
                </div>

                <PieChart
                    labels=ctx.pie_labels.clone()
                    values=vec![ctx.pie_cal_in_red, ctx.pie_cal_in_green, ctx.pie_cal_in_yellow]
                />
            </section>
        </div>
    }
}

/// Small card showing the most recent value of a series
#[component]
fn SnapshotCard(label: &'static str, value: Option<f64>) -> impl IntoView {
    view! {
        <div class="bg-white border border-gray-200 rounded-lg p-4 shadow-sm">
            <span class="text-gray-500 text-sm">{label}</span>
            <div class="text-3xl font-bold text-gray-800 mt-2">
                {value
                    .map(|v| format!("{:.0}", v))
                    .unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}

/// Last element of a series, if any
fn last_value(data: &[f64]) -> Option<f64> {
    data.last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_value() {
        assert_eq!(last_value(&[1800.0, 2100.0]), Some(2100.0));
        assert_eq!(last_value(&[]), None);
    }
}
