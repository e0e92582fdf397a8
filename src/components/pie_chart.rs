//! Pie Chart Component
//!
//! Doughnut breakdown of days over/on/close to the calorie goal.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas id the doughnut chart mounts against
pub const PIE_CHART_ID: &str = "piechartCalories";

/// Segment colors: over goal, on goal, close to goal
pub const SEGMENT_COLORS: [&str; 3] = ["#DC143C", "#3CB371", "#cadf4f"];

const BACKGROUND_COLOR: &str = "#ffffff";
/// Inner radius as a fraction of the outer radius
const CUTOUT_RATIO: f64 = 0.6;

/// Doughnut chart component with legend
#[component]
pub fn PieChart(labels: Vec<String>, values: Vec<f64>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let values_for_draw = values.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_doughnut(&canvas, &values_for_draw);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                id=PIE_CHART_ID
                width="400"
                height="400"
                class="w-full h-64 rounded-lg"
            />

            <PieLegend labels=labels values=values />
        </div>
    }
}

/// Legend showing segment colors and labels
#[component]
fn PieLegend(labels: Vec<String>, values: Vec<f64>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {labels
                .into_iter()
                .zip(values)
                .enumerate()
                .map(|(idx, (label, value))| {
                    let color = SEGMENT_COLORS[idx % SEGMENT_COLORS.len()];
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">
                                {format!("{} ({:.0})", label, value)}
                            </span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Draw the doughnut on canvas
pub fn draw_doughnut(canvas: &HtmlCanvasElement, values: &[f64]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&BACKGROUND_COLOR.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (width.min(height) / 2.0) - 10.0;
    let inner = outer * CUTOUT_RATIO;

    let segments = doughnut_segments(values);
    if segments.is_empty() {
        ctx.set_fill_style(&"#858796".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data logged yet", cx - 70.0, cy);
        return;
    }

    for (idx, start, end) in segments {
        let color = SEGMENT_COLORS[idx % SEGMENT_COLORS.len()];
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.fill();
    }
}

/// Segment angles in radians, starting at twelve o'clock.
///
/// Returns `(value_index, start, end)`; non-positive values are skipped.
pub fn doughnut_segments(values: &[f64]) -> Vec<(usize, f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -std::f64::consts::FRAC_PI_2;
    let mut segments = Vec::new();

    for (idx, value) in values.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let sweep = value / total * std::f64::consts::PI * 2.0;
        segments.push((idx, start, start + sweep));
        start += sweep;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_segments_proportional() {
        let segments = doughnut_segments(&[1.0, 1.0, 2.0]);
        assert_eq!(segments.len(), 3);

        let sweep = |s: &(usize, f64, f64)| s.2 - s.1;
        assert!((sweep(&segments[0]) - PI / 2.0).abs() < 1e-9);
        assert!((sweep(&segments[1]) - PI / 2.0).abs() < 1e-9);
        assert!((sweep(&segments[2]) - PI).abs() < 1e-9);
    }

    #[test]
    fn test_segments_cover_full_circle() {
        let segments = doughnut_segments(&[3.0, 7.0]);
        let total: f64 = segments.iter().map(|s| s.2 - s.1).sum();
        assert!((total - PI * 2.0).abs() < 1e-9);
        // Contiguous: each segment starts where the previous ended
        assert!((segments[1].1 - segments[0].2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_segments_skipped() {
        let segments = doughnut_segments(&[5.0, 0.0, 5.0]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].0, 0);
        assert_eq!(segments[1].0, 2);
    }

    #[test]
    fn test_all_zero_yields_nothing() {
        assert!(doughnut_segments(&[0.0, 0.0, 0.0]).is_empty());
        assert!(doughnut_segments(&[]).is_empty());
    }
}
