//! Chart Component
//!
//! Calorie line/area chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas id the calorie line chart mounts against
pub const CALORIE_CHART_ID: &str = "calorieChart";

/// Series colors, matching the server-rendered theme
pub const GOAL_STROKE: &str = "rgba(78, 115, 223, 1)";
pub const GOAL_FILL: &str = "rgba(78, 115, 223, 0.25)";
pub const INTAKE_STROKE: &str = "rgba(255, 0, 0, 0.6)";
pub const INTAKE_FILL: &str = "rgba(255, 0, 0, 0.1)";
pub const TDEE_STROKE: &str = "#858796";

const GRID_COLOR: &str = "rgb(234, 236, 244)";
const AXIS_TEXT_COLOR: &str = "#858796";
const BACKGROUND_COLOR: &str = "#ffffff";

/// At most this many x-axis tick labels are drawn
const MAX_X_TICKS: usize = 15;
/// Horizontal gridline divisions
const Y_DIVISIONS: usize = 5;

/// One plotted dataset
#[derive(Clone, Debug)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub stroke: &'static str,
    /// Area fill under the line; `None` draws the line only
    pub fill: Option<&'static str>,
    pub data: Vec<f64>,
    pub dashed: bool,
    pub point_radius: f64,
}

impl SeriesSpec {
    /// Goal caloric intake series, styled like the server dashboard
    pub fn goal(data: Vec<f64>) -> Self {
        Self {
            label: "Calories",
            stroke: GOAL_STROKE,
            fill: Some(GOAL_FILL),
            data,
            dashed: false,
            point_radius: 0.0,
        }
    }

    /// Logged caloric intake series
    pub fn intake(data: Vec<f64>) -> Self {
        Self {
            label: "Target Daily Caloric Intake",
            stroke: INTAKE_STROKE,
            fill: Some(INTAKE_FILL),
            data,
            dashed: false,
            point_radius: 3.0,
        }
    }

    /// Profile page variant of the intake series
    pub fn profile_intake(data: Vec<f64>) -> Self {
        Self {
            label: "Caloric Intake",
            ..Self::intake(data)
        }
    }

    /// Estimated TDEE series, drawn dashed without fill
    pub fn tdee(data: Vec<f64>) -> Self {
        Self {
            label: "Estimated TDEE",
            stroke: TDEE_STROKE,
            fill: None,
            data,
            dashed: true,
            point_radius: 0.0,
        }
    }
}

/// Calorie line chart component
#[component]
pub fn CalorieChart(
    labels: Vec<String>,
    series: Vec<SeriesSpec>,
    #[prop(default = "Calories In")]
    y_title: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &labels, &series, y_title);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            id=CALORIE_CHART_ID
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Anchor that re-serializes a canvas to a JPEG data URL on every click
#[component]
pub fn ChartDownloadLink(
    canvas_id: &'static str,
    anchor_id: &'static str,
    file_name: &'static str,
    #[prop(default = "Download as image")]
    label: &'static str,
) -> impl IntoView {
    // The href is assigned immediately before navigation; no caching
    let on_click = move |_| {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };

        let canvas = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        let anchor = document
            .get_element_by_id(anchor_id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());

        if let (Some(canvas), Some(anchor)) = (canvas, anchor) {
            if let Ok(url) = canvas.to_data_url_with_type("image/jpeg") {
                anchor.set_href(&url);
            }
        }
    };

    view! {
        <a
            id=anchor_id
            href="#"
            download=file_name
            on:click=on_click
            class="text-sm text-gray-500 hover:text-gray-700 underline"
        >
            {label}
        </a>
    }
}

/// Draw the chart on canvas
pub fn draw_line_chart(
    canvas: &HtmlCanvasElement,
    labels: &[String],
    series: &[SeriesSpec],
    y_title: &str,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 25.0;
    let margin_top = 25.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND_COLOR.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let (y_min, y_max) = value_bounds(series);

    // Horizontal gridlines and y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=Y_DIVISIONS {
        let y = margin_top + (i as f64 / Y_DIVISIONS as f64) * chart_height;
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / Y_DIVISIONS as f64) * (y_max - y_min);
        ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 8.0, y + 4.0);
    }

    // Y-axis title, rotated
    ctx.save();
    ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.translate(14.0, margin_top + chart_height / 2.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    let _ = ctx.fill_text(y_title, -20.0, 0.0);
    ctx.restore();

    // Each dataset: filled area first, then the line, then its points
    for spec in series {
        let count = spec.data.len().min(labels.len());
        if count == 0 {
            continue;
        }
        let data = &spec.data[..count];

        if let Some(fill) = spec.fill {
            ctx.set_fill_style(&fill.into());
            ctx.begin_path();
            for (i, value) in data.iter().enumerate() {
                let x = x_at(i, count, margin_left, chart_width);
                let y = y_at(*value, y_min, y_max, margin_top, chart_height);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.line_to(
                x_at(count - 1, count, margin_left, chart_width),
                margin_top + chart_height,
            );
            ctx.line_to(x_at(0, count, margin_left, chart_width), margin_top + chart_height);
            ctx.close_path();
            ctx.fill();
        }

        ctx.set_stroke_style(&spec.stroke.into());
        ctx.set_line_width(2.0);
        if spec.dashed {
            let _ = ctx.set_line_dash(&js_sys::Array::of2(&6.0.into(), &4.0.into()));
        }
        ctx.begin_path();
        for (i, value) in data.iter().enumerate() {
            let x = x_at(i, count, margin_left, chart_width);
            let y = y_at(*value, y_min, y_max, margin_top, chart_height);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
        if spec.dashed {
            let _ = ctx.set_line_dash(&js_sys::Array::new());
        }

        if spec.point_radius > 0.0 {
            ctx.set_fill_style(&spec.stroke.into());
            for (i, value) in data.iter().enumerate() {
                let x = x_at(i, count, margin_left, chart_width);
                let y = y_at(*value, y_min, y_max, margin_top, chart_height);
                ctx.begin_path();
                let _ = ctx.arc(x, y, spec.point_radius, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }

    // X-axis labels, thinned to the tick limit
    ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
    ctx.set_font("12px sans-serif");
    let stride = label_stride(labels.len(), MAX_X_TICKS);
    for (i, label) in labels.iter().enumerate() {
        if i % stride != 0 {
            continue;
        }
        let x = x_at(i, labels.len(), margin_left, chart_width);
        let _ = ctx.fill_text(label, x - 15.0, height - 12.0);
    }

    // "No data" message if every series is empty
    if series.iter().all(|s| s.data.is_empty()) {
        ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data logged yet", width / 2.0 - 70.0, height / 2.0);
    }
}

/// Global y bounds over all series, padded by 10%
fn value_bounds(series: &[SeriesSpec]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for spec in series {
        for value in &spec.data {
            min = min.min(*value);
            max = max.max(*value);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// X pixel position of point `i` out of `count`; a lone point is centered
fn x_at(i: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        left + width / 2.0
    } else {
        left + (i as f64 / (count - 1) as f64) * width
    }
}

/// Y pixel position, inverted because canvas y grows downward
fn y_at(value: f64, min: f64, max: f64, top: f64, height: f64) -> f64 {
    top + ((max - value) / (max - min)) * height
}

/// Index stride that keeps at most `max_ticks` x labels
fn label_stride(len: usize, max_ticks: usize) -> usize {
    if len <= max_ticks {
        1
    } else {
        (len + max_ticks - 1) / max_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bounds_padded() {
        let series = [SeriesSpec::intake(vec![100.0, 200.0])];
        let (min, max) = value_bounds(&series);
        assert!(min < 100.0 && min > 80.0);
        assert!(max > 200.0 && max < 220.0);
    }

    #[test]
    fn test_value_bounds_flat_series() {
        let series = [SeriesSpec::goal(vec![1800.0, 1800.0])];
        let (min, max) = value_bounds(&series);
        assert_eq!(min, 1799.0);
        assert_eq!(max, 1801.0);
    }

    #[test]
    fn test_value_bounds_empty() {
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_x_at_spans_chart_width() {
        assert_eq!(x_at(0, 3, 60.0, 300.0), 60.0);
        assert_eq!(x_at(2, 3, 60.0, 300.0), 360.0);
    }

    #[test]
    fn test_x_at_single_point_centered() {
        assert_eq!(x_at(0, 1, 60.0, 300.0), 210.0);
    }

    #[test]
    fn test_y_at_inverts_axis() {
        // max maps to the top edge, min to the bottom edge
        assert_eq!(y_at(200.0, 100.0, 200.0, 25.0, 335.0), 25.0);
        assert_eq!(y_at(100.0, 100.0, 200.0, 25.0, 335.0), 360.0);
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(10, 15), 1);
        assert_eq!(label_stride(15, 15), 1);
        assert_eq!(label_stride(30, 15), 2);
        assert_eq!(label_stride(31, 15), 3);
    }
}
