//! Chart Component
//!
//! Canvas chart backend for the overview slots. Each slot is a `<canvas>`
//! whose element id matches [`ChartSlot::element_id`].

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::*;
use vitrine::{ChartBackend, ChartConfig, ChartKind, ChartSlot};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_WIDTH: u32 = 480;
const CANVAS_HEIGHT: u32 = 300;

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#e5e7eb";
const TEXT: &str = "#6b7280";

/// Draws [`ChartConfig`]s on the page's chart canvases
#[derive(Debug, Default)]
pub struct CanvasCharts;

impl ChartBackend for CanvasCharts {
    type Handle = HtmlCanvasElement;

    fn create(&mut self, slot: ChartSlot, config: &ChartConfig) -> Option<HtmlCanvasElement> {
        let canvas = find_canvas(slot.element_id())?;
        let ctx = context_2d(&canvas)?;

        clear(&ctx, &canvas);
        if config.is_empty() {
            draw_empty(&ctx, &canvas);
        } else {
            match config.kind {
                ChartKind::Doughnut => draw_doughnut(&ctx, &canvas, config),
                ChartKind::Line => draw_line(&ctx, &canvas, config),
            }
        }

        Some(canvas)
    }

    fn dispose(&mut self, canvas: HtmlCanvasElement) {
        if let Some(ctx) = context_2d(&canvas) {
            clear(&ctx, &canvas);
        }
    }
}

/// Card holding one chart slot
#[component]
pub fn ChartCanvas(slot: ChartSlot) -> impl IntoView {
    view! {
        <div class="card h-100">
            <div class="card-header">{slot.title()}</div>
            <div class="card-body">
                <canvas
                    id=slot.element_id()
                    width=CANVAS_WIDTH
                    height=CANVAS_HEIGHT
                    class="w-100"
                />
            </div>
        </div>
    }
}

fn find_canvas(id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn clear(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    let (width, height) = (canvas.width() as f64, canvas.height() as f64);
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_empty(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.set_fill_style(&TEXT.into());
    ctx.set_font("16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(
        "Sem dados",
        canvas.width() as f64 / 2.0,
        canvas.height() as f64 / 2.0,
    );
    ctx.set_text_align("start");
}

fn draw_doughnut(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Doughnut on the left two thirds, legend on the right
    let cx = width / 3.0;
    let cy = height / 2.0;
    let outer = (width / 3.0).min(height / 2.0) - 10.0;
    let inner = outer * 0.5;

    for (index, (start, end)) in slice_angles(&config.values).into_iter().enumerate() {
        if end <= start {
            continue;
        }
        ctx.set_fill_style(&config.color_at(index).into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.fill();
    }

    ctx.set_font("12px sans-serif");
    let legend_x = width * 2.0 / 3.0;
    for (index, label) in config.labels.iter().enumerate() {
        let y = 20.0 + index as f64 * 20.0;
        ctx.set_fill_style(&config.color_at(index).into());
        ctx.fill_rect(legend_x, y - 10.0, 12.0, 12.0);
        ctx.set_fill_style(&TEXT.into());
        let _ = ctx.fill_text(label, legend_x + 18.0, y);
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 90.0;
    let margin_right = 20.0;
    let margin_top = 30.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;
    let (min, max) = value_range(&config.values);

    // Horizontal grid with currency ticks
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("11px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * (max - min);
        ctx.set_fill_style(&TEXT.into());
        let _ = ctx.fill_text(&config.format_tick(value), 5.0, y + 4.0);
    }

    let points = plot_points(
        &config.values,
        (margin_left, margin_top),
        (chart_width, chart_height),
        (min, max),
    );
    let controls = control_points(&points, config.tension);

    let trace = |ctx: &CanvasRenderingContext2d| {
        ctx.move_to(points[0].0, points[0].1);
        for (i, (cp1, cp2)) in controls.iter().enumerate() {
            let next = points[i + 1];
            ctx.bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, next.0, next.1);
        }
    };

    if let Some(fill) = config.fill {
        let baseline = margin_top + chart_height;
        ctx.begin_path();
        trace(ctx);
        ctx.line_to(points[points.len() - 1].0, baseline);
        ctx.line_to(points[0].0, baseline);
        ctx.close_path();
        ctx.set_fill_style(&fill.into());
        ctx.fill();
    }

    let color = config.color_at(0);
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    trace(ctx);
    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, TAU);
        ctx.fill();
    }

    // Month labels under their points
    ctx.set_fill_style(&TEXT.into());
    ctx.set_text_align("center");
    for (label, (x, _)) in config.labels.iter().zip(&points) {
        let _ = ctx.fill_text(label, *x, height - 10.0);
    }
    ctx.set_text_align("start");

    if let Some(series) = &config.series_label {
        ctx.set_fill_style(&color.into());
        let _ = ctx.fill_text(series, margin_left, 16.0);
    }
}

/// Start and end angle of each slice, clockwise from twelve o'clock
///
/// Negative values get no slice.
fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut start = -FRAC_PI_2;

    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 {
                value.max(0.0) / total * TAU
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Value axis bounds, zero based with headroom above the maximum
fn value_range(values: &[f64]) -> (f64, f64) {
    let max = values.iter().copied().fold(0.0, f64::max);
    let min = values.iter().copied().fold(0.0, f64::min);
    if max <= min {
        (min, min + 1.0)
    } else {
        (min, max * 1.1)
    }
}

/// Canvas coordinates of each value, evenly spaced left to right
fn plot_points(
    values: &[f64],
    origin: (f64, f64),
    size: (f64, f64),
    range: (f64, f64),
) -> Vec<(f64, f64)> {
    let (left, top) = origin;
    let (width, height) = size;
    let (min, max) = range;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let offset = if values.len() == 1 { width / 2.0 } else { 0.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = left + offset + i as f64 * step;
            let y = top + (max - value) / (max - min) * height;
            (x, y)
        })
        .collect()
}

type Point = (f64, f64);

/// Bezier control points for each segment, Catmull-Rom style
///
/// Tension 0 puts the controls on the endpoints, giving straight segments.
fn control_points(points: &[Point], tension: f64) -> Vec<(Point, Point)> {
    let at = |i: isize| -> Point {
        let clamped = i.clamp(0, points.len() as isize - 1) as usize;
        points[clamped]
    };

    (0..points.len().saturating_sub(1) as isize)
        .map(|i| {
            let (prev, from, to, next) = (at(i - 1), at(i), at(i + 1), at(i + 2));
            let k = tension / 2.0;
            let cp1 = (from.0 + (to.0 - prev.0) * k, from.1 + (to.1 - prev.1) * k);
            let cp2 = (to.0 - (next.0 - from.0) * k, to.1 - (next.1 - from.1) * k);
            (cp1, cp2)
        })
        .collect()
}
