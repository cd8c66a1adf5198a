//! Canvas Painters
//!
//! 2D-context drawing for the chart models. A repaint always clears the
//! full canvas first, so together with the slot registry a re-render fully
//! replaces the previous chart.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::charts::model::{BarModel, ChartModel, ComboModel, DoughnutModel, TrendModel};
use crate::components::format::{axis_label, truncate_label};

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const AXIS_TEXT: &str = "#9ca3af"; // gray-400
const MUTED_TEXT: &str = "#6b7280"; // gray-500

const MARGIN_LEFT: f64 = 55.0;
const MARGIN_RIGHT: f64 = 45.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Acquire the 2D context, or `None` when the platform refuses one.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Paint a chart model onto a cleared canvas.
pub fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, model: &ChartModel) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    match model {
        ChartModel::Trend(model) => draw_trend(ctx, width, height, model),
        ChartModel::Bars(model) => draw_bars(ctx, width, height, model),
        ChartModel::Doughnut(model) => draw_doughnut(ctx, width, height, model),
        ChartModel::Combo(model) => draw_combo(ctx, width, height, model),
    }

    let placeholder = match model {
        ChartModel::Trend(m) => m.placeholder,
        ChartModel::Bars(m) => m.placeholder,
        ChartModel::Doughnut(m) => m.placeholder,
        ChartModel::Combo(m) => m.placeholder,
    };
    if placeholder {
        ctx.set_fill_style(&MUTED_TEXT.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data yet", width / 2.0 - 40.0, height / 2.0);
    }
}

/// Horizontal grid lines with left-axis value labels.
fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, max: f64, currency: bool) {
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);

    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        ctx.set_fill_style(&AXIS_TEXT.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&axis_label(value, currency), 5.0, y + 4.0);
    }
}

/// Category labels under the x-axis, truncated to fit their band.
fn draw_x_labels(ctx: &CanvasRenderingContext2d, width: f64, height: f64, labels: &[String]) {
    if labels.is_empty() {
        return;
    }
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let band = chart_width / labels.len() as f64;

    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in labels.iter().enumerate() {
        let text = truncate_label(label, 10);
        let x = MARGIN_LEFT + (i as f64 + 0.5) * band - text.chars().count() as f64 * 3.0;
        let _ = ctx.fill_text(&text, x, height - 10.0);
    }
}

/// Scale guard: a zero-max series still needs a finite axis.
fn safe_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn draw_trend(ctx: &CanvasRenderingContext2d, width: f64, height: f64, model: &TrendModel) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let max = safe_max(model.series.iter().flat_map(|s| s.values.iter().copied()));
    draw_grid(ctx, width, height, max, false);
    draw_x_labels(ctx, width, height, &model.periods);

    let points = model.periods.len();
    if points == 0 {
        return;
    }
    let step = if points > 1 {
        chart_width / (points - 1) as f64
    } else {
        chart_width
    };

    for series in &model.series {
        ctx.set_stroke_style(&series.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, value) in series.values.iter().enumerate() {
            let x = MARGIN_LEFT + i as f64 * step;
            // Canvas y grows downward
            let y = MARGIN_TOP + (1.0 - value / max) * chart_height;
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&series.color.into());
        for (i, value) in series.values.iter().enumerate() {
            let x = MARGIN_LEFT + i as f64 * step;
            let y = MARGIN_TOP + (1.0 - value / max) * chart_height;
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, width: f64, height: f64, model: &BarModel) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let max = safe_max(model.values.iter().copied());
    draw_grid(ctx, width, height, max, model.currency);
    draw_x_labels(ctx, width, height, &model.labels);

    if model.values.is_empty() {
        return;
    }
    let band = chart_width / model.values.len() as f64;
    let bar_width = band * 0.6;

    ctx.set_fill_style(&model.color.into());
    for (i, value) in model.values.iter().enumerate() {
        let bar_height = value / max * chart_height;
        let x = MARGIN_LEFT + (i as f64 + 0.2) * band;
        let y = MARGIN_TOP + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }
}

fn draw_doughnut(ctx: &CanvasRenderingContext2d, width: f64, height: f64, model: &DoughnutModel) {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (height.min(width) / 2.0 - 25.0).max(10.0);
    let inner = outer * 0.55;
    let total: f64 = model.segments.iter().map(|s| s.value).sum();

    if total <= 0.0 {
        // Keep the ring visible even with no counts
        ctx.set_stroke_style(&GRID.into());
        ctx.set_line_width(outer - inner);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, (outer + inner) / 2.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.stroke();
        return;
    }

    let mut start = -std::f64::consts::FRAC_PI_2;
    for segment in &model.segments {
        if segment.value <= 0.0 {
            continue;
        }
        let sweep = segment.value / total * std::f64::consts::PI * 2.0;

        ctx.set_fill_style(&segment.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, outer, start, start + sweep);
        ctx.close_path();
        ctx.fill();

        start += sweep;
    }

    // Punch the hole
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, inner, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
}

fn draw_combo(ctx: &CanvasRenderingContext2d, width: f64, height: f64, model: &ComboModel) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Independent scales: bars on the left axis, line on the right
    let bar_max = safe_max(model.bars.iter().copied());
    let line_max = safe_max(model.line.iter().copied());

    draw_grid(ctx, width, height, bar_max, true);
    draw_x_labels(ctx, width, height, &model.labels);

    // Right-axis labels for the line series
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * chart_height;
        let value = line_max - (i as f64 / 4.0) * line_max;
        let _ = ctx.fill_text(&axis_label(value, false), width - MARGIN_RIGHT + 8.0, y + 4.0);
    }

    if model.labels.is_empty() {
        return;
    }
    let band = chart_width / model.labels.len() as f64;
    let bar_width = band * 0.5;

    ctx.set_fill_style(&model.bar_color.into());
    for (i, value) in model.bars.iter().enumerate() {
        let bar_height = value / bar_max * chart_height;
        let x = MARGIN_LEFT + (i as f64 + 0.25) * band;
        let y = MARGIN_TOP + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    ctx.set_stroke_style(&model.line_color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in model.line.iter().enumerate() {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * band;
        let y = MARGIN_TOP + (1.0 - value / line_max) * chart_height;
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&model.line_color.into());
    for (i, value) in model.line.iter().enumerate() {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * band;
        let y = MARGIN_TOP + (1.0 - value / line_max) * chart_height;
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}
