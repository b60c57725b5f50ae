use rootscope_core::Model;
use rootscope_solvers::equation::bisection::Record;

use crate::{Anchor, Point, SampledCurve, Style, Surface, ViewTransform};

/// Draws the trace of a bisection solve with the default [`Style`].
///
/// `bracket` is the interval the solve started from, `history` its
/// iteration records, and `root` the reported root. The surface is cleared
/// first and fully redrawn.
pub fn render<S, M>(surface: &mut S, model: &M, bracket: [f64; 2], history: &[Record], root: f64)
where
    S: Surface + ?Sized,
    M: Model<Input = f64, Output = f64>,
{
    render_with(surface, &Style::default(), model, bracket, history, root);
}

/// Draws the trace of a bisection solve with a custom [`Style`].
pub fn render_with<S, M>(
    surface: &mut S,
    style: &Style,
    model: &M,
    bracket: [f64; 2],
    history: &[Record],
    root: f64,
) where
    S: Surface + ?Sized,
    M: Model<Input = f64, Output = f64>,
{
    let curve = SampledCurve::sample(model, bracket, style.sample_intervals);
    let (width, height) = surface.size();
    let view = ViewTransform::new(bracket, curve.y_range(), width, height);

    surface.clear();
    draw_grid(surface, style, &view);
    draw_axes(surface, style, &view);
    draw_curve(surface, style, &view, &curve);
    draw_markers(surface, style, &view, history);
    draw_bounds(surface, style, &view);
    draw_root(surface, style, &view, root);
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, style: &Style, view: &ViewTransform) {
    let (width, height) = surface.size();

    let [x0, x1] = view.x_range();
    let x_divisions = style.x_divisions.max(1);
    for i in 0..=x_divisions {
        let x = lerp(x0, x1, i, x_divisions);
        let px = view.to_canvas_x(x);
        surface.stroke_path(&[Point::new(px, 0.0), Point::new(px, height)], &style.grid);
        surface.text(
            Point::new(px, height - style.x_label_offset),
            &label(x),
            Anchor::TopCenter,
            &style.label,
        );
    }

    let [y0, y1] = view.y_range();
    let y_divisions = style.y_divisions.max(1);
    for i in 0..=y_divisions {
        let y = lerp(y0, y1, i, y_divisions);
        let py = view.to_canvas_y(y);
        surface.stroke_path(&[Point::new(0.0, py), Point::new(width, py)], &style.grid);
        surface.text(
            Point::new(style.y_label_inset, py),
            &label(y),
            Anchor::RightCenter,
            &style.label,
        );
    }
}

/// Axes sit at math zero and may fall outside the surface.
fn draw_axes<S: Surface + ?Sized>(surface: &mut S, style: &Style, view: &ViewTransform) {
    let (width, height) = surface.size();

    let py = view.to_canvas_y(0.0);
    surface.stroke_path(&[Point::new(0.0, py), Point::new(width, py)], &style.axis);

    let px = view.to_canvas_x(0.0);
    surface.stroke_path(&[Point::new(px, 0.0), Point::new(px, height)], &style.axis);
}

fn draw_curve<S: Surface + ?Sized>(
    surface: &mut S,
    style: &Style,
    view: &ViewTransform,
    curve: &SampledCurve,
) {
    if curve.points().len() < 2 {
        return;
    }
    let points: Vec<Point> = curve.points().iter().map(|&p| view.to_canvas(p)).collect();
    surface.stroke_path(&points, &style.curve);
}

fn draw_markers<S: Surface + ?Sized>(
    surface: &mut S,
    style: &Style,
    view: &ViewTransform,
    history: &[Record],
) {
    let last = history.len().saturating_sub(1);
    for (idx, record) in history.iter().enumerate() {
        if !(record.midpoint.is_finite() && record.value.is_finite()) {
            continue;
        }
        let fill = if idx == last {
            style.marker_highlight
        } else {
            style.marker_fill
        };
        surface.fill_circle(
            view.to_canvas([record.midpoint, record.value]),
            style.marker_radius,
            fill,
            &style.marker_outline,
        );
    }
}

fn draw_bounds<S: Surface + ?Sized>(surface: &mut S, style: &Style, view: &ViewTransform) {
    let (_, height) = surface.size();
    for x in view.x_range() {
        let px = view.to_canvas_x(x);
        surface.stroke_path(&[Point::new(px, 0.0), Point::new(px, height)], &style.bounds);
    }
}

fn draw_root<S: Surface + ?Sized>(surface: &mut S, style: &Style, view: &ViewTransform, root: f64) {
    if !root.is_finite() {
        return;
    }
    surface.stroke_circle(view.to_canvas([root, 0.0]), style.root_radius, &style.root);
}

/// Value `i / n` of the way from `start` to `end`.
#[allow(clippy::cast_precision_loss)]
fn lerp(start: f64, end: f64, i: usize, n: usize) -> f64 {
    start + (i as f64 / n as f64) * (end - start)
}

/// Formats a grid label with two decimals.
fn label(value: f64) -> String {
    // Adding zero turns -0.0 into 0.0 so it does not print as "-0.00".
    format!("{:.2}", value + 0.0)
}
