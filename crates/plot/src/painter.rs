//! [`Surface`] adapter for egui.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Shape};

use crate::{Anchor, Color, Point, Stroke, Surface, TextStyle};

/// Paints into a rectangle of an [`egui::Painter`].
///
/// Surface coordinates are relative to the rectangle's top-left corner.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
    background: Color32,
}

impl<'a> EguiSurface<'a> {
    /// Creates a surface covering `rect`, cleared to white.
    #[must_use]
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            background: Color32::WHITE,
        }
    }

    /// Sets the color used by [`Surface::clear`].
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = color32(color);
        self
    }

    fn pos(&self, point: Point) -> Pos2 {
        self.rect.min + egui::vec2(point.x, point.y)
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.rect.width(), self.rect.height())
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke) {
        let path: Vec<Pos2> = points.iter().map(|&p| self.pos(p)).collect();
        let egui_stroke = stroke32(stroke);
        match stroke.dash {
            Some([dash, gap]) => {
                self.painter
                    .extend(Shape::dashed_line(&path, egui_stroke, dash, gap));
            }
            None => {
                self.painter.add(Shape::line(path, egui_stroke));
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, fill: Color, outline: &Stroke) {
        self.painter
            .circle(self.pos(center), radius, color32(fill), stroke32(outline));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        self.painter
            .circle_stroke(self.pos(center), radius, stroke32(stroke));
    }

    fn text(&mut self, pos: Point, text: &str, anchor: Anchor, style: &TextStyle) {
        let align = match anchor {
            Anchor::TopCenter => Align2::CENTER_TOP,
            Anchor::RightCenter => Align2::RIGHT_CENTER,
        };
        self.painter.text(
            self.pos(pos),
            align,
            text,
            FontId::proportional(style.size),
            color32(style.color),
        );
    }
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn stroke32(stroke: &Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, color32(stroke.color))
}
