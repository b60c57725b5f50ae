use crate::{Color, Stroke, TextStyle};

/// A position in pixel space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which point of a text label's bounding box sits at the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Horizontally centered, top edge at the position.
    TopCenter,
    /// Right edge at the position, vertically centered.
    RightCenter,
}

/// A rectangular pixel surface the renderer draws on.
///
/// This is the only drawing capability the renderer needs. Coordinates are
/// relative to the surface's top-left corner; drawing outside
/// `[0, width] × [0, height]` is allowed and may be clipped.
pub trait Surface {
    /// Returns `(width, height)` in pixels.
    fn size(&self) -> (f32, f32);

    /// Erases everything previously drawn.
    fn clear(&mut self);

    /// Strokes a polyline through `points`.
    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke);

    /// Draws a filled circle with an outline.
    fn fill_circle(&mut self, center: Point, radius: f32, fill: Color, outline: &Stroke);

    /// Draws the outline of a circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke);

    /// Draws a text label.
    fn text(&mut self, pos: Point, text: &str, anchor: Anchor, style: &TextStyle);
}

/// A drawing primitive captured by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear,
    Path {
        points: Vec<Point>,
        stroke: Stroke,
    },
    FilledCircle {
        center: Point,
        radius: f32,
        fill: Color,
        outline: Stroke,
    },
    Ring {
        center: Point,
        radius: f32,
        stroke: Stroke,
    },
    Text {
        pos: Point,
        text: String,
        anchor: Anchor,
        style: TextStyle,
    },
}

/// A [`Surface`] that records commands instead of rasterizing them.
///
/// Useful for tests, and for handing the drawing off to a backend that is
/// not available where the render happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    width: f32,
    height: f32,
    commands: Vec<Command>,
}

impl Recorder {
    /// Creates an empty recorder of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Returns the recorded commands, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consumes the recorder and returns its commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(Command::Clear);
    }

    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke) {
        self.commands.push(Command::Path {
            points: points.to_vec(),
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, fill: Color, outline: &Stroke) {
        self.commands.push(Command::FilledCircle {
            center,
            radius,
            fill,
            outline: *outline,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        self.commands.push(Command::Ring {
            center,
            radius,
            stroke: *stroke,
        });
    }

    fn text(&mut self, pos: Point, text: &str, anchor: Anchor, style: &TextStyle) {
        self.commands.push(Command::Text {
            pos,
            text: text.to_string(),
            anchor,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_previous_commands() {
        let mut recorder = Recorder::new(10.0, 10.0);
        let stroke = Stroke::solid(Color::rgb(0, 0, 0), 1.0);

        recorder.stroke_path(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], &stroke);
        recorder.clear();

        assert_eq!(recorder.commands(), [Command::Clear]);
    }

    #[test]
    fn reports_its_size() {
        assert_eq!(Recorder::new(600.0, 400.0).size(), (600.0, 400.0));
    }
}
