/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

/// Line style for paths and circle outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// Dash and gap lengths in pixels; `None` draws a solid line.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    /// Creates a solid stroke.
    #[must_use]
    pub const fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Creates a dashed stroke.
    #[must_use]
    pub const fn dashed(color: Color, width: f32, dash: f32, gap: f32) -> Self {
        Self {
            color,
            width,
            dash: Some([dash, gap]),
        }
    }
}

/// Text color and size for labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
}

/// Everything that controls how a trace is drawn.
///
/// The default reproduces the standard look: a light grid, grey axes, a
/// blue curve, green iteration markers with the last one in red, orange
/// dashed bounds, and a red ring at the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub grid: Stroke,
    pub label: TextStyle,
    /// Vertical offset of x labels from the bottom edge.
    pub x_label_offset: f32,
    /// Horizontal position of the right edge of y labels.
    pub y_label_inset: f32,
    pub x_divisions: usize,
    pub y_divisions: usize,

    pub axis: Stroke,
    pub curve: Stroke,

    pub marker_radius: f32,
    pub marker_fill: Color,
    pub marker_highlight: Color,
    pub marker_outline: Stroke,

    pub bounds: Stroke,

    pub root_radius: f32,
    pub root: Stroke,

    /// Number of intervals the bracket is split into when sampling; the
    /// curve has one more sample than this.
    pub sample_intervals: usize,
}

impl Default for Style {
    fn default() -> Self {
        let highlight = Color::hex(0xe7_4c_3c);
        Self {
            grid: Stroke::solid(Color::hex(0xee_ee_ee), 1.0),
            label: TextStyle {
                color: Color::hex(0x88_88_88),
                size: 12.0,
            },
            x_label_offset: 18.0,
            y_label_inset: 40.0,
            x_divisions: 10,
            y_divisions: 8,

            axis: Stroke::solid(Color::hex(0xbb_bb_bb), 1.5),
            curve: Stroke::solid(Color::hex(0x29_80_b9), 2.0),

            marker_radius: 5.0,
            marker_fill: Color::hex(0x27_ae_60),
            marker_highlight: highlight,
            marker_outline: Stroke::solid(Color::hex(0x22_22_22), 1.5),

            bounds: Stroke::dashed(Color::hex(0xf3_9c_12), 1.5, 5.0, 5.0),

            root_radius: 8.0,
            root: Stroke::solid(highlight, 3.0),

            sample_intervals: 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_components() {
        assert_eq!(Color::hex(0x29_80_b9), Color::rgb(0x29, 0x80, 0xb9));
    }

    #[test]
    fn default_bounds_are_dashed() {
        assert_eq!(Style::default().bounds.dash, Some([5.0, 5.0]));
        assert_eq!(Style::default().curve.dash, None);
    }
}
