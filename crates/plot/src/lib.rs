//! Visual trace of a bisection solve.
//!
//! [`render`] samples the function across the bracket, fits a
//! [`ViewTransform`] to the finite samples, and issues a fixed back-to-front
//! sequence of primitives against a [`Surface`]:
//!
//! 1. grid with labeled divisions
//! 2. axes at `x = 0` and `y = 0`
//! 3. the sampled curve
//! 4. one marker per iteration, the last one highlighted
//! 5. dashed lines at the original bracket bounds
//! 6. a ring at `(root, 0)`
//!
//! Rendering never fails: samples and markers that are not finite are
//! skipped.
//!
//! # Surfaces
//!
//! - [`Recorder`]: keeps the issued [`Command`]s for inspection.
//! - `EguiSurface`: paints into an `egui::Painter` (feature `egui`).
//!
//! # Features
//!
//! - `egui`: Enables `EguiSurface`. This feature adds a dependency on
//!   `eframe`.

mod render;
mod sample;
mod style;
mod surface;
mod transform;

#[cfg(feature = "egui")]
mod painter;

pub use render::{render, render_with};
pub use sample::SampledCurve;
pub use style::{Color, Stroke, Style, TextStyle};
pub use surface::{Anchor, Command, Point, Recorder, Surface};
pub use transform::ViewTransform;

#[cfg(feature = "egui")]
pub use painter::EguiSurface;
