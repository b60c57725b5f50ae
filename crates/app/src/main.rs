//! Interactive bisection explorer.
//!
//! ```text
//! cargo run -p rootscope-app
//! cargo run -p rootscope-app -- --verbose
//! ```
//!
//! `--verbose` echoes every bisection iteration to stderr.

mod app;
mod form;

use app::RootscopeApp;

const TITLE: &str = "Rootscope: bisection method";

fn main() -> Result<(), eframe::Error> {
    let verbose = std::env::args().skip(1).any(|arg| arg == "--verbose");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([960.0, 820.0]),
        ..eframe::NativeOptions::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(RootscopeApp::new(verbose)))),
    )
}
