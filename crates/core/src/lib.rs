//! Core traits shared across the Rootscope workspace.
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Observer`]: receives solver events and optionally returns control actions

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
