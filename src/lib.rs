//! Procedural lightning-bolt icon generator.
//!
//! Draws a white bolt on a `#667eea` square and writes it as an RGB PNG.

pub mod config;
pub mod error;
pub mod icon;
pub mod logger;

pub use config::{DEFAULT_TARGETS, IconTarget};
pub use error::{IconError, Result};
pub use icon::{bolt_polygon, draw_icon, render_all, render_icon, validate_size};
