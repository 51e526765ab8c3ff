// src/render/mod.rs

//! Output side: DOT serialization and handoff to Graphviz.
//!
//! Layout and rasterization are entirely Graphviz's job; this crate only
//! produces the graph description and pipes it through.

pub mod dot;
pub mod graphviz;

pub use dot::{to_dot, DotOptions};
pub use graphviz::{render_image, write_dot, ImageFormat};
