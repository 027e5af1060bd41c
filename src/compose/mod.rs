//! Layer compositing

/// Alpha blending of stacked layers with dimension validation
pub mod compositor;

pub use compositor::composite_stack;
