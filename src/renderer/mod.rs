//! Canvas rendering
//!
//! Draw passes are written against the `Surface` trait; the browser backs it
//! with a 2D canvas context, tests and the native demo with a recorder.

pub mod color;
pub mod particles;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use color::{Color, colors};
pub use particles::{FieldStyle, render_field};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Stroke, Surface, TextAlign};

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
