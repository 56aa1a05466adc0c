//! Foundation types for dropcon.
//!
//! This crate contains the data types shared between the console engine and
//! the host application: colors, the style/geometry record, the logical
//! console events the host feeds in, the visibility state the renderer reads
//! out, and error types.

pub mod color;
pub mod error;
pub mod event;
pub mod state;
pub mod style;
