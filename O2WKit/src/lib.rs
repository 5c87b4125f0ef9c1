//! # `O2WKit`
//!
//! A pure-Rust decoder for the O2W binary 3D scene format.
//!
//! O2W files are a flat stream of self-describing blocks: origin-vector
//! tables (24-bit fixed-point coordinates) and indexed primitive groups
//! (triangle lists, strips, and fans with a per-group diffuse color).
//! Decoding produces an [`O2wModel`] — a global vertex table plus the
//! primitive groups expanded into explicit triangles — ready to hand to a
//! rendering layer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use o2wkit::prelude::*;
//!
//! // Decode a scene from disk
//! let model = read_o2w("building.o2w")?;
//! println!(
//!     "{} vertices, {} triangle groups",
//!     model.vertices.len(),
//!     model.group_count()
//! );
//! # Ok::<(), o2wkit::Error>(())
//! ```
//!
//! ### Decoding in batches
//!
//! Large scenes can be decoded incrementally so the caller can interleave
//! other work or abandon the decode between batches:
//!
//! ```
//! use o2wkit::prelude::*;
//!
//! let data: &[u8] = &[];
//! let mut task = DecodeTask::new(data, DecodeOptions::default());
//! let model = loop {
//!     match task.resume()? {
//!         DecodeStep::Complete(model) => break model,
//!         // Run other work between batches, then continue
//!         DecodeStep::Yielded(next) => task = next,
//!     }
//! };
//! assert!(model.vertices.is_empty());
//! # Ok::<(), o2wkit::Error>(())
//! ```
//!
//! [`O2wModel`]: formats::o2w::O2wModel

pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::o2w::{
        CancelToken, DecodeOptions, DecodeStep, DecodeTask, O2wModel, PrimitiveGroup,
        PrimitiveKind, Triangle, decode, decode_with, parse_o2w_bytes, read_o2w,
    };
}
