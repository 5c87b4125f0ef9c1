//! O2W scene file reading and parsing
//!
//! An O2W file is a flat stream of tagged blocks, every multi-byte integer
//! little-endian:
//!
//! | Tag | Payload after the tag byte | Meaning |
//! |-----|----------------------------|---------|
//! | 3   | `count:u8`, then count × (`x:int24`, `y:int24`, `z:int24`) | origin vectors, appended to the global vertex table |
//! | 11  | `r:u8`, `g:u8`, `b:u8`, `count:u8`, count × `index:u16` | triangle list |
//! | 12  | same layout as 11 | triangle strip |
//! | 13, 14 | same layout as 11 | triangle fan |
//!
//! Coordinates are 3-byte two's-complement fixed-point values, divided by
//! [`COORDINATE_SCALE`] on load. Indices are global across the whole stream:
//! a primitive block may reference vertices from any earlier vertex block.
//! Any other tag byte aborts the decode.

mod assemble;
mod cursor;
mod model;
mod reader;
mod task;

pub use assemble::assemble_triangles;
pub use cursor::ByteCursor;
pub use model::{O2wModel, PrimitiveGroup, PrimitiveKind, Triangle};
pub use reader::{parse_o2w_bytes, read_o2w};
pub use task::{CancelToken, DecodeStep, DecodeTask, decode, decode_with};

/// Vertex block: a count-prefixed run of int24 origin vectors.
pub const TAG_VERTICES: u8 = 3;
/// Primitive block: independent triangles.
pub const TAG_TRIANGLE_LIST: u8 = 11;
/// Primitive block: triangle strip.
pub const TAG_TRIANGLE_STRIP: u8 = 12;
/// Primitive block: triangle fan, variant A.
pub const TAG_TRIANGLE_FAN_A: u8 = 13;
/// Primitive block: triangle fan, variant B (decodes identically to A).
pub const TAG_TRIANGLE_FAN_B: u8 = 14;

/// Divisor applied to raw int24 wire coordinates to get model units.
pub const COORDINATE_SCALE: f32 = 1000.0;

/// Default number of blocks decoded per [`DecodeTask::resume`] call.
pub const DEFAULT_BATCH_BLOCKS: usize = 2500;

/// Decode configuration, fixed for the lifetime of one decode operation.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Divisor for raw fixed-point coordinates.
    pub coordinate_scale: f32,
    /// Blocks decoded per batch before the task yields.
    pub batch_blocks: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            coordinate_scale: COORDINATE_SCALE,
            batch_blocks: DEFAULT_BATCH_BLOCKS,
        }
    }
}
