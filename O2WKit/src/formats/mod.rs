//! File format handlers

pub mod o2w;

// Re-export main decode types
pub use o2w::{O2wModel, PrimitiveGroup, PrimitiveKind, Triangle, parse_o2w_bytes, read_o2w};
