//! Decoded O2W object model

use glam::Vec3;

use super::{TAG_TRIANGLE_FAN_A, TAG_TRIANGLE_FAN_B, TAG_TRIANGLE_LIST, TAG_TRIANGLE_STRIP};

/// The encoding of a primitive block's index run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Independent triangles, three indices each.
    TriangleList,
    /// Triangle strip with alternating winding.
    TriangleStrip,
    /// Triangle fan, variant A.
    TriangleFanA,
    /// Triangle fan, variant B. Decodes identically to variant A; the format
    /// distinguishes them by tag only.
    TriangleFanB,
}

impl PrimitiveKind {
    /// Map a block tag byte to its primitive kind, if it names one.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            TAG_TRIANGLE_LIST => Some(Self::TriangleList),
            TAG_TRIANGLE_STRIP => Some(Self::TriangleStrip),
            TAG_TRIANGLE_FAN_A => Some(Self::TriangleFanA),
            TAG_TRIANGLE_FAN_B => Some(Self::TriangleFanB),
            _ => None,
        }
    }
}

/// Three indices into the model's vertex table.
///
/// Assembled triangles are never degenerate: no two of the three indices
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub a: u16,
    pub b: u16,
    pub c: u16,
}

impl Triangle {
    pub fn new(a: u16, b: u16, c: u16) -> Self {
        Self { a, b, c }
    }

    /// True if two or more indices coincide (zero geometric area).
    pub fn is_degenerate(self) -> bool {
        self.a == self.b || self.b == self.c || self.c == self.a
    }
}

/// One decoded drawable unit: a diffuse color plus explicit triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGroup {
    /// Encoding the group's index run used on the wire.
    pub kind: PrimitiveKind,
    /// Diffuse color, 8 bits per channel (r, g, b).
    pub diffuse: [u8; 3],
    /// Triangles in wire order, degenerates already filtered out.
    pub triangles: Vec<Triangle>,
}

/// A fully decoded O2W scene.
///
/// Populated monotonically during decoding and immutable afterwards.
/// Triangle indices are positions in [`vertices`]; they are global across
/// the whole stream, so groups may reference vertices from any earlier
/// vertex block.
///
/// [`vertices`]: Self::vertices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct O2wModel {
    /// Global vertex table, in wire order.
    pub vertices: Vec<Vec3>,
    /// Groups decoded from triangle-list blocks.
    pub triangle_lists: Vec<PrimitiveGroup>,
    /// Groups decoded from strip and fan blocks. Kept apart from
    /// [`triangle_lists`] because renderers commonly treat the two as
    /// distinct draw-mode buckets, even though the CPU-side representation
    /// is identical.
    ///
    /// [`triangle_lists`]: Self::triangle_lists
    pub strips: Vec<PrimitiveGroup>,
}

impl O2wModel {
    /// Total number of primitive groups across both buckets.
    pub fn group_count(&self) -> usize {
        self.triangle_lists.len() + self.strips.len()
    }

    /// Total number of assembled triangles across both buckets.
    pub fn triangle_count(&self) -> usize {
        self.triangle_lists
            .iter()
            .chain(&self.strips)
            .map(|group| group.triangles.len())
            .sum()
    }
}
