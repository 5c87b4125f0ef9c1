//! O2W file reading and block decoding

use byteorder::{ByteOrder, LittleEndian};
use glam::Vec3;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::assemble::assemble_triangles;
use super::cursor::ByteCursor;
use super::model::{O2wModel, PrimitiveGroup, PrimitiveKind};
use super::{DecodeOptions, TAG_VERTICES, task};
use crate::error::{Error, Result};

/// Read an O2W file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise
/// any error [`parse_o2w_bytes`] can produce.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_o2w<P: AsRef<Path>>(path: P) -> Result<O2wModel> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_o2w_bytes(&buffer)
}

/// Parse O2W data from bytes with default options
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if the data is truncated and
/// [`Error::UnrecognizedBlockTag`] on an unknown block tag.
///
/// [`Error::OutOfBounds`]: crate::Error::OutOfBounds
/// [`Error::UnrecognizedBlockTag`]: crate::Error::UnrecognizedBlockTag
pub fn parse_o2w_bytes(data: &[u8]) -> Result<O2wModel> {
    task::decode(data)
}

/// Decode a single block at the cursor into the model.
///
/// The cursor must sit on a tag byte; on success it sits on the next tag
/// byte (or the end of the buffer). Blocks are never revisited and a failed
/// block is never skipped or retried.
pub(super) fn decode_block(
    cursor: &mut ByteCursor<'_>,
    model: &mut O2wModel,
    options: &DecodeOptions,
) -> Result<()> {
    let tag_offset = cursor.offset();
    let tag = cursor.read_u8()?;

    if tag == TAG_VERTICES {
        let count = cursor.read_u8()?;
        for _ in 0..count {
            let x = cursor.read_i24_le()?;
            let y = cursor.read_i24_le()?;
            let z = cursor.read_i24_le()?;
            model.vertices.push(
                Vec3::new(x as f32, y as f32, z as f32) / options.coordinate_scale,
            );
        }
        tracing::trace!("vertex block: {} points at offset {}", count, tag_offset);
        return Ok(());
    }

    let Some(kind) = PrimitiveKind::from_tag(tag) else {
        return Err(Error::UnrecognizedBlockTag {
            tag,
            offset: tag_offset,
        });
    };

    let diffuse = [cursor.read_u8()?, cursor.read_u8()?, cursor.read_u8()?];
    let count = usize::from(cursor.read_u8()?);

    // The index run is length-prefixed, so it can be grabbed whole and
    // decoded as a self-contained sub-buffer
    let span = cursor.take_span(count * 2)?;
    let mut indices = vec![0u16; count];
    LittleEndian::read_u16_into(span, &mut indices);

    let group = PrimitiveGroup {
        kind,
        diffuse,
        triangles: assemble_triangles(kind, &indices),
    };
    tracing::trace!(
        "primitive block: kind {:?}, {} indices -> {} triangles at offset {}",
        kind,
        count,
        group.triangles.len(),
        tag_offset
    );

    if kind == PrimitiveKind::TriangleList {
        model.triangle_lists.push(group);
    } else {
        model.strips.push(group);
    }
    Ok(())
}
