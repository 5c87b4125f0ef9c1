//! Index-run to triangle assembly
//!
//! All three primitive encodings compress an N-triangle surface into N+2
//! indices instead of 3N; expanding them here means downstream consumers
//! never need encoding-specific logic. Degenerate windows (repeated
//! indices) are dropped silently; strip and fan encodings produce them at
//! seams.

use super::model::{PrimitiveKind, Triangle};

/// Expand a raw index run into explicit triangles for the given kind.
///
/// - `TriangleList`: consecutive non-overlapping triples; a trailing
///   partial triple is ignored.
/// - `TriangleStrip`: sliding 3-index window; odd-aligned windows emit with
///   the last two indices swapped so the whole strip keeps one face
///   orientation.
/// - `TriangleFanA`/`TriangleFanB`: the first index is the apex of every
///   triangle; the remaining indices slide pairwise. No winding correction.
pub fn assemble_triangles(kind: PrimitiveKind, indices: &[u16]) -> Vec<Triangle> {
    match kind {
        PrimitiveKind::TriangleList => indices
            .chunks_exact(3)
            .map(|chunk| Triangle::new(chunk[0], chunk[1], chunk[2]))
            .filter(|triangle| !triangle.is_degenerate())
            .collect(),

        PrimitiveKind::TriangleStrip => indices
            .windows(3)
            .enumerate()
            .filter_map(|(start, window)| {
                let triangle = if start % 2 == 0 {
                    Triangle::new(window[0], window[1], window[2])
                } else {
                    Triangle::new(window[0], window[2], window[1])
                };
                (!triangle.is_degenerate()).then_some(triangle)
            })
            .collect(),

        PrimitiveKind::TriangleFanA | PrimitiveKind::TriangleFanB => {
            let Some((&apex, rest)) = indices.split_first() else {
                return Vec::new();
            };
            rest.windows(2)
                .map(|window| Triangle::new(apex, window[0], window[1]))
                .filter(|triangle| !triangle.is_degenerate())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_partitions_into_triples() {
        let triangles = assemble_triangles(PrimitiveKind::TriangleList, &[0, 1, 2, 3, 4, 5]);
        assert_eq!(
            triangles,
            vec![Triangle::new(0, 1, 2), Triangle::new(3, 4, 5)]
        );
    }

    #[test]
    fn test_list_ignores_trailing_partial_triple() {
        let triangles = assemble_triangles(PrimitiveKind::TriangleList, &[0, 1, 2, 3, 4]);
        assert_eq!(triangles, vec![Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn test_list_drops_degenerate_group_only() {
        // (7,7,8) collapses; the groups around it are unaffected
        let triangles =
            assemble_triangles(PrimitiveKind::TriangleList, &[0, 1, 2, 7, 7, 8, 3, 4, 5]);
        assert_eq!(
            triangles,
            vec![Triangle::new(0, 1, 2), Triangle::new(3, 4, 5)]
        );
    }

    #[test]
    fn test_strip_alternates_winding() {
        let triangles = assemble_triangles(PrimitiveKind::TriangleStrip, &[0, 1, 2, 3, 4, 5]);
        assert_eq!(
            triangles,
            vec![
                Triangle::new(0, 1, 2),
                Triangle::new(1, 3, 2),
                Triangle::new(2, 3, 4),
                Triangle::new(3, 5, 4),
            ]
        );
    }

    #[test]
    fn test_strip_skips_degenerate_windows() {
        // Repeated index 2 collapses the two windows containing the pair;
        // windows on either side still emit, and window parity is counted
        // from the run start, not from the surviving triangles
        let triangles = assemble_triangles(PrimitiveKind::TriangleStrip, &[0, 1, 2, 2, 3, 4]);
        assert_eq!(
            triangles,
            vec![Triangle::new(0, 1, 2), Triangle::new(2, 4, 3)]
        );
    }

    #[test]
    fn test_fan_repeats_apex() {
        let triangles = assemble_triangles(PrimitiveKind::TriangleFanA, &[0, 1, 2, 3]);
        assert_eq!(
            triangles,
            vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)]
        );
    }

    #[test]
    fn test_fan_variants_decode_identically() {
        let run = [5, 6, 7, 8, 9];
        assert_eq!(
            assemble_triangles(PrimitiveKind::TriangleFanA, &run),
            assemble_triangles(PrimitiveKind::TriangleFanB, &run)
        );
    }

    #[test]
    fn test_fan_skips_degenerate_windows() {
        // apex == first rim index collapses the first window only
        let triangles = assemble_triangles(PrimitiveKind::TriangleFanA, &[0, 0, 1, 2]);
        assert_eq!(triangles, vec![Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn test_short_runs_produce_nothing() {
        for kind in [
            PrimitiveKind::TriangleList,
            PrimitiveKind::TriangleStrip,
            PrimitiveKind::TriangleFanA,
        ] {
            assert!(assemble_triangles(kind, &[]).is_empty());
            assert!(assemble_triangles(kind, &[0]).is_empty());
            assert!(assemble_triangles(kind, &[0, 1]).is_empty());
        }
    }
}
