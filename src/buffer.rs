use crate::{error::MeshError, mesh::Vertex};

/// Floats per interleaved record: position, texture coordinate, normal.
pub const VERTEX_STRIDE: usize = 8;
pub const NORMAL_OFFSET: usize = 5;

/// Flat `x y z u v nx ny nz` records as they are written out in the scene tables.
pub struct InterleavedVertices<'a>(pub &'a [f32]);

impl TryFrom<InterleavedVertices<'_>> for Vec<Vertex> {
    type Error = MeshError;
    fn try_from(flat: InterleavedVertices) -> Result<Vec<Vertex>, MeshError> {
        if flat.0.len() % VERTEX_STRIDE != 0 {
            return Err(MeshError::BufferLength {
                len: flat.0.len(),
                stride: VERTEX_STRIDE,
            });
        }

        Ok(flat
            .0
            .chunks_exact(VERTEX_STRIDE)
            .map(|r| Vertex {
                position: [r[0], r[1], r[2]],
                tex_coord: [r[3], r[4]],
                normal: [r[5], r[6], r[7]],
            })
            .collect())
    }
}

/// Checks the triangle list shape and every index against the vertex count before anything
/// is uploaded.
pub fn check_indices(indices: &[u32], vertex_count: usize) -> Result<(), MeshError> {
    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(MeshError::IndexCount(indices.len()));
    }

    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(MeshError::IndexOutOfRange {
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}
