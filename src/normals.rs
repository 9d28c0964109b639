use glam::Vec3;

use crate::{error::NormalsError, geometry::face_normal};

/// Smooths per-vertex normals of an interleaved vertex buffer by averaging the face normals
/// of every triangle that touches a vertex.
///
/// The position is read from the first three floats of each `vertex_stride`-long record and
/// the normal lives at `normal_offset`. Normals are *accumulated* into the buffer before being
/// renormalised, so the normal slots must be zeroed beforehand; calling this twice on the same
/// buffer adds the face normals on top of the previous result.
///
/// A vertex whose accumulated normal is zero (unreferenced, or contributions cancelling out)
/// keeps the zero vector. Every input is validated before the buffer is touched.
pub fn calc_average_normals(
    indices: &[u32],
    vertices: &mut [f32],
    vertex_stride: usize,
    normal_offset: usize,
) -> Result<(), NormalsError> {
    let vertex_count = validate(indices, vertices, vertex_stride, normal_offset)?;
    log::trace!(
        "averaging normals over {} triangles and {vertex_count} vertices",
        indices.len() / 3
    );

    let position = |vertices: &[f32], idx: usize| {
        Vec3::from_slice(&vertices[idx * vertex_stride..idx * vertex_stride + 3])
    };

    for triangle in indices.chunks_exact(3) {
        let idx = [
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        ];
        let normal = face_normal(&idx.map(|i| position(&*vertices, i)));

        for i in idx {
            let slot = i * vertex_stride + normal_offset;
            let accumulated = Vec3::from_slice(&vertices[slot..slot + 3]) + normal;
            accumulated.write_to_slice(&mut vertices[slot..slot + 3]);
        }
    }

    for record in vertices.chunks_exact_mut(vertex_stride) {
        let normal = &mut record[normal_offset..normal_offset + 3];
        Vec3::from_slice(normal)
            .normalize_or_zero()
            .write_to_slice(normal);
    }

    Ok(())
}

/// Returns the vertex count for a well-formed input.
fn validate(
    indices: &[u32],
    vertices: &[f32],
    vertex_stride: usize,
    normal_offset: usize,
) -> Result<usize, NormalsError> {
    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(NormalsError::IndexCount(indices.len()));
    }

    // positions occupy the first three floats of a record
    if normal_offset < 3
        || normal_offset
            .checked_add(3)
            .map_or(true, |end| end > vertex_stride)
    {
        return Err(NormalsError::Layout {
            stride: vertex_stride,
            normal_offset,
        });
    }

    if vertices.is_empty() || vertices.len() % vertex_stride != 0 {
        return Err(NormalsError::BufferLength {
            len: vertices.len(),
            stride: vertex_stride,
        });
    }

    let vertex_count = vertices.len() / vertex_stride;
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(NormalsError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }

    Ok(vertex_count)
}
