use glium::{
    implement_vertex, index::PrimitiveType, uniforms::Uniforms, Display, DrawParameters,
    IndexBuffer, Program, Surface, VertexBuffer,
};
use glutin::surface::WindowSurface;

use crate::{
    buffer::{check_indices, InterleavedVertices},
    error::{AppError, MeshError},
};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
    pub normal: [f32; 3],
}

implement_vertex!(Vertex, position, tex_coord, normal);

/// Geometry living on the GPU. Buffers are released when the mesh is dropped.
pub struct Mesh {
    vertex_buffer: VertexBuffer<Vertex>,
    index_buffer: IndexBuffer<u32>,
}

impl Mesh {
    /// Uploads flat interleaved vertex records and a triangle list.
    pub fn new(
        display: &Display<WindowSurface>,
        vertices: &[f32],
        indices: &[u32],
    ) -> Result<Self, MeshError> {
        let vertices = Vec::<Vertex>::try_from(InterleavedVertices(vertices))?;
        check_indices(indices, vertices.len())?;

        let vertex_buffer = VertexBuffer::new(display, &vertices)?;
        let index_buffer = IndexBuffer::new(display, PrimitiveType::TrianglesList, indices)?;
        log::debug!(
            "uploaded mesh: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
        })
    }

    pub fn render<S: Surface, U: Uniforms>(
        &self,
        target: &mut S,
        program: &Program,
        uniforms: &U,
        params: &DrawParameters<'_>,
    ) -> Result<(), AppError> {
        target.draw(
            &self.vertex_buffer,
            &self.index_buffer,
            program,
            uniforms,
            params,
        )?;
        Ok(())
    }
}
