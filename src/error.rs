use std::path::PathBuf;

/// Rejections from `normals::calc_average_normals`. The vertex buffer is left untouched
/// whenever one of these is returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NormalsError {
    #[error("index count {0} is not a positive multiple of 3")]
    IndexCount(usize),

    #[error("vertex stride {stride} cannot hold a position and a normal at offset {normal_offset}")]
    Layout { stride: usize, normal_offset: usize },

    #[error("vertex buffer length {len} is not a positive multiple of the stride {stride}")]
    BufferLength { len: usize, stride: usize },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("index count {0} is not a positive multiple of 3")]
    IndexCount(usize),

    #[error("vertex buffer length {len} is not a multiple of the stride {stride}")]
    BufferLength { len: usize, stride: usize },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("failed to create vertex buffer: {0}")]
    VertexBuffer(#[from] glium::vertex::BufferCreationError),

    #[error("failed to create index buffer: {0}")]
    IndexBuffer(#[from] glium::index::BufferCreationError),

    #[error("failed to derive normals: {0}")]
    Normals(#[from] NormalsError),
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to read shader source {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Carries the driver's compile or link log.
    #[error("failed to build shader program: {0}")]
    Program(#[from] glium::ProgramCreationError),
}

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to upload texture: {0}")]
    Upload(#[from] glium::texture::TextureCreationError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("draw call failed: {0}")]
    Draw(#[from] glium::DrawError),

    #[error("failed to present frame: {0}")]
    Swap(#[from] glium::SwapBuffersError),
}
