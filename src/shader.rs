use std::{fs, path::Path};

use glium::{Display, Program};
use glutin::surface::WindowSurface;

use crate::error::ShaderError;

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Compiles and links the program from a vertex and a fragment source file. A compile or link
/// failure carries the driver's info log.
pub fn from_files(
    display: &Display<WindowSurface>,
    vertex_path: &Path,
    fragment_path: &Path,
) -> Result<Program, ShaderError> {
    let vertex = read_source(vertex_path)?;
    let fragment = read_source(fragment_path)?;

    let program = Program::from_source(display, &vertex, &fragment, None)?;
    log::info!(
        "linked shader program from {} and {}",
        vertex_path.display(),
        fragment_path.display()
    );
    Ok(program)
}
