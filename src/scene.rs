//! The hardcoded scene: two pyramids standing above a floor, lit by a white directional light
//! and a red and a blue point light.

use glam::{Mat4, Vec3};
use glium::Display;
use glutin::surface::WindowSurface;

use crate::{
    buffer::{NORMAL_OFFSET, VERTEX_STRIDE},
    error::MeshError,
    light::{DirectionalLight, Light, Material, PointLight, PointLights},
    mesh::Mesh,
    normals::calc_average_normals,
};

pub const PYRAMID_INDICES: [u32; 12] = [
    0, 3, 1, //
    1, 3, 2, //
    2, 3, 0, //
    0, 1, 2,
];

#[rustfmt::skip]
pub const PYRAMID_VERTICES: [f32; 32] = [
//   x      y      z     u    v    nx   ny   nz
    -1.0, -1.0, -0.6,  0.0, 0.0, 0.0, 0.0, 0.0,
     0.0, -1.0,  1.0,  0.5, 0.0, 0.0, 0.0, 0.0,
     1.0, -1.0, -0.6,  1.0, 0.0, 0.0, 0.0, 0.0,
     0.0,  1.0,  0.0,  0.5, 1.0, 0.0, 0.0, 0.0,
];

pub const FLOOR_INDICES: [u32; 6] = [
    0, 2, 1, //
    1, 2, 3,
];

#[rustfmt::skip]
pub const FLOOR_VERTICES: [f32; 32] = [
    -10.0, 0.0, -10.0,   0.0,  0.0, 0.0, -1.0, 0.0,
     10.0, 0.0, -10.0,  10.0,  0.0, 0.0, -1.0, 0.0,
    -10.0, 0.0,  10.0,   0.0, 10.0, 0.0, -1.0, 0.0,
     10.0, 0.0,  10.0,  10.0, 10.0, 0.0, -1.0, 0.0,
];

/// Pyramid vertices with smoothed normals filled in.
pub fn pyramid_vertices() -> Result<[f32; 32], MeshError> {
    let mut vertices = PYRAMID_VERTICES;
    calc_average_normals(&PYRAMID_INDICES, &mut vertices, VERTEX_STRIDE, NORMAL_OFFSET)?;
    Ok(vertices)
}

/// Uploads the two pyramids followed by the floor.
pub fn build_meshes(display: &Display<WindowSurface>) -> Result<Vec<Mesh>, MeshError> {
    let pyramid = pyramid_vertices()?;
    Ok(vec![
        Mesh::new(display, &pyramid, &PYRAMID_INDICES)?,
        Mesh::new(display, &pyramid, &PYRAMID_INDICES)?,
        Mesh::new(display, &FLOOR_VERTICES, &FLOOR_INDICES)?,
    ])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureId {
    Brick,
    Dirt,
    Plain,
}

impl TextureId {
    pub const ALL: [TextureId; 3] = [TextureId::Brick, TextureId::Dirt, TextureId::Plain];

    pub fn file_name(self) -> &'static str {
        match self {
            TextureId::Brick => "brick.png",
            TextureId::Dirt => "dirt.png",
            TextureId::Plain => "plain.png",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialId {
    Shiny,
    Dull,
}

pub struct Materials {
    pub shiny: Material,
    pub dull: Material,
}

impl Default for Materials {
    fn default() -> Self {
        Self {
            shiny: Material::new(0.02, 4.0),
            dull: Material::new(0.05, 1.0),
        }
    }
}

impl Materials {
    pub fn get(&self, id: MaterialId) -> &Material {
        match id {
            MaterialId::Shiny => &self.shiny,
            MaterialId::Dull => &self.dull,
        }
    }
}

/// One draw: which mesh, where, and how it is shaded.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub mesh: usize,
    pub translation: Vec3,
    pub texture: TextureId,
    pub material: MaterialId,
}

impl Placement {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
    }
}

pub fn placements() -> [Placement; 3] {
    [
        Placement {
            mesh: 0,
            translation: Vec3::new(0.0, 0.0, -2.5),
            texture: TextureId::Brick,
            material: MaterialId::Shiny,
        },
        Placement {
            mesh: 1,
            translation: Vec3::new(0.0, 4.0, -2.5),
            texture: TextureId::Dirt,
            material: MaterialId::Dull,
        },
        Placement {
            mesh: 2,
            translation: Vec3::new(0.0, -2.0, 0.0),
            texture: TextureId::Plain,
            material: MaterialId::Shiny,
        },
    ]
}

pub fn main_light() -> DirectionalLight {
    DirectionalLight::new(
        Light::new(Vec3::ONE, 0.05, 0.05),
        Vec3::new(-1.0, -2.0, 0.7),
    )
}

pub fn point_lights() -> PointLights {
    PointLights::new(vec![
        PointLight::new(
            Light::new(Vec3::new(1.0, 0.0, 0.0), 0.4, 0.8),
            Vec3::ZERO,
            0.3,
            0.2,
            0.1,
        ),
        PointLight::new(
            Light::new(Vec3::new(0.0, 0.0, 1.0), 0.4, 0.8),
            Vec3::new(4.0, 0.0, 0.0),
            0.3,
            0.1,
            0.1,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pyramid_normals_are_unit_and_geometry_untouched() {
        let vertices = pyramid_vertices().unwrap();
        for (record, original) in vertices
            .chunks(VERTEX_STRIDE)
            .zip(PYRAMID_VERTICES.chunks(VERTEX_STRIDE))
        {
            assert_eq!(record[..NORMAL_OFFSET], original[..NORMAL_OFFSET]);
            let n = Vec3::from_slice(&record[NORMAL_OFFSET..]);
            assert!((n.length() - 1.0).abs() < 1e-5, "{n:?}");
        }
    }

    #[test]
    fn apex_normal_leans_away_from_the_front_face() {
        // side faces wind clockwise seen from outside, so smoothed normals point inwards
        let vertices = pyramid_vertices().unwrap();
        let apex = Vec3::from_slice(&vertices[3 * VERTEX_STRIDE + NORMAL_OFFSET..]);
        assert!(apex.y < 0.0, "{apex:?}");
    }

    #[test]
    fn placements_reference_existing_meshes() {
        let placements = placements();
        assert!(placements.iter().all(|p| p.mesh < 3));
        assert_eq!(
            placements[1].model_matrix().transform_point3(Vec3::ZERO),
            Vec3::new(0.0, 4.0, -2.5)
        );
    }

    #[test]
    fn two_point_lights_are_active() {
        assert_eq!(point_lights().len(), 2);
    }

    #[test]
    fn texture_ids_index_their_slot() {
        for (idx, id) in TextureId::ALL.iter().enumerate() {
            assert_eq!(id.index(), idx);
        }
    }
}
