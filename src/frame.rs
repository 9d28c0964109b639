use std::time::Instant;

use glam::{Mat4, Vec3};
use glium::{
    uniforms::{UniformValue, Uniforms},
    Display, DrawParameters, Frame, Program, Surface,
};
use glutin::surface::WindowSurface;

use crate::{
    camera::Camera,
    config::DemoConfig,
    error::AppError,
    input::InputState,
    light::{DirectionalLight, Material, PointLights},
    mesh::Mesh,
    scene::{self, Materials, Placement, TextureId},
    shader,
    texture::Texture,
};

/// Everything the demo owns. GPU resources are released when this is dropped.
pub struct Application {
    config: DemoConfig,
    meshes: Vec<Mesh>,
    program: Program,
    // indexed by `TextureId::index`
    textures: Vec<Texture>,
    materials: Materials,
    main_light: DirectionalLight,
    point_lights: PointLights,
    placements: [Placement; 3],
    projection: Mat4,
    last_frame: Instant,
    camera: Camera,
    pub input: InputState,
}

impl Application {
    pub fn new(display: &Display<WindowSurface>, config: DemoConfig) -> Result<Self, AppError> {
        let meshes = scene::build_meshes(display)?;
        let program = shader::from_files(display, &config.vertex_shader, &config.fragment_shader)?;
        let textures = TextureId::ALL
            .iter()
            .map(|id| Texture::load_or_plain(display, &config.texture_path(id.file_name())))
            .collect::<Result<Vec<_>, _>>()?;

        let camera = Camera::new(
            config.camera_start,
            config.world_up,
            config.start_yaw,
            config.start_pitch,
            config.move_speed,
            config.turn_speed,
        );
        let projection = projection(&config, display.get_framebuffer_dimensions());

        log::info!("scene ready: {} meshes, {} textures", meshes.len(), textures.len());
        Ok(Self {
            config,
            meshes,
            program,
            textures,
            materials: Materials::default(),
            main_light: scene::main_light(),
            point_lights: scene::point_lights(),
            placements: scene::placements(),
            projection,
            last_frame: Instant::now(),
            camera,
            input: InputState::default(),
        })
    }

    pub fn resize(&mut self, dimensions: (u32, u32)) {
        self.projection = projection(&self.config, dimensions);
    }

    /// Applies the input gathered since the last frame, then draws and presents the scene.
    pub fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<(), AppError> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.camera.key_control(self.input.keys(), dt);
        let (dx, dy) = self.input.take_mouse_delta();
        self.camera.mouse_control(dx, dy);

        let mut target = display.draw();
        let (r, g, b, a) = self.config.clear_color;
        target.clear_color_and_depth((r, g, b, a), 1.0);

        // the frame must be finished even when a draw call fails
        let drawn = self.draw_scene(&mut target);
        target.finish()?;
        drawn
    }

    fn draw_scene(&self, target: &mut Frame) -> Result<(), AppError> {
        let params = draw_parameters(self.input.wireframe());
        let view = self.camera.view_matrix().to_cols_array_2d();
        let projection = self.projection.to_cols_array_2d();
        let eye_position = self.camera.position();

        for placement in &self.placements {
            let uniforms = FrameUniforms {
                model: placement.model_matrix().to_cols_array_2d(),
                view,
                projection,
                eye_position,
                texture: &self.textures[placement.texture.index()],
                material: self.materials.get(placement.material),
                main_light: &self.main_light,
                point_lights: &self.point_lights,
            };
            self.meshes[placement.mesh].render(target, &self.program, &uniforms, &params)?;
        }
        Ok(())
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        log::debug!(
            "releasing {} meshes, {} textures and the shader program",
            self.meshes.len(),
            self.textures.len()
        );
    }
}

fn projection(config: &DemoConfig, dimensions: (u32, u32)) -> Mat4 {
    Mat4::perspective_rh_gl(
        config.fov.to_radians(),
        config.aspect(dimensions),
        config.near,
        config.far,
    )
}

fn draw_parameters(wireframe: bool) -> DrawParameters<'static> {
    DrawParameters {
        depth: glium::Depth {
            test: glium::DepthTest::IfLess,
            write: true,
            ..Default::default()
        },
        polygon_mode: if wireframe {
            glium::PolygonMode::Line
        } else {
            glium::PolygonMode::Fill
        },
        ..Default::default()
    }
}

/// Uniforms for one draw call, named after the declarations in the shader files.
struct FrameUniforms<'t> {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    eye_position: Vec3,
    texture: &'t Texture,
    material: &'t Material,
    main_light: &'t DirectionalLight,
    point_lights: &'t PointLights,
}

impl Uniforms for FrameUniforms<'_> {
    fn visit_values<'a, F: FnMut(&str, UniformValue<'a>)>(&'a self, mut output: F) {
        output("model", UniformValue::Mat4(self.model));
        output("view", UniformValue::Mat4(self.view));
        output("projection", UniformValue::Mat4(self.projection));
        output(
            "eye_position",
            UniformValue::Vec3(self.eye_position.to_array()),
        );
        output("the_texture", self.texture.uniform_value());
        self.material.visit_values(&mut output);
        self.main_light.visit_values(&mut output);
        self.point_lights.visit_values(&mut output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wireframe_switches_polygon_mode() {
        assert_eq!(draw_parameters(false).polygon_mode, glium::PolygonMode::Fill);
        assert_eq!(draw_parameters(true).polygon_mode, glium::PolygonMode::Line);
    }

    #[test]
    fn projection_keeps_near_plane_in_front() {
        let config = DemoConfig::default();
        let proj = projection(&config, (config.width, config.height));
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -config.near));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -config.far));

        assert!((near.z + 1.0).abs() < 1e-4, "{near:?}");
        assert!((far.z - 1.0).abs() < 1e-4, "{far:?}");
    }
}
