use std::path::PathBuf;

use glam::Vec3;

/// Fixed settings of the demo. There is no way to override them at runtime.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: (f32, f32, f32, f32),

    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,

    pub camera_start: Vec3,
    pub world_up: Vec3,
    pub start_yaw: f32,
    pub start_pitch: f32,
    pub move_speed: f32,
    pub turn_speed: f32,

    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub textures_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "lit pyramids".to_owned(),
            width: 1366,
            height: 768,
            clear_color: (0.0, 0.0, 0.0, 1.0),
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            camera_start: Vec3::ZERO,
            world_up: Vec3::Y,
            start_yaw: -90.0,
            start_pitch: 0.0,
            move_speed: 5.0,
            turn_speed: 0.1,
            vertex_shader: PathBuf::from("shaders/vertex.shader"),
            fragment_shader: PathBuf::from("shaders/fragment.shader"),
            textures_dir: PathBuf::from("textures"),
        }
    }
}

impl DemoConfig {
    pub fn texture_path(&self, name: &str) -> PathBuf {
        self.textures_dir.join(name)
    }

    /// Aspect ratio of a framebuffer; a zero height (minimised window) falls back to the
    /// configured window size.
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect(&self, (width, height): (u32, u32)) -> f32 {
        if height == 0 {
            self.width as f32 / self.height as f32
        } else {
            width as f32 / height as f32
        }
    }
}
