use glam::{Mat4, Vec3};
use winit::keyboard::KeyCode;

use crate::input::KeyState;

/// Pitch is kept short of straight up/down so the basis never degenerates.
const PITCH_LIMIT: f32 = 89.0;

/// Free-fly camera. Yaw and pitch are in degrees; yaw -90 looks down -Z.
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    move_speed: f32,
    turn_speed: f32,
}

impl Camera {
    pub fn new(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
        move_speed: f32,
        turn_speed: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            move_speed,
            turn_speed,
        };
        camera.update();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// WASD movement scaled by the frame time.
    pub fn key_control(&mut self, keys: &KeyState, dt: f32) {
        let velocity = self.move_speed * dt;

        if keys.is_pressed(KeyCode::KeyW) {
            self.position += self.front * velocity;
        }
        if keys.is_pressed(KeyCode::KeyS) {
            self.position -= self.front * velocity;
        }
        if keys.is_pressed(KeyCode::KeyA) {
            self.position -= self.right * velocity;
        }
        if keys.is_pressed(KeyCode::KeyD) {
            self.position += self.right * velocity;
        }
    }

    /// Turns by a mouse delta; positive `dy` looks up.
    pub fn mouse_control(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.turn_speed;
        self.pitch = (self.pitch + dy * self.turn_speed).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0, 5.0, 0.1)
    }

    fn holding(keys: &[KeyCode]) -> KeyState {
        let mut state = KeyState::default();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = camera();
        assert!(camera.front.abs_diff_eq(Vec3::NEG_Z, EPSILON));
    }

    #[test]
    fn forward_moves_by_speed_times_dt() {
        let mut camera = camera();
        camera.key_control(&holding(&[KeyCode::KeyW]), 0.5);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPSILON));
    }

    #[test]
    fn strafing_and_opposite_keys() {
        let mut camera = camera();
        camera.key_control(&holding(&[KeyCode::KeyD]), 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPSILON));

        camera.key_control(&holding(&[KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyA]), 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::ZERO, EPSILON));
    }

    #[test]
    fn no_keys_no_motion() {
        let mut camera = camera();
        camera.key_control(&KeyState::default(), 10.0);
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn mouse_turns_by_turn_speed() {
        let mut camera = camera();
        camera.mouse_control(900.0, 0.0);
        assert!((camera.yaw - 0.0).abs() < EPSILON);
        assert!(camera.front.abs_diff_eq(Vec3::X, EPSILON));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = camera();
        camera.mouse_control(0.0, 10_000.0);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        camera.mouse_control(0.0, -100_000.0);
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn basis_stays_orthonormal() {
        let mut camera = camera();
        camera.mouse_control(123.0, 456.0);

        for v in [camera.front, camera.right, camera.up] {
            assert!((v.length() - 1.0).abs() < EPSILON);
        }
        assert!(camera.front.dot(camera.right).abs() < EPSILON);
        assert!(camera.front.dot(camera.up).abs() < EPSILON);
        assert!(camera.right.dot(camera.up).abs() < EPSILON);
    }

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let mut camera = camera();
        camera.key_control(&holding(&[KeyCode::KeyW]), 1.0);
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPSILON));
    }
}
