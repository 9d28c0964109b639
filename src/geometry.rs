use glam::Vec3;

/// Unit normal of a triangle by the right-hand rule over its winding. Zero-area triangles
/// yield `Vec3::ZERO`.
pub fn face_normal(triangle: &[Vec3; 3]) -> Vec3 {
    (triangle[1] - triangle[0])
        .cross(triangle[2] - triangle[0])
        .normalize_or_zero()
}
