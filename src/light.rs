//! Light and material records, and the uniform names they are uploaded under.
//!
//! Names mirror the structs declared in `shaders/fragment.shader`.

use glam::Vec3;
use glium::uniforms::UniformValue;

/// Size of the `point_lights` array in the fragment shader.
pub const MAX_POINT_LIGHTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub colour: Vec3,
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
}

impl Light {
    pub fn new(colour: Vec3, ambient_intensity: f32, diffuse_intensity: f32) -> Self {
        Self {
            colour,
            ambient_intensity,
            diffuse_intensity,
        }
    }

    fn visit_values<'a, F>(&'a self, prefix: &str, output: &mut F)
    where
        F: FnMut(&str, UniformValue<'a>) + ?Sized,
    {
        output(
            &format!("{prefix}.colour"),
            UniformValue::Vec3(self.colour.to_array()),
        );
        output(
            &format!("{prefix}.ambient_intensity"),
            UniformValue::Float(self.ambient_intensity),
        );
        output(
            &format!("{prefix}.diffuse_intensity"),
            UniformValue::Float(self.diffuse_intensity),
        );
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub base: Light,
    pub direction: Vec3,
}

impl DirectionalLight {
    pub fn new(base: Light, direction: Vec3) -> Self {
        Self { base, direction }
    }

    pub fn visit_values<'a, F>(&'a self, output: &mut F)
    where
        F: FnMut(&str, UniformValue<'a>) + ?Sized,
    {
        self.base.visit_values("directional_light.base", output);
        output(
            "directional_light.direction",
            UniformValue::Vec3(self.direction.to_array()),
        );
    }
}

/// Light falling off with distance as `1 / (exponent * d^2 + linear * d + constant)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub base: Light,
    pub position: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub exponent: f32,
}

impl PointLight {
    pub fn new(base: Light, position: Vec3, constant: f32, linear: f32, exponent: f32) -> Self {
        Self {
            base,
            position,
            constant,
            linear,
            exponent,
        }
    }

    fn visit_values<'a, F>(&'a self, idx: usize, output: &mut F)
    where
        F: FnMut(&str, UniformValue<'a>) + ?Sized,
    {
        let prefix = format!("point_lights[{idx}]");
        self.base.visit_values(&format!("{prefix}.base"), output);
        output(
            &format!("{prefix}.position"),
            UniformValue::Vec3(self.position.to_array()),
        );
        output(
            &format!("{prefix}.constant"),
            UniformValue::Float(self.constant),
        );
        output(&format!("{prefix}.linear"), UniformValue::Float(self.linear));
        output(
            &format!("{prefix}.exponent"),
            UniformValue::Float(self.exponent),
        );
    }
}

/// Active point lights. The length of the list is the count uploaded to the shader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointLights(Vec<PointLight>);

impl PointLights {
    /// Keeps at most `MAX_POINT_LIGHTS`, dropping the tail.
    pub fn new(mut lights: Vec<PointLight>) -> Self {
        if lights.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "{} point lights requested, only the first {MAX_POINT_LIGHTS} are used",
                lights.len()
            );
            lights.truncate(MAX_POINT_LIGHTS);
        }
        Self(lights)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub fn visit_values<'a, F>(&'a self, output: &mut F)
    where
        F: FnMut(&str, UniformValue<'a>) + ?Sized,
    {
        let count = i32::try_from(self.len()).unwrap_or(i32::MAX);
        output("point_light_count", UniformValue::SignedInt(count));
        for (idx, light) in self.0.iter().enumerate() {
            light.visit_values(idx, output);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub specular_intensity: f32,
    pub shininess: f32,
}

impl Material {
    pub fn new(specular_intensity: f32, shininess: f32) -> Self {
        Self {
            specular_intensity,
            shininess,
        }
    }

    pub fn visit_values<'a, F>(&'a self, output: &mut F)
    where
        F: FnMut(&str, UniformValue<'a>) + ?Sized,
    {
        output(
            "material.specular_intensity",
            UniformValue::Float(self.specular_intensity),
        );
        output("material.shininess", UniformValue::Float(self.shininess));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_light(x: f32) -> PointLight {
        PointLight::new(
            Light::new(Vec3::X, 0.4, 0.8),
            Vec3::new(x, 0.0, 0.0),
            0.3,
            0.2,
            0.1,
        )
    }

    fn names(visit: impl FnOnce(&mut dyn FnMut(&str, UniformValue<'_>))) -> Vec<String> {
        let mut names = Vec::new();
        visit(&mut |name: &str, _: UniformValue<'_>| names.push(name.to_owned()));
        names
    }

    #[test]
    fn list_length_is_the_active_count() {
        let lights = PointLights::new(vec![red_light(0.0), red_light(4.0)]);
        assert_eq!(lights.len(), 2);

        let mut count = None;
        lights.visit_values(&mut |name, value| {
            if name == "point_light_count" {
                if let UniformValue::SignedInt(n) = value {
                    count = Some(n);
                }
            }
        });
        assert_eq!(count, Some(2));
    }

    #[test]
    fn extra_point_lights_are_dropped() {
        let lights = PointLights::new((0..5).map(|x| red_light(x as f32)).collect());
        assert_eq!(lights.len(), MAX_POINT_LIGHTS);
        assert_eq!(lights.0.last().unwrap().position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn point_light_uniform_names() {
        let lights = PointLights::new(vec![red_light(0.0), red_light(4.0)]);
        let names = names(|f| lights.visit_values(f));

        assert_eq!(names.len(), 1 + 2 * 7);
        assert_eq!(names[0], "point_light_count");
        assert!(names.contains(&"point_lights[0].base.colour".to_owned()));
        assert!(names.contains(&"point_lights[1].exponent".to_owned()));
        assert!(!names.iter().any(|n| n.starts_with("point_lights[2]")));
    }

    #[test]
    fn directional_and_material_uniform_names() {
        let light = DirectionalLight::new(Light::new(Vec3::ONE, 0.05, 0.05), Vec3::NEG_Y);
        assert_eq!(
            names(|f| light.visit_values(f)),
            [
                "directional_light.base.colour",
                "directional_light.base.ambient_intensity",
                "directional_light.base.diffuse_intensity",
                "directional_light.direction",
            ]
        );

        let material = Material::new(0.02, 4.0);
        assert_eq!(
            names(|f| material.visit_values(f)),
            ["material.specular_intensity", "material.shininess"]
        );
    }
}
