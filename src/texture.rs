use std::path::Path;

use glium::{
    texture::{RawImage2d, SrgbTexture2d},
    uniforms::{
        MagnifySamplerFilter, MinifySamplerFilter, SamplerBehavior, SamplerWrapFunction,
        UniformValue,
    },
    Display,
};
use glutin::surface::WindowSurface;

use crate::error::TextureError;

pub struct Texture {
    texture: SrgbTexture2d,
    sampler: SamplerBehavior,
}

impl Texture {
    /// Decodes and uploads an image file.
    pub fn load(display: &Display<WindowSurface>, path: &Path) -> Result<Self, TextureError> {
        let image = image::open(path)
            .map_err(|source| TextureError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let dimensions = image.dimensions();
        // GL rows start at the bottom
        let raw = RawImage2d::from_raw_rgba_reversed(&image.into_raw(), dimensions);
        let texture = SrgbTexture2d::new(display, raw)?;
        log::debug!(
            "loaded texture {} ({}x{})",
            path.display(),
            dimensions.0,
            dimensions.1
        );
        Ok(Self::with_sampler(texture))
    }

    /// Like `load`, but a missing or broken file is logged and replaced with plain white.
    pub fn load_or_plain(
        display: &Display<WindowSurface>,
        path: &Path,
    ) -> Result<Self, TextureError> {
        match Self::load(display, path) {
            Ok(texture) => Ok(texture),
            Err(err @ TextureError::Decode { .. }) => {
                log::error!("{err}, using a plain texture instead");
                Self::plain(display)
            }
            Err(err) => Err(err),
        }
    }

    /// 1x1 white texture.
    pub fn plain(display: &Display<WindowSurface>) -> Result<Self, TextureError> {
        let raw = RawImage2d::from_raw_rgba(vec![255u8; 4], (1, 1));
        Ok(Self::with_sampler(SrgbTexture2d::new(display, raw)?))
    }

    fn with_sampler(texture: SrgbTexture2d) -> Self {
        Self {
            texture,
            sampler: SamplerBehavior {
                wrap_function: (
                    SamplerWrapFunction::Repeat,
                    SamplerWrapFunction::Repeat,
                    SamplerWrapFunction::Repeat,
                ),
                minify_filter: MinifySamplerFilter::Linear,
                magnify_filter: MagnifySamplerFilter::Linear,
                ..Default::default()
            },
        }
    }

    pub fn uniform_value(&self) -> UniformValue<'_> {
        UniformValue::SrgbTexture2d(&self.texture, Some(self.sampler))
    }
}
