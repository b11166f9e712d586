use std::collections::HashMap;

use macroquad::prelude::*;

use crate::core::color::{Rgba, MAGENTA};
use crate::core::TileImage;
use crate::error::MapperError;

/// The minimal drawing capability set the editor needs from its host:
/// fill a rectangle, draw an image scaled into a rectangle, stroke a
/// rectangle outline. Everything the render pass emits goes through this
/// seam, so tests can swap in a recording fake.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn draw_image(&mut self, image: &TileImage, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba);
}

/// Production surface backed by macroquad.
///
/// Ticks draw into a cached render target; every frame the target is
/// blitted to the screen, so the visible image only changes when a tick
/// fires.
pub struct MacroquadSurface {
    target: RenderTarget,
    width: u32,
    height: u32,
    textures: HashMap<String, Texture2D>,
}

impl MacroquadSurface {
    pub async fn new(width: u32, height: u32, manifest: &[&str]) -> Result<Self, MapperError> {
        let target = render_target(width, height);
        target.texture.set_filter(FilterMode::Nearest);

        let created = target.texture.size();
        if created.x < 1.0 || created.y < 1.0 {
            return Err(MapperError::UnsupportedSurface(format!(
                "could not allocate a {width}x{height} render target"
            )));
        }

        let mut textures = HashMap::new();
        for &path in manifest {
            let texture = match load_texture(path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    texture
                }
                Err(err) => {
                    warn!("could not load tile image {}: {}", path, err);
                    Self::placeholder_texture()
                }
            };
            if textures.insert(path.to_string(), texture).is_some() {
                warn!("duplicate tile image {} in manifest", path);
            }
        }

        Ok(Self {
            target,
            width,
            height,
            textures,
        })
    }

    /// Solid magenta stand-in for a tile image that failed to load.
    fn placeholder_texture() -> Texture2D {
        let image = Image::gen_image_color(8, 8, MAGENTA.to_mq_color());
        Texture2D::from_image(&image)
    }

    /// Redirect drawing into the cached render target.
    pub fn begin_tick(&self) {
        set_camera(&Camera2D {
            render_target: Some(self.target.clone()),
            ..Camera2D::from_display_rect(Rect::new(
                0.0,
                0.0,
                self.width as f32,
                self.height as f32,
            ))
        });
    }

    pub fn end_tick(&self) {
        set_default_camera();
    }

    /// Blit the last rendered tick to the screen.
    pub fn present(&self) {
        let params = Self::present_params(self.width, self.height);
        draw_texture_ex(&self.target.texture, 0.0, 0.0, WHITE, params);
    }

    // The tick camera comes from `from_display_rect`, which renders into
    // the target with y inverted; the blit must flip it back or the whole
    // frame comes out mirrored against the pointer coordinates.
    fn present_params(width: u32, height: u32) -> DrawTextureParams {
        DrawTextureParams {
            dest_size: Some(vec2(width as f32, height as f32)),
            flip_y: true,
            ..Default::default()
        }
    }
}

impl DrawSurface for MacroquadSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color.to_mq_color());
    }

    fn draw_image(&mut self, image: &TileImage, rect: Rect) {
        let Some(texture) = self.textures.get(image.path()) else {
            // unknown ref, fall back to the placeholder color
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, MAGENTA.to_mq_color());
            return;
        };
        let params = DrawTextureParams {
            dest_size: Some(vec2(rect.w, rect.h)),
            ..Default::default()
        };
        draw_texture_ex(texture, rect.x, rect.y, WHITE, params);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color.to_mq_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_flips_the_render_target_back_upright() {
        let params = MacroquadSurface::present_params(570, 500);
        assert!(params.flip_y);
        assert_eq!(params.dest_size, Some(vec2(570.0, 500.0)));
    }
}
