use crate::bird::{Bird, BIRD_FRAMES};
use crate::particle::{Particle, ParticleKind};
use crate::pipe::{Pipe, PipeSide};
use crate::skin::SkinTier;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, String> {
    let texture = texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
    tracing::debug!("Loaded texture {}", path.display());
    Ok(texture)
}

/// Frame textures for every skin tier, indexed by tier ordinal then frame.
pub struct BirdSprites<'a> {
    frames: Vec<Vec<Texture<'a>>>,
}

impl<'a> BirdSprites<'a> {
    /// Loads `<dir>/<skin>/bird1.png` .. `bird3.png` for each tier.
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, dir: &Path) -> Result<Self, String> {
        let mut frames = Vec::with_capacity(SkinTier::ALL.len());
        for tier in SkinTier::ALL {
            let mut set = Vec::with_capacity(BIRD_FRAMES);
            for n in 1..=BIRD_FRAMES {
                let path = dir.join(tier.name()).join(format!("bird{}.png", n));
                set.push(load_texture(texture_creator, &path)?);
            }
            frames.push(set);
        }
        Ok(BirdSprites { frames })
    }

    pub fn frame(&self, tier: SkinTier, index: usize) -> Result<&Texture<'a>, String> {
        self.frames
            .get(tier.ordinal())
            .and_then(|set| set.get(index))
            .ok_or_else(|| format!("No bird frame {} for {} skin", index, tier.name()))
    }

    /// Size of the first yellow frame; every frame is assumed to match it.
    pub fn frame_size(&self) -> Result<(u32, u32), String> {
        let query = self.frame(SkinTier::Yellow, 0)?.query();
        Ok((query.width, query.height))
    }
}

/// Draws the bird rotated about its center.
///
/// Rotation is counter-clockwise positive while SDL rotates clockwise, hence
/// the negation.
pub fn draw_bird(
    canvas: &mut Canvas<Window>,
    sprites: &BirdSprites,
    bird: &Bird,
    alive: bool,
) -> Result<(), String> {
    if !bird.visible {
        return Ok(());
    }
    let texture = sprites.frame(bird.skin(), bird.current_frame())?;
    let dest = Rect::new(bird.x, bird.y, bird.width, bird.height);
    canvas.copy_ex(texture, None, Some(dest), -bird.rotation(alive), None, false, false)
}

/// Top pipes are the same texture flipped vertically.
pub fn draw_pipe(canvas: &mut Canvas<Window>, texture: &Texture, pipe: &Pipe) -> Result<(), String> {
    let dest = Rect::new(pipe.x, pipe.y, pipe.width, pipe.height);
    let flip_vertical = pipe.side == PipeSide::Top;
    canvas.copy_ex(texture, None, Some(dest), 0.0, None, false, flip_vertical)
}

pub fn draw_particle(canvas: &mut Canvas<Window>, sprites: &BirdSprites, particle: &Particle) -> Result<(), String> {
    let (x, y) = particle.position();
    match &particle.kind {
        ParticleKind::Shard { skin, frame, src } => {
            let texture = sprites.frame(*skin, *frame)?;
            let dest = Rect::new(x, y, src.width(), src.height());
            canvas.copy(texture, Some(*src), Some(dest))
        }
        ParticleKind::Spark { color, radius } => {
            let alpha = particle.alpha.clamp(0.0, 255.0) as u8;
            let color = Color::RGBA(color.r, color.g, color.b, alpha);
            fill_circle(canvas, Point::new(x, y), *radius as i32, color)
        }
    }
}

/// Filled circle from horizontal spans
pub fn fill_circle(canvas: &mut Canvas<Window>, center: Point, radius: i32, color: Color) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(color);
    for dy in -radius..=radius {
        let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        canvas.draw_line(
            Point::new(center.x() - half, center.y() + dy),
            Point::new(center.x() + half, center.y() + dy),
        )?;
    }
    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}
