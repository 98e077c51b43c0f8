//! Explosion shards and power-up sparks
//!
//! Particles live only in the world's effect list. They never collide with
//! anything; bounds are used for culling and drawing.

use crate::collision::Collidable;
use crate::lifecycle::Transient;
use crate::skin::SkinTier;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::f32::consts::TAU;

#[derive(Debug, Clone)]
pub enum ParticleKind {
    /// A tile cut out of a bird frame. `src` is in frame-local pixels.
    Shard {
        skin: SkinTier,
        frame: usize,
        src: Rect,
    },
    /// A small filled circle
    Spark { color: Color, radius: u32 },
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub alpha: f32,
    pub kind: ParticleKind,
    gravity: f32,
    fade: f32,
    floor_y: i32,
}

impl Particle {
    /// Top-left as integer screen coordinates
    pub fn position(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl Transient for Particle {
    fn update(&mut self) {
        self.vy += self.gravity;
        self.x += self.vx;
        self.y += self.vy;
        self.alpha = (self.alpha - self.fade).max(0.0);
    }

    fn is_expired(&self) -> bool {
        self.get_bounds().top() > self.floor_y || self.alpha <= 0.0
    }
}

impl Collidable for Particle {
    fn get_bounds(&self) -> Rect {
        let (x, y) = self.position();
        match &self.kind {
            ParticleKind::Shard { src, .. } => Rect::new(x, y, src.width(), src.height()),
            ParticleKind::Spark { radius, .. } => {
                Rect::new(x - *radius as i32, y - *radius as i32, radius * 2, radius * 2)
            }
        }
    }
}

/// Describes the sprite being blown apart
#[derive(Debug, Clone, Copy)]
pub struct ExplosionSource {
    pub skin: SkinTier,
    pub frame: usize,
    pub width: u32,
    pub height: u32,
}

/// Splits a sprite into `tile_size` squares and flings each one outward.
///
/// Tiles on the right and bottom edges are clipped to the sprite, so a
/// `w`x`h` sprite yields `ceil(w/tile) * ceil(h/tile)` shards.
pub fn create_explosion<R: Rng>(
    center: (i32, i32),
    source: ExplosionSource,
    tile_size: u32,
    gravity: f32,
    floor_y: i32,
    rng: &mut R,
) -> Vec<Particle> {
    let tile_size = tile_size.max(1);
    let origin_x = center.0 - source.width as i32 / 2;
    let origin_y = center.1 - source.height as i32 / 2;
    let mut particles = Vec::new();

    for i in (0..source.width).step_by(tile_size as usize) {
        for j in (0..source.height).step_by(tile_size as usize) {
            let w = tile_size.min(source.width - i);
            let h = tile_size.min(source.height - j);
            particles.push(Particle {
                x: (origin_x + i as i32) as f32,
                y: (origin_y + j as i32) as f32,
                vx: rng.gen_range(-5.0..=5.0),
                vy: rng.gen_range(-5.0..=-1.0),
                alpha: 255.0,
                kind: ParticleKind::Shard {
                    skin: source.skin,
                    frame: source.frame,
                    src: Rect::new(i as i32, j as i32, w, h),
                },
                gravity,
                fade: 0.0,
                floor_y,
            });
        }
    }

    particles
}

/// A ring of fading sparks, used when the bird earns a new skin.
pub fn create_power_up_burst<R: Rng>(
    center: (i32, i32),
    color: Color,
    count: usize,
    gravity: f32,
    fade: f32,
    floor_y: i32,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(1.5..5.0);
            Particle {
                x: center.0 as f32,
                y: center.1 as f32,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed - 1.0,
                alpha: 255.0,
                kind: ParticleKind::Spark {
                    color,
                    radius: rng.gen_range(2..=4),
                },
                gravity,
                fade: fade.max(0.1),
                floor_y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::update_and_compact;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn source(width: u32, height: u32) -> ExplosionSource {
        ExplosionSource {
            skin: SkinTier::Yellow,
            frame: 0,
            width,
            height,
        }
    }

    #[test]
    fn test_explosion_tile_count_rounds_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let shards = create_explosion((100, 100), source(51, 36), 16, 0.3, 936, &mut rng);
        assert_eq!(shards.len(), 4 * 3);

        let shards = create_explosion((100, 100), source(32, 32), 16, 0.3, 936, &mut rng);
        assert_eq!(shards.len(), 4);
    }

    #[test]
    fn test_edge_tiles_are_clipped() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let shards = create_explosion((100, 100), source(51, 36), 16, 0.3, 936, &mut rng);

        let total_area: u32 = shards
            .iter()
            .map(|p| p.get_bounds().width() * p.get_bounds().height())
            .sum();
        assert_eq!(total_area, 51 * 36);
    }

    #[test]
    fn test_shard_velocity_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shards = create_explosion((100, 100), source(64, 64), 16, 0.3, 936, &mut rng);

        for shard in &shards {
            assert!((-5.0..=5.0).contains(&shard.vx));
            assert!((-5.0..=-1.0).contains(&shard.vy));
        }
    }

    #[test]
    fn test_shards_removed_after_falling_off_screen() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut shards = create_explosion((400, 700), source(51, 36), 16, 0.3, 936, &mut rng);

        for _ in 0..200 {
            update_and_compact(&mut shards);
        }
        assert!(shards.is_empty());
    }

    #[test]
    fn test_burst_fades_out() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut sparks = create_power_up_burst((400, 400), Color::RGB(255, 0, 0), 35, 0.1, 5.0, 936, &mut rng);
        assert_eq!(sparks.len(), 35);

        update_and_compact(&mut sparks);
        assert!(sparks.iter().all(|s| s.alpha == 250.0));

        for _ in 0..60 {
            update_and_compact(&mut sparks);
        }
        assert!(sparks.is_empty());
    }
}
