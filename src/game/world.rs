// GameWorld struct and entity management
//
// The world owns every entity: the bird, the pipes, the queue of pairs still
// to be scored and the particle effects. It knows nothing about menus or
// achievements; the Game drives it and turns what happens into events.

use crate::bird::Bird;
use crate::collision::{self, Collidable, EdgeBreach};
use crate::config::GameConfig;
use crate::lifecycle::update_and_compact;
use crate::obstacles::{ObstacleQueue, Pass, PipeSpawner};
use crate::particle::{self, ExplosionSource, Particle};
use crate::pipe::Pipe;
use crate::skin::SkinTier;
use rand::Rng;

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Ceiling,
    Ground,
    Pipe,
}

pub struct GameWorld {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub queue: ObstacleQueue,
    pub spawner: PipeSpawner,
    pub particles: Vec<Particle>,
    pipe_size: (u32, u32),
}

impl GameWorld {
    pub fn new(config: &GameConfig, bird_size: (u32, u32), pipe_size: (u32, u32)) -> Self {
        GameWorld {
            bird: Bird::new(
                config.physics.bird_start_x,
                config.mid_height(),
                bird_size.0,
                bird_size.1,
                config.physics.ticks_per_frame,
            ),
            pipes: Vec::new(),
            queue: ObstacleQueue::new(),
            spawner: PipeSpawner::new(),
            particles: Vec::new(),
            pipe_size,
        }
    }

    /// Empties the field and puts a yellow bird back at the start point.
    pub fn reset(&mut self, config: &GameConfig) {
        self.pipes.clear();
        self.queue.clear();
        self.spawner.reset();
        self.particles.clear();
        self.bird.reset(config.physics.bird_start_x, config.mid_height());
        self.bird.change_skin(SkinTier::Yellow);
    }

    /// Spawns a pair if it is time, then scrolls every pipe.
    pub fn advance_pipes<R: Rng>(&mut self, now: u64, config: &GameConfig, rng: &mut R) {
        if let Some((top, bottom, unit)) = self.spawner.poll(now, config, self.pipe_size, rng) {
            tracing::debug!("Spawned pipe pair {} (gap {}..{})", unit.pair_id, unit.gap_top, unit.gap_bottom);
            self.pipes.push(top);
            self.pipes.push(bottom);
            self.queue.push(unit);
        }
        update_and_compact(&mut self.pipes);
    }

    pub fn advance_particles(&mut self) {
        update_and_compact(&mut self.particles);
    }

    pub fn check_pass(&mut self, close_shave_px: i32) -> Option<Pass> {
        let bounds = self.bird.get_bounds();
        self.queue.check_pass(&bounds, &self.pipes, close_shave_px)
    }

    /// Ceiling is checked first so a bird touching both reports the ceiling.
    pub fn check_crash(&self, ground_y: i32) -> Option<Crash> {
        let bounds = self.bird.get_bounds();
        match collision::check_edge_breach(&bounds, ground_y) {
            Some(EdgeBreach::Ceiling) => return Some(Crash::Ceiling),
            Some(EdgeBreach::Ground) => return Some(Crash::Ground),
            None => {}
        }
        if !collision::check_collisions_with_collection(&self.bird, &self.pipes).is_empty() {
            return Some(Crash::Pipe);
        }
        None
    }

    /// Blows the bird apart into shards and hides it.
    pub fn explode_bird<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let source = ExplosionSource {
            skin: self.bird.skin(),
            frame: self.bird.current_frame(),
            width: self.bird.width,
            height: self.bird.height,
        };
        let shards = particle::create_explosion(
            self.bird.center(),
            source,
            config.effects.tile_size,
            config.effects.shard_gravity,
            config.screen.height as i32,
            rng,
        );
        tracing::debug!("Bird exploded into {} shards", shards.len());
        self.particles.extend(shards);
        self.bird.visible = false;
    }

    pub fn power_up_burst<R: Rng>(&mut self, tier: SkinTier, config: &GameConfig, rng: &mut R) {
        let effects = &config.effects;
        self.particles.extend(particle::create_power_up_burst(
            self.bird.center(),
            tier.burst_color(),
            effects.burst_count,
            effects.burst_gravity,
            effects.burst_fade,
            config.screen.height as i32,
            rng,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::PipeSide;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const BIRD: (u32, u32) = (51, 36);
    const PIPE: (u32, u32) = (78, 560);

    fn world() -> (GameWorld, GameConfig) {
        let config = GameConfig::default();
        (GameWorld::new(&config, BIRD, PIPE), config)
    }

    #[test]
    fn test_first_pipe_pair_spawns_at_right_edge() {
        let (mut world, config) = world();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        world.advance_pipes(0, &config, &mut rng);
        assert_eq!(world.pipes.len(), 2);
        assert_eq!(world.queue.len(), 1);
        // Spawned at the screen edge, then scrolled once
        assert!(world.pipes.iter().all(|p| p.x == 864 - 4));
        assert!(world.pipes.iter().any(|p| p.side == PipeSide::Top));

        world.advance_pipes(1500, &config, &mut rng);
        assert_eq!(world.pipes.len(), 2);
        world.advance_pipes(1501, &config, &mut rng);
        assert_eq!(world.pipes.len(), 4);
    }

    #[test]
    fn test_crash_detection() {
        let (mut world, config) = world();
        assert_eq!(world.check_crash(config.screen.ground_y), None);

        world.bird.y = -1;
        assert_eq!(world.check_crash(config.screen.ground_y), Some(Crash::Ceiling));

        world.bird.y = config.screen.ground_y - BIRD.1 as i32;
        assert_eq!(world.check_crash(config.screen.ground_y), Some(Crash::Ground));

        world.bird.y = 100;
        let (top, bottom) = Pipe::pair(0, world.bird.x, 468, 200, PIPE.0, PIPE.1, 4);
        world.pipes.push(top);
        world.pipes.push(bottom);
        assert_eq!(world.check_crash(config.screen.ground_y), Some(Crash::Pipe));
    }

    #[test]
    fn test_explosion_hides_bird() {
        let (mut world, config) = world();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        world.explode_bird(&config, &mut rng);
        assert!(!world.bird.visible);
        assert_eq!(world.particles.len(), 4 * 3);

        world.reset(&config);
        assert!(world.bird.visible);
        assert!(world.particles.is_empty());
    }
}
