//! Pipe spawning and pass detection
//!
//! Pipes are stored individually in the world, while scoring works on pairs.
//! The `ObstacleQueue` holds one `PassUnit` per pair in spawn order, which is
//! also left-to-right order, so only its head ever needs checking.

use crate::config::{GameConfig, PipeConfig};
use crate::pipe::Pipe;
use rand::Rng;
use sdl2::rect::Rect;
use std::collections::VecDeque;

/// A pipe pair waiting to be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassUnit {
    pub pair_id: u64,
    /// Bottom edge of the top pipe
    pub gap_top: i32,
    /// Top edge of the bottom pipe
    pub gap_bottom: i32,
}

/// Result of the bird clearing the head pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    pub unit: PassUnit,
    pub close_shave: bool,
}

/// Emits a new pipe pair whenever the spawn interval has elapsed.
#[derive(Debug, Default)]
pub struct PipeSpawner {
    last_spawn: Option<u64>,
    next_pair_id: u64,
}

impl PipeSpawner {
    pub fn new() -> Self {
        PipeSpawner::default()
    }

    /// The next poll after a reset spawns immediately.
    pub fn reset(&mut self) {
        self.last_spawn = None;
    }

    pub fn poll<R: Rng>(
        &mut self,
        now: u64,
        config: &GameConfig,
        pipe_size: (u32, u32),
        rng: &mut R,
    ) -> Option<(Pipe, Pipe, PassUnit)> {
        let pipes: &PipeConfig = &config.pipes;
        if let Some(last) = self.last_spawn {
            if now.saturating_sub(last) <= pipes.frequency_ms {
                return None;
            }
        }

        let offset = rng.gen_range(pipes.offset_min..=pipes.offset_max);
        let gap_center = config.mid_height() + offset;
        let pair_id = self.next_pair_id;
        self.next_pair_id += 1;
        self.last_spawn = Some(now);

        let (top, bottom) = Pipe::pair(
            pair_id,
            config.screen.width as i32,
            gap_center,
            pipes.gap,
            pipe_size.0,
            pipe_size.1,
            config.physics.scroll_speed,
        );
        let unit = PassUnit {
            pair_id,
            gap_top: top.y + top.height as i32,
            gap_bottom: bottom.y,
        };

        Some((top, bottom, unit))
    }
}

/// FIFO of pipe pairs the bird has not passed yet
#[derive(Debug, Default)]
pub struct ObstacleQueue {
    units: VecDeque<PassUnit>,
}

impl ObstacleQueue {
    pub fn new() -> Self {
        ObstacleQueue::default()
    }

    pub fn push(&mut self, unit: PassUnit) {
        self.units.push_back(unit);
    }

    #[cfg(test)]
    pub fn head(&self) -> Option<&PassUnit> {
        self.units.front()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &PassUnit> {
        self.units.iter()
    }

    /// Checks whether the bird has cleared the head pair.
    ///
    /// The head is popped only when the bird's left edge is strictly past the
    /// pair's trailing edge. A head whose pipes have already scrolled away is
    /// dropped without scoring. At most one pair is scored per call.
    pub fn check_pass(&mut self, bird: &Rect, pipes: &[Pipe], close_shave_px: i32) -> Option<Pass> {
        loop {
            let head = *self.units.front()?;
            let trailing_edge = pipes
                .iter()
                .filter(|pipe| pipe.pair_id == head.pair_id)
                .map(Pipe::right)
                .max();

            let Some(trailing_edge) = trailing_edge else {
                self.units.pop_front();
                continue;
            };

            if bird.left() <= trailing_edge {
                return None;
            }

            self.units.pop_front();
            let clearance = (bird.top() - head.gap_top).min(head.gap_bottom - bird.bottom());
            return Some(Pass {
                unit: head,
                close_shave: clearance < close_shave_px,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const PIPE_SIZE: (u32, u32) = (78, 560);

    fn spawn_at(queue: &mut ObstacleQueue, pipes: &mut Vec<Pipe>, id: u64, x: i32, center: i32) {
        let (top, bottom) = Pipe::pair(id, x, center, 200, PIPE_SIZE.0, PIPE_SIZE.1, 4);
        queue.push(PassUnit {
            pair_id: id,
            gap_top: top.y + top.height as i32,
            gap_bottom: bottom.y,
        });
        pipes.push(top);
        pipes.push(bottom);
    }

    #[test]
    fn test_spawner_respects_interval() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut spawner = PipeSpawner::new();

        assert!(spawner.poll(0, &config, PIPE_SIZE, &mut rng).is_some());
        assert!(spawner.poll(1000, &config, PIPE_SIZE, &mut rng).is_none());
        assert!(spawner.poll(1500, &config, PIPE_SIZE, &mut rng).is_none());
        assert!(spawner.poll(1501, &config, PIPE_SIZE, &mut rng).is_some());

        spawner.reset();
        assert!(spawner.poll(1502, &config, PIPE_SIZE, &mut rng).is_some());
    }

    #[test]
    fn test_spawned_gap_stays_in_range() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let mut spawner = PipeSpawner::new();

        for i in 0..200u64 {
            let (top, bottom, unit) = spawner
                .poll(i * 2000, &config, PIPE_SIZE, &mut rng)
                .unwrap();
            let center = (unit.gap_top + unit.gap_bottom) / 2;
            assert!((468 - 300..=468 + 100).contains(&center));
            assert_eq!(unit.gap_bottom - unit.gap_top, 200);
            assert_eq!(top.x, 864);
            assert_eq!(unit.pair_id, i);
            assert_eq!(bottom.pair_id, i);
        }
    }

    #[test]
    fn test_queue_stays_in_spawn_order() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut spawner = PipeSpawner::new();
        let mut queue = ObstacleQueue::new();

        for i in 0..10u64 {
            let (_, _, unit) = spawner.poll(i * 1600, &config, PIPE_SIZE, &mut rng).unwrap();
            queue.push(unit);
        }

        let ids: Vec<u64> = queue.iter().map(|u| u.pair_id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_pass_requires_strictly_past_trailing_edge() {
        let mut queue = ObstacleQueue::new();
        let mut pipes = Vec::new();
        spawn_at(&mut queue, &mut pipes, 0, 0, 468); // trailing edge at 78

        let on_edge = Rect::new(78, 450, 51, 36);
        assert_eq!(queue.check_pass(&on_edge, &pipes, 10), None);
        assert_eq!(queue.len(), 1);

        let past = Rect::new(79, 450, 51, 36);
        let pass = queue.check_pass(&past, &pipes, 10).unwrap();
        assert_eq!(pass.unit.pair_id, 0);
        assert!(queue.is_empty());
        assert_eq!(queue.check_pass(&past, &pipes, 10), None);
    }

    #[test]
    fn test_only_head_is_scored_per_check() {
        let mut queue = ObstacleQueue::new();
        let mut pipes = Vec::new();
        spawn_at(&mut queue, &mut pipes, 0, 0, 468);
        spawn_at(&mut queue, &mut pipes, 1, 10, 468);

        let bird = Rect::new(200, 450, 51, 36);
        assert_eq!(queue.check_pass(&bird, &pipes, 10).unwrap().unit.pair_id, 0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.check_pass(&bird, &pipes, 10).unwrap().unit.pair_id, 1);
    }

    #[test]
    fn test_despawned_head_is_dropped_unscored() {
        let mut queue = ObstacleQueue::new();
        let mut pipes = Vec::new();
        spawn_at(&mut queue, &mut pipes, 0, 0, 468);
        spawn_at(&mut queue, &mut pipes, 1, 500, 468);
        pipes.retain(|p| p.pair_id != 0);

        let bird = Rect::new(100, 450, 51, 36);
        assert_eq!(queue.check_pass(&bird, &pipes, 10), None);
        assert_eq!(queue.head().map(|u| u.pair_id), Some(1));
    }

    #[test]
    fn test_close_shave_detection() {
        let mut queue = ObstacleQueue::new();
        let mut pipes = Vec::new();
        // gap spans 368..568
        spawn_at(&mut queue, &mut pipes, 0, 0, 468);
        spawn_at(&mut queue, &mut pipes, 1, 0, 468);
        spawn_at(&mut queue, &mut pipes, 2, 0, 468);

        let near_top = Rect::new(100, 375, 51, 36);
        assert!(queue.check_pass(&near_top, &pipes, 10).unwrap().close_shave);

        let near_bottom = Rect::new(100, 568 - 36 - 9, 51, 36);
        assert!(queue.check_pass(&near_bottom, &pipes, 10).unwrap().close_shave);

        let centered = Rect::new(100, 450, 51, 36);
        assert!(!queue.check_pass(&centered, &pipes, 10).unwrap().close_shave);
    }
}
