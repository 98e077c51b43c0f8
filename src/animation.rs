/// Tick-driven frame cycling for looping sprite animations.
///
/// The game runs at a fixed tick rate, so frame timing is counted in ticks
/// rather than wall-clock durations: a frame stays up for `ticks_per_frame`
/// ticks and the animation loops back to frame 0 after the last one.
#[derive(Debug, Clone)]
pub struct FrameCycler {
    frame_count: usize,
    ticks_per_frame: u32,
    counter: u32,
    current_frame: usize,
}

impl FrameCycler {
    pub fn new(frame_count: usize, ticks_per_frame: u32) -> Self {
        FrameCycler {
            frame_count: frame_count.max(1),
            ticks_per_frame: ticks_per_frame.max(1),
            counter: 0,
            current_frame: 0,
        }
    }

    pub fn tick(&mut self) {
        self.counter += 1;
        if self.counter >= self.ticks_per_frame {
            self.counter = 0;
            self.current_frame = (self.current_frame + 1) % self.frame_count;
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
        self.current_frame = 0;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_advances_every_n_ticks() {
        let mut cycler = FrameCycler::new(3, 6);

        for _ in 0..5 {
            cycler.tick();
        }
        assert_eq!(cycler.current_frame(), 0);

        cycler.tick();
        assert_eq!(cycler.current_frame(), 1);
    }

    #[test]
    fn test_loops_back_to_first_frame() {
        let mut cycler = FrameCycler::new(3, 6);

        for _ in 0..18 {
            cycler.tick();
        }
        assert_eq!(cycler.current_frame(), 0);

        for _ in 0..12 {
            cycler.tick();
        }
        assert_eq!(cycler.current_frame(), 2);
    }

    #[test]
    fn test_reset() {
        let mut cycler = FrameCycler::new(3, 2);
        cycler.tick();
        cycler.tick();
        cycler.tick();
        cycler.reset();
        assert_eq!(cycler.current_frame(), 0);
    }
}
