use crate::collision::Collidable;
use crate::lifecycle::Transient;
use sdl2::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeSide {
    /// Hangs from the top of the screen, drawn flipped vertically
    Top,
    Bottom,
}

/// One half of a pipe pair.
///
/// Both halves of a pair share `pair_id` so the obstacle queue can find them
/// again; each half scrolls and despawns on its own.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub pair_id: u64,
    pub side: PipeSide,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    speed: i32,
}

impl Pipe {
    /// Builds the top and bottom pipes around a gap centered on `gap_center`.
    pub fn pair(
        pair_id: u64,
        x: i32,
        gap_center: i32,
        gap: i32,
        width: u32,
        height: u32,
        speed: i32,
    ) -> (Pipe, Pipe) {
        let top = Pipe {
            pair_id,
            side: PipeSide::Top,
            x,
            y: gap_center - gap / 2 - height as i32,
            width,
            height,
            speed,
        };
        let bottom = Pipe {
            pair_id,
            side: PipeSide::Bottom,
            x,
            y: gap_center + gap / 2,
            width,
            height,
            speed,
        };
        (top, bottom)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }
}

impl Transient for Pipe {
    fn update(&mut self) {
        self.x -= self.speed;
    }

    fn is_expired(&self) -> bool {
        self.right() < 0
    }
}

impl Collidable for Pipe {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
