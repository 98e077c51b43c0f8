use crate::animation::FrameCycler;
use crate::collision::Collidable;
use crate::config::PhysicsConfig;
use crate::skin::SkinTier;
use sdl2::rect::Rect;

/// Frames per skin (wings up, level, down)
pub const BIRD_FRAMES: usize = 3;

/// The player-controlled bird.
///
/// Created once at startup and repositioned by `reset` for every run.
/// Position is the top-left corner of the sprite in screen pixels.
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub velocity: f32,
    /// Set while the flap input is held so holding does not repeat the jump
    pub clicked: bool,
    /// Hidden once the bird explodes
    pub visible: bool,
    skin: SkinTier,
    animation: FrameCycler,
}

impl Bird {
    pub fn new(x: i32, y: i32, width: u32, height: u32, ticks_per_frame: u32) -> Self {
        Bird {
            x,
            y,
            width,
            height,
            velocity: 0.0,
            clicked: false,
            visible: true,
            skin: SkinTier::default(),
            animation: FrameCycler::new(BIRD_FRAMES, ticks_per_frame),
        }
    }

    /// Put the bird back at its spawn point for a new run.
    pub fn reset(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.velocity = 0.0;
        self.visible = true;
        self.animation.reset();
    }

    /// Advance one playing tick.
    ///
    /// Applies gravity, moves the bird (never below `ground_y`), handles the
    /// flap input and steps the wing animation. Returns true if the bird
    /// flapped this tick.
    pub fn update(&mut self, flap_held: bool, physics: &PhysicsConfig, ground_y: i32) -> bool {
        self.velocity = (self.velocity + physics.gravity).min(physics.max_fall_speed);

        if self.bottom() < ground_y {
            self.y += self.velocity.floor() as i32;
            if self.bottom() > ground_y {
                self.y = ground_y - self.height as i32;
            }
        }

        let mut flapped = false;
        if flap_held && !self.clicked {
            self.clicked = true;
            self.velocity = physics.jump_impulse;
            flapped = true;
        }
        if !flap_held {
            self.clicked = false;
        }

        self.animation.tick();
        flapped
    }

    /// Launch impulse used when a run starts.
    pub fn jump(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    /// Sprite rotation in degrees, counter-clockwise positive.
    ///
    /// Nose follows the velocity while alive; a dead bird points straight down.
    pub fn rotation(&self, alive: bool) -> f64 {
        if alive {
            (self.velocity * -2.0) as f64
        } else {
            -90.0
        }
    }

    /// Swap the frame set. Animation position is kept.
    pub fn change_skin(&mut self, tier: SkinTier) {
        self.skin = tier;
    }

    pub fn skin(&self) -> SkinTier {
        self.skin
    }

    pub fn current_frame(&self) -> usize {
        self.animation.current_frame()
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width as i32 / 2, self.y + self.height as i32 / 2)
    }

    fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

impl Collidable for Bird {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
