/// Collision detection for the bird, pipes and screen edges
///
/// Everything in the game is an axis-aligned rectangle, so the whole system is
/// a trait that exposes bounds plus a couple of pure AABB helpers.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by Bird, Pipe and Particle
/// - AABB functions: stateless rectangle tests used by the game loop
use sdl2::rect::Rect;

/// Trait for entities that occupy space on screen.
///
/// The returned `Rect` must match what is drawn, since the same bounds are
/// used both for collision and for pass detection.
pub trait Collidable {
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Touching edges do not count as an intersection.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the indices of every entity in `entities` that overlaps `entity`.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();
    let mut collisions = Vec::new();

    for (index, other) in entities.iter().enumerate() {
        if aabb_intersect(&entity_bounds, &other.get_bounds()) {
            collisions.push(index);
        }
    }

    collisions
}

/// Which screen edge, if any, a rectangle has crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeBreach {
    Ceiling,
    Ground,
}

/// Ceiling is breached once the top edge goes above y = 0, the ground once
/// the bottom edge reaches `ground_y`.
pub fn check_edge_breach(bounds: &Rect, ground_y: i32) -> Option<EdgeBreach> {
    if bounds.top() < 0 {
        Some(EdgeBreach::Ceiling)
    } else if bounds.bottom() >= ground_y {
        Some(EdgeBreach::Ground)
    } else {
        None
    }
}
