//! Per-tick lifecycle for short-lived objects (pipes, particles)
//!
//! Collections are plain `Vec`s. Each tick every item is advanced and then
//! the expired ones are dropped in a single `retain` pass.

/// Objects that move on their own and eventually remove themselves.
pub trait Transient {
    /// Advance one tick
    fn update(&mut self);

    /// True once the object should be removed from its collection
    fn is_expired(&self) -> bool;
}

/// Advances every item one tick, then compacts the collection.
pub fn update_and_compact<T: Transient>(items: &mut Vec<T>) {
    for item in items.iter_mut() {
        item.update();
    }
    items.retain(|item| !item.is_expired());
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl Transient for Countdown {
        fn update(&mut self) {
            self.0 = self.0.saturating_sub(1);
        }

        fn is_expired(&self) -> bool {
            self.0 == 0
        }
    }

    #[test]
    fn test_compaction_keeps_order_of_survivors() {
        let mut items = vec![Countdown(3), Countdown(1), Countdown(2)];

        update_and_compact(&mut items);
        assert_eq!(items.iter().map(|c| c.0).collect::<Vec<_>>(), vec![2, 1]);

        update_and_compact(&mut items);
        assert_eq!(items.iter().map(|c| c.0).collect::<Vec<_>>(), vec![1]);

        update_and_compact(&mut items);
        assert!(items.is_empty());
    }
}
