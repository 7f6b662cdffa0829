use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A domino: two pip values with an orientation.
///
/// Equality and hashing ignore orientation and `owner`, so `Tile::new(2, 5)`
/// and `Tile::new(5, 2)` are the same domino. `left` is the end facing the
/// front of the ground chain, `right` the end facing the back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tile {
    pub left: u8,
    pub right: u8,
    /// Seat of the player who placed the tile; only set once on the ground.
    pub owner: Option<usize>,
}

impl Tile {
    pub const fn new(left: u8, right: u8) -> Self {
        Tile {
            left,
            right,
            owner: None,
        }
    }

    /// Swaps the two ends in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    pub fn flipped(&self) -> Tile {
        Tile {
            left: self.right,
            right: self.left,
            owner: self.owner,
        }
    }

    pub fn is_double(&self) -> bool {
        self.left == self.right
    }

    pub fn pip_sum(&self) -> u32 {
        u32::from(self.left) + u32::from(self.right)
    }

    pub fn contains(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// Orientation-independent key: (low, high).
    fn key(&self) -> (u8, u8) {
        if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(tile: &Tile) -> u64 {
        let mut hasher = DefaultHasher::new();
        tile.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_orientation() {
        assert_eq!(Tile::new(2, 5), Tile::new(5, 2));
        assert_eq!(hash_of(&Tile::new(2, 5)), hash_of(&Tile::new(5, 2)));
        assert_ne!(Tile::new(2, 5), Tile::new(2, 4));
    }

    #[test]
    fn test_equality_ignores_owner() {
        let mut placed = Tile::new(3, 1);
        placed.owner = Some(1);
        assert_eq!(placed, Tile::new(1, 3));

        let set: HashSet<Tile> = [placed, Tile::new(1, 3)].into_iter().collect();
        assert_eq!(set.len(), 1, "Same domino must hash to a single entry");
    }

    #[test]
    fn test_flip_in_place_and_by_value() {
        let mut tile = Tile::new(4, 6);
        let copy = tile.flipped();
        assert_eq!((copy.left, copy.right), (6, 4));
        assert_eq!((tile.left, tile.right), (4, 6), "flipped() must not mutate");

        tile.flip();
        assert_eq!((tile.left, tile.right), (6, 4));
    }

    #[test]
    fn test_double_and_pip_sum() {
        assert!(Tile::new(5, 5).is_double());
        assert!(!Tile::new(5, 6).is_double());
        assert_eq!(Tile::new(6, 6).pip_sum(), 12);
        assert_eq!(Tile::new(0, 0).pip_sum(), 0);
        assert!(Tile::new(0, 3).contains(3));
        assert!(!Tile::new(0, 3).contains(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(1, 4).to_string(), "[1|4]");
    }
}
