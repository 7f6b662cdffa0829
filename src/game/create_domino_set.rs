use crate::game::tile::Tile;

/// Highest pip value of a standard double-six set.
pub const DOUBLE_SIX: u8 = 6;

/// Every domino `(i, j)` with `0 <= i <= j <= max_pip`, in generation order.
pub fn create_domino_set(max_pip: u8) -> Vec<Tile> {
    (0..=max_pip)
        .flat_map(|i| (i..=max_pip).map(move |j| Tile::new(i, j)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_double_six_set() {
        let set = create_domino_set(DOUBLE_SIX);

        assert_eq!(
            set.len(),
            28,
            "A double-six set should contain exactly 28 tiles, but found {}.",
            set.len()
        );

        let unique: HashSet<Tile> = set.iter().copied().collect();
        assert_eq!(unique.len(), 28, "The set must not contain duplicates");

        assert!(set.contains(&Tile::new(0, 0)));
        assert!(set.contains(&Tile::new(6, 6)));
        assert!(set.contains(&Tile::new(4, 2)));
        assert_eq!(set.iter().filter(|t| t.is_double()).count(), 7);
    }

    #[test]
    fn test_total_pips_of_double_six() {
        let total: u32 = create_domino_set(DOUBLE_SIX).iter().map(Tile::pip_sum).sum();
        assert_eq!(total, 168);
    }

    #[test]
    fn test_smaller_sets() {
        assert_eq!(create_domino_set(0), vec![Tile::new(0, 0)]);
        assert_eq!(create_domino_set(3).len(), 10);
    }
}
