use crate::game::tile::Tile;

/// One first-level move of the root with its share of the visits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionProbability {
    pub probability: f64,
    pub visits: u32,
    pub mean_value: f64,
    pub action: Tile,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MCTSResult {
    /// Visit-frequency distribution over the root's children, in expansion order.
    pub distribution: Vec<ActionProbability>,
    pub iterations: usize,
    pub root_visits: u32,
    /// Iterations that stopped at a terminal root.
    pub terminal_root_hits: usize,
    pub tree_size: usize,
}

impl MCTSResult {
    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }

    /// Most visited action; the first one encountered wins ties.
    pub fn best_action(&self) -> Option<Tile> {
        let mut best: Option<&ActionProbability> = None;
        for entry in &self.distribution {
            match best {
                Some(current) if entry.probability <= current.probability => {}
                _ => best = Some(entry),
            }
        }
        best.map(|entry| entry.action)
    }

    pub fn child_visits(&self) -> u32 {
        self.distribution.iter().map(|entry| entry.visits).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(probability: f64, action: Tile) -> ActionProbability {
        ActionProbability {
            probability,
            visits: (probability * 10.0) as u32,
            mean_value: 0.0,
            action,
        }
    }

    #[test]
    fn test_best_action_first_on_ties() {
        let result = MCTSResult {
            distribution: vec![
                entry(0.2, Tile::new(0, 1)),
                entry(0.4, Tile::new(2, 3)),
                entry(0.4, Tile::new(4, 5)),
            ],
            ..Default::default()
        };
        assert_eq!(result.best_action(), Some(Tile::new(2, 3)));
        assert_eq!(result.child_visits(), 10);
    }

    #[test]
    fn test_empty_result() {
        let result = MCTSResult::default();
        assert!(result.is_empty());
        assert_eq!(result.best_action(), None);
    }
}
