//! Synthetic uniform game tree.
//!
//! Every node has `branching` children down to `height` plies. Leaf
//! values are a seeded shuffle of `0..branching^height`, so they are
//! distinct and no two root moves ever tie. Interior nodes carry their
//! exact minimax value (player one maximizes at even depths).
//!
//! Below the bottom level the tree keeps going: every node there has
//! `branching` children that all repeat their ancestor's leaf value, so
//! a deeper search sees the same values instead of running out of moves.

use std::rc::Rc;

use crate::core::{GameRng, PlayerId, Score};
use crate::eval::Evaluator;
use crate::error::RulesError;
use crate::rules::{GameState, MoveList};

/// Order in which `legal_moves` lists children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOrder {
    /// Child 0, 1, 2, ...
    Natural,
    /// Best child for the side to move first (perfect ordering).
    BestFirst,
}

#[derive(Debug)]
struct Shape {
    branching: u8,
    height: u32,
    order: MoveOrder,
    /// `values[d][i]`: exact value of node `i` at depth `d`, player one's view.
    values: Vec<Vec<Score>>,
}

/// A node in the synthetic tree. Cloning shares the tree shape.
#[derive(Clone, Debug)]
pub struct SyntheticTree {
    shape: Rc<Shape>,
    depth: u32,
    index: usize,
}

impl SyntheticTree {
    /// Build a tree and return its root.
    ///
    /// # Panics
    ///
    /// Panics if `branching` is 0 or if `branching^height` leaves do not
    /// fit in a `usize`.
    pub fn new(branching: u8, height: u32, order: MoveOrder, rng: &mut GameRng) -> Self {
        assert!(branching >= 1, "Tree needs at least one child per node");
        let b = branching as usize;

        let Some(leaf_count) = b.checked_pow(height) else {
            panic!("Tree with {branching}^{height} leaves is too large");
        };
        let mut leaves: Vec<Score> = (0..leaf_count).map(|v| v as Score).collect();
        rng.shuffle(&mut leaves);

        let mut values = vec![Vec::new(); height as usize + 1];
        values[height as usize] = leaves;
        for depth in (0..height as usize).rev() {
            let fold: fn(Score, Score) -> Score = if depth % 2 == 0 { Score::max } else { Score::min };
            let level = values[depth + 1]
                .chunks(b)
                .map(|children| children.iter().copied().reduce(fold).unwrap_or(0.0))
                .collect();
            values[depth] = level;
        }

        Self {
            shape: Rc::new(Shape {
                branching,
                height,
                order,
                values,
            }),
            depth: 0,
            index: 0,
        }
    }

    /// Plies from the root.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Exact minimax value of this node from player one's point of view.
    #[must_use]
    pub fn exact_value(&self) -> Score {
        let level = self.depth.min(self.shape.height) as usize;
        self.shape.values[level][self.index]
    }

    fn child(&self, slot: u8) -> Self {
        let index = if self.depth < self.shape.height {
            self.index * self.shape.branching as usize + slot as usize
        } else {
            self.index
        };
        Self {
            shape: Rc::clone(&self.shape),
            depth: self.depth + 1,
            index,
        }
    }
}

impl GameState for SyntheticTree {
    type Move = u8;

    fn active_player(&self) -> PlayerId {
        if self.depth % 2 == 0 {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }

    fn legal_moves(&self, _player: PlayerId) -> MoveList<u8> {
        let mut moves: MoveList<u8> = (0..self.shape.branching).collect();
        if self.shape.order == MoveOrder::BestFirst {
            let value = |slot: &u8| self.child(*slot).exact_value();
            if self.active_player() == PlayerId::ONE {
                moves.sort_by(|a, b| value(b).total_cmp(&value(a)));
            } else {
                moves.sort_by(|a, b| value(a).total_cmp(&value(b)));
            }
        }
        moves
    }

    fn forecast(&self, mv: u8) -> Result<Self, RulesError> {
        if mv >= self.shape.branching {
            return Err(RulesError::illegal_move(mv, self.active_player()));
        }
        Ok(self.child(mv))
    }

    fn utility(&self, _player: PlayerId) -> Score {
        0.0
    }
}

/// Scores a synthetic node by its exact value.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeEvaluator;

impl Evaluator<SyntheticTree> for TreeEvaluator {
    fn evaluate(&self, state: &SyntheticTree, player: PlayerId) -> Score {
        if player == PlayerId::ONE {
            state.exact_value()
        } else {
            -state.exact_value()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(order: MoveOrder) -> SyntheticTree {
        SyntheticTree::new(3, 3, order, &mut GameRng::new(5))
    }

    #[test]
    #[should_panic(expected = "at least one child")]
    fn test_zero_branching_panics() {
        SyntheticTree::new(0, 3, MoveOrder::Natural, &mut GameRng::new(1));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_oversized_tree_panics() {
        SyntheticTree::new(2, 100, MoveOrder::Natural, &mut GameRng::new(1));
    }

    #[test]
    fn test_leaf_values_are_a_permutation() {
        let root = tree(MoveOrder::Natural);
        let mut leaves = root.shape.values[3].clone();
        leaves.sort_by(Score::total_cmp);
        let expected: Vec<Score> = (0..27).map(|v| v as Score).collect();
        assert_eq!(leaves, expected);
    }

    #[test]
    fn test_root_value_is_minimax_of_children() {
        let root = tree(MoveOrder::Natural);
        let best_child = root
            .legal_moves(PlayerId::ONE)
            .iter()
            .map(|&mv| root.forecast(mv).unwrap().exact_value())
            .fold(Score::NEG_INFINITY, Score::max);
        assert_eq!(root.exact_value(), best_child);

        let child = root.forecast(0).unwrap();
        assert_eq!(child.active_player(), PlayerId::TWO);
        let worst_grandchild = child
            .legal_moves(PlayerId::TWO)
            .iter()
            .map(|&mv| child.forecast(mv).unwrap().exact_value())
            .fold(Score::INFINITY, Score::min);
        assert_eq!(child.exact_value(), worst_grandchild);
    }

    #[test]
    fn test_best_first_ordering() {
        let root = tree(MoveOrder::BestFirst);
        let first = root.legal_moves(PlayerId::ONE)[0];
        assert_eq!(root.forecast(first).unwrap().exact_value(), root.exact_value());

        let child = root.forecast(first).unwrap();
        let reply = child.legal_moves(PlayerId::TWO)[0];
        assert_eq!(child.forecast(reply).unwrap().exact_value(), child.exact_value());
    }

    #[test]
    fn test_below_the_bottom_repeats_leaf_value() {
        let mut node = tree(MoveOrder::Natural);
        for mv in [2, 1, 0] {
            node = node.forecast(mv).unwrap();
        }
        let leaf = node.exact_value();
        let deeper = node.forecast(1).unwrap().forecast(2).unwrap();
        assert_eq!(deeper.depth(), 5);
        assert_eq!(deeper.exact_value(), leaf);
    }

    #[test]
    fn test_forecast_rejects_missing_child() {
        assert!(tree(MoveOrder::Natural).forecast(3).is_err());
    }

    #[test]
    fn test_evaluator_perspective() {
        let root = tree(MoveOrder::Natural);
        let eval = TreeEvaluator;
        assert_eq!(eval.evaluate(&root, PlayerId::ONE), root.exact_value());
        assert_eq!(eval.evaluate(&root, PlayerId::TWO), -root.exact_value());
    }
}
