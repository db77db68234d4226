//! Explicit game trees for exercising the walkers on hand-checked values.

use std::cell::Cell;
use std::rc::Rc;

use isolation_core::{GameError, GameResult, GameState, Move, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct Node {
    pub value: f64,
    pub children: Vec<usize>,
    /// Enumerate one extra move that `forecast_move` rejects
    pub bogus: bool,
}

#[derive(Debug, Clone)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new(root_value: f64) -> Self {
        Tree {
            nodes: vec![Node {
                value: root_value,
                children: Vec::new(),
                bogus: false,
            }],
        }
    }

    pub fn add(&mut self, parent: usize, value: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            children: Vec::new(),
            bogus: false,
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn add_all(&mut self, parent: usize, values: &[f64]) -> Vec<usize> {
        values.iter().map(|&v| self.add(parent, v)).collect()
    }

    /// The two-ply example tree with root value 3, reached through the first
    /// child. Alpha-beta skips the last two leaves of the middle child.
    pub fn textbook() -> Self {
        let mut tree = Tree::new(0.0);
        let kids = tree.add_all(0, &[0.0, 0.0, 0.0]);
        tree.add_all(kids[0], &[3.0, 12.0, 8.0]);
        tree.add_all(kids[1], &[2.0, 4.0, 6.0]);
        tree.add_all(kids[2], &[14.0, 5.0, 2.0]);
        tree
    }

    /// Random tree with small integer values, so ties are common.
    pub fn random(rng: &mut StdRng, max_depth: u32, max_branching: usize) -> Self {
        let mut tree = Tree::new(rng.gen_range(-10..=10) as f64);
        let mut frontier = vec![(0usize, 0u32)];
        while let Some((node, depth)) = frontier.pop() {
            if depth == max_depth {
                continue;
            }
            let branching = rng.gen_range(0..=max_branching);
            for _ in 0..branching {
                let value = rng.gen_range(-10..=10) as f64;
                let child = tree.add(node, value);
                frontier.push((child, depth + 1));
            }
        }
        tree
    }

    pub fn seeded(seed: u64, max_depth: u32, max_branching: usize) -> Self {
        Tree::random(&mut StdRng::seed_from_u64(seed), max_depth, max_branching)
    }
}

/// Position inside a [`Tree`]. Player one moves at even plies.
#[derive(Debug, Clone)]
pub struct TreeState {
    tree: Rc<Tree>,
    node: usize,
    ply: u32,
    size: (usize, usize),
    forecasts: Rc<Cell<u64>>,
}

impl TreeState {
    pub fn root(tree: Tree) -> Self {
        TreeState {
            tree: Rc::new(tree),
            node: 0,
            ply: 0,
            size: (7, 7),
            forecasts: Rc::new(Cell::new(0)),
        }
    }

    pub fn at_ply(mut self, ply: u32) -> Self {
        self.ply = ply;
        self
    }

    /// Reported (height, width); the tree itself is unaffected.
    pub fn with_size(mut self, height: usize, width: usize) -> Self {
        self.size = (height, width);
        self
    }

    pub fn value(&self) -> f64 {
        self.tree.nodes[self.node].value
    }

    pub fn forecasts(&self) -> u64 {
        self.forecasts.get()
    }

    pub fn forecast_counter(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.forecasts)
    }
}

/// Evaluator returning the node's stored value.
pub fn node_value(state: &TreeState, _player: Player) -> f64 {
    state.value()
}

impl GameState for TreeState {
    fn active_player(&self) -> Player {
        if self.ply % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        if player != self.active_player() {
            return Vec::new();
        }
        let node = &self.tree.nodes[self.node];
        let mut moves: Vec<Move> = (0..node.children.len())
            .map(|i| Move::new(self.node as i32, i as i32))
            .collect();
        if node.bogus {
            moves.push(Move::new(self.node as i32, 99));
        }
        moves
    }

    fn forecast_move(&self, mv: Move) -> GameResult<Self> {
        let children = &self.tree.nodes[self.node].children;
        if mv.row != self.node as i32 || mv.col < 0 || mv.col as usize >= children.len() {
            return Err(GameError::IllegalMove(mv));
        }
        self.forecasts.set(self.forecasts.get() + 1);
        Ok(TreeState {
            tree: Rc::clone(&self.tree),
            node: children[mv.col as usize],
            ply: self.ply + 1,
            size: self.size,
            forecasts: Rc::clone(&self.forecasts),
        })
    }

    fn is_winner(&self, _player: Player) -> bool {
        false
    }

    fn is_loser(&self, _player: Player) -> bool {
        false
    }

    fn move_count(&self) -> u32 {
        self.ply
    }

    fn height(&self) -> usize {
        self.size.0
    }

    fn width(&self) -> usize {
        self.size.1
    }
}
