//! Isolation board.

use std::hash::BuildHasherDefault;

use im::HashSet as ImHashSet;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameRng, PlayerId, PlayerMap, Score};
use crate::error::RulesError;
use crate::rules::{BoardGeometry, GameState, MoveList};

type BlockedCells = ImHashSet<Cell, BuildHasherDefault<FxHasher>>;

/// Knight jumps, in the order legal moves are enumerated.
const DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Default board size.
pub const DEFAULT_SIZE: usize = 7;

/// Isolation board state.
///
/// Blocked cells live in a persistent set, so `forecast` shares structure
/// with the parent instead of copying the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Visited and pre-blocked cells. Occupied cells are blocked too.
    blocked: BlockedCells,
    locations: PlayerMap<Option<Cell>>,
    active: PlayerId,
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl Board {
    /// Create an empty board with player one to move.
    pub fn new(width: usize, height: usize) -> Result<Self, RulesError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(RulesError::InvalidDimensions { width, height });
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: BlockedCells::default(),
            locations: PlayerMap::default(),
            active: PlayerId::ONE,
            move_count: 0,
        }
    }

    /// Start building a board with custom blocks and placements.
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// A fresh board where both players have been placed on random blank cells.
    pub fn random_opening(width: usize, height: usize, rng: &mut GameRng) -> Result<Self, RulesError> {
        Ok(Self::new(width, height)?.random_playout(2, rng))
    }

    /// Play up to `plies` uniformly random legal moves from this position.
    ///
    /// Stops early if the player on move is stuck.
    #[must_use]
    pub fn random_playout(&self, plies: u32, rng: &mut GameRng) -> Self {
        let mut board = self.clone();
        for _ in 0..plies {
            let moves = board.legal_moves(board.active);
            let Some(&mv) = rng.choose(&moves) else {
                break;
            };
            board = board.apply(mv);
        }
        board
    }

    /// Number of moves applied so far (placements included).
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Is `cell` on the board?
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.height as i32).contains(&cell.row) && (0..self.width as i32).contains(&cell.col)
    }

    /// Is `cell` on the board and not yet visited or blocked?
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked.contains(&cell)
    }

    /// All open cells, column by column.
    pub fn blank_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width as i32)
            .flat_map(move |col| (0..self.height as i32).map(move |row| Cell::new(row, col)))
            .filter(move |&cell| !self.blocked.contains(&cell))
    }

    /// Could the active player move to `mv` right now?
    #[must_use]
    pub fn is_legal(&self, mv: Cell) -> bool {
        if !self.is_open(mv) {
            return false;
        }
        match self.locations[self.active] {
            None => true,
            Some(from) => DIRECTIONS
                .iter()
                .any(|&(dr, dc)| from.offset(dr, dc) == mv),
        }
    }

    fn has_moves(&self, player: PlayerId) -> bool {
        match self.locations[player] {
            None => self.blank_cells().next().is_some(),
            Some(from) => DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.is_open(from.offset(dr, dc))),
        }
    }

    /// Apply a move already known to be legal.
    fn apply(&self, mv: Cell) -> Self {
        let mut next = self.clone();
        next.blocked.insert(mv);
        next.locations[self.active] = Some(mv);
        next.active = self.active.other();
        next.move_count += 1;
        next
    }
}

impl GameState for Board {
    type Move = Cell;

    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves(&self, player: PlayerId) -> MoveList<Cell> {
        match self.locations[player] {
            None => self.blank_cells().collect(),
            Some(from) => self.moves_from(from),
        }
    }

    fn forecast(&self, mv: Cell) -> Result<Self, RulesError> {
        if !self.is_legal(mv) {
            return Err(RulesError::illegal_move(mv, self.active));
        }
        Ok(self.apply(mv))
    }

    fn utility(&self, player: PlayerId) -> Score {
        if self.has_moves(self.active) {
            0.0
        } else if player == self.active {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        }
    }
}

impl BoardGeometry for Board {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn player_location(&self, player: PlayerId) -> Option<Cell> {
        self.locations[player]
    }

    fn moves_from(&self, from: Cell) -> MoveList<Cell> {
        DIRECTIONS
            .iter()
            .map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&cell| self.is_open(cell))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height as i32 {
            write!(f, "|")?;
            for col in 0..self.width as i32 {
                let cell = Cell::new(row, col);
                let symbol = if self.locations[PlayerId::ONE] == Some(cell) {
                    '1'
                } else if self.locations[PlayerId::TWO] == Some(cell) {
                    '2'
                } else if self.blocked.contains(&cell) {
                    '-'
                } else {
                    ' '
                };
                write!(f, " {symbol} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builder for boards with pre-blocked cells and placed players.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    width: usize,
    height: usize,
    blocked: Vec<Cell>,
    placements: Vec<(PlayerId, Cell)>,
    active: PlayerId,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            blocked: Vec::new(),
            placements: Vec::new(),
            active: PlayerId::ONE,
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Remove a cell from play.
    pub fn block(mut self, cell: impl Into<Cell>) -> Self {
        self.blocked.push(cell.into());
        self
    }

    /// Put `player` on `cell`. The cell counts as visited.
    pub fn place(mut self, player: PlayerId, cell: impl Into<Cell>) -> Self {
        self.placements.push((player, cell.into()));
        self
    }

    /// Player to move (player one unless set).
    pub fn active(mut self, player: PlayerId) -> Self {
        self.active = player;
        self
    }

    /// Build the board, rejecting off-board or doubly used cells and
    /// players placed more than once.
    pub fn build(self) -> Result<Board, RulesError> {
        let mut board = Board::new(self.width, self.height)?;
        let width = self.width;
        let height = self.height;

        let mut placed = PlayerMap::with_value(false);
        for &(player, _) in &self.placements {
            if std::mem::replace(&mut placed[player], true) {
                return Err(RulesError::DuplicatePlacement { player });
            }
        }

        let occupied = self.blocked.into_iter().chain(self.placements.iter().map(|&(_, cell)| cell));
        for cell in occupied {
            if !board.in_bounds(cell) {
                return Err(RulesError::OutOfBounds { cell, width, height });
            }
            if board.blocked.insert(cell).is_some() {
                return Err(RulesError::CellBlocked { cell });
            }
        }

        for (player, cell) in self.placements {
            board.locations[player] = Some(cell);
            board.move_count += 1;
        }
        board.active = self.active;
        Ok(board)
    }
}
