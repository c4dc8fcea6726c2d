use rand::Rng;
use std::fmt;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Verdict of a terminal-state scan over a board.
///
/// Always derived from the current board contents; never cached across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`; `make_move` is a no-op in either.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// Cell value: 0 for empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// Side length of a standard board.
pub const DEFAULT_SIZE: usize = 4;

const SPAWN_TILE: Tile = 2;
const WINNING_TILE: Tile = 2048;

/// N x N 2048 board, cells stored row-major.
///
/// Public methods provide value-in, value-out operations; structural
/// equality between boards is what decides whether a move was effective.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Construct an all-zero board with the given side length.
    ///
    /// Panics when `size` is zero; a degenerate board is a caller bug.
    ///
    /// ```
    /// use twenty48::engine::Board;
    /// let b = Board::empty(4);
    /// assert_eq!(b.count_empty(), 16);
    /// ```
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Board {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Construct a `Board` from explicit rows.
    ///
    /// ```
    /// use twenty48::engine::Board;
    /// let rows = vec![vec![2, 0], vec![0, 4]];
    /// let b = Board::from_rows(&rows);
    /// assert_eq!(b.to_rows(), rows);
    /// ```
    pub fn from_rows(rows: &[Vec<Tile>]) -> Self {
        let size = rows.len();
        assert!(size > 0, "board size must be positive");
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "board rows must form a square grid");
            cells.extend_from_slice(row);
        }
        Board { size, cells }
    }

    /// Copy the board out as rows of cell values.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells
            .chunks_exact(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (row, col); 0 means empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.size + col]
    }

    /// Borrow the flat row-major cell storage.
    #[inline]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Count the number of empty cells on the board.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&val| val == 0).count()
    }

    /// Return the highest tile value (e.g., 2048) present on the board.
    pub fn highest_tile(&self) -> Tile {
        self.cells
            .iter()
            .copied()
            .max()
            .expect("board has at least one cell")
    }

    /// Return the board resulting from sliding/merging tiles in `dir` (no random spawn).
    ///
    /// ```
    /// use twenty48::engine::{Board, Move};
    /// let b = Board::from_rows(&vec![vec![2, 0, 2, 0]; 4]);
    /// assert_eq!(b.shift(Move::Left).to_rows(), vec![vec![4, 0, 0, 0]; 4]);
    /// ```
    pub fn shift(&self, dir: Move) -> Board {
        match dir {
            Move::Left => self.shift_left(),
            Move::Right => self.shift_right(),
            Move::Up => self.transposed().shift_left().transposed(),
            Move::Down => self.transposed().shift_right().transposed(),
        }
    }

    /// Spawn a 2 on a uniformly random empty cell, using the provided RNG.
    /// No-op when the board is full.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use twenty48::engine::Board;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let mut b = Board::empty(4);
    /// b.insert_random_tile(&mut rng);
    /// b.insert_random_tile(&mut rng);
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    pub fn insert_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(idx, &val)| (val == 0).then_some(idx))
            .collect();
        if empty.is_empty() {
            return;
        }
        self.cells[empty[rng.gen_range(0..empty.len())]] = SPAWN_TILE;
    }

    /// Convenience: like `insert_random_tile` but uses thread-local RNG.
    pub fn insert_random_tile_thread(&mut self) {
        let mut rng = rand::thread_rng();
        self.insert_random_tile(&mut rng);
    }

    /// Scan the board row-major and classify it.
    ///
    /// Per cell, in priority order: a 2048 tile wins, an empty cell or an
    /// equal right/bottom neighbor keeps the game in progress. A full scan
    /// with no match is a loss. The win check runs before the empty check,
    /// so a board holding 2048 reports `Won` even with empty cells left.
    ///
    /// ```
    /// use twenty48::engine::{Board, GameState};
    /// assert_eq!(Board::empty(4).state(), GameState::InProgress);
    /// let full = Board::from_rows(&[
    ///     vec![2, 4, 2, 4],
    ///     vec![4, 2, 4, 2],
    ///     vec![2, 4, 2, 4],
    ///     vec![4, 2, 4, 2],
    /// ]);
    /// assert_eq!(full.state(), GameState::Lost);
    /// ```
    pub fn state(&self) -> GameState {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let val = self.get(row, col);
                if val == WINNING_TILE {
                    return GameState::Won;
                }
                if val == 0 {
                    return GameState::InProgress;
                }
                if row + 1 < n && val == self.get(row + 1, col) {
                    return GameState::InProgress;
                }
                if col + 1 < n && val == self.get(row, col + 1) {
                    return GameState::InProgress;
                }
            }
        }
        GameState::Lost
    }

    /// Perform a move, then spawn a tile and re-derive the state if the move
    /// changed the board, using the provided RNG.
    ///
    /// Returns the inputs unchanged when `state` is already terminal or when
    /// the shift leaves the board identical (no spawn, no re-evaluation).
    ///
    /// ```
    /// use twenty48::engine::{Board, GameState, Move};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let b = Board::from_rows(&[
    ///     vec![2, 2, 0, 0],
    ///     vec![0, 0, 0, 0],
    ///     vec![0, 0, 0, 0],
    ///     vec![0, 0, 0, 0],
    /// ]);
    /// let (next, state) = b.make_move(Move::Left, GameState::InProgress, &mut rng);
    /// assert_eq!(state, GameState::InProgress);
    /// assert_eq!(next.count_empty(), 14); // merged pair plus one spawned tile
    /// ```
    pub fn make_move<R: Rng + ?Sized>(
        &self,
        direction: Move,
        state: GameState,
        rng: &mut R,
    ) -> (Board, GameState) {
        if state.is_terminal() {
            return (self.clone(), state);
        }
        let mut moved = self.shift(direction);
        if moved == *self {
            return (self.clone(), state);
        }
        moved.insert_random_tile(rng);
        let state = moved.state();
        (moved, state)
    }

    fn shift_left(&self) -> Board {
        // Trailing compress is required: merging leaves interior zeros.
        self.compressed().merged().compressed()
    }

    fn shift_right(&self) -> Board {
        self.reversed().shift_left().reversed()
    }

    fn compressed(&self) -> Board {
        let mut out = Board {
            size: self.size,
            cells: vec![0; self.cells.len()],
        };
        for (src, dst) in self
            .cells
            .chunks_exact(self.size)
            .zip(out.cells.chunks_exact_mut(self.size))
        {
            let mut next = 0;
            for &val in src {
                if val != 0 {
                    dst[next] = val;
                    next += 1;
                }
            }
        }
        out
    }

    fn merged(mut self) -> Board {
        for row in self.cells.chunks_exact_mut(self.size) {
            // Single left-to-right sweep; a merge leaves a zero on its right,
            // so a freshly doubled cell can never merge again this pass.
            for col in 0..row.len() - 1 {
                if row[col] != 0 && row[col] == row[col + 1] {
                    row[col] *= 2;
                    row[col + 1] = 0;
                }
            }
        }
        self
    }

    fn reversed(&self) -> Board {
        let mut out = self.clone();
        for row in out.cells.chunks_exact_mut(self.size) {
            row.reverse();
        }
        out
    }

    fn transposed(&self) -> Board {
        let mut out = Board {
            size: self.size,
            cells: vec![0; self.cells.len()],
        };
        for row in 0..self.size {
            for col in 0..self.size {
                out.cells[col * self.size + row] = self.cells[row * self.size + col];
            }
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{} {:?})", self.size, self.size, self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(8 * self.size);
        for (idx, row) in self.cells.chunks_exact(self.size).enumerate() {
            if idx > 0 {
                writeln!(f, "{rule}")?;
            }
            let line: Vec<String> = row.iter().map(format_val).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

/// Start a game: an empty `size` x `size` board seeded with two spawned tiles.
///
/// The returned state is derived from the seeded board, which is
/// `InProgress` for any board that fits more than one tile.
///
/// ```
/// use twenty48::engine::{self, GameState};
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(42);
/// let (board, state) = engine::new_game(4, &mut rng);
/// assert_eq!(state, GameState::InProgress);
/// assert_eq!(board.count_empty(), 14);
/// ```
pub fn new_game<R: Rng + ?Sized>(size: usize, rng: &mut R) -> (Board, GameState) {
    let mut board = Board::empty(size);
    board.insert_random_tile(rng);
    board.insert_random_tile(rng);
    let state = board.state();
    (board, state)
}

/// Perform a move then spawn a tile if the move changed the board (uses thread RNG).
///
/// For reproducible behavior, prefer `Board::make_move(&mut impl Rng)`.
///
/// ```
/// use twenty48::engine::{self, Move};
/// let mut rng = rand::thread_rng();
/// let (board, state) = engine::new_game(4, &mut rng);
/// let _ = engine::make_move(&board, state, Move::Up);
/// ```
pub fn make_move(board: &Board, state: GameState, direction: Move) -> (Board, GameState) {
    let mut rng = rand::thread_rng();
    board.make_move(direction, state, &mut rng)
}

fn format_val(val: &Tile) -> String {
    match val {
        0 => String::from("       "),
        &x => {
            let mut x = x.to_string();
            while x.len() < 7 {
                match x.len() {
                    6 => x = format!(" {}", x),
                    _ => x = format!(" {} ", x),
                }
            }
            x
        }
    }
}
