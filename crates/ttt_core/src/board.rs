use std::fmt;
use std::ops::Deref;
use std::time::Duration;

use crate::error::BoardError;
use crate::types::*;

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 5;

/// Default per-move time budget.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(150);

/// Outcome of a board from one player's point of view.
///
/// Recomputed from the cells on demand; no transitions are stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Win,
    Lose,
    Draw,
    InProgress,
}

/// Game state for a single match.
///
/// Cells are stored row-major (`row * size + col`). A cell is written at most
/// once; marks are never cleared, so `move_count` equals the number of
/// non-blank cells as long as only legal moves are applied.
#[derive(Clone, Debug)]
pub struct Board {
    players: [PlayerId; 2],
    cells: Vec<Cell>,
    last_move: [Option<usize>; 2],
    active: Seat,
    size: usize,
    move_count: u32,
    time_limit: Duration,
}

impl Board {
    /// Create a blank board with `player1` to move.
    pub fn new(
        player1: PlayerId,
        player2: PlayerId,
        width: usize,
        height: usize,
        time_limit: Duration,
    ) -> Result<Self, BoardError> {
        if width != height {
            return Err(BoardError::NonSquare { width, height });
        }
        if width == 0 {
            return Err(BoardError::ZeroSize);
        }
        if player1 == player2 {
            return Err(BoardError::DuplicatePlayers(player1));
        }

        Ok(Self {
            players: [player1, player2],
            cells: vec![Cell::Blank; width * height],
            last_move: [None, None],
            active: Seat::First,
            size: width,
            move_count: 0,
            time_limit,
        })
    }

    /// Square board of `size` with the default time budget.
    pub fn square(player1: PlayerId, player2: PlayerId, size: usize) -> Result<Self, BoardError> {
        Self::new(player1, player2, size, size, DEFAULT_TIME_LIMIT)
    }

    pub fn width(&self) -> usize {
        self.size
    }

    pub fn height(&self) -> usize {
        self.size
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn active_seat(&self) -> Seat {
        self.active
    }

    pub fn active_player(&self) -> &PlayerId {
        self.player(self.active)
    }

    pub fn inactive_player(&self) -> &PlayerId {
        self.player(self.active.other())
    }

    pub fn player(&self, seat: Seat) -> &PlayerId {
        &self.players[seat.idx()]
    }

    /// Seat bound to `player`, or `UnknownPlayer`.
    pub fn seat_of(&self, player: &PlayerId) -> Result<Seat, BoardError> {
        if *player == self.players[0] {
            Ok(Seat::First)
        } else if *player == self.players[1] {
            Ok(Seat::Second)
        } else {
            Err(BoardError::UnknownPlayer(player.clone()))
        }
    }

    /// The other player bound to this board.
    pub fn opponent(&self, player: &PlayerId) -> Result<&PlayerId, BoardError> {
        let seat = self.seat_of(player)?;
        Ok(self.player(seat.other()))
    }

    /// Mark at `(row, col)`, or `None` when off the board.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.index_of(mv).map(|idx| self.cells[idx])
    }

    fn index_of(&self, mv: Move) -> Option<usize> {
        let row = usize::try_from(mv.row).ok()?;
        let col = usize::try_from(mv.col).ok()?;
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }

    fn coord_of(&self, idx: usize) -> Move {
        Move::new((idx / self.size) as i32, (idx % self.size) as i32)
    }

    /// True iff `mv` is on the board and the target cell is blank.
    pub fn move_is_legal(&self, mv: Move) -> bool {
        self.index_of(mv)
            .is_some_and(|idx| self.cells[idx] == Cell::Blank)
    }

    /// Blank cells in row-major order. Call again to restart.
    pub fn blank_spaces(&self) -> impl Iterator<Item = Move> + '_ {
        let size = self.size as i32;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Move::new(row, col)))
            .filter(|&mv| self.move_is_legal(mv))
    }

    /// Where `player` last placed a mark, `None` before their first move.
    pub fn player_location(&self, player: &PlayerId) -> Result<Option<Move>, BoardError> {
        let seat = self.seat_of(player)?;
        Ok(self.location_of(seat))
    }

    pub(crate) fn location_of(&self, seat: Seat) -> Option<Move> {
        self.last_move[seat.idx()].map(|idx| self.coord_of(idx))
    }

    /// Legal moves for `player`.
    ///
    /// Without a player, or before the player's first move, every blank cell
    /// is legal. Afterwards only blank cells sharing a row, column or
    /// diagonal with the player's last mark are. Occupied cells in between do
    /// not block: every cell on those lines is tested on its own.
    pub fn legal_moves(&self, player: Option<&PlayerId>) -> Result<Vec<Move>, BoardError> {
        let location = match player {
            Some(player) => self.player_location(player)?,
            None => None,
        };
        Ok(self.moves_from(location))
    }

    pub(crate) fn moves_from(&self, location: Option<Move>) -> Vec<Move> {
        match location {
            None => self.blank_spaces().collect(),
            Some(from) => self
                .blank_spaces()
                .filter(|to| {
                    let dr = (to.row - from.row).abs();
                    let dc = (to.col - from.col).abs();
                    dr == 0 || dc == 0 || dr == dc
                })
                .collect(),
        }
    }

    /// Copy of this board with `mv` applied. `self` is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is off the board.
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// Place the active player's mark and pass the turn.
    ///
    /// Legality is the caller's job.
    pub(crate) fn apply_move(&mut self, mv: Move) {
        let idx = match self.index_of(mv) {
            Some(idx) => idx,
            None => panic!("move {mv} is off a {0}x{0} board", self.size),
        };
        self.last_move[self.active.idx()] = Some(idx);
        self.cells[idx] = self.active.mark();
        self.active = self.active.other();
        self.move_count += 1;
    }

    /// Immutable deep copy handed to strategies.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.clone())
    }

    /// Classify the board for `player`.
    ///
    /// A line only counts when every cell of an entire row, column or one of
    /// the two main diagonals carries the same mark.
    pub fn check_player_state(&self, player: &PlayerId) -> Result<PlayerState, BoardError> {
        let seat = self.seat_of(player)?;
        Ok(self.state_for(seat))
    }

    pub(crate) fn state_for(&self, seat: Seat) -> PlayerState {
        let full = seat.sign() * self.size as i32;
        let sums = self.line_sums();

        if sums.iter().any(|&sum| sum == full) {
            PlayerState::Win
        } else if sums.iter().any(|&sum| sum == -full) {
            PlayerState::Lose
        } else if self.blank_spaces().next().is_none() {
            PlayerState::Draw
        } else {
            PlayerState::InProgress
        }
    }

    /// Rows, then columns, then the main diagonal and the anti-diagonal.
    fn line_sums(&self) -> Vec<i32> {
        let n = self.size;
        let mut sums = vec![0; 2 * n + 2];

        for (idx, cell) in self.cells.iter().enumerate() {
            sums[idx / n] += cell.value();
            sums[n + idx % n] += cell.value();
        }

        // main diagonal: 0, n+1, 2(n+1), ...
        sums[2 * n] = (0..n).map(|i| self.cells[i * (n + 1)].value()).sum();
        // anti-diagonal: n-1, 2(n-1), ..., n(n-1)
        sums[2 * n + 1] = (1..=n).map(|i| self.cells[i * (n - 1)].value()).sum();

        sums
    }

    pub fn is_winner(&self, player: &PlayerId) -> Result<bool, BoardError> {
        Ok(self.check_player_state(player)? == PlayerState::Win)
    }

    pub fn is_loser(&self, player: &PlayerId) -> Result<bool, BoardError> {
        Ok(self.check_player_state(player)? == PlayerState::Lose)
    }

    pub fn is_draw(&self, player: &PlayerId) -> Result<bool, BoardError> {
        Ok(self.check_player_state(player)? == PlayerState::Draw)
    }

    pub fn is_in_progress(&self, player: &PlayerId) -> Result<bool, BoardError> {
        Ok(self.check_player_state(player)? == PlayerState::InProgress)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let margin = (self.size - 1).to_string().len() + 1;
        let header = (0..self.size)
            .map(|col| col.to_string())
            .collect::<Vec<_>>()
            .join("   ");
        writeln!(f, "{}{}", " ".repeat(margin + 4), header)?;

        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "[{row}] | ")?;
            for cell in cells {
                write!(f, "{} | ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read-only copy of a board, taken once per move solicitation.
///
/// Owns its storage, so nothing a strategy does with it reaches the live
/// board.
#[derive(Clone, Debug)]
pub struct Snapshot(Board);

impl Snapshot {
    pub fn into_board(self) -> Board {
        self.0
    }
}

impl Deref for Snapshot {
    type Target = Board;

    fn deref(&self) -> &Board {
        &self.0
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
