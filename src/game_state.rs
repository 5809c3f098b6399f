use crate::board::*;
use crate::draughts_errors::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use std::fmt::{self, Debug, Display};

// -------------------------------------
// GameState
// -------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    OpponentWin,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWin => write!(f, "You Win"),
            Outcome::OpponentWin => write!(f, "You Lose"),
        }
    }
}

/// Complete state of one draughts session: the board plus whose turn it is
/// and whether the game has been decided. All mutation goes through the
/// move-applying methods; renderers only ever see copies.
#[derive(Clone, PartialEq)]
pub struct GameState {
    board: Board,
    active_side: Side,
    outcome: Option<Outcome>,
    turn_count: u16,
}

// Public Interface
impl GameState {
    /// Returns a game with the men placed on the standard starting squares
    /// and the player to move.
    pub fn standard_setup() -> GameState {
        GameState::from_position(Board::standard_setup(), Side::Player)
    }

    /// Starts a game from an arbitrary position.
    pub fn from_position(board: Board, active_side: Side) -> GameState {
        GameState {
            board: board,
            active_side: active_side,
            outcome: None,
            turn_count: 0,
        }
    }

    /// Throws the current game away and starts over from the standard
    /// setup, player to move.
    pub fn reset(&mut self) {
        *self = GameState::standard_setup();
    }

    /// Submits a move on behalf of the player. The move must match one of
    /// the generated legal moves for the piece on start; anything else is
    /// rejected without touching the board.
    pub fn submit_player_move(&mut self, start: Position, end: Position) -> DraughtsResult<Move> {
        if !self.accepting_input() {
            return Err("Not the player's turn".into());
        }
        if !self.board.get(start).holds(Side::Player) {
            return Err("No player piece on the source square".into());
        }
        let m = self
            .find_player_move(start, end)
            .ok_or(DraughtsError::from("Illegal move"))?;
        self.make_move(&m);
        Ok(m)
    }

    /// Squares the piece on pos may move to. Meant for highlighting;
    /// empty unless it is the player's turn and the piece is the player's.
    pub fn legal_targets(&self, pos: Position) -> Vec<Position> {
        if !self.accepting_input() || !self.board.get(pos).holds(Side::Player) {
            return Vec::new();
        }
        self.piece_moves(pos).into_iter().map(|m| m.end).collect()
    }

    /// Copy of the grid for drawing, indexed [row][col].
    pub fn snapshot(&self) -> [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        array_init(|row| {
            array_init(|col| self.board.get(Position::from_row_col(row as u8, col as u8)))
        })
    }
}

// Status queries
impl GameState {
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn turn_count(&self) -> u16 {
        self.turn_count
    }

    /// True while the engine accepts human move submissions. Input
    /// handlers check this instead of being attached and detached as the
    /// turn changes hands.
    pub fn accepting_input(&self) -> bool {
        self.active_side == Side::Player && self.outcome.is_none()
    }

    pub fn count(&self, side: Side) -> u8 {
        self.board.count(side)
    }

    pub fn pieces(&self, side: Side) -> Vec<Position> {
        self.board.pieces(side)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}  To move: {}\n{}",
            self.turn_count, self.active_side, self.board
        )
    }
}

impl Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}  To move: {}  Pieces: {} vs {}\n",
            self.turn_count,
            self.active_side,
            self.board.count(Side::Player),
            self.board.count(Side::Opponent)
        )?;
        write!(f, "{}", self.board)
    }
}

// -------------------------------------
// Move generation
// -------------------------------------

impl GameState {
    /// Returns all moves the given side can make from the current
    /// position. Simple steps and jumps are returned together, unranked.
    pub fn gen_moves(&self, side: Side) -> Vec<Move> {
        let mut res = Vec::new();
        for pos in self.board.pieces(side) {
            res.extend(self.piece_moves(pos));
        }
        res
    }

    /// Moves of the single piece on pos. Men step towards the enemy back
    /// row only; kings step both ways. A jump is possible when the
    /// adjacent diagonal square holds an enemy piece and the square behind
    /// it is free. Every probed square is bounds-checked, so pieces on the
    /// rim generate no off-board targets.
    pub fn piece_moves(&self, pos: Position) -> Vec<Move> {
        let piece = match self.board.get(pos).piece() {
            Some(p) => p,
            None => return Vec::new(),
        };

        let (row_u, col_u) = pos.to_row_col();
        let (row, col) = (row_u as i16, col_u as i16);
        let forward = piece.side.forward();
        let both_ways = [forward, -forward];
        let row_dirs: &[i16] = if piece.is_king() {
            &both_ways
        } else {
            &both_ways[..1]
        };

        let mut res = Vec::new();
        for &d_row in row_dirs {
            for &d_col in &[-1i16, 1] {
                match self.board.probe(row + d_row, col + d_col) {
                    Some(step) if step.is_empty() => {
                        let end = Position::from_row_col((row + d_row) as u8, (col + d_col) as u8);
                        res.push(Move::new(pos, end, piece, MoveType::Standard));
                    }
                    Some(step) if step.holds(piece.side.opposite()) => {
                        if let Some(Cell::Empty) = self.board.probe(row + 2 * d_row, col + 2 * d_col)
                        {
                            let over =
                                Position::from_row_col((row + d_row) as u8, (col + d_col) as u8);
                            let end = Position::from_row_col(
                                (row + 2 * d_row) as u8,
                                (col + 2 * d_col) as u8,
                            );
                            res.push(Move::new(pos, end, piece, MoveType::Capture(over)));
                        }
                    }
                    _ => {}
                }
            }
        }
        res
    }

    /// Attempts to find the submitted player move among the legal moves of
    /// the piece on start. Returns None if the move is not among them.
    fn find_player_move(&self, start: Position, end: Position) -> Option<Move> {
        let moves = self.piece_moves(start);
        for m in moves {
            if m.start == start && m.end == end {
                return Some(m);
            }
        }
        None
    }
}

// -------------------------------------
// Move execution
// -------------------------------------

impl GameState {
    /// Applies a generated move: relocate the piece, remove a jumped enemy,
    /// crown a man on its back-row landing. Afterwards the win condition is
    /// checked; the turn passes to the other side unless the game ended.
    /// Trusts that the move was generated for the current position.
    pub fn make_move(&mut self, m: &Move) {
        self.board.move_piece(m.start, m.end);
        if let MoveType::Capture(over) = m.kind {
            self.board.clear(over);
        }
        if m.promotes {
            if let Some(p) = self.board.get(m.end).piece() {
                self.board.set(m.end, Cell::Piece(p.crowned()));
            }
        }
        self.check_win();
        if self.outcome.is_none() {
            self.advance_turn();
        }
    }

    /// Passes the turn without a move. Happens when the active side is
    /// completely blocked; the game does not end in this case.
    pub fn skip_turn(&mut self) {
        self.advance_turn();
    }

    fn check_win(&mut self) {
        if self.board.count(Side::Player) == 0 {
            self.outcome = Some(Outcome::OpponentWin);
        } else if self.board.count(Side::Opponent) == 0 {
            self.outcome = Some(Outcome::PlayerWin);
        }
    }

    fn advance_turn(&mut self) {
        self.turn_count += 1;
        self.active_side = self.active_side.opposite();
    }
}
