use crate::pieces::*;
/// Describing the moves that can be done on a draughts board.
use crate::positions::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub piece: Piece,
    pub kind: MoveType,
    /// Set when a man ends this move on its crowning row.
    pub promotes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveType {
    Standard,
    /// Carries the square of the piece that gets jumped over.
    Capture(Position),
}

impl Move {
    pub fn new(start: Position, end: Position, piece: Piece, kind: MoveType) -> Self {
        let (end_row, _) = end.to_row_col();
        Move {
            start: start,
            end: end,
            piece: piece,
            kind: kind,
            promotes: piece.rank == Rank::Man && end_row == piece.side.promotion_row(),
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveType::Capture(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start,
            if self.is_capture() { "x" } else { "-" },
            self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotes_only_for_men() {
        let man = Piece::man(Side::Player);
        let king = Piece::king(Side::Player);
        let start = Position::from_row_col(1, 2);
        let end = Position::from_row_col(0, 1);

        assert!(Move::new(start, end, man, MoveType::Standard).promotes);
        assert!(!Move::new(start, end, king, MoveType::Standard).promotes);

        // Not the crowning row
        let mid = Position::from_row_col(2, 3);
        assert!(!Move::new(start, mid, man, MoveType::Standard).promotes);
    }

    #[test]
    fn test_display() {
        let man = Piece::man(Side::Player);
        let start = Position::from_row_col(5, 0);
        let end = Position::from_row_col(4, 1);
        let over = Position::from_row_col(4, 1);
        let jump_end = Position::from_row_col(3, 2);

        assert_eq!(Move::new(start, end, man, MoveType::Standard).to_string(), "a3-b4");
        assert_eq!(
            Move::new(start, jump_end, man, MoveType::Capture(over)).to_string(),
            "a3xc5"
        );
    }
}
