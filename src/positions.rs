use crate::draughts_errors::*;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Square positions on the 8x8 board.
//
// Numbered as follows:
//
//     a  b  c  d  e  f  g  h
//   ---------------------------
// 8 | 0  1  2  3  4  5  6  7  | 8
// 7 | 8  9  10 11 12 13 14 15 | 7
// 6 | 16 17 18 19 20 21 22 23 | 6
// 5 | 24 25 26 27 28 29 30 31 | 5
// 4 | 32 33 34 35 36 37 38 39 | 4
// 3 | 40 41 42 43 44 45 46 47 | 3
// 2 | 48 49 50 51 52 53 54 55 | 2
// 1 | 56 57 58 59 60 61 62 63 | 1
//   ---------------------------
//    a  b  c  d  e  f  g  h
//
// Row 0 is the opponent's back row, row 7 the player's.
//
// ---------------------------------------------
// Positions
// ---------------------------------------------

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(u8);

impl From<u8> for Position {
    fn from(u: u8) -> Self {
        debug_assert!(u < 64, "Invalid position: {}", u);
        Position(u)
    }
}

impl FromStr for Position {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Error is rather big, so we use a closure to avoid copies
        let err_closure = || -> DraughtsError { format!("Invalid square {}", s).into() };
        let mut chars = s.chars();

        let col = chars.next().ok_or_else(err_closure)?;
        let row = chars
            .next()
            .map(|r| r.to_digit(10))
            .flatten()
            .ok_or_else(err_closure)?;

        // Range checks must come first, else we panic on unsigned integer
        // underflow for inputs like "A3" or "a0"
        if chars.next().is_some() || row < 1 || row > 8 || col < 'a' || col > 'h' {
            return Err(err_closure());
        }

        // number part v               v letter part
        let pos: u8 = ((8 - row) * 8) as u8 + (col as u8 - b'a');
        Ok(Position::from(pos))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_row_col();
        write!(
            f,
            "{}{}",
            ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'][col as usize],
            8 - row,
        )
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct PositionIterator(u8);

impl Iterator for PositionIterator {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > 63 {
            None
        } else {
            self.0 = self.0 + 1u8;
            Some((self.0 - 1).into())
        }
    }
}

impl Position {
    /// Returns row and col from position.
    /// Example: Position 63 (h1 on the board) is mapped to (7,7)
    pub const fn to_row_col(self) -> (u8, u8) {
        (self.0 / 8, self.0 % 8)
    }

    /// Transforms a row and a col to Position on the board.
    /// Row and col must correspond to a legal board position,
    /// else the returned value also doesn't correspond to a legal board position.
    pub fn from_row_col(row: u8, col: u8) -> Position {
        debug_assert!(Position::in_board(row as i16, col as i16));
        (row * 8 + col).into()
    }

    /// Checks if row and col belong to a legal board position.
    pub const fn in_board(row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < 8 && col < 8
    }

    /// Allows to iterate over all positions on the board
    pub fn all_positions() -> PositionIterator {
        PositionIterator(0)
    }
}

impl<T> ops::Index<Position> for [T; 64] {
    type Output = T;

    fn index(&self, index: Position) -> &T {
        &self[index.0 as usize]
    }
}

impl<T> ops::IndexMut<Position> for [T; 64] {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self[index.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_roundtrip() {
        for pos in Position::all_positions() {
            let parsed: Position = pos.to_string().parse().unwrap();
            assert_eq!(parsed, pos);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<Position>().is_err());
        assert!("a".parse::<Position>().is_err());
        assert!("a0".parse::<Position>().is_err());
        assert!("a9".parse::<Position>().is_err());
        assert!("i3".parse::<Position>().is_err());
        assert!("A3".parse::<Position>().is_err());
        assert!("a33".parse::<Position>().is_err());
    }

    #[test]
    fn test_in_board_bounds() {
        assert!(Position::in_board(0, 0));
        assert!(Position::in_board(7, 7));
        assert!(!Position::in_board(-1, 0));
        assert!(!Position::in_board(0, -1));
        assert!(!Position::in_board(8, 0));
        assert!(!Position::in_board(3, 8));
    }
}
