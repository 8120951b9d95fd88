//! Chess board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

/// A square on the chess board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from zero-based rank and file indices.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both indices are below 8.
    #[inline]
    pub const fn from_coords(rank: u8, file: u8) -> Square {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Square::from_coords(rank_byte - b'1', file_byte - b'a'))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the zero-based rank index (0 = rank 1, 7 = rank 8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Return the zero-based file index (0 = a-file, 7 = h-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by the given rank and file deltas, returning `None` off the board.
    ///
    /// This is the primitive behind leaper and slider move generation:
    /// wrapping across board edges is impossible because the rank and file
    /// are bounds-checked independently.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let rank = self.rank() as i8 + rank_delta;
        let file = self.file() as i8 + file_delta;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square::from_coords(rank as u8, file as u8))
        }
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named square constants
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            (b'1' + self.rank()) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
