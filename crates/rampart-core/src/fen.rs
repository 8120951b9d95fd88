//! FEN parsing for board positions.
//!
//! Only the first two fields (piece placement and side to move) are
//! meaningful in this rule set. Castling rights, en-passant squares and
//! move counters have no representation on [`Board`], so any trailing
//! fields are accepted and ignored. That keeps standard six-field FEN
//! strings usable as input.

use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// FEN for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(FenError::WrongFieldCount(fields.len()));
        }

        let mut board = Board::empty();
        parse_placement(fields[0], &mut board)?;
        board.set_side_to_move(parse_side_to_move(fields[1])?);
        Ok(board)
    }
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    // FEN lists ranks from 8 down to 1.
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(FenError::InvalidPieceChar(c));
                }
                file += skip as u8;
                if file > 8 {
                    return Err(FenError::BadRankLength {
                        rank: rank as usize + 1,
                        squares: file as usize,
                    });
                }
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar(c))?;
                if file >= 8 {
                    return Err(FenError::BadRankLength {
                        rank: rank as usize + 1,
                        squares: file as usize + 1,
                    });
                }
                board.place(Square::from_coords(rank, file), piece);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank as usize + 1,
                squares: file as usize,
            });
        }
    }
    Ok(())
}

fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(FenError::InvalidColor(other.to_string())),
    }
}
