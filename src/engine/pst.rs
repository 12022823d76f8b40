/*
  Gambit, a chess engine core.
  Copyright (C) 2026 Gambit Contributors.

  Gambit is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Gambit is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Piece-square data, in millipawns, indexed by [`Piece`] and [`Square`] from
//! White's point of view (a black piece's entry is looked up at the square's
//! [`Square::opposite`]). Values are Stockfish-derived positional deltas with
//! each piece's base material value folded in, so `MG_TABLE`/`EG_TABLE`
//! already give the full tapered value of a piece sitting on a square.
//! `EG_TABLE` carries its own deltas rather than reusing `MG_TABLE`'s: every
//! piece type trades off differently once queens and pawn chains thin out.

use crate::base::Piece;

type RawPst = [[i32; 64]; Piece::NUM];

/// Raw positional deltas in Stockfish's own piece order (pawn, knight,
/// bishop, rook, queen, king), before being reindexed to this crate's
/// [`Piece::ALL`] order and having material value folded in.
const DELTA_BY_STOCKFISH_ORDER_MG: RawPst = [
    [
        // pawns. ranks 1 and 8 are inconsequential
        0, 0, 0, 0, 0, 0, 0, 0, // rank 1
        20, 40, 110, 180, 160, 210, 90, -30, // rank 2
        -90, -150, 110, 150, 310, 230, 60, -200, // rank 3
        -30, -200, 80, 190, 390, 170, 20, -50, // rank 4
        110, -40, -110, 20, 110, 0, -120, 50, // rank 5
        30, -110, -60, 220, -80, -50, -140, -110, // rank 6
        -70, 60, -20, -110, 40, -140, 10, -90, // rank 7
        0, 0, 0, 0, 0, 0, 0, 0, // rank 8
    ],
    [
        // knights
        -1750, -920, -740, -730, -730, -740, -920, -1750, // rank 1
        -770, -410, -270, -150, -150, -270, -410, -770, // rank 2
        -610, -170, 60, 120, 120, 60, -170, -610, // rank 3
        -350, 80, 400, 490, 490, 400, 80, -350, // rank 4
        -340, 130, 440, 510, 510, 440, 130, -340, // rank 5
        -90, 330, 580, 530, 530, 580, 330, -90, // rank 6
        -670, -270, 40, 370, 370, 40, -270, -670, // rank 7
        -2010, -830, -560, -260, -260, -560, -830, -2010, // rank 8
    ],
    [
        // bishops
        -370, -40, -60, -160, -160, -60, -40, -370, // rank 1
        -110, 60, 130, 30, 30, 130, 60, -110, // rank 2
        -50, 150, -40, 120, 120, -40, 150, -50, // rank 3
        -40, 80, 180, 270, 270, 180, 80, -40, // rank 4
        -80, 200, 50, 220, 220, 50, 200, -80, // rank 5
        -110, 40, 10, 80, 80, 10, 40, -110, // rank 6
        -120, -100, 40, 0, 0, 40, -100, -120, // rank 7
        -340, -10, -10, -160, -160, -10, -10, -340, // rank 8
    ],
    [
        // rooks
        -310, -200, -140, -50, -50, -140, -200, -310, // rank 1
        -210, -130, -80, 60, 60, -80, -130, -210, // rank 2
        -250, -110, -10, 30, 30, -10, -110, -250, // rank 3
        -130, -50, -40, -60, -60, -40, -50, -130, // rank 4
        -270, -150, -40, 30, 30, -40, -150, -270, // rank 5
        -220, -20, 60, 120, 120, 60, -20, -220, // rank 6
        -20, 120, 160, 180, 180, 160, 120, -20, // rank 7
        -170, -190, -10, 90, 90, -10, -190, -170, // rank 8
    ],
    [
        // queens
        30, -50, -50, 40, 40, -50, -50, 30, // rank 1
        -30, 50, 80, 120, 120, 80, 50, -30, // rank 2
        -30, 60, 130, 70, 70, 130, 60, -30, // rank 3
        40, 50, 90, 80, 80, 90, 50, 40, // rank 4
        0, 140, 120, 50, 50, 120, 140, 0, // rank 5
        -40, 100, 60, 80, 80, 60, 100, -40, // rank 6
        -50, 60, 100, 80, 80, 100, 60, -50, // rank 7
        -20, -20, 10, -20, -20, 10, -20, -20, // rank 8
    ],
    [
        // kings
        2710, 3270, 2710, 1980, 1980, 2710, 3270, 2710, // rank 1
        2780, 3030, 2340, 1790, 1790, 2340, 3030, 2780, // rank 2
        1950, 2580, 1690, 1200, 1200, 1690, 2580, 1950, // rank 3
        1640, 1900, 1380, 980, 980, 1380, 1900, 1640, // rank 4
        1540, 1790, 1050, 700, 700, 1050, 1790, 1540, // rank 5
        1230, 1450, 810, 310, 310, 810, 1450, 1230, // rank 6
        880, 1200, 650, 330, 330, 650, 1200, 880, // rank 7
        590, 890, 450, -10, -10, 450, 890, 590, // rank 8
    ],
];

const DELTA_BY_STOCKFISH_ORDER_EG: RawPst = [
    [
        // pawns. file no longer matters much once queens are off; rank
        // does, since an advanced passer is close to promoting. ranks 1
        // and 8 are inconsequential
        0, 0, 0, 0, 0, 0, 0, 0, // rank 1
        0, 0, 0, 0, 0, 0, 0, 0, // rank 2
        30, 30, 30, 30, 30, 30, 30, 30, // rank 3
        60, 60, 60, 60, 60, 60, 60, 60, // rank 4
        120, 120, 120, 120, 120, 120, 120, 120, // rank 5
        200, 200, 200, 200, 200, 200, 200, 200, // rank 6
        300, 300, 300, 300, 300, 300, 300, 300, // rank 7
        0, 0, 0, 0, 0, 0, 0, 0, // rank 8
    ],
    [
        // knights. the outpost-on-rank-4/5 bonuses that matter in the
        // middlegame shrink; plain centralization dominates instead
        -1000, -500, -200, -100, -100, -200, -500, -1000, // rank 1
        -500, -100, 200, 300, 300, 200, -100, -500, // rank 2
        -200, 200, 400, 500, 500, 400, 200, -200, // rank 3
        -100, 300, 500, 600, 600, 500, 300, -100, // rank 4
        -100, 300, 500, 600, 600, 500, 300, -100, // rank 5
        -200, 200, 400, 500, 500, 400, 200, -200, // rank 6
        -500, -100, 200, 300, 300, 200, -100, -500, // rank 7
        -1000, -500, -200, -100, -100, -200, -500, -1000, // rank 8
    ],
    [
        // bishops, flattened: the long diagonals matter less once most
        // of the pawns that blocked them are gone
        -300, -100, -100, -100, -100, -100, -100, -300, // rank 1
        -100, 100, 100, 100, 100, 100, 100, -100, // rank 2
        -100, 100, 200, 200, 200, 200, 100, -100, // rank 3
        -100, 100, 200, 300, 300, 200, 100, -100, // rank 4
        -100, 100, 200, 300, 300, 200, 100, -100, // rank 5
        -100, 100, 200, 200, 200, 200, 100, -100, // rank 6
        -100, 100, 100, 100, 100, 100, 100, -100, // rank 7
        -300, -100, -100, -100, -100, -100, -100, -300, // rank 8
    ],
    [
        // rooks: the open-file bonuses of the middlegame give way to a
        // flat preference for the 7th rank, where enemy pawns still sit
        0, 0, 0, 100, 100, 0, 0, 0, // rank 1
        0, 0, 0, 100, 100, 0, 0, 0, // rank 2
        0, 0, 0, 100, 100, 0, 0, 0, // rank 3
        0, 0, 0, 100, 100, 0, 0, 0, // rank 4
        0, 0, 0, 100, 100, 0, 0, 0, // rank 5
        0, 0, 0, 100, 100, 0, 0, 0, // rank 6
        500, 500, 500, 500, 500, 500, 500, 500, // rank 7
        0, 0, 0, 100, 100, 0, 0, 0, // rank 8
    ],
    [
        // queens: centralization matters more with fewer pieces left to
        // threaten it
        -300, -200, -100, -100, -100, -100, -200, -300, // rank 1
        -200, -100, 100, 100, 100, 100, -100, -200, // rank 2
        -100, 100, 200, 200, 200, 200, 100, -100, // rank 3
        -100, 100, 200, 300, 300, 200, 100, -100, // rank 4
        -100, 100, 200, 300, 300, 200, 100, -100, // rank 5
        -100, 100, 200, 200, 200, 200, 100, -100, // rank 6
        -200, -100, 100, 100, 100, 100, -100, -200, // rank 7
        -300, -200, -100, -100, -100, -100, -200, -300, // rank 8
    ],
    [
        // kings, endgame: centralization matters far more than safety
        10, 450, 850, 760, 760, 850, 450, 10, // rank 1
        530, 1000, 1330, 1350, 1350, 1330, 1000, 530, // rank 2
        880, 1300, 1690, 1750, 1750, 1690, 1300, 880, // rank 3
        1030, 1560, 1720, 1720, 1720, 1720, 1560, 1030, // rank 4
        960, 1660, 1990, 1990, 1990, 1990, 1660, 960, // rank 5
        920, 1720, 1840, 1910, 1910, 1840, 1720, 920, // rank 6
        470, 1210, 1160, 1310, 1310, 1160, 1210, 470, // rank 7
        110, 590, 730, 780, 780, 730, 590, 110, // rank 8
    ],
];

/// Index of each piece type within the Stockfish-ordered raw tables above.
const fn stockfish_index(p: Piece) -> usize {
    match p {
        Piece::Pawn => 0,
        Piece::Knight => 1,
        Piece::Bishop => 2,
        Piece::Rook => 3,
        Piece::Queen => 4,
        Piece::King => 5,
    }
}

/// Reindex a Stockfish-ordered raw delta table to this crate's
/// [`Piece::ALL`] order, folding in each piece's base material value
/// (scaled from centipawns to millipawns).
const fn rebuild(raw: RawPst) -> RawPst {
    let mut table = [[0; 64]; Piece::NUM];
    let mut out_idx = 0;
    while out_idx < Piece::NUM {
        let piece = Piece::ALL[out_idx];
        let base_millipawns = piece.value() as i32 * 10;
        let in_idx = stockfish_index(piece);
        let mut sq = 0;
        while sq < 64 {
            table[out_idx][sq] = raw[in_idx][sq] + base_millipawns;
            sq += 1;
        }
        out_idx += 1;
    }
    table
}

/// Midgame table, in millipawns, folding in base material value. Indexed
/// `[piece as usize][square as usize]` from White's point of view.
pub const MG_TABLE: RawPst = rebuild(DELTA_BY_STOCKFISH_ORDER_MG);

/// Endgame table, in millipawns, folding in base material value. Indexed
/// `[piece as usize][square as usize]` from White's point of view.
pub const EG_TABLE: RawPst = rebuild(DELTA_BY_STOCKFISH_ORDER_EG);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Square;

    #[test]
    fn non_pawn_tables_are_left_right_symmetric() {
        for pt in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
            for sq in Square::ALL {
                let mirror = Square::new(sq.rank(), 7 - sq.file()).unwrap();
                assert_eq!(
                    MG_TABLE[pt as usize][sq as usize],
                    MG_TABLE[pt as usize][mirror as usize]
                );
                assert_eq!(
                    EG_TABLE[pt as usize][sq as usize],
                    EG_TABLE[pt as usize][mirror as usize]
                );
            }
        }
    }

    #[test]
    fn a_knight_in_the_corner_is_worse_than_a_knight_in_the_center() {
        let corner = MG_TABLE[Piece::Knight as usize][Square::A1 as usize];
        let center = MG_TABLE[Piece::Knight as usize][Square::D4 as usize];
        assert!(center > corner);
    }

    #[test]
    fn midgame_and_endgame_tables_differ_for_every_piece_type() {
        for pt in Piece::ALL {
            let differs = (0..64).any(|sq| MG_TABLE[pt as usize][sq] != EG_TABLE[pt as usize][sq]);
            assert!(differs, "{pt:?} has identical mg/eg tables");
        }
    }

    #[test]
    fn base_material_value_is_folded_in() {
        // A queen's table entry is always at least its base material value
        // plus the most negative delta on the queen's own table.
        let min_delta = DELTA_BY_STOCKFISH_ORDER_MG[stockfish_index(Piece::Queen)]
            .iter()
            .copied()
            .min()
            .unwrap();
        let expected_floor = Piece::Queen.value() as i32 * 10 + min_delta;
        let actual_min = MG_TABLE[Piece::Queen as usize].iter().copied().min().unwrap();
        assert_eq!(actual_min, expected_floor);
    }
}
