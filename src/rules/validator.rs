//! Per-piece move legality.
//!
//! Each predicate answers whether the geometric pattern and path
//! obstructions allow a piece to travel from origin to destination. Turn
//! ownership and same-side capture are the orchestrator's concern, not
//! checked here, which is what lets check detection reuse these
//! predicates as plain reachability queries.

use crate::board::palace;
use crate::board::{Board, Color, Coordinate, Piece, PieceKind};

/// Returns whether the piece may travel from `from` to `to` under its
/// movement pattern and the current obstructions on `board`.
///
/// Pure: repeated calls with an unchanged board give identical answers.
/// `from == to` is never a legal movement; passing is handled upstream.
pub fn is_legal(board: &Board, from: Coordinate, piece: Piece, to: Coordinate) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Chariot => chariot_move(board, from, to),
        PieceKind::Soldier => soldier_move(piece.color, from, to),
        PieceKind::Guard | PieceKind::General => palace_step(from, to),
        PieceKind::Cannon => cannon_move(board, from, to),
        PieceKind::Horse => horse_move(board, from, to),
        PieceKind::Elephant => elephant_move(board, from, to),
    }
}

/// Signed (file, rank) displacement from `from` to `to`.
fn deltas(from: Coordinate, to: Coordinate) -> (i8, i8) {
    (
        to.file as i8 - from.file as i8,
        to.rank as i8 - from.rank as i8,
    )
}

/// Collects the occupants of the squares strictly between two squares
/// that share a rank or file.
fn pieces_between(board: &Board, from: Coordinate, to: Coordinate) -> Vec<Piece> {
    let (file_delta, rank_delta) = deltas(from, to);
    let step = (file_delta.signum(), rank_delta.signum());
    debug_assert!(step.0 == 0 || step.1 == 0);

    let mut found = Vec::new();
    let mut square = from.offset(step.0, step.1);
    while let Some(current) = square {
        if current == to {
            break;
        }
        if let Some(piece) = board.get(current) {
            found.push(piece);
        }
        square = current.offset(step.0, step.1);
    }
    found
}

/// Chariots slide any orthogonal distance over empty squares.
fn chariot_move(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    if from.file != to.file && from.rank != to.rank {
        return false;
    }
    pieces_between(board, from, to).is_empty()
}

/// Soldiers step one square forward or sideways and never retreat. Inside
/// a palace a forward diagonal step is also allowed when it follows a
/// marked line.
fn soldier_move(color: Color, from: Coordinate, to: Coordinate) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    if file_delta.abs() > 1 {
        return false;
    }
    if rank_delta != 0 && rank_delta != color.forward() {
        return false;
    }
    if file_delta != 0 && rank_delta != 0 {
        return palace::diagonal_step_on_line(from, to);
    }
    true
}

/// Guards and generals stay inside their palace and move one step along
/// its lines: any orthogonal step, or a diagonal step joining a corner to
/// the centre.
fn palace_step(from: Coordinate, to: Coordinate) -> bool {
    let (Some(a), Some(b)) = (palace::palace_at(from), palace::palace_at(to)) else {
        return false;
    };
    if a != b {
        return false;
    }
    let (file_delta, rank_delta) = deltas(from, to);
    if file_delta.abs() > 1 || rank_delta.abs() > 1 {
        return false;
    }
    if file_delta != 0 && rank_delta != 0 {
        return palace::diagonal_step_on_line(from, to);
    }
    true
}

/// Cannons slide any orthogonal distance but must jump exactly one
/// screening piece, which may not be a cannon. Inside a palace they may
/// also jump corner-to-opposite-corner with the centre as the screen. A
/// cannon never lands on another cannon.
fn cannon_move(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    if let Some(target) = board.get(to) {
        if target.kind == PieceKind::Cannon {
            return false;
        }
    }

    if let Some(center) = palace::long_diagonal(from, to) {
        return match board.get(center) {
            Some(screen) => screen.kind != PieceKind::Cannon,
            None => false,
        };
    }

    if from.file != to.file && from.rank != to.rank {
        return false;
    }
    match pieces_between(board, from, to).as_slice() {
        [screen] => screen.kind != PieceKind::Cannon,
        _ => false,
    }
}

/// Horses leap one orthogonal step then one diagonal step outward. The
/// orthogonally adjacent square on the path must be empty; the check is
/// the same for all eight offsets.
fn horse_move(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    let leg = match (file_delta.abs(), rank_delta.abs()) {
        (1, 2) => (0, rank_delta.signum()),
        (2, 1) => (file_delta.signum(), 0),
        _ => return false,
    };
    match from.offset(leg.0, leg.1) {
        Some(square) => board.get(square).is_none(),
        None => false,
    }
}

/// Elephants leap one orthogonal step then two diagonal steps. Both the
/// orthogonal square and the first diagonal square must be empty.
fn elephant_move(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    let (leg, diagonal) = match (file_delta.abs(), rank_delta.abs()) {
        (2, 3) => (
            (0, rank_delta.signum()),
            (file_delta.signum(), rank_delta.signum()),
        ),
        (3, 2) => (
            (file_delta.signum(), 0),
            (file_delta.signum(), rank_delta.signum()),
        ),
        _ => return false,
    };

    let first = match from.offset(leg.0, leg.1) {
        Some(square) => square,
        None => return false,
    };
    let second = match first.offset(diagonal.0, diagonal.1) {
        Some(square) => square,
        None => return false,
    };
    board.get(first).is_none() && board.get(second).is_none()
}
