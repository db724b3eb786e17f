//! Palace zones.
//!
//! Each side has a 3x3 palace spanning files d-f: ranks 1-3 for red and
//! ranks 8-10 for blue. Generals and guards are confined to their palace,
//! and diagonal movement inside a palace is only permitted along the
//! marked lines that join the four corners to the centre.

use super::coord::Coordinate;
use super::piece::Color;

/// Centre square of the red palace (e2).
pub const RED_PALACE_CENTER: Coordinate = Coordinate { file: 4, rank: 1 };

/// Centre square of the blue palace (e9).
pub const BLUE_PALACE_CENTER: Coordinate = Coordinate { file: 4, rank: 8 };

/// Returns the side whose palace contains the square, if any.
pub fn palace_at(coord: Coordinate) -> Option<Color> {
    if !(3..=5).contains(&coord.file) {
        return None;
    }
    match coord.rank {
        0..=2 => Some(Color::Red),
        7..=9 => Some(Color::Blue),
        _ => None,
    }
}

/// Returns whether the square lies inside either palace.
pub fn in_palace(coord: Coordinate) -> bool {
    palace_at(coord).is_some()
}

/// Returns the centre square of the given side's palace.
pub const fn palace_center(color: Color) -> Coordinate {
    match color {
        Color::Red => RED_PALACE_CENTER,
        Color::Blue => BLUE_PALACE_CENTER,
    }
}

/// Returns whether a single diagonal step between the two squares follows
/// a marked palace line. The marked lines join each corner to the centre,
/// so one endpoint must be the centre of the palace containing both.
pub fn diagonal_step_on_line(from: Coordinate, to: Coordinate) -> bool {
    let (Some(a), Some(b)) = (palace_at(from), palace_at(to)) else {
        return false;
    };
    if a != b {
        return false;
    }
    let file_delta = (to.file as i8 - from.file as i8).abs();
    let rank_delta = (to.rank as i8 - from.rank as i8).abs();
    if file_delta != 1 || rank_delta != 1 {
        return false;
    }
    let center = palace_center(a);
    from == center || to == center
}

/// Returns the centre square crossed by a corner-to-opposite-corner
/// palace diagonal, or `None` when the two squares do not form one.
pub fn long_diagonal(from: Coordinate, to: Coordinate) -> Option<Coordinate> {
    let (Some(a), Some(b)) = (palace_at(from), palace_at(to)) else {
        return None;
    };
    if a != b {
        return None;
    }
    let file_delta = (to.file as i8 - from.file as i8).abs();
    let rank_delta = (to.rank as i8 - from.rank as i8).abs();
    if file_delta == 2 && rank_delta == 2 {
        Some(palace_center(a))
    } else {
        None
    }
}
