use std::fmt;

use crate::config::GridConfig;

/**
* The four directions the sprite can be moved in.
* Pixel space grows upwards, so `Up` increases y.
*/
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Order in which directions are polled and applied each frame.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn offset(&self) -> Offset {
        let (x, y) = match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        };
        Offset { x, y }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Offset {
    pub x: isize,
    pub y: isize,
}

/// Cell coordinates of the sprite. Always within the bounds of the grid it moves on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Hash)]
pub struct GridPosition {
    pub x: usize,
    pub y: usize,
}

impl From<(usize, usize)> for GridPosition {
    fn from((x, y): (usize, usize)) -> Self {
        GridPosition { x, y }
    }
}

impl From<GridPosition> for (usize, usize) {
    fn from(value: GridPosition) -> Self {
        (value.x, value.y)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl GridPosition {
    /// Moves one cell in `dir`, re-entering from the opposite edge when leaving the grid.
    pub fn move_once(self, dir: Direction, grid: &GridConfig) -> Self {
        let offset = dir.offset();
        GridPosition {
            x: wrap(self.x, offset.x, grid.num_x),
            y: wrap(self.y, offset.y, grid.num_y),
        }
    }

    /// Applies `dirs` one after the other.
    pub fn move_all(self, dirs: impl IntoIterator<Item = Direction>, grid: &GridConfig) -> Self {
        dirs.into_iter()
            .fold(self, |pos, dir| pos.move_once(dir, grid))
    }
}

fn wrap(value: usize, delta: isize, len: usize) -> usize {
    debug_assert!(value < len);
    match delta {
        0 => value,
        d if d < 0 => {
            if value > 0 {
                value - 1
            } else {
                len - 1
            }
        }
        _ => {
            if value + 1 < len {
                value + 1
            } else {
                0
            }
        }
    }
}

/// Axis-aligned pixel rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridConfig = GridConfig::DEFAULT;

    fn all_positions(grid: &GridConfig) -> impl Iterator<Item = GridPosition> + '_ {
        (0..grid.num_x).flat_map(move |x| (0..grid.num_y).map(move |y| GridPosition { x, y }))
    }

    #[test]
    fn moves_stay_in_bounds() {
        for pos in all_positions(&GRID) {
            for dir in Direction::ALL {
                let next = pos.move_once(dir, &GRID);
                assert!(GRID.contains(next), "{pos} moved {dir:?} to {next}");
            }
        }
    }

    #[test]
    fn moves_change_one_axis_by_one_cell() {
        let pos = GridPosition { x: 10, y: 20 };
        assert_eq!(pos.move_once(Direction::Left, &GRID), (9, 20).into());
        assert_eq!(pos.move_once(Direction::Right, &GRID), (11, 20).into());
        assert_eq!(pos.move_once(Direction::Up, &GRID), (10, 21).into());
        assert_eq!(pos.move_once(Direction::Down, &GRID), (10, 19).into());
    }

    #[test]
    fn wraps_around_from_origin() {
        let origin = GridPosition::default();
        assert_eq!(origin.move_once(Direction::Left, &GRID), (63, 0).into());
        assert_eq!(origin.move_once(Direction::Down, &GRID), (0, 47).into());
    }

    #[test]
    fn wraps_around_from_far_corner() {
        let corner = GridPosition { x: 63, y: 47 };
        assert_eq!(corner.move_once(Direction::Right, &GRID), (0, 47).into());
        assert_eq!(corner.move_once(Direction::Up, &GRID), (63, 0).into());
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for pos in all_positions(&GRID) {
            for dir in Direction::ALL {
                let steps = match dir {
                    Direction::Left | Direction::Right => GRID.num_x,
                    Direction::Up | Direction::Down => GRID.num_y,
                };
                let end = pos.move_all(std::iter::repeat_n(dir, steps), &GRID);
                assert_eq!(end, pos, "{steps} moves {dir:?} from {pos}");
            }
        }
    }

    #[test]
    fn opposite_undoes_move() {
        for pos in all_positions(&GRID) {
            for dir in Direction::ALL {
                let back = pos.move_once(dir, &GRID).move_once(dir.opposite(), &GRID);
                assert_eq!(back, pos);
            }
        }
    }

    #[test]
    fn opposite_has_negated_offset() {
        for dir in Direction::ALL {
            let (offset, back) = (dir.offset(), dir.opposite().offset());
            assert_eq!((offset.x + back.x, offset.y + back.y), (0, 0));
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
        }
    }

    #[test]
    fn tiny_grid_wraps_onto_itself() {
        let grid = GridConfig::new(16, 16, 16);
        let pos = GridPosition::default();
        for dir in Direction::ALL {
            assert_eq!(pos.move_once(dir, &grid), pos);
        }
    }
}
