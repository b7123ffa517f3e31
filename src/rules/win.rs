//! Win condition checking on the cubic grid
//!
//! A line is a run of `win_length` consecutive cells along one of the 13
//! directions below. A player wins by filling a whole line with their marks;
//! the game is drawn once no line can ever be completed by either player.

use crate::grid::{Cell, Coord, Grid3, Player};

/// Direction vectors for line checking.
///
/// Covering every row, column, vertical, face diagonal and space diagonal
/// from every cell requires 13 directions: one representative per antipodal
/// pair over `{-1,0,1}^3` minus the zero vector. Scanning each direction
/// from every cell visits each geometric line exactly once.
pub const LINE_DIRS: [(i8, i8, i8); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (0, 1, 1),
    (0, -1, 1),
    (1, 0, 1),
    (-1, 0, 1),
    (1, 1, 0),
    (-1, 1, 0),
    (1, 1, 1),
    (-1, 1, 1),
    (1, -1, 1),
    (1, 1, -1),
];

/// Terminal state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The game goes on: at least one line can still be completed
    Continue,
    /// A player completed a winning line
    Won(Player),
    /// No line can ever be completed by either player
    Draw,
}

/// Check if the line can still become a winning one.
///
/// Walks `win_length` cells from `origin` along `dir`. A potential-win line
/// stays inside the grid and contains no mixture of both players' marks
/// (all empty, or one player's marks plus empties). Used as the pruning
/// predicate for the heuristic strategy and for draw detection.
pub fn is_line_potential_win(
    grid: &Grid3<Cell>,
    origin: Coord,
    dir: (i8, i8, i8),
    win_length: usize,
) -> bool {
    let size = grid.size();
    let mut seen: Option<Player> = None;
    let (mut x, mut y, mut z) = (i32::from(origin.x), i32::from(origin.y), i32::from(origin.z));
    for _ in 0..win_length {
        if !Coord::in_bounds(x, y, z, size) {
            return false;
        }
        if let Cell::Mark(mark) = grid.get(Coord::new(x as u8, y as u8, z as u8)) {
            if seen.is_some_and(|other| other != mark) {
                return false;
            }
            seen = Some(mark);
        }
        x += i32::from(dir.0);
        y += i32::from(dir.1);
        z += i32::from(dir.2);
    }
    true
}

/// Check if all `win_length` cells of the line hold the origin's mark.
///
/// Returns false when the origin is empty, when the line leaves the grid,
/// or when any visited cell differs from the origin. A true result is the
/// win condition for one line.
pub fn is_line_all_same(
    grid: &Grid3<Cell>,
    origin: Coord,
    dir: (i8, i8, i8),
    win_length: usize,
) -> bool {
    let size = grid.size();
    let Cell::Mark(mark) = grid.get(origin) else {
        return false;
    };
    let (mut x, mut y, mut z) = (i32::from(origin.x), i32::from(origin.y), i32::from(origin.z));
    for _ in 0..win_length {
        if !Coord::in_bounds(x, y, z, size) {
            return false;
        }
        if grid.get(Coord::new(x as u8, y as u8, z as u8)) != Cell::Mark(mark) {
            return false;
        }
        x += i32::from(dir.0);
        y += i32::from(dir.1);
        z += i32::from(dir.2);
    }
    true
}

/// Number of non-empty cells on the line. The line must lie fully inside
/// the grid, which callers establish with [`is_line_potential_win`] first.
pub fn marks_in_line(
    grid: &Grid3<Cell>,
    origin: Coord,
    dir: (i8, i8, i8),
    win_length: usize,
) -> usize {
    let size = grid.size();
    let mut marks = 0;
    let (mut x, mut y, mut z) = (i32::from(origin.x), i32::from(origin.y), i32::from(origin.z));
    for _ in 0..win_length {
        debug_assert!(
            Coord::in_bounds(x, y, z, size),
            "marks_in_line walked off the grid"
        );
        if !grid.get(Coord::new(x as u8, y as u8, z as u8)).is_empty() {
            marks += 1;
        }
        x += i32::from(dir.0);
        y += i32::from(dir.1);
        z += i32::from(dir.2);
    }
    marks
}

/// Examine the grid and decide win, draw or non-final state.
///
/// Scans cells z-outer / y-middle / x-inner and directions in table order,
/// returning the first completed line's owner immediately. The scan order
/// does not affect which states are terminal, but it fixes which line wins
/// when several complete at once, so it must stay deterministic. With no
/// winner, the state is [`GameState::Continue`] while any potential-win
/// line remains and [`GameState::Draw`] otherwise.
pub fn check_game_state(grid: &Grid3<Cell>, win_length: usize) -> GameState {
    let size = grid.size();
    let mut verdict = GameState::Draw;
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                let origin = Coord::new(x as u8, y as u8, z as u8);
                if let Cell::Mark(player) = grid.get(origin) {
                    for dir in LINE_DIRS {
                        if is_line_all_same(grid, origin, dir, win_length) {
                            return GameState::Won(player);
                        }
                    }
                }
                if verdict == GameState::Draw {
                    for dir in LINE_DIRS {
                        if is_line_potential_win(grid, origin, dir, win_length) {
                            verdict = GameState::Continue;
                            break;
                        }
                    }
                }
            }
        }
    }
    verdict
}

/// Mark every cell of every completed winning line in `winning`.
///
/// Re-runs the win-detection scan of [`check_game_state`] without the
/// short-circuit: overlapping and simultaneous lines are all marked, and
/// marking a cell twice is idempotent. `winning` must have the same size
/// as `grid` and is only ever set to true here; callers clear it on reset.
pub fn mark_winning_lines(grid: &Grid3<Cell>, win_length: usize, winning: &mut Grid3<bool>) {
    debug_assert_eq!(grid.size(), winning.size(), "winning mask size mismatch");
    let size = grid.size();
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                let origin = Coord::new(x as u8, y as u8, z as u8);
                if grid.get(origin).is_empty() {
                    continue;
                }
                for dir in LINE_DIRS {
                    if is_line_all_same(grid, origin, dir, win_length) {
                        mark_line(winning, origin, dir, win_length);
                    }
                }
            }
        }
    }
}

/// Set all `win_length` cells of one in-bounds line in the mask.
fn mark_line(winning: &mut Grid3<bool>, origin: Coord, dir: (i8, i8, i8), win_length: usize) {
    let (mut x, mut y, mut z) = (i32::from(origin.x), i32::from(origin.y), i32::from(origin.z));
    for _ in 0..win_length {
        winning.set(Coord::new(x as u8, y as u8, z as u8), true);
        x += i32::from(dir.0);
        y += i32::from(dir.1);
        z += i32::from(dir.2);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn grid(size: usize) -> Grid3<Cell> {
        Grid3::with_size(size)
    }

    fn place(grid: &mut Grid3<Cell>, cells: &[(u8, u8, u8)], player: Player) {
        for &(x, y, z) in cells {
            grid.set(Coord::new(x, y, z), Cell::Mark(player));
        }
    }

    /// Enumerate every fully in-bounds line as a sorted index set.
    fn enumerate_lines(size: usize, win_length: usize) -> Vec<Vec<usize>> {
        let mut lines = Vec::new();
        for z in 0..size as i32 {
            for y in 0..size as i32 {
                for x in 0..size as i32 {
                    for dir in LINE_DIRS {
                        let mut cells = Vec::new();
                        let (mut cx, mut cy, mut cz) = (x, y, z);
                        for _ in 0..win_length {
                            if !Coord::in_bounds(cx, cy, cz, size) {
                                cells.clear();
                                break;
                            }
                            cells.push(Coord::new(cx as u8, cy as u8, cz as u8).to_index(size));
                            cx += i32::from(dir.0);
                            cy += i32::from(dir.1);
                            cz += i32::from(dir.2);
                        }
                        if cells.len() == win_length {
                            cells.sort_unstable();
                            lines.push(cells);
                        }
                    }
                }
            }
        }
        lines
    }

    #[test]
    fn test_direction_table_shape() {
        assert_eq!(LINE_DIRS.len(), 13);
        let mut seen = HashSet::new();
        for (dx, dy, dz) in LINE_DIRS {
            assert!((dx, dy, dz) != (0, 0, 0));
            // Each direction and its antipode scan the same lines, so the
            // table must contain at most one of the two.
            assert!(seen.insert((dx, dy, dz)));
            assert!(!seen.contains(&(-dx, -dy, -dz)));
        }
    }

    #[test]
    fn test_direction_table_covers_all_lines_once() {
        // Scanning all 13 directions from every cell must visit every
        // geometric line exactly once: 49 lines on a 3^3 grid with
        // win length 3, 76 on 4^3 with 4, 224 on 4^3 with 3.
        for (size, win_length, expected) in [(3, 3, 49), (4, 4, 76), (4, 3, 224)] {
            let lines = enumerate_lines(size, win_length);
            assert_eq!(lines.len(), expected, "size {size} win {win_length}");
            let unique: HashSet<_> = lines.iter().cloned().collect();
            assert_eq!(unique.len(), expected, "duplicate lines for size {size}");
        }
    }

    #[test]
    fn test_empty_grid_continues() {
        for (size, win_length) in [(3, 3), (4, 3), (5, 5), (6, 4)] {
            let grid = grid(size);
            assert_eq!(check_game_state(&grid, win_length), GameState::Continue);
        }
    }

    #[test]
    fn test_row_win_with_distractors() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 1, 0), (1, 1, 0), (2, 1, 0)], Player::One);
        place(&mut grid, &[(0, 0, 0), (1, 0, 0)], Player::Two);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::One));
    }

    #[test]
    fn test_column_and_vertical_wins() {
        let mut grid = grid(3);
        place(&mut grid, &[(1, 0, 1), (1, 1, 1), (1, 2, 1)], Player::Two);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::Two));

        let mut grid = Grid3::with_size(3);
        place(&mut grid, &[(2, 2, 0), (2, 2, 1), (2, 2, 2)], Player::One);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::One));
    }

    #[test]
    fn test_anti_face_diagonal_win() {
        // Direction (0,-1,1): y falls while z rises.
        let mut grid = grid(3);
        place(&mut grid, &[(0, 2, 0), (0, 1, 1), (0, 0, 2)], Player::Two);
        place(&mut grid, &[(1, 0, 0)], Player::One);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::Two));
    }

    #[test]
    fn test_space_diagonal_wins() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (1, 1, 1), (2, 2, 2)], Player::One);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::One));

        let mut grid = Grid3::with_size(3);
        place(&mut grid, &[(0, 0, 2), (1, 1, 1), (2, 2, 0)], Player::One);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::One));
    }

    #[test]
    fn test_short_line_inside_larger_grid() {
        // Win length 3 on a 4^3 grid: a line not touching the boundary.
        let mut grid = grid(4);
        place(&mut grid, &[(1, 1, 1), (2, 2, 2), (3, 3, 3)], Player::Two);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::Two));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (1, 0, 0)], Player::One);
        place(&mut grid, &[(2, 0, 0)], Player::Two);
        assert_eq!(check_game_state(&grid, 3), GameState::Continue);
    }

    #[test]
    fn test_scan_order_picks_first_winner() {
        // Both players hold a complete line; the scan runs x-inner,
        // y-middle, z-outer, so the line nearer the origin wins.
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)], Player::One);
        place(&mut grid, &[(0, 2, 2), (1, 2, 2), (2, 2, 2)], Player::Two);
        assert_eq!(check_game_state(&grid, 3), GameState::Won(Player::One));
    }

    #[test]
    fn test_full_grid_draw() {
        // A full 4^3 grid with no completed line. (On 3^3 every complete
        // filling contains a line, so 4 is the smallest size with a
        // full-grid draw.) 32 cells per player, as after a real game.
        let p1_cells = [
            0, 1, 6, 8, 11, 14, 15, 16, 18, 21, 22, 23, 24, 25, 31, 34, 35, 36, 37, 39, 43, 45,
            46, 50, 53, 54, 55, 57, 58, 59, 60, 61,
        ];
        let mut grid = grid(4);
        for index in 0..grid.len() {
            let player = if p1_cells.contains(&index) {
                Player::One
            } else {
                Player::Two
            };
            grid[index] = Cell::Mark(player);
        }
        assert_eq!(check_game_state(&grid, 4), GameState::Draw);
    }

    #[test]
    fn test_potential_win_line() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0)], Player::One);
        let origin = Coord::new(0, 0, 0);

        // Empty or single-player lines are potential wins.
        assert!(is_line_potential_win(&grid, origin, (1, 0, 0), 3));
        assert!(is_line_potential_win(&grid, Coord::new(0, 2, 0), (1, 0, 0), 3));

        // A line with both players' marks is dead.
        place(&mut grid, &[(2, 0, 0)], Player::Two);
        assert!(!is_line_potential_win(&grid, origin, (1, 0, 0), 3));

        // A line leaving the grid is not potential.
        assert!(!is_line_potential_win(&grid, Coord::new(1, 0, 0), (1, 0, 0), 3));
    }

    #[test]
    fn test_all_same_line() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)], Player::One);
        let origin = Coord::new(0, 0, 0);
        assert!(is_line_all_same(&grid, origin, (1, 0, 0), 3));

        // Empty origin never matches.
        assert!(!is_line_all_same(&grid, Coord::new(0, 1, 0), (1, 0, 0), 3));

        // Out of bounds walk fails.
        assert!(!is_line_all_same(&grid, Coord::new(1, 0, 0), (1, 0, 0), 3));

        // One differing cell fails.
        grid.set(Coord::new(1, 0, 0), Cell::Mark(Player::Two));
        assert!(!is_line_all_same(&grid, origin, (1, 0, 0), 3));
    }

    #[test]
    fn test_marks_in_line() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (2, 0, 0)], Player::One);
        assert_eq!(marks_in_line(&grid, Coord::new(0, 0, 0), (1, 0, 0), 3), 2);
        assert_eq!(marks_in_line(&grid, Coord::new(0, 1, 0), (1, 0, 0), 3), 0);
    }

    #[test]
    fn test_mark_two_independent_winning_lines() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)], Player::One);
        place(&mut grid, &[(0, 2, 2), (1, 2, 2), (2, 2, 2)], Player::One);

        let mut winning: Grid3<bool> = Grid3::with_size(3);
        mark_winning_lines(&grid, 3, &mut winning);

        let marked: Vec<usize> = (0..winning.len()).filter(|&index| winning[index]).collect();
        assert_eq!(marked, vec![0, 1, 2, 24, 25, 26]);
    }

    #[test]
    fn test_mark_overlapping_winning_lines() {
        // A row and a column sharing the corner cell: five cells marked,
        // the shared corner only once.
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)], Player::One);
        place(&mut grid, &[(0, 1, 0), (0, 2, 0)], Player::One);

        let mut winning: Grid3<bool> = Grid3::with_size(3);
        mark_winning_lines(&grid, 3, &mut winning);

        let marked: Vec<usize> = (0..winning.len()).filter(|&index| winning[index]).collect();
        assert_eq!(marked, vec![0, 1, 2, 3, 6]);
    }

    #[test]
    fn test_mark_nothing_without_winner() {
        let mut grid = grid(3);
        place(&mut grid, &[(0, 0, 0), (1, 0, 0)], Player::One);
        let mut winning: Grid3<bool> = Grid3::with_size(3);
        mark_winning_lines(&grid, 3, &mut winning);
        assert!(winning.iter().all(|&flag| !flag));
    }
}
