use super::*;

#[test]
fn test_neighbors_center() {
    let grid = GridSpec::new(5, 4);
    let n = grid.neighbors(Cell::new(2, 1));
    assert_eq!(
        n,
        vec![
            Cell::new(1, 1),
            Cell::new(3, 1),
            Cell::new(2, 0),
            Cell::new(2, 2),
        ]
    );
}

#[test]
fn test_neighbors_top_left_corner() {
    let grid = GridSpec::new(5, 4);
    let n = grid.neighbors(Cell::new(0, 0));
    assert_eq!(n, vec![Cell::new(1, 0), Cell::new(0, 1)]);
}

#[test]
fn test_neighbors_bottom_right_corner() {
    let grid = GridSpec::new(5, 4);
    let n = grid.neighbors(Cell::new(4, 3));
    assert_eq!(n, vec![Cell::new(3, 3), Cell::new(4, 2)]);
}

#[test]
fn test_neighbors_single_cell_grid() {
    let grid = GridSpec::new(1, 1);
    assert!(grid.neighbors(Cell::new(0, 0)).is_empty());
}

#[test]
fn test_contains_bounds() {
    let grid = GridSpec::new(5, 4);
    assert!(grid.contains(Cell::new(0, 0)));
    assert!(grid.contains(Cell::new(4, 3)));
    assert!(!grid.contains(Cell::new(5, 0)));
    assert!(!grid.contains(Cell::new(0, 4)));
    assert!(!grid.contains(Cell::new(-1, 0)));
}

#[test]
fn test_direction_of_four_ways() {
    let c = Cell::new(2, 2);
    assert_eq!(direction_of(c, Cell::new(1, 2)), Direction::Up);
    assert_eq!(direction_of(c, Cell::new(3, 2)), Direction::Down);
    assert_eq!(direction_of(c, Cell::new(2, 1)), Direction::Left);
    assert_eq!(direction_of(c, Cell::new(2, 3)), Direction::Right);
}

#[test]
fn test_direction_display() {
    assert_eq!(Direction::Up.to_string(), "up");
    assert_eq!(Direction::Down.to_string(), "down");
    assert_eq!(Direction::Left.to_string(), "left");
    assert_eq!(Direction::Right.to_string(), "right");
}

#[test]
fn test_manhattan() {
    assert_eq!(Cell::new(0, 0).manhattan(Cell::new(4, 3)), 7);
    assert_eq!(Cell::new(2, 2).manhattan(Cell::new(2, 2)), 0);
    assert_eq!(Cell::new(3, 0).manhattan(Cell::new(0, 3)), 6);
}

#[test]
fn test_count_turns_straight() {
    let path = vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
    assert_eq!(count_turns(&path), 0);
}

#[test]
fn test_count_turns_l_shape() {
    let path = vec![
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(1, 1),
        Cell::new(2, 1),
    ];
    assert_eq!(count_turns(&path), 1);
}

#[test]
fn test_count_turns_zigzag() {
    let path = vec![
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(1, 1),
        Cell::new(1, 2),
        Cell::new(2, 2),
    ];
    assert_eq!(count_turns(&path), 3);
}

#[test]
fn test_count_turns_short_path() {
    assert_eq!(count_turns(&[]), 0);
    assert_eq!(count_turns(&[Cell::new(0, 0)]), 0);
    assert_eq!(count_turns(&[Cell::new(0, 0), Cell::new(1, 0)]), 0);
}
