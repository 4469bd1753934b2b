use life_step::{Cell, Grid, Size};

fn grid(s: &str) -> Grid {
    s.parse().unwrap()
}

fn after(s: &str, steps: usize) -> String {
    let mut g = grid(s);
    for _ in 0..steps {
        g = g.next_generation();
    }
    g.to_string()
}

#[test]
fn single_row_keeps_only_fully_flanked_cells() {
    assert_eq!(after("1 5 .XXX.", 1), "..X..\n");
}

#[test]
fn horizontal_blinker_turns_vertical() {
    assert_eq!(after("3 3 ... XXX ...", 1), ".X.\n.X.\n.X.\n");
}

#[test]
fn blinker_has_period_two() {
    let start = grid("5 5 ..... ..... .XXX. ..... .....");
    assert_ne!(start.next_generation(), start);
    assert_eq!(start.next_generation().next_generation(), start);
}

#[test]
fn isolated_cell_dies_anywhere() {
    for row in 0..3 {
        for column in 0..3 {
            let mut cells = vec![Cell::Dead; 9];
            cells[row * 3 + column] = Cell::Alive;
            let g = Grid::new(Size::new(3, 3), cells).unwrap();
            assert_eq!(g.next_generation().population(), 0, "cell at {row},{column}");
        }
    }
}

#[test]
fn full_three_by_three_keeps_corners() {
    assert_eq!(after("3 3 XXX XXX XXX", 1), "X.X\n...\nX.X\n");
}

#[test]
fn single_cell_grid_always_dead() {
    assert_eq!(after("1 1 X", 1), ".\n");
    assert_eq!(after("1 1 .", 1), ".\n");
}

#[test]
fn single_column_mirrors_single_row() {
    assert_eq!(after("5 1 . X X X .", 1), ".\n.\nX\n.\n.\n");
}

#[test]
fn block_is_a_still_life() {
    let block = grid("4 4 .... .XX. .XX. ....");
    assert_eq!(block.next_generation(), block);
}

#[test]
fn glider_moves_diagonally() {
    let start = "6 6 .X.... ..X... XXX... ...... ...... ......";
    let moved = "6 6 ...... ..X... ...X.. .XXX.. ...... ......";
    assert_eq!(after(start, 4), grid(moved).to_string());
}

#[test]
fn glider_settles_into_a_block_in_the_corner() {
    let g = after("4 4 .X.. ..X. XXX. ....", 7);
    assert_eq!(g, "....\n....\n..XX\n..XX\n");
    assert_eq!(after("4 4 .X.. ..X. XXX. ....", 8), g);
}

#[test]
fn dimensions_are_preserved() {
    for s in ["1 1 X", "1 4 XX.X", "4 1 X.XX", "2 3 XXX ..X", "3 2 X. XX .X"] {
        let g = grid(s);
        assert_eq!(g.next_generation().size(), g.size());
    }
}

#[test]
fn same_input_gives_same_output() {
    let g = grid("3 7 .X...X. X.X.X.X X...X.X");
    assert_eq!(g.next_generation(), g.next_generation());
    assert_eq!(g.next_generation().to_string(), ".X...X.\nX..XX.X\n.X.X...\n");
}

#[test]
fn all_dead_grid_stays_dead() {
    let g = Grid::dead(Size::new(6, 9)).unwrap();
    assert_eq!(g.next_generation(), g);
}
