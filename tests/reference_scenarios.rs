use runbound::{solve_pair, Grid, RunLimits, Search};

const CITY_13: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

const RIDGE_5X12: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991";

fn city_grid() -> Grid {
    CITY_13.parse().unwrap()
}

fn ridge_grid() -> Grid {
    RIDGE_5X12.parse().unwrap()
}

fn path_cost(grid: &Grid, path: &[(usize, usize)]) -> u64 {
    path.iter()
        .skip(1)
        .map(|&(r, c)| u64::from(grid.cost(r, c).unwrap()))
        .sum()
}

#[test]
fn city_grid_crucible_costs_102() {
    let grid = city_grid();
    let outcome = Search::new(&grid, RunLimits::crucible()).run().unwrap();
    assert_eq!(outcome.cost, 102);
    assert_eq!(outcome.path.first(), Some(&(0, 0)));
    assert_eq!(outcome.path.last(), Some(&(12, 12)));
    assert_eq!(path_cost(&grid, &outcome.path), outcome.cost);
}

#[test]
fn city_grid_ultra_costs_94() {
    let grid = city_grid();
    let outcome = Search::new(&grid, RunLimits::ultra()).run().unwrap();
    assert_eq!(outcome.cost, 94);
    assert_eq!(outcome.path.first(), Some(&(0, 0)));
    assert_eq!(outcome.path.last(), Some(&(12, 12)));
    assert_eq!(path_cost(&grid, &outcome.path), outcome.cost);
}

#[test]
fn ridge_grid_ultra_costs_71() {
    // The cheap top row is only eleven cells of travel, one more than
    // max_run allows in a single leg, so the route has to drop into the 9s
    // before the final column.
    let grid = ridge_grid();
    let outcome = Search::new(&grid, RunLimits::ultra()).run().unwrap();
    assert_eq!(outcome.cost, 71);
    assert_eq!(outcome.path.first(), Some(&(0, 0)));
    assert_eq!(outcome.path.last(), Some(&(4, 11)));
    assert_eq!(path_cost(&grid, &outcome.path), outcome.cost);
}

#[test]
fn single_cell_grid_costs_zero_under_any_profile() {
    let grid: Grid = "9".parse().unwrap();
    for limits in [
        RunLimits::crucible(),
        RunLimits::ultra(),
        RunLimits::new(7, 7).unwrap(),
    ] {
        let outcome = Search::new(&grid, limits).run().unwrap();
        assert_eq!(outcome.cost, 0);
        assert_eq!(outcome.path, vec![(0, 0)]);
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let grid = city_grid();
    for limits in [RunLimits::crucible(), RunLimits::ultra()] {
        let first = Search::new(&grid, limits).run().unwrap();
        let second = Search::new(&grid, limits).run().unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn solve_pair_answers_both_profiles() {
    let grid = city_grid();
    let (crucible, ultra) = solve_pair(&grid, RunLimits::crucible(), RunLimits::ultra());
    assert_eq!(crucible.unwrap().cost, 102);
    assert_eq!(ultra.unwrap().cost, 94);
}

#[test]
fn run_caps_bind_even_along_a_uniform_row() {
    // Chaining two East legs through the same row must not evade the cap:
    // eleven straight cells are illegal under max_run=10 no matter how the
    // route is bookkept.
    let grid = ridge_grid();
    let outcome = Search::new(&grid, RunLimits::ultra()).run().unwrap();
    assert!(outcome.cost > 11, "route cannot hug the whole top row");
}
