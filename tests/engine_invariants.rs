use runbound::{solve_pair, Error, Grid, RunLimits, Search, SearchBuilder};

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

#[test]
fn run_limits_reject_bad_configurations() {
    assert_eq!(
        RunLimits::new(0, 3).unwrap_err(),
        Error::InvalidConfig {
            min_run: 0,
            max_run: 3
        }
    );
    assert_eq!(
        RunLimits::new(5, 4).unwrap_err(),
        Error::InvalidConfig {
            min_run: 5,
            max_run: 4
        }
    );
}

#[test]
fn malformed_grids_are_reported_not_panicked() {
    assert!(matches!(
        "1a\n23".parse::<Grid>(),
        Err(Error::MalformedGrid { row: 0, .. })
    ));
    assert!(matches!(
        "123\n45".parse::<Grid>(),
        Err(Error::MalformedGrid { row: 1, .. })
    ));
    assert!(matches!(
        "".parse::<Grid>(),
        Err(Error::MalformedGrid { row: 0, .. })
    ));
}

#[test]
fn min_run_longer_than_any_route_is_no_path() {
    // A 2x2 grid only has room for single-cell legs; ultra demands four.
    let grid: Grid = "12\n34".parse().unwrap();
    assert_eq!(
        Search::new(&grid, RunLimits::ultra()).run().unwrap_err(),
        Error::NoPathFound
    );

    // Three cells of Eastward travel, minimum leg of four.
    let grid: Grid = "1234".parse().unwrap();
    assert_eq!(
        Search::new(&grid, RunLimits::ultra()).run().unwrap_err(),
        Error::NoPathFound
    );
}

#[test]
fn forced_turn_with_no_side_room_is_no_path() {
    // After three East cells the crucible must turn, and a single-row grid
    // gives it nowhere to go.
    let grid: Grid = "11111".parse().unwrap();
    assert_eq!(
        Search::new(&grid, RunLimits::crucible()).run().unwrap_err(),
        Error::NoPathFound
    );
}

#[test]
fn exhausted_frontier_wins_over_budget_reporting() {
    // The unreachable verdict needs no expansions at all here: no initial
    // leg is legal, so the frontier starts empty and the zero budget is
    // never consulted.
    let grid: Grid = "1234".parse().unwrap();
    let err = SearchBuilder::new(&grid, RunLimits::ultra())
        .with_step_budget(0)
        .build()
        .run()
        .unwrap_err();
    assert_eq!(err, Error::NoPathFound);
}

#[test]
fn tight_budget_times_out() {
    let grid: Grid = CITY_13.parse().unwrap();
    let err = SearchBuilder::new(&grid, RunLimits::crucible())
        .with_step_budget(5)
        .build()
        .run()
        .unwrap_err();
    assert_eq!(err, Error::Timeout { budget: 5 });
}

#[test]
fn budget_zero_still_solves_the_trivial_grid() {
    let grid: Grid = "3".parse().unwrap();
    let outcome = SearchBuilder::new(&grid, RunLimits::crucible())
        .with_step_budget(0)
        .build()
        .run()
        .unwrap();
    assert_eq!(outcome.cost, 0);
}

#[test]
fn generous_budget_does_not_change_the_answer() {
    let grid: Grid = CITY_13.parse().unwrap();
    let outcome = SearchBuilder::new(&grid, RunLimits::crucible())
        .with_step_budget(1_000_000)
        .build()
        .run()
        .unwrap();
    assert_eq!(outcome.cost, 102);
    assert!(outcome.expanded <= 13 * 13 * 2);
}

#[test]
fn heuristic_toggle_changes_work_not_answers() {
    let grid: Grid = CITY_13.parse().unwrap();
    for limits in [RunLimits::crucible(), RunLimits::ultra()] {
        let with = SearchBuilder::new(&grid, limits).build().run().unwrap();
        let without = SearchBuilder::new(&grid, limits)
            .with_heuristic(false)
            .build()
            .run()
            .unwrap();
        assert_eq!(with.cost, without.cost);
        assert!(with.expanded <= without.expanded);
    }
}

#[test]
fn zero_cost_cells_are_ordinary_cells() {
    let grid = Grid::from_rows(vec![vec![0, 3, 0], vec![0, 3, 0], vec![0, 3, 0]]).unwrap();
    let outcome = Search::new(&grid, RunLimits::crucible()).run().unwrap();
    // Down the free column, across the bottom: only the single 3 is paid.
    assert_eq!(outcome.cost, 3);
}

#[test]
fn solve_pair_propagates_failures_independently() {
    let grid: Grid = "19\n11".parse().unwrap();
    let (crucible, ultra) = solve_pair(&grid, RunLimits::crucible(), RunLimits::ultra());
    assert_eq!(crucible.unwrap().cost, 2);
    assert_eq!(ultra.unwrap_err(), Error::NoPathFound);
}

#[test]
fn budgeted_runs_are_deterministic_too() {
    let grid: Grid = CITY_13.parse().unwrap();
    let run = || {
        SearchBuilder::new(&grid, RunLimits::ultra())
            .with_step_budget(50)
            .build()
            .run()
    };
    assert_eq!(run(), run());
}
