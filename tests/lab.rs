use std::collections::HashSet;

use num_bigint::BigUint;
use test_log::test;

use bdd_puzzle::constraint::Constraint;
use bdd_puzzle::puzzle::{Puzzle, M, N};
use bdd_puzzle::report::{verify, write_report, Mismatch};
use bdd_puzzle::solution::Solution;

/// Transposes `[property][object]` rows into a `[object][property]` solution.
fn by_property(rows: [[usize; N]; M]) -> Solution {
    Solution::new((0..N).map(|object| (0..M).map(|property| rows[property][object]).collect()).collect())
}

fn expected() -> HashSet<Solution> {
    HashSet::from([
        by_property([
            [1, 6, 7, 4, 0, 8, 3, 2, 5],
            [3, 2, 8, 6, 7, 1, 4, 0, 5],
            [8, 5, 2, 6, 7, 4, 0, 3, 1],
            [1, 2, 5, 7, 8, 6, 4, 0, 3],
        ]),
        by_property([
            [1, 6, 7, 4, 0, 8, 3, 2, 5],
            [3, 2, 8, 6, 7, 0, 4, 1, 5],
            [8, 5, 2, 6, 7, 4, 0, 3, 1],
            [1, 2, 5, 7, 8, 6, 4, 0, 3],
        ]),
    ])
}

/// Checks a record directly on decoded values.
fn holds(puzzle: &Puzzle, solution: &Solution, constraint: &Constraint) -> bool {
    let objects = 0..puzzle.shape.objects();
    match *constraint {
        Constraint::Assign {
            object,
            property,
            value,
        } => solution.value(object, property) == value,
        Constraint::Implies {
            if_property,
            if_value,
            then_property,
            then_value,
        } => objects
            .into_iter()
            .all(|i| solution.value(i, if_property) != if_value || solution.value(i, then_property) == then_value),
        Constraint::Neighbor {
            direction,
            if_property,
            if_value,
            then_property,
            then_value,
        } => objects.into_iter().all(|i| {
            solution.value(i, if_property) != if_value
                || puzzle
                    .grid
                    .neighbor(i, direction)
                    .is_some_and(|n| solution.value(n, then_property) == then_value)
        }),
        Constraint::AnyNeighbor {
            if_property,
            if_value,
            then_property,
            then_value,
        } => objects.into_iter().all(|i| {
            solution.value(i, if_property) != if_value
                || puzzle
                    .grid
                    .neighbors(i)
                    .into_iter()
                    .any(|n| solution.value(n, then_property) == then_value)
        }),
    }
}

#[test]
fn test_lab_is_satisfiable() {
    let solver = Puzzle::lab().solver();
    assert!(solver.is_satisfiable());
    assert_eq!(solver.count(), 2.0);
    assert_eq!(solver.exact_count(), BigUint::from(2u32));
}

#[test]
fn test_lab_solutions() {
    let puzzle = Puzzle::lab();
    let solver = puzzle.solver();
    let solutions: Vec<_> = solver.solutions().collect();
    assert_eq!(solutions.len(), 2);

    let found: HashSet<_> = solutions.iter().cloned().collect();
    assert_eq!(found, expected());

    for solution in &solutions {
        assert!(solution.check(&solver));

        for property in 0..M {
            let values: HashSet<_> = (0..N).map(|object| solution.value(object, property)).collect();
            assert_eq!(values.len(), N, "property {} is not a permutation", property);
            assert!(values.iter().all(|&v| v < N));
        }

        for constraint in &puzzle.constraints {
            assert!(holds(&puzzle, solution, constraint), "{} violated", constraint);
        }
    }
}

#[test]
fn test_lab_report() {
    let solver = Puzzle::lab().solver();
    let mut buf = Vec::new();
    let printed = write_report(&mut buf, &solver).unwrap();
    assert_eq!(printed, 2);

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<_> = text.lines().collect();
    // Count line, then per solution N object lines and a blank line
    assert_eq!(lines.len(), 1 + 2 * (N + 1));
    assert_eq!(lines[0], "2");
    assert_eq!(lines[1 + N], "");
    assert_eq!(lines[2 + 2 * N], "");
    // Object 0 is the same in both solutions
    assert_eq!(lines[1], "1 3 8 1");
    assert_eq!(lines[2 + N], "1 3 8 1");

    assert_eq!(verify(&solver, printed), Ok(()));
    assert!(matches!(verify(&solver, printed - 1), Err(Mismatch::RegionCount { .. })));
}

#[test]
fn test_lab_report_is_deterministic() {
    let render = || {
        let solver = Puzzle::lab().solver();
        let mut buf = Vec::new();
        write_report(&mut buf, &solver).unwrap();
        buf
    };
    assert_eq!(render(), render());
}
