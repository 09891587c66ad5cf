use super::*;

fn sample() -> FishData {
    FishData::new(
        vec![0.0, 30.0, 75.0, 150.0],
        vec![
            vec![100.0, 45.0, 0.0, 0.0],
            vec![98.0, 0.0, 0.0, 0.0],
            vec![2.0, 44.0, 0.0, 0.0],
        ],
        vec![None, Some(0), Some(0)],
    )
    .unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn roots_are_centered_and_children_fill_their_parent() {
    let data = sample();
    let t0 = bands_at(&data, 0, LayoutOpts::default());
    assert_eq!(t0[0], (0.0, 100.0));
    assert_eq!(t0[1], (0.0, 98.0));
    assert_eq!(t0[2], (98.0, 100.0));

    let t1 = bands_at(&data, 1, LayoutOpts::default());
    assert!(close(t1[0].0, 27.5) && close(t1[0].1, 72.5));
    // One unit of free space split into three gaps.
    assert!(close(t1[2].0, 27.5 + 2.0 / 3.0));
    assert!(close(t1[2].1, 27.5 + 2.0 / 3.0 + 44.0));
}

#[test]
fn control_points_span_presence_plus_taper() {
    let forest = layout_clones(&sample(), LayoutOpts::default()).unwrap();
    assert_eq!(forest.len(), 3);

    let root = &forest.clones()[0];
    assert_eq!(root.points.len(), 3);
    assert_eq!(root.points[2].x, 75.0);
    assert!(close(root.points[2].top, root.points[2].bottom));

    assert_eq!(forest.clones()[1].points.len(), 2);
    assert_eq!(forest.clones()[1].nest_level, 1);
    assert_eq!(forest.clones()[2].parent, Some(0));
}

#[test]
fn clone_absent_everywhere_gets_no_points() {
    let data = FishData::new(
        vec![0.0, 10.0],
        vec![vec![50.0, 60.0], vec![0.0, 0.0]],
        vec![None, Some(0)],
    )
    .unwrap();
    let forest = layout_clones(&data, LayoutOpts::default()).unwrap();
    assert!(forest.clones()[1].points.is_empty());
    // Still present at the last timepoint, so no taper point is added.
    assert_eq!(forest.clones()[0].points.len(), 2);
}

#[test]
fn independent_roots_can_be_spread_apart() {
    let data = FishData::new(vec![0.0], vec![vec![30.0], vec![20.0]], vec![None, None]).unwrap();

    let stacked = bands_at(&data, 0, LayoutOpts::default());
    assert_eq!(stacked, vec![(25.0, 55.0), (55.0, 75.0)]);

    let opts = LayoutOpts {
        separate_independent_clones: true,
    };
    let spread = bands_at(&data, 0, opts);
    let gap = 50.0 / 3.0;
    assert!(close(spread[0].0, gap));
    assert!(close(spread[1].0, 30.0 + 2.0 * gap));
    assert!(close(spread[1].1, 100.0 - gap));
}
