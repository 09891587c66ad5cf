use super::*;

fn clone_with_parent(parent: Option<usize>) -> Subclone {
    Subclone {
        points: vec![ControlPoint::new(0.0, 60.0, 40.0)],
        parent,
        ..Subclone::default()
    }
}

#[test]
fn nest_levels_follow_parent_depth() {
    let levels = nest_levels(&[None, Some(0), Some(1), Some(0), None]).unwrap();
    assert_eq!(levels, vec![0, 1, 2, 1, 0]);
}

#[test]
fn nest_levels_accept_parents_defined_later() {
    let levels = nest_levels(&[Some(1), None]).unwrap();
    assert_eq!(levels, vec![1, 0]);
}

#[test]
fn out_of_range_parent_is_rejected() {
    let err = nest_levels(&[None, Some(5)]).unwrap_err();
    assert!(err.to_string().contains("references parent 5"));
}

#[test]
fn cycles_and_self_parents_are_rejected() {
    assert!(nest_levels(&[Some(1), Some(0)]).is_err());
    assert!(nest_levels(&[None, Some(1)]).is_err());
    assert!(nest_levels(&[None, Some(2), Some(3), Some(1)]).is_err());
}

#[test]
fn forest_rejects_bad_timepoints() {
    let clones = vec![clone_with_parent(None)];
    assert!(LayoutForest::new(clones.clone(), vec![]).is_err());
    assert!(LayoutForest::new(clones.clone(), vec![0.0, 0.0]).is_err());
    assert!(LayoutForest::new(clones.clone(), vec![3.0, 1.0]).is_err());
    assert!(LayoutForest::new(clones, vec![0.0, f64::NAN]).is_err());
}

#[test]
fn forest_rejects_unordered_or_non_finite_points() {
    let mut c = clone_with_parent(None);
    c.points = vec![
        ControlPoint::new(10.0, 60.0, 40.0),
        ControlPoint::new(5.0, 60.0, 40.0),
    ];
    assert!(LayoutForest::new(vec![c], vec![5.0, 10.0]).is_err());

    let mut c = clone_with_parent(None);
    c.points = vec![ControlPoint::new(0.0, f64::INFINITY, 40.0)];
    assert!(LayoutForest::new(vec![c], vec![0.0]).is_err());
}

#[test]
fn children_of_lists_in_index_order() {
    let forest = LayoutForest::new(
        vec![
            clone_with_parent(None),
            clone_with_parent(Some(0)),
            clone_with_parent(None),
            clone_with_parent(Some(0)),
        ],
        vec![0.0, 1.0],
    )
    .unwrap();
    assert_eq!(forest.children_of(None).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(forest.children_of(Some(0)).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(forest.children_of(Some(1)).count(), 0);
    assert_eq!(forest.time_span(), (0.0, 1.0));
}

#[test]
fn forest_derives_nest_levels_from_parent_links() {
    let mut root = clone_with_parent(None);
    root.nest_level = 3;
    let child = clone_with_parent(Some(0));
    let mut grandchild = clone_with_parent(Some(1));
    grandchild.nest_level = 7;

    let forest = LayoutForest::new(vec![root, child, grandchild], vec![0.0, 1.0]).unwrap();
    let levels = forest
        .clones()
        .iter()
        .map(|c| c.nest_level)
        .collect::<Vec<_>>();
    assert_eq!(levels, vec![0, 1, 2]);
}
