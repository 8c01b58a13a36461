//! End-to-end scenarios exercising the public API across every concrete
//! collection type, rather than unit tests local to one module.

use interval_collections::observer::CollectionEvent;
use interval_collections::{
    BinaryIntervalSearch, ContainmentFreeIntervalCollection, DynamicContainmentList, Interval,
    IntervalCollection, IntervalTree, LayeredContainmentList, NestedContainmentList,
    SortedIntervalSet,
};
use rstest::{fixture, rstest};

use std::cell::RefCell;
use std::rc::Rc;

#[fixture]
fn scenario_1_data() -> Vec<Interval<i32>> {
    vec![Interval::closed(1, 3), Interval::open(5, 7)]
}

fn assert_scenario_1(index: &dyn IntervalCollection<i32>) {
    assert_eq!(index.find_overlaps(&Interval::point(0)).count(), 0);
    assert_eq!(index.count_overlaps(&Interval::point(0)), 0);

    assert_eq!(index.find_overlaps(&Interval::point(1)).collect::<Vec<_>>(), vec![Interval::closed(1, 3)]);
    assert_eq!(index.find_overlaps(&Interval::point(3)).collect::<Vec<_>>(), vec![Interval::closed(1, 3)]);
    assert_eq!(index.find_overlaps(&Interval::point(4)).count(), 0);

    assert_eq!(index.find_overlaps(&Interval::point(5)).count(), 0);
    assert_eq!(index.find_overlaps(&Interval::point(6)).collect::<Vec<_>>(), vec![Interval::open(5, 7)]);
    assert_eq!(index.find_overlaps(&Interval::point(7)).count(), 0);
}

#[rstest]
fn scenario_1_stabbing_example_layered(scenario_1_data: Vec<Interval<i32>>) {
    assert_scenario_1(&LayeredContainmentList::build(scenario_1_data));
}

#[rstest]
fn scenario_1_stabbing_example_nested(scenario_1_data: Vec<Interval<i32>>) {
    assert_scenario_1(&NestedContainmentList::build(scenario_1_data));
}

#[rstest]
fn scenario_1_stabbing_example_binary_search(scenario_1_data: Vec<Interval<i32>>) {
    assert_scenario_1(&BinaryIntervalSearch::build(scenario_1_data));
}

#[rstest]
fn scenario_1_stabbing_example_interval_tree(scenario_1_data: Vec<Interval<i32>>) {
    assert_scenario_1(&IntervalTree::build(scenario_1_data));
}

#[rstest]
fn scenario_1_stabbing_example_sorted_set(scenario_1_data: Vec<Interval<i32>>) {
    let mut set = SortedIntervalSet::disjoint();
    for iv in scenario_1_data {
        assert!(set.add(iv));
    }
    assert_scenario_1(&set);
}

#[rstest]
fn scenario_2_enumerate_backwards_from_point(scenario_1_data: Vec<Interval<i32>>) {
    let mut set = SortedIntervalSet::disjoint();
    for iv in scenario_1_data {
        assert!(set.add(iv));
    }

    let at_4: Vec<_> = set.enumerate_backwards_from(&4, true).collect();
    assert_eq!(at_4, vec![Interval::closed(1, 3)]);

    let at_6: Vec<_> = set.enumerate_backwards_from(&6, true).collect();
    assert_eq!(at_6, vec![Interval::open(5, 7), Interval::closed(1, 3)]);

    let at_0: Vec<_> = set.enumerate_backwards_from(&0, true).collect();
    assert!(at_0.is_empty());
}

#[test]
fn scenario_3_ncl_containment_example() {
    let a = Interval::closed(1, 5);
    let b = Interval::closed(2, 4);
    let c = Interval::closed(6, 10);
    let d = Interval::closed(7, 9);

    let ncl = NestedContainmentList::build(vec![a, b, c, d]);
    assert_eq!(ncl.len(), 4);

    let found: Vec<_> = ncl.find_overlaps(&Interval::closed(3, 8)).collect();
    assert_eq!(found, vec![a, b, c, d]);
}

#[test]
fn scenario_4_lcl_two_layer_example() {
    let lcl = LayeredContainmentList::build(vec![
        Interval::closed(1, 10),
        Interval::closed(3, 5),
        Interval::closed(6, 9),
    ]);
    assert_eq!(lcl.count_overlaps(&Interval::closed(4, 7)), 3);
}

#[test]
fn scenario_5_gaps_with_meeting_endpoints() {
    let mut set = SortedIntervalSet::disjoint();
    assert!(set.add(Interval::right_open(0, 1)));
    assert!(set.add(Interval::left_open(1, 2)));

    let gaps: Vec<_> = set.gaps().collect();
    assert_eq!(gaps, vec![Interval::point(1)]);
}

#[test]
fn scenario_6_add_rejection_into_overlap_free_collection() {
    let mut set = SortedIntervalSet::disjoint();
    let added_events = Rc::new(RefCell::new(0usize));
    let added_events2 = added_events.clone();
    set.subscribe(Box::new(move |event| {
        if matches!(event, CollectionEvent::ItemsAdded(_)) {
            *added_events2.borrow_mut() += 1;
        }
    }));

    assert!(set.add(Interval::closed(0, 3)));
    assert!(!set.add(Interval::closed(2, 4)));
    assert_eq!(set.len(), 1);
    assert_eq!(*added_events.borrow(), 1);
}

#[test]
fn scenario_7_maximum_depth() {
    let data = vec![
        Interval::closed(0, 30),
        Interval::closed(1, 29),
        Interval::closed(2, 20),
        Interval::closed(3, 19),
        Interval::closed(9, 18),
    ];

    let mut dcl_allowing_containments = DynamicContainmentList::new(true);
    for iv in data.clone() {
        dcl_allowing_containments.add(iv);
    }
    let (depth, _) = dcl_allowing_containments.maximum_depth();
    assert_eq!(depth, 5);

    let mut overlap_free = SortedIntervalSet::disjoint();
    for iv in data {
        overlap_free.add(iv);
    }
    assert_eq!(overlap_free.len(), 1);
    let (depth, _) = overlap_free.maximum_depth();
    assert_eq!(depth, 1);
}
