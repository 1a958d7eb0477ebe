//! End-to-end scenarios across the engines.

use algolab_common::{MovieRecord, OrderRecord, SortAttribute, VertexId};
use algolab_core::algorithms::{
    FractionalItem, KnapsackItem, TakeOutcome, allocate, apply_critical_bonus, dijkstra,
    fill_fractional, find_nearest, greedy_coloring, knapsack01, path_weight, reconstruct_path,
};
use algolab_core::sort::{merge_sort, quick_sort_movies};
use algolab_core::{ConflictGraph, Graph};

fn vs(ids: &[u32]) -> Vec<VertexId> {
    ids.iter().copied().map(VertexId::new).collect()
}

/// Nine-junction road network with travel times in minutes.
fn city() -> Graph {
    let roads = [
        (0, 1, 4.0),
        (0, 2, 2.0),
        (1, 2, 1.0),
        (1, 3, 5.0),
        (2, 3, 8.0),
        (2, 4, 10.0),
        (3, 4, 2.0),
        (3, 5, 6.0),
        (4, 6, 3.0),
        (5, 6, 1.0),
        (5, 7, 2.0),
        (6, 8, 7.0),
        (7, 8, 3.0),
    ];
    Graph::from_undirected(
        9,
        roads
            .into_iter()
            .map(|(u, v, w)| (VertexId::new(u), VertexId::new(v), w)),
    )
    .unwrap()
}

#[test]
fn merge_sort_keeps_tags_of_equal_keys_in_order() {
    let mut orders: Vec<OrderRecord> = [(5, "A"), (3, "B"), (3, "C"), (1, "D"), (2, "E")]
        .into_iter()
        .map(|(k, tag)| OrderRecord::new(k, tag))
        .collect();
    merge_sort(&mut orders, OrderRecord::key);

    let tags: Vec<_> = orders.iter().map(|o| o.row.as_str()).collect();
    assert_eq!(tags, ["D", "E", "B", "C", "A"]);
}

#[test]
fn quicksort_by_rating_and_year() {
    let mut movies = vec![
        MovieRecord::new("The Shawshank Redemption", 9.3, 1994, 2_343_110),
        MovieRecord::new("The Godfather", 9.2, 1972, 1_620_367),
        MovieRecord::new("The Dark Knight", 9.0, 2008, 2_303_232),
    ];
    quick_sort_movies(&mut movies, SortAttribute::Rating);
    let ratings: Vec<_> = movies.iter().map(|m| m.rating).collect();
    assert_eq!(ratings, [9.3, 9.2, 9.0]);

    quick_sort_movies(&mut movies, SortAttribute::Year);
    let years: Vec<_> = movies.iter().map(|m| m.year).collect();
    assert_eq!(years, [2008, 1994, 1972]);
}

#[test]
fn traffic_update_reroutes_and_recovers() {
    let mut g = city();
    let source = VertexId::new(0);
    let hospitals = vs(&[6, 8]);

    let route = |g: &Graph| {
        let res = dijkstra(g, source).unwrap();
        let nearest = find_nearest(&res, &hospitals).unwrap();
        let path = reconstruct_path(&res, source, nearest);
        (nearest, res.dist[nearest.index()], path)
    };

    let (nearest, dist, path) = route(&g);
    assert_eq!(nearest, VertexId::new(6));
    assert_eq!(dist, 13.0);
    assert_eq!(path, vs(&[0, 2, 1, 3, 4, 6]));
    assert_eq!(path_weight(&g, &path), Some(13.0));

    assert!(g.update_edge(VertexId::new(3), VertexId::new(4), 40.0).unwrap());
    assert!(g.update_edge(VertexId::new(4), VertexId::new(3), 40.0).unwrap());
    let (nearest, dist, path) = route(&g);
    assert_eq!(nearest, VertexId::new(6));
    assert_eq!(dist, 15.0);
    assert_eq!(path, vs(&[0, 2, 4, 6]));

    g.update_edge(VertexId::new(3), VertexId::new(4), 2.0).unwrap();
    g.update_edge(VertexId::new(4), VertexId::new(3), 2.0).unwrap();
    let (_, dist, path) = route(&g);
    assert_eq!(dist, 13.0);
    assert_eq!(path, vs(&[0, 2, 1, 3, 4, 6]));
}

#[test]
fn knapsack_picks_first_two_items() {
    let items: Vec<_> = [(2, 3), (3, 4), (4, 5), (5, 6)]
        .into_iter()
        .map(|(w, u)| KnapsackItem::new(w, u).unwrap())
        .collect();
    let sol = knapsack01(&items, 5).unwrap();
    assert_eq!(sol.max_utility, 7);
    assert_eq!(sol.selected, [0, 1]);
}

#[test]
fn relief_trucks_prefer_critical_supplies() {
    let items = vec![
        KnapsackItem::new(6, 40).unwrap().named("generator"),
        KnapsackItem::new(3, 10).unwrap().named("medicine").with_critical(true),
        KnapsackItem::new(3, 12).unwrap().named("food").with_critical(true),
        KnapsackItem::new(2, 15).unwrap().named("tents"),
    ];
    let boosted = apply_critical_bonus(&items, 50);
    let rounds = allocate(&boosted, &[6, 8]).unwrap();

    assert_eq!(rounds[0].selected, [1, 2]);
    assert_eq!(rounds[0].max_utility, 122);
    assert_eq!(rounds[1].selected, [0, 3]);
    assert_eq!(rounds[1].total_weight, 8);
}

#[test]
fn fractional_boat_load() {
    let items = [
        FractionalItem::new("A", 10.0, 60.0, true).unwrap(),
        FractionalItem::new("B", 20.0, 100.0, true).unwrap(),
        FractionalItem::new("C", 30.0, 120.0, true).unwrap(),
    ];
    let plan = fill_fractional(&items, 50.0);
    assert!((plan.total_value - 240.0).abs() < 1e-9);

    let taken: Vec<_> = plan
        .takes
        .iter()
        .map(|t| match t.outcome {
            TakeOutcome::Taken { weight, .. } => (t.name.as_str(), weight),
            TakeOutcome::Skipped { .. } => (t.name.as_str(), 0.0),
        })
        .collect();
    assert_eq!(taken, [("A", 10.0), ("B", 20.0), ("C", 20.0)]);
}

#[test]
fn exam_slots_use_three_colors() {
    let conflicts = [(0, 1), (1, 2), (2, 3), (3, 4), (3, 5), (0, 5)];
    let g = ConflictGraph::from_conflicts(
        6,
        conflicts
            .into_iter()
            .map(|(u, v)| (VertexId::new(u), VertexId::new(v))),
    )
    .unwrap();
    let coloring = greedy_coloring(&g);
    assert_eq!(coloring.assignment, [0, 1, 0, 1, 0, 2]);
    assert_eq!(coloring.slots, 3);
}
