use dwgraph::DiGraph;
use petgraph::algo::{connected_components, dijkstra, has_path_connecting, is_cyclic_directed, kosaraju_scc};
use petgraph::graph::{DiGraph as PetGraph, NodeIndex};
use petgraph::visit::Bfs;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Case {
    n: u8,
    edges: Vec<(u8, u8, i32)>,
}

fn arb_case() -> impl Strategy<Value = Case> {
    (1u8..9).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, -5i32..5), 0..24).prop_map(move |edges| Case { n, edges })
    })
}

fn build(case: &Case) -> (DiGraph<u8>, PetGraph<u8, i32>) {
    let mut ours: DiGraph<u8> = (0..case.n).collect();
    let mut theirs = PetGraph::new();
    for v in 0..case.n {
        theirs.add_node(v);
    }
    for &(u, v, w) in &case.edges {
        ours.add_weighted_edge(&u, &v, w).unwrap();
        theirs.add_edge(NodeIndex::new(u.into()), NodeIndex::new(v.into()), w);
    }
    (ours, theirs)
}

fn reachable_has_cycle(g: &PetGraph<u8, i32>, start: u8) -> bool {
    let mut sub = PetGraph::<u8, ()>::new();
    let mut map = vec![None; g.node_count()];
    let mut bfs = Bfs::new(g, NodeIndex::new(start.into()));
    while let Some(nx) = bfs.next(g) {
        map[nx.index()] = Some(sub.add_node(g[nx]));
    }
    for e in g.raw_edges() {
        if let (Some(a), Some(b)) = (map[e.source().index()], map[e.target().index()]) {
            sub.add_edge(a, b, ());
        }
    }
    is_cyclic_directed(&sub)
}

proptest! {
    #[test]
    fn counts_match_reference(case in arb_case()) {
        let (ours, theirs) = build(&case);
        prop_assert_eq!(ours.vertex_count(), theirs.node_count());
        prop_assert_eq!(ours.edge_count(), theirs.edge_count());
        let degree_sum: usize = (0..case.n).filter_map(|v| ours.out_degree(&v)).sum();
        prop_assert_eq!(ours.edge_count(), degree_sum);
    }

    #[test]
    fn shortest_paths_match_reference(case in arb_case()) {
        let (ours, theirs) = build(&case);
        for a in 0..case.n {
            let distances = dijkstra(&theirs, NodeIndex::new(a.into()), None, |_| 1usize);
            for b in 0..case.n {
                let path = ours.shortest_path(&a, &b);
                let reachable = has_path_connecting(&theirs, NodeIndex::new(a.into()), NodeIndex::new(b.into()), None);
                prop_assert_eq!(path.is_some(), reachable);

                if let Some(path) = path {
                    let expected = distances.get(&NodeIndex::new(b.into())).copied().unwrap_or(0);
                    prop_assert_eq!(path.len(), expected);
                    let mut prev = a;
                    for step in path {
                        prop_assert!(ours.contains_edge(&prev, &step));
                        prev = step;
                    }
                    prop_assert_eq!(prev, b);
                }
            }
        }
    }

    #[test]
    fn loop_checks_match_reference(case in arb_case()) {
        let (ours, theirs) = build(&case);
        for a in 0..case.n {
            prop_assert_eq!(ours.has_loop(&a).unwrap(), reachable_has_cycle(&theirs, a));
        }
        let mutual_pair = kosaraju_scc(&theirs).iter().any(|scc| scc.len() >= 2);
        prop_assert_eq!(ours.is_loop(), mutual_pair);
    }

    #[test]
    fn island_check_matches_weak_components(case in arb_case()) {
        let (ours, theirs) = build(&case);
        let split = connected_components(&theirs) > 1;
        for a in 0..case.n {
            prop_assert_eq!(ours.has_island(&a).unwrap(), split);
        }
    }

    #[test]
    fn remove_vertex_strips_incident_edges(case in arb_case(), pick in any::<u8>()) {
        let (mut ours, _) = build(&case);
        let x = pick % case.n;
        let untouched = case.edges.iter().filter(|&&(u, v, _)| u != x && v != x).count();

        prop_assert!(ours.remove_vertex(&x));
        prop_assert!(!ours.contains_vertex(&x));
        prop_assert_eq!(ours.vertex_count(), usize::from(case.n) - 1);
        prop_assert_eq!(ours.edge_count(), untouched);
        for y in 0..case.n {
            prop_assert!(!ours.contains_edge(&x, &y));
            prop_assert!(!ours.contains_edge(&y, &x));
            prop_assert!(ours.parents(&y).all(|&p| p != x));
        }
    }

    #[test]
    fn remove_edge_drops_exactly_one(case in arb_case(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!case.edges.is_empty());
        let (mut ours, _) = build(&case);
        let (u, v, _) = case.edges[pick.index(case.edges.len())];
        let before = ours.edge_count();
        let copies = case.edges.iter().filter(|&&(a, b, _)| a == u && b == v).count();

        prop_assert!(ours.remove_edge(&u, &v));
        prop_assert_eq!(ours.edge_count(), before - 1);
        prop_assert_eq!(ours.contains_edge(&u, &v), copies > 1);
        prop_assert_eq!(ours.parents(&v).any(|&p| p == u), copies > 1);
    }
}
