//! Basic DiGraph usage example
//!
//! Run with `RUST_LOG=dwgraph=debug cargo run --example basic_usage` to see the
//! graph's own events.

use anyhow::Result;
use dwgraph::DiGraph;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("DiGraph Basic Usage Example");
    println!("===========================");

    let mut graph: DiGraph<&str> = DiGraph::new();
    for v in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(v);
    }
    graph.add_edge("A", "B")?;
    graph.add_edge("B", "C")?;
    graph.add_edge("D", "C")?;
    graph.add_edge("D", "B")?;
    graph.add_edge("D", "E")?;
    graph.add_edge("C", "F")?;
    graph.add_edge("E", "D")?;
    graph.add_weighted_edge("D", "B", 3)?;

    println!("Vertices: {}", graph.vertex_count());
    println!("Edges:    {}", graph.edge_count());
    for (from, to, weight) in graph.edges() {
        println!("  {from} -> {to} (weight {weight})");
    }

    println!("\nQueries:");
    println!("  shortest_path(A, F) = {:?}", graph.shortest_path("A", "F"));
    println!("  shortest_path(F, A) = {:?}", graph.shortest_path("F", "A"));
    println!("  bfs(D)              = {:?}", graph.bfs("D").collect::<Vec<_>>());
    println!("  has_loop(A)         = {}", graph.has_loop("A")?);
    println!("  has_loop(D)         = {}", graph.has_loop("D")?);
    println!("  has_island(A)       = {}", graph.has_island("A")?);
    println!("  is_loop()           = {}", graph.is_loop());

    graph.add_vertex("G");
    println!("\nAfter adding an unconnected G:");
    println!("  has_island(A)       = {}", graph.has_island("A")?);

    graph.remove_vertex("D");
    println!("\nAfter removing D:");
    println!("  edges               = {}", graph.edge_count());
    println!("  is_loop()           = {}", graph.is_loop());

    if let Err(err) = graph.add_edge("A", "Z") {
        println!("  add_edge(A, Z)      -> {err}");
    }

    let stats = graph.statistics();
    println!("\nStatistics: {stats:?}");

    Ok(())
}
