//! Benchmarks a dependence graph by slicing from every vertex in turn and
//! aggregating the resulting slice sizes (§4.7).

use std::collections::HashMap;
use tracing::info;

/// Aggregate statistics over "slice from every vertex as its own criterion".
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub nodes: usize,
    pub edges: usize,
    /// Count of distinct (by visited-set bitmap) slices produced.
    pub unique_slices: usize,
    /// Mean slice size, weighted once per distinct slice.
    pub avg_size_uw: f64,
    /// Mean slice size, weighted once per criterion that produced it.
    pub avg_size_w: f64,
}

/// Slices `adj` from every vertex index in turn and reports size statistics.
/// Structural only: the vertex payload doesn't matter, only reachability, so
/// this serves both the CDG and the MDG benchmarks.
pub fn benchmark(adj: &[Vec<usize>]) -> BenchmarkReport {
    let nodes = adj.len();
    let edges: usize = adj.iter().map(Vec::len).sum();

    let mut size_by_slices: HashMap<usize, Vec<Vec<bool>>> = HashMap::new();
    let mut size_by_crits: HashMap<usize, usize> = HashMap::new();

    for start in 0..nodes {
        let visited = slice_engine::reachable(adj, &[start]);
        let size = visited.iter().filter(|v| **v).count();

        *size_by_crits.entry(size).or_insert(0) += 1;
        let bucket = size_by_slices.entry(size).or_default();
        if !bucket.contains(&visited) {
            info!(size, "new unique slice size encountered");
            bucket.push(visited);
        }
    }

    let mut unique_slices = 0usize;
    let mut size_by_unique_sum = 0f64;
    let mut size_by_crits_sum = 0f64;
    for (size, bucket) in &size_by_slices {
        unique_slices += bucket.len();
        size_by_unique_sum += (*size * bucket.len()) as f64;
        size_by_crits_sum += (*size * size_by_crits[size]) as f64;
    }

    let avg_size_uw = if unique_slices == 0 { 0.0 } else { size_by_unique_sum / unique_slices as f64 };
    let avg_size_w = if nodes == 0 { 0.0 } else { size_by_crits_sum / nodes as f64 };

    let report = BenchmarkReport {
        nodes,
        edges,
        unique_slices,
        avg_size_uw,
        avg_size_w,
    };
    info!(?report, "benchmark complete");
    report
}
