//! Phases 2 and 3: edge normalization and crossing minimization

use tracing::debug;

use crate::solve::WorkGraph;

/// Rebuild the edge lists so that every surviving edge spans exactly one
/// rank, inserting a zero-footprint virtual node per intermediate rank for
/// edges that span more. Edges that are flat or point backwards (only
/// possible around parked cycle nodes) are dropped from the ordering graph;
/// they influence neither ordering nor placement.
///
/// Returns the extended graph plus the initial per-rank buckets: rank index
/// → node indices in insertion order.
pub(crate) fn normalize(work: WorkGraph, ranks: Vec<usize>) -> (WorkGraph, Vec<Vec<usize>>) {
    let WorkGraph {
        real,
        adj,
        rev: _,
        mut ids,
        mut widths,
        mut heights,
    } = work;

    let mut ranks = ranks;
    let mut new_adj: Vec<Vec<usize>> = vec![Vec::new(); real];
    let mut new_rev: Vec<Vec<usize>> = vec![Vec::new(); real];
    let mut virtual_count = 0usize;
    let mut dropped = 0usize;

    for u in 0..real {
        for &v in &adj[u] {
            if ranks[v] <= ranks[u] {
                dropped += 1;
                continue;
            }
            if ranks[v] == ranks[u] + 1 {
                new_adj[u].push(v);
                new_rev[v].push(u);
                continue;
            }
            // Chain of virtual nodes, one per rank the edge passes through.
            let mut prev = u;
            for rank in (ranks[u] + 1)..ranks[v] {
                let node = ids.len();
                ids.push(format!("__virtual-{}", virtual_count));
                virtual_count += 1;
                widths.push(0.0);
                heights.push(0.0);
                ranks.push(rank);
                new_adj.push(Vec::new());
                new_rev.push(Vec::new());
                new_adj[prev].push(node);
                new_rev[node].push(prev);
                prev = node;
            }
            new_adj[prev].push(v);
            new_rev[v].push(prev);
        }
    }

    if virtual_count > 0 || dropped > 0 {
        debug!(
            "Normalized edges: {} virtual nodes added, {} non-forward edges dropped",
            virtual_count, dropped
        );
    }

    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); max_rank + 1];
    for (node, &rank) in ranks.iter().enumerate() {
        buckets[rank].push(node);
    }

    let work = WorkGraph {
        real,
        adj: new_adj,
        rev: new_rev,
        ids,
        widths,
        heights,
    };
    (work, buckets)
}

/// Reduce edge crossings by iterated barycenter sweeps: a forward pass
/// ordering each rank by the mean position of its predecessors, then a
/// backward pass using successors. The best ordering seen is kept; sweeps
/// stop when a full pass brings no improvement or the budget runs out.
///
/// Returns the crossing count of the ordering left in `buckets`.
pub(crate) fn minimize_crossings(
    buckets: &mut Vec<Vec<usize>>,
    work: &WorkGraph,
    max_sweeps: usize,
) -> usize {
    if buckets.len() < 2 {
        return 0;
    }

    let mut best = buckets.clone();
    let mut best_crossings = count_crossings(buckets, work);

    for sweep in 0..max_sweeps {
        if best_crossings == 0 {
            break;
        }

        for rank in 1..buckets.len() {
            reorder_by_barycenter(buckets, rank, work, true);
        }
        for rank in (0..buckets.len() - 1).rev() {
            reorder_by_barycenter(buckets, rank, work, false);
        }

        let crossings = count_crossings(buckets, work);
        if crossings < best_crossings {
            best_crossings = crossings;
            best.clone_from(buckets);
        } else {
            debug!("Barycenter sweep {} brought no improvement, stopping", sweep);
            break;
        }
    }

    *buckets = best;
    best_crossings
}

/// Sort one rank by the barycenter of its neighbors in the adjacent rank.
/// Nodes without neighbors keep their current position as the key; ties
/// break on node id so the result never depends on sort internals.
fn reorder_by_barycenter(buckets: &mut [Vec<usize>], rank: usize, work: &WorkGraph, downward: bool) {
    let fixed = if downward { rank - 1 } else { rank + 1 };

    let mut pos = vec![0usize; work.len()];
    for (index, &node) in buckets[fixed].iter().enumerate() {
        pos[node] = index;
    }

    let mut keyed: Vec<(f64, usize)> = buckets[rank]
        .iter()
        .enumerate()
        .map(|(index, &node)| {
            let neighbors = if downward {
                &work.rev[node]
            } else {
                &work.adj[node]
            };
            let key = if neighbors.is_empty() {
                index as f64
            } else {
                neighbors.iter().map(|&n| pos[n] as f64).sum::<f64>() / neighbors.len() as f64
            };
            (key, node)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| work.ids[a.1].cmp(&work.ids[b.1])));
    buckets[rank] = keyed.into_iter().map(|(_, node)| node).collect();
}

/// Total crossings over every adjacent rank pair. Quadratic in the edges of
/// a pair, which is fine at the graph sizes this library targets.
pub(crate) fn count_crossings(buckets: &[Vec<usize>], work: &WorkGraph) -> usize {
    let mut pos = vec![0usize; work.len()];
    for bucket in buckets {
        for (index, &node) in bucket.iter().enumerate() {
            pos[node] = index;
        }
    }

    let mut total = 0;
    for rank in 0..buckets.len().saturating_sub(1) {
        let mut ends: Vec<(usize, usize)> = Vec::new();
        for &u in &buckets[rank] {
            for &v in &work.adj[u] {
                ends.push((pos[u], pos[v]));
            }
        }
        ends.sort_unstable();
        for i in 0..ends.len() {
            for j in (i + 1)..ends.len() {
                if ends[i].0 < ends[j].0 && ends[i].1 > ends[j].1 {
                    total += 1;
                }
            }
        }
    }
    total
}
