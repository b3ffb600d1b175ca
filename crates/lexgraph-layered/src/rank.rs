//! Phase 1: rank assignment

use tracing::debug;

use crate::solve::WorkGraph;

/// Assign ranks via longest-path layering over a deterministic Kahn order.
///
/// Sources get rank 0; every other node gets 1 + the maximum rank of its
/// predecessors, so every forward edge points from a lower to a strictly
/// higher rank. Nodes Kahn never reaches sit on a cycle; they are parked
/// one rank past the acyclic part rather than failing the solve.
pub(crate) fn assign_ranks(work: &WorkGraph) -> Vec<usize> {
    let n = work.len();
    if n == 0 {
        return Vec::new();
    }

    let mut in_degree: Vec<usize> = work.rev.iter().map(|preds| preds.len()).collect();

    let mut queue: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    queue.sort_by(|a, b| work.ids[*a].cmp(&work.ids[*b]));

    let mut ranks = vec![0usize; n];
    let mut visited = vec![false; n];
    let mut visited_count = 0usize;

    let mut head = 0;
    while head < queue.len() {
        let u = queue[head];
        head += 1;
        visited[u] = true;
        visited_count += 1;

        // Neighbor lists are pre-sorted by id, so pushes stay deterministic.
        for &v in &work.adj[u] {
            ranks[v] = ranks[v].max(ranks[u] + 1);
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push(v);
            }
        }
    }

    if visited_count < n {
        let max_rank = ranks
            .iter()
            .zip(&visited)
            .filter(|(_, &seen)| seen)
            .map(|(&r, _)| r)
            .max()
            .unwrap_or(0);
        let mut parked = 0usize;
        for v in 0..n {
            if !visited[v] {
                ranks[v] = max_rank + 1;
                parked += 1;
            }
        }
        debug!("Parked {} cycle nodes at rank {}", parked, max_rank + 1);
    }

    ranks
}
