//! Phase 4: coordinate assignment

use crate::options::{LayoutOptions, RankAlign, RankDir};
use crate::solve::WorkGraph;

/// Coordinates and rank/order bookkeeping for every node, virtual ones
/// included (the caller only reads back the real range).
pub(crate) struct Placed {
    pub centers: Vec<(f64, f64)>,
    pub ranks: Vec<usize>,
    pub orders: Vec<usize>,
    pub width: f64,
    pub height: f64,
}

/// Place every rank cursor-style.
///
/// Along the lateral axis, nodes follow each other separated by `node_sep`
/// (`edge_sep` when a virtual node is on either side of the gap; virtual
/// nodes themselves have no lateral extent). Along the main axis, each rank
/// is a band as thick as its thickest member, separated from the previous
/// band by `rank_sep`; every node is centered within its band. Under
/// `UpperLeft` alignment ranks start at the margin; under `Center` each
/// rank is centered against the widest one.
pub(crate) fn assign(work: &WorkGraph, buckets: &[Vec<usize>], options: &LayoutOptions) -> Placed {
    let n = work.len();
    let mut centers = vec![(0.0, 0.0); n];
    let mut ranks = vec![0usize; n];
    let mut orders = vec![0usize; n];

    // Lateral size and rank thickness depend on the stacking direction.
    let lateral = |v: usize| match options.rank_dir {
        RankDir::TopBottom => work.widths[v],
        RankDir::LeftRight => work.heights[v],
    };
    let thickness_of = |v: usize| match options.rank_dir {
        RankDir::TopBottom => work.heights[v],
        RankDir::LeftRight => work.widths[v],
    };

    // First pass: lateral offsets relative to each rank's own start, plus
    // the extent of every rank.
    let mut offsets: Vec<Vec<f64>> = Vec::with_capacity(buckets.len());
    let mut extents: Vec<f64> = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        let mut cursor = 0.0;
        let mut rank_offsets = Vec::with_capacity(bucket.len());
        for (index, &node) in bucket.iter().enumerate() {
            if index > 0 {
                let prev = bucket[index - 1];
                cursor += if work.is_virtual(prev) || work.is_virtual(node) {
                    options.edge_sep
                } else {
                    options.node_sep
                };
            }
            rank_offsets.push(cursor);
            cursor += lateral(node);
        }
        offsets.push(rank_offsets);
        extents.push(cursor);
    }
    let max_extent = extents.iter().copied().fold(0.0, f64::max);

    let (lateral_margin, main_margin) = match options.rank_dir {
        RankDir::TopBottom => (options.margin_x, options.margin_y),
        RankDir::LeftRight => (options.margin_y, options.margin_x),
    };

    // Second pass: concrete centers.
    let mut main_cursor = main_margin;
    let mut stacked = 0.0;
    for (rank, bucket) in buckets.iter().enumerate() {
        if rank > 0 {
            main_cursor += options.rank_sep;
            stacked += options.rank_sep;
        }
        let thickness = bucket.iter().map(|&v| thickness_of(v)).fold(0.0, f64::max);
        let start = match options.align {
            RankAlign::UpperLeft => lateral_margin,
            RankAlign::Center => lateral_margin + (max_extent - extents[rank]) / 2.0,
        };

        for (order, &node) in bucket.iter().enumerate() {
            let lateral_center = start + offsets[rank][order] + lateral(node) / 2.0;
            let main_center = main_cursor + thickness / 2.0;
            centers[node] = match options.rank_dir {
                RankDir::TopBottom => (lateral_center, main_center),
                RankDir::LeftRight => (main_center, lateral_center),
            };
            ranks[node] = rank;
            orders[node] = order;
        }

        main_cursor += thickness;
        stacked += thickness;
    }

    let lateral_total = max_extent + 2.0 * lateral_margin;
    let main_total = stacked + 2.0 * main_margin;
    let (width, height) = match options.rank_dir {
        RankDir::TopBottom => (lateral_total, main_total),
        RankDir::LeftRight => (main_total, lateral_total),
    };

    Placed {
        centers,
        ranks,
        orders,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(count: usize, width: f64, height: f64) -> WorkGraph {
        WorkGraph {
            real: count,
            adj: vec![Vec::new(); count],
            rev: vec![Vec::new(); count],
            ids: (0..count).map(|i| format!("n{}", i)).collect(),
            widths: vec![width; count],
            heights: vec![height; count],
        }
    }

    #[test]
    fn test_nodes_in_one_rank_separated_by_node_sep() {
        let w = work(2, 100.0, 40.0);
        let options = LayoutOptions {
            node_sep: 30.0,
            ..Default::default()
        };
        let placed = assign(&w, &[vec![0, 1]], &options);
        assert_eq!(placed.centers[0], (50.0, 20.0));
        assert_eq!(placed.centers[1], (100.0 + 30.0 + 50.0, 20.0));
        assert_eq!(placed.width, 230.0);
        assert_eq!(placed.height, 40.0);
    }

    #[test]
    fn test_rank_sep_measured_between_bands() {
        let w = work(2, 100.0, 40.0);
        let options = LayoutOptions {
            rank_sep: 60.0,
            ..Default::default()
        };
        let placed = assign(&w, &[vec![0], vec![1]], &options);
        assert_eq!(placed.centers[0].1, 20.0);
        assert_eq!(placed.centers[1].1, 40.0 + 60.0 + 20.0);
        assert_eq!(placed.height, 140.0);
    }

    #[test]
    fn test_virtual_node_uses_edge_sep() {
        let mut w = work(3, 100.0, 40.0);
        w.real = 2;
        w.widths[2] = 0.0;
        w.heights[2] = 0.0;
        let options = LayoutOptions {
            node_sep: 50.0,
            edge_sep: 10.0,
            ..Default::default()
        };
        // Rank order: real, virtual, real.
        let placed = assign(&w, &[vec![0, 2, 1]], &options);
        assert_eq!(placed.centers[0].0, 50.0);
        assert_eq!(placed.centers[2].0, 110.0);
        assert_eq!(placed.centers[1].0, 120.0 + 50.0);
    }

    #[test]
    fn test_left_right_swaps_axes() {
        let w = work(2, 100.0, 40.0);
        let options = LayoutOptions {
            rank_dir: RankDir::LeftRight,
            rank_sep: 80.0,
            margin_x: 5.0,
            margin_y: 7.0,
            ..Default::default()
        };
        let placed = assign(&w, &[vec![0], vec![1]], &options);
        assert_eq!(placed.centers[0], (5.0 + 50.0, 7.0 + 20.0));
        assert_eq!(placed.centers[1], (5.0 + 100.0 + 80.0 + 50.0, 7.0 + 20.0));
        assert_eq!(placed.width, 100.0 + 80.0 + 100.0 + 10.0);
        assert_eq!(placed.height, 40.0 + 14.0);
    }

    #[test]
    fn test_center_alignment_offsets_narrow_rank() {
        let w = work(3, 100.0, 40.0);
        let options = LayoutOptions {
            node_sep: 20.0,
            align: RankAlign::Center,
            ..Default::default()
        };
        // Rank 0 is 220 wide, rank 1 is 100 wide: centered start at 60.
        let placed = assign(&w, &[vec![0, 1], vec![2]], &options);
        assert_eq!(placed.centers[2].0, 60.0 + 50.0);
    }

    #[test]
    fn test_orders_and_ranks_recorded() {
        let w = work(3, 10.0, 10.0);
        let placed = assign(&w, &[vec![2, 0], vec![1]], &LayoutOptions::default());
        assert_eq!(placed.ranks, vec![0, 1, 0]);
        assert_eq!(placed.orders, vec![1, 0, 0]);
    }
}
