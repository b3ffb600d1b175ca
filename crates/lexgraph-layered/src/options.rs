//! Layout options: direction, separations, margins, rank alignment

use crate::error::LayeredError;

/// Direction in which ranks are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankDir {
    /// Ranks stack vertically; rank 0 is the top row.
    #[default]
    TopBottom,

    /// Ranks stack horizontally; rank 0 is the leftmost column.
    LeftRight,
}

/// How nodes of a rank are aligned against the widest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankAlign {
    /// Every rank starts at the margin; narrow ranks hug the top/left.
    #[default]
    UpperLeft,

    /// Every rank is centered against the widest rank.
    Center,
}

/// Spacing and alignment parameters, in the caller's display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Rank stacking direction.
    pub rank_dir: RankDir,

    /// Minimum separation between adjacent real nodes within a rank.
    pub node_sep: f64,

    /// Separation between adjacent ranks, measured between the thickest
    /// nodes of each rank.
    pub rank_sep: f64,

    /// Lateral room reserved for an edge passing through a rank (the
    /// virtual nodes created by normalization).
    pub edge_sep: f64,

    /// Horizontal margin added on both sides of the drawing.
    pub margin_x: f64,

    /// Vertical margin added on both sides of the drawing.
    pub margin_y: f64,

    /// Rank alignment policy.
    pub align: RankAlign,

    /// Budget for barycenter sweep iterations.
    pub max_sweeps: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rank_dir: RankDir::TopBottom,
            node_sep: 50.0,
            rank_sep: 50.0,
            edge_sep: 10.0,
            margin_x: 0.0,
            margin_y: 0.0,
            align: RankAlign::UpperLeft,
            max_sweeps: 8,
        }
    }
}

impl LayoutOptions {
    /// Check that every numeric parameter is finite and non-negative.
    pub fn validate(&self) -> Result<(), LayeredError> {
        let checks = [
            ("node_sep", self.node_sep),
            ("rank_sep", self.rank_sep),
            ("edge_sep", self.edge_sep),
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(LayeredError::InvalidOptions(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
