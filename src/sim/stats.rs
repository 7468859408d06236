//! Move-count statistics across simulated games.

use serde::{Deserialize, Serialize};

use crate::core::PlayerMap;

/// Percentiles of the per-game move counts.
///
/// Indices follow the usual nearest-rank-below convention on the sorted
/// counts: median at `n/2`, 90th percentile at `n*9/10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStats {
    pub min: u32,
    pub median: u32,
    pub p90: u32,
    pub max: u32,
}

impl MoveStats {
    /// Sort `counts` in place and read off the percentiles.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// ```
    /// use candy_lane::sim::MoveStats;
    ///
    /// let mut counts = vec![40, 10, 30, 20, 50];
    /// let stats = MoveStats::from_counts(&mut counts).unwrap();
    /// assert_eq!((stats.min, stats.median, stats.p90, stats.max), (10, 30, 50, 50));
    /// ```
    pub fn from_counts(counts: &mut [u32]) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }
        counts.sort_unstable();
        let n = counts.len();
        Some(Self {
            min: counts[0],
            median: counts[n / 2],
            p90: counts[n * 9 / 10],
            max: counts[n - 1],
        })
    }
}

impl std::fmt::Display for MoveStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "min {}", self.min)?;
        writeln!(f, "med {}", self.median)?;
        writeln!(f, "90p {}", self.p90)?;
        write!(f, "max {}", self.max)
    }
}

/// Aggregate result of a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Games simulated.
    pub games: usize,

    #[serde(flatten)]
    pub stats: MoveStats,

    /// Games won per seat.
    pub wins: PlayerMap<u32>,

    /// Games stopped by the turn cap.
    pub turn_limited: u32,
}
