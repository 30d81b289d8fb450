use serde::{Deserialize, Serialize};

/// How a candidate set is reduced to the requested count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// Top-K by weight; equal weights are shuffled uniformly.
    #[default]
    Best,
    /// K distinct draws without replacement, proportional to weight.
    Weighted,
}

impl OrderingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::Best => "best",
            OrderingMode::Weighted => "weighted",
        }
    }
}

/// Nesting order used when expanding peers x chunks into pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorOrder {
    /// Outer loop over peers: (p0,c0), (p0,c1), ..., (p1,c0), ...
    PeerMajor,
    /// Outer loop over chunks: (p0,c0), (p1,c0), ..., (p0,c1), ...
    ChunkMajor,
}

/// Named operators for merging a peer weight and a chunk weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
    #[default]
    Product,
    Sum,
    Min,
    Max,
}

impl Combine {
    pub fn apply(&self, peer_weight: f64, chunk_weight: f64) -> f64 {
        match self {
            Combine::Product => peer_weight * chunk_weight,
            Combine::Sum => peer_weight + chunk_weight,
            Combine::Min => peer_weight.min(chunk_weight),
            Combine::Max => peer_weight.max(chunk_weight),
        }
    }
}
