//! Filter processor configuration schema
//!
//! Mirrors the downstream filter stage's configuration surface:
//!
//! ```yaml
//! metrics:
//!   include:
//!     match_type: strict
//!     metric_names:
//!       - jvm.memory.heap.init
//! ```
//!
//! `FilterConfig::default()` is the default-config factory: a freshly
//! allocated value per call with both lists absent, so concurrent
//! translations never share state.

use serde::{Deserialize, Serialize};

/// Top-level configuration of the filter processor stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Metric name filters
    #[serde(default)]
    pub metrics: MetricFilters,
}

/// Include/exclude filter pair
///
/// Translation populates exactly one of the two; the other stays at its
/// factory default and is omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFilters {
    /// Allow-list: only matching metrics pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<MatchProperties>,

    /// Deny-list: matching metrics are dropped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<MatchProperties>,
}

/// One side of the filter: how to match and which names to match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchProperties {
    /// Matching mode applied to `metric_names`
    pub match_type: MatchType,

    /// Metric names to match, in declaration order
    #[serde(default)]
    pub metric_names: Vec<String>,
}

impl MatchProperties {
    /// Strict (exact-name) match over the given names
    pub fn strict(metric_names: Vec<String>) -> Self {
        Self {
            match_type: MatchType::Strict,
            metric_names,
        }
    }
}

/// Matching mode of the downstream filter engine
///
/// Translation always emits `Strict`; `Regexp` exists because the downstream
/// schema accepts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Exact string equality, no wildcards
    #[default]
    Strict,
    /// Regular expression matching
    Regexp,
}
