//! Pipeline identity and filter polarity
//!
//! A pipeline family can have a single unindexed instance or several indexed
//! ones; the identity names which instance a translation call is building and
//! determines both the resolved configuration subtree and the component
//! identifier of the emitted stage.

use std::fmt;

/// Stage type of the translated processor
pub const PROCESSOR_TYPE: &str = "filter";

/// Per-application JMX metrics pipeline
pub const PIPELINE_JMX: &str = "jmx";

/// Broad container-insights pipeline; its filter is a deny-list so metrics
/// owned by the dedicated JMX pipelines are not published twice
pub const PIPELINE_CONTAINER_INSIGHTS: &str = "containerinsights";

/// Container-insights JMX pipeline
pub const PIPELINE_CONTAINER_INSIGHTS_JMX: &str = "containerinsightsjmx";

/// Whether the emitted filter is an allow-list or a deny-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolarity {
    /// Only the listed metric names pass the stage
    Include,
    /// The listed metric names are dropped by the stage
    Exclude,
}

/// Identifies one processor instance to translate
///
/// `index == None` is the unindexed/default instance of the pipeline family;
/// `Some(n)` is the Nth instance when the configuration declares an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Pipeline family name, e.g. `jmx`
    pub name: String,
    /// Instance index when the pipeline is declared as an array
    pub index: Option<usize>,
}

impl Identity {
    /// Create an identity with an optional instance index
    pub fn new(name: impl Into<String>, index: Option<usize>) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// Create the unindexed identity of a pipeline family
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Create the identity of the Nth instance of a pipeline family
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self::new(name, Some(index))
    }

    /// Component identifier of the translated stage
    ///
    /// `filter/<name>`, suffixed with `/<index>` only for indexed instances.
    /// Downstream wiring looks stages up by this exact string.
    pub fn component_id(&self) -> String {
        match self.index {
            Some(index) => format!("{}/{}/{}", PROCESSOR_TYPE, self.name, index),
            None => format!("{}/{}", PROCESSOR_TYPE, self.name),
        }
    }

    /// Filter polarity of this pipeline
    ///
    /// The broad container-insights pipeline excludes known metric names;
    /// every other pipeline is an allow-list over what it collects itself.
    pub fn polarity(&self) -> FilterPolarity {
        if self.name == PIPELINE_CONTAINER_INSIGHTS {
            FilterPolarity::Exclude
        } else {
            FilterPolarity::Include
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.component_id())
    }
}
