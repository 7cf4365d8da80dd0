//! Filter stage translation
//!
//! Builds the filter processor configuration for one metrics pipeline from
//! the agent configuration tree: resolve the JMX metrics-collection section
//! for the identity, collect the declared metric names, and place them on
//! the include or exclude side depending on the pipeline's polarity.
//!
//! A translator holds no mutable state; `translate` reads its input tree and
//! returns a freshly constructed configuration, so concurrent calls need no
//! synchronization.

mod measurements;

use tracing::debug;

use crate::error::{TranslateError, TranslateResult};
use crate::pipeline::{FilterPolarity, Identity};
use crate::processor::{FilterConfig, MatchProperties};
use crate::tree::{self, Value, JMX_CONFIG_KEY};

/// Translates one pipeline's filter stage configuration
#[derive(Debug, Clone)]
pub struct Translator {
    identity: Identity,
}

impl Translator {
    /// Create a translator for the given pipeline identity
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// Component identifier of the translated stage, e.g. `filter/jmx/0`
    pub fn id(&self) -> String {
        self.identity.component_id()
    }

    /// The identity this translator was built for
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Translate the agent configuration tree into a filter stage config
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::MissingKey`] when the JMX metrics-collection
    /// section (or the indexed instance of it) is absent from the tree. This
    /// is the only failure; unexpected declaration shapes below the section
    /// are skipped silently.
    pub fn translate(&self, conf: &Value) -> TranslateResult<FilterConfig> {
        let mut cfg = FilterConfig::default();

        let section = tree::resolve(conf, JMX_CONFIG_KEY)
            .and_then(|node| tree::narrow(node, self.identity.index))
            .ok_or_else(|| TranslateError::MissingKey {
                id: self.id(),
                key: JMX_CONFIG_KEY.to_string(),
            })?;

        let metric_names = measurements::aggregate_section(section);
        debug!(
            id = %self.id(),
            count = metric_names.len(),
            "collected metric names for filter stage"
        );

        let filter = MatchProperties::strict(metric_names);
        match self.identity.polarity() {
            FilterPolarity::Include => cfg.metrics.include = Some(filter),
            FilterPolarity::Exclude => cfg.metrics.exclude = Some(filter),
        }
        Ok(cfg)
    }
}
