//! Generic configuration tree helpers
//!
//! The agent configuration is an arbitrarily nested tree of ordered mappings,
//! sequences, and scalars. `serde_yaml::Value` is exactly that shape (its
//! mapping type preserves document order) and decodes from both YAML and JSON
//! documents, so it serves as the tree type throughout the crate.
//!
//! Resolution here is deliberately strict about required sections and nothing
//! else: a missing segment and a wrong-shaped intermediate node are the same
//! "not found" outcome.

pub use serde_yaml::{Mapping, Value};

/// Dotted key path of the JMX metrics-collection section
pub const JMX_CONFIG_KEY: &str = "metrics.metrics_collected.jmx";

/// Resolve a dotted key path against a nested mapping tree
///
/// Descends one segment at a time. Returns `None` if any segment is absent,
/// or if an intermediate node is not a mapping and descent must continue.
///
/// # Example
///
/// ```
/// use otel_filter_translator::tree;
///
/// let doc: tree::Value = serde_yaml::from_str("a:\n  b: 1\n").unwrap();
/// assert!(tree::resolve(&doc, "a.b").is_some());
/// assert!(tree::resolve(&doc, "a.c").is_none());
/// ```
pub fn resolve<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(tree, |node, segment| node.get(segment))
}

/// Narrow a resolved section to one instance when an index is given
///
/// Configurations may declare a section as an array of instances; an indexed
/// identity selects the Nth element. With no index the node is returned
/// unchanged. An out-of-range index, or an index against a non-sequence node,
/// resolves to `None`.
pub fn narrow(node: &Value, index: Option<usize>) -> Option<&Value> {
    match index {
        Some(i) => node.as_sequence()?.get(i),
        None => Some(node),
    }
}
