//! Measurement extraction across target declarations
//!
//! Users may write a target as a single object or an array of objects, and a
//! measurement as a bare name or an object with rename/unit metadata. Both
//! shapes are normalized once here so the rest of the walk stays
//! shape-agnostic. Unrecognized shapes contribute nothing rather than
//! failing, so one odd entry cannot break translation of the remaining list.

use tracing::debug;

use crate::tree::Value;

/// Key carrying the measurement list inside a target instance
const MEASUREMENT_KEY: &str = "measurement";

/// Key carrying the metric name inside a structured measurement declaration
const NAME_KEY: &str = "name";

/// Canonical metric name of one measurement declaration
///
/// A bare string is the name itself; a mapping contributes the value under
/// its `name` key. `rename` and `unit` belong to a downstream renaming stage
/// and never affect the filter name.
pub(crate) fn measurement_name(decl: &Value) -> Option<&str> {
    match decl {
        Value::String(name) => Some(name),
        Value::Mapping(_) => decl.get(NAME_KEY).and_then(Value::as_str),
        _ => None,
    }
}

/// Flatten one target declaration into its declared metric names
///
/// A single mapping is treated as a one-element sequence. Instances without
/// a `measurement` key contribute nothing.
pub(crate) fn walk_target(decl: &Value) -> Vec<String> {
    let instances: Vec<&Value> = match decl {
        Value::Sequence(seq) => seq.iter().collect(),
        Value::Mapping(_) => vec![decl],
        _ => {
            // Scalar-valued keys (e.g. endpoints) sit next to targets; they
            // simply contribute no names.
            debug!("skipping non-target declaration");
            Vec::new()
        }
    };

    let mut names = Vec::new();
    for instance in instances {
        let Some(measurements) = instance.get(MEASUREMENT_KEY).and_then(Value::as_sequence)
        else {
            continue;
        };
        names.extend(
            measurements
                .iter()
                .filter_map(measurement_name)
                .map(str::to_owned),
        );
    }
    names
}

/// Union of metric names across every target under the section
///
/// Iterates targets in the tree's natural key order and concatenates their
/// names, preserving first-seen order. No cross-target dedup: the strict
/// matcher tolerates duplicate entries. A non-mapping section contributes
/// nothing.
pub(crate) fn aggregate_section(section: &Value) -> Vec<String> {
    let Some(mapping) = section.as_mapping() else {
        return Vec::new();
    };
    mapping.values().flat_map(walk_target).collect()
}
