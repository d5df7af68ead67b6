//! Data types for Areca CLI output.
//!
//! Two shapes come out of the vendor utility: the colon-delimited
//! controller identity printed by `sys info`, and the fixed-column raid-set
//! table printed by `rsf info`. Both are kept as text; the CLI gives no
//! machine-readable types to decode into, and the values are only ever used
//! as metric labels.

use std::collections::HashMap;

/// Label names of the raid-set family, in the order produced by
/// [`RaidSetRecord::label_values`].
pub const RAID_SET_LABELS: [&str; 7] = [
    "id",
    "name",
    "disks",
    "total_capacity",
    "free_capacity",
    "disk_channels",
    "state",
];

/// Identity labels for the controller, captured once at process start.
///
/// Keys are normalized (lowercase, whitespace runs collapsed to `_`) so they
/// are usable as Prometheus label names. The map is read-only after
/// construction; the controller identity does not change while the process
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerInfo {
    labels: HashMap<String, String>,
}

impl ControllerInfo {
    /// The full label map, keyed by normalized name.
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Look up a single label by normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(String, String)> for ControllerInfo {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

/// One row of the `rsf info` table.
///
/// All fields are verbatim CLI text except `name`, which is rebuilt from the
/// row index so it stays stable regardless of how the CLI renders the name
/// column. Records carry no identity beyond their field values; two records
/// compare equal iff every field matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidSetRecord {
    pub id: String,
    pub name: String,
    pub disks: String,
    pub total_capacity: String,
    pub free_capacity: String,
    pub disk_channels: String,
    pub state: String,
}

impl RaidSetRecord {
    /// Numeric health of the set: `0` for the literal state `Normal`,
    /// `1` for anything else.
    ///
    /// The comparison is exact and case-sensitive; the raw state string is
    /// kept as a label for human diagnosis, this value exists so alerts can
    /// fire on the transition.
    pub fn health_value(&self) -> f64 {
        if self.state == "Normal" {
            0.0
        } else {
            1.0
        }
    }

    /// Field values in [`RAID_SET_LABELS`] order.
    pub fn label_values(&self) -> [&str; 7] {
        [
            &self.id,
            &self.name,
            &self.disks,
            &self.total_capacity,
            &self.free_capacity,
            &self.disk_channels,
            &self.state,
        ]
    }
}
