use std::collections::HashMap;

use areca_exporter::areca::types::{ControllerInfo, RaidSetRecord, RAID_SET_LABELS};

fn record(id: &str, state: &str) -> RaidSetRecord {
    RaidSetRecord {
        id: id.to_string(),
        name: format!("Raid Set # {}", id),
        disks: "4".to_string(),
        total_capacity: "8000.0GB".to_string(),
        free_capacity: "0.0GB".to_string(),
        disk_channels: "1234".to_string(),
        state: state.to_string(),
    }
}

#[test]
fn test_health_value_normal_is_zero() {
    assert_eq!(record("1", "Normal").health_value(), 0.0);
}

#[test]
fn test_health_value_abnormal_states_are_one() {
    // Any state other than the literal "Normal" counts as abnormal
    for state in ["Degraded", "Rebuilding", "Failed", "Initializing", ""] {
        assert_eq!(
            record("1", state).health_value(),
            1.0,
            "state {:?} should map to 1",
            state
        );
    }
}

#[test]
fn test_health_value_is_case_sensitive() {
    // The CLI spells the healthy state exactly "Normal"; near-misses are
    // treated as unknown states, not as healthy
    assert_eq!(record("1", "normal").health_value(), 1.0);
    assert_eq!(record("1", "NORMAL").health_value(), 1.0);
    assert_eq!(record("1", " Normal").health_value(), 1.0);
}

#[test]
fn test_label_values_pair_with_label_names() {
    // Given: A record with a distinct value per field
    let record = RaidSetRecord {
        id: "2".to_string(),
        name: "Raid Set # 2".to_string(),
        disks: "8".to_string(),
        total_capacity: "16000.0GB".to_string(),
        free_capacity: "1000.0GB".to_string(),
        disk_channels: "12345678".to_string(),
        state: "Rebuilding".to_string(),
    };

    // When: Zipping label names with label values
    let labels: HashMap<&str, &str> = RAID_SET_LABELS
        .iter()
        .copied()
        .zip(record.label_values())
        .collect();

    // Then: Every name lines up with the matching field
    assert_eq!(labels["id"], "2");
    assert_eq!(labels["name"], "Raid Set # 2");
    assert_eq!(labels["disks"], "8");
    assert_eq!(labels["total_capacity"], "16000.0GB");
    assert_eq!(labels["free_capacity"], "1000.0GB");
    assert_eq!(labels["disk_channels"], "12345678");
    assert_eq!(labels["state"], "Rebuilding");
}

#[test]
fn test_records_compare_by_value() {
    // Given: Two records built from the same fields
    let a = record("1", "Normal");
    let b = record("1", "Normal");

    // Then: They are equal, and any field change breaks equality
    assert_eq!(a, b);

    let mut c = record("1", "Normal");
    c.free_capacity = "100.0GB".to_string();
    assert_ne!(a, c);

    assert_ne!(record("1", "Normal"), record("1", "Degraded"));
    assert_ne!(record("1", "Normal"), record("2", "Normal"));
}

#[test]
fn test_controller_info_lookup() {
    // Given: A label map built from normalized entries
    let info: ControllerInfo = vec![
        ("controller_name".to_string(), "ARC-1882".to_string()),
        ("firmware_version".to_string(), "V1.52 2014-11-07".to_string()),
    ]
    .into_iter()
    .collect();

    // Then: Lookups and size accessors reflect the entries
    assert_eq!(info.len(), 2);
    assert!(!info.is_empty());
    assert_eq!(info.get("controller_name"), Some("ARC-1882"));
    assert_eq!(info.get("firmware_version"), Some("V1.52 2014-11-07"));
    assert_eq!(info.get("missing"), None);
}

#[test]
fn test_controller_info_default_is_empty() {
    let info = ControllerInfo::default();
    assert!(info.is_empty());
    assert_eq!(info.len(), 0);
    assert!(info.labels().is_empty());
}
