//! Prometheus Metrics Definitions
//!
//! This module defines the metric families exposed by the Areca exporter.
//!
//! # Families
//!
//! - `areca_controller_info`: constant `1`, controller identity as labels
//! - `areca_raid_set_state`: one member per raid set, `0` normal / `1` abnormal
//! - `areca_exporter_build_info`: constant `1`, exporter version as a label
//!
//! All metrics use the `areca_` namespace prefix.
//!
//! # Reconciliation
//!
//! The raid-set family is the only dynamic one. Raid sets appear, disappear,
//! and change label values between polls, and a gauge's label set is frozen
//! at registration, so the family cannot be updated in place. Instead every
//! poll replaces the whole family: see [`RaidSetStateCollector::store`].

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use std::sync::{Arc, RwLock};

use crate::areca::types::{ControllerInfo, RaidSetRecord, RAID_SET_LABELS};
use crate::error::Result;

const NAMESPACE: &str = "areca";

/// Metrics collector for the Areca exporter.
#[derive(Clone)]
pub struct ExporterMetrics {
    registry: Registry,

    /// Constant `1`; the controller identity rides along as const labels.
    pub controller_info: Gauge,

    /// Constant `1`, labeled with the exporter's own version.
    pub build_info: Gauge,

    /// The dynamic raid-set family.
    pub raid_sets: RaidSetStateCollector,
}

impl ExporterMetrics {
    /// Build the registry. The controller identity is baked into
    /// `controller_info` as const labels here and cannot change afterwards;
    /// an empty [`ControllerInfo`] yields a plain unlabeled gauge.
    pub fn new(controller: &ControllerInfo) -> Result<Self> {
        let registry = Registry::new();

        let controller_info = Gauge::with_opts(
            Opts::new(
                "controller_info",
                "Controller identity (value is always 1)",
            )
            .namespace(NAMESPACE)
            .const_labels(controller.labels().clone()),
        )?;
        controller_info.set(1.0);

        let build_info = Gauge::with_opts(
            Opts::new(
                "exporter_build_info",
                "Exporter build information (value is always 1)",
            )
            .namespace(NAMESPACE)
            .const_label("version", env!("CARGO_PKG_VERSION")),
        )?;
        build_info.set(1.0);

        let raid_sets = RaidSetStateCollector::new()?;

        registry.register(Box::new(controller_info.clone()))?;
        registry.register(Box::new(build_info.clone()))?;
        registry.register(Box::new(raid_sets.clone()))?;

        Ok(Self {
            registry,
            controller_info,
            build_info,
            raid_sets,
        })
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// The `areca_raid_set_state` family.
///
/// Wraps a [`GaugeVec`] so the replace-the-family reconciliation and the
/// scrape path share one lock: a scrape sees the family either entirely
/// before or entirely after a given poll, never mid-replacement.
#[derive(Clone)]
pub struct RaidSetStateCollector {
    gauges: GaugeVec,
    snapshot: Arc<RwLock<Vec<RaidSetRecord>>>,
}

impl RaidSetStateCollector {
    fn new() -> Result<Self> {
        let gauges = GaugeVec::new(
            Opts::new(
                "raid_set_state",
                "state of a RAID set: 0 normal, 1 abnormal",
            )
            .namespace(NAMESPACE),
            &RAID_SET_LABELS,
        )?;

        Ok(Self {
            gauges,
            snapshot: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Replace the family members with one gauge per record.
    ///
    /// Label sets are immutable once created, so the previous members are
    /// dropped wholesale and the new snapshot is registered from scratch;
    /// any field change (not just state) retires the old member. Records
    /// with identical fields collapse into a single member. The write lock
    /// is held across the whole swap to keep scrapes out of the window
    /// where the family is partially rebuilt.
    pub fn store(&self, records: Vec<RaidSetRecord>) {
        let mut snapshot = self.snapshot.write().unwrap();
        self.gauges.reset();
        for record in &records {
            self.gauges
                .with_label_values(&record.label_values())
                .set(record.health_value());
        }
        *snapshot = records;
    }

    /// The records applied by the most recent [`store`](Self::store).
    pub fn snapshot(&self) -> Vec<RaidSetRecord> {
        self.snapshot.read().unwrap().clone()
    }
}

impl Collector for RaidSetStateCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.gauges.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        // Taken for the duration of the gather so collection cannot
        // interleave with a store() in progress.
        let _snapshot = self.snapshot.read().unwrap();
        self.gauges.collect()
    }
}
