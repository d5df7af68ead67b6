//! Areca RAID Prometheus Exporter
//!
//! A Prometheus metrics exporter for Areca hardware RAID controllers.
//!
//! # Overview
//!
//! Areca controllers expose their state through a vendor-supplied command
//! line utility (`areca.cli64`) that prints human-readable reports. This
//! exporter shells out to that utility, parses the reports, and republishes
//! the extracted facts as Prometheus gauges: one constant gauge carrying the
//! controller identity, and one gauge per raid set carrying its health.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    child process    ┌──────────────┐
//! │  areca.cli64 │ ◄─────────────────  │   Exporter   │
//! │   (vendor)   │    sys info /       │              │
//! └──────────────┘    rsf info         │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                      │  │ Poller │  │ ◄────────────► │ Prometheus │
//!                                      │  └────────┘  │   /metrics     └────────────┘
//!                                      │  ┌────────┐  │
//!                                      │  │Metrics │  │
//!                                      │  └────────┘  │
//!                                      └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`areca`] - vendor CLI transport and report parsers
//! - [`metrics`] - Prometheus metric definitions
//! - [`server`] - HTTP server and poll loop
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use areca_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```

pub mod areca;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
