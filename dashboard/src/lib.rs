//! # Credit Burn Dashboard
//!
//! Turns a usage snapshot of a metered API into a colored terminal report.
//!
//! ## Architecture
//!
//! - **`snapshot`**: The input document and its loader
//! - **`balance`**: Day-by-day balance simulation driven by a schedule of dated transitions
//! - **`metrics`**: Values derived once from the snapshot (balance curve, peaks)
//! - **`render`**: Small visual primitives (bars, sparklines, flags) and the style theme
//! - **`sections`**: The seven report sections and the `Report` that strings them together
//!
//! ## Usage
//!
//! ```no_run
//! use credit_burn_config::Config;
//! use credit_burn_dashboard::{
//!     Report,
//!     Snapshot,
//!     Theme,
//! };
//!
//! let snapshot = Snapshot::load("data/terminal_analytics.json").unwrap();
//! let config = Config::default();
//! let report = Report::new(&snapshot, &config, Theme::default());
//! print!("{}", report.format());
//! ```

#[macro_use]
extern crate tracing;

pub mod balance;
pub mod error;
pub mod metrics;
pub mod render;
pub mod sections;
pub mod snapshot;

pub use balance::{
    BalanceCurve,
    BalanceSchedule,
    Transition,
};
pub use error::SnapshotError;
pub use metrics::DerivedMetrics;
pub use render::{
    Flag,
    Theme,
};
pub use sections::{
    Report,
    Section,
    SectionKind,
};
pub use snapshot::Snapshot;
