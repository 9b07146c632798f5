//! Command-line front-end over the creature statistics store.
//!
//! # Architecture
//!
//! ```text
//! dex (binary, composition root)
//!   ├─→ client-bootstrap (config, sources, readiness gate)
//!   ├─→ dex-runtime (DexStore queries)
//!   └─→ views (chart-ready JSON shapes)
//! ```
//!
//! The binary never touches the dataset directly: it waits for the gate to
//! open, runs one query, and prints the resulting view.
pub mod commands;
pub mod dirs;
pub mod logging;
pub mod views;

pub use commands::Command;
