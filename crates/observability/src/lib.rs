//! Tinct observability - tracing setup shared by the CLI and TUI.
//!
//! This crate wires up `tracing` for the tinct binaries: console logging for
//! CLI commands, and a non-blocking log sink so the TUI can show runtime logs
//! on its debug traces screen.
//!
//! # Quick Start
//!
//! ```no_run
//! use tinct_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("tinct")
//!     .with_log_level("info");
//!
//! init(config)?;
//!
//! // Or initialize from environment variables
//! // tinct_observability::init_from_env()?;
//!
//! tracing::info!("started");
//! # Ok::<(), tinct_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `TINCT_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tui_log_layer;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
