//! # baz-sys
//!
//! The narrow platform seam under the `baz` containers. Everything that touches the
//! process lives here so the container crates stay free of OS dependencies:
//!
//! - **[`fault`]** – the fatal contract-violation channel ([`Fault`], [`fault()`])
//! - **[`bytes`]** – copy/compare/scan over byte ranges
//! - **[`int`]** – checked integer narrowing
//! - **[`alloc`]** – bulk zeroed memory that is never reclaimed
//! - **[`fs`]** – whole-file input loading
//! - **[`config`]** / **[`logging`]** – environment configuration and `tracing` setup
//!
//! ## Two kinds of failure
//!
//! Absence (a lookup miss, popping an empty list, a parse that finds no digits) is
//! an `Option`. Breaking a contract (pushing past capacity, removing out of range)
//! is a [`Fault`]: it is logged and raised as a panic payload, and a consumer
//! binary that called [`init`] prints it with its source location and exits with
//! status 1.
//!
//! ```rust,no_run
//! let config = baz_sys::init();
//! let input = baz_sys::fs::load_or_fault("inputs/day01.txt");
//! # let _ = (config, input);
//! ```

pub mod alloc;
pub mod bytes;
pub mod config;
pub mod fault;
pub mod fs;
pub mod int;
pub mod logging;

pub use config::Config;
pub use fault::{ensure, fault, install_fault_hook, Fault, FaultKind};
pub use fs::LoadError;

/// Process setup for a consumer binary: read [`Config`] from the environment,
/// install logging and the fault hook.
pub fn init() -> Config {
    let config = Config::from_env();
    logging::init(&config);
    install_fault_hook(&config);
    config
}
