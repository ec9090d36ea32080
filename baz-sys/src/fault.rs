//! Fatal contract violations.
//!
//! A [`Fault`] is raised when a caller breaks a container contract: pushing past
//! capacity, indexing out of range, probing a saturated table, and so on. These are
//! programmer errors, not runtime conditions, so they are not returned as `Result`s.
//! [`fault`] traces the violation and unwinds with the `Fault` as the panic payload.
//!
//! Consumer binaries call [`install_fault_hook`] (usually through [`crate::init`]) so
//! that a fault prints a location-tagged diagnostic and exits the process with a
//! non-zero status. Catching a fault is only meant for tests.

use core::fmt;
use core::panic::Location;
use std::panic;

use thiserror::Error;

use crate::config::Config;

/// The contract that was violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FaultKind {
    /// A fixed-capacity container was asked to grow past its capacity.
    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// An index was outside of the valid elements.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A half-open range was reversed or reached past the end.
    #[error("range {from}..{to} out of bounds for length {len}")]
    InvalidRange { from: usize, to: usize, len: usize },

    /// Linear probing wrapped around the whole table without finding a slot.
    #[error("hash table of {capacity} slots is saturated")]
    TableFull { capacity: usize },

    /// A value that had to be present was absent.
    #[error("expected a value, found none")]
    Missing,

    /// A checked integer narrowing lost information.
    #[error("value {value} does not fit the target integer type")]
    Narrowing { value: u64 },

    /// A numeric base outside of 2..=36.
    #[error("radix {radix} is not in 2..=36")]
    InvalidRadix { radix: u32 },

    /// An output buffer could not hold the formatted value.
    #[error("buffer of {available} bytes cannot hold {needed} bytes")]
    BufferTooSmall { needed: usize, available: usize },

    /// An input file could not be loaded.
    #[error("input could not be loaded")]
    Load,
}

/// Payload carried by a fault panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{location}: {context}: {kind}")]
pub struct Fault {
    pub kind: FaultKind,
    /// Short name of the operation that faulted, e.g. `"push"`.
    pub context: &'static str,
    pub location: &'static Location<'static>,
}

/// Raises a [`Fault`] attributed to the caller's location.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fault(kind: FaultKind, context: &'static str) -> ! {
    let location = Location::caller();
    tracing::debug!(%location, %kind, context, "fault");
    panic::panic_any(Fault {
        kind,
        context,
        location,
    })
}

/// Asserts `cond`, raising a fault of `kind` otherwise.
#[inline]
#[track_caller]
pub fn ensure(cond: bool, kind: FaultKind, context: &'static str) {
    if !cond {
        fault(kind, context);
    }
}

/// Unwraps `value`, raising [`FaultKind::Missing`] if it is absent.
#[inline]
#[track_caller]
pub fn unwrap<T>(value: Option<T>, context: &'static str) -> T {
    match value {
        Some(value) => value,
        None => fault(FaultKind::Missing, context),
    }
}

struct Diagnostic<'a> {
    fault: &'a Fault,
    color: bool,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.fault.location;
        if self.color {
            write!(f, "\x1b[31;1;4m{location}\x1b[0m")?;
        } else {
            write!(f, "{location}")?;
        }
        write!(f, ": {}: {}", self.fault.context, self.fault.kind)
    }
}

/// Installs a panic hook that turns a [`Fault`] into a diagnostic on stderr
/// followed by process exit with status 1. Other panics go to the previous hook.
pub fn install_fault_hook(config: &Config) {
    let color = config.color;
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| match info.payload().downcast_ref::<Fault>() {
        Some(fault) => {
            eprintln!("{}", Diagnostic { fault, color });
            std::process::exit(1);
        }
        None => previous(info),
    }));
}
