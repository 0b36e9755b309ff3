use core::fmt;
use std::io;

use thiserror::Error;

/// Result alias used by every fallible `HookVec` operation.
pub type Result<T> = core::result::Result<T, HookVecError>;

/// Registry slot an operation depends on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Hook {
    /// Prints a single element.
    Print,
    /// Converts a single element to a `String`.
    Stringify,
    /// Total order over elements.
    Compare,
    /// Element equality.
    Equality,
    /// Deep copy of a single element.
    Copy,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hook::Print => "print",
            Hook::Stringify => "stringify",
            Hook::Compare => "compare",
            Hook::Equality => "equality",
            Hook::Copy => "copy",
        };
        f.write_str(name)
    }
}

/// Error types for `HookVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum HookVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Operation requires at least one element
    #[error("Operation on empty vector")]
    EmptyVector,
    /// A registry hook required by the operation is not set
    #[error("Missing callback: the {hook} hook is not registered")]
    MissingCallback {
        /// The hook that was required
        hook: Hook,
    },
    /// The backing buffer could not be grown
    #[error("Allocation failure: could not allocate room for {requested} elements")]
    AllocationFailure {
        /// Number of element slots requested
        requested: usize,
    },
    /// An argument violates the operation contract
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the violated contract
        reason: &'static str,
    },
    /// An inclusive range whose start lies after its end
    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// First index of the range
        start: usize,
        /// Last index of the range
        end: usize,
    },
    /// Invalid construction parameter
    #[error("Invalid configuration: {parameter} {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Description of the constraint
        reason: &'static str,
    },
    /// No element matched the search
    #[error("Element not found: no element matched")]
    ElementNotFound,
    /// The container cannot support the requested setup
    #[error("Unsupported method: {reason}")]
    UnsupportedMethod {
        /// Why the setup is unsupported
        reason: &'static str,
    },
    /// Writing formatted output failed
    #[error("Output failure: {kind}")]
    OutputFailure {
        /// Kind of the underlying I/O error
        kind: io::ErrorKind,
    },
}

impl HookVecError {
    /// Short code naming the error category, as shown in reports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            HookVecError::IndexOutOfBounds { .. } => "Index out of bound",
            HookVecError::EmptyVector => "Empty vector",
            HookVecError::MissingCallback { .. } => "Callback not set",
            HookVecError::AllocationFailure { .. } => "Allocation failed",
            HookVecError::InvalidArgument { .. } => "Invalid argument",
            HookVecError::InvalidRange { .. } => "Invalid range",
            HookVecError::InvalidConfiguration { .. } => "Invalid configuration",
            HookVecError::ElementNotFound => "Element not found",
            HookVecError::UnsupportedMethod { .. } => "Unsupported method",
            HookVecError::OutputFailure { .. } => "Output failure",
        }
    }
}

impl From<io::Error> for HookVecError {
    fn from(error: io::Error) -> Self {
        HookVecError::OutputFailure { kind: error.kind() }
    }
}
