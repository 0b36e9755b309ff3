//! Whole-container printing and error reporting.

use core::panic::Location;
use std::io::{self, Write};

use crate::core::HookVec;
use crate::error::{HookVecError, Result};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Writes the default report line for `err`: the location, the colored
/// error code, then the message.
///
/// # Errors
///
/// Propagates failures of `out`.
pub fn write_report(
    out: &mut dyn Write,
    err: &HookVecError,
    location: &Location<'_>,
) -> io::Result<()> {
    writeln!(
        out,
        "{}:{} [{RED}Error: {}{RESET}] : {err}",
        location.file(),
        location.line(),
        err.code()
    )
}

impl<T> HookVec<T> {
    /// Prints the container to stdout.
    ///
    /// # Errors
    ///
    /// Same as [`HookVec::print_to`].
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock)?;
        lock.flush()?;
        Ok(())
    }

    /// Writes the container to `out`.
    ///
    /// The whole-array print hook, when registered, replaces the default
    /// output: a header line, every element through the print hook, then
    /// a newline.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::MissingCallback` if neither print hook is
    /// registered, or `HookVecError::OutputFailure` if writing fails.
    pub fn print_to(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(print_array) = self.hooks.print_array_hook() {
            print_array(self, &mut *out)?;
            return Ok(());
        }
        let print = self.hooks.print_hook()?;
        writeln!(
            out,
            "HookVec [size: {}, min_alloc: {}] =>",
            self.len(),
            self.min_alloc()
        )?;
        for elem in self.as_slice() {
            print(elem, &mut *out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Reports `err` through the error-report hook, or to stderr with the
    /// caller's location when none is registered.
    #[track_caller]
    pub fn report(&self, err: &HookVecError) {
        let location = Location::caller();
        if let Some(report) = self.hooks.report_hook() {
            report(err, location);
            return;
        }
        // Nothing sensible to do if stderr itself is gone
        let _ = write_report(&mut io::stderr().lock(), err, location);
    }
}
