//! Fixed-format text report.

use std::io::{self, Write};

use crate::harness::AveragedReport;
use crate::Kernel;

/// Width of the left-aligned label column.
pub const LABEL_WIDTH: usize = 20;

pub const HEADER: &str = "STIC benchmark ---------------------------";
pub const SUBHEADER: &str = "   (smaller numbers are better)";
pub const FOOTER: &str = "-------------------------------------------";

/// One report row: padded label, then the value to two decimals.
pub fn format_line(kernel: Kernel, secs: f64) -> String {
    format!("{:<width$}{:.2}", kernel.label(), secs, width = LABEL_WIDTH)
}

pub fn write_report<W: Write>(out: &mut W, report: &AveragedReport) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{SUBHEADER}")?;
    for kernel in Kernel::ALL {
        writeln!(out, "{}", format_line(kernel, report.get(kernel)))?;
    }
    writeln!(out, "{FOOTER}")?;
    out.flush()
}
