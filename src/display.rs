//! Debug formatting of matrices and vectors
//!
//! Renders the bordered ASCII-art table used when dumping numerical state
//! to a log or terminal: a ` -` border line, one `| v1 v2 ... |` line per
//! row with values to two decimals, and a closing ` -` line. Positive
//! values get a leading space where the minus sign would sit, so mixed-sign
//! columns stay aligned.
//!
//! This module performs no I/O; callers decide where the string goes.

use crate::traits::RealField;
use ndarray::{Array1, Array2};
use std::fmt::Write;

const BORDER: &str = " -\n";

fn push_value<T: RealField>(out: &mut String, v: T) {
    out.push(' ');
    if v >= T::zero() {
        out.push(' ');
    }
    // Display on a float honors the precision flag; writing to a String
    // cannot fail.
    let _ = write!(out, "{:.2}", v);
}

/// Format a matrix as a bordered two-decimal table.
pub fn format_matrix<T: RealField>(a: &Array2<T>) -> String {
    let (rows, cols) = a.dim();
    let mut out = String::from(BORDER);
    for i in 0..rows {
        out.push('|');
        for j in 0..cols {
            push_value(&mut out, a[[i, j]]);
        }
        out.push_str(" |\n");
    }
    out.push_str(BORDER);
    out
}

/// Format a vector as a single bordered row.
pub fn format_vector<T: RealField>(v: &Array1<T>) -> String {
    let mut out = String::from(BORDER);
    out.push('|');
    for i in 0..v.len() {
        push_value(&mut out, v[i]);
    }
    out.push_str(" |\n");
    out.push_str(BORDER);
    out
}
