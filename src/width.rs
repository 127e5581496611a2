//! Effective column width computation.
//!
//! Runs once per render, on formatted but not-yet-aligned text, so that
//! truncation decisions later in the pipeline see the final clamped width.

use crate::column::ResolvedColumn;

/// Computes the effective width of each resolved column.
///
/// The natural width is the maximum of the title length and every formatted
/// cell length in the column. `max_width` clamps it from above; it never
/// forces padding beyond the natural width. `fixed_width` overrides the
/// result entirely.
///
/// `formatted` is indexed by resolved column position, not by data-matrix
/// position.
pub fn column_widths(columns: &[ResolvedColumn], formatted: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            if let Some(fixed) = column.spec.fixed_width {
                return fixed;
            }
            let natural = formatted
                .iter()
                .map(|row| row[i].chars().count())
                .fold(column.spec.title.chars().count(), usize::max);
            match column.spec.max_width {
                Some(max) => natural.min(max),
                None => natural,
            }
        })
        .collect()
}
