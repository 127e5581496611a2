//! Column declarations and their resolution into concrete specifications.
//!
//! A caller describes each column position with a [`ColumnDecl`]: skip it
//! entirely (`Absent`), name it and let the renderer infer the rest
//! (`Title`), or spell everything out (`Spec`). The resolver turns the
//! declaration list — or its absence — into an ordered list of
//! [`ResolvedColumn`]s that the rest of the pipeline consumes.

use crate::align::Alignment;
use crate::format::CellFormat;
use crate::value::Value;

/// A caller-supplied instruction for one column position.
#[derive(Debug, Clone)]
pub enum ColumnDecl {
    /// This position is not rendered at all: no header cell, no data cells,
    /// no width. Subsequent positions keep their data-matrix indices.
    Absent,
    /// A display name; format and alignment are inferred from the first
    /// data row's value at the same position.
    Title(String),
    /// A fully specified column.
    Spec(ColumnSpec),
}

impl ColumnDecl {
    /// Shorthand for [`ColumnDecl::Title`].
    pub fn title(title: impl Into<String>) -> Self {
        Self::Title(title.into())
    }
}

impl From<&str> for ColumnDecl {
    fn from(title: &str) -> Self {
        Self::Title(title.to_string())
    }
}

impl From<String> for ColumnDecl {
    fn from(title: String) -> Self {
        Self::Title(title)
    }
}

impl From<ColumnSpec> for ColumnDecl {
    fn from(spec: ColumnSpec) -> Self {
        Self::Spec(spec)
    }
}

/// A fully resolved column specification.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Header text for the column.
    pub title: String,
    /// Formatter applied to every cell in the column.
    pub format: CellFormat,
    /// Alignment for body cells.
    pub align: Alignment,
    /// Alignment for the header cell; defaults to `align` when unset.
    pub title_align: Option<Alignment>,
    /// Upper bound on the column width. Clamps only; never pads beyond the
    /// natural width.
    pub max_width: Option<usize>,
    /// Exact column width. Overrides the natural width unconditionally,
    /// forcing both truncation and padding.
    pub fixed_width: Option<usize>,
}

impl ColumnSpec {
    /// A left-aligned text column with generic formatting.
    pub fn string(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            format: CellFormat::Generic,
            align: Alignment::Left,
            title_align: None,
            max_width: None,
            fixed_width: None,
        }
    }

    /// A right-aligned text column with generic formatting.
    pub fn string_right(title: impl Into<String>) -> Self {
        Self {
            align: Alignment::Right,
            ..Self::string(title)
        }
    }

    /// A right-aligned numeric column with the given number of fixed
    /// decimal places.
    pub fn number(title: impl Into<String>, places: u32) -> Self {
        Self {
            format: CellFormat::Fixed(places),
            align: Alignment::Right,
            ..Self::string(title)
        }
    }

    /// Sets the formatter.
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the body alignment.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Sets a header alignment distinct from the body alignment.
    pub fn with_title_align(mut self, align: Alignment) -> Self {
        self.title_align = Some(align);
        self
    }

    /// Sets the maximum width.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Sets a fixed width.
    pub fn with_fixed_width(mut self, width: usize) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// The alignment used for the header cell.
    pub fn title_alignment(&self) -> Alignment {
        self.title_align.unwrap_or(self.align)
    }
}

/// A resolved column together with the data-matrix index it reads from.
///
/// `source` survives `Absent` declarations: dropping column N leaves
/// column N+1 reading data position N+1.
#[derive(Debug, Clone)]
pub struct ResolvedColumn {
    /// Index into each data row.
    pub source: usize,
    /// The resolved specification.
    pub spec: ColumnSpec,
}

/// Resolves declarations (or their absence) into the concrete column list.
///
/// - No declarations: one title-less default per position of the first row.
/// - Declarations shorter than the first row: trailing positions are padded
///   with inferred defaults.
/// - `Title` infers from the first row's value at the same position —
///   numeric values select a right-aligned two-decimal column, anything
///   else a left-aligned generic one.
/// - `Absent` positions are skipped without renumbering later positions.
pub fn resolve_columns(
    decls: Option<&[ColumnDecl]>,
    first_row: Option<&[Value]>,
) -> Vec<ResolvedColumn> {
    let data_width = first_row.map_or(0, <[Value]>::len);
    let decl_width = decls.map_or(0, <[ColumnDecl]>::len);
    let total = match decls {
        Some(_) => decl_width.max(data_width),
        None => data_width,
    };

    let mut columns = Vec::with_capacity(total);
    for source in 0..total {
        let sample = first_row.and_then(|row| row.get(source));
        let spec = match decls.and_then(|d| d.get(source)) {
            Some(ColumnDecl::Absent) => continue,
            Some(ColumnDecl::Spec(spec)) => spec.clone(),
            Some(ColumnDecl::Title(title)) => infer(title, sample),
            None => infer("", sample),
        };
        columns.push(ResolvedColumn { source, spec });
    }
    columns
}

/// Default specification for a title-only declaration.
fn infer(title: &str, sample: Option<&Value>) -> ColumnSpec {
    if sample.is_some_and(Value::is_numeric) {
        ColumnSpec::number(title, 2)
    } else {
        ColumnSpec::string(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[Value]) -> Vec<Value> {
        values.to_vec()
    }

    #[test]
    fn test_no_declarations_synthesizes_from_first_row() {
        let first = row(&[Value::from("Apples"), Value::from(37.5)]);
        let columns = resolve_columns(None, Some(&first));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].source, 0);
        assert_eq!(columns[0].spec.align, Alignment::Left);
        assert_eq!(columns[1].source, 1);
        assert_eq!(columns[1].spec.align, Alignment::Right);
        assert!(columns.iter().all(|c| c.spec.title.is_empty()));
    }

    #[test]
    fn test_no_declarations_empty_matrix() {
        assert!(resolve_columns(None, None).is_empty());
    }

    #[test]
    fn test_title_inference_numeric_vs_text() {
        let first = row(&[Value::from("Apples"), Value::from(37.5)]);
        let decls = [ColumnDecl::title("Fruits"), ColumnDecl::title("Max")];
        let columns = resolve_columns(Some(&decls), Some(&first));
        assert_eq!(columns[0].spec.title, "Fruits");
        assert_eq!(columns[0].spec.align, Alignment::Left);
        assert_eq!(columns[1].spec.align, Alignment::Right);
        assert!(matches!(columns[1].spec.format, CellFormat::Fixed(2)));
    }

    #[test]
    fn test_absent_preserves_source_indices() {
        let first = row(&[Value::from("Apples"), Value::from(37.5), Value::from(33.1)]);
        let decls = [
            ColumnDecl::Absent,
            ColumnDecl::title("Max"),
            ColumnDecl::title("Avg"),
        ];
        let columns = resolve_columns(Some(&decls), Some(&first));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].source, 1);
        assert_eq!(columns[0].spec.title, "Max");
        assert_eq!(columns[1].source, 2);
        assert_eq!(columns[1].spec.title, "Avg");
    }

    #[test]
    fn test_short_declarations_padded_with_defaults() {
        let first = row(&[Value::from("Apples"), Value::from(37.5), Value::from(33.1)]);
        let decls = [ColumnDecl::title("Fruits")];
        let columns = resolve_columns(Some(&decls), Some(&first));
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1].spec.title, "");
        assert_eq!(columns[1].spec.align, Alignment::Right);
        assert_eq!(columns[2].source, 2);
    }

    #[test]
    fn test_declarations_longer_than_data() {
        let first = row(&[Value::from("Apples")]);
        let decls = [ColumnDecl::title("Fruits"), ColumnDecl::title("Max")];
        let columns = resolve_columns(Some(&decls), Some(&first));
        assert_eq!(columns.len(), 2);
        // No sample value at position 1: defaults to a text column.
        assert_eq!(columns[1].spec.align, Alignment::Left);
    }

    #[test]
    fn test_declarations_with_empty_matrix() {
        let decls = [ColumnDecl::title("Fruits"), ColumnDecl::title("Max")];
        let columns = resolve_columns(Some(&decls), None);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn test_spec_passes_through() {
        let spec = ColumnSpec::number("Max", 3).with_max_width(4);
        let decls = [ColumnDecl::from(spec)];
        let columns = resolve_columns(Some(&decls), None);
        assert!(matches!(columns[0].spec.format, CellFormat::Fixed(3)));
        assert_eq!(columns[0].spec.max_width, Some(4));
    }

    #[test]
    fn test_title_alignment_defaults_to_body() {
        let spec = ColumnSpec::number("Max", 2);
        assert_eq!(spec.title_alignment(), Alignment::Right);
        let spec = spec.with_title_align(Alignment::Left);
        assert_eq!(spec.title_alignment(), Alignment::Left);
    }
}
