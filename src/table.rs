//! The table assembler: one linear pass from raw values to rendered text.
//!
//! Pipeline order per render call: resolve columns → format cells →
//! compute widths → align cells and header text → extract header/footer →
//! compose rules and borders → join lines. No stage depends on a later
//! one, nothing is cached across calls.

use crate::column::{resolve_columns, ColumnDecl, ResolvedColumn};
use crate::format::CellFormat;
use crate::theme::Theme;
use crate::value::Value;
use crate::width::column_widths;

/// Flags and strategy choices for one render call.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Promote the first data row to the header. Ignored when explicit
    /// column declarations are given or the matrix is empty.
    pub header: bool,
    /// Re-emit the last body row below an extra separator as a footer.
    pub footer: bool,
    /// Draw an outer border around the table.
    pub border: bool,
    /// Glyph palette for separators and borders.
    pub theme: Theme,
    /// Column declarations, used when none are passed positionally.
    pub columns: Option<Vec<ColumnDecl>>,
}

impl RenderOptions {
    /// Default options: no header, no footer, no border, ASCII theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header flag.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets the footer flag.
    pub fn with_footer(mut self, footer: bool) -> Self {
        self.footer = footer;
        self
    }

    /// Sets the border flag.
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the column declarations.
    pub fn with_columns(mut self, columns: impl Into<Vec<ColumnDecl>>) -> Self {
        self.columns = Some(columns.into());
        self
    }
}

/// Renders the body only: no header, default theme, no border.
///
/// # Example
///
/// ```
/// use text_table::{render_table, Value};
///
/// let data = vec![vec![Value::from(1)], vec![Value::from(2)]];
/// assert_eq!(render_table(&data), "1.00\n2.00\n");
/// assert_eq!(render_table(&[]), "\n");
/// ```
pub fn render_table(data: &[Vec<Value>]) -> String {
    render(data, None, &RenderOptions::default())
}

/// Renders with a header built from the given column declarations.
///
/// The header is emitted even when the matrix has zero rows.
///
/// # Example
///
/// ```
/// use text_table::{render_table_with_columns, ColumnDecl, Value};
///
/// let data = vec![
///     vec![Value::from("Apples"), Value::from(37.5)],
///     vec![Value::from("Bananas"), Value::from(4.246)],
/// ];
/// let columns = [ColumnDecl::title("Fruits"), ColumnDecl::title("Max")];
/// assert_eq!(
///     render_table_with_columns(&data, &columns),
///     "Fruits  |   Max\n\
///      --------|------\n\
///      Apples  | 37.50\n\
///      Bananas |  4.25\n",
/// );
/// ```
pub fn render_table_with_columns(data: &[Vec<Value>], columns: &[ColumnDecl]) -> String {
    render(data, Some(columns), &RenderOptions::default())
}

/// Renders with explicit options; column declarations are taken from
/// [`RenderOptions::columns`] when present.
///
/// # Example
///
/// ```
/// use text_table::{render_table_with_options, ColumnDecl, RenderOptions, Theme, Value};
///
/// let data = vec![vec![Value::from("Apples"), Value::from(37.5)]];
/// let options = RenderOptions::new()
///     .with_columns(vec![ColumnDecl::title("Fruits"), ColumnDecl::title("Max")])
///     .with_border(true)
///     .with_theme(Theme::LIGHT);
/// assert_eq!(
///     render_table_with_options(&data, &options),
///     "┌────────┬───────┐\n\
///      │ Fruits │   Max │\n\
///      ├────────┼───────┤\n\
///      │ Apples │ 37.50 │\n\
///      └────────┴───────┘\n",
/// );
/// ```
pub fn render_table_with_options(data: &[Vec<Value>], options: &RenderOptions) -> String {
    render(data, options.columns.as_deref(), options)
}

fn render(data: &[Vec<Value>], decls: Option<&[ColumnDecl]>, options: &RenderOptions) -> String {
    // Header flag: the first data row becomes the title row. Explicit
    // declarations win.
    let mut promoted: Option<Vec<ColumnDecl>> = None;
    let (decls, data) = if decls.is_none() && options.header && !data.is_empty() {
        promoted = Some(
            data[0]
                .iter()
                .map(|v| ColumnDecl::Title(CellFormat::Generic.apply(v)))
                .collect(),
        );
        (promoted.as_deref(), &data[1..])
    } else {
        (decls, data)
    };

    let columns = resolve_columns(decls, data.first().map(Vec::as_slice));
    let formatted = format_rows(data, &columns);
    let widths = column_widths(&columns, &formatted);

    let theme = &options.theme;
    let join = theme.cell_join();
    let content_row = |cells: Vec<String>| {
        let row = cells.join(&join);
        if options.border {
            theme.frame(&row, theme.vertical, theme.fill, theme.vertical)
        } else {
            row
        }
    };

    let mut body: Vec<String> = formatted
        .iter()
        .map(|row| {
            content_row(
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, c)| c.spec.align.apply(&row[i], widths[i]))
                    .collect(),
            )
        })
        .collect();

    let separator = {
        let rule = theme.rule(&widths, theme.cross);
        if options.border {
            theme.frame(&rule, theme.left_tee, theme.horizontal, theme.right_tee)
        } else {
            rule
        }
    };

    let mut lines: Vec<String> = Vec::new();
    if options.border {
        lines.push(theme.frame(
            &theme.rule(&widths, theme.top_tee),
            theme.top_left,
            theme.horizontal,
            theme.top_right,
        ));
    }
    if decls.is_some() {
        let titles = columns
            .iter()
            .enumerate()
            .map(|(i, c)| c.spec.title_alignment().apply(&c.spec.title, widths[i]))
            .collect();
        lines.push(content_row(titles));
        lines.push(separator.clone());
    }
    let footer = if options.footer { body.pop() } else { None };
    lines.extend(body);
    if let Some(footer) = footer {
        lines.push(separator);
        lines.push(footer);
    }
    if options.border {
        lines.push(theme.frame(
            &theme.rule(&widths, theme.bottom_tee),
            theme.bottom_left,
            theme.horizontal,
            theme.bottom_right,
        ));
    }

    lines.join("\n") + "\n"
}

/// Formats every cell of every row, per resolved column. A row shorter
/// than a column's source index contributes [`Value::Undefined`].
fn format_rows(data: &[Vec<Value>], columns: &[ResolvedColumn]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| c.spec.format.apply(row.get(c.source).unwrap_or(&Value::Undefined)))
                .collect()
        })
        .collect()
}
