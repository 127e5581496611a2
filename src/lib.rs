//! Monospaced text table rendering.
//!
//! This crate turns a matrix of heterogeneous [`Value`]s into an aligned,
//! human-readable text table: per-column formatting and alignment, width
//! clamping with ellipsis truncation, optional header and footer rows, and
//! optional borders drawn from a themeable 12-glyph palette.
//!
//! # Features
//!
//! - **Column declarations**: skip a position ([`ColumnDecl::Absent`]),
//!   name it and infer the rest ([`ColumnDecl::Title`]), or specify
//!   everything ([`ColumnDecl::Spec`])
//! - **Cell formatting**: generic, fixed-decimal, and scaled-unit numeric
//!   formatters, plus caller-supplied functions
//! - **Width control**: natural widths with `max_width` clamping and
//!   `fixed_width` overrides
//! - **Themes**: ASCII, minimal, and light/heavy/double box-drawing
//!   palettes, or any custom 12-glyph palette
//!
//! Rendering is a pure function of its arguments: no I/O, no shared state,
//! and no failure mode — malformed input degrades to sentinel text.
//!
//! # Example
//!
//! ```
//! use text_table::{render_table_with_options, ColumnDecl, RenderOptions, Value};
//!
//! let data = vec![
//!     vec![Value::from("Apples"), Value::from(37.5), Value::from(33.129)],
//!     vec![Value::from("Bananas"), Value::from(4.246), Value::from(4.091)],
//!     vec![Value::from("Sum"), Value::from(100), Value::from(34.03)],
//! ];
//! let options = RenderOptions::new()
//!     .with_columns(vec![
//!         ColumnDecl::title("Fruits"),
//!         ColumnDecl::title("Max"),
//!         ColumnDecl::title("Avg"),
//!     ])
//!     .with_footer(true);
//!
//! assert_eq!(
//!     render_table_with_options(&data, &options),
//!     "Fruits  |    Max |   Avg\n\
//!      --------|--------|------\n\
//!      Apples  |  37.50 | 33.13\n\
//!      Bananas |   4.25 |  4.09\n\
//!      --------|--------|------\n\
//!      Sum     | 100.00 | 34.03\n",
//! );
//! ```

pub mod align;
pub mod column;
pub mod error;
pub mod format;
pub mod table;
pub mod theme;
pub mod value;
pub mod width;

// Re-export the public surface at the crate root
pub use align::{Alignment, ELLIPSIS};
pub use column::{resolve_columns, ColumnDecl, ColumnSpec, ResolvedColumn};
pub use error::{ThemeError, ThemeResult};
pub use format::{coerce_number, CellFormat};
pub use table::{
    render_table, render_table_with_columns, render_table_with_options, RenderOptions,
};
pub use theme::{Theme, PALETTE_LEN};
pub use value::Value;
pub use width::column_widths;
