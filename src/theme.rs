//! Border and separator glyph palettes.
//!
//! A theme is an ordered 12-glyph palette with fixed roles:
//!
//! ```text
//! index  0     1          2         3      4         5
//!        fill  horizontal vertical  cross  left tee  right tee
//! index  6         7        8          9            10          11
//!        top-left  top tee  top-right  bottom-left  bottom tee  bottom-right
//! ```
//!
//! Built-in palettes share this layout, so a table renders identically
//! under any of them apart from the glyphs themselves.

use std::str::FromStr;

use crate::error::{ThemeError, ThemeResult};

/// Number of glyph roles in a palette.
pub const PALETTE_LEN: usize = 12;

/// A 12-glyph border/separator palette, one `char` per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Padding between cell text and separators.
    pub fill: char,
    /// Horizontal rule glyph.
    pub horizontal: char,
    /// Vertical separator between cells.
    pub vertical: char,
    /// Inner junction where a rule crosses a column boundary.
    pub cross: char,
    /// Left edge of a mid-table rule when bordered.
    pub left_tee: char,
    /// Right edge of a mid-table rule when bordered.
    pub right_tee: char,
    /// Top-left corner of the border.
    pub top_left: char,
    /// Column junction in the top border.
    pub top_tee: char,
    /// Top-right corner of the border.
    pub top_right: char,
    /// Bottom-left corner of the border.
    pub bottom_left: char,
    /// Column junction in the bottom border.
    pub bottom_tee: char,
    /// Bottom-right corner of the border.
    pub bottom_right: char,
}

impl Theme {
    /// Dash/pipe glyphs throughout. The default.
    pub const ASCII: Self = Self {
        fill: ' ',
        horizontal: '-',
        vertical: '|',
        cross: '|',
        left_tee: '|',
        right_tee: '|',
        top_left: '|',
        top_tee: '|',
        top_right: '|',
        bottom_left: '|',
        bottom_tee: '|',
        bottom_right: '|',
    };

    /// Dashes only; corners and junctions blend into the rules.
    pub const MINIMAL: Self = Self {
        fill: ' ',
        horizontal: '-',
        vertical: ' ',
        cross: '-',
        left_tee: '-',
        right_tee: '-',
        top_left: '-',
        top_tee: '-',
        top_right: '-',
        bottom_left: '-',
        bottom_tee: '-',
        bottom_right: '-',
    };

    /// Light box-drawing glyphs.
    /// ```text
    /// ┌───┬───┐
    /// │   │   │
    /// ├───┼───┤
    /// └───┴───┘
    /// ```
    pub const LIGHT: Self = Self {
        fill: ' ',
        horizontal: '─',
        vertical: '│',
        cross: '┼',
        left_tee: '├',
        right_tee: '┤',
        top_left: '┌',
        top_tee: '┬',
        top_right: '┐',
        bottom_left: '└',
        bottom_tee: '┴',
        bottom_right: '┘',
    };

    /// Heavy box-drawing glyphs.
    /// ```text
    /// ┏━━━┳━━━┓
    /// ┃   ┃   ┃
    /// ┣━━━╋━━━┫
    /// ┗━━━┻━━━┛
    /// ```
    pub const HEAVY: Self = Self {
        fill: ' ',
        horizontal: '━',
        vertical: '┃',
        cross: '╋',
        left_tee: '┣',
        right_tee: '┫',
        top_left: '┏',
        top_tee: '┳',
        top_right: '┓',
        bottom_left: '┗',
        bottom_tee: '┻',
        bottom_right: '┛',
    };

    /// Double-line box-drawing glyphs.
    /// ```text
    /// ╔═══╦═══╗
    /// ║   ║   ║
    /// ╠═══╬═══╣
    /// ╚═══╩═══╝
    /// ```
    pub const DOUBLE: Self = Self {
        fill: ' ',
        horizontal: '═',
        vertical: '║',
        cross: '╬',
        left_tee: '╠',
        right_tee: '╣',
        top_left: '╔',
        top_tee: '╦',
        top_right: '╗',
        bottom_left: '╚',
        bottom_tee: '╩',
        bottom_right: '╝',
    };

    /// Builds a theme from a palette string, tolerating short input.
    ///
    /// A slot absent from the palette falls back to the horizontal-line
    /// glyph (role 1); a palette too short to carry role 1 falls back to
    /// `-`. For strict length checking use [`Theme::parse`].
    ///
    /// # Example
    ///
    /// ```
    /// use text_table::Theme;
    ///
    /// assert_eq!(Theme::from_palette(" -||||||||||"), Theme::ASCII);
    /// // Missing slots take the horizontal-line glyph.
    /// assert_eq!(Theme::from_palette(" ─"), Theme::from_palette(" ───────────"));
    /// ```
    pub fn from_palette(palette: &str) -> Self {
        let glyphs: Vec<char> = palette.chars().collect();
        let line = glyphs.get(1).copied().unwrap_or('-');
        let glyph = |i: usize| glyphs.get(i).copied().unwrap_or(line);
        Self {
            fill: glyph(0),
            horizontal: line,
            vertical: glyph(2),
            cross: glyph(3),
            left_tee: glyph(4),
            right_tee: glyph(5),
            top_left: glyph(6),
            top_tee: glyph(7),
            top_right: glyph(8),
            bottom_left: glyph(9),
            bottom_tee: glyph(10),
            bottom_right: glyph(11),
        }
    }

    /// Builds a theme from a palette string, requiring exactly
    /// [`PALETTE_LEN`] glyphs.
    pub fn parse(palette: &str) -> ThemeResult<Self> {
        if palette.is_empty() {
            return Err(ThemeError::EmptyPalette);
        }
        let len = palette.chars().count();
        if len != PALETTE_LEN {
            return Err(ThemeError::InvalidLength(len));
        }
        Ok(Self::from_palette(palette))
    }

    /// The palette string in role order.
    pub fn palette(&self) -> String {
        [
            self.fill,
            self.horizontal,
            self.vertical,
            self.cross,
            self.left_tee,
            self.right_tee,
            self.top_left,
            self.top_tee,
            self.top_right,
            self.bottom_left,
            self.bottom_tee,
            self.bottom_right,
        ]
        .iter()
        .collect()
    }

    /// Composes a horizontal rule across the given column widths.
    ///
    /// Each column contributes `width` horizontal glyphs; adjacent columns
    /// are joined with `line + junction + line`. Mid-table rules pass
    /// [`Theme::cross`]; border rules pass the top or bottom tee.
    pub fn rule(&self, widths: &[usize], junction: char) -> String {
        let line = self.horizontal;
        let joint: String = [line, junction, line].iter().collect();
        widths
            .iter()
            .map(|w| line.to_string().repeat(*w))
            .collect::<Vec<_>>()
            .join(&joint)
    }

    /// Wraps a composed row in border glyphs: `left + fill + row + fill +
    /// right`. Content rows frame with the vertical glyph and fill; rules
    /// frame with tees or corners and the horizontal glyph.
    pub fn frame(&self, row: &str, left: char, fill: char, right: char) -> String {
        format!("{left}{fill}{row}{fill}{right}")
    }

    /// The join placed between adjacent cells within a row.
    pub fn cell_join(&self) -> String {
        [self.fill, self.vertical, self.fill].iter().collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ASCII
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> ThemeResult<Self> {
        Self::parse(s)
    }
}
