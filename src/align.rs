//! Padding and ellipsis truncation of display text to a column width.
//!
//! Widths count characters, not display columns; the renderer makes no
//! attempt at wide-character awareness beyond `chars().count()`.

/// Glyph substituted for the truncated end of overlong text.
pub const ELLIPSIS: char = '…';

/// An alignment policy, `(text, width) → text`.
///
/// The result is exactly `width` characters long whenever `width` is a
/// workable positive size. A degenerate width of zero returns the original
/// text unmodified rather than mutilating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pad on the right; truncate by keeping the leading characters and
    /// appending the ellipsis.
    #[default]
    Left,
    /// Pad on the left; truncate by keeping the trailing characters and
    /// prepending the ellipsis.
    Right,
}

impl Alignment {
    /// Pads or truncates `text` to exactly `width` characters.
    ///
    /// # Example
    ///
    /// ```
    /// use text_table::Alignment;
    ///
    /// assert_eq!(Alignment::Left.apply("some", 7), "some   ");
    /// assert_eq!(Alignment::Left.apply("some", 2), "s…");
    /// assert_eq!(Alignment::Right.apply("1.23", 5), " 1.23");
    /// assert_eq!(Alignment::Right.apply("1.23", 2), "…3");
    /// ```
    pub fn apply(&self, text: &str, width: usize) -> String {
        let len = text.chars().count();
        if len <= width {
            let pad = " ".repeat(width - len);
            return match self {
                Self::Left => format!("{text}{pad}"),
                Self::Right => format!("{pad}{text}"),
            };
        }
        if width == 0 {
            return text.to_string();
        }
        match self {
            Self::Left => {
                let kept: String = text.chars().take(width - 1).collect();
                format!("{kept}{ELLIPSIS}")
            }
            Self::Right => {
                let kept: String = text.chars().skip(len - (width - 1)).collect();
                format!("{ELLIPSIS}{kept}")
            }
        }
    }
}
