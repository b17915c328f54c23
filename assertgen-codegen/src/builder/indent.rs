/// Indentation unit for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, as rustfmt writes it.
    pub const RUST: Self = Self::Spaces(4);

    /// Append `level` units of indentation to `buf`.
    pub fn write_to(&self, buf: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => {
                buf.extend(std::iter::repeat_n(' ', level * usize::from(*width)));
            }
            Self::Tab => buf.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}
