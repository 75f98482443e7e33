//! Foundation types for the impsort analysis core.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`LineRange`] - The lines a statement occupies
//!
//! This module has NO dependencies on other impsort modules.

mod line_index;

pub use line_index::{LineCol, LineIndex, LineRange};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};

/// Slice `text` at a byte `range`.
///
/// Thin helper so call sites never repeat the `TextRange` → `Range<usize>`
/// conversion.
#[inline]
pub fn range_text(text: &str, range: TextRange) -> &str {
    &text[std::ops::Range::<usize>::from(range)]
}
