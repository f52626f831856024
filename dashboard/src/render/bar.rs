use super::theme::{
    paint,
    Theme,
};
use crossterm::style::ContentStyle;

pub const FULL_BLOCK: char = '█';
const EMPTY_BLOCK: char = '░';

/// Number of filled cells for `value` out of `maximum` over `width` cells.
///
/// The maximum is floored at 1. Values above the maximum are not clamped and overflow `width`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn fill_count(value: f64, maximum: f64, width: usize) -> usize {
    let ratio = value / maximum.max(1.0);
    (ratio * width as f64).floor().max(0.0) as usize
}

/// Horizontal bar: filled cells in `fill_style`, the rest as muted `░`.
pub fn bar(value: f64, maximum: f64, width: usize, glyph: char, fill_style: ContentStyle, theme: &Theme) -> String {
    let filled = fill_count(value, maximum, width);
    let empty = width.saturating_sub(filled);
    format!(
        "{}{}",
        paint(fill_style, glyph.to_string().repeat(filled)),
        paint(theme.muted, EMPTY_BLOCK.to_string().repeat(empty))
    )
}
