//! Small, pure building blocks shared by the sections.

mod bar;
mod flag;
mod sparkline;
mod theme;

pub use bar::{
    bar,
    fill_count,
    FULL_BLOCK,
};
pub use flag::Flag;
use num_format::{
    Locale,
    ToFormattedString,
};
pub use sparkline::{
    sparkline,
    SPARK_GLYPHS,
};
pub use theme::{
    paint,
    Theme,
};

/// Whole dollars with thousands separators, e.g. `$1,300`. The sign is kept.
#[allow(clippy::cast_possible_truncation)]
pub fn whole_dollars(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}${}", rounded.unsigned_abs().to_formatted_string(&Locale::en))
}

/// Dollars and cents with an explicit prefix for negative amounts, e.g. `-$0.42`.
pub fn cents(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{currency}${:.2}", amount.abs())
    } else {
        format!("{currency}${amount:.2}")
    }
}

/// A stored percentage exactly as recorded, e.g. `92.86%`. Whole values keep one decimal: `100.0%`.
pub fn percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}%")
    } else {
        format!("{value}%")
    }
}

/// Truncates to `width` characters and pads with spaces on the right.
pub fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}
