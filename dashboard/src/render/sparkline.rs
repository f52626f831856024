pub const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Maps every value to one of eight block heights, each repeated `width` times.
///
/// The smallest value gets the lowest block and the largest the highest. When all values are
/// equal the range is taken as 1 and everything sits at the bottom.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sparkline(values: &[f64], width: usize) -> String {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return String::new();
    };
    let max = values.iter().copied().fold(min, f64::max);
    let range = if max - min > 0.0 { max - min } else { 1.0 };
    let top = SPARK_GLYPHS.len() - 1;

    values
        .iter()
        .map(|value| {
            let level = (((value - min) / range) * top as f64).floor().max(0.0) as usize;
            SPARK_GLYPHS[level.min(top)].to_string().repeat(width)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rising_series_spans_bottom_to_top() {
        assert_eq!(sparkline(&[1.0, 2.0, 3.0], 1), "▁▄█");
    }

    #[test]
    fn width_repeats_each_glyph() {
        let values = [4.0, 0.0, 9.0, 9.0, 2.0];
        let line = sparkline(&values, 3);
        let glyphs: Vec<char> = line.chars().collect();
        assert_eq!(glyphs.len(), values.len() * 3);
        for block in glyphs.chunks(3) {
            assert!(SPARK_GLYPHS.contains(&block[0]));
            assert!(block.iter().all(|glyph| *glyph == block[0]));
        }
        assert_eq!(glyphs[3], '▁');
        assert_eq!(glyphs[6], '█');
    }

    #[test]
    fn flat_series_sits_at_the_bottom() {
        assert_eq!(sparkline(&[5.0, 5.0, 5.0], 2), "▁▁▁▁▁▁");
    }

    #[test]
    fn empty_series_is_empty() {
        assert_eq!(sparkline(&[], 2), "");
    }
}
