use derive_more::Display;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// A country code rendered as a flag, or the code itself when it cannot be rendered.
#[derive(Debug, Clone, Display, PartialEq, Eq)]
pub enum Flag {
    /// Two regional indicator symbols.
    Glyph(String),
    /// The input, unchanged.
    Fallback(String),
}

impl Flag {
    /// Converts a two-letter ISO 3166 code (any case) into regional indicator symbols.
    pub fn from_code(code: &str) -> Self {
        let letters: Option<String> = (code.chars().count() == 2)
            .then(|| {
                code.chars()
                    .map(|letter| {
                        letter
                            .is_ascii_alphabetic()
                            .then(|| {
                                let offset = u32::from(letter.to_ascii_uppercase()) - u32::from('A');
                                char::from_u32(REGIONAL_INDICATOR_A + offset)
                            })
                            .flatten()
                    })
                    .collect()
            })
            .flatten();

        match letters {
            Some(glyph) => Flag::Glyph(glyph),
            None => {
                trace!(code, "Country code has no flag");
                Flag::Fallback(code.to_string())
            }
        }
    }

    pub fn is_glyph(&self) -> bool {
        matches!(self, Flag::Glyph(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn letters_become_regional_indicators() {
        assert_eq!(Flag::from_code("ID"), Flag::Glyph("🇮🇩".to_string()));
        assert_eq!(Flag::from_code("us"), Flag::Glyph("🇺🇸".to_string()));
        assert_eq!(Flag::from_code("Gb").to_string(), "🇬🇧");
    }

    #[test]
    fn glyph_is_two_code_points() {
        let Flag::Glyph(glyph) = Flag::from_code("JP") else {
            panic!("JP has a flag");
        };
        let points: Vec<u32> = glyph.chars().map(u32::from).collect();
        assert_eq!(points, vec![REGIONAL_INDICATOR_A + 9, REGIONAL_INDICATOR_A + 15]);
    }

    #[test]
    fn distinct_codes_give_distinct_flags() {
        assert_ne!(Flag::from_code("SG"), Flag::from_code("GS"));
    }

    #[test]
    fn unrenderable_codes_fall_back_unchanged() {
        for code in ["", "U", "USA", "U1", "??", "ÜS"] {
            let flag = Flag::from_code(code);
            assert_eq!(flag, Flag::Fallback(code.to_string()));
            assert!(!flag.is_glyph());
            assert_eq!(Flag::from_code(&flag.to_string()), flag);
        }
    }
}
