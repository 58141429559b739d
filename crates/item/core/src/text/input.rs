//! Splitting user input like `"Spectral Lantern" #54bf90` into text and color.

use super::TextField;
use crate::color::{ColorSpec, parse_color};

/// Splits a trailing color or gradient token off `input`.
///
/// The last whitespace-separated token is taken as the color when it parses;
/// otherwise the whole input is text and `default` is used. One pair of
/// surrounding double quotes is removed from the text.
pub fn parse_styled_input(input: &str, default: ColorSpec) -> (String, ColorSpec) {
    let input = input.trim();

    let (text, color) = match input.rsplit_once(char::is_whitespace) {
        Some((text, token)) => match parse_color(token) {
            Ok(color) => (text.trim_end(), color),
            Err(_) => (input, default),
        },
        None => match parse_color(input) {
            Ok(color) => ("", color),
            Err(_) => (input, default),
        },
    };

    (strip_quotes(text).to_string(), color)
}

impl TextField {
    /// Builds a field from user input; see [`parse_styled_input`].
    pub fn from_input(input: &str, default: ColorSpec) -> Self {
        let (template, color) = parse_styled_input(input, default);
        Self::new(template, color)
    }
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GradientDirection, Rgb};

    #[test]
    fn trailing_solid_color() {
        let (text, color) = parse_styled_input("Spectral Lantern #54bf90", ColorSpec::WHITE);
        assert_eq!(text, "Spectral Lantern");
        assert_eq!(color, ColorSpec::Solid(Rgb::new(0x54, 0xBF, 0x90)));
    }

    #[test]
    fn trailing_short_color_expands() {
        let (_, color) = parse_styled_input("Paxel #3fb", ColorSpec::WHITE);
        assert_eq!(color, ColorSpec::Solid(Rgb::new(0x33, 0xFF, 0xBB)));
    }

    #[test]
    fn trailing_gradient_with_arrow() {
        let (text, color) = parse_styled_input("\"The True Multi-Tool\" #00bbcc-#33ffbb<>", ColorSpec::WHITE);
        assert_eq!(text, "The True Multi-Tool");
        assert!(matches!(
            color,
            ColorSpec::Gradient {
                direction: GradientDirection::CenterToEnds,
                ..
            }
        ));
    }

    #[test]
    fn no_color_uses_default() {
        let (text, color) = parse_styled_input("  just words  ", ColorSpec::Solid(Rgb::BLACK));
        assert_eq!(text, "just words");
        assert_eq!(color, ColorSpec::Solid(Rgb::BLACK));
    }

    #[test]
    fn lone_color_gives_empty_text() {
        let field = TextField::from_input("#fff", ColorSpec::Solid(Rgb::BLACK));
        assert_eq!(field.template, "");
        assert_eq!(field.color, ColorSpec::WHITE);
    }

    #[test]
    fn quotes_only_stripped_in_pairs() {
        let (text, _) = parse_styled_input("\"half quoted", ColorSpec::WHITE);
        assert_eq!(text, "\"half quoted");
    }
}
