use core::fmt;
use core::str::FromStr;

use super::ParseError;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs into `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_u32(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Parses `#RGB` or `#RRGGBB` (case-insensitive).
    ///
    /// The 3-digit form expands each nibble by doubling it: `#abc` → `#aabbcc`.
    pub fn from_hex(token: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidFormat(token.to_string());

        let digits = token.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::from_u32(value)),
            3 => {
                let expand = |nibble: u32| {
                    let nibble = (nibble & 0xF) as u8;
                    (nibble << 4) | nibble
                };
                Ok(Self::new(expand(value >> 8), expand(value >> 4), expand(value)))
            }
            _ => Err(invalid()),
        }
    }

    pub(crate) fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_doubles_each_nibble() {
        assert_eq!(Rgb::from_hex("#abc"), Ok(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(Rgb::from_hex("#FFF"), Ok(Rgb::WHITE));
    }

    #[test]
    fn long_hex_and_display() {
        let color = Rgb::from_hex("#54BF90").unwrap();
        assert_eq!(color, Rgb::new(0x54, 0xBF, 0x90));
        assert_eq!(color.to_string(), "#54bf90");
    }

    #[test]
    fn rejects_malformed_hex() {
        for token in ["54bf90", "#54bf9", "#ggg", "#", "#+12", "#1234567"] {
            assert!(Rgb::from_hex(token).is_err(), "{token} should be rejected");
        }
    }
}
