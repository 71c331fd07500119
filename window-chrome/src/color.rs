use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A packed `0xAARRGGBB` colour, as used by `android.graphics.Color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xff00_0000);
    pub const WHITE: Argb = Argb(0xffff_ffff);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// The same bits as a Java `int`
    pub const fn as_jint(self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Parses `#RRGGBB` (opaque) or `#AARRGGBB`
impl FromStr for Argb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Argb(0xff00_0000 | value)),
            8 => Ok(Argb(value)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_has_zero_alpha() {
        assert!(Argb::TRANSPARENT.is_transparent());
        assert_eq!(Argb::TRANSPARENT.as_jint(), 0);
        assert!(!Argb::BLACK.is_transparent());
        // Any colour with zero alpha counts, whatever its channels
        assert!(Argb(0x00ff_ffff).is_transparent());
    }

    #[test]
    fn jint_keeps_bits() {
        assert_eq!(Argb::WHITE.as_jint(), -1);
        assert_eq!(Argb::BLACK.as_jint(), 0xff00_0000_u32 as i32);
    }

    #[test]
    fn parse() {
        assert_eq!("#000000".parse::<Argb>().unwrap(), Argb::BLACK);
        assert_eq!("#00000000".parse::<Argb>().unwrap(), Argb::TRANSPARENT);
        assert_eq!(
            "#80102030".parse::<Argb>().unwrap(),
            Argb::from_argb(0x80, 0x10, 0x20, 0x30)
        );
        assert!("000000".parse::<Argb>().is_err());
        assert!("#12345".parse::<Argb>().is_err());
        assert!("#+1234567".parse::<Argb>().is_err());
        assert_eq!(Argb::from_argb(0x80, 0x10, 0x20, 0x30).to_string(), "#80102030");
    }
}
