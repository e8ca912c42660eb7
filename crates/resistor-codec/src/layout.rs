use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::table::BandRole;

use BandRole::{Digit, Multiplier, TempCo, Tolerance};

/// Band-count configuration of a resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BandLayout {
    Three,
    Four,
    Five,
    Six,
}

impl BandLayout {
    pub const ALL: [BandLayout; 4] = [
        BandLayout::Three,
        BandLayout::Four,
        BandLayout::Five,
        BandLayout::Six,
    ];

    /// Role of each band, left to right.
    pub const fn roles(&self) -> &'static [BandRole] {
        match self {
            BandLayout::Three => &[Digit, Digit, Multiplier],
            BandLayout::Four => &[Digit, Digit, Multiplier, Tolerance],
            BandLayout::Five => &[Digit, Digit, Digit, Multiplier, Tolerance],
            BandLayout::Six => &[Digit, Digit, Digit, Multiplier, Tolerance, TempCo],
        }
    }

    pub const fn band_count(&self) -> usize {
        self.roles().len()
    }

    /// Number of significant digits the layout can print.
    pub const fn digit_count(&self) -> usize {
        match self {
            BandLayout::Three | BandLayout::Four => 2,
            BandLayout::Five | BandLayout::Six => 3,
        }
    }

    pub fn position(&self, role: BandRole) -> Option<usize> {
        self.roles().iter().position(|r| *r == role)
    }

    pub fn has(&self, role: BandRole) -> bool {
        self.position(role).is_some()
    }
}

impl TryFrom<usize> for BandLayout {
    type Error = CodecError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            3 => Ok(BandLayout::Three),
            4 => Ok(BandLayout::Four),
            5 => Ok(BandLayout::Five),
            6 => Ok(BandLayout::Six),
            _ => Err(CodecError::InvalidBandCount { count }),
        }
    }
}

impl TryFrom<u8> for BandLayout {
    type Error = CodecError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        BandLayout::try_from(usize::from(count))
    }
}

impl From<BandLayout> for u8 {
    fn from(layout: BandLayout) -> u8 {
        layout.band_count() as u8
    }
}

impl FromStr for BandLayout {
    type Err = CodecError;

    /// Accepts "4" or "4-band".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_suffix("-band").unwrap_or(s);
        let count = digits
            .parse::<usize>()
            .map_err(|_| CodecError::InvalidNumber {
                input: s.to_string(),
            })?;
        BandLayout::try_from(count)
    }
}

impl fmt::Display for BandLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-band", self.band_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_follows_digits() {
        for layout in BandLayout::ALL {
            let roles = layout.roles();
            assert!(roles[..layout.digit_count()].iter().all(|r| *r == Digit));
            assert_eq!(layout.position(Multiplier), Some(layout.digit_count()));
            if let Some(tol) = layout.position(Tolerance) {
                assert_eq!(tol, layout.digit_count() + 1);
            }
        }
    }

    #[test]
    fn temp_co_only_on_six_band() {
        for layout in BandLayout::ALL {
            assert_eq!(layout.has(TempCo), layout == BandLayout::Six);
        }
        assert_eq!(BandLayout::Six.position(TempCo), Some(5));
        assert!(!BandLayout::Three.has(Tolerance));
    }

    #[test]
    fn parse_band_counts() {
        assert_eq!("3".parse::<BandLayout>().unwrap(), BandLayout::Three);
        assert_eq!("6-band".parse::<BandLayout>().unwrap(), BandLayout::Six);
        assert_eq!(
            "7".parse::<BandLayout>(),
            Err(CodecError::InvalidBandCount { count: 7 })
        );
        assert!("four".parse::<BandLayout>().is_err());
        assert_eq!(BandLayout::Five.to_string(), "5-band");
    }
}
