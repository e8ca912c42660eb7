use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::table::{self, BandRole};

/// Band colors in spectrum order, followed by the metallic colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

impl Color {
    pub const ALL: [Color; 12] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Grey,
        Color::White,
        Color::Gold,
        Color::Silver,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Brown => "Brown",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Violet => "Violet",
            Color::Grey => "Grey",
            Color::White => "White",
            Color::Gold => "Gold",
            Color::Silver => "Silver",
        }
    }

    /// Approximate RGB of the painted band, for swatches.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Brown => (150, 90, 50),
            Color::Red => (255, 0, 0),
            Color::Orange => (255, 140, 0),
            Color::Yellow => (255, 255, 0),
            Color::Green => (0, 200, 0),
            Color::Blue => (0, 0, 255),
            Color::Violet => (128, 0, 128),
            Color::Grey => (128, 128, 128),
            Color::White => (255, 255, 255),
            Color::Gold => (255, 215, 0),
            Color::Silver => (192, 192, 192),
        }
    }

    /// Whether `number` is what this color stands for in some band role.
    fn has_value(self, number: &str) -> bool {
        let Ok(number) = Decimal::from_str(number) else {
            return false;
        };
        BandRole::ALL.iter().any(|&role| {
            table::lookup(role, self)
                .ok()
                .and_then(|value| Decimal::from_str(&value.to_string()).ok())
                == Some(number)
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = CodecError;

    /// Accepts a bare name ("gold") or a role label ("-1 Gold", "0.5 Green").
    ///
    /// A label's number must be the color's value in one of its roles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CodecError::UnknownColor {
            input: s.to_string(),
        };
        let mut words = s.split_whitespace();
        let (number, name) = match (words.next(), words.next(), words.next()) {
            (Some(name), None, None) => (None, name),
            (Some(number), Some(name), None) => (Some(number), name),
            _ => return Err(unknown()),
        };
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::Black,
            "brown" => Color::Brown,
            "red" => Color::Red,
            "orange" => Color::Orange,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "violet" | "purple" => Color::Violet,
            "grey" | "gray" => Color::Grey,
            "white" => Color::White,
            "gold" => Color::Gold,
            "silver" => Color::Silver,
            _ => return Err(unknown()),
        };
        match number {
            Some(number) if !color.has_value(number) => Err(unknown()),
            _ => Ok(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_labels() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("GRAY".parse::<Color>().unwrap(), Color::Grey);
        assert_eq!("-1 Gold".parse::<Color>().unwrap(), Color::Gold);
        assert_eq!("0.5 Green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("  Violet ".parse::<Color>().unwrap(), Color::Violet);
        assert_eq!("5 Gold".parse::<Color>().unwrap(), Color::Gold);
        assert_eq!("100 Brown".parse::<Color>().unwrap(), Color::Brown);
        assert_eq!("4 Yellow".parse::<Color>().unwrap(), Color::Yellow);
        assert_eq!("0.25 blue".parse::<Color>().unwrap(), Color::Blue);
    }

    #[test]
    fn label_number_must_match_color() {
        for input in ["9 Gold", "red gold", "5 Red", "-3 Silver", "1 2 Brown", "Red Red"] {
            assert!(
                matches!(input.parse::<Color>(), Err(CodecError::UnknownColor { .. })),
                "Expected error for '{}'",
                input
            );
        }
    }

    #[test]
    fn every_label_parses_back() {
        for role in BandRole::ALL {
            for color in table::colors(role) {
                let label = table::label(role, color).unwrap();
                assert_eq!(label.parse::<Color>().unwrap(), color, "label '{}'", label);
            }
        }
    }

    #[test]
    fn rejects_unknown_colors() {
        for input in ["", "pink", "4"] {
            assert!(
                matches!(input.parse::<Color>(), Err(CodecError::UnknownColor { .. })),
                "Expected error for '{}'",
                input
            );
        }
    }

    #[test]
    fn display_matches_name() {
        for color in Color::ALL {
            assert_eq!(color.to_string(), color.name());
            assert_eq!(color.name().parse::<Color>().unwrap(), color);
        }
    }
}
