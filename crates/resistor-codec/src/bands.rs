use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::CodecError;

const UNSET: &str = "-";

/// Band selections in printed order. `None` marks a band left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bands(Vec<Option<Color>>);

impl Bands {
    pub fn new(bands: Vec<Option<Color>>) -> Self {
        Self(bands)
    }

    /// Parse one selection per item; "-", "none" and "" leave a band unset.
    pub fn parse_each<I, S>(items: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| parse_selection(item.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn into_inner(self) -> Vec<Option<Color>> {
        self.0
    }
}

fn parse_selection(s: &str) -> Result<Option<Color>, CodecError> {
    let s = s.trim();
    if s.is_empty() || s == UNSET || s.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

impl Deref for Bands {
    type Target = [Option<Color>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Option<Color>>> for Bands {
    fn from(bands: Vec<Option<Color>>) -> Self {
        Self(bands)
    }
}

impl From<Vec<Color>> for Bands {
    fn from(bands: Vec<Color>) -> Self {
        Self(bands.into_iter().map(Some).collect())
    }
}

impl FromStr for Bands {
    type Err = CodecError;

    /// Whitespace or comma separated color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_each(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty()),
        )
    }
}

impl fmt::Display for Bands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, band) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match band {
                Some(color) => write!(f, "{color}")?,
                None => f.write_str(UNSET)?,
            }
        }
        Ok(())
    }
}
