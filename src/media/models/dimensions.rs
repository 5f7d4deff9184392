use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Pixel size of a generated image. Parsed from and printed as `WxH`, which is
/// also the format the image API expects for its `size` field. Serialized as
/// `{ "width", "height" }`; deserializes from either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DimensionsRepr")]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub const fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((width, height)) = s.trim().split_once('x') else {
            return Err(format!("size must look like 512x512, got {:?}", s));
        };

        let (Ok(width), Ok(height)) = (width.parse::<u16>(), height.parse::<u16>()) else {
            return Err(format!("size must look like 512x512, got {:?}", s));
        };

        if width == 0 || height == 0 {
            return Err(format!("size must be non-zero, got {:?}", s));
        }

        Ok(Self { width, height })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionsRepr {
    Text(String),
    Object { width: u16, height: u16 },
}

impl TryFrom<DimensionsRepr> for Dimensions {
    type Error = String;

    fn try_from(value: DimensionsRepr) -> Result<Self, Self::Error> {
        match value {
            DimensionsRepr::Text(text) => text.parse(),
            DimensionsRepr::Object { width, height } => Ok(Self { width, height }),
        }
    }
}
