use serde::{Deserialize, Serialize};
use std::fmt;

/// Named print sizes offered on the admin print dialog.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintSize {
    #[serde(rename = "small")]
    Small,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "large")]
    Large,
    #[serde(rename = "x-large")]
    XLarge,
    #[serde(rename = "xx-large")]
    XxLarge,
}

impl PrintSize {
    /// Edge length of the rendered square image, in pixels.
    pub fn pixels(&self) -> u32 {
        match self {
            PrintSize::Small => 100,
            PrintSize::Medium => 200,
            PrintSize::Large => 300,
            PrintSize::XLarge => 400,
            PrintSize::XxLarge => 500,
        }
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintSize::Small => write!(f, "small"),
            PrintSize::Medium => write!(f, "medium"),
            PrintSize::Large => write!(f, "large"),
            PrintSize::XLarge => write!(f, "x-large"),
            PrintSize::XxLarge => write!(f, "xx-large"),
        }
    }
}
