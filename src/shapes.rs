use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle,
    #[strum(to_string = "star5", serialize = "star")]
    #[serde(rename = "star5", alias = "star")]
    Star,
    Square,
    Triangle,
}

impl Shape {
    /// Strokes with fewer samples score zero.
    pub fn min_points(&self) -> usize {
        match self {
            Self::Circle => 10,
            Self::Star => 15,
            Self::Square => 12,
            Self::Triangle => 10,
        }
    }

    pub fn too_short_message(&self) -> &'static str {
        match self {
            Self::Circle => "The stroke is too short. Try drawing a bigger circle.",
            Self::Star => "The stroke is too short. Try drawing a bigger star.",
            Self::Square => "The stroke is too short. Try drawing a bigger square.",
            Self::Triangle => "The stroke is too short. Try drawing a bigger triangle.",
        }
    }
}
