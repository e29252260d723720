//! Motion intents and indicator colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the drive directives the robot understands.
///
/// Serde uses the short wire form expected by the drive server ("cw" and
/// "ccw" for the rotations); [`fmt::Display`] uses the long spoken form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionIntent {
    Forward,
    Backward,
    Stop,
    Right,
    Left,
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
}

impl MotionIntent {
    /// Every intent, in the order they are announced to the user.
    pub const ALL: [MotionIntent; 7] = [
        MotionIntent::Forward,
        MotionIntent::Backward,
        MotionIntent::Stop,
        MotionIntent::Right,
        MotionIntent::Left,
        MotionIntent::Clockwise,
        MotionIntent::CounterClockwise,
    ];

    /// Short form sent to the drive server.
    pub fn wire_str(&self) -> &'static str {
        match self {
            MotionIntent::Forward => "forward",
            MotionIntent::Backward => "backward",
            MotionIntent::Stop => "stop",
            MotionIntent::Right => "right",
            MotionIntent::Left => "left",
            MotionIntent::Clockwise => "cw",
            MotionIntent::CounterClockwise => "ccw",
        }
    }
}

impl fmt::Display for MotionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotionIntent::Forward => "forward",
            MotionIntent::Backward => "backward",
            MotionIntent::Stop => "stop",
            MotionIntent::Right => "right",
            MotionIntent::Left => "left",
            MotionIntent::Clockwise => "clockwise",
            MotionIntent::CounterClockwise => "counter-clockwise",
        };
        f.write_str(name)
    }
}

/// Colors the indicator can show after a classified utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackColor {
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl fmt::Display for FeedbackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedbackColor::Red => "red",
            FeedbackColor::Green => "green",
            FeedbackColor::Yellow => "yellow",
            FeedbackColor::Orange => "orange",
            FeedbackColor::Blue => "blue",
        };
        f.write_str(name)
    }
}
