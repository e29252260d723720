//! Keyword classifier for transcribed drive commands

use crate::{FeedbackColor, FeedbackPolicy, MotionIntent};

/// Ordered keyword rules, evaluated first-match-wins.
///
/// The "count" rule must stay ahead of the "clock" rule: a spoken
/// "counter-clockwise" transcript also contains the substring "clock".
pub const RULES: &[(&[&str], MotionIntent)] = &[
    (&["stop", "halt", "idle"], MotionIntent::Stop),
    (&["forward", "fore"], MotionIntent::Forward),
    (&["back"], MotionIntent::Backward),
    (&["right", "rite"], MotionIntent::Right),
    (&["left"], MotionIntent::Left),
    (&["count"], MotionIntent::CounterClockwise),
    (&["clock"], MotionIntent::Clockwise),
];

/// Result of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The drive intent to dispatch.
    pub intent: MotionIntent,
    /// The keyword that selected the intent, `None` on the fallback path.
    pub matched: Option<&'static str>,
}

impl Classification {
    /// Whether this came from the unrecognized-input fallback.
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }

    /// Indicator color to show for this classification.
    pub fn feedback_color(&self, policy: FeedbackPolicy) -> FeedbackColor {
        if self.is_fallback() && policy.distinct_fallback {
            return FeedbackColor::Blue;
        }
        match self.intent {
            MotionIntent::Stop => FeedbackColor::Red,
            MotionIntent::Forward | MotionIntent::Backward => FeedbackColor::Green,
            MotionIntent::Right | MotionIntent::Left => FeedbackColor::Yellow,
            MotionIntent::Clockwise | MotionIntent::CounterClockwise => FeedbackColor::Orange,
        }
    }
}

/// Map one utterance to a drive intent.
///
/// Case-insensitive substring containment over [`RULES`]. Total over all
/// strings: input that matches no keyword falls back to stop.
pub fn classify(utterance: &str) -> Classification {
    let text = utterance.to_lowercase();
    for (keywords, intent) in RULES {
        for &keyword in *keywords {
            if text.contains(keyword) {
                return Classification {
                    intent: *intent,
                    matched: Some(keyword),
                };
            }
        }
    }
    tracing::debug!("did not understand {:?}, falling back to stop", utterance);
    Classification {
        intent: MotionIntent::Stop,
        matched: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_keywords() {
        for text in ["stop right there", "halt", "please idle for a bit"] {
            assert_eq!(classify(text).intent, MotionIntent::Stop);
            assert!(!classify(text).is_fallback());
        }
    }

    #[test]
    fn test_forward_and_backward() {
        assert_eq!(classify("go fore please").intent, MotionIntent::Forward);
        assert_eq!(classify("drive forward").intent, MotionIntent::Forward);
        assert_eq!(classify("back it up").intent, MotionIntent::Backward);
    }

    #[test]
    fn test_turns() {
        assert_eq!(classify("turn right").intent, MotionIntent::Right);
        assert_eq!(classify("turn rite").intent, MotionIntent::Right);
        assert_eq!(classify("hang a left").intent, MotionIntent::Left);
    }

    #[test]
    fn test_counter_clockwise_not_clockwise() {
        let c = classify("turn counter-clockwise now");
        assert_eq!(c.intent, MotionIntent::CounterClockwise);
        assert_eq!(classify("turn clockwise").intent, MotionIntent::Clockwise);
        // speech engines often split the word
        assert_eq!(
            classify("counter clockwise").intent,
            MotionIntent::CounterClockwise
        );
    }

    #[test]
    fn test_rule_table_ordering() {
        // the ccw rule must be evaluated before the cw rule
        let ccw = RULES
            .iter()
            .position(|(_, i)| *i == MotionIntent::CounterClockwise)
            .unwrap();
        let cw = RULES
            .iter()
            .position(|(_, i)| *i == MotionIntent::Clockwise)
            .unwrap();
        assert!(ccw < cw);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("STOP").intent, MotionIntent::Stop);
        assert_eq!(classify("Go Forward").intent, MotionIntent::Forward);
    }

    #[test]
    fn test_fallback() {
        let c = classify("banana");
        assert_eq!(c.intent, MotionIntent::Stop);
        assert!(c.is_fallback());
        assert!(classify("").is_fallback());
    }

    #[test]
    fn test_total_and_deterministic() {
        let inputs = [
            "banana",
            "stop",
            "go fore",
            "back",
            "right",
            "left",
            "clockwise",
            "counter-clockwise",
            "",
            "!!@#$%^",
            "\u{1F916} beep boop",
        ];
        for text in inputs {
            let first = classify(text);
            assert_eq!(first, classify(text));
            assert!(MotionIntent::ALL.contains(&first.intent));
        }
    }

    #[test]
    fn test_feedback_colors() {
        let policy = FeedbackPolicy::default();
        assert_eq!(
            classify("stop").feedback_color(policy),
            FeedbackColor::Red
        );
        assert_eq!(
            classify("forward").feedback_color(policy),
            FeedbackColor::Green
        );
        assert_eq!(
            classify("back up").feedback_color(policy),
            FeedbackColor::Green
        );
        assert_eq!(
            classify("turn left").feedback_color(policy),
            FeedbackColor::Yellow
        );
        assert_eq!(
            classify("clockwise").feedback_color(policy),
            FeedbackColor::Orange
        );
        assert_eq!(
            classify("counter-clockwise").feedback_color(policy),
            FeedbackColor::Orange
        );
    }

    #[test]
    fn test_fallback_color_policy() {
        let distinct = FeedbackPolicy::default();
        let plain = FeedbackPolicy {
            distinct_fallback: false,
        };
        let c = classify("banana");
        assert_eq!(c.feedback_color(distinct), FeedbackColor::Blue);
        assert_eq!(c.feedback_color(plain), FeedbackColor::Red);
        // an explicit stop is red under both policies
        assert_eq!(classify("stop").feedback_color(distinct), FeedbackColor::Red);
        assert_eq!(classify("stop").feedback_color(plain), FeedbackColor::Red);
    }
}
