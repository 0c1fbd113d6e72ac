//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength assessment

use std::fmt;
use zxcvbn::zxcvbn;
use zxcvbn::Score;

use crate::charclass::CharacterClass;

/// Coarse strength label, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        };
        write!(f, "{}", text)
    }
}

/// `floor(length / 4)` plus one point per character class present.
pub fn score(password: &str) -> u32 {
    let length = password.chars().count() as u32;
    let diversity = CharacterClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .count() as u32;
    length / 4 + diversity
}

pub fn label_for(score: u32) -> StrengthLabel {
    match score {
        s if s >= 5 => StrengthLabel::VeryStrong,
        3..=4 => StrengthLabel::Strong,
        2 => StrengthLabel::Medium,
        _ => StrengthLabel::Weak,
    }
}

pub fn assess(password: &str) -> StrengthLabel {
    label_for(score(password))
}

/// Heuristic label alongside a zxcvbn estimate.
#[derive(Debug, Clone)]
pub struct DetailedAnalysis {
    pub label: StrengthLabel,
    pub score: u32,
    pub estimate_score: u8,
    pub rating: String,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

pub fn analyze(password: &str) -> DetailedAnalysis {
    let strength_result = zxcvbn(password, &[]);
    let estimate = strength_result.score();
    let (warning, suggestions) = strength_result.feedback().map_or_else(
        || (None, Vec::new()),
        |f| {
            (
                f.warning().map(|w| w.to_string()),
                f.suggestions().iter().map(|s| s.to_string()).collect(),
            )
        },
    );

    let (estimate_score, rating) = match estimate {
        Score::Zero => (0, "Very Weak"),
        Score::One => (1, "Weak"),
        Score::Two => (2, "Fair"),
        Score::Three => (3, "Strong"),
        Score::Four => (4, "Very Strong"),
        _ => (0, "Unknown"),
    };

    let score = score(password);
    DetailedAnalysis {
        label: label_for(score),
        score,
        estimate_score,
        rating: rating.to_string(),
        warning,
        suggestions,
    }
}
