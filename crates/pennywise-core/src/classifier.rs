//! Segment classification
//!
//! The profile occupation decides when it is explicit. For anyone else the
//! message text is scored against two keyword lists; each keyword that appears
//! anywhere in the lowercased text (plain substring, not whole word) scores one.

use crate::models::{Occupation, Segment, UserProfile};

/// Phrases that suggest a beginner audience
const STUDENT_KEYWORDS: &[&str] = &["simple", "basic", "affordable", "budget-friendly", "starter"];

/// Phrases that suggest an experienced audience
const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "investment",
    "portfolio",
    "tax optimization",
    "advanced",
    "strategies",
];

/// Keyword scores for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentScores {
    pub student: usize,
    pub professional: usize,
}

/// Maps a profile and message to a [`Segment`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentClassifier;

impl SegmentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify the user for this interaction.
    ///
    /// Ties (including an empty message) resolve to [`Segment::Student`]; the
    /// professional score has to be strictly higher to switch.
    pub fn classify(&self, text: &str, profile: &UserProfile) -> Segment {
        match profile.occupation {
            Occupation::Student => return Segment::Student,
            Occupation::Professional => return Segment::Professional,
            Occupation::Other => {}
        }

        let scores = self.score(text);
        let segment = if scores.professional > scores.student {
            Segment::Professional
        } else {
            Segment::Student
        };

        tracing::debug!(
            student_score = scores.student,
            professional_score = scores.professional,
            segment = segment.as_str(),
            "Classified by message keywords"
        );

        segment
    }

    /// Score text against both keyword lists
    pub fn score(&self, text: &str) -> SegmentScores {
        let text = text.to_lowercase();
        let count = |keywords: &[&str]| keywords.iter().filter(|kw| text.contains(**kw)).count();

        SegmentScores {
            student: count(STUDENT_KEYWORDS),
            professional: count(PROFESSIONAL_KEYWORDS),
        }
    }
}
