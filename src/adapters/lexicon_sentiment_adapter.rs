//! Word-list sentiment scorer.
//!
//! Counts positive and negative lexicon hits over lower-cased alphanumeric
//! tokens; the score is (positive - negative) / tokens, in [-1, 1]. Only the
//! sign is meaningful downstream.

use crate::ports::sentiment_port::SentimentPort;

const POSITIVE_WORDS: &[&str] = &[
    "beat", "beats", "exceeds", "tops", "record", "growth", "gain", "gains", "surge", "surges",
    "soars", "rally", "rallies", "profit", "profits", "strong", "upgrade", "upgraded", "wins",
    "win", "bullish", "outperform", "expands", "jumps", "climbs", "raises",
];

const NEGATIVE_WORDS: &[&str] = &[
    "lawsuit", "loss", "losses", "drop", "drops", "falls", "fall", "decline", "declines", "weak",
    "downgrade", "downgraded", "misses", "miss", "fraud", "plunge", "plunges", "recall", "cuts",
    "cut", "layoffs", "probe", "slump", "slumps", "bearish", "underperform", "warns", "warning",
];

pub struct LexiconSentimentAdapter;

impl LexiconSentimentAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconSentimentAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentPort for LexiconSentimentAdapter {
    fn polarity(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();
        if tokens.is_empty() {
            return 0.0;
        }

        let mut score = 0i32;
        for token in &tokens {
            if POSITIVE_WORDS.contains(&token.as_str()) {
                score += 1;
            } else if NEGATIVE_WORDS.contains(&token.as_str()) {
                score -= 1;
            }
        }

        score as f64 / tokens.len() as f64
    }
}
