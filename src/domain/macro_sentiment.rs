//! Macroeconomic sentiment classifier.
//!
//! A fixed ordered rule list tallies positive and negative points over the
//! latest macro readings. The rules are asymmetric on purpose: GDP and
//! consumer confidence only ever add positive points, while unemployment,
//! the fed funds rate and PMI vote negative even when the reading is absent.
//! Downstream consumers depend on the exact tally, so the asymmetry must not
//! be normalised away.

use crate::domain::sentiment::Sentiment;

/// Latest value per macro indicator; any field may be absent when its
/// provider fails.
#[derive(Debug, Clone, Default)]
pub struct MacroReading {
    pub gdp: Option<f64>,
    pub cpi: Option<f64>,
    pub ppi: Option<f64>,
    pub unemployment: Option<f64>,
    pub fed_funds_rate: Option<f64>,
    pub consumer_confidence: Option<f64>,
    pub pmi: Option<f64>,
}

impl MacroReading {
    pub fn is_empty(&self) -> bool {
        self.gdp.is_none()
            && self.cpi.is_none()
            && self.ppi.is_none()
            && self.unemployment.is_none()
            && self.fed_funds_rate.is_none()
            && self.consumer_confidence.is_none()
            && self.pmi.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vote {
    Positive,
    Negative,
    Abstain,
}

struct MacroRule {
    name: &'static str,
    vote: fn(&MacroReading) -> Vote,
}

const RULES: &[MacroRule] = &[
    MacroRule {
        // any reported GDP value counts as growth
        name: "gdp",
        vote: |r| match r.gdp {
            Some(_) => Vote::Positive,
            None => Vote::Abstain,
        },
    },
    MacroRule {
        name: "cpi",
        vote: |r| match r.cpi {
            Some(v) if v > 2.0 => Vote::Negative,
            _ => Vote::Abstain,
        },
    },
    MacroRule {
        name: "ppi",
        vote: |r| match r.ppi {
            Some(v) if v > 2.0 => Vote::Negative,
            _ => Vote::Abstain,
        },
    },
    MacroRule {
        // absent reading votes negative, not abstain
        name: "unemployment",
        vote: |r| match r.unemployment {
            Some(v) if v < 5.0 => Vote::Positive,
            _ => Vote::Negative,
        },
    },
    MacroRule {
        // absent reading votes negative, not abstain
        name: "fed_funds_rate",
        vote: |r| match r.fed_funds_rate {
            Some(v) if v < 2.0 => Vote::Positive,
            _ => Vote::Negative,
        },
    },
    MacroRule {
        name: "consumer_confidence",
        vote: |r| match r.consumer_confidence {
            Some(v) if v > 100.0 => Vote::Positive,
            _ => Vote::Abstain,
        },
    },
    MacroRule {
        // absent reading votes negative, not abstain
        name: "pmi",
        vote: |r| match r.pmi {
            Some(v) if v > 50.0 => Vote::Positive,
            _ => Vote::Negative,
        },
    },
];

/// Tally the rule list. An entirely empty reading short-circuits to Neutral
/// before any rule fires.
pub fn classify_macro(reading: &MacroReading) -> Sentiment {
    if reading.is_empty() {
        return Sentiment::Neutral;
    }

    let mut positive = 0u32;
    let mut negative = 0u32;
    for rule in RULES {
        match (rule.vote)(reading) {
            Vote::Positive => positive += 1,
            Vote::Negative => negative += 1,
            Vote::Abstain => {}
        }
    }

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reading_is_neutral() {
        assert_eq!(classify_macro(&MacroReading::default()), Sentiment::Neutral);
    }

    #[test]
    fn gdp_and_low_unemployment_still_tie_against_absent_votes() {
        // gdp and unemployment vote positive (2), but the absent
        // fed_funds_rate and pmi each vote negative (2): a tie
        let reading = MacroReading {
            gdp: Some(100.0),
            unemployment: Some(3.0),
            ..Default::default()
        };
        assert_eq!(classify_macro(&reading), Sentiment::Neutral);
    }

    #[test]
    fn healthy_economy_is_positive() {
        let reading = MacroReading {
            gdp: Some(27_000.0),
            cpi: Some(1.8),
            ppi: Some(1.5),
            unemployment: Some(3.9),
            fed_funds_rate: Some(1.0),
            consumer_confidence: Some(110.0),
            pmi: Some(55.0),
        };
        // positive: gdp, unemployment, fed funds, confidence, pmi (5); negative: none
        assert_eq!(classify_macro(&reading), Sentiment::Positive);
    }

    #[test]
    fn inflationary_economy_is_negative() {
        let reading = MacroReading {
            gdp: Some(27_000.0),
            cpi: Some(6.0),
            ppi: Some(7.0),
            unemployment: Some(6.5),
            fed_funds_rate: Some(5.25),
            consumer_confidence: Some(80.0),
            pmi: Some(45.0),
        };
        // positive: gdp (1); negative: cpi, ppi, unemployment, fed funds, pmi (5)
        assert_eq!(classify_macro(&reading), Sentiment::Negative);
    }

    #[test]
    fn zero_gdp_reading_still_counts_positive() {
        // a present reading of 0 is a value, not an absence
        let reading = MacroReading {
            gdp: Some(0.0),
            unemployment: Some(3.0),
            fed_funds_rate: Some(1.0),
            pmi: Some(55.0),
            ..Default::default()
        };
        // positive: gdp, unemployment, fed funds, pmi (4); negative: none
        assert_eq!(classify_macro(&reading), Sentiment::Positive);
    }

    #[test]
    fn single_negative_reading_tallies_absent_votes_too() {
        let reading = MacroReading {
            cpi: Some(9.0),
            ..Default::default()
        };
        // negative: cpi plus absent unemployment/fed funds/pmi (4); positive: none
        assert_eq!(classify_macro(&reading), Sentiment::Negative);
    }

    #[test]
    fn boundary_values_do_not_fire_strict_comparisons() {
        let reading = MacroReading {
            cpi: Some(2.0),          // not > 2
            unemployment: Some(5.0), // not < 5 → negative
            fed_funds_rate: Some(2.0), // not < 2 → negative
            consumer_confidence: Some(100.0), // not > 100
            pmi: Some(50.0),         // not > 50 → negative
            ..Default::default()
        };
        // positive: none; negative: unemployment, fed funds, pmi (3)
        assert_eq!(classify_macro(&reading), Sentiment::Negative);
    }
}
