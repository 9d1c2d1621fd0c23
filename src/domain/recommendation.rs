//! Buy/Sell/Hold recommendation gate.
//!
//! Each outcome is guarded by a fixed ordered list of named conjuncts that
//! must ALL hold; partial agreement falls through to Hold. An undefined
//! indicator or an absent valuation ratio fails its conjunct rather than
//! defaulting to any numeric value.

use crate::domain::indicator::IndicatorSnapshot;
use crate::domain::sentiment::Sentiment;
use std::fmt;

/// Minimum rows of history before any recommendation is made.
pub const MIN_ROWS: usize = 20;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const VALUATION_CHEAP: f64 = 20.0;
pub const VALUATION_EXPENSIVE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "Buy"),
            Recommendation::Sell => write!(f, "Sell"),
            Recommendation::Hold => write!(f, "Hold"),
        }
    }
}

/// Everything a conjunct may inspect.
pub struct GateInput<'a> {
    pub snapshot: &'a IndicatorSnapshot,
    pub valuation_ratio: Option<f64>,
}

struct Conjunct {
    name: &'static str,
    holds: fn(&GateInput) -> bool,
}

const BUY_GATE: &[Conjunct] = &[
    Conjunct {
        name: "close above MA20",
        holds: |g| g.snapshot.ma20.is_some_and(|ma| g.snapshot.close > ma),
    },
    Conjunct {
        name: "RSI oversold",
        holds: |g| g.snapshot.rsi.is_some_and(|rsi| rsi < RSI_OVERSOLD),
    },
    Conjunct {
        name: "MACD above signal",
        holds: |g| match (g.snapshot.macd, g.snapshot.macd_signal) {
            (Some(line), Some(signal)) => line > signal,
            _ => false,
        },
    },
    Conjunct {
        name: "close below lower band",
        holds: |g| {
            g.snapshot
                .bollinger_lower
                .is_some_and(|band| g.snapshot.close < band)
        },
    },
    Conjunct {
        name: "valuation cheap",
        holds: |g| g.valuation_ratio.is_some_and(|r| r < VALUATION_CHEAP),
    },
];

const SELL_GATE: &[Conjunct] = &[
    Conjunct {
        name: "close below MA20",
        holds: |g| g.snapshot.ma20.is_some_and(|ma| g.snapshot.close < ma),
    },
    Conjunct {
        name: "RSI overbought",
        holds: |g| g.snapshot.rsi.is_some_and(|rsi| rsi > RSI_OVERBOUGHT),
    },
    Conjunct {
        name: "MACD below signal",
        holds: |g| match (g.snapshot.macd, g.snapshot.macd_signal) {
            (Some(line), Some(signal)) => line < signal,
            _ => false,
        },
    },
    Conjunct {
        name: "close above upper band",
        holds: |g| {
            g.snapshot
                .bollinger_upper
                .is_some_and(|band| g.snapshot.close > band)
        },
    },
    Conjunct {
        name: "valuation expensive",
        holds: |g| g.valuation_ratio.is_some_and(|r| r > VALUATION_EXPENSIVE),
    },
];

fn gate_holds(gate: &[Conjunct], input: &GateInput) -> bool {
    gate.iter().all(|c| (c.holds)(input))
}

/// Names of the conjuncts in a gate that do not hold. Used by reports.
pub fn failed_conjuncts(buy: bool, input: &GateInput) -> Vec<&'static str> {
    let gate = if buy { BUY_GATE } else { SELL_GATE };
    gate.iter()
        .filter(|c| !(c.holds)(input))
        .map(|c| c.name)
        .collect()
}

/// Classify the latest snapshot, or `None` when fewer than [`MIN_ROWS`] rows
/// of history exist (insufficient data, no recommendation).
pub fn recommend(
    snapshot: &IndicatorSnapshot,
    valuation_ratio: Option<f64>,
    rows: usize,
) -> Option<Recommendation> {
    if rows < MIN_ROWS {
        return None;
    }

    let input = GateInput {
        snapshot,
        valuation_ratio,
    };
    if gate_holds(BUY_GATE, &input) {
        return Some(Recommendation::Buy);
    }
    if gate_holds(SELL_GATE, &input) {
        return Some(Recommendation::Sell);
    }
    Some(Recommendation::Hold)
}

/// Merge per-provider recommendations into one market view:
/// any Buy → Positive, otherwise any Sell → Negative, otherwise Neutral.
pub fn merge_recommendations(recommendations: &[Option<Recommendation>]) -> Sentiment {
    let flat: Vec<Recommendation> = recommendations.iter().flatten().copied().collect();
    if flat.contains(&Recommendation::Buy) {
        Sentiment::Positive
    } else if flat.contains(&Recommendation::Sell) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy_snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            close: 95.0,
            ma20: Some(90.0),           // close above MA20
            ma50: None,
            ma200: None,
            rsi: Some(25.0),            // oversold
            macd: Some(1.0),            // above signal
            macd_signal: Some(0.5),
            bollinger_upper: Some(110.0),
            bollinger_middle: Some(100.0),
            bollinger_lower: Some(96.0), // close below lower band
            atr: Some(2.0),
        }
    }

    fn sell_snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            close: 112.0,
            ma20: Some(115.0),           // close below MA20
            ma50: None,
            ma200: None,
            rsi: Some(75.0),             // overbought
            macd: Some(-1.0),            // below signal
            macd_signal: Some(0.5),
            bollinger_upper: Some(110.0), // close above upper band
            bollinger_middle: Some(100.0),
            bollinger_lower: Some(90.0),
            atr: Some(2.0),
        }
    }

    #[test]
    fn all_buy_conjuncts_yield_buy() {
        let rec = recommend(&buy_snapshot(), Some(15.0), 30);
        assert_eq!(rec, Some(Recommendation::Buy));
    }

    #[test]
    fn all_sell_conjuncts_yield_sell() {
        let rec = recommend(&sell_snapshot(), Some(35.0), 30);
        assert_eq!(rec, Some(Recommendation::Sell));
    }

    #[test]
    fn breaking_one_buy_conjunct_yields_hold_not_sell() {
        // valuation ratio 25 fails "valuation cheap" while every other
        // buy conjunct still holds
        let rec = recommend(&buy_snapshot(), Some(25.0), 30);
        assert_eq!(rec, Some(Recommendation::Hold));

        let mut snapshot = buy_snapshot();
        snapshot.rsi = Some(50.0);
        let rec = recommend(&snapshot, Some(15.0), 30);
        assert_eq!(rec, Some(Recommendation::Hold));
    }

    #[test]
    fn absent_valuation_ratio_never_satisfies_either_gate() {
        assert_eq!(
            recommend(&buy_snapshot(), None, 30),
            Some(Recommendation::Hold)
        );
        assert_eq!(
            recommend(&sell_snapshot(), None, 30),
            Some(Recommendation::Hold)
        );
    }

    #[test]
    fn undefined_indicators_fail_their_conjuncts() {
        let mut snapshot = buy_snapshot();
        snapshot.ma20 = None;
        assert_eq!(
            recommend(&snapshot, Some(15.0), 30),
            Some(Recommendation::Hold)
        );

        let mut snapshot = buy_snapshot();
        snapshot.macd_signal = None;
        assert_eq!(
            recommend(&snapshot, Some(15.0), 30),
            Some(Recommendation::Hold)
        );
    }

    #[test]
    fn insufficient_history_gives_no_recommendation() {
        assert_eq!(recommend(&buy_snapshot(), Some(15.0), 19), None);
        assert_eq!(recommend(&buy_snapshot(), Some(15.0), 0), None);
        assert!(recommend(&buy_snapshot(), Some(15.0), 20).is_some());
    }

    #[test]
    fn failed_conjuncts_names_the_gap() {
        let snapshot = buy_snapshot();
        let input = GateInput {
            snapshot: &snapshot,
            valuation_ratio: Some(25.0),
        };
        assert_eq!(failed_conjuncts(true, &input), vec!["valuation cheap"]);
    }

    #[test]
    fn merge_prefers_buy_over_sell() {
        let merged = merge_recommendations(&[
            Some(Recommendation::Sell),
            Some(Recommendation::Buy),
        ]);
        assert_eq!(merged, Sentiment::Positive);
    }

    #[test]
    fn merge_sell_without_buy_is_negative() {
        let merged = merge_recommendations(&[Some(Recommendation::Sell), None]);
        assert_eq!(merged, Sentiment::Negative);
    }

    #[test]
    fn merge_holds_and_absences_are_neutral() {
        assert_eq!(
            merge_recommendations(&[Some(Recommendation::Hold), None]),
            Sentiment::Neutral
        );
        assert_eq!(merge_recommendations(&[]), Sentiment::Neutral);
    }
}
