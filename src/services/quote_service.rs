use serde::{Deserialize, Serialize};

/// Deterministic pseudo-quote for a ticker symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Derives a price from the symbol alone: no market data, no I/O, identical
/// output for identical input across calls.
///
/// Character-code sum folded into [20, 219], plus 0.13 * (base mod 7) as a
/// fractional offset, rounded to cents.
pub fn quote(symbol: &str) -> Quote {
    let sym = symbol.to_uppercase();

    let base = sym.chars().map(|c| c as u32).sum::<u32>() % 200 + 20;
    let price = round2(f64::from(base) + 0.13 * f64::from(base % 7));

    Quote { symbol: sym, price }
}
