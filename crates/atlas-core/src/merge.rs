//! The merge & compute engine.
//!
//! Joins one raw country with the exchange-rate table and derives the
//! estimated GDP. Pure except for the injected RNG: the GDP multiplier is
//! drawn fresh per country per refresh, so estimated GDP is deliberately
//! non-deterministic across refreshes. Tests compare ranges, never exact
//! values.

use std::collections::HashMap;

use rand::Rng;

use crate::country::{NewCountry, RawCountry};

/// USD-based exchange rates keyed by currency code, case-sensitive.
pub type RateTable = HashMap<String, f64>;

pub const GDP_MULTIPLIER_MIN: f64 = 1000.0;
pub const GDP_MULTIPLIER_MAX: f64 = 2000.0;

/// `(population × multiplier) / rate` with a uniform multiplier in
/// [`GDP_MULTIPLIER_MIN`, `GDP_MULTIPLIER_MAX`). Returns `None` when the rate
/// is exactly zero (guards divide-by-zero).
pub fn compute_gdp(population: u64, rate: f64, rng: &mut impl Rng) -> Option<f64> {
  if rate == 0.0 {
    return None;
  }
  let multiplier = rng.gen_range(GDP_MULTIPLIER_MIN..GDP_MULTIPLIER_MAX);
  Some((population as f64 * multiplier) / rate)
}

/// Produce an upsert-ready record for one raw country.
///
/// - First currency entry's code (if any) becomes `currency_code`.
/// - A matching rate yields `exchange_rate` and a computed `estimated_gdp`;
///   an unmatched code (or an entry with no code) leaves both null.
/// - A country with no currency entries at all gets `estimated_gdp` pinned
///   to zero, distinct from "rate unknown", which stays null.
pub fn merge_country(raw: &RawCountry, rates: &RateTable, rng: &mut impl Rng) -> NewCountry {
  let (currency_code, exchange_rate, estimated_gdp) = match raw.currencies.first() {
    None => (None, None, Some(0.0)),
    Some(currency) => {
      let code = currency.code.clone();
      match code.as_deref().and_then(|c| rates.get(c).copied()) {
        Some(rate) => {
          let gdp = compute_gdp(raw.population, rate, rng);
          (code, Some(rate), gdp)
        }
        None => (code, None, None),
      }
    }
  };

  NewCountry {
    name: raw.name.clone(),
    capital: raw.capital.clone(),
    region: raw.region.clone(),
    population: raw.population,
    currency_code,
    exchange_rate,
    estimated_gdp,
    flag_url: raw.flag.clone(),
  }
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng as _, rngs::StdRng};

  use super::*;
  use crate::country::RawCurrency;

  fn rng() -> StdRng { StdRng::seed_from_u64(42) }

  fn raw(name: &str, population: u64, code: Option<&str>) -> RawCountry {
    RawCountry {
      name:       name.to_string(),
      capital:    None,
      region:     None,
      population,
      flag:       None,
      currencies: code
        .map(|c| {
          vec![RawCurrency {
            code:   Some(c.to_string()),
            name:   None,
            symbol: None,
          }]
        })
        .unwrap_or_default(),
    }
  }

  #[test]
  fn matched_rate_yields_gdp_in_range() {
    let mut rates = RateTable::new();
    rates.insert("USD".to_string(), 110.0);
    let mut rng = rng();

    // Randomised multiplier: check the bounds, not the value.
    for _ in 0..200 {
      let record = merge_country(&raw("Testland", 1_000_000, Some("USD")), &rates, &mut rng);
      assert_eq!(record.currency_code.as_deref(), Some("USD"));
      assert_eq!(record.exchange_rate, Some(110.0));
      let gdp = record.estimated_gdp.unwrap();
      assert!(gdp >= 1_000_000.0 * 1000.0 / 110.0, "gdp too low: {gdp}");
      assert!(gdp < 1_000_000.0 * 2000.0 / 110.0, "gdp too high: {gdp}");
    }
  }

  #[test]
  fn unmatched_rate_leaves_rate_and_gdp_null() {
    let rates = RateTable::new();
    let record = merge_country(&raw("Testland", 500, Some("XYZ")), &rates, &mut rng());

    assert_eq!(record.currency_code.as_deref(), Some("XYZ"));
    assert!(record.exchange_rate.is_none());
    assert!(record.estimated_gdp.is_none());
  }

  #[test]
  fn rate_lookup_is_case_sensitive() {
    let mut rates = RateTable::new();
    rates.insert("usd".to_string(), 110.0);
    let record = merge_country(&raw("Testland", 500, Some("USD")), &rates, &mut rng());

    assert!(record.exchange_rate.is_none());
    assert!(record.estimated_gdp.is_none());
  }

  #[test]
  fn currency_entry_without_code_behaves_like_unmatched() {
    let mut rates = RateTable::new();
    rates.insert("USD".to_string(), 110.0);
    let raw = RawCountry {
      name:       "Testland".to_string(),
      capital:    None,
      region:     None,
      population: 500,
      flag:       None,
      currencies: vec![RawCurrency { code: None, name: None, symbol: None }],
    };

    let record = merge_country(&raw, &rates, &mut rng());
    assert!(record.currency_code.is_none());
    assert!(record.exchange_rate.is_none());
    assert!(record.estimated_gdp.is_none());
  }

  #[test]
  fn no_currency_pins_gdp_to_zero() {
    let record = merge_country(&raw("Antarctica", 1000, None), &RateTable::new(), &mut rng());

    assert!(record.currency_code.is_none());
    assert!(record.exchange_rate.is_none());
    // Exactly zero, not null: the special case for currency-less countries.
    assert_eq!(record.estimated_gdp, Some(0.0));
  }

  #[test]
  fn zero_rate_keeps_rate_but_no_gdp() {
    let mut rates = RateTable::new();
    rates.insert("ZRO".to_string(), 0.0);
    let record = merge_country(&raw("Testland", 500, Some("ZRO")), &rates, &mut rng());

    assert_eq!(record.exchange_rate, Some(0.0));
    assert!(record.estimated_gdp.is_none());
  }

  #[test]
  fn compute_gdp_zero_rate_is_none() {
    assert!(compute_gdp(1_000_000, 0.0, &mut rng()).is_none());
  }
}
