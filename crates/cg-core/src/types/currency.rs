/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Display currencies offered by the coin detail view.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Currency the coin detail view can price an asset in.
///
/// The set is fixed to the four currencies the selection UI offers. The
/// remote API keys its per-currency price maps with the lowercase code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
  /// Canadian dollar, the initial selection
  #[default]
  Cad,
  /// Indian rupee
  Inr,
  /// Kuwaiti dinar
  Kwd,
  /// United States dollar
  Usd,
}

impl Currency {
  /// All selectable currencies, in UI order
  pub const ALL: [Currency; 4] = [Currency::Cad, Currency::Inr, Currency::Kwd, Currency::Usd];

  /// Lowercase code used in API query parameters and price-map keys
  pub fn code(&self) -> &'static str {
    match self {
      Currency::Cad => "cad",
      Currency::Inr => "inr",
      Currency::Kwd => "kwd",
      Currency::Usd => "usd",
    }
  }

  /// Display prefix for formatted prices
  pub fn symbol(&self) -> &'static str {
    match self {
      Currency::Cad => "CA$ ",
      Currency::Inr => "₹ ",
      Currency::Kwd => "د.ك ",
      Currency::Usd => "$ ",
    }
  }

  /// Parse a currency code, case-insensitively
  pub fn from_code(code: &str) -> Result<Self> {
    match code.to_ascii_lowercase().as_str() {
      "cad" => Ok(Currency::Cad),
      "inr" => Ok(Currency::Inr),
      "kwd" => Ok(Currency::Kwd),
      "usd" => Ok(Currency::Usd),
      other => Err(Error::Configuration(format!("unknown currency code: {other}"))),
    }
  }
}

impl std::fmt::Display for Currency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Currency::Cad => write!(f, "CAD"),
      Currency::Inr => write!(f, "INR"),
      Currency::Kwd => write!(f, "KWD"),
      Currency::Usd => write!(f, "USD"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symbol_total() {
    for currency in Currency::ALL {
      assert!(!currency.symbol().is_empty());
    }
    assert_eq!(Currency::Cad.symbol(), "CA$ ");
    assert_eq!(Currency::Inr.symbol(), "₹ ");
    assert_eq!(Currency::Kwd.symbol(), "د.ك ");
    assert_eq!(Currency::Usd.symbol(), "$ ");
  }

  #[test]
  fn test_from_code_roundtrip() {
    for currency in Currency::ALL {
      assert_eq!(Currency::from_code(currency.code()).unwrap(), currency);
    }
  }

  #[test]
  fn test_from_code_case_insensitive() {
    assert_eq!(Currency::from_code("KWD").unwrap(), Currency::Kwd);
  }

  #[test]
  fn test_from_code_unknown() {
    let result = Currency::from_code("eur");
    assert!(matches!(result, Err(Error::Configuration(_))));
  }

  #[test]
  fn test_default_is_cad() {
    assert_eq!(Currency::default(), Currency::Cad);
  }

  #[test]
  fn test_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Currency::Kwd).unwrap(), "\"kwd\"");
    let parsed: Currency = serde_json::from_str("\"inr\"").unwrap();
    assert_eq!(parsed, Currency::Inr);
  }
}
