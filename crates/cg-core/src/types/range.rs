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

//! Historical time windows offered by the coin detail view.

use crate::error::{Error, Result};

/// Historical window selectable in the coin detail view.
///
/// Each human-readable label the UI shows maps to the short range token the
/// market-data API expects in its `days` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeLabel {
  /// "24 Hours"
  #[default]
  Day,
  /// "7 Days"
  Week,
  /// "2 Weeks"
  TwoWeeks,
  /// "1 Month"
  Month,
  /// "2 Months"
  TwoMonths,
  /// "6 Months"
  SixMonths,
  /// "1 Year"
  Year,
  /// "5 Years"
  FiveYears,
  /// "Max"
  Max,
}

impl RangeLabel {
  /// All selectable windows, in UI order
  pub const ALL: [RangeLabel; 9] = [
    RangeLabel::Day,
    RangeLabel::Week,
    RangeLabel::TwoWeeks,
    RangeLabel::Month,
    RangeLabel::TwoMonths,
    RangeLabel::SixMonths,
    RangeLabel::Year,
    RangeLabel::FiveYears,
    RangeLabel::Max,
  ];

  /// Human-readable label shown on the range buttons
  pub fn label(&self) -> &'static str {
    match self {
      RangeLabel::Day => "24 Hours",
      RangeLabel::Week => "7 Days",
      RangeLabel::TwoWeeks => "2 Weeks",
      RangeLabel::Month => "1 Month",
      RangeLabel::TwoMonths => "2 Months",
      RangeLabel::SixMonths => "6 Months",
      RangeLabel::Year => "1 Year",
      RangeLabel::FiveYears => "5 Years",
      RangeLabel::Max => "Max",
    }
  }

  /// Range token the API expects in the `days` query parameter
  pub fn token(&self) -> &'static str {
    match self {
      RangeLabel::Day => "24h",
      RangeLabel::Week => "7d",
      RangeLabel::TwoWeeks => "14d",
      RangeLabel::Month => "30d",
      RangeLabel::TwoMonths => "60d",
      RangeLabel::SixMonths => "200d",
      RangeLabel::Year => "365d",
      RangeLabel::FiveYears => "1825d",
      RangeLabel::Max => "max",
    }
  }

  /// Look up a window by its button label.
  ///
  /// Fails with [`Error::Configuration`] for labels outside the catalog;
  /// callers that want the defensive 24-hour fallback handle that themselves.
  pub fn from_label(label: &str) -> Result<Self> {
    RangeLabel::ALL
      .into_iter()
      .find(|range| range.label() == label)
      .ok_or_else(|| Error::Configuration(format!("unknown range label: {label}")))
  }
}

impl std::fmt::Display for RangeLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_catalog_totality() {
    // every catalog label maps to a non-empty token
    for range in RangeLabel::ALL {
      assert!(!range.token().is_empty());
      assert_eq!(RangeLabel::from_label(range.label()).unwrap(), range);
    }
  }

  #[test]
  fn test_token_mapping() {
    assert_eq!(RangeLabel::Day.token(), "24h");
    assert_eq!(RangeLabel::Week.token(), "7d");
    assert_eq!(RangeLabel::TwoWeeks.token(), "14d");
    assert_eq!(RangeLabel::Month.token(), "30d");
    assert_eq!(RangeLabel::TwoMonths.token(), "60d");
    assert_eq!(RangeLabel::SixMonths.token(), "200d");
    assert_eq!(RangeLabel::Year.token(), "365d");
    assert_eq!(RangeLabel::FiveYears.token(), "1825d");
    assert_eq!(RangeLabel::Max.token(), "max");
  }

  #[test]
  fn test_from_label_unknown() {
    let result = RangeLabel::from_label("3 Days");
    assert!(matches!(result, Err(Error::Configuration(_))));
  }

  #[test]
  fn test_default_is_day() {
    assert_eq!(RangeLabel::default(), RangeLabel::Day);
  }

  #[test]
  fn test_display_is_label() {
    assert_eq!(RangeLabel::FiveYears.to_string(), "5 Years");
  }
}
