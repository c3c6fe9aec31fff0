//! Typed capability parameters.
//!
//! A capability declares its parameters as [`ParamSpec`]s; callers supply
//! [`ParamValue`]s in a [`ParameterSet`]. Binding checks every value against
//! its declared [`ParamKind`] before anything is rendered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Semantic type of a capability parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Free-form short text.
    Text,
    /// One of a fixed set of values.
    Choice(&'static [&'static str]),
    /// Non-negative money amount.
    Currency,
    /// Fraction in `[0, 1]`.
    Ratio,
    /// Decimal bounded to `[min, max]`, e.g. a star rating.
    Decimal { min: f64, max: f64 },
    /// Non-negative whole number.
    Count,
    /// List of short text items.
    TextList,
}

impl ParamKind {
    /// Short label used in listings and error messages.
    pub fn label(&self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Choice(options) => format!("one of [{}]", options.join(", ")),
            Self::Currency => "currency".to_string(),
            Self::Ratio => "ratio 0..1".to_string(),
            Self::Decimal { min, max } => format!("decimal {min}..{max}"),
            Self::Count => "count".to_string(),
            Self::TextList => "list".to_string(),
        }
    }

    /// Parse a raw string (CLI input, defaults) into a value of this kind.
    ///
    /// Lists are comma separated. Range checks happen later, in
    /// [`ParamKind::check`].
    pub fn parse(&self, raw: &str) -> Result<ParamValue, String> {
        let raw = raw.trim();
        match self {
            Self::Text | Self::Choice(_) => Ok(ParamValue::Text(raw.to_string())),
            Self::Currency | Self::Ratio | Self::Decimal { .. } => {
                let cleaned = raw.trim_start_matches('$').replace(',', "");
                cleaned
                    .parse::<f64>()
                    .map(ParamValue::Number)
                    .map_err(|_| format!("'{raw}' is not a number"))
            }
            Self::Count => raw
                .parse::<i64>()
                .map(ParamValue::Integer)
                .map_err(|_| format!("'{raw}' is not a whole number")),
            Self::TextList => Ok(ParamValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }

    /// Validate a supplied value and normalise it to the kind's canonical form.
    pub fn check(&self, value: &ParamValue) -> Result<ParamValue, String> {
        match (self, value) {
            (Self::Text, ParamValue::Text(text)) => {
                if text.trim().is_empty() {
                    Err("must not be blank".to_string())
                } else {
                    Ok(ParamValue::Text(text.clone()))
                }
            }
            (Self::Choice(options), ParamValue::Text(text)) => options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(text.trim()))
                .map(|option| ParamValue::Text((*option).to_string()))
                .ok_or_else(|| format!("'{text}' is not one of [{}]", options.join(", "))),
            (Self::Currency, value) => {
                let amount = value.as_number().ok_or("expected an amount")?;
                if amount.is_finite() && amount >= 0.0 {
                    Ok(ParamValue::Number(amount))
                } else {
                    Err(format!("{amount} is not a valid amount"))
                }
            }
            (Self::Ratio, value) => {
                let ratio = value.as_number().ok_or("expected a ratio")?;
                if (0.0..=1.0).contains(&ratio) {
                    Ok(ParamValue::Number(ratio))
                } else {
                    Err(format!("{ratio} must be between 0 and 1"))
                }
            }
            (Self::Decimal { min, max }, value) => {
                let number = value.as_number().ok_or("expected a number")?;
                if (*min..=*max).contains(&number) {
                    Ok(ParamValue::Number(number))
                } else {
                    Err(format!("{number} must be between {min} and {max}"))
                }
            }
            (Self::Count, ParamValue::Integer(count)) => {
                if *count >= 0 {
                    Ok(ParamValue::Integer(*count))
                } else {
                    Err(format!("{count} must not be negative"))
                }
            }
            (Self::TextList, ParamValue::List(items)) => {
                if items.iter().any(|item| item.trim().is_empty()) {
                    Err("list items must not be blank".to_string())
                } else {
                    Ok(ParamValue::List(items.clone()))
                }
            }
            (kind, value) => Err(format!(
                "expected {}, got {}",
                kind.label(),
                value.type_name()
            )),
        }
    }
}

/// Declaration of one capability parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    /// Raw default, parsed with [`ParamKind::parse`] when the caller omits the value.
    pub default: Option<&'static str>,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            default: None,
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A caller-supplied parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

/// Display text used for interpolation.
///
/// Numbers keep their natural decimal form (`4.8`, `500`), lists are joined
/// with `", "`.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Named parameter values for one invocation.
///
/// Ordered by name so iteration (and anything derived from it) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Overlay `other` on top of `self`; values in `other` win.
    pub fn merge(mut self, other: ParameterSet) -> Self {
        self.values.extend(other.values);
        self
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_natural_numbers() {
        assert_eq!(ParamValue::Number(4.8).to_string(), "4.8");
        assert_eq!(ParamValue::Number(500.0).to_string(), "500");
        assert_eq!(ParamValue::Integer(24).to_string(), "24");
        assert_eq!(
            ParamValue::from(&["Taxi Services", "Logistics"][..]).to_string(),
            "Taxi Services, Logistics"
        );
    }

    #[test]
    fn test_parse_by_kind() {
        assert_eq!(ParamKind::Currency.parse("$2,000").unwrap(), ParamValue::Number(2000.0));
        assert_eq!(ParamKind::Count.parse(" 5 ").unwrap(), ParamValue::Integer(5));
        assert_eq!(
            ParamKind::TextList.parse("Taxi, Rental , ,Logistics").unwrap(),
            ParamValue::List(vec![
                "Taxi".to_string(),
                "Rental".to_string(),
                "Logistics".to_string()
            ])
        );
        assert!(ParamKind::Count.parse("five").is_err());
        assert!(ParamKind::Ratio.parse("abc").is_err());
    }

    #[test]
    fn test_check_ratio_bounds() {
        assert!(ParamKind::Ratio.check(&ParamValue::Number(0.45)).is_ok());
        assert!(ParamKind::Ratio.check(&ParamValue::Integer(1)).is_ok());
        assert!(ParamKind::Ratio.check(&ParamValue::Number(1.2)).is_err());
        assert!(ParamKind::Ratio.check(&ParamValue::Number(-0.1)).is_err());
    }

    #[test]
    fn test_check_choice_normalises_case() {
        const TYPES: &[&str] = &["independent", "franchise", "dealership"];
        let kind = ParamKind::Choice(TYPES);
        assert_eq!(
            kind.check(&ParamValue::from("Franchise")).unwrap(),
            ParamValue::from("franchise")
        );
        assert!(kind.check(&ParamValue::from("co-op")).is_err());
    }

    #[test]
    fn test_check_rejects_wrong_shape() {
        let err = ParamKind::TextList
            .check(&ParamValue::from("Taxi"))
            .unwrap_err();
        assert_eq!(err, "expected list, got text");
        assert!(ParamKind::Text.check(&ParamValue::from("   ")).is_err());
        assert!(ParamKind::Currency.check(&ParamValue::Number(f64::NAN)).is_err());
        assert!(ParamKind::Count.check(&ParamValue::Integer(-3)).is_err());
    }

    #[test]
    fn test_decimal_bounds() {
        let rating = ParamKind::Decimal { min: 0.0, max: 5.0 };
        assert!(rating.check(&ParamValue::Number(4.8)).is_ok());
        assert!(rating.check(&ParamValue::Number(5.1)).is_err());
    }

    #[test]
    fn test_parameter_set_merge_overrides() {
        let base = ParameterSet::new()
            .with("service_area", "Local City")
            .with("business_name", "Shine");
        let merged = base.merge(ParameterSet::new().with("service_area", "Austin, TX"));
        assert_eq!(merged.get("service_area"), Some(&ParamValue::from("Austin, TX")));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_parameter_set_from_json() {
        let set: ParameterSet = serde_json::from_str(
            r#"{"business_name": "Shine", "google_rating": 4.8, "num_posts": 3, "goals": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(set.get("google_rating"), Some(&ParamValue::Number(4.8)));
        assert_eq!(set.get("num_posts"), Some(&ParamValue::Integer(3)));
        assert_eq!(
            set.get("goals"),
            Some(&ParamValue::List(vec!["a".to_string(), "b".to_string()]))
        );
    }
}
