//! Capability declarations.
//!
//! A [`CapabilitySpec`] is pure data: name, parameters, template and output
//! ceiling. Rendering and dispatch are written once in the services layer and
//! shared by every capability.

use std::collections::BTreeMap;

use crate::domain::errors::{CatalogError, StrategyError};
use crate::domain::models::params::{ParamKind, ParamSpec, ParamValue, ParameterSet};

/// Placeholder that expands to the knowledge base text.
pub const KNOWLEDGE_PLACEHOLDER: &str = "knowledge";

/// How a placeholder's value is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderFormat {
    /// Natural display text.
    Plain,
    /// Ratio scaled by 100 (`{repeat_rate:percent}`).
    Percent,
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder {
        name: &'a str,
        format: PlaceholderFormat,
    },
}

/// Split a template into literal text and `{name}` / `{name:format}` placeholders.
///
/// Templates have no escaping; a brace is always the start or end of a placeholder.
pub fn parse_template(template: &str) -> Result<Vec<Segment<'_>>, String> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find(['{', '}']) {
        if rest.as_bytes()[open] == b'}' {
            return Err(format!("unmatched '}}' at offset {}", template.len() - rest.len() + open));
        }
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| "unclosed placeholder".to_string())?;
        let inner = &after[..close];
        let (name, format) = match inner.split_once(':') {
            None => (inner, PlaceholderFormat::Plain),
            Some((name, "percent")) => (name, PlaceholderFormat::Percent),
            Some((_, other)) => return Err(format!("unknown placeholder format '{other}'")),
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!("invalid placeholder name '{inner}'"));
        }
        segments.push(Segment::Placeholder { name, format });
        rest = &after[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

/// Static description of one strategy-generation capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapabilitySpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub template: &'static str,
    /// Maximum number of tokens the backend may generate.
    pub max_tokens: u32,
}

impl CapabilitySpec {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Check the template/parameter invariants.
    ///
    /// Every placeholder names a declared parameter or the knowledge base,
    /// every parameter is used, and the knowledge base is included.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let capability = self.name.to_string();

        if self.max_tokens == 0 {
            return Err(CatalogError::ZeroOutputCeiling { capability });
        }

        for (i, param) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|p| p.name == param.name) {
                return Err(CatalogError::DuplicateParameter {
                    capability,
                    parameter: param.name.to_string(),
                });
            }
            if let Some(default) = param.default {
                param
                    .kind
                    .parse(default)
                    .and_then(|value| param.kind.check(&value))
                    .map_err(|reason| CatalogError::InvalidDefault {
                        capability: capability.clone(),
                        parameter: param.name.to_string(),
                        reason,
                    })?;
            }
        }

        let segments =
            parse_template(self.template).map_err(|reason| CatalogError::MalformedTemplate {
                capability: capability.clone(),
                reason,
            })?;

        let mut knowledge_uses = 0;
        for segment in &segments {
            let Segment::Placeholder { name, format } = segment else {
                continue;
            };
            if *name == KNOWLEDGE_PLACEHOLDER {
                if *format != PlaceholderFormat::Plain {
                    return Err(CatalogError::MalformedTemplate {
                        capability,
                        reason: "knowledge placeholder takes no format".to_string(),
                    });
                }
                knowledge_uses += 1;
                continue;
            }
            let Some(param) = self.param(name) else {
                return Err(CatalogError::UndeclaredPlaceholder {
                    capability,
                    placeholder: (*name).to_string(),
                });
            };
            if *format == PlaceholderFormat::Percent && param.kind != ParamKind::Ratio {
                return Err(CatalogError::MalformedTemplate {
                    capability,
                    reason: format!("'{name}' is not a ratio and cannot be shown as a percent"),
                });
            }
        }

        match knowledge_uses {
            0 => return Err(CatalogError::MissingKnowledgePlaceholder { capability }),
            1 => {}
            _ => {
                return Err(CatalogError::MalformedTemplate {
                    capability,
                    reason: "knowledge base included more than once".to_string(),
                })
            }
        }

        for param in self.params {
            let used = segments.iter().any(
                |segment| matches!(segment, Segment::Placeholder { name, .. } if *name == param.name),
            );
            if !used {
                return Err(CatalogError::UnusedParameter {
                    capability,
                    parameter: param.name.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Resolve the caller's values against the declared parameters.
    ///
    /// Applies defaults, checks every value against its kind and drops values
    /// the capability does not declare.
    pub fn bind(&self, supplied: &ParameterSet) -> Result<BoundParameters, StrategyError> {
        let mut values = BTreeMap::new();

        for param in self.params {
            let value = match (supplied.get(param.name), param.default) {
                (Some(value), _) => value.clone(),
                (None, Some(default)) => param.kind.parse(default).map_err(|reason| {
                    StrategyError::InvalidParameter {
                        capability: self.name.to_string(),
                        parameter: param.name.to_string(),
                        reason,
                    }
                })?,
                (None, None) => {
                    return Err(StrategyError::MissingParameter {
                        capability: self.name.to_string(),
                        parameter: param.name.to_string(),
                    })
                }
            };

            let checked =
                param
                    .kind
                    .check(&value)
                    .map_err(|reason| StrategyError::InvalidParameter {
                        capability: self.name.to_string(),
                        parameter: param.name.to_string(),
                        reason,
                    })?;
            values.insert(param.name, checked);
        }

        for extra in supplied.names().filter(|name| self.param(name).is_none()) {
            tracing::debug!(capability = self.name, parameter = extra, "Ignoring undeclared parameter");
        }

        Ok(BoundParameters { values })
    }
}

/// Parameter values validated against a [`CapabilitySpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParameters {
    values: BTreeMap<&'static str, ParamValue>,
}

impl BoundParameters {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    /// Build from already-checked values, bypassing validation.
    ///
    /// Only useful for exercising the renderer's own consistency checks.
    pub fn from_unchecked(values: impl IntoIterator<Item = (&'static str, ParamValue)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}
