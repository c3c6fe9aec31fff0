//! Template interpolation.

use crate::domain::errors::{StrategyError, StrategyResult};
use crate::domain::models::{
    parse_template, BoundParameters, CapabilitySpec, KnowledgeBase, ParamValue,
    PlaceholderFormat, RenderedRequest, Segment, KNOWLEDGE_PLACEHOLDER,
};

/// Renders capability templates against bound parameters.
///
/// Pure string interpolation: no conditionals, no escaping. The same spec and
/// parameters always produce the same text.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    knowledge: KnowledgeBase,
}

impl TemplateRenderer {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn render(
        &self,
        spec: &CapabilitySpec,
        params: &BoundParameters,
    ) -> StrategyResult<RenderedRequest> {
        for param in spec.params {
            if params.get(param.name).is_none() {
                return Err(StrategyError::MissingParameter {
                    capability: spec.name.to_string(),
                    parameter: param.name.to_string(),
                });
            }
        }

        // Catalog validation already parsed every template; a failure here
        // means the capability bypassed the catalog.
        let segments =
            parse_template(spec.template).map_err(|reason| StrategyError::TemplateSubstitution {
                capability: spec.name.to_string(),
                placeholder: format!("<unparseable: {reason}>"),
            })?;

        let mut text = String::with_capacity(spec.template.len() + self.knowledge.text().len());
        for segment in segments {
            match segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Placeholder { name, .. } if name == KNOWLEDGE_PLACEHOLDER => {
                    text.push_str(self.knowledge.text());
                }
                Segment::Placeholder { name, format } => {
                    let value = params
                        .get(name)
                        .filter(|_| spec.param(name).is_some())
                        .ok_or_else(|| StrategyError::TemplateSubstitution {
                            capability: spec.name.to_string(),
                            placeholder: name.to_string(),
                        })?;
                    text.push_str(&display_value(value, format));
                }
            }
        }

        Ok(RenderedRequest {
            capability: spec.name,
            text,
            max_tokens: spec.max_tokens,
        })
    }
}

fn display_value(value: &ParamValue, format: PlaceholderFormat) -> String {
    match (format, value.as_number()) {
        (PlaceholderFormat::Percent, Some(ratio)) => format_percent(ratio),
        _ => value.to_string(),
    }
}

/// `0.45` → `"45"`; rounds away float noise from the scaling.
fn format_percent(ratio: f64) -> String {
    let percent = (ratio * 100.0 * 1e6).round() / 1e6;
    percent.to_string()
}
