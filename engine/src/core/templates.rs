//! Variable prompt templates
//!
//! Built-in prompt bodies with `{variable}` placeholders. Rendering never
//! substitutes defaults: every placeholder needs a non-empty value.

use regex::Regex;
use shared::{component_debug, Component};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{EngineError, EngineResult};

/// A named template body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

static TEMPLATES: [PromptTemplate; 4] = [
    PromptTemplate {
        name: "Code Generation",
        description: "Optimized for generating clean, efficient code",
        body: "You are an expert software engineer. Your task is to:

1. Understand the requirements completely
2. Write clean, efficient, and well-documented code
3. Follow best practices and design patterns
4. Include error handling and edge cases

Requirements: {requirements}

Please provide:
- Complete implementation
- Code comments explaining complex logic
- Usage examples
- Time and space complexity analysis where relevant",
    },
    PromptTemplate {
        name: "Data Analysis",
        description: "Structured approach for data analysis tasks",
        body: "Analyze the following data with a systematic approach:

Dataset: {dataset_description}

Your analysis should include:
1. **Data Overview**: Key statistics and patterns
2. **Insights**: Notable findings and correlations
3. **Anomalies**: Unusual patterns or outliers
4. **Recommendations**: Actionable insights based on analysis
5. **Limitations**: Any constraints or caveats

Use clear visualizations descriptions and quantitative metrics.",
    },
    PromptTemplate {
        name: "Creative Writing",
        description: "Enhanced creativity with structure",
        body: "Create a compelling {content_type} with these parameters:

Theme: {theme}
Tone: {tone}
Target Audience: {audience}

Requirements:
- Engaging opening that hooks the reader
- Rich, vivid descriptions
- Strong character development (if applicable)
- Clear narrative arc
- Satisfying conclusion

Additional constraints: {constraints}",
    },
    PromptTemplate {
        name: "Research & Synthesis",
        description: "Comprehensive research and information synthesis",
        body: "Conduct thorough research on: {topic}

Provide a comprehensive analysis including:

## Executive Summary
Brief overview of key findings

## Detailed Analysis
- Current state of knowledge
- Key stakeholders and perspectives
- Recent developments and trends
- Challenges and opportunities

## Evidence and Sources
Cite credible sources and data points

## Conclusions
Synthesize findings into actionable insights

## Future Outlook
Predictions and recommendations

Depth level: {depth_level}
Focus areas: {focus_areas}",
    },
];

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("static placeholder regex"))
}

/// All built-in templates
pub fn all() -> &'static [PromptTemplate] {
    &TEMPLATES
}

/// Find a template by name, ignoring case
pub fn find(name: &str) -> Option<&'static PromptTemplate> {
    let wanted = name.trim();
    TEMPLATES.iter().find(|t| t.name.eq_ignore_ascii_case(wanted))
}

/// Render a template by name
pub fn render(name: &str, values: &HashMap<String, String>) -> EngineResult<String> {
    let template = find(name).ok_or_else(|| EngineError::UnknownTemplate { name: name.to_string() })?;
    template.render(values)
}

impl PromptTemplate {
    /// Placeholder names in first-occurrence order, without duplicates
    pub fn variables(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for captures in placeholder().captures_iter(self.body) {
            if let Some(name) = captures.get(1).map(|m| m.as_str()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder; all missing or blank values are reported together
    pub fn render(&self, values: &HashMap<String, String>) -> EngineResult<String> {
        let missing: Vec<String> = self
            .variables()
            .into_iter()
            .filter(|v| values.get(*v).is_none_or(|value| value.trim().is_empty()))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::UnresolvedTemplateVariable {
                template: self.name.to_string(),
                missing,
            });
        }

        let rendered = placeholder().replace_all(self.body, |captures: &regex::Captures<'_>| {
            values.get(&captures[1]).cloned().unwrap_or_default()
        });
        component_debug!(Component::Templates, template = self.name, "Template rendered");
        Ok(rendered.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_variables_in_order() {
        let creative = find("Creative Writing").unwrap();
        assert_eq!(creative.variables(), vec!["content_type", "theme", "tone", "audience", "constraints"]);
        assert_eq!(find("Code Generation").unwrap().variables(), vec!["requirements"]);
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("data analysis").unwrap().name, "Data Analysis");
        assert!(find("Poetry").is_none());
    }

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let rendered = render("Code Generation", &values(&[("requirements", "a CSV parser")])).unwrap();
        assert!(rendered.contains("Requirements: a CSV parser"));
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn test_render_reports_every_missing_variable() {
        let result = render("Research & Synthesis", &values(&[("topic", "fusion"), ("depth_level", "  ")]));
        match result {
            Err(EngineError::UnresolvedTemplateVariable { template, missing }) => {
                assert_eq!(template, "Research & Synthesis");
                assert_eq!(missing, vec!["depth_level", "focus_areas"]);
            }
            other => panic!("expected unresolved variables, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_template() {
        let result = render("Nope", &HashMap::new());
        assert!(matches!(result, Err(EngineError::UnknownTemplate { .. })));
    }
}
