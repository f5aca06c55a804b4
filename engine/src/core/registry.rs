//! Technique registry
//!
//! Static catalog of prompt-scaffolding transformations. Each rule is a pure,
//! total `fn(&str) -> String` that wraps or extends the text; none of them
//! ever turns a non-empty prompt into an empty one.
//!
//! Rules are not idempotent: applying one twice nests or duplicates its
//! scaffolding. Callers are responsible for applying a technique at most once.

use regex::Regex;
use shared::TechniqueCategory;
use std::sync::OnceLock;

/// A named prompt transformation
#[derive(Debug, Clone, Copy)]
pub struct Technique {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TechniqueCategory,
    pub description: &'static str,
    rule: fn(&str) -> String,
}

impl Technique {
    /// Apply this technique's rule to `text`
    pub fn apply(&self, text: &str) -> String {
        (self.rule)(text)
    }

    /// Display name with its category label, e.g. `Step-by-Step Reasoning (Chain of Thought)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.category.label())
    }
}

impl PartialEq for Technique {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Technique {}

/// Registry in declaration order; this order is also the application order
static TECHNIQUES: [Technique; 19] = [
    // Structural markup
    Technique {
        id: "xml_tags",
        name: "XML Task Tags",
        category: TechniqueCategory::StructuralMarkup,
        description: "Delimits the task inside <task> tags",
        rule: wrap_xml_task,
    },
    Technique {
        id: "markdown_sections",
        name: "Markdown Sections",
        category: TechniqueCategory::StructuralMarkup,
        description: "Places the task under a Task heading followed by a Requirements list",
        rule: wrap_markdown_sections,
    },
    Technique {
        id: "labeled_sections",
        name: "Labeled Sections",
        category: TechniqueCategory::StructuralMarkup,
        description: "Labels the task description and the expected output in bold",
        rule: wrap_labeled_sections,
    },
    Technique {
        id: "clarity_cleanup",
        name: "Clarity Cleanup",
        category: TechniqueCategory::StructuralMarkup,
        description: "Collapses runs of blank lines and strips politeness fillers",
        rule: clean_up_clarity,
    },
    // Reasoning scaffolds
    Technique {
        id: "step_by_step",
        name: "Step-by-Step Reasoning",
        category: TechniqueCategory::ReasoningScaffold,
        description: "Appends a numbered reasoning checklist",
        rule: append_reasoning_steps,
    },
    Technique {
        id: "self_verification",
        name: "Self-Verification",
        category: TechniqueCategory::ReasoningScaffold,
        description: "Asks the model to check its answer before responding",
        rule: append_self_verification,
    },
    // Role personas
    Technique {
        id: "expert_role",
        name: "Expert Role",
        category: TechniqueCategory::RolePersona,
        description: "Prepends a subject-matter expert persona",
        rule: prepend_expert_role,
    },
    Technique {
        id: "software_engineer_role",
        name: "Software Engineer Role",
        category: TechniqueCategory::RolePersona,
        description: "Prepends an expert software engineer persona",
        rule: prepend_engineer_role,
    },
    Technique {
        id: "data_analyst_role",
        name: "Data Analyst Role",
        category: TechniqueCategory::RolePersona,
        description: "Prepends a systematic data analyst persona",
        rule: prepend_analyst_role,
    },
    Technique {
        id: "creative_writer_role",
        name: "Creative Writer Role",
        category: TechniqueCategory::RolePersona,
        description: "Prepends an imaginative writer persona",
        rule: prepend_writer_role,
    },
    // Output formats
    Technique {
        id: "json_output",
        name: "JSON Output",
        category: TechniqueCategory::OutputFormat,
        description: "Requests a valid JSON response",
        rule: append_json_directive,
    },
    Technique {
        id: "response_sections",
        name: "Sectioned Response",
        category: TechniqueCategory::OutputFormat,
        description: "Appends a Summary / Details / Next Steps response skeleton",
        rule: append_response_sections,
    },
    Technique {
        id: "code_deliverables",
        name: "Code Deliverables",
        category: TechniqueCategory::OutputFormat,
        description: "Lists the expected deliverables of a coding answer",
        rule: append_code_deliverables,
    },
    Technique {
        id: "analysis_report",
        name: "Analysis Report",
        category: TechniqueCategory::OutputFormat,
        description: "Appends a five-part data analysis report outline",
        rule: append_analysis_report,
    },
    // Constraint injection
    Technique {
        id: "specificity_hints",
        name: "Specificity Hints",
        category: TechniqueCategory::ConstraintInjection,
        description: "Turns bare explain requests into step-by-step ones and asks code for comments and error handling",
        rule: add_specificity_hints,
    },
    // Examples are requested before practical constraints are appended
    Technique {
        id: "illustrative_examples",
        name: "Illustrative Examples",
        category: TechniqueCategory::ExemplarInjection,
        description: "Asks for concrete examples illustrating each point",
        rule: append_example_request,
    },
    Technique {
        id: "practical_constraints",
        name: "Practical Constraints",
        category: TechniqueCategory::ConstraintInjection,
        description: "Asks for concise, practical, jargon-free answers",
        rule: append_practical_constraints,
    },
    Technique {
        id: "narrative_requirements",
        name: "Narrative Requirements",
        category: TechniqueCategory::ConstraintInjection,
        description: "Adds requirements for hook, imagery, arc and conclusion",
        rule: append_narrative_requirements,
    },
    // Exemplar injection
    Technique {
        id: "few_shot_skeleton",
        name: "Few-Shot Skeleton",
        category: TechniqueCategory::ExemplarInjection,
        description: "Appends an input/output example skeleton to fill in",
        rule: append_few_shot_skeleton,
    },
];

/// All techniques in declaration order
pub fn all() -> &'static [Technique] {
    &TECHNIQUES
}

/// Look up a technique by id
pub fn lookup(id: &str) -> Option<&'static Technique> {
    TECHNIQUES.iter().find(|t| t.id == id)
}

/// Declaration index of a technique id
pub fn position(id: &str) -> Option<usize> {
    TECHNIQUES.iter().position(|t| t.id == id)
}

/// Techniques of one category, in declaration order
pub fn list_by_category(category: TechniqueCategory) -> Vec<&'static Technique> {
    TECHNIQUES.iter().filter(|t| t.category == category).collect()
}

fn wrap_xml_task(text: &str) -> String {
    format!("<task>\n{text}\n</task>")
}

fn wrap_markdown_sections(text: &str) -> String {
    format!("### Task\n{text}\n\n### Requirements\n- Provide detailed response\n- Use clear formatting")
}

fn wrap_labeled_sections(text: &str) -> String {
    format!(
        "**Task Description:**\n{text}\n\n**Expected Output:**\nProvide comprehensive response with clear sections."
    )
}

fn blank_line_runs() -> &'static Regex {
    static RUNS: OnceLock<Regex> = OnceLock::new();
    RUNS.get_or_init(|| Regex::new(r"\n{3,}").expect("static blank-line regex"))
}

fn clean_up_clarity(text: &str) -> String {
    let cleaned = blank_line_runs()
        .replace_all(text, "\n\n")
        .replace("Please ", "")
        .replace("Could you ", "");

    // A prompt made only of fillers stays as it was
    if cleaned.trim().is_empty() {
        text.to_string()
    } else {
        cleaned
    }
}

fn append_reasoning_steps(text: &str) -> String {
    format!(
        "{text}\n\nThink through this step by step:\n\
         1. Restate the problem in your own words\n\
         2. Identify the key facts, assumptions and unknowns\n\
         3. Reason through each part in order, showing your work\n\
         4. Check the intermediate results for consistency\n\
         5. State the final answer clearly"
    )
}

fn append_self_verification(text: &str) -> String {
    format!(
        "{text}\n\nBefore giving your final answer, verify that:\n\
         1. Every part of the task has been addressed\n\
         2. Each claim follows from the reasoning above\n\
         3. No step contradicts another"
    )
}

fn prepend_expert_role(text: &str) -> String {
    format!("You are a domain expert with deep, practical knowledge of the subject below.\n\n{text}")
}

fn prepend_engineer_role(text: &str) -> String {
    format!(
        "You are an expert software engineer who writes clean, efficient, and well-documented code \
         following established best practices and design patterns.\n\n{text}"
    )
}

fn prepend_analyst_role(text: &str) -> String {
    format!(
        "You are a senior data analyst who approaches every dataset systematically and backs \
         conclusions with quantitative evidence.\n\n{text}"
    )
}

fn prepend_writer_role(text: &str) -> String {
    format!(
        "You are an accomplished creative writer known for vivid imagery and compelling narratives.\n\n{text}"
    )
}

fn append_json_directive(text: &str) -> String {
    format!("{text}\n\nRespond with valid JSON format.")
}

fn append_response_sections(text: &str) -> String {
    format!("{text}\n\nStructure your response as:\n## Summary\n## Details\n## Next Steps")
}

fn append_code_deliverables(text: &str) -> String {
    format!(
        "{text}\n\nPlease provide:\n\
         - Complete implementation\n\
         - Code comments explaining complex logic\n\
         - Error handling and edge cases\n\
         - Usage examples\n\
         - Time and space complexity analysis where relevant"
    )
}

fn append_analysis_report(text: &str) -> String {
    format!(
        "{text}\n\nYour analysis should include:\n\
         1. **Data Overview**: Key statistics and patterns\n\
         2. **Insights**: Notable findings and correlations\n\
         3. **Anomalies**: Unusual patterns or outliers\n\
         4. **Recommendations**: Actionable insights based on analysis\n\
         5. **Limitations**: Any constraints or caveats"
    )
}

fn add_specificity_hints(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut hinted = text.to_string();

    if lower.contains("explain") && !lower.contains("how") {
        hinted = hinted.replace("explain", "explain step-by-step how");
    }
    if lower.contains("write") && lower.contains("code") {
        hinted.push_str("\nInclude comments and error handling.");
    }
    hinted
}

fn append_practical_constraints(text: &str) -> String {
    format!("{text}\n\nConstraints: Be concise, focus on practical applications, avoid jargon.")
}

fn append_narrative_requirements(text: &str) -> String {
    format!(
        "{text}\n\nRequirements:\n\
         - Engaging opening that hooks the reader\n\
         - Rich, vivid descriptions\n\
         - Strong character development (if applicable)\n\
         - Clear narrative arc\n\
         - Satisfying conclusion"
    )
}

fn append_example_request(text: &str) -> String {
    format!("{text}\n\nProvide specific examples to illustrate your points.")
}

fn append_few_shot_skeleton(text: &str) -> String {
    format!(
        "{text}\n\nFollow the pattern of these examples:\n\
         Example 1:\nInput: <sample input>\nOutput: <expected output>\n\n\
         Example 2:\nInput: <sample input>\nOutput: <expected output>"
    )
}
