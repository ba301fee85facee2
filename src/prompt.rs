//! Prompt guidance for Illustrator automation
//!
//! Static guidance shared by the server and the `illustrator-prompt` CLI:
//!
//! - the system prompt sent as MCP server instructions
//! - categorized example requests
//! - advanced templates with `{placeholder}` fields
//! - prompting tips
//!
//! # Examples
//!
//! ```
//! use illustrator_mcp::prompt::{format_template, template_placeholders};
//!
//! let names = template_placeholders("icon_set").unwrap();
//! assert_eq!(names[0], "number");
//!
//! let params = serde_json::json!({
//!     "number": 4,
//!     "purpose": "a weather app",
//!     "style": "outline",
//!     "size": "24px",
//!     "colors": "slate and sky blue",
//!     "icon_list": "sun, cloud, rain, snow",
//! });
//! let text = format_template("icon_set", params.as_object().unwrap()).unwrap();
//! assert!(text.contains("Create a set of 4 icons for a weather app."));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{error::PromptError, model::JsonObject};

const SYSTEM_PROMPT: &str = "
You are an AI assistant that can control Adobe Illustrator through ExtendScript/JavaScript.
You can create vector graphics, illustrations, logos, and designs directly in Illustrator.

CAPABILITIES:
- Create shapes, paths, and vector graphics
- Apply colors, gradients, and effects
- Manipulate text and typography
- Work with layers and artboards
- Import/export files
- Apply transformations and effects

BEST PRACTICES:
- Always describe what you're creating before executing
- Use specific measurements and coordinates when possible
- Consider color theory and design principles
- Test simple shapes before complex illustrations
- Use meaningful names for layers and objects

EXTENDSCRIPT TIPS:
- Use app.activeDocument to access the current document
- Create new documents with app.documents.add()
- Use pathItems.rectangle(), pathItems.ellipse() for basic shapes
- Access colors through app.activeDocument.swatches
- Use textFrames.add() for text elements
";

/// Named group of example requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptCategory {
    /// Display name, including its emoji marker
    pub name:        &'static str,
    /// Example requests, most basic first
    pub suggestions: &'static [&'static str],
}

/// Named prompt template with `{placeholder}` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Template identifier (e.g. "logo_design")
    pub name: &'static str,
    /// Template text
    pub body: &'static str,
}

impl PromptTemplate {
    /// Human-readable title, e.g. "Logo Design" for "logo_design"
    pub fn title(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

static PROMPT_SUGGESTIONS: [PromptCategory; 8] = [
    PromptCategory {
        name:        "🎨 Basic Shapes & Geometry",
        suggestions: &[
            "Create a circle with a 5-inch diameter, filled with blue color",
            "Draw a golden rectangle using the golden ratio proportions",
            "Make a hexagon with equal sides, outlined in black, filled with gradient from red to orange",
            "Create a triangle with rounded corners and a drop shadow effect",
            "Design a star shape with 8 points and apply a metallic gradient",
        ],
    },
    PromptCategory {
        name:        "📝 Typography & Text",
        suggestions: &[
            "Create a modern logo text saying 'TechCorp' using a bold sans-serif font",
            "Design a vintage-style typography poster with the text 'Coffee Shop' in brown tones",
            "Make a text effect with 'NEON' that looks like glowing neon lights",
            "Create a 3D text effect for the word 'FUTURE' with metallic finish",
            "Design a handwritten-style text saying 'Welcome' with decorative flourishes",
        ],
    },
    PromptCategory {
        name:        "🏢 Logos & Branding",
        suggestions: &[
            "Design a minimalist logo for a photography studio called 'LensArt'",
            "Create a modern tech company logo incorporating circuit patterns",
            "Design a coffee shop logo with a steaming cup and warm colors",
            "Make a fitness brand logo with dynamic, energetic elements",
            "Create a nature-inspired logo for an eco-friendly company",
        ],
    },
    PromptCategory {
        name:        "🌆 Illustrations & Scenes",
        suggestions: &[
            "Create a flat design illustration of a city skyline at sunset",
            "Design a vector illustration of a peaceful forest scene with animals",
            "Make a minimalist mountain landscape with geometric shapes",
            "Create an isometric illustration of a modern office workspace",
            "Design a space scene with planets, stars, and a rocket ship",
        ],
    },
    PromptCategory {
        name:        "🎭 Icons & UI Elements",
        suggestions: &[
            "Create a set of 5 social media icons in a consistent style",
            "Design weather icons: sun, cloud, rain, and snow",
            "Make a collection of navigation icons for a mobile app",
            "Create business icons: chart, briefcase, handshake, lightbulb",
            "Design food icons in a flat, colorful style",
        ],
    },
    PromptCategory {
        name:        "🎨 Artistic & Creative",
        suggestions: &[
            "Create an abstract geometric pattern with vibrant colors",
            "Design a mandala pattern with intricate details and symmetry",
            "Make a watercolor-style illustration (using vector techniques)",
            "Create a vintage poster design for a music festival",
            "Design a modern art piece inspired by cubism",
        ],
    },
    PromptCategory {
        name:        "📊 Charts & Infographics",
        suggestions: &[
            "Create a pie chart showing market share data with labels",
            "Design a bar chart comparing quarterly sales figures",
            "Make an infographic about renewable energy with icons and stats",
            "Create a flowchart for a simple business process",
            "Design a timeline infographic for historical events",
        ],
    },
    PromptCategory {
        name:        "🏷️ Print & Layout",
        suggestions: &[
            "Design a business card layout with company information",
            "Create a flyer design for a summer sale event",
            "Make a book cover design for a mystery novel",
            "Design a magazine layout with text and image placeholders",
            "Create a poster design for a charity fundraising event",
        ],
    },
];

static ADVANCED_TEMPLATES: [PromptTemplate; 4] = [
    PromptTemplate {
        name: "logo_design",
        body: "
    Design a professional logo for {company_name} in the {industry} industry.

    Requirements:
    - Style: {style} (modern, vintage, minimalist, etc.)
    - Colors: {colors}
    - Include: {elements}
    - Size: {size}
    - Format: Vector format suitable for scalability

    Please create the logo step by step, explaining each design decision.
    ",
    },
    PromptTemplate {
        name: "illustration",
        body: "
    Create a {style} illustration of {subject}.

    Specifications:
    - Art style: {art_style}
    - Color palette: {colors}
    - Mood: {mood}
    - Level of detail: {detail_level}
    - Background: {background}

    Start with basic shapes and build up the complexity gradually.
    ",
    },
    PromptTemplate {
        name: "infographic",
        body: "
    Design an infographic about {topic}.

    Content structure:
    - Title: {title}
    - Key statistics: {stats}
    - Visual elements: {visual_elements}
    - Color scheme: {colors}
    - Target audience: {audience}

    Use icons, charts, and visual hierarchy to make the information engaging.
    ",
    },
    PromptTemplate {
        name: "icon_set",
        body: "
    Create a set of {number} icons for {purpose}.

    Icon specifications:
    - Style: {style} (flat, outline, filled, etc.)
    - Size: {size}
    - Color scheme: {colors}
    - Icons needed: {icon_list}
    - Consistency: Maintain visual consistency across all icons

    Design each icon to be clear and recognizable at small sizes.
    ",
    },
];

static PROMPTING_TIPS: [&str; 10] = [
    "🎯 Be specific about dimensions, colors, and positioning",
    "📐 Use exact measurements when precision matters",
    "🎨 Describe the art style or aesthetic you want",
    "📝 Break complex requests into smaller steps",
    "🔄 Ask for iterations and refinements",
    "📋 Specify file format and export requirements",
    "🎭 Mention the intended use case or context",
    "🔍 Request previews before finalizing complex designs",
    "📊 Provide reference examples when possible",
    "⚡ Start simple and add complexity gradually",
];

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is a valid regex"));

/// System prompt describing how to drive Illustrator with ExtendScript
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Example request categories, in display order
pub fn prompt_suggestions() -> &'static [PromptCategory] {
    &PROMPT_SUGGESTIONS
}

/// First category whose name contains `query`, ignoring case
///
/// # Examples
///
/// ```
/// use illustrator_mcp::prompt::find_category;
///
/// assert_eq!(find_category("logos").unwrap().name, "🏢 Logos & Branding");
/// assert!(find_category("sculpture").is_none());
/// ```
pub fn find_category(query: &str) -> Option<&'static PromptCategory> {
    let query = query.to_lowercase();
    PROMPT_SUGGESTIONS
        .iter()
        .find(|category| category.name.to_lowercase().contains(&query))
}

/// Advanced templates, in display order
pub fn advanced_templates() -> &'static [PromptTemplate] {
    &ADVANCED_TEMPLATES
}

/// Looks up a template by exact name
pub fn template(name: &str) -> Result<&'static PromptTemplate, PromptError> {
    ADVANCED_TEMPLATES
        .iter()
        .find(|template| template.name == name)
        .ok_or_else(|| PromptError::UnknownTemplate(name.to_string()))
}

/// Placeholder names of a template, in first-appearance order, without repeats
pub fn template_placeholders(name: &str) -> Result<Vec<&'static str>, PromptError> {
    let body = template(name)?.body;

    let mut names: Vec<&'static str> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(body) {
        if let Some(found) = captures.get(1) {
            let found = found.as_str();
            if !names.contains(&found) {
                names.push(found);
            }
        }
    }
    Ok(names)
}

/// Fills every placeholder of a template from `params`
///
/// String values are inserted as-is; other JSON values use their JSON text.
/// Extra parameters are ignored.
///
/// # Errors
///
/// - `PromptError::UnknownTemplate` if no template has this name
/// - `PromptError::MissingParameter` naming the first placeholder without a
///   value
pub fn format_template(name: &str, params: &JsonObject) -> Result<String, PromptError> {
    let body = template(name)?.body;

    if let Some(missing) = template_placeholders(name)?
        .into_iter()
        .find(|placeholder| !params.contains_key(*placeholder))
    {
        return Err(PromptError::MissingParameter(missing.to_string()));
    }

    let filled = PLACEHOLDER.replace_all(body, |captures: &regex::Captures<'_>| {
        match params.get(&captures[1]) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => captures[0].to_string(),
        }
    });

    Ok(filled.into_owned())
}

/// Tips for writing effective Illustrator requests
pub fn prompting_tips() -> &'static [&'static str] {
    &PROMPTING_TIPS
}

/// Overview of the server with tips and category names
pub fn help_text() -> String {
    let mut help = String::from(
        "
    🎨 ADOBE ILLUSTRATOR MCP SERVER HELP 🎨

    This server allows you to control Adobe Illustrator using natural language.
    You can create vector graphics, illustrations, logos, and designs.

    📋 QUICK START:
    1. Make sure Adobe Illustrator is running
    2. Use natural language to describe what you want to create
    3. The AI will generate ExtendScript code to execute in Illustrator
    4. View results using the screenshot feature

    💡 PROMPTING TIPS:
    ",
    );

    for tip in PROMPTING_TIPS {
        help.push_str("\n    ");
        help.push_str(tip);
    }

    help.push_str("\n\n📚 EXAMPLE CATEGORIES:\n");

    for category in &PROMPT_SUGGESTIONS {
        help.push_str("\n    ");
        help.push_str(category.name);
    }

    help.push_str("\n\n🔧 Use 'illustrator-prompt suggestions' to see specific examples!");
    help
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_system_prompt_mentions_extendscript() {
        let prompt = system_prompt();
        assert!(prompt.contains("ExtendScript"));
        assert!(prompt.contains("app.documents.add()"));
    }

    #[test]
    fn test_suggestion_categories() {
        let categories = prompt_suggestions();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0].name, "🎨 Basic Shapes & Geometry");
        assert_eq!(categories[7].name, "🏷️ Print & Layout");
        assert!(categories.iter().all(|c| c.suggestions.len() == 5));
    }

    #[test]
    fn test_find_category_case_insensitive() {
        assert_eq!(find_category("TYPOGRAPHY").unwrap().name, "📝 Typography & Text");
        assert_eq!(find_category("icons").unwrap().name, "🎭 Icons & UI Elements");
    }

    #[test]
    fn test_find_category_first_match_wins() {
        // "&" appears in every category name
        assert_eq!(find_category("&").unwrap().name, "🎨 Basic Shapes & Geometry");
    }

    #[test]
    fn test_unknown_template() {
        assert_eq!(template("poster"), Err(PromptError::UnknownTemplate("poster".to_string())));
        assert!(format_template("poster", &JsonObject::new()).is_err());
    }

    #[test]
    fn test_template_titles() {
        let titles: Vec<String> = advanced_templates().iter().map(PromptTemplate::title).collect();
        assert_eq!(titles, vec!["Logo Design", "Illustration", "Infographic", "Icon Set"]);
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(template_placeholders("logo_design").unwrap(), vec![
            "company_name",
            "industry",
            "style",
            "colors",
            "elements",
            "size"
        ]);
    }

    #[test]
    fn test_format_logo_template() {
        let text = format_template(
            "logo_design",
            &params(json!({
                "company_name": "LensArt",
                "industry": "photography",
                "style": "minimalist",
                "colors": "black and gold",
                "elements": "a camera aperture",
                "size": "512x512",
            })),
        )
        .unwrap();

        assert!(text.contains("Design a professional logo for LensArt in the photography industry."));
        assert!(text.contains("- Size: 512x512"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_format_reports_first_missing_parameter() {
        let err = format_template("illustration", &params(json!({"style": "flat"}))).unwrap_err();
        assert_eq!(err, PromptError::MissingParameter("subject".to_string()));
        assert_eq!(err.to_string(), "Missing required parameter: 'subject'");
    }

    #[test]
    fn test_format_ignores_extra_parameters() {
        let text = format_template(
            "infographic",
            &params(json!({
                "topic": "solar power",
                "title": "Sunny Side",
                "stats": "3 key figures",
                "visual_elements": "icons",
                "colors": "yellow",
                "audience": "students",
                "unused": "value",
            })),
        )
        .unwrap();
        assert!(text.contains("Design an infographic about solar power."));
    }

    #[test]
    fn test_tips() {
        assert_eq!(prompting_tips().len(), 10);
        assert!(prompting_tips()[0].contains("Be specific"));
    }

    #[test]
    fn test_help_lists_tips_and_categories() {
        let help = help_text();
        assert!(help.contains("ADOBE ILLUSTRATOR MCP SERVER HELP"));
        for tip in prompting_tips() {
            assert!(help.contains(tip));
        }
        for category in prompt_suggestions() {
            assert!(help.contains(category.name));
        }
    }
}
