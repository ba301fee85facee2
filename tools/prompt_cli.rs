//! illustrator-prompt: browse the Illustrator prompt guidance
//!
//! Prints example requests, the system prompt, prompting tips and advanced
//! templates without starting the MCP server.

use std::fmt::Write as _;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use illustrator_mcp::{
    error::PromptError,
    model::JsonObject,
    prompt::{
        advanced_templates, find_category, format_template, help_text, prompt_suggestions,
        prompting_tips, system_prompt, template,
    },
};

/// Suggestions shown per category in the overview
const PREVIEW_COUNT: usize = 3;

#[derive(Parser)]
#[command(name = "illustrator-prompt")]
#[command(about = "Adobe Illustrator MCP Prompt Helper")]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Get prompt suggestions
    Suggestions {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// List available categories
        #[arg(long)]
        list_categories: bool,
    },
    /// Get the system prompt template
    SystemPrompt,
    /// Get prompting tips
    Tips,
    /// Get advanced templates
    Template {
        /// Template type (logo_design, illustration, infographic, icon_set)
        #[arg(long = "type")]
        kind: Option<String>,
        /// List available template types
        #[arg(long)]
        list_types: bool,
        /// JSON object of parameters to fill the template
        #[arg(long)]
        params: Option<String>,
    },
    /// Display comprehensive help
    Help,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => print!("{}", render(command)),
        None => Cli::command().print_help()?,
    }

    Ok(())
}

fn render(command: Commands) -> String {
    match command {
        Commands::Suggestions {
            category,
            list_categories,
        } => render_suggestions(category.as_deref(), list_categories),
        Commands::SystemPrompt => format!("{}\n", system_prompt()),
        Commands::Tips => render_tips(),
        Commands::Template {
            kind,
            list_types,
            params,
        } => render_template(kind.as_deref(), list_types, params.as_deref()),
        Commands::Help => format!("{}\n", help_text()),
    }
}

fn category_list(out: &mut String) {
    out.push_str("Available categories:\n");
    for category in prompt_suggestions() {
        let _ = writeln!(out, "  - {}", category.name);
    }
}

fn template_list(out: &mut String, heading: &str) {
    let _ = writeln!(out, "{}", heading);
    for template in advanced_templates() {
        let _ = writeln!(out, "  - {}", template.name);
    }
}

fn render_suggestions(category: Option<&str>, list_categories: bool) -> String {
    let mut out = String::new();

    if list_categories {
        category_list(&mut out);
        return out;
    }

    match category {
        Some(query) => match find_category(query) {
            Some(found) => {
                let _ = writeln!(out, "\n{}", found.name);
                let _ = writeln!(out, "{}", "=".repeat(found.name.chars().count()));
                for suggestion in found.suggestions {
                    let _ = writeln!(out, "• {}", suggestion);
                }
            }
            None => {
                let _ = writeln!(out, "Category '{}' not found.", query);
                category_list(&mut out);
            }
        },
        None => {
            out.push_str("🎨 All Prompt Suggestions\n");
            let _ = writeln!(out, "{}", "=".repeat(25));
            for category in prompt_suggestions() {
                let _ = writeln!(out, "\n{}", category.name);
                let _ = writeln!(out, "{}", "-".repeat(category.name.chars().count()));
                for suggestion in category.suggestions.iter().take(PREVIEW_COUNT) {
                    let _ = writeln!(out, "• {}", suggestion);
                }
                if category.suggestions.len() > PREVIEW_COUNT {
                    let _ = writeln!(
                        out,
                        "  ... and {} more",
                        category.suggestions.len() - PREVIEW_COUNT
                    );
                }
            }
        }
    }

    out
}

fn render_tips() -> String {
    let mut out = String::from("💡 Prompting Tips for Adobe Illustrator\n");
    let _ = writeln!(out, "{}", "=".repeat(40));
    for tip in prompting_tips() {
        let _ = writeln!(out, "{}", tip);
    }
    out
}

fn render_template(kind: Option<&str>, list_types: bool, params: Option<&str>) -> String {
    let mut out = String::new();

    if list_types {
        template_list(&mut out, "Available template types:");
        return out;
    }

    let Some(kind) = kind else {
        out.push_str("Available advanced templates:\n");
        for template in advanced_templates() {
            let _ = writeln!(out, "\n{}:", template.title());
            let _ = writeln!(out, "  Use: illustrator-prompt template --type {}", template.name);
        }
        return out;
    };

    let Ok(found) = template(kind) else {
        let _ = writeln!(out, "Template '{}' not found.", kind);
        template_list(&mut out, "Available templates:");
        return out;
    };

    let Some(raw) = params else {
        let _ = writeln!(out, "{} Template:", found.title());
        let _ = writeln!(out, "{}", "=".repeat(30));
        let _ = writeln!(out, "{}", found.body);
        return out;
    };

    let Ok(params) = serde_json::from_str::<JsonObject>(raw) else {
        out.push_str("Error: Invalid JSON in --params\n");
        return out;
    };

    match format_template(kind, &params) {
        Ok(text) => {
            let _ = writeln!(out, "{}", text);
        }
        Err(e @ PromptError::MissingParameter(_)) => {
            let _ = writeln!(out, "Error: {}", e);
            out.push_str("\nTemplate with placeholders:\n");
            let _ = writeln!(out, "{}", found.body);
        }
        Err(e) => {
            let _ = writeln!(out, "Error: {}", e);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_shows_three_per_category() {
        let out = render_suggestions(None, false);
        assert!(out.starts_with("🎨 All Prompt Suggestions\n========================="));
        assert_eq!(out.matches("  ... and 2 more").count(), 8);
        assert!(out.contains("• Create a circle with a 5-inch diameter, filled with blue color"));
        assert!(!out.contains("Design a star shape with 8 points"));
    }

    #[test]
    fn test_category_filter() {
        let out = render_suggestions(Some("charts"), false);
        assert!(out.contains("📊 Charts & Infographics"));
        assert_eq!(out.matches("• ").count(), 5);
    }

    #[test]
    fn test_unknown_category_lists_available() {
        let out = render_suggestions(Some("pottery"), false);
        assert!(out.starts_with("Category 'pottery' not found."));
        assert!(out.contains("  - 🏷️ Print & Layout"));
    }

    #[test]
    fn test_list_categories() {
        let out = render_suggestions(Some("ignored"), true);
        assert!(out.starts_with("Available categories:"));
        assert_eq!(out.lines().count(), 9);
    }

    #[test]
    fn test_template_usage_overview() {
        let out = render_template(None, false, None);
        assert!(out.contains("\nLogo Design:\n  Use: illustrator-prompt template --type logo_design"));
    }

    #[test]
    fn test_raw_template() {
        let out = render_template(Some("icon_set"), false, None);
        assert!(out.starts_with("Icon Set Template:\n"));
        assert!(out.contains("{icon_list}"));
    }

    #[test]
    fn test_unknown_template() {
        let out = render_template(Some("poster"), false, None);
        assert!(out.starts_with("Template 'poster' not found."));
        assert!(out.contains("  - infographic"));
    }

    #[test]
    fn test_invalid_json_params() {
        let out = render_template(Some("logo_design"), false, Some("{not json"));
        assert_eq!(out, "Error: Invalid JSON in --params\n");
    }

    #[test]
    fn test_missing_parameter_prints_template() {
        let out = render_template(Some("logo_design"), false, Some(r#"{"company_name": "Acme"}"#));
        assert!(out.starts_with("Error: Missing required parameter: 'industry'"));
        assert!(out.contains("Template with placeholders:"));
        assert!(out.contains("{company_name}"));
    }

    #[test]
    fn test_filled_template() {
        let params = r#"{"style": "flat", "subject": "a lighthouse", "art_style": "geometric",
            "colors": "navy", "mood": "calm", "detail_level": "low", "background": "night sky"}"#;
        let out = render_template(Some("illustration"), false, Some(params));
        assert!(out.contains("Create a flat illustration of a lighthouse."));
    }

    #[test]
    fn test_tips_output() {
        let out = render_tips();
        assert_eq!(out.lines().count(), 12);
    }

    #[test]
    fn test_cli_parses_template_type() {
        let cli = Cli::try_parse_from(["illustrator-prompt", "template", "--type", "icon_set"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Template { kind: Some(ref k), .. }) if k == "icon_set"));
    }

    #[test]
    fn test_cli_help_subcommand() {
        let cli = Cli::try_parse_from(["illustrator-prompt", "help"]).unwrap();
        assert!(render(cli.command.unwrap()).contains("ADOBE ILLUSTRATOR MCP SERVER HELP"));
    }
}
