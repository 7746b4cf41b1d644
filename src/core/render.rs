//! Renderer module
//!
//! Renders command results to the supported output formats: jsonl, json, md

use serde::Serialize;

use crate::backends::record::IngredientRecord;
use crate::core::model::Recipe;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[cfg(test)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Items that know how to describe themselves in Markdown
pub trait MarkdownItem {
    fn write_markdown(&self, output: &mut String);
}

impl MarkdownItem for Recipe {
    fn write_markdown(&self, output: &mut String) {
        output.push_str(&format!("## {}\n\n", self.name));

        if let Some(description) = &self.description {
            output.push_str(&format!("*{}*\n\n", description));
        }

        output.push_str("**Ingredients:**\n\n");
        for requirement in &self.ingredients {
            output.push_str(&format!("- {}\n", requirement));
        }
        output.push('\n');

        if let Some(garnish) = &self.garnish {
            output.push_str(&format!("**Garnish:** {}\n\n", garnish));
        }

        output.push_str(&format!("**Instructions:** {}\n\n", self.instructions));

        if let Some(image) = &self.image_reference {
            output.push_str(&format!("![{}]({})\n\n", self.name, image));
        }
    }
}

impl MarkdownItem for IngredientRecord {
    fn write_markdown(&self, output: &mut String) {
        output.push_str(&format!(
            "## {}\n\n",
            self.name.as_deref().unwrap_or("Unknown ingredient")
        ));

        if let Some(kind) = &self.kind {
            output.push_str(&format!("- **Type:** {}\n", kind));
        }
        if let Some(alcohol) = &self.alcohol {
            output.push_str(&format!("- **Alcoholic:** {}\n", alcohol));
        }
        if let Some(abv) = &self.abv {
            output.push_str(&format!("- **ABV:** {}%\n", abv));
        }
        output.push('\n');

        if let Some(description) = &self.description {
            output.push_str(description.trim());
            output.push_str("\n\n");
        }
    }
}

/// Renderer for command results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[cfg(test)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render items to a string
    pub fn render<T: Serialize + MarkdownItem>(&self, items: &[T]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(items),
            OutputFormat::Json => self.render_json(items),
            OutputFormat::Markdown => self.render_markdown(items),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl<T: Serialize>(&self, items: &[T]) -> String {
        items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json<T: Serialize>(&self, items: &[T]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown<T: MarkdownItem>(&self, items: &[T]) -> String {
        if items.is_empty() {
            return "_Nothing to show._\n".to_string();
        }

        let mut output = String::new();
        for item in items {
            item.write_markdown(&mut output);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::IngredientRequirement;

    fn negroni() -> Recipe {
        let mut recipe = Recipe::new(
            "Negroni",
            vec![
                IngredientRequirement::new("Gin", "30ml"),
                IngredientRequirement::new("Campari", "30ml").with_brand("Campari"),
            ],
            "Stir with ice.",
        )
        .unwrap();
        recipe.garnish = Some("Orange peel".to_string());
        recipe.description = Some("Bitter and sweet.".to_string());
        recipe
    }

    fn gimlet() -> Recipe {
        Recipe::new("Gimlet", vec![IngredientRequirement::new("Gin", "60ml")], "Shake.").unwrap()
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&[negroni(), gimlet()]);

        assert_eq!(output.lines().count(), 2);
        let first: Recipe = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(first, negroni());
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&[gimlet()]);

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_render_json_empty() {
        let renderer = Renderer::new(OutputFormat::Json);
        assert_eq!(renderer.render::<Recipe>(&[]), "[]");
    }

    #[test]
    fn test_render_jsonl_pretty() {
        let config = RenderConfig::with_pretty(OutputFormat::Jsonl, true);
        let output = Renderer::with_config(config).render(&[gimlet(), gimlet()]);

        assert!(output.contains("\n\n"));
        assert!(output.contains("  \"name\""));
    }

    #[test]
    fn test_render_markdown_recipe() {
        let renderer = Renderer::new(OutputFormat::Markdown);
        let output = renderer.render(&[negroni()]);

        assert!(output.contains("## Negroni"));
        assert!(output.contains("*Bitter and sweet.*"));
        assert!(output.contains("- 30ml of Campari (Brand: Campari)"));
        assert!(output.contains("**Garnish:** Orange peel"));
        assert!(output.contains("**Instructions:** Stir with ice."));
        assert!(!output.contains("!["));
    }

    #[test]
    fn test_render_markdown_empty() {
        let renderer = Renderer::new(OutputFormat::Markdown);
        assert_eq!(renderer.render::<Recipe>(&[]), "_Nothing to show._\n");
    }

    #[test]
    fn test_render_markdown_ingredient() {
        let record = IngredientRecord {
            name: Some("Vodka".to_string()),
            kind: Some("Vodka".to_string()),
            abv: Some("40".to_string()),
            description: Some("A distilled spirit.".to_string()),
            ..Default::default()
        };

        let output = Renderer::new(OutputFormat::Markdown).render(&[record]);
        assert!(output.contains("## Vodka"));
        assert!(output.contains("- **ABV:** 40%"));
        assert!(output.contains("A distilled spirit."));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "Markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert!("pdf".parse::<OutputFormat>().unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert!(!config.pretty);
    }
}
