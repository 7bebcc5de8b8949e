use crate::config::constants::{MAX_PROMPT_DEPENDENCIES, MAX_PROMPT_STRUCTURE_ENTRIES};
use crate::errors::GitscribeResult;
use crate::prompts::readme_prompt::README_PROMPT_INSTRUCTIONS;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::tree_entry::TreeEntry;
use crate::traits::text_generator::TextGenerator;

/// Assembles the analysis into a single structured prompt and delegates to
/// the generative-text call. The generator's output is returned verbatim;
/// rendering is the caller's concern.
pub struct ReadmeComposer<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> ReadmeComposer<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    pub async fn compose(&self, analysis: &AnalysisResult, deployment_url: Option<&str>) -> GitscribeResult<String> {
        let prompt = build_prompt(analysis, deployment_url);
        let readme = self.generator.generate(&prompt).await?;
        Ok(readme)
    }
}

pub fn build_prompt(analysis: &AnalysisResult, deployment_url: Option<&str>) -> String {
    let languages = if analysis.languages.is_empty() {
        "Unknown".to_string()
    } else {
        analysis
            .languages
            .iter()
            .map(|share| format!("{} ({}%)", share.name, share.percent))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut prompt = format!(
        "Generate a professional README.md for a GitHub repository with the following details:\n\n\
         ## Repository Information\n\
         - **Name**: {}\n\
         - **Description**: {}\n\
         - **Primary Language**: {}\n\
         - **Languages Used**: {}\n\
         - **Topics/Tags**: {}\n\
         - **License**: {}\n\n\
         ## Project Structure\n{}\n\n\
         ## Dependencies\n{}\n",
        analysis.name,
        if analysis.description.is_empty() { "No description provided" } else { &analysis.description },
        analysis.primary_language.as_deref().unwrap_or("Unknown"),
        languages,
        if analysis.topics.is_empty() { "None".to_string() } else { analysis.topics.join(", ") },
        analysis.license.as_deref().unwrap_or("Not specified"),
        format_structure(&analysis.structure),
        format_dependencies(analysis),
    );

    if let Some(existing) = &analysis.existing_readme {
        prompt.push_str(&format!(
            "\n## Existing README Content (for reference, improve upon it)\n{}\n",
            existing
        ));
    }

    if let Some(url) = deployment_url {
        prompt.push_str(&format!("\n## Live Demo URL: {}\n", url));
    }

    prompt.push_str("\n---\n\n");
    prompt.push_str(README_PROMPT_INSTRUCTIONS);
    prompt
}

fn format_dependencies(analysis: &AnalysisResult) -> String {
    let mut lines = Vec::new();
    for bucket in &analysis.dependencies {
        if bucket.packages.is_empty() {
            continue;
        }
        let shown: Vec<&str> = bucket
            .packages
            .iter()
            .take(MAX_PROMPT_DEPENDENCIES)
            .map(String::as_str)
            .collect();
        lines.push(format!("**{}**: {}", bucket.ecosystem, shown.join(", ")));
    }

    if lines.is_empty() {
        "No dependencies detected".to_string()
    } else {
        lines.join("\n")
    }
}

fn format_structure(structure: &[TreeEntry]) -> String {
    if structure.is_empty() {
        return "Unable to fetch structure".to_string();
    }

    let mut lines = Vec::new();
    render_entries(structure, 0, &mut lines);
    lines.join("\n")
}

fn render_entries(entries: &[TreeEntry], indent: usize, lines: &mut Vec<String>) {
    for entry in entries {
        if lines.len() >= MAX_PROMPT_STRUCTURE_ENTRIES {
            return;
        }
        let marker = if entry.kind.is_dir() { "[dir]" } else { "[file]" };
        lines.push(format!("{}{} {}", "  ".repeat(indent), marker, entry.name));
        render_entries(&entry.children, indent + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::structs::ecosystem_dependencies::EcosystemDependencies;
    use crate::structs::language_share::LanguageShare;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            name: "sample".to_string(),
            full_name: "octocat/sample".to_string(),
            description: "A sample project".to_string(),
            primary_language: Some("Python".to_string()),
            topics: vec!["cli".to_string()],
            license: Some("MIT License".to_string()),
            has_readme: false,
            existing_readme: None,
            languages: vec![LanguageShare::new("Python", 75), LanguageShare::new("JavaScript", 25)],
            dependencies: vec![
                EcosystemDependencies {
                    ecosystem: "node".to_string(),
                    packages: (0..40).map(|i| format!("pkg{}", i)).collect(),
                },
                EcosystemDependencies::empty("python"),
            ],
            structure: vec![TreeEntry::file("main.py", "main.py")],
        }
    }

    #[test]
    fn prompt_contains_language_percentages() {
        let prompt = build_prompt(&analysis(), None);
        assert!(prompt.contains("Python (75%)"));
        assert!(prompt.contains("JavaScript (25%)"));
    }

    #[test]
    fn dependency_lists_are_truncated_per_ecosystem() {
        let prompt = build_prompt(&analysis(), None);
        assert!(prompt.contains("pkg14"));
        assert!(!prompt.contains("pkg15"));
    }

    #[test]
    fn deployment_url_appears_only_when_present() {
        let with_url = build_prompt(&analysis(), Some("https://sample.vercel.app"));
        assert!(with_url.contains("https://sample.vercel.app"));

        let without_url = build_prompt(&analysis(), None);
        assert!(!without_url.contains("Live Demo URL"));
    }

    #[test]
    fn structure_listing_is_bounded() {
        let mut wide = analysis();
        wide.structure = (0..100)
            .map(|i| TreeEntry::file(&format!("file{}.py", i), &format!("file{}.py", i)))
            .collect();
        let rendered = format_structure(&wide.structure);
        assert_eq!(rendered.lines().count(), MAX_PROMPT_STRUCTURE_ENTRIES);
    }

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, AiProviderError> {
            Ok(format!("# README\n\nprompt was {} chars", prompt.len()))
        }
    }

    #[tokio::test]
    async fn composer_returns_generator_output_verbatim() {
        let generator = EchoGenerator;
        let composer = ReadmeComposer::new(&generator);
        let readme = composer.compose(&analysis(), None).await.unwrap();
        assert!(readme.starts_with("# README"));
    }
}
