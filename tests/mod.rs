//! Integration tests covering the analysis pipeline end to end, using fakes
//! at the network seams.

use std::collections::HashMap;

use async_trait::async_trait;
use gitscribe::enums::ai_provider_error::AiProviderError;
use gitscribe::enums::finding_severity::FindingSeverity;
use gitscribe::enums::grade::Grade;
use gitscribe::errors::{GitscribeError, GitscribeResult};
use gitscribe::services::dependency_parser::{parse_manifest, probed_ecosystems, ManifestStrategy};
use gitscribe::services::deployment_detector::normalize_project_name;
use gitscribe::services::health_scorer::HealthScorer;
use gitscribe::services::readme_composer::{build_prompt, ReadmeComposer};
use gitscribe::services::repo_analyzer::language_percentages;
use gitscribe::services::security_scanner::scan_content;
use gitscribe::services::structure_walker::StructureWalker;
use gitscribe::structs::analysis_result::AnalysisResult;
use gitscribe::structs::ecosystem_dependencies::EcosystemDependencies;
use gitscribe::structs::github::github_content::GithubContent;
use gitscribe::structs::language_share::LanguageShare;
use gitscribe::structs::security_report::SecurityReport;
use gitscribe::structs::tree_entry::TreeEntry;
use gitscribe::traits::directory_lister::DirectoryLister;
use gitscribe::traits::text_generator::TextGenerator;

fn byte_counts(entries: &[(&str, u64)]) -> HashMap<String, u64> {
    entries.iter().map(|(name, count)| (name.to_string(), *count)).collect()
}

fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        name: "weather-app".to_string(),
        full_name: "octocat/weather-app".to_string(),
        description: "Shows the weather".to_string(),
        primary_language: Some("Python".to_string()),
        topics: Vec::new(),
        license: None,
        has_readme: false,
        existing_readme: None,
        languages: vec![LanguageShare::new("Python", 75), LanguageShare::new("JavaScript", 25)],
        dependencies: vec![
            EcosystemDependencies {
                ecosystem: "node".to_string(),
                packages: vec!["flask".to_string()],
            },
            EcosystemDependencies::empty("python"),
        ],
        structure: vec![TreeEntry::file("main.py", "main.py")],
    }
}

mod language_analysis {
    use super::*;

    #[test]
    fn byte_counts_become_exact_percentages() {
        let shares = language_percentages(&byte_counts(&[("Python", 300), ("JavaScript", 100)]));
        assert_eq!(shares, vec![LanguageShare::new("Python", 75), LanguageShare::new("JavaScript", 25)]);
    }

    #[test]
    fn percentages_sum_to_one_hundred_for_any_nonempty_input() {
        let awkward = byte_counts(&[("A", 1), ("B", 1), ("C", 1), ("D", 1), ("E", 1), ("F", 1), ("G", 1)]);
        let shares = language_percentages(&awkward);
        assert_eq!(shares.iter().map(|s| s.percent).sum::<u32>(), 100);
    }

    #[test]
    fn no_reported_languages_means_empty_breakdown() {
        assert!(language_percentages(&HashMap::new()).is_empty());
    }
}

mod dependency_analysis {
    use super::*;

    #[test]
    fn package_json_dependency_lands_in_the_node_bucket() {
        let packages = parse_manifest(
            ManifestStrategy::NodePackageJson,
            r#"{"dependencies": {"flask": "*"}}"#,
        );
        assert_eq!(packages, vec!["flask"]);
    }

    #[test]
    fn every_probed_ecosystem_gets_a_bucket_even_without_manifests() {
        let buckets: Vec<EcosystemDependencies> = probed_ecosystems()
            .into_iter()
            .map(EcosystemDependencies::empty)
            .collect();

        assert_eq!(buckets.len(), 5);
        for ecosystem in ["node", "python", "rust", "go", "ruby"] {
            let bucket = buckets
                .iter()
                .find(|b| b.ecosystem == ecosystem)
                .unwrap_or_else(|| panic!("missing bucket for {}", ecosystem));
            assert!(bucket.packages.is_empty());
        }
    }

    #[test]
    fn broken_manifests_degrade_to_empty_lists() {
        assert!(parse_manifest(ManifestStrategy::NodePackageJson, "not json at all").is_empty());
        assert!(parse_manifest(ManifestStrategy::GoMod, "").is_empty());
    }
}

mod structure_bounds {
    use super::*;

    /// Every directory claims `width` subdirectories, forever.
    struct BottomlessLister {
        width: usize,
    }

    #[async_trait]
    impl DirectoryLister for BottomlessLister {
        async fn list_directory(&self, _full_name: &str, path: &str) -> GitscribeResult<Vec<GithubContent>> {
            Ok((0..self.width)
                .map(|i| {
                    let name = format!("nested{}", i);
                    GithubContent {
                        path: if path.is_empty() { name.clone() } else { format!("{}/{}", path, name) },
                        name,
                        sha: format!("sha{}", i),
                        content_type: "dir".to_string(),
                        size: 0,
                        content: None,
                        encoding: None,
                    }
                })
                .collect())
        }
    }

    struct UnreachableLister;

    #[async_trait]
    impl DirectoryLister for UnreachableLister {
        async fn list_directory(&self, full_name: &str, _path: &str) -> GitscribeResult<Vec<GithubContent>> {
            Err(GitscribeError::repo_not_found(full_name))
        }
    }

    #[tokio::test]
    async fn walker_depth_is_capped_on_a_bottomless_tree() {
        let lister = BottomlessLister { width: 3 };
        let walker = StructureWalker::new(&lister, 2, 25);
        let tree = walker.walk("octocat/deep").await;

        assert!(!tree.is_empty());
        let deepest = tree.iter().map(TreeEntry::depth).max().unwrap();
        assert_eq!(deepest, 2);
    }

    #[tokio::test]
    async fn walker_breadth_is_capped_per_directory() {
        let lister = BottomlessLister { width: 80 };
        let walker = StructureWalker::new(&lister, 1, 4);
        let tree = walker.walk("octocat/wide").await;

        assert_eq!(tree.len(), 4);
        assert!(tree.iter().all(|entry| entry.children.len() <= 4));
    }

    #[tokio::test]
    async fn inaccessible_repository_yields_empty_not_error() {
        let walker = StructureWalker::new(&UnreachableLister, 2, 25);
        assert!(walker.walk("octocat/gone").await.is_empty());
    }
}

mod health_scoring {
    use super::*;

    #[test]
    fn readme_only_repository_scores_twenty_grade_f() {
        let checks = HealthScorer::run_checks(true, &[]);
        assert_eq!(checks.len(), 5);
        assert_eq!(checks.iter().filter(|c| c.passed).count(), 1);

        let score = HealthScorer::score(&checks);
        assert_eq!(score, 20);
        assert_eq!(HealthScorer::grade(score), Grade::F);
    }

    #[test]
    fn fully_equipped_repository_scores_one_hundred_grade_a() {
        let structure = vec![
            TreeEntry::file("LICENSE", "LICENSE"),
            TreeEntry::file(".gitignore", ".gitignore"),
            TreeEntry::dir(
                ".github",
                ".github",
                vec![TreeEntry::dir("workflows", ".github/workflows", Vec::new())],
            ),
            TreeEntry::dir("tests", "tests", Vec::new()),
        ];

        let checks = HealthScorer::run_checks(true, &structure);
        let score = HealthScorer::score(&checks);
        assert_eq!(score, 100);
        assert_eq!(HealthScorer::grade(score), Grade::A);
    }

    #[test]
    fn grade_cutoffs_hold_at_the_boundaries() {
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(75), Grade::B);
        assert_eq!(Grade::from_score(74), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(40), Grade::D);
        assert_eq!(Grade::from_score(39), Grade::F);
    }
}

mod security_scanning {
    use super::*;

    #[test]
    fn api_key_shaped_content_produces_a_critical_finding_with_path() {
        let mut issues = Vec::new();
        let mut warnings = Vec::new();
        scan_content(
            "app/settings.py",
            r#"API_KEY = "abcd1234efgh5678ijkl""#,
            &mut issues,
            &mut warnings,
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].file_path, "app/settings.py");
        assert_eq!(issues[0].severity, FindingSeverity::Critical);

        let report = SecurityReport::new(issues, warnings);
        assert!(report.has_critical);
    }

    #[test]
    fn has_critical_tracks_issues_independently_of_warnings() {
        let mut issues = Vec::new();
        let mut warnings = Vec::new();
        scan_content("db.ini", r#"password = "open-sesame""#, &mut issues, &mut warnings);

        assert!(issues.is_empty());
        assert!(!warnings.is_empty());
        let report = SecurityReport::new(issues, warnings);
        assert!(!report.has_critical);

        let report = SecurityReport::new(
            vec![gitscribe::structs::security_finding::SecurityFinding::critical(".env", "committed env file")],
            Vec::new(),
        );
        assert!(report.has_critical);
    }
}

mod readme_composition {
    use super::*;

    struct CannedGenerator;

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AiProviderError> {
            Ok("# Weather App\n\nGenerated readme body.".to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AiProviderError> {
            Err(AiProviderError::ApiError("Rate limit exceeded".to_string()))
        }
    }

    #[test]
    fn prompt_carries_languages_dependencies_and_deployment_url() {
        let prompt = build_prompt(&sample_analysis(), Some("https://weather-app.vercel.app"));

        assert!(prompt.contains("Python (75%)"));
        assert!(prompt.contains("JavaScript (25%)"));
        assert!(prompt.contains("flask"));
        assert!(prompt.contains("https://weather-app.vercel.app"));
    }

    #[test]
    fn prompt_omits_the_demo_section_without_a_deployment() {
        let prompt = build_prompt(&sample_analysis(), None);
        assert!(!prompt.contains("Live Demo URL"));
    }

    #[tokio::test]
    async fn composer_returns_the_generated_text_verbatim() {
        let generator = CannedGenerator;
        let composer = ReadmeComposer::new(&generator);
        let readme = composer.compose(&sample_analysis(), None).await.unwrap();
        assert_eq!(readme, "# Weather App\n\nGenerated readme body.");
    }

    #[tokio::test]
    async fn generator_failures_surface_as_errors() {
        let generator = FailingGenerator;
        let composer = ReadmeComposer::new(&generator);
        let error = composer.compose(&sample_analysis(), None).await.unwrap_err();
        assert!(matches!(error, GitscribeError::AiError { .. }));
    }
}

mod deployment_matching {
    use super::*;

    #[test]
    fn project_names_are_lowercased_and_stripped() {
        assert_eq!(normalize_project_name("Weather App"), "weatherapp");
        assert_eq!(normalize_project_name("my_repo.v2"), "myrepov2");
        assert_eq!(normalize_project_name("kebab-case-ok"), "kebab-case-ok");
    }
}
