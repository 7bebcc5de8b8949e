use crate::enums::grade::Grade;
use crate::structs::health_check::HealthCheck;
use crate::structs::tree_entry::TreeEntry;

const LICENSE_FILE_NAMES: &[&str] = &[
    "license",
    "license.md",
    "license.txt",
    "licence",
    "copying",
    "unlicense",
];

const TEST_PATH_SEGMENTS: &[&str] = &["test", "tests", "spec", "specs", "__tests__"];

const CI_TOP_LEVEL_PATHS: &[&str] = &[
    ".gitlab-ci.yml",
    ".travis.yml",
    "Jenkinsfile",
    "azure-pipelines.yml",
    ".circleci",
];

/// Fixed, ordered battery of presence checks over the repository summary
/// and the bounded tree. Pure: no network, no state.
pub struct HealthScorer;

impl HealthScorer {
    pub fn run_checks(has_readme: bool, structure: &[TreeEntry]) -> Vec<HealthCheck> {
        let paths = collect_paths(structure);

        vec![
            HealthCheck::new("readme", has_readme),
            HealthCheck::new("license", has_license(structure)),
            HealthCheck::new("tests", has_tests(&paths)),
            HealthCheck::new("ci", has_ci_config(&paths)),
            HealthCheck::new("gitignore", has_gitignore(structure)),
        ]
    }

    pub fn score(checks: &[HealthCheck]) -> u32 {
        if checks.is_empty() {
            return 0;
        }
        let passed = checks.iter().filter(|c| c.passed).count() as u32;
        let total = checks.len() as u32;
        (passed * 100 + total / 2) / total
    }

    pub fn grade(score: u32) -> Grade {
        Grade::from_score(score)
    }
}

fn collect_paths(structure: &[TreeEntry]) -> Vec<String> {
    let mut paths = Vec::new();
    for entry in structure {
        paths.push(entry.path.clone());
        paths.extend(collect_paths(&entry.children));
    }
    paths
}

fn has_license(structure: &[TreeEntry]) -> bool {
    structure
        .iter()
        .any(|entry| LICENSE_FILE_NAMES.contains(&entry.name.to_lowercase().as_str()))
}

fn has_gitignore(structure: &[TreeEntry]) -> bool {
    structure.iter().any(|entry| entry.name == ".gitignore")
}

fn has_tests(paths: &[String]) -> bool {
    paths.iter().any(|path| {
        let segments: Vec<&str> = path.split('/').collect();
        let file_name = segments.last().copied().unwrap_or_default();
        segments
            .iter()
            .any(|segment| TEST_PATH_SEGMENTS.contains(&segment.to_lowercase().as_str()))
            || is_test_file_name(file_name)
    })
}

fn is_test_file_name(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    let stem = lower.split('.').next().unwrap_or_default();
    stem.ends_with("_test")
        || stem.starts_with("test_")
        || lower.contains(".test.")
        || lower.contains(".spec.")
}

fn has_ci_config(paths: &[String]) -> bool {
    paths
        .iter()
        .any(|path| path == ".github/workflows" || path.starts_with(".github/workflows/"))
        || paths
            .iter()
            .any(|path| CI_TOP_LEVEL_PATHS.contains(&path.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(names: &[&str]) -> Vec<TreeEntry> {
        names.iter().map(|name| TreeEntry::file(name, name)).collect()
    }

    #[test]
    fn readme_only_repository_scores_twenty_and_fails() {
        let checks = HealthScorer::run_checks(true, &[]);
        assert_eq!(checks.len(), 5);
        let score = HealthScorer::score(&checks);
        assert_eq!(score, 20);
        assert_eq!(HealthScorer::grade(score), Grade::F);
    }

    #[test]
    fn all_checks_passing_scores_one_hundred() {
        let structure = vec![
            TreeEntry::file("LICENSE", "LICENSE"),
            TreeEntry::file(".gitignore", ".gitignore"),
            TreeEntry::dir(
                ".github",
                ".github",
                vec![TreeEntry::dir(".github/workflows", ".github/workflows", Vec::new())],
            ),
            TreeEntry::dir("tests", "tests", vec![TreeEntry::file("smoke.rs", "tests/smoke.rs")]),
        ];
        let checks = HealthScorer::run_checks(true, &structure);
        assert!(checks.iter().all(|c| c.passed));
        let score = HealthScorer::score(&checks);
        assert_eq!(score, 100);
        assert_eq!(HealthScorer::grade(score), Grade::A);
    }

    #[test]
    fn license_lookup_is_case_insensitive_over_common_variants() {
        assert!(has_license(&tree(&["License.md"])));
        assert!(has_license(&tree(&["COPYING"])));
        assert!(!has_license(&tree(&["LICENSES.old"])));
    }

    #[test]
    fn test_detection_matches_directories_and_file_names() {
        assert!(has_tests(&["src/lib.rs".to_string(), "tests/it.rs".to_string()]));
        assert!(has_tests(&["src/parser_test.go".to_string()]));
        assert!(has_tests(&["test_models.py".to_string()]));
        assert!(has_tests(&["app/Button.spec.tsx".to_string()]));
        assert!(!has_tests(&["src/lib.rs".to_string(), "docs/guide.md".to_string()]));
    }

    #[test]
    fn ci_detection_matches_workflows_and_known_configs() {
        assert!(has_ci_config(&[".github/workflows".to_string()]));
        assert!(has_ci_config(&[".github/workflows/ci.yml".to_string()]));
        assert!(has_ci_config(&[".travis.yml".to_string()]));
        assert!(!has_ci_config(&[".github/FUNDING.yml".to_string()]));
    }

    #[test]
    fn score_is_always_within_bounds() {
        for passed in 0..=5usize {
            let checks: Vec<HealthCheck> = (0..5)
                .map(|i| HealthCheck::new("check", i < passed))
                .collect();
            let score = HealthScorer::score(&checks);
            assert!(score <= 100);
            assert_eq!(score, (passed as u32) * 20);
        }
    }
}
