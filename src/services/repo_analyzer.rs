use std::collections::HashMap;
use crate::config::constants::MAX_EXISTING_README_CHARS;
use crate::errors::GitscribeResult;
use crate::services::dependency_parser::{parse_manifest, probed_ecosystems, MANIFEST_PROBES};
use crate::services::github_client::GithubClient;
use crate::services::structure_walker::StructureWalker;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::ecosystem_dependencies::EcosystemDependencies;
use crate::structs::language_share::LanguageShare;

/// Builds an `AnalysisResult` for one repository. The repository record is
/// the only required data source; every other lookup degrades to a neutral
/// default on failure.
pub struct RepoAnalyzer<'a> {
    client: &'a GithubClient,
    config: AnalysisConfig,
}

impl<'a> RepoAnalyzer<'a> {
    pub fn new(client: &'a GithubClient, config: AnalysisConfig) -> Self {
        Self { client, config }
    }

    pub async fn analyze(&self, full_name: &str) -> GitscribeResult<AnalysisResult> {
        let repo = self.client.get_repository(full_name).await?;

        let language_bytes = self.client.get_languages(full_name).await.unwrap_or_default();
        let walker = StructureWalker::new(
            self.client,
            self.config.max_tree_depth,
            self.config.max_entries_per_dir,
        );
        let structure = walker.walk(full_name).await;
        let dependencies = self.collect_dependencies(full_name).await;

        let existing_readme = match self.client.get_file_content(full_name, "README.md").await {
            Ok(Some(content)) => Some(truncate_chars(&content, MAX_EXISTING_README_CHARS)),
            _ => None,
        };
        // The readme endpoint also recognizes variants like README.rst.
        let has_readme = existing_readme.is_some() || self.client.has_readme(full_name).await;

        Ok(AnalysisResult {
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description.unwrap_or_default(),
            primary_language: repo.language,
            topics: repo.topics,
            license: repo.license.map(|l| l.name),
            has_readme,
            existing_readme,
            languages: language_percentages(&language_bytes),
            dependencies,
            structure,
        })
    }

    /// One bucket per probed ecosystem, found or not. A manifest that is
    /// absent or fails to parse leaves its bucket as-is.
    async fn collect_dependencies(&self, full_name: &str) -> Vec<EcosystemDependencies> {
        let mut buckets: Vec<EcosystemDependencies> = probed_ecosystems()
            .into_iter()
            .map(EcosystemDependencies::empty)
            .collect();

        for probe in MANIFEST_PROBES {
            let content = match self.client.get_file_content(full_name, probe.path).await {
                Ok(Some(content)) => content,
                Ok(None) => continue,
                Err(e) => {
                    log::debug!("manifest probe '{}' failed for '{}': {}", probe.path, full_name, e);
                    continue;
                }
            };

            let packages = parse_manifest(probe.strategy, &content);
            if let Some(bucket) = buckets.iter_mut().find(|b| b.ecosystem == probe.ecosystem) {
                bucket.packages.extend(packages);
            }
        }

        buckets
    }
}

/// Converts raw per-language byte counts into integer percentages that sum
/// to exactly 100. Entries are ordered by byte count descending (name
/// ascending on ties); every entry but the last takes its rounded share,
/// capped by the remaining budget, and the last entry absorbs the
/// remainder.
pub fn language_percentages(bytes: &HashMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = bytes.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut ordered: Vec<(&String, u64)> = bytes.iter().map(|(name, count)| (name, *count)).collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut shares = Vec::with_capacity(ordered.len());
    let mut remaining = 100u32;
    let last_index = ordered.len() - 1;

    for (index, (name, count)) in ordered.into_iter().enumerate() {
        let percent = if index == last_index {
            remaining
        } else {
            let rounded = ((count as f64 / total as f64) * 100.0).round() as u32;
            rounded.min(remaining)
        };
        remaining -= percent;
        shares.push(LanguageShare::new(name, percent));
    }

    shares
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries.iter().map(|(name, count)| (name.to_string(), *count)).collect()
    }

    #[test]
    fn percentages_match_proportions() {
        let shares = language_percentages(&bytes(&[("Python", 300), ("JavaScript", 100)]));
        assert_eq!(shares, vec![LanguageShare::new("Python", 75), LanguageShare::new("JavaScript", 25)]);
    }

    #[test]
    fn percentages_always_sum_to_exactly_100() {
        let cases: Vec<HashMap<String, u64>> = vec![
            bytes(&[("Rust", 1), ("Go", 1), ("C", 1)]),
            bytes(&[("A", 999), ("B", 1)]),
            bytes(&[("A", 7), ("B", 7), ("C", 7), ("D", 7), ("E", 7), ("F", 7), ("G", 2)]),
            bytes(&[("Solo", 42)]),
        ];

        for case in cases {
            let shares = language_percentages(&case);
            let sum: u32 = shares.iter().map(|s| s.percent).sum();
            assert_eq!(sum, 100, "case {:?} summed to {}", case, sum);
        }
    }

    #[test]
    fn pathological_roundings_never_overshoot() {
        // 200 one-byte languages each round to 0.5; naive rounding would
        // push the running total past 100.
        let mut many = HashMap::new();
        for i in 0..200u32 {
            many.insert(format!("Lang{:03}", i), 1u64);
        }
        let shares = language_percentages(&many);
        let sum: u32 = shares.iter().map(|s| s.percent).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn empty_byte_map_yields_empty_breakdown() {
        assert!(language_percentages(&HashMap::new()).is_empty());
    }

    #[test]
    fn breakdown_is_ordered_largest_first() {
        let shares = language_percentages(&bytes(&[("CSS", 50), ("TypeScript", 900), ("HTML", 50)]));
        assert_eq!(shares[0].name, "TypeScript");
        // Equal byte counts fall back to name order.
        assert_eq!(shares[1].name, "CSS");
        assert_eq!(shares[2].name, "HTML");
    }

    #[test]
    fn truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
