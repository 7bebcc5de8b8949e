use chrono::{Datelike, Utc};
use tokio::time::timeout;
use crate::config::constants::{
    timeout_duration, ANALYSIS_TIMEOUT_SECS, DEFAULT_COMMIT_MESSAGE, DEPLOYMENT_TIMEOUT_SECS,
    GITIGNORE_COMMIT_MESSAGE, LICENSE_COMMIT_MESSAGE,
};
use crate::constants::templates::{gitignore_for_language, MIT_LICENSE_TEMPLATE};
use crate::errors::{GitscribeError, GitscribeResult};
use crate::services::deployment_detector::DeploymentDetector;
use crate::services::github_client::GithubClient;
use crate::services::health_scorer::HealthScorer;
use crate::services::readme_composer::ReadmeComposer;
use crate::services::repo_analyzer::RepoAnalyzer;
use crate::services::security_scanner::SecurityScanner;
use crate::services::structure_walker::StructureWalker;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::commit_outcome::CommitOutcome;
use crate::structs::config::config::Config;
use crate::structs::deployment_status::DeploymentStatus;
use crate::structs::health_report::HealthReport;
use crate::structs::readme_bundle::ReadmeBundle;
use crate::structs::repository_summary::RepositorySummary;
use crate::structs::security_report::SecurityReport;
use crate::traits::text_generator::TextGenerator;

/// Orchestration facade shared by the CLI and the dashboard. Owns the
/// per-request service instances; holds no state across calls.
pub struct RepositoryManager {
    config: Config,
    github: GithubClient,
    generator: Box<dyn TextGenerator>,
    detector: DeploymentDetector,
}

impl RepositoryManager {
    pub fn new(
        config: Config,
        github: GithubClient,
        generator: Box<dyn TextGenerator>,
        detector: DeploymentDetector,
    ) -> Self {
        Self {
            config,
            github,
            generator,
            detector,
        }
    }

    pub fn github(&self) -> &GithubClient {
        &self.github
    }

    pub async fn list_repositories(&self, include_forks: bool) -> GitscribeResult<Vec<RepositorySummary>> {
        self.github.list_repositories(include_forks).await
    }

    /// Resolves a bare repository name against the authenticated account.
    /// Names already containing an owner pass through unchanged.
    pub async fn resolve_full_name(&self, repo: &str) -> GitscribeResult<String> {
        if repo.contains('/') {
            return Ok(repo.to_string());
        }
        let user = self.github.authenticated_user().await?;
        Ok(format!("{}/{}", user.login, repo))
    }

    pub async fn analyze(&self, repo: &str) -> GitscribeResult<AnalysisResult> {
        let full_name = self.resolve_full_name(repo).await?;
        let analyzer = RepoAnalyzer::new(&self.github, self.config.analysis.clone());
        analyzer.analyze(&full_name).await
    }

    pub async fn deployment_status(&self, repo: &str) -> Option<DeploymentStatus> {
        if !self.config.deployment.enabled {
            return None;
        }
        let name = repo.rsplit('/').next().unwrap_or(repo);
        match timeout(timeout_duration(DEPLOYMENT_TIMEOUT_SECS), self.detector.detect(name)).await {
            Ok(status) => status,
            Err(_) => {
                log::debug!("deployment probe for '{}' timed out", name);
                None
            }
        }
    }

    pub async fn health_report(&self, repo: &str) -> GitscribeResult<HealthReport> {
        let full_name = self.resolve_full_name(repo).await?;
        let has_readme = self.github.has_readme(&full_name).await;
        let walker = StructureWalker::new(
            &self.github,
            self.config.analysis.max_tree_depth,
            self.config.analysis.max_entries_per_dir,
        );
        let structure = walker.walk(&full_name).await;

        let checks = HealthScorer::run_checks(has_readme, &structure);
        let score = HealthScorer::score(&checks);
        let scanner = SecurityScanner::new(&self.github, self.config.analysis.max_scanned_files);
        let security = scanner.scan(&full_name, &structure).await;

        Ok(HealthReport {
            score,
            grade: HealthScorer::grade(score),
            checks,
            security,
        })
    }

    pub async fn security_report(&self, repo: &str) -> GitscribeResult<SecurityReport> {
        let full_name = self.resolve_full_name(repo).await?;
        let walker = StructureWalker::new(
            &self.github,
            self.config.analysis.max_tree_depth,
            self.config.analysis.max_entries_per_dir,
        );
        let structure = walker.walk(&full_name).await;
        let scanner = SecurityScanner::new(&self.github, self.config.analysis.max_scanned_files);
        Ok(scanner.scan(&full_name, &structure).await)
    }

    /// Analysis and the deployment probe are independent, so they run
    /// concurrently under their own timeouts and join before composing.
    /// Only the analysis is required; the deployment branch degrades to
    /// `None`.
    pub async fn generate_readme(&self, repo: &str) -> GitscribeResult<ReadmeBundle> {
        let (analysis, deployment) = tokio::join!(
            timeout(timeout_duration(ANALYSIS_TIMEOUT_SECS), self.analyze(repo)),
            self.deployment_status(repo),
        );

        let analysis = analysis
            .map_err(|_| GitscribeError::network_error("analyze repository", None, None, "analysis timed out"))??;
        let deployment_url = deployment.map(|status| status.url);

        let composer = ReadmeComposer::new(self.generator.as_ref());
        let readme = composer.compose(&analysis, deployment_url.as_deref()).await?;

        Ok(ReadmeBundle {
            readme,
            analysis,
            deployment_url,
        })
    }

    /// Best-effort single write. The current revision is read first so a
    /// concurrent edit between read and write surfaces as a conflict.
    pub async fn commit_readme(&self, repo: &str, content: &str, message: Option<&str>) -> GitscribeResult<CommitOutcome> {
        let full_name = self.resolve_full_name(repo).await?;
        let revision = self
            .github
            .get_file_revision(&full_name, "README.md")
            .await?
            .map(|(sha, _)| sha);

        self.github
            .create_or_update_file(
                &full_name,
                "README.md",
                content,
                message.unwrap_or(DEFAULT_COMMIT_MESSAGE),
                revision.as_deref(),
            )
            .await
    }

    pub async fn add_license(&self, repo: &str) -> GitscribeResult<CommitOutcome> {
        let full_name = self.resolve_full_name(repo).await?;
        let user = self.github.authenticated_user().await?;
        let owner = user.name.unwrap_or(user.login);
        let content = MIT_LICENSE_TEMPLATE
            .replace("{year}", &Utc::now().year().to_string())
            .replace("{owner}", &owner);

        let revision = self
            .github
            .get_file_revision(&full_name, "LICENSE")
            .await?
            .map(|(sha, _)| sha);

        self.github
            .create_or_update_file(&full_name, "LICENSE", &content, LICENSE_COMMIT_MESSAGE, revision.as_deref())
            .await
    }

    pub async fn add_gitignore(&self, repo: &str) -> GitscribeResult<CommitOutcome> {
        let full_name = self.resolve_full_name(repo).await?;
        let repository = self.github.get_repository(&full_name).await?;
        let content = gitignore_for_language(repository.language.as_deref());

        let revision = self
            .github
            .get_file_revision(&full_name, ".gitignore")
            .await?
            .map(|(sha, _)| sha);

        self.github
            .create_or_update_file(&full_name, ".gitignore", content, GITIGNORE_COMMIT_MESSAGE, revision.as_deref())
            .await
    }
}
