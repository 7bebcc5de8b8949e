use reqwest::Client;
use crate::config::constants::{timeout_duration, DEPLOYMENT_TIMEOUT_SECS, VERCEL_API_BASE};
use crate::structs::deployment_status::DeploymentStatus;
use crate::structs::vercel::vercel_deployment::VercelDeploymentList;
use crate::structs::vercel::vercel_project::{VercelProject, VercelProjectList};

/// Looks up the Vercel project linked to a repository and resolves its
/// production URL. Deployment status is best-effort enrichment: a missing
/// token, an unmatched project, or any platform failure yields `None`.
pub struct DeploymentDetector {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl DeploymentDetector {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url: VERCEL_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub async fn detect(&self, repo_name: &str) -> Option<DeploymentStatus> {
        let token = self.token.as_ref()?;

        let project = self.find_project(token, repo_name).await?;
        let url = match self.latest_production_url(token, &project.id).await {
            Some(url) => url,
            None => format!("https://{}.vercel.app", project.name),
        };

        Some(DeploymentStatus {
            project: project.name,
            url,
        })
    }

    async fn find_project(&self, token: &str, repo_name: &str) -> Option<VercelProject> {
        let url = format!("{}/v9/projects", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .timeout(timeout_duration(DEPLOYMENT_TIMEOUT_SECS))
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            log::debug!("Vercel project listing returned {}", response.status());
            return None;
        }

        let list: VercelProjectList = response.json().await.ok()?;
        let wanted = repo_name.to_lowercase();
        let normalized = normalize_project_name(repo_name);

        list.projects.into_iter().find(|project| {
            let linked = project
                .link
                .as_ref()
                .filter(|link| link.link_type.as_deref() == Some("github"))
                .and_then(|link| link.repo.as_ref())
                .map(|repo| repo.to_lowercase().contains(&wanted))
                .unwrap_or(false);
            linked || project.name.to_lowercase() == normalized
        })
    }

    async fn latest_production_url(&self, token: &str, project_id: &str) -> Option<String> {
        let url = format!(
            "{}/v6/deployments?projectId={}&target=production&limit=1",
            self.base_url, project_id
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .timeout(timeout_duration(DEPLOYMENT_TIMEOUT_SECS))
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let list: VercelDeploymentList = response.json().await.ok()?;
        list.deployments
            .into_iter()
            .next()
            .and_then(|deployment| deployment.url)
            .map(|url| format!("https://{}", url))
    }
}

/// Vercel project names are lowercase; everything outside `[a-z0-9-]` is
/// stripped.
pub fn normalize_project_name(repo_name: &str) -> String {
    repo_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lowercases_and_strips() {
        assert_eq!(normalize_project_name("My_Repo.Name"), "myreponame");
        assert_eq!(normalize_project_name("already-fine"), "already-fine");
        assert_eq!(normalize_project_name("Weather App 2"), "weatherapp2");
    }

    #[tokio::test]
    async fn missing_token_yields_none() {
        let detector = DeploymentDetector::new(None);
        assert!(detector.detect("sample").await.is_none());
    }
}
