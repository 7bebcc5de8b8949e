use std::collections::HashMap;
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use crate::config::constants::{
    timeout_duration, GITHUB_API_BASE, HTTP_TIMEOUT_SECS, README_PROBE_CHUNK_SIZE, REPOS_PER_PAGE,
};
use crate::errors::{GitscribeError, GitscribeResult};
use crate::structs::commit_outcome::CommitOutcome;
use crate::structs::github::github_commit_response::GithubCommitResponse;
use crate::structs::github::github_content::GithubContent;
use crate::structs::github::github_repo::GithubRepo;
use crate::structs::github::github_user::GithubUser;
use crate::structs::repository_summary::RepositorySummary;
use crate::traits::directory_lister::DirectoryLister;

pub struct GithubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url: GITHUB_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn build_headers(&self) -> GitscribeResult<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("gitscribe"));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}", self.token)).map_err(|_| {
                GitscribeError::config_error(
                    "GitHub token contains invalid header characters",
                    Some("github.token_env"),
                    Some("Check the token environment variable"),
                )
            })?,
        );
        Ok(headers)
    }

    async fn get(&self, url: &str) -> GitscribeResult<Response> {
        let response = self
            .client
            .get(url)
            .headers(self.build_headers()?)
            .timeout(timeout_duration(HTTP_TIMEOUT_SECS))
            .send()
            .await?;
        self.check_status("GitHub API request", url, response).await
    }

    /// Maps non-success statuses to their distinct error variants. 404 is
    /// left to the caller, which knows whether absence is an error or a
    /// neutral answer.
    async fn check_status(&self, operation: &str, url: &str, response: Response) -> GitscribeResult<Response> {
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(GitscribeError::permission_denied(
                operation,
                "GitHub rejected the token",
            )),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                let remaining = header_as_u64(&response, "x-ratelimit-remaining");
                if remaining == Some(0) || status == StatusCode::TOO_MANY_REQUESTS {
                    Err(GitscribeError::RateLimited {
                        operation: operation.to_string(),
                        reset_at: header_as_u64(&response, "x-ratelimit-reset"),
                    })
                } else {
                    Err(GitscribeError::permission_denied(
                        operation,
                        "GitHub returned 403 for this resource",
                    ))
                }
            }
            status => Err(GitscribeError::network_error(
                operation,
                Some(url),
                Some(status.as_u16()),
                "unexpected response status",
            )),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> GitscribeResult<Option<T>> {
        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let value = response
            .json::<T>()
            .await
            .map_err(|e| GitscribeError::parse_error("GitHub API response", &e.to_string()))?;
        Ok(Some(value))
    }

    pub async fn authenticated_user(&self) -> GitscribeResult<GithubUser> {
        let url = format!("{}/user", self.base_url);
        self.get_json(&url)
            .await?
            .ok_or_else(|| GitscribeError::permission_denied("fetch user", "GitHub did not recognize the token"))
    }

    /// All repositories visible to the authenticated account, most recently
    /// updated first. README presence is probed in bounded concurrent
    /// chunks.
    pub async fn list_repositories(&self, include_forks: bool) -> GitscribeResult<Vec<RepositorySummary>> {
        let mut repos: Vec<GithubRepo> = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}/user/repos?per_page={}&page={}&sort=updated",
                self.base_url, REPOS_PER_PAGE, page
            );
            let batch: Vec<GithubRepo> = self
                .get_json(&url)
                .await?
                .ok_or_else(|| GitscribeError::network_error("list repositories", Some(&url), Some(404), "listing endpoint not found"))?;

            let batch_len = batch.len();
            repos.extend(batch.into_iter().filter(|r| include_forks || !r.fork));
            if batch_len < REPOS_PER_PAGE {
                break;
            }
            page += 1;
        }

        let mut summaries = Vec::with_capacity(repos.len());
        for chunk in repos.chunks(README_PROBE_CHUNK_SIZE) {
            let flags = join_all(chunk.iter().map(|r| self.has_readme(&r.full_name))).await;
            for (repo, has_readme) in chunk.iter().zip(flags) {
                summaries.push(RepositorySummary {
                    name: repo.name.clone(),
                    full_name: repo.full_name.clone(),
                    description: repo.description.clone().unwrap_or_default(),
                    language: repo.language.clone(),
                    stars: repo.stargazers_count,
                    url: repo.html_url.clone(),
                    private: repo.private,
                    fork: repo.fork,
                    has_readme,
                    updated_at: repo.updated_at,
                });
            }
        }

        Ok(summaries)
    }

    pub async fn has_readme(&self, full_name: &str) -> bool {
        let url = format!("{}/repos/{}/readme", self.base_url, full_name);
        match self.get(&url).await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    pub async fn get_repository(&self, full_name: &str) -> GitscribeResult<GithubRepo> {
        let url = format!("{}/repos/{}", self.base_url, full_name);
        self.get_json(&url)
            .await?
            .ok_or_else(|| GitscribeError::repo_not_found(full_name))
    }

    pub async fn get_languages(&self, full_name: &str) -> GitscribeResult<HashMap<String, u64>> {
        let url = format!("{}/repos/{}/languages", self.base_url, full_name);
        Ok(self.get_json(&url).await?.unwrap_or_default())
    }

    /// Directory listing; an empty or missing path yields an empty list.
    pub async fn list_directory_entries(&self, full_name: &str, path: &str) -> GitscribeResult<Vec<GithubContent>> {
        let url = format!("{}/repos/{}/contents/{}", self.base_url, full_name, path);
        Ok(self.get_json(&url).await?.unwrap_or_default())
    }

    pub async fn get_file_content(&self, full_name: &str, path: &str) -> GitscribeResult<Option<String>> {
        Ok(self
            .get_file_revision(full_name, path)
            .await?
            .map(|(_, content)| content))
    }

    /// Current blob sha and decoded content, or `None` when the file does
    /// not exist.
    pub async fn get_file_revision(&self, full_name: &str, path: &str) -> GitscribeResult<Option<(String, String)>> {
        let url = format!("{}/repos/{}/contents/{}", self.base_url, full_name, path);
        let entry: Option<GithubContent> = self.get_json(&url).await?;

        match entry {
            Some(entry) => {
                let content = decode_content(&entry)?;
                Ok(Some((entry.sha, content)))
            }
            None => Ok(None),
        }
    }

    /// Creates the file when `prior_revision` is `None`, otherwise updates
    /// it. A stale revision fails with a conflict and performs no write.
    pub async fn create_or_update_file(
        &self,
        full_name: &str,
        path: &str,
        content: &str,
        message: &str,
        prior_revision: Option<&str>,
    ) -> GitscribeResult<CommitOutcome> {
        let url = format!("{}/repos/{}/contents/{}", self.base_url, full_name, path);
        let mut body = json!({
            "message": message,
            "content": base64::encode(content),
        });
        if let Some(sha) = prior_revision {
            body["sha"] = json!(sha);
        }

        let response = self
            .client
            .put(&url)
            .headers(self.build_headers()?)
            .timeout(timeout_duration(HTTP_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let commit: GithubCommitResponse = response
                    .json()
                    .await
                    .map_err(|e| GitscribeError::parse_error("GitHub commit response", &e.to_string()))?;
                Ok(CommitOutcome {
                    path: path.to_string(),
                    revision: commit.content.map(|c| c.sha).unwrap_or_default(),
                    commit_sha: commit.commit.sha,
                })
            }
            // Stale sha arrives as 409 (422 on some deployments).
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(GitscribeError::write_conflict(full_name, path))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GitscribeError::permission_denied(
                "commit file",
                "the token has no write access to this repository",
            )),
            StatusCode::NOT_FOUND => Err(GitscribeError::repo_not_found(full_name)),
            status => Err(GitscribeError::network_error(
                "commit file",
                Some(&url),
                Some(status.as_u16()),
                "unexpected response status",
            )),
        }
    }
}

#[async_trait]
impl DirectoryLister for GithubClient {
    async fn list_directory(&self, full_name: &str, path: &str) -> GitscribeResult<Vec<GithubContent>> {
        self.list_directory_entries(full_name, path).await
    }
}

fn header_as_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
}

fn decode_content(entry: &GithubContent) -> GitscribeResult<String> {
    match (&entry.content, &entry.encoding) {
        (Some(content), Some(encoding)) if encoding == "base64" => {
            let decoded = base64::decode(content.replace('\n', ""))
                .map_err(|e| GitscribeError::parse_error("base64 content", &e.to_string()))?;
            String::from_utf8(decoded)
                .map_err(|e| GitscribeError::parse_error("file content", &e.to_string()))
        }
        _ => Err(GitscribeError::parse_error(
            "file content",
            "content or encoding unavailable",
        )),
    }
}
