use async_trait::async_trait;
use crate::errors::GitscribeResult;
use crate::structs::github::github_content::GithubContent;

/// Seam between the structure walker and the hosting platform, so the
/// walker's depth and breadth bounds can be exercised without a network.
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    async fn list_directory(&self, full_name: &str, path: &str) -> GitscribeResult<Vec<GithubContent>>;
}
