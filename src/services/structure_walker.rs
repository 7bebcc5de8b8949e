use async_recursion::async_recursion;
use crate::structs::github::github_content::GithubContent;
use crate::structs::tree_entry::TreeEntry;
use crate::traits::directory_lister::DirectoryLister;

/// Retrieves a bounded sample of the repository tree. Both the recursion
/// depth and the number of entries kept per directory are capped, so the
/// output is a representative sample, not an exhaustive listing.
pub struct StructureWalker<'a> {
    lister: &'a dyn DirectoryLister,
    max_depth: usize,
    max_entries: usize,
}

impl<'a> StructureWalker<'a> {
    pub fn new(lister: &'a dyn DirectoryLister, max_depth: usize, max_entries: usize) -> Self {
        Self {
            lister,
            max_depth,
            max_entries,
        }
    }

    /// Empty and inaccessible repositories yield an empty structure rather
    /// than failing the surrounding analysis.
    pub async fn walk(&self, full_name: &str) -> Vec<TreeEntry> {
        self.walk_path(full_name, "", 0).await
    }

    #[async_recursion]
    async fn walk_path(&self, full_name: &str, path: &str, depth: usize) -> Vec<TreeEntry> {
        let mut listing: Vec<GithubContent> = match self.lister.list_directory(full_name, path).await {
            Ok(listing) => listing,
            Err(e) => {
                log::debug!("structure listing failed for '{}' at '{}': {}", full_name, path, e);
                return Vec::new();
            }
        };

        // Directories first, platform name order within each kind.
        listing.sort_by_key(|entry| !entry.is_dir());
        listing.truncate(self.max_entries);

        let mut entries = Vec::with_capacity(listing.len());
        for item in listing {
            if item.is_dir() && depth < self.max_depth {
                let children = self.walk_path(full_name, &item.path, depth + 1).await;
                entries.push(TreeEntry::dir(&item.name, &item.path, children));
            } else if item.is_dir() {
                entries.push(TreeEntry::dir(&item.name, &item.path, Vec::new()));
            } else {
                entries.push(TreeEntry::file(&item.name, &item.path));
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::errors::{GitscribeError, GitscribeResult};

    /// Fake lister describing an unboundedly deep and wide tree: every
    /// directory contains `width` subdirectories and one file.
    struct InfiniteLister {
        width: usize,
    }

    #[async_trait]
    impl DirectoryLister for InfiniteLister {
        async fn list_directory(&self, _full_name: &str, path: &str) -> GitscribeResult<Vec<GithubContent>> {
            let mut entries = Vec::new();
            for i in 0..self.width {
                let name = format!("dir{}", i);
                entries.push(GithubContent {
                    name: name.clone(),
                    path: if path.is_empty() { name.clone() } else { format!("{}/{}", path, name) },
                    sha: format!("sha-{}", i),
                    content_type: "dir".to_string(),
                    size: 0,
                    content: None,
                    encoding: None,
                });
            }
            entries.push(GithubContent {
                name: "file.rs".to_string(),
                path: if path.is_empty() { "file.rs".to_string() } else { format!("{}/file.rs", path) },
                sha: "sha-file".to_string(),
                content_type: "file".to_string(),
                size: 10,
                content: None,
                encoding: None,
            });
            Ok(entries)
        }
    }

    struct FailingLister;

    #[async_trait]
    impl DirectoryLister for FailingLister {
        async fn list_directory(&self, full_name: &str, _path: &str) -> GitscribeResult<Vec<GithubContent>> {
            Err(GitscribeError::repo_not_found(full_name))
        }
    }

    #[tokio::test]
    async fn depth_never_exceeds_the_cap() {
        let lister = InfiniteLister { width: 2 };
        let walker = StructureWalker::new(&lister, 2, 25);
        let tree = walker.walk("octocat/sample").await;

        let max_depth = tree.iter().map(TreeEntry::depth).max().unwrap();
        assert_eq!(max_depth, 2);
    }

    #[tokio::test]
    async fn breadth_never_exceeds_the_cap() {
        let lister = InfiniteLister { width: 100 };
        let walker = StructureWalker::new(&lister, 1, 5);
        let tree = walker.walk("octocat/sample").await;

        assert_eq!(tree.len(), 5);
        for entry in &tree {
            assert!(entry.children.len() <= 5);
        }
    }

    #[tokio::test]
    async fn directories_sort_ahead_of_files() {
        let lister = InfiniteLister { width: 2 };
        let walker = StructureWalker::new(&lister, 0, 25);
        let tree = walker.walk("octocat/sample").await;

        assert_eq!(tree.len(), 3);
        assert!(tree[0].kind.is_dir());
        assert!(tree[1].kind.is_dir());
        assert_eq!(tree[2].name, "file.rs");
    }

    #[tokio::test]
    async fn inaccessible_repository_yields_empty_structure() {
        let walker = StructureWalker::new(&FailingLister, 2, 25);
        let tree = walker.walk("octocat/missing").await;
        assert!(tree.is_empty());
    }
}
