pub mod github_repo;
pub mod github_content;
pub mod github_commit_response;
pub mod github_user;
