use std::time::Duration;

pub const DEFAULT_DASHBOARD_PORT: u16 = 8080;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const VERCEL_API_BASE: &str = "https://api.vercel.com";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const AI_API_KEY_ENV: &str = "GOOGLE_AI_API_KEY";
pub const VERCEL_TOKEN_ENV: &str = "VERCEL_TOKEN";

pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEPLOYMENT_TIMEOUT_SECS: u64 = 10;
pub const ANALYSIS_TIMEOUT_SECS: u64 = 120;

pub const REPOS_PER_PAGE: usize = 100;
pub const README_PROBE_CHUNK_SIZE: usize = 10;

// Structure walker bounds. Depth counts nesting levels below the root
// listing, so 2 means root entries plus two levels of children.
pub const MAX_TREE_DEPTH: usize = 2;
pub const MAX_ENTRIES_PER_DIR: usize = 25;

// Prompt size bounds
pub const MAX_PROMPT_DEPENDENCIES: usize = 15;
pub const MAX_PROMPT_STRUCTURE_ENTRIES: usize = 30;
pub const MAX_EXISTING_README_CHARS: usize = 2000;

// Security scan bounds
pub const MAX_SCANNED_FILES: usize = 12;
pub const MAX_SCANNED_FILE_BYTES: usize = 100_000;

// Grade cutoffs: >= A_CUTOFF is an A and so on down to F.
pub const GRADE_A_CUTOFF: u32 = 90;
pub const GRADE_B_CUTOFF: u32 = 75;
pub const GRADE_C_CUTOFF: u32 = 60;
pub const GRADE_D_CUTOFF: u32 = 40;

pub const DEFAULT_COMMIT_MESSAGE: &str = "Update README.md via gitscribe";
pub const LICENSE_COMMIT_MESSAGE: &str = "Add LICENSE via gitscribe";
pub const GITIGNORE_COMMIT_MESSAGE: &str = "Add .gitignore via gitscribe";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
