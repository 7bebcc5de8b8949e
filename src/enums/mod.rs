pub mod commands;
pub mod entry_kind;
pub mod grade;
pub mod finding_severity;
pub mod ai_provider_error;
