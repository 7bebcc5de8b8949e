use crate::structs::analysis_result::AnalysisResult;
use crate::structs::deployment_status::DeploymentStatus;
use crate::structs::health_report::HealthReport;
use crate::structs::repository_summary::RepositorySummary;
use crate::structs::tree_entry::TreeEntry;

pub struct ReportLogger;

impl ReportLogger {
    pub fn print_repository_table(repos: &[RepositorySummary]) {
        println!("\n{:<32} {:<15} {:<8} {:<6}", "Repository", "Language", "README", "Stars");
        println!("{}", "-".repeat(65));

        for repo in repos {
            println!(
                "{:<32} {:<15} {:<8} {:<6}",
                repo.name,
                repo.language.as_deref().unwrap_or("N/A"),
                if repo.has_readme { "Yes" } else { "No" },
                repo.stars
            );
        }

        println!("\n📊 Total: {} repositories", repos.len());
    }

    pub fn print_analysis_report(analysis: &AnalysisResult, deployment: Option<&DeploymentStatus>) {
        println!("\n{}", "=".repeat(50));
        println!("📦 Repository: {}", analysis.name);
        println!(
            "📝 Description: {}",
            if analysis.description.is_empty() { "None" } else { &analysis.description }
        );
        println!(
            "💻 Primary Language: {}",
            analysis.primary_language.as_deref().unwrap_or("Unknown")
        );
        println!("{}", "=".repeat(50));

        println!("\nLanguages:");
        for share in &analysis.languages {
            println!("  - {}: {}%", share.name, share.percent);
        }

        println!("\nDependencies:");
        for bucket in &analysis.dependencies {
            if bucket.packages.is_empty() {
                continue;
            }
            let shown: Vec<&str> = bucket.packages.iter().take(10).map(String::as_str).collect();
            println!("  {}: {}", bucket.ecosystem, shown.join(", "));
        }

        println!("\nStructure:");
        Self::print_tree(&analysis.structure, 1);

        match deployment {
            Some(status) => println!("\n🚀 Deployment: {}", status.url),
            None => println!("\n🚀 Deployment: not deployed"),
        }
    }

    fn print_tree(entries: &[TreeEntry], indent: usize) {
        for entry in entries {
            let marker = if entry.kind.is_dir() { "📁" } else { "📄" };
            println!("{}{} {}", "  ".repeat(indent), marker, entry.name);
            Self::print_tree(&entry.children, indent + 1);
        }
    }

    pub fn print_health_report(repo: &str, report: &HealthReport) {
        println!("\n🏥 HEALTH REPORT: {}", repo);
        println!("{}", "=".repeat(50));
        println!("📊 Score: {}/100 (grade {})", report.score, report.grade.letter());

        println!("\nChecks:");
        for check in &report.checks {
            let mark = if check.passed { "✅" } else { "❌" };
            println!("  {} {}", mark, check.name);
        }

        if report.security.issues.is_empty() && report.security.warnings.is_empty() {
            println!("\n🔒 Security: no findings");
            return;
        }

        if !report.security.issues.is_empty() {
            println!("\n🚨 Security issues:");
            for finding in &report.security.issues {
                println!("  [{}] {}: {}", finding.severity.label(), finding.file_path, finding.message);
            }
        }

        if !report.security.warnings.is_empty() {
            println!("\n⚠️ Security warnings:");
            for finding in &report.security.warnings {
                println!("  [{}] {}: {}", finding.severity.label(), finding.file_path, finding.message);
            }
        }
    }
}
