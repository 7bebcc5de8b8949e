use std::io::{self, Write};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::GitscribeResult;
use crate::logger::report_logger::ReportLogger;
use crate::services::deployment_detector::DeploymentDetector;
use crate::services::github_client::GithubClient;
use crate::services::repository_manager::RepositoryManager;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::structs::config::config::Config;
use crate::ui::dashboard_server::DashboardServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> GitscribeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::List { include_forks } => self.list_command(include_forks).await,
            Commands::Analyze { repo } => self.analyze_command(&repo).await,
            Commands::Health { repo } => self.health_command(&repo).await,
            Commands::Generate { repo, output, commit } => self.generate_command(&repo, output, commit).await,
            Commands::Batch { missing_only, dry_run } => self.batch_command(missing_only, dry_run).await,
            Commands::Dashboard { port } => self.dashboard_command(port).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> GitscribeResult<()> {
        log::info!("🚀 Initializing gitscribe configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to adjust tokens and bounds.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    fn build_manager(&self, config: Config, need_ai: bool) -> GitscribeResult<RepositoryManager> {
        let github_token = ConfigManager::require_token(&config.github.token_env, "GitHub")?;
        let github = GithubClient::new(github_token);

        let generator = if need_ai {
            let api_key = ConfigManager::require_token(&config.ai.api_key_env, "AI")?;
            GeminiProvider::new(api_key)
                .with_model(config.ai.model.clone())
                .with_generation_limits(config.ai.max_output_tokens, config.ai.temperature)
        } else {
            // Listing and analysis never reach the generator; an empty key
            // keeps construction uniform.
            GeminiProvider::new(String::new())
        };

        let vercel_token = ConfigManager::token_from_env(&config.deployment.token_env);
        let detector = DeploymentDetector::new(vercel_token);

        Ok(RepositoryManager::new(config, github, Box::new(generator), detector))
    }

    fn load_validated_config(&self) -> GitscribeResult<Config> {
        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'gitscribe init' to create a configuration file.");
                return Err(e);
            }
        };
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    async fn list_command(&self, include_forks: bool) -> GitscribeResult<()> {
        log::info!("📋 Listing repositories...");

        let config = self.load_validated_config()?;
        let include = include_forks || config.github.include_forks;
        let manager = self.build_manager(config, false)?;

        let repos = manager.list_repositories(include).await?;
        ReportLogger::print_repository_table(&repos);
        Ok(())
    }

    async fn analyze_command(&self, repo: &str) -> GitscribeResult<()> {
        log::info!("🔍 Analyzing {}...", repo);

        let config = self.load_validated_config()?;
        let manager = self.build_manager(config, false)?;

        let (analysis, deployment) = tokio::join!(manager.analyze(repo), manager.deployment_status(repo));
        let analysis = analysis?;

        ReportLogger::print_analysis_report(&analysis, deployment.as_ref());
        Ok(())
    }

    async fn health_command(&self, repo: &str) -> GitscribeResult<()> {
        log::info!("🏥 Checking health of {}...", repo);

        let config = self.load_validated_config()?;
        let manager = self.build_manager(config, false)?;

        let report = manager.health_report(repo).await?;
        ReportLogger::print_health_report(repo, &report);
        Ok(())
    }

    async fn generate_command(&self, repo: &str, output: Option<String>, commit: bool) -> GitscribeResult<()> {
        log::info!("🔍 Analyzing {}...", repo);

        let config = self.load_validated_config()?;
        let manager = self.build_manager(config, true)?;

        let bundle = manager.generate_readme(repo).await?;
        if let Some(url) = &bundle.deployment_url {
            log::info!("🚀 Found deployment: {}", url);
        }

        match &output {
            Some(path) => {
                std::fs::write(path, &bundle.readme)?;
                log::info!("💾 README saved to {}", path);
            }
            None => {
                println!("\n{}", "=".repeat(50));
                println!("GENERATED README:");
                println!("{}", "=".repeat(50));
                println!("{}", bundle.readme);
            }
        }

        if commit {
            print!("\nCommit this README to the repository? (y/N): ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if input.trim().eq_ignore_ascii_case("y") {
                let outcome = manager.commit_readme(repo, &bundle.readme, None).await?;
                log::info!("✅ README committed (commit {})", outcome.commit_sha);
            } else {
                log::info!("⏭️ Skipping commit.");
            }
        }

        Ok(())
    }

    async fn batch_command(&self, missing_only: bool, dry_run: bool) -> GitscribeResult<()> {
        let config = self.load_validated_config()?;
        let include_forks = config.github.include_forks;
        let manager = self.build_manager(config, !dry_run)?;

        let mut repos = manager.list_repositories(include_forks).await?;
        if missing_only {
            repos.retain(|repo| !repo.has_readme);
        }

        log::info!("🌍 Processing {} repositories...", repos.len());

        for (index, repo) in repos.iter().enumerate() {
            log::info!("\n[{}/{}] {}", index + 1, repos.len(), repo.name);

            if dry_run {
                // Preview mode performs no generation and no writes.
                log::info!("  ⏭️ Would generate a README for {}", repo.full_name);
                continue;
            }

            match manager.generate_readme(&repo.full_name).await {
                Ok(bundle) => match manager.commit_readme(&repo.full_name, &bundle.readme, None).await {
                    Ok(_) => log::info!("  ✅ README committed ({} chars)", bundle.readme.len()),
                    Err(e) => {
                        log::error!("  ❌ Commit failed: {}", e);
                        log::error!("     Continuing with next repository...");
                    }
                },
                Err(e) => {
                    log::error!("  ❌ Generation failed: {}", e);
                    log::error!("     Continuing with next repository...");
                }
            }
        }

        Ok(())
    }

    async fn dashboard_command(&self, port: u16) -> GitscribeResult<()> {
        log::info!("🌐 Starting gitscribe dashboard...");

        let config = self.load_validated_config()?;
        let mut server = DashboardServer::new(config);
        let bound_port = server.start(port).await?;

        let url = format!("http://localhost:{}", bound_port);
        log::info!("🚀 Dashboard available at: {}", url);
        log::info!("⏹️ Press Ctrl+C to stop the dashboard");

        if webbrowser::open(&url).is_err() {
            log::warn!("⚠️ Could not open a browser automatically");
        }

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| crate::errors::GitscribeError::system_error("wait for shutdown", &e.to_string()))?;
        log::info!("🛑 Shutting down dashboard...");
        server.shutdown();

        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
