use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::Filter;
use serde_json::json;
use crate::config::config_manager::ConfigManager;
use crate::errors::{GitscribeError, GitscribeResult};
use crate::services::deployment_detector::DeploymentDetector;
use crate::services::github_client::GithubClient;
use crate::services::repository_manager::RepositoryManager;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::structs::config::config::Config;

/// Per-request credential overrides. Header values win over the configured
/// environment fallbacks; nothing is stored between requests.
#[derive(Clone, Default)]
struct RequestTokens {
    github: Option<String>,
    ai: Option<String>,
    vercel: Option<String>,
}

pub struct DashboardServer {
    config: Arc<Config>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            shutdown_tx: None,
        }
    }

    pub async fn start(&mut self, port: u16) -> GitscribeResult<u16> {
        // Probe the port up front so a bind failure surfaces as an error
        // instead of a panic inside warp.
        let probe = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
            .await
            .map_err(|e| GitscribeError::system_error("bind dashboard port", &e.to_string()))?;
        drop(probe);

        let config = Arc::clone(&self.config);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let index_route = warp::path::end().map(|| warp::reply::html(include_str!("static/index.html")));
        let api_routes = create_api_routes(config);

        let routes = index_route.or(api_routes).with(
            warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type", "x-github-token", "x-ai-key", "x-vercel-token"])
                .allow_methods(vec!["GET", "POST"]),
        );

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(server);

        log::info!("🌐 Dashboard server started on port {}", port);
        Ok(port)
    }

    pub fn shutdown(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).ok();
        }
    }
}

fn with_config(config: Arc<Config>) -> impl Filter<Extract = (Arc<Config>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&config))
}

fn with_tokens() -> impl Filter<Extract = (RequestTokens,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("x-github-token")
        .and(warp::header::optional::<String>("x-ai-key"))
        .and(warp::header::optional::<String>("x-vercel-token"))
        .map(|github, ai, vercel| RequestTokens { github, ai, vercel })
}

fn create_api_routes(
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let status = warp::path!("api" / "status")
        .and(warp::get())
        .and_then(status_handler);

    let repos = warp::path!("api" / "repos")
        .and(warp::get())
        .and(warp::query::<std::collections::HashMap<String, String>>())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(list_repos_handler);

    let analyze = warp::path!("api" / "analyze" / String)
        .and(warp::get())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(analyze_handler);

    let deployment = warp::path!("api" / "deployment" / String)
        .and(warp::get())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(deployment_handler);

    let health = warp::path!("api" / "health" / String)
        .and(warp::get())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(health_handler);

    let security = warp::path!("api" / "security" / String)
        .and(warp::get())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(security_handler);

    let generate = warp::path!("api" / "generate")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(generate_handler);

    let commit = warp::path!("api" / "commit")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(commit_handler);

    let license = warp::path!("api" / "license")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_tokens())
        .and(with_config(Arc::clone(&config)))
        .and_then(license_handler);

    let gitignore = warp::path!("api" / "gitignore")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_tokens())
        .and(with_config(config))
        .and_then(gitignore_handler);

    status
        .or(repos)
        .or(analyze)
        .or(deployment)
        .or(health)
        .or(security)
        .or(generate)
        .or(commit)
        .or(license)
        .or(gitignore)
}

/// Builds the per-request manager. Every endpoint answers with either a
/// payload or an `error` key, so the construction error is returned as a
/// value rather than a rejection.
fn build_manager(
    config: &Config,
    tokens: &RequestTokens,
    need_ai: bool,
) -> GitscribeResult<RepositoryManager> {
    let github_token = match tokens.github.clone() {
        Some(token) => token,
        None => ConfigManager::require_token(&config.github.token_env, "GitHub")?,
    };
    let github = GithubClient::new(github_token);

    let generator = if need_ai {
        let api_key = match tokens.ai.clone() {
            Some(key) => key,
            None => ConfigManager::require_token(&config.ai.api_key_env, "AI")?,
        };
        GeminiProvider::new(api_key)
            .with_model(config.ai.model.clone())
            .with_generation_limits(config.ai.max_output_tokens, config.ai.temperature)
    } else {
        GeminiProvider::new(String::new())
    };

    let vercel_token = tokens
        .vercel
        .clone()
        .or_else(|| ConfigManager::token_from_env(&config.deployment.token_env));
    let detector = DeploymentDetector::new(vercel_token);

    Ok(RepositoryManager::new(config.clone(), github, Box::new(generator), detector))
}

fn error_reply(error: &GitscribeError) -> warp::reply::Json {
    warp::reply::json(&json!({ "error": error.to_string() }))
}

async fn status_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&json!({
        "status": "ok",
        "service": "gitscribe"
    })))
}

async fn list_repos_handler(
    params: std::collections::HashMap<String, String>,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    let include_forks = params.get("include_forks").map(|v| v == "true").unwrap_or(config.github.include_forks);

    match manager.list_repositories(include_forks).await {
        Ok(repos) => Ok(warp::reply::json(&json!({ "repos": repos }))),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn analyze_handler(
    repo: String,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    match manager.analyze(&repo).await {
        Ok(analysis) => Ok(warp::reply::json(&json!({ "analysis": analysis }))),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn deployment_handler(
    repo: String,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    let status = manager.deployment_status(&repo).await;
    Ok(warp::reply::json(&json!({
        "repo": repo,
        "url": status.map(|s| s.url),
    })))
}

async fn health_handler(
    repo: String,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    match manager.health_report(&repo).await {
        Ok(report) => Ok(warp::reply::json(&json!({ "health": report }))),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn security_handler(
    repo: String,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    match manager.security_report(&repo).await {
        Ok(report) => Ok(warp::reply::json(&json!({ "security": report }))),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn generate_handler(
    body: serde_json::Value,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let Some(repo) = body.get("repo_name").and_then(|v| v.as_str()) else {
        return Ok(warp::reply::json(&json!({ "error": "repo_name is required" })));
    };

    let manager = match build_manager(&config, &tokens, true) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    match manager.generate_readme(repo).await {
        Ok(bundle) => Ok(warp::reply::json(&json!({
            "readme": bundle.readme,
            "analysis": bundle.analysis,
            "deployment_url": bundle.deployment_url,
        }))),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn commit_handler(
    body: serde_json::Value,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let repo = body.get("repo_name").and_then(|v| v.as_str());
    let readme = body.get("readme").and_then(|v| v.as_str());
    let (Some(repo), Some(readme)) = (repo, readme) else {
        return Ok(warp::reply::json(&json!({ "error": "repo_name and readme are required" })));
    };
    let message = body.get("message").and_then(|v| v.as_str());

    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    match manager.commit_readme(repo, readme, message).await {
        Ok(outcome) => Ok(warp::reply::json(&json!({
            "success": true,
            "repo": repo,
            "revision": outcome.revision,
        }))),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn license_handler(
    body: serde_json::Value,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let Some(repo) = body.get("repo_name").and_then(|v| v.as_str()) else {
        return Ok(warp::reply::json(&json!({ "error": "repo_name is required" })));
    };

    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    match manager.add_license(repo).await {
        Ok(outcome) => Ok(warp::reply::json(&json!({
            "success": true,
            "repo": repo,
            "path": outcome.path,
        }))),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn gitignore_handler(
    body: serde_json::Value,
    tokens: RequestTokens,
    config: Arc<Config>,
) -> Result<impl warp::Reply, Infallible> {
    let Some(repo) = body.get("repo_name").and_then(|v| v.as_str()) else {
        return Ok(warp::reply::json(&json!({ "error": "repo_name is required" })));
    };

    let manager = match build_manager(&config, &tokens, false) {
        Ok(manager) => manager,
        Err(e) => return Ok(error_reply(&e)),
    };

    match manager.add_gitignore(repo).await {
        Ok(outcome) => Ok(warp::reply::json(&json!({
            "success": true,
            "repo": repo,
            "path": outcome.path,
        }))),
        Err(e) => Ok(error_reply(&e)),
    }
}
