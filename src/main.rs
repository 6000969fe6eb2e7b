// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use inkwords_ingest::application::use_cases::ingestion_use_case::IngestionUseCase;
use inkwords_ingest::config::settings::Settings;
use inkwords_ingest::domain::repositories::crawler_log_repository::CrawlerLogRepository;
use inkwords_ingest::domain::services::content_filter::ContentFilter;
use inkwords_ingest::domain::services::crawl_orchestrator::CrawlOrchestrator;
use inkwords_ingest::domain::services::ingestion_writer::IngestionWriter;
use inkwords_ingest::infrastructure::database::connection;
use inkwords_ingest::infrastructure::metrics;
use inkwords_ingest::infrastructure::repositories::content_repo_impl::ContentRepositoryImpl;
use inkwords_ingest::infrastructure::repositories::crawler_log_repo_impl::CrawlerLogRepositoryImpl;
use inkwords_ingest::presentation::middleware::cron_auth::CronAuthState;
use inkwords_ingest::presentation::routes;
use inkwords_ingest::sources;
use inkwords_ingest::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 初始化日志、配置、数据库和数据源，然后启动HTTP服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting inkwords-ingest...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    if settings.metrics.enabled {
        metrics::init_metrics(&settings.metrics.listen)?;
    }

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Source adapters
    let client = sources::build_http_client(&settings.crawler)?;
    let adapters = sources::build_adapters(&settings.crawler, client)?;

    // 5. Pipeline
    let content_repo = Arc::new(ContentRepositoryImpl::new(db.clone()));
    let log_repo: Arc<dyn CrawlerLogRepository> =
        Arc::new(CrawlerLogRepositoryImpl::new(db.clone()));
    let use_case = Arc::new(IngestionUseCase::new(
        CrawlOrchestrator::new(adapters, settings.crawler.politeness_delay()),
        ContentFilter::new(&settings.crawler.denylist),
        IngestionWriter::new(content_repo),
        log_repo.clone(),
    ));

    let cron_auth = CronAuthState::new(settings.crawler.cron_secret.clone());
    if cron_auth.secret.is_none() {
        warn!("No cron secret configured; scheduled crawl endpoint will reject every request");
    }

    // 6. Start HTTP server
    let app = routes::routes(use_case, log_repo, cron_auth);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 路由已释放，这里应是最后一个引用
    match Arc::try_unwrap(db) {
        Ok(db) => db.close().await?,
        Err(_) => warn!("Database connection still shared at shutdown; skipping explicit close"),
    }
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
