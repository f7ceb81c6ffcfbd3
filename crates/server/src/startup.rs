use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::{QuestionState, QuizState};
use service::question::repository::{memory::InMemoryQuestionRepository, QuestionRepository, SeaOrmQuestionRepository};
use service::quiz::repository::{memory::InMemoryQuizRepository, QuizRepository, SeaOrmQuizRepository};

/// Which of the two services a process hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Quiz,
    Question,
}

impl ServiceKind {
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Quiz => routes::quiz::SERVICE,
            ServiceKind::Question => routes::question::SERVICE,
        }
    }

    pub fn port(self, cfg: &AppConfig) -> u16 {
        match self {
            ServiceKind::Quiz => cfg.services.quiz.port,
            ServiceKind::Question => cfg.services.question.port,
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn bind_addr(cfg: &AppConfig, kind: ServiceKind) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, kind.port(cfg)).parse()?)
}

/// Connect the pool and apply migrations when `auto_migrate` is on.
async fn connect_db(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!(event = "migrated", "database schema up to date");
    }
    Ok(db)
}

/// Wire repository, service and router for `kind`.
pub async fn build_app(kind: ServiceKind, cfg: &AppConfig) -> Result<Router, StartupError> {
    let cors = build_cors();
    let memory = cfg.database.is_memory();
    if memory {
        warn!(service = kind.name(), "using in-memory store; data is lost on exit");
    }
    let router = match kind {
        ServiceKind::Quiz => {
            let repo: Arc<dyn QuizRepository> = if memory {
                Arc::new(InMemoryQuizRepository::default())
            } else {
                Arc::new(SeaOrmQuizRepository { db: connect_db(&cfg.database).await? })
            };
            routes::quiz::build_router(QuizState::new(repo), cors)
        }
        ServiceKind::Question => {
            let repo: Arc<dyn QuestionRepository> = if memory {
                Arc::new(InMemoryQuestionRepository::default())
            } else {
                Arc::new(SeaOrmQuestionRepository { db: connect_db(&cfg.database).await? })
            };
            routes::question::build_router(QuestionState::new(repo), cors)
        }
    };
    Ok(router)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "graceful shutdown requested");
    }
}

/// Public entry: load config, build the app and run the HTTP server
pub async fn run(kind: ServiceKind) -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let app = build_app(kind, &cfg).await?;

    let addr = bind_addr(&cfg, kind)?;
    info!(service = kind.name(), %addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_uses_service_port() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg, ServiceKind::Quiz).unwrap().port(), configs::QUIZ_DEFAULT_PORT);
        assert_eq!(bind_addr(&cfg, ServiceKind::Question).unwrap().port(), configs::QUESTION_DEFAULT_PORT);
    }

    #[tokio::test]
    async fn memory_store_needs_no_database() {
        let mut cfg = AppConfig::default();
        cfg.database.url = configs::MEMORY_URL.into();
        assert!(build_app(ServiceKind::Quiz, &cfg).await.is_ok());
        assert!(build_app(ServiceKind::Question, &cfg).await.is_ok());
    }
}
