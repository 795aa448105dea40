// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use cuentas::{BoundaryError, DataAccess, ReplaceAccountRequest, ReportAccountRequest};
use cuentas_audit::AuditEvent;
use cuentas_domain::{
    Account, AccountId, AccountType, Client, Replacement, Report, ReportReason, Service, User,
};
use cuentas_persistence::{InMemoryPersistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Cuentas Server - JSON HTTP adapter over the account data-access boundary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON seed file. If not provided, the store starts empty.
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// The store serializes its own mutations, so no outer lock is needed.
#[derive(Clone)]
struct AppState {
    /// The in-memory account store.
    persistence: Arc<InMemoryPersistence>,
}

/// Response for a successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MutationResponse {
    /// Success indicator.
    success: bool,
    /// A human-readable confirmation.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always "ok" while the server answers.
    status: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<BoundaryError> for HttpError {
    fn from(err: BoundaryError) -> Self {
        match err {
            BoundaryError::Rejected(message) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message,
            },
            BoundaryError::Unreachable(_) => {
                error!(error = %err, "Store unavailable");
                Self {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    message: err.to_string(),
                }
            }
            BoundaryError::Malformed(_) => {
                error!(error = %err, "Store returned malformed data");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

fn not_found(account_id: AccountId) -> HttpError {
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: format!("Account {account_id} not found"),
    }
}

/// Answers 404 for account ids the store has never seen.
async fn ensure_accounts_exist(
    persistence: &InMemoryPersistence,
    account_ids: &[AccountId],
) -> Result<(), HttpError> {
    let accounts: Vec<Account> = persistence.list_accounts().await?;
    for account_id in account_ids {
        if !accounts.iter().any(|account| account.id == *account_id) {
            warn!(account_id = account_id.value(), "Unknown account");
            return Err(not_found(*account_id));
        }
    }
    Ok(())
}

/// Handler for GET /health endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET /cuentas endpoint.
async fn handle_list_accounts(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Account>>, HttpError> {
    Ok(Json(app_state.persistence.list_accounts().await?))
}

/// Handler for GET /reportes endpoint.
async fn handle_list_reports(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Report>>, HttpError> {
    Ok(Json(app_state.persistence.list_reports().await?))
}

/// Handler for GET /usuarios endpoint.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<User>>, HttpError> {
    Ok(Json(app_state.persistence.list_users().await?))
}

/// Handler for GET /clientes endpoint.
async fn handle_list_clients(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Client>>, HttpError> {
    Ok(Json(app_state.persistence.list_clients().await?))
}

/// Handler for GET /servicios endpoint.
async fn handle_list_services(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Service>>, HttpError> {
    Ok(Json(app_state.persistence.list_services().await?))
}

/// Handler for GET /motivos endpoint.
///
/// Lists the reasons offered in the reporting form. Free text is accepted too.
async fn handle_list_reasons() -> Json<Vec<&'static str>> {
    Json(ReportReason::ALL.iter().map(ReportReason::as_str).collect())
}

/// Handler for GET /reemplazos endpoint.
async fn handle_list_replacements(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<Replacement>> {
    Json(app_state.persistence.replacements().await)
}

/// Handler for GET /auditoria endpoint.
async fn handle_audit_log(AxumState(app_state): AxumState<AppState>) -> Json<Vec<AuditEvent>> {
    Json(app_state.persistence.audit_events().await)
}

/// Handler for POST /cuentas/{id}/reportar endpoint.
async fn handle_report_account(
    AxumState(app_state): AxumState<AppState>,
    Path(account_id): Path<i64>,
    Json(req): Json<ReportAccountRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    let account_id: AccountId = AccountId::new(account_id);
    info!(
        account_id = account_id.value(),
        user_id = req.user_id.value(),
        "Handling report request"
    );

    ensure_accounts_exist(&app_state.persistence, &[account_id]).await?;
    app_state
        .persistence
        .report_account(account_id, req)
        .await?;

    Ok(Json(MutationResponse {
        success: true,
        message: format!("Account {account_id} reported"),
    }))
}

async fn replace(
    app_state: &AppState,
    account_type: AccountType,
    old_account_id: AccountId,
    req: ReplaceAccountRequest,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        account_type = account_type.as_str(),
        old_account_id = old_account_id.value(),
        new_account_id = req.new_account_id.value(),
        user_id = req.user_id.value(),
        "Handling replacement request"
    );

    let new_account_id: AccountId = req.new_account_id;
    ensure_accounts_exist(&app_state.persistence, &[old_account_id, new_account_id]).await?;

    match account_type {
        AccountType::Individual => {
            app_state
                .persistence
                .replace_individual(old_account_id, req)
                .await?;
        }
        AccountType::Complete => {
            app_state
                .persistence
                .replace_complete(old_account_id, req)
                .await?;
        }
    }

    Ok(Json(MutationResponse {
        success: true,
        message: format!("Account {old_account_id} replaced by account {new_account_id}"),
    }))
}

/// Handler for POST /cuentas/{id}/reemplazar-individual endpoint.
async fn handle_replace_individual(
    AxumState(app_state): AxumState<AppState>,
    Path(account_id): Path<i64>,
    Json(req): Json<ReplaceAccountRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    replace(
        &app_state,
        AccountType::Individual,
        AccountId::new(account_id),
        req,
    )
    .await
}

/// Handler for POST /cuentas/{id}/reemplazar-completa endpoint.
async fn handle_replace_complete(
    AxumState(app_state): AxumState<AppState>,
    Path(account_id): Path<i64>,
    Json(req): Json<ReplaceAccountRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    replace(
        &app_state,
        AccountType::Complete,
        AccountId::new(account_id),
        req,
    )
    .await
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/cuentas", get(handle_list_accounts))
        .route("/reportes", get(handle_list_reports))
        .route("/usuarios", get(handle_list_users))
        .route("/clientes", get(handle_list_clients))
        .route("/servicios", get(handle_list_services))
        .route("/motivos", get(handle_list_reasons))
        .route("/reemplazos", get(handle_list_replacements))
        .route("/auditoria", get(handle_audit_log))
        .route("/cuentas/{id}/reportar", post(handle_report_account))
        .route(
            "/cuentas/{id}/reemplazar-individual",
            post(handle_replace_individual),
        )
        .route(
            "/cuentas/{id}/reemplazar-completa",
            post(handle_replace_complete),
        )
        .with_state(app_state)
}

fn load_persistence(args: &Args) -> Result<InMemoryPersistence, PersistenceError> {
    if let Some(seed_path) = &args.seed {
        info!("Loading seed from: {}", seed_path.display());
        InMemoryPersistence::new_with_file(seed_path)
    } else {
        info!("Starting with an empty store");
        Ok(InMemoryPersistence::new_empty())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Cuentas Server");

    let persistence: InMemoryPersistence = load_persistence(&args)?;
    let app_state: AppState = AppState {
        persistence: Arc::new(persistence),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
