// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use tracing::info;

use crate::core::config_manager::ConfigManager;
use crate::core::service_client::{CompletionClient, ServiceClient};
use crate::vacancy::types::{ExtractionOutcome, GenerationFields};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/vacancy/parse", data = "<request>")]
pub async fn vacancy_parse(
    request: Json<ParseRequest>,
    client: &State<Arc<dyn CompletionClient>>,
) -> Json<ExtractionOutcome> {
    handlers::vacancy_parse_handler(request, client).await
}

#[post("/vacancy/generate", data = "<request>")]
pub async fn vacancy_generate(
    request: Json<GenerationFields>,
    client: &State<Arc<dyn CompletionClient>>,
    config: &State<ServerConfig>,
) -> Result<Json<GenerateResponse>, Status> {
    handlers::vacancy_generate_handler(request, client, config).await
}

#[post("/vacancy/evaluate", data = "<request>")]
pub async fn vacancy_evaluate(
    request: Json<EvaluateRequest>,
    client: &State<Arc<dyn CompletionClient>>,
    config: &State<ServerConfig>,
) -> Result<Json<EvaluateResponse>, Status> {
    handlers::vacancy_evaluate_handler(request, client, config).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Request body failed validation".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
    ))
}

/// Assemble the Rocket instance. Split out from `start_web_server` so tests
/// can inject a completion-client double.
pub fn build_rocket(client: Arc<dyn CompletionClient>, config: ServerConfig) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(client)
        .manage(config)
        .register(
            "/",
            catchers![bad_request, unprocessable_entity, internal_error],
        )
        .mount(
            "/",
            routes![
                vacancy_parse,
                vacancy_generate,
                vacancy_evaluate,
                health,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let client: Arc<dyn CompletionClient> = Arc::new(ServiceClient::new(
        config.service.api_base.clone(),
        config.service.api_key.clone(),
        config.service.model.clone(),
    )?);

    let server_config = ServerConfig {
        prompts_dir: config.prompts_path.clone(),
    };

    info!("Starting vacancy intelligence API server");

    build_rocket(client, server_config).launch().await?;

    Ok(())
}
