// src/web/handlers.rs

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::service_client::CompletionClient;
use crate::vacancy::types::{ExtractionOutcome, GenerationFields};
use crate::vacancy::{evaluate_resume, generate_vacancy_description, parse_vacancy};
use crate::web::types::{
    EvaluateRequest, EvaluateResponse, GenerateResponse, HealthResponse, ParseRequest,
    ServerConfig,
};

pub async fn vacancy_parse_handler(
    request: Json<ParseRequest>,
    client: &State<Arc<dyn CompletionClient>>,
) -> Json<ExtractionOutcome> {
    info!(
        "Parsing vacancy description ({} bytes)",
        request.description.len()
    );

    let outcome = parse_vacancy(client.inner().as_ref(), &request.description).await;

    // Extraction failures still answer 200; the payload carries the marker.
    if let ExtractionOutcome::Failed(failure) = &outcome {
        error!("Vacancy extraction failed: {}", failure.error_message);
    }

    Json(outcome)
}

pub async fn vacancy_generate_handler(
    request: Json<GenerationFields>,
    client: &State<Arc<dyn CompletionClient>>,
    config: &State<ServerConfig>,
) -> Result<Json<GenerateResponse>, Status> {
    info!("Generating vacancy description from {} fields", request.len());

    match generate_vacancy_description(
        client.inner().as_ref(),
        &request,
        &config.vacancy_template_path(),
    )
    .await
    {
        Ok(description) => Ok(Json(GenerateResponse {
            vacancy_description: description,
        })),
        Err(e) => {
            error!("Vacancy generation failed: {:#}", e);
            Err(Status::InternalServerError)
        }
    }
}

pub async fn vacancy_evaluate_handler(
    request: Json<EvaluateRequest>,
    client: &State<Arc<dyn CompletionClient>>,
    config: &State<ServerConfig>,
) -> Result<Json<EvaluateResponse>, Status> {
    info!("Evaluating resume against vacancy");

    match evaluate_resume(
        client.inner().as_ref(),
        &request.vacancy,
        &request.resume,
        &config.evaluate_template_path(),
    )
    .await
    {
        Ok(evaluation) => Ok(Json(EvaluateResponse { evaluation })),
        Err(e) => {
            error!("Resume evaluation failed: {:#}", e);
            Err(Status::InternalServerError)
        }
    }
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Vacancy API is running".to_string(),
    })
}
