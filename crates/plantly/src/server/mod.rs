mod cli;

pub use cli::ServeOptions;

use crate::identify::Pipeline;
use crate::prelude::{eprintln, *};
use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Multipart field carrying the image
const UPLOAD_FIELD: &str = "file";

pub struct AppState {
    pub pipeline: Pipeline,
    pub strict_status: bool,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let state = Arc::new(AppState {
        pipeline: Pipeline::from_global(&global)?,
        strict_status: options.strict_status,
    });

    let addr = format!("{}:{}", options.host, options.port);
    let router = create_router(state, &options)?;

    if global.verbose {
        eprintln!("Plant.id endpoint: {}", global.plant_id_url);
        eprintln!("Wikipedia base: {}", global.wiki_base_url);
        eprintln!("Allowed origins: {}", options.allowed_origins.join(", "));
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{addr}");
    log::info!("Prediction endpoint: http://{addr}/predict");

    axum::serve(listener, router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the router with the prediction endpoint and CORS policy
pub fn create_router(state: Arc<AppState>, options: &ServeOptions) -> Result<Router> {
    Ok(Router::new()
        .route("/predict", post(predict_handler))
        .layer(DefaultBodyLimit::max(options.max_upload_bytes))
        .layer(cors_layer(&options.allowed_origins)?)
        .with_state(state))
}

/// CORS restricted to an explicit list of origins, with credentials
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            if origin.trim() == "*" {
                return Err(eyre!("Wildcard origin cannot be combined with credentials"));
            }
            HeaderValue::from_str(origin.trim())
                .map_err(|e| eyre!("Invalid allowed origin '{}': {}", origin, e))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn predict_handler(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Response {
    let result = match multipart {
        Ok(multipart) => predict(&state.pipeline, multipart).await,
        Err(rejection) => Err(Error::Upload(rejection.body_text())),
    };

    match result {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(err) => {
            log::error!("Prediction failed: {err}");
            let status = if state.strict_status {
                err.status_code()
            } else {
                StatusCode::OK
            };
            (status, Json(err.to_output())).into_response()
        }
    }
}

async fn predict(
    pipeline: &Pipeline,
    multipart: Multipart,
) -> Result<plantly_core::identify::IdentificationOutput, Error> {
    let image = read_upload(multipart).await?;
    log::info!("Received image upload ({} bytes)", image.len());
    pipeline.identify(&image).await
}

/// Read the whole `file` part into memory
async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Upload(e.body_text()))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::Upload(e.body_text()))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(Error::Upload(f!("missing '{UPLOAD_FIELD}' field")))
}
