use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Modifiers sent with every identification request
pub const MODIFIERS: [&str; 2] = ["crops_fast", "similar_images"];

/// Language requested for plant details
pub const PLANT_LANGUAGE: &str = "en";

/// Detail fields requested for each suggestion
pub const PLANT_DETAILS: [&str; 3] = ["common_names", "wiki_description", "url"];

/// Request body for the Plant.id `identify` endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IdentifyRequest {
    pub images: Vec<String>,
    pub modifiers: Vec<String>,
    pub plant_language: String,
    pub plant_details: Vec<String>,
}

/// Response body from the Plant.id `identify` endpoint
///
/// Suggestions stay untyped until one is selected: lower-ranked candidates
/// often carry `null` details and are never read.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IdentifyResponse {
    pub suggestions: Vec<serde_json::Value>,
}

/// A single ranked candidate species
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Suggestion {
    pub plant_name: String,
    pub plant_details: PlantDetails,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlantDetails {
    pub wiki_description: WikiDescription,
    #[serde(default)]
    pub common_names: Option<Vec<String>>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WikiDescription {
    pub value: String,
}

/// Encode raw image bytes with the standard (padded) base64 alphabet
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Build the identification request for a single image
pub fn build_identify_request(image: &[u8]) -> IdentifyRequest {
    IdentifyRequest {
        images: vec![encode_image(image)],
        modifiers: MODIFIERS.iter().map(|m| m.to_string()).collect(),
        plant_language: PLANT_LANGUAGE.to_string(),
        plant_details: PLANT_DETAILS.iter().map(|d| d.to_string()).collect(),
    }
}

/// Parse a raw provider response body
pub fn parse_identify_response(body: &str) -> Result<IdentifyResponse, CoreError> {
    serde_json::from_str(body).map_err(|e| CoreError::MalformedResponse(e.to_string()))
}

/// Select and decode the highest-ranked suggestion
///
/// The provider orders suggestions by probability, so the first entry is the
/// best match. An empty list is reported as [`CoreError::NoSuggestions`]; a
/// first entry missing required fields as [`CoreError::MalformedResponse`].
pub fn top_suggestion(response: &IdentifyResponse) -> Result<Suggestion, CoreError> {
    let first = response
        .suggestions
        .first()
        .ok_or(CoreError::NoSuggestions)?;

    Suggestion::deserialize(first).map_err(|e| CoreError::MalformedResponse(e.to_string()))
}

impl PlantDetails {
    pub fn common_names(&self) -> Vec<String> {
        self.common_names.clone().unwrap_or_default()
    }

    pub fn url(&self) -> String {
        self.url.clone().unwrap_or_default()
    }
}
