use serde::{Deserialize, Serialize};

use crate::care::CareNotes;
use crate::plant_id::Suggestion;

/// Message returned when Plant.id answers with a non-200 status
pub const PROVIDER_FAILED: &str = "Plant.id API failed";

/// Successful identification returned to the caller
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IdentificationOutput {
    pub plant_name: String,
    pub common_names: Vec<String>,
    pub wiki_url: String,
    pub description: String,
    pub care_tips: Vec<String>,
}

/// Error payload returned to the caller
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorOutput {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Combine the top suggestion with its care notes
pub fn build_identification(suggestion: &Suggestion, care: CareNotes) -> IdentificationOutput {
    IdentificationOutput {
        plant_name: suggestion.plant_name.clone(),
        common_names: suggestion.plant_details.common_names(),
        wiki_url: suggestion.plant_details.url(),
        description: suggestion.plant_details.wiki_description.value.clone(),
        care_tips: care.into_tips(),
    }
}

impl ErrorOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Error for a provider rejection, carrying the raw response body
    pub fn provider_rejected(body: impl Into<String>) -> Self {
        Self {
            error: PROVIDER_FAILED.to_string(),
            details: Some(body.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant_id::{PlantDetails, WikiDescription};

    fn suggestion(common_names: Option<Vec<String>>, url: Option<String>) -> Suggestion {
        Suggestion {
            plant_name: "Ficus lyrata".to_string(),
            plant_details: PlantDetails {
                wiki_description: WikiDescription {
                    value: "Fiddle-leaf fig.".to_string(),
                },
                common_names,
                url,
            },
        }
    }

    #[test]
    fn test_build_identification_full() {
        let output = build_identification(
            &suggestion(
                Some(vec!["Fiddle-leaf fig".to_string()]),
                Some("https://en.wikipedia.org/wiki/Ficus_lyrata".to_string()),
            ),
            CareNotes::Found(vec!["Water weekly".to_string()]),
        );

        assert_eq!(output.plant_name, "Ficus lyrata");
        assert_eq!(output.common_names, vec!["Fiddle-leaf fig"]);
        assert_eq!(output.wiki_url, "https://en.wikipedia.org/wiki/Ficus_lyrata");
        assert_eq!(output.description, "Fiddle-leaf fig.");
        assert_eq!(output.care_tips, vec!["Water weekly"]);
    }

    #[test]
    fn test_build_identification_defaults() {
        let output = build_identification(&suggestion(None, None), CareNotes::NotFound);

        assert!(output.common_names.is_empty());
        assert_eq!(output.wiki_url, "");
        assert_eq!(output.care_tips, vec!["No specific care info found."]);
    }

    #[test]
    fn test_identification_output_keys() {
        let output = build_identification(&suggestion(None, None), CareNotes::NotFound);
        let value = serde_json::to_value(output).unwrap();
        let mut keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        keys.sort();

        assert_eq!(
            keys,
            vec!["care_tips", "common_names", "description", "plant_name", "wiki_url"]
        );
    }

    #[test]
    fn test_error_output_without_details() {
        let value = serde_json::to_value(ErrorOutput::new("boom")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "boom"}));
    }

    #[test]
    fn test_error_output_provider_rejected() {
        let value = serde_json::to_value(ErrorOutput::provider_rejected("quota exceeded")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": "Plant.id API failed", "details": "quota exceeded"})
        );
    }
}
