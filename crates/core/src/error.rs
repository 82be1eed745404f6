/// Failures raised by the pure transformations in this crate
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Malformed Plant.id response: {0}")]
    MalformedResponse(String),

    #[error("Plant.id returned no suggestions")]
    NoSuggestions,
}
