use crate::prelude::*;
use plantly_core::plant_id::{build_identify_request, parse_identify_response, IdentifyResponse};

pub const PLANT_ID_API_URL: &str = "https://api.plant.id/v2/identify";

/// Send one image to Plant.id and parse the ranked suggestions
///
/// Any status other than 200 is returned as [`Error::ProviderRejected`] with
/// the raw response body. No retries are attempted.
pub async fn classify(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    image: &[u8],
) -> Result<IdentifyResponse, Error> {
    let request = build_identify_request(image);

    let response = client
        .post(url)
        .header("Api-Key", api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| Error::Network(f!("Failed to reach Plant.id: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(f!("Failed to read Plant.id response: {e}")))?;

    if status != reqwest::StatusCode::OK {
        log::warn!("Plant.id rejected the request with status {status}");
        return Err(Error::ProviderRejected {
            status: status.as_u16(),
            body,
        });
    }

    Ok(parse_identify_response(&body)?)
}
