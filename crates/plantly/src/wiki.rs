use plantly_core::care::{article_url, extract_care_notes, CareNotes};

pub const WIKI_BASE_URL: &str = "https://en.wikipedia.org/wiki";

/// Look up care notes for a plant
///
/// Never fails: fetch errors become [`CareNotes::Degraded`].
pub async fn fetch_care_notes(client: &reqwest::Client, base: &str, plant_name: &str) -> CareNotes {
    let url = article_url(base, plant_name);

    match fetch_article(client, &url).await {
        Ok(html) => extract_care_notes(&html),
        Err(e) => {
            log::warn!("Failed to fetch care info from {url}: {e}");
            CareNotes::Degraded(e.to_string())
        }
    }
}

async fn fetch_article(client: &reqwest::Client, url: &str) -> reqwest::Result<String> {
    let response = client.get(url).send().await?;

    // Missing articles still come back as HTML pages and are parsed as-is.
    if !response.status().is_success() {
        log::warn!("{url} returned HTTP {}", response.status());
    }

    response.text().await
}
