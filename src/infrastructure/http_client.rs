use std::time::Duration;

use once_cell::sync::Lazy;

// The upstream call is bounded here so a hung internal service cannot hang
// gateway requests indefinitely.
static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build reqwest client")
});

pub async fn get(url: &str) -> Result<reqwest::Response, reqwest::Error> {
    CLIENT.get(url).send().await
}
