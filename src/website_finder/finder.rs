// src/website_finder/finder.rs
use crate::config::HttpConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Outcome of a single reachability probe. Transport failures and non-200
/// statuses both collapse to `Unreachable`; the scan just moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable(String),
    Unreachable,
}

pub struct WebsiteFinder {
    client: Client,
}

impl WebsiteFinder {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(Duration::from_secs(http.probe_timeout_seconds))
            .build()?;

        Ok(Self { client })
    }

    /// Guess the company website from its name. Returns the first candidate
    /// URL that answers 200, or `None` when every candidate fails.
    pub async fn find_website(&self, company_name: &str) -> Option<String> {
        let normalized = normalize_company_name(company_name);
        debug!("Normalized '{}' to '{}'", company_name, normalized);

        self.find_first_reachable(&candidate_urls(&normalized))
            .await
    }

    /// Ordered scan over the candidates; stops at the first hit.
    pub async fn find_first_reachable(&self, candidates: &[String]) -> Option<String> {
        for candidate in candidates {
            match self.probe(candidate).await {
                ProbeOutcome::Reachable(url) => {
                    info!("✓ Confirmed website: {}", url);
                    return Some(url);
                }
                ProbeOutcome::Unreachable => continue,
            }
        }

        None
    }

    /// HEAD request with redirects followed; no body transfer. Success is
    /// exactly status 200 on the final response.
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());
        debug!("Probing {} ({})", url, host);

        match self.client.head(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                ProbeOutcome::Reachable(url.to_string())
            }
            Ok(response) => {
                debug!("Probe of {} answered {}", url, response.status());
                ProbeOutcome::Unreachable
            }
            Err(e) => {
                debug!("Probe of {} failed: {}", url, e);
                ProbeOutcome::Unreachable
            }
        }
    }
}

/// Lower-case the name and strip everything outside `a-z0-9`. An empty
/// result is passed through and yields degenerate hosts like `https://.com`.
pub fn normalize_company_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// The fixed candidate list. Order is significant: plain `.com` first, then
/// the `www` and TLD variants, then the two region-specific paths.
pub fn candidate_urls(normalized: &str) -> Vec<String> {
    vec![
        format!("https://{}.com", normalized),
        format!("https://www.{}.com", normalized),
        format!("https://{}.co", normalized),
        format!("https://www.{}.co", normalized),
        format!("https://{}.org", normalized),
        format!("https://www.{}.org", normalized),
        format!("https://{}.net", normalized),
        format!("https://www.{}.net", normalized),
        format!("https://www.{}.com/in/", normalized),
        format!("https://www.{}.co.in/", normalized),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn finder() -> WebsiteFinder {
        WebsiteFinder::new(&Config::default().http).unwrap()
    }

    #[test]
    fn normalization_strips_punctuation_and_lowercases() {
        assert_eq!(normalize_company_name("Acme, Inc."), "acmeinc");
        assert_eq!(normalize_company_name("OpenAI"), "openai");
        assert_eq!(normalize_company_name("3M Company"), "3mcompany");
    }

    #[test]
    fn normalization_of_pure_punctuation_is_empty() {
        assert_eq!(normalize_company_name("---"), "");
        // Degenerate host, accepted pass-through
        assert_eq!(candidate_urls("")[0], "https://.com");
    }

    #[test]
    fn candidates_are_generated_in_declared_order() {
        let urls = candidate_urls("acme");
        assert_eq!(
            urls,
            vec![
                "https://acme.com",
                "https://www.acme.com",
                "https://acme.co",
                "https://www.acme.co",
                "https://acme.org",
                "https://www.acme.org",
                "https://acme.net",
                "https://www.acme.net",
                "https://www.acme.com/in/",
                "https://www.acme.co.in/",
            ]
        );
    }

    #[tokio::test]
    async fn scan_returns_first_200_and_stops_probing() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/first"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/second"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/third"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let candidates = vec![
            format!("{}/first", server.uri()),
            format!("{}/second", server.uri()),
            format!("{}/third", server.uri()),
        ];

        let found = finder().find_first_reachable(&candidates).await;
        assert_eq!(found, Some(format!("{}/second", server.uri())));
    }

    #[tokio::test]
    async fn all_candidates_failing_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let candidates = vec![
            format!("{}/a", server.uri()),
            format!("{}/b", server.uri()),
        ];

        assert_eq!(finder().find_first_reachable(&candidates).await, None);
    }

    #[tokio::test]
    async fn non_200_success_statuses_are_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let candidates = vec![format!("{}/nocontent", server.uri())];
        assert_eq!(finder().find_first_reachable(&candidates).await, None);
    }

    #[tokio::test]
    async fn redirect_landing_on_200_counts_as_reachable() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("Location", format!("{}/new", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let candidates = vec![format!("{}/old", server.uri())];
        let found = finder().find_first_reachable(&candidates).await;
        // The candidate URL itself is returned, not the redirect target
        assert_eq!(found, Some(format!("{}/old", server.uri())));
    }
}
