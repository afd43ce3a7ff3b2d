// src/page_extractor/extractor.rs
use crate::config::HttpConfig;
use crate::page_extractor::types::CompanyInfo;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

const SOCIAL_DOMAINS: [&str; 4] = [
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
];

pub struct PageExtractor {
    client: Client,
    email_regex: Regex,
    phone_regex: Regex,
    keyword_regex: Regex,
}

impl PageExtractor {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(Duration::from_secs(http.fetch_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            email_regex: Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+")?,
            // Leading +, 1-3 digit country code, up to 14 further digits
            phone_regex: Regex::new(r"\+\d{1,3}[-.\s]?\d{1,14}")?,
            // Alternation order matters: "about" wins over "about-us"
            keyword_regex: Regex::new(r"(?i)contact|about|about-us")?,
        })
    }

    /// Full GET of the confirmed URL. Every fetch or parse failure comes
    /// back as `Err`; the caller turns the error text into the reply.
    pub async fn extract(&self, url: &str) -> Result<CompanyInfo> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        let info = self.extract_from_html(url, &html);
        info!(
            "Extracted {} contact strings and {} social links from {}",
            info.contact_info.len(),
            info.social_links.len(),
            url
        );

        Ok(info)
    }

    pub fn extract_from_html(&self, url: &str, html: &str) -> CompanyInfo {
        let document = Html::parse_document(html);

        // Extract title
        let title_selector = Selector::parse("title").unwrap();
        let title = document
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>())
            .unwrap_or_else(|| "No title found".to_string());

        // First meta tag whose name is "description", any casing
        let meta_selector = Selector::parse("meta[name]").unwrap();
        let description = document
            .select(&meta_selector)
            .find(|m| {
                m.value()
                    .attr("name")
                    .is_some_and(|n| n.eq_ignore_ascii_case("description"))
            })
            .and_then(|m| m.value().attr("content"))
            .unwrap_or_default()
            .to_string();

        let text_content = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ");
        let contact_info = self.extract_contact_info(&text_content);
        let social_links = extract_social_links(&document);

        CompanyInfo {
            url: url.to_string(),
            title,
            description,
            contact_info,
            social_links,
            scraped_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Scan the page text with the three patterns in declared order,
    /// merging matches by pattern then position. Exact repeats are dropped.
    fn extract_contact_info(&self, text: &str) -> Vec<String> {
        let mut contacts: Vec<String> = Vec::new();

        for regex in [&self.email_regex, &self.phone_regex, &self.keyword_regex] {
            for found in regex.find_iter(text) {
                let value = found.as_str().to_string();
                if !contacts.contains(&value) {
                    contacts.push(value);
                }
            }
        }

        contacts
    }
}

/// Every anchor href that mentions a social domain, in document order.
/// Unlike contact strings, duplicates are retained.
fn extract_social_links(document: &Html) -> Vec<String> {
    let link_selector = Selector::parse("a[href]").unwrap();

    document
        .select(&link_selector)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| {
            let href_lower = href.to_lowercase();
            SOCIAL_DOMAINS
                .iter()
                .any(|domain| href_lower.contains(domain))
        })
        .map(str::to_string)
        .collect()
}
