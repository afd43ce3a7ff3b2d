// src/actions/scrape_company.rs
use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::Config;
use crate::conversation::{Action, ConversationContext, Dispatcher, Event, Result};
use crate::page_extractor::{CompanyInfo, PageExtractor};
use crate::website_finder::WebsiteFinder;

pub const COMPANY_NAME_ENTITY: &str = "company_name";

/// The single action this crate exposes: guess the company website, fetch
/// it, extract the descriptive fields, reply with one formatted message.
pub struct ScrapeCompanyAction {
    finder: WebsiteFinder,
    extractor: PageExtractor,
}

impl ScrapeCompanyAction {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            finder: WebsiteFinder::new(&config.http)?,
            extractor: PageExtractor::new(&config.http)?,
        })
    }
}

#[async_trait]
impl Action for ScrapeCompanyAction {
    fn name(&self) -> &'static str {
        "action_scrape_company"
    }

    async fn run(
        &self,
        context: &ConversationContext,
        dispatcher: &mut dyn Dispatcher,
    ) -> Result<Vec<Event>> {
        let Some(company_name) = context.get_entity(COMPANY_NAME_ENTITY) else {
            dispatcher.utter_message(
                "I couldn't find a company name. Please provide a valid company name.",
            );
            return Ok(Vec::new());
        };

        info!("Looking up website for '{}'", company_name);

        let Some(website_url) = self.finder.find_website(company_name).await else {
            dispatcher.utter_message(&format!(
                "Sorry, I couldn't find a working website for {}. The company might be using a different domain name format.",
                company_name
            ));
            return Ok(Vec::new());
        };

        let info = match self.extractor.extract(&website_url).await {
            Ok(info) => info,
            Err(e) => {
                warn!("Analysis of {} failed: {}", website_url, e);
                dispatcher.utter_message(&format!(
                    "Found the website but encountered an error while analyzing it: {}",
                    e
                ));
                return Ok(Vec::new());
            }
        };

        dispatcher.utter_message(&format_company_info(company_name, &website_url, &info));
        Ok(Vec::new())
    }
}

/// Renders the reply. The contact and social lists are capped to 3 items
/// here, at display time, not during extraction.
pub fn format_company_info(company_name: &str, website_url: &str, info: &CompanyInfo) -> String {
    let mut response = format!("Here's what I found about {}:\n\n", company_name);
    response.push_str(&format!("Website: {}\n\n", website_url));

    if !info.title.is_empty() {
        response.push_str(&format!("Title: {}\n\n", info.title));
    }

    if !info.description.is_empty() {
        response.push_str(&format!("Description: {}\n\n", info.description));
    }

    if !info.contact_info.is_empty() {
        response.push_str("Contact Information:\n");
        for contact in info.contact_info.iter().take(3) {
            response.push_str(&format!("- {}\n", contact));
        }
        response.push('\n');
    }

    if !info.social_links.is_empty() {
        response.push_str("Social Media:\n");
        for link in info.social_links.iter().take(3) {
            response.push_str(&format!("- {}\n", link));
        }
    }

    response
}
