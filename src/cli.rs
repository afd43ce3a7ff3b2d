// Interactive driver standing in for the conversational framework: reads a
// company name, builds the entity context, runs the action, prints the reply.
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::error;

use crate::actions::scrape_company::COMPANY_NAME_ENTITY;
use crate::actions::ScrapeCompanyAction;
use crate::config::Config;
use crate::conversation::{Action, CollectingDispatcher, ConversationContext};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub async fn run(config: Config) -> Result<()> {
    println!("\n🔎 Company Scraper");
    println!("═══════════════════════════════════════");
    println!("Type a company name to look up its website (empty to exit).");

    let action = ScrapeCompanyAction::new(&config)?;

    loop {
        let company_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("\nCompany name")
            .allow_empty(true)
            .interact_text()?;

        if company_name.is_empty() {
            println!("\n👋 Bye!");
            break;
        }

        let context = ConversationContext::with_entity(COMPANY_NAME_ENTITY, &company_name);
        let mut dispatcher = CollectingDispatcher::new();

        match action.run(&context, &mut dispatcher).await {
            Ok(events) => {
                for message in &dispatcher.messages {
                    println!("\n{}", message);
                }
                if !events.is_empty() {
                    println!("\nFollow-up events: {}", serde_json::to_string(&events)?);
                }
            }
            Err(e) => error!("Action failed: {}", e),
        }
    }

    Ok(())
}
