// Typed surfaces of the hosting conversational framework: the entity
// context an action reads from and the dispatcher it replies through.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    pub entities: Vec<Entity>,
}

impl ConversationContext {
    pub fn with_entity(name: &str, value: &str) -> Self {
        Self {
            entities: vec![Entity {
                name: name.to_string(),
                value: value.to_string(),
            }],
        }
    }

    /// First value recorded under `name`, if any.
    pub fn get_entity(&self, name: &str) -> Option<&str> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }
}

/// Outbound message channel. An action calls this exactly once per run.
pub trait Dispatcher: Send {
    fn utter_message(&mut self, text: &str);
}

#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    pub messages: Vec<String>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dispatcher for CollectingDispatcher {
    fn utter_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

/// Follow-up events handed back to the framework. Serialized as JSON at
/// the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    SlotSet { key: String, value: String },
}

#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(
        &self,
        context: &ConversationContext,
        dispatcher: &mut dyn Dispatcher,
    ) -> Result<Vec<Event>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_entity_returns_first_match() {
        let context = ConversationContext {
            entities: vec![
                Entity {
                    name: "company_name".to_string(),
                    value: "Acme".to_string(),
                },
                Entity {
                    name: "company_name".to_string(),
                    value: "Globex".to_string(),
                },
            ],
        };

        assert_eq!(context.get_entity("company_name"), Some("Acme"));
        assert_eq!(context.get_entity("person_name"), None);
    }

    #[test]
    fn collecting_dispatcher_keeps_messages_in_order() {
        let mut dispatcher = CollectingDispatcher::new();
        dispatcher.utter_message("first");
        dispatcher.utter_message("second");
        assert_eq!(dispatcher.messages, vec!["first", "second"]);
    }

    #[test]
    fn events_serialize_with_tag() {
        let event = Event::SlotSet {
            key: "company_website".to_string(),
            value: "https://acme.com".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"slot_set\""));
    }
}
