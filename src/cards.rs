//! Cards shown by the terminal deck.

use uuid::Uuid;

use crate::config::CardSpec;
use crate::ui::deck::DeckItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl DeckItem for Card {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl From<&CardSpec> for Card {
    fn from(spec: &CardSpec) -> Self {
        Self {
            id: spec
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: spec.title.clone(),
            body: spec.body.clone(),
        }
    }
}

/// Build cards from config entries, assigning random ids where missing.
pub fn cards_from_specs(specs: &[CardSpec]) -> Vec<Card> {
    specs.iter().map(Card::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_ids_are_kept() {
        let cards = cards_from_specs(&[CardSpec {
            id: Some("a".into()),
            title: "A".into(),
            body: String::new(),
        }]);
        assert_eq!(cards[0].id, "a");
        assert_eq!(cards[0].title, "A");
    }

    #[test]
    fn missing_ids_are_generated_and_unique() {
        let spec = CardSpec {
            id: None,
            title: "same".into(),
            body: String::new(),
        };
        let cards = cards_from_specs(&[spec.clone(), spec]);
        assert!(!cards[0].id.is_empty());
        assert_ne!(cards[0].id, cards[1].id);
    }
}
