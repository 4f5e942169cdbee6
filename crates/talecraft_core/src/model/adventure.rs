//! Adventure domain model.
//!
//! # Responsibility
//! - Define `Adventure`, `Place`, and `Choice` as plain serializable data.
//! - Provide constructors that generate stable ids for new entities.
//!
//! # Invariants
//! - `Place::id` is stable and never reused within an adventure.
//! - `Choice::next_place_id` is either empty ("unset") or the id of a place
//!   in the same adventure; the model does not enforce the reference.
//! - Field names serialize in camelCase to stay compatible with previously
//!   stored adventure blobs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an adventure.
///
/// Kept as a string alias: ids are opaque tokens in the stored format and an
/// empty string marks a draft that has not been saved yet.
pub type AdventureId = String;

/// Stable identifier for a place, unique within its adventure.
pub type PlaceId = String;

/// A complete branching story: a title plus its places.
///
/// An `Adventure` is both the unit of persistence and the unit of linting.
/// It exclusively owns its places; nothing is shared across adventures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adventure {
    /// Opaque unique id. Empty for an unsaved draft snapshot.
    pub id: AdventureId,
    /// Display title.
    pub title: String,
    /// Narrative nodes in authoring order.
    pub places: Vec<Place>,
}

impl Adventure {
    /// Returns whether any place is flagged as the starting place.
    pub fn has_start_place(&self) -> bool {
        self.places.iter().any(|place| place.is_start)
    }

    /// Finds a place by id.
    pub fn find_place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }
}

/// A single narrative node of the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Opaque unique id within the adventure.
    pub id: PlaceId,
    /// Display title.
    pub title: String,
    /// Narrative body text.
    pub description: String,
    /// Whether reading begins here. Intended to be unique per adventure,
    /// but not enforced structurally; see `crate::lint`.
    pub is_start: bool,
    /// Whether this place is a terminal ending. Endings should carry no
    /// choices; non-endings should carry at least one.
    pub is_ending: bool,
    /// Outgoing labeled edges in authoring order.
    pub choices: Vec<Choice>,
}

impl Place {
    /// Creates a place with a freshly generated id and no choices.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            is_start: false,
            is_ending: false,
            choices: Vec::new(),
        }
    }
}

/// A labeled edge from one place to another (or to "unset").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Label shown to the reader.
    pub text: String,
    /// Target place id, or the empty string when not yet wired up.
    pub next_place_id: String,
}

impl Choice {
    /// Creates an empty choice with no text and no target.
    pub fn unset() -> Self {
        Self {
            text: String::new(),
            next_place_id: String::new(),
        }
    }

    /// Returns whether this choice has a target selected.
    pub fn has_target(&self) -> bool {
        !self.next_place_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Adventure, Choice, Place};

    #[test]
    fn new_place_has_unique_id_and_empty_choices() {
        let first = Place::new("Cave mouth");
        let second = Place::new("Cave mouth");
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(first.choices.is_empty());
        assert!(!first.is_start);
        assert!(!first.is_ending);
    }

    #[test]
    fn unset_choice_has_no_target() {
        let choice = Choice::unset();
        assert!(!choice.has_target());
        assert!(choice.text.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let adventure = Adventure {
            id: "a1".to_string(),
            title: "Test".to_string(),
            places: vec![Place {
                id: "p1".to_string(),
                title: "Start".to_string(),
                description: String::new(),
                is_start: true,
                is_ending: false,
                choices: vec![Choice {
                    text: "Go".to_string(),
                    next_place_id: "p2".to_string(),
                }],
            }],
        };

        let json = serde_json::to_string(&adventure).unwrap();
        assert!(json.contains("\"isStart\":true"));
        assert!(json.contains("\"isEnding\":false"));
        assert!(json.contains("\"nextPlaceId\":\"p2\""));

        let parsed: Adventure = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, adventure);
    }

    #[test]
    fn find_place_and_has_start_place() {
        let mut place = Place::new("Start");
        place.is_start = true;
        let id = place.id.clone();
        let adventure = Adventure {
            id: String::new(),
            title: "Draft".to_string(),
            places: vec![place],
        };

        assert!(adventure.has_start_place());
        assert!(adventure.find_place(&id).is_some());
        assert!(adventure.find_place("missing").is_none());
    }
}
