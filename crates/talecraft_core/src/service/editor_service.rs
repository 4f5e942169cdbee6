//! Adventure editing use-case service.
//!
//! # Responsibility
//! - Maintain a mutable working copy of an adventure under edit operations.
//! - Enforce save preconditions and persist through the adventure store.
//!
//! # Invariants
//! - Edit operations preserve place/choice order; appends go at the end.
//! - Index-based replacement is bounds-checked and never writes out of
//!   range.
//! - Save preconditions (non-blank title, at least one place) are checked
//!   before any write; a violated precondition performs zero writes.
//! - Lint findings never block a save.

use crate::lint::{lint_adventure, LintingError};
use crate::model::adventure::{Adventure, AdventureId, Choice, Place};
use crate::store::adventure_store::{AdventureStore, StoreError};
use crate::store::kv::KeyValueStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Errors from draft edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// Place index is outside the draft's place list.
    PlaceIndexOutOfBounds { index: usize, place_count: usize },
    /// Choice index is outside the target place's choice list.
    ChoiceIndexOutOfBounds {
        place_index: usize,
        choice_index: usize,
        choice_count: usize,
    },
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlaceIndexOutOfBounds { index, place_count } => write!(
                f,
                "place index {index} out of bounds for {place_count} places"
            ),
            Self::ChoiceIndexOutOfBounds {
                place_index,
                choice_index,
                choice_count,
            } => write!(
                f,
                "choice index {choice_index} out of bounds for {choice_count} choices of place {place_index}"
            ),
        }
    }
}

impl Error for EditorError {}

/// Errors from editor service operations.
#[derive(Debug)]
pub enum EditorServiceError {
    /// Save precondition: title is empty after trimming whitespace.
    BlankTitle,
    /// Save precondition: the draft has no places.
    NoPlaces,
    /// Requested adventure does not exist in the store.
    AdventureNotFound(AdventureId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for EditorServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "adventure title must not be blank"),
            Self::NoPlaces => write!(f, "adventure must contain at least one place"),
            Self::AdventureNotFound(id) => write!(f, "adventure not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for EditorServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Mutable working copy of an adventure being edited.
///
/// `id` is `None` until the first successful save; the linter never needs
/// it. All operations replace whole values, mirroring the form-based
/// editing surface: no partial updates, no diffing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdventureDraft {
    pub id: Option<AdventureId>,
    pub title: String,
    pub places: Vec<Place>,
}

impl AdventureDraft {
    /// Creates an empty draft for a brand-new adventure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft from a stored adventure.
    pub fn from_adventure(adventure: &Adventure) -> Self {
        Self {
            id: Some(adventure.id.clone()),
            title: adventure.title.clone(),
            places: adventure.places.clone(),
        }
    }

    /// Appends a new place and returns it.
    ///
    /// The place gets a fresh id, a positional default title (`Place N`),
    /// and starts the adventure only when the draft had no places yet.
    pub fn add_place(&mut self) -> &Place {
        let mut place = Place::new(format!("Place {}", self.places.len() + 1));
        place.is_start = self.places.is_empty();
        let index = self.places.len();
        self.places.push(place);
        &self.places[index]
    }

    /// Replaces the place at `index` with a full replacement value.
    ///
    /// Field contents are not validated here; structural problems are the
    /// linter's job.
    pub fn update_place(&mut self, index: usize, place: Place) -> Result<(), EditorError> {
        let place_count = self.places.len();
        match self.places.get_mut(index) {
            Some(slot) => {
                *slot = place;
                Ok(())
            }
            None => Err(EditorError::PlaceIndexOutOfBounds { index, place_count }),
        }
    }

    /// Appends an empty choice to the place at `place_index`.
    pub fn add_choice(&mut self, place_index: usize) -> Result<(), EditorError> {
        let place_count = self.places.len();
        match self.places.get_mut(place_index) {
            Some(place) => {
                place.choices.push(Choice::unset());
                Ok(())
            }
            None => Err(EditorError::PlaceIndexOutOfBounds {
                index: place_index,
                place_count,
            }),
        }
    }

    /// Replaces the choice at (`place_index`, `choice_index`) with a full
    /// replacement value.
    pub fn update_choice(
        &mut self,
        place_index: usize,
        choice_index: usize,
        choice: Choice,
    ) -> Result<(), EditorError> {
        let place_count = self.places.len();
        let place = self
            .places
            .get_mut(place_index)
            .ok_or(EditorError::PlaceIndexOutOfBounds {
                index: place_index,
                place_count,
            })?;
        let choice_count = place.choices.len();
        match place.choices.get_mut(choice_index) {
            Some(slot) => {
                *slot = choice;
                Ok(())
            }
            None => Err(EditorError::ChoiceIndexOutOfBounds {
                place_index,
                choice_index,
                choice_count,
            }),
        }
    }

    /// Creates a new place and wires the given choice's target to it in one
    /// step, so a choice can spawn its destination inline.
    ///
    /// The choice keeps its text; only `next_place_id` changes. Returns the
    /// new place.
    pub fn add_place_for_choice(
        &mut self,
        place_index: usize,
        choice_index: usize,
    ) -> Result<&Place, EditorError> {
        // Validate the choice slot before appending, so a bad index leaves
        // the draft untouched.
        let place_count = self.places.len();
        let place = self
            .places
            .get(place_index)
            .ok_or(EditorError::PlaceIndexOutOfBounds {
                index: place_index,
                place_count,
            })?;
        if choice_index >= place.choices.len() {
            return Err(EditorError::ChoiceIndexOutOfBounds {
                place_index,
                choice_index,
                choice_count: place.choices.len(),
            });
        }

        let new_place_id = self.add_place().id.clone();
        self.places[place_index].choices[choice_index].next_place_id = new_place_id;

        let last = self.places.len() - 1;
        Ok(&self.places[last])
    }

    /// Lints the current draft state.
    ///
    /// Recomputed from scratch on every call; intended to run after every
    /// edit for live feedback.
    pub fn lint(&self) -> Vec<LintingError> {
        let snapshot = Adventure {
            id: self.id.clone().unwrap_or_default(),
            title: self.title.clone(),
            places: self.places.clone(),
        };
        lint_adventure(&snapshot)
    }
}

/// Editing-session facade over the adventure store.
///
/// Implements the narrow surface the presentation layer calls into:
/// create/edit/save/delete plus listing.
pub struct EditorService<K: KeyValueStore> {
    store: AdventureStore<K>,
}

impl<K: KeyValueStore> EditorService<K> {
    /// Creates a service over the provided store.
    pub fn new(store: AdventureStore<K>) -> Self {
        Self { store }
    }

    /// Starts a draft for a brand-new adventure.
    pub fn create_draft(&self) -> AdventureDraft {
        AdventureDraft::new()
    }

    /// Loads a stored adventure into a draft for editing.
    pub fn edit_draft(&self, id: &str) -> Result<AdventureDraft, EditorServiceError> {
        match self.store.get(id)? {
            Some(adventure) => Ok(AdventureDraft::from_adventure(&adventure)),
            None => Err(EditorServiceError::AdventureNotFound(id.to_string())),
        }
    }

    /// Validates save preconditions and persists the draft.
    ///
    /// A first-time save assigns a fresh adventure id. Returns the
    /// persisted adventure so the caller can keep editing under its id.
    ///
    /// # Errors
    /// - `BlankTitle` when the title is empty after trimming.
    /// - `NoPlaces` when the draft has no places.
    /// Both abort before any write; the draft stays untouched.
    pub fn save_draft(&self, draft: &AdventureDraft) -> Result<Adventure, EditorServiceError> {
        if draft.title.trim().is_empty() {
            return Err(EditorServiceError::BlankTitle);
        }
        if draft.places.is_empty() {
            return Err(EditorServiceError::NoPlaces);
        }

        let id = match &draft.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => Uuid::new_v4().to_string(),
        };
        let adventure = Adventure {
            id,
            title: draft.title.clone(),
            places: draft.places.clone(),
        };

        self.store.save(&adventure)?;
        info!(
            "event=draft_save module=service status=ok adventure_id={} place_count={}",
            adventure.id,
            adventure.places.len()
        );
        Ok(adventure)
    }

    /// Deletes a stored adventure by id. Unknown ids are a no-op.
    ///
    /// The caller is responsible for any user confirmation beforehand.
    pub fn delete_adventure(&self, id: &str) -> Result<(), EditorServiceError> {
        self.store.delete(id)?;
        Ok(())
    }

    /// Lists all stored adventures.
    pub fn list_adventures(&self) -> Result<Vec<Adventure>, EditorServiceError> {
        self.store.list().map_err(Into::into)
    }
}
