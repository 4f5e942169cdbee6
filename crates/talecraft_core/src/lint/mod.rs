//! Structural linting for adventure graphs.
//!
//! # Responsibility
//! - Scan an adventure snapshot and report structural defects as values.
//! - Keep findings advisory; linting never blocks editing or saving.
//!
//! # Invariants
//! - `lint_adventure` is pure: no mutation, no hidden state, deterministic
//!   output for equal input.
//! - Findings are ordered: per-place findings in `places` order (place-level
//!   first, then that place's choices in order), adventure-level last.
//! - Not checked, matching the original rule set: dangling
//!   `next_place_id` references, multiple starting places, reachability
//!   from the start. Candidates for future rules, not silently added.

use crate::model::adventure::{Adventure, Place};

/// Subject id carried by the adventure-level "no starting place" finding.
pub const ADVENTURE_SUBJECT_ID: &str = "adventure";

/// Which kind of entity a finding points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintKind {
    /// Finding about a place (or the adventure as a whole).
    Place,
    /// Finding about a single choice of a place.
    Choice,
}

/// A detected structural defect in an adventure graph.
///
/// Ephemeral: recomputed from scratch on every pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintingError {
    pub kind: LintKind,
    /// Place id, `"{place_id}-{choice_index}"` for choice findings, or
    /// [`ADVENTURE_SUBJECT_ID`] for the adventure-level finding.
    pub subject_id: String,
    /// Human-readable description for inline display.
    pub message: String,
}

impl LintingError {
    /// Returns whether this finding concerns the given place.
    pub fn concerns_place(&self, place_id: &str) -> bool {
        self.kind == LintKind::Place && self.subject_id == place_id
    }

    /// Returns whether this finding concerns the given choice position.
    pub fn concerns_choice(&self, place_id: &str, choice_index: usize) -> bool {
        self.kind == LintKind::Choice
            && self.subject_id == choice_subject_id(place_id, choice_index)
    }
}

/// Formats the composite subject id for a choice finding.
pub fn choice_subject_id(place_id: &str, choice_index: usize) -> String {
    format!("{place_id}-{choice_index}")
}

/// Lints a full adventure snapshot.
///
/// The adventure id may be empty (unsaved draft); it is never inspected.
pub fn lint_adventure(adventure: &Adventure) -> Vec<LintingError> {
    let mut errors = Vec::new();

    for place in &adventure.places {
        lint_place(place, &mut errors);
    }

    if !adventure.has_start_place() {
        errors.push(LintingError {
            kind: LintKind::Place,
            subject_id: ADVENTURE_SUBJECT_ID.to_string(),
            message: "Adventure has no starting place".to_string(),
        });
    }

    errors
}

fn lint_place(place: &Place, errors: &mut Vec<LintingError>) {
    if !place.is_ending && place.choices.is_empty() {
        errors.push(LintingError {
            kind: LintKind::Place,
            subject_id: place.id.clone(),
            message: "Place has no choices and is not an ending".to_string(),
        });
    }

    if place.is_ending && !place.choices.is_empty() {
        errors.push(LintingError {
            kind: LintKind::Place,
            subject_id: place.id.clone(),
            message: "Ending place should not have choices".to_string(),
        });
    }

    for (index, choice) in place.choices.iter().enumerate() {
        if !choice.has_target() {
            errors.push(LintingError {
                kind: LintKind::Choice,
                subject_id: choice_subject_id(&place.id, index),
                message: "Choice has no target place selected".to_string(),
            });
        }
    }
}
