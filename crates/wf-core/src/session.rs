use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animate::{self, MarkerMutation};
use crate::config::TermConfig;
use crate::error::{Result, VizError};
use crate::locate::{TermMatch, locate};
use crate::marker::{Categories, Category};
use crate::placement::generate_batch;
use crate::tokenizer::tokenize;

/// Where the session is in the text -> terms -> animation flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    AwaitingText,
    AwaitingTerms,
    Visualizing,
}

/// Owner of all mutable visualization state: the token sequence and the
/// three category collections.
///
/// Replaces the ambient globals of a linear scene script: every component
/// call flows through this struct, and every resubmission is a total reset
/// (prior markers are discarded for all categories, never accumulated).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    phase: SessionPhase,
    tokens: Vec<String>,
    categories: Categories,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::AwaitingText,
            tokens: Vec::new(),
            categories: Categories::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Submit (or resubmit) source text. Retokenizes wholesale and discards
    /// every placed marker.
    pub fn submit_text(&mut self, text: &str) {
        self.tokens = tokenize(text);
        self.categories.clear();
        self.phase = SessionPhase::AwaitingTerms;
    }

    /// Submit the three term configs in fixed slot order
    /// (slot 0 -> Falling, slot 1 -> Pulsing, slot 2 -> Floating).
    ///
    /// Every config is validated before any state changes; a malformed config
    /// fails fast and leaves the prior generation intact. On success all
    /// categories are regenerated from scratch. Returns markers placed per
    /// slot; a term with zero occurrences leaves its category empty.
    pub fn submit_terms(
        &mut self,
        configs: &[TermConfig; 3],
        rng: &mut impl Rng,
    ) -> Result<[usize; 3]> {
        if self.phase == SessionPhase::AwaitingText {
            return Err(VizError::NoText);
        }
        for config in configs {
            config.validate()?;
        }

        self.categories.clear();
        let mut placed = [0usize; 3];

        for (slot, config) in configs.iter().enumerate() {
            let category = Category::from_slot(slot);
            let matches: Vec<TermMatch> = locate(&self.tokens, &config.term).collect();
            for m in matches {
                let batch = generate_batch(m.height, config, category, rng);
                placed[slot] += batch.len();
                self.categories.records_mut(category).extend(batch);
            }
        }

        self.phase = SessionPhase::Visualizing;
        Ok(placed)
    }

    /// Advance one display tick: compute mutations, commit them, and return
    /// them for the host adapter. Outside Visualizing this is a no-op.
    pub fn tick(&mut self, elapsed: f32) -> Vec<MarkerMutation> {
        if self.phase != SessionPhase::Visualizing {
            return Vec::new();
        }
        let mutations = animate::step(elapsed, &self.categories);
        animate::apply(&mut self.categories, &mutations);
        mutations
    }

    /// Drop everything and return to AwaitingText.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.categories.clear();
        self.phase = SessionPhase::AwaitingText;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
