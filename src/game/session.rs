//! The game session
//!
//! One object owns everything a game mutates: the active catalog, the round,
//! the scoreboard and the settings. Every change goes through its methods, and
//! an explicit state machine rules out overlapping operations.

use super::error::GameError;
use super::generator::RoundGenerator;
use super::round::Round;
use super::scoreboard::Scoreboard;
use crate::catalog::{CatalogProvider, ThemeLoader, WordCatalog};
use crate::core::{Theme, matched_letter_count, normalize_for_match, rule_text};
use crate::lookup::{DefinitionLookup, MeaningResolver};
use crate::storage::{CacheStore, Preferences, PreferencesStore};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No playable round
    Idle,
    /// Theme data is being loaded and a round generated
    Loading,
    /// A round is in play (possibly already revealed)
    RoundActive,
    /// Solution meanings are being resolved
    Revealing,
}

impl SessionState {
    /// Whether `self -> to` is a legal move
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Idle | Self::RoundActive, Self::Loading)
                | (Self::Loading, Self::Idle | Self::RoundActive)
                | (Self::RoundActive, Self::Revealing)
                | (Self::Revealing, Self::RoundActive)
        )
    }
}

/// A single player's game
pub struct GameSession {
    pub(super) state: SessionState,
    pub(super) settings: Preferences,
    pub(super) loader: ThemeLoader,
    pub(super) catalog: WordCatalog,
    pub(super) round: Option<Round>,
    pub(super) scoreboard: Scoreboard,
    pub(super) meanings: MeaningResolver,
    pub(super) lookup: Arc<dyn DefinitionLookup>,
    pub(super) cache: Arc<dyn CacheStore>,
    preferences: Box<dyn PreferencesStore>,
    generator: RoundGenerator,
    rng: StdRng,
}

impl GameSession {
    /// Create an idle session; settings come from `preferences`
    #[must_use]
    pub fn new(
        provider: Box<dyn CatalogProvider>,
        lookup: Arc<dyn DefinitionLookup>,
        cache: Arc<dyn CacheStore>,
        preferences: Box<dyn PreferencesStore>,
    ) -> Self {
        let settings = preferences.load();
        Self {
            state: SessionState::Idle,
            settings,
            loader: ThemeLoader::new(provider, cache.clone()),
            catalog: WordCatalog::new(),
            round: None,
            scoreboard: Scoreboard::new(),
            meanings: MeaningResolver::new(lookup.clone(), cache.clone()),
            lookup,
            cache,
            preferences,
            generator: RoundGenerator::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a seeded RNG for reproducible rounds
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_generator(mut self, generator: RoundGenerator) -> Self {
        self.generator = generator;
        self
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn settings(&self) -> Preferences {
        self.settings
    }

    #[inline]
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.settings.theme
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[must_use]
    pub const fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// Rules for the current settings
    #[must_use]
    pub fn rules(&self) -> String {
        rule_text(
            self.settings.theme,
            self.settings.letter_count,
            self.settings.difficulty,
        )
    }

    pub(super) fn transition(&mut self, to: SessionState) -> Result<(), GameError> {
        if !self.state.can_transition_to(to) {
            return Err(GameError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Start a fresh round with `settings`
    ///
    /// Saves the settings, clears the previous round and scoreboard, loads the
    /// theme and generates a round. On failure the session is left idle with
    /// no round.
    ///
    /// # Errors
    /// - `GameError::InvalidTransition` while another operation is running
    /// - `GameError::CatalogLoad` if the theme data cannot be loaded
    /// - `GameError::NoEligibleWords` / `GameError::RoundGeneration` if no
    ///   playable round could be drawn
    pub fn start_new_game(&mut self, settings: Preferences) -> Result<(), GameError> {
        self.transition(SessionState::Loading)?;

        self.settings = settings;
        self.preferences.save(&settings);
        self.round = None;
        self.scoreboard.reset();
        self.meanings.clear();

        let theme = settings.theme;
        match self.loader.load(theme) {
            Ok(entries) => self.catalog.set_active_entries(entries),
            Err(source) => {
                warn!("Loading {theme} failed: {source}");
                self.catalog = WordCatalog::new();
                self.state = SessionState::Idle;
                return Err(GameError::CatalogLoad { theme, source });
            }
        }

        match self.generator.generate(
            &self.catalog,
            theme,
            settings.letter_count,
            settings.difficulty,
            &mut self.rng,
        ) {
            Ok(round) => {
                info!(
                    "New {theme} round {} with {} solution(s)",
                    round.letters_display(),
                    round.solution_count()
                );
                self.round = Some(round);
                self.transition(SessionState::RoundActive)
            }
            Err(e) => {
                self.state = SessionState::Idle;
                Err(e)
            }
        }
    }

    /// Start over with the current settings
    ///
    /// # Errors
    /// Same as [`start_new_game`](Self::start_new_game).
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.start_new_game(self.settings)
    }

    /// How many target letters `input` matches in order, for live feedback
    #[must_use]
    pub fn matched_letter_count(&self, input: &str) -> usize {
        self.round.as_ref().map_or(0, |round| {
            matched_letter_count(&normalize_for_match(input), round.target_letters())
        })
    }

    /// Whether `input` may be submitted right now
    #[must_use]
    pub fn can_submit(&self, input: &str) -> bool {
        self.state == SessionState::RoundActive
            && self.round.as_ref().is_some_and(|round| {
                !round.is_revealed()
                    && self.matched_letter_count(input) == round.target_letters().len()
            })
    }
}
