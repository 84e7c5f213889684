use crate::models::{HealthAnalysis, MenuItem};

/// The four phases of one play round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Idle,
    Spinning,
    Analyzing,
    Result,
}

/// Synchronous transition core of the game, independent of any rendering
/// or scheduling layer.
///
/// Transitions out of order are silent no-ops, not errors: every method
/// returns whether it actually transitioned, and rejected calls leave the
/// state, winning item and analysis untouched.
#[derive(Debug, Default)]
pub struct GameMachine {
    state: GameState,
    winning_item: Option<MenuItem>,
    analysis: Option<HealthAnalysis>,
}

impl GameMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winning_item(&self) -> Option<&MenuItem> {
        self.winning_item.as_ref()
    }

    /// Analysis recorded for the current round.
    ///
    /// `None` both before the analysis resolves and when the service
    /// returned an empty payload; the state distinguishes the two
    /// (`Result` means the analysis has resolved).
    pub fn current_analysis(&self) -> Option<&HealthAnalysis> {
        self.analysis.as_ref()
    }

    /// Filter changes are accepted only while idle.
    pub fn can_change_filter(&self) -> bool {
        self.state == GameState::Idle
    }

    /// Idle → Spinning, clearing any previous round's results.
    pub fn begin_spin(&mut self) -> bool {
        if self.state != GameState::Idle {
            return false;
        }
        self.winning_item = None;
        self.analysis = None;
        self.state = GameState::Spinning;
        true
    }

    /// Spinning → Analyzing, recording the winner.
    ///
    /// The winner is visible to the presentation layer immediately, while
    /// the analysis is still pending.
    pub fn record_winner(&mut self, item: MenuItem) -> bool {
        if self.state != GameState::Spinning {
            return false;
        }
        self.winning_item = Some(item);
        self.state = GameState::Analyzing;
        true
    }

    /// Analyzing → Result, recording whatever arrived (possibly nothing).
    pub fn record_analysis(&mut self, analysis: Option<HealthAnalysis>) -> bool {
        if self.state != GameState::Analyzing {
            return false;
        }
        self.analysis = analysis;
        self.state = GameState::Result;
        true
    }

    /// Result → Idle, clearing the round.
    pub fn dismiss(&mut self) -> bool {
        if self.state != GameState::Result {
            return false;
        }
        self.winning_item = None;
        self.analysis = None;
        self.state = GameState::Idle;
        true
    }
}
