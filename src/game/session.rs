use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::NutritionAdvisor;
use crate::game::machine::{GameMachine, GameState};
use crate::models::{CategoryFilter, HealthAnalysis, MenuItem};
use crate::wheel::{SpinHandle, Wheel, WheelSegment, SPIN_DURATION};

/// One play session: the state machine, the wheel and the advisor wired
/// together behind the presentation boundary.
///
/// All mutable state lives here; the two suspension points (spin timer,
/// analysis call) are single-fire and owned by the current round.
pub struct GameSession<A: NutritionAdvisor> {
    machine: GameMachine,
    wheel: Wheel,
    catalog: Vec<MenuItem>,
    filter: CategoryFilter,
    advisor: A,
    rng: StdRng,
    pending: Option<(u64, SpinHandle)>,
    spin_serial: u64,
}

impl<A: NutritionAdvisor> GameSession<A> {
    pub fn new(catalog: Vec<MenuItem>, advisor: A) -> Self {
        Self::with_rng(catalog, advisor, StdRng::from_entropy())
    }

    /// Deterministic session for tests and `--seed`.
    pub fn with_seed(catalog: Vec<MenuItem>, advisor: A, seed: u64) -> Self {
        Self::with_rng(catalog, advisor, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Vec<MenuItem>, advisor: A, mut rng: StdRng) -> Self {
        let mut wheel = Wheel::new();
        wheel.reload(&mut rng, &catalog);

        Self {
            machine: GameMachine::new(),
            wheel,
            catalog,
            filter: CategoryFilter::All,
            advisor,
            rng,
            pending: None,
            spin_serial: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.machine.state()
    }

    pub fn winning_item(&self) -> Option<&MenuItem> {
        self.machine.winning_item()
    }

    pub fn current_analysis(&self) -> Option<&HealthAnalysis> {
        self.machine.current_analysis()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn segments(&self) -> &[WheelSegment] {
        self.wheel.segments()
    }

    /// Change the category filter and resample the wheel.
    ///
    /// Accepted only while idle; otherwise a silent no-op, so the display
    /// subset can never change between spin start and resolution.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> bool {
        if !self.machine.can_change_filter() {
            return false;
        }
        self.filter = filter;
        let items = crate::catalog::filter_by_category(&self.catalog, filter);
        self.wheel.reload(&mut self.rng, &items);
        true
    }

    /// Request a spin.
    ///
    /// Accepted only while idle and with a non-empty wheel. Computes the
    /// outcome immediately but defers the winner behind the animation
    /// timer; any stale pending timer is cancelled first.
    pub fn start_spin(&mut self) -> bool {
        if self.wheel.is_empty() || !self.machine.begin_spin() {
            return false;
        }

        // Guarded against above, but a stale handle must never fire.
        if let Some((_, stale)) = self.pending.take() {
            stale.cancel();
        }

        let Some(outcome) = self.wheel.spin(&mut self.rng) else {
            return false;
        };

        self.spin_serial += 1;
        self.pending = Some((self.spin_serial, SpinHandle::start(outcome, SPIN_DURATION)));
        true
    }

    /// Wait out the spin animation and record the winner.
    ///
    /// Returns the winner once the wheel settles; the analysis is still
    /// pending at that point, so callers can surface the item right away.
    pub async fn await_winner(&mut self) -> Option<&MenuItem> {
        let (serial, handle) = self.pending.take()?;
        let outcome = handle.resolve().await?;

        // A superseded spin must not touch the current round.
        if serial != self.spin_serial {
            return None;
        }

        self.machine.record_winner(outcome.winning_item);
        self.machine.winning_item()
    }

    /// Ask the advisor about the recorded winner and store the answer.
    pub async fn run_analysis(&mut self) -> bool {
        if self.machine.state() != GameState::Analyzing {
            return false;
        }
        let Some(name) = self.machine.winning_item().map(|i| i.name.clone()) else {
            return false;
        };

        let serial = self.spin_serial;
        let analysis = self.advisor.analyze(&name).await;

        // Drop a slow answer that outlived its spin.
        if serial != self.spin_serial || self.machine.state() != GameState::Analyzing {
            return false;
        }
        self.machine.record_analysis(analysis)
    }

    /// Drive one spin to completion: timer, winner, analysis.
    pub async fn resolve_spin(&mut self) -> bool {
        if self.await_winner().await.is_none() {
            return false;
        }
        self.run_analysis().await
    }

    /// Dismiss the result card and return to idle.
    pub fn dismiss(&mut self) -> bool {
        self.machine.dismiss()
    }
}
