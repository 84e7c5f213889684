use async_trait::async_trait;

use wheel_of_meals_rs::analysis::NutritionAdvisor;
use wheel_of_meals_rs::catalog::builtin_menu;
use wheel_of_meals_rs::game::{GameSession, GameState};
use wheel_of_meals_rs::models::{CategoryFilter, HealthAnalysis, MealCategory};

/// Advisor answering every dish with the same fixed rating.
struct FixedAdvisor(HealthAnalysis);

#[async_trait]
impl NutritionAdvisor for FixedAdvisor {
    async fn analyze(&self, _menu_name: &str) -> Option<HealthAnalysis> {
        Some(self.0.clone())
    }
}

/// Advisor simulating a service that succeeds but says nothing.
struct SilentAdvisor;

#[async_trait]
impl NutritionAdvisor for SilentAdvisor {
    async fn analyze(&self, _menu_name: &str) -> Option<HealthAnalysis> {
        None
    }
}

fn fixed_session() -> GameSession<FixedAdvisor> {
    GameSession::with_seed(
        builtin_menu(),
        FixedAdvisor(HealthAnalysis::new("B", "Eat in moderation")),
        42,
    )
}

#[tokio::test(start_paused = true)]
async fn test_full_round_through_all_states() {
    let mut session = fixed_session();
    assert_eq!(session.state(), GameState::Idle);
    assert!(session.winning_item().is_none());

    assert!(session.start_spin());
    assert_eq!(session.state(), GameState::Spinning);

    // The winner surfaces after the animation, before the analysis.
    let winner = session.await_winner().await.cloned().unwrap();
    assert_eq!(session.state(), GameState::Analyzing);
    assert_eq!(session.winning_item().unwrap().id, winner.id);
    assert!(session.current_analysis().is_none());

    assert!(session.run_analysis().await);
    assert_eq!(session.state(), GameState::Result);
    assert_eq!(
        session.current_analysis().unwrap(),
        &HealthAnalysis::new("B", "Eat in moderation")
    );

    assert!(session.dismiss());
    assert_eq!(session.state(), GameState::Idle);
    assert!(session.winning_item().is_none());
    assert!(session.current_analysis().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_spin_request_rejected_outside_idle() {
    let mut session = fixed_session();

    assert!(session.start_spin());
    assert!(!session.start_spin());
    assert_eq!(session.state(), GameState::Spinning);

    session.await_winner().await;
    assert!(!session.start_spin());
    assert_eq!(session.state(), GameState::Analyzing);
    let winner_id = session.winning_item().unwrap().id;

    session.run_analysis().await;
    assert!(!session.start_spin());
    assert_eq!(session.state(), GameState::Result);
    // The rejected requests changed nothing.
    assert_eq!(session.winning_item().unwrap().id, winner_id);
    assert!(session.current_analysis().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_filter_changes_rejected_mid_round() {
    let mut session = fixed_session();
    let before: Vec<u32> = session.segments().iter().map(|s| s.item.id).collect();

    session.start_spin();
    assert!(!session.set_filter(CategoryFilter::Only(MealCategory::Snack)));
    let after: Vec<u32> = session.segments().iter().map(|s| s.item.id).collect();
    assert_eq!(before, after);

    session.resolve_spin().await;
    session.dismiss();
    assert!(session.set_filter(CategoryFilter::Only(MealCategory::Snack)));
    assert!(session
        .segments()
        .iter()
        .all(|s| s.item.category == MealCategory::Snack));
}

#[tokio::test(start_paused = true)]
async fn test_subset_is_stable_across_rounds() {
    let mut session = fixed_session();
    let displayed: Vec<u32> = session.segments().iter().map(|s| s.item.id).collect();

    for _ in 0..10 {
        assert!(session.start_spin());
        assert!(session.resolve_spin().await);
        let winner_id = session.winning_item().unwrap().id;
        assert!(displayed.contains(&winner_id));

        let current: Vec<u32> = session.segments().iter().map(|s| s.item.id).collect();
        assert_eq!(displayed, current);
        session.dismiss();
    }
}

#[tokio::test(start_paused = true)]
async fn test_empty_analysis_reaches_result_without_rating() {
    let mut session = GameSession::with_seed(builtin_menu(), SilentAdvisor, 7);

    session.start_spin();
    assert!(session.resolve_spin().await);
    assert_eq!(session.state(), GameState::Result);
    assert!(session.winning_item().is_some());
    // Empty response: the round completes with no analysis value.
    assert!(session.current_analysis().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_filter_on_empty_result_blocks_spin() {
    // A custom catalog with no beverages at all.
    let catalog: Vec<_> = builtin_menu()
        .into_iter()
        .filter(|i| i.category != MealCategory::Beverage)
        .collect();
    let mut session = GameSession::with_seed(
        catalog,
        FixedAdvisor(HealthAnalysis::new("A", "ดีมาก")),
        1,
    );

    assert!(session.set_filter(CategoryFilter::Only(MealCategory::Beverage)));
    assert!(session.segments().is_empty());
    assert!(!session.start_spin());
    assert_eq!(session.state(), GameState::Idle);
}
