//! Scenario tests driving full decision cycles through a mock environment.

use gridplan_agent::{AgentError, DecisionAdapter, PlannerConfig};
use gridplan_core::{Action, Cell};
use gridplan_test_utils::MockEnvironment;

fn adapter(env: &MockEnvironment) -> DecisionAdapter {
    DecisionAdapter::new(env, PlannerConfig::default()).unwrap()
}

#[test]
fn open_grid_scenario_moves_toward_food_and_away_from_hazard() {
    // 5x5 open grid, consumable at (4,4), hazard at (0,0), agent at
    // (2,2), default constants (background -1, consumable +10, hazard
    // -100, hazard-adjacent -50, discount 0.5, 20 eval sweeps).
    let mut env = MockEnvironment::new(5, 5, Cell::new(2, 2));
    env.set_consumables(vec![Cell::new(4, 4)]);
    env.set_hazards(vec![Cell::new(0, 0)]);

    let adapter = adapter(&env);
    let decision = adapter.decide_with_stats(&env).unwrap();
    assert!(decision.stats.converged);

    // Both remaining candidates step toward the food and increase the
    // distance to the hazard; South and West would do neither.
    assert!(
        matches!(decision.action, Action::North | Action::East),
        "unexpected action {}",
        decision.action
    );

    // Identical inputs must reproduce the identical action.
    for _ in 0..3 {
        assert_eq!(adapter.decide(&env).unwrap(), decision.action);
    }
}

#[test]
fn corridor_agent_walks_to_the_far_end() {
    let mut env = MockEnvironment::new(5, 1, Cell::new(0, 0));
    env.set_consumables(vec![Cell::new(4, 0)]);

    let adapter = adapter(&env);
    assert_eq!(adapter.decide(&env).unwrap(), Action::East);

    // Walk the corridor: the policy keeps pointing East from every cell.
    for x in 1..4 {
        env.set_position(Cell::new(x, 0));
        assert_eq!(adapter.decide(&env).unwrap(), Action::East);
    }
}

#[test]
fn reward_changes_between_cycles_change_the_answer() {
    // Food east of the agent first, then west: no state may leak from
    // the first cycle into the second.
    let mut env = MockEnvironment::new(7, 1, Cell::new(3, 0));
    env.set_consumables(vec![Cell::new(6, 0)]);
    let adapter = adapter(&env);
    assert_eq!(adapter.decide(&env).unwrap(), Action::East);

    env.set_consumables(vec![Cell::new(0, 0)]);
    assert_eq!(adapter.decide(&env).unwrap(), Action::West);
}

#[test]
fn hazard_next_to_agent_repels_it() {
    let mut env = MockEnvironment::new(5, 1, Cell::new(2, 0));
    env.set_consumables(vec![Cell::new(4, 0)]);
    env.set_hazards(vec![Cell::new(1, 0)]);

    let adapter = adapter(&env);
    assert_eq!(adapter.decide(&env).unwrap(), Action::East);
}

#[test]
fn bonus_outweighs_consumable_at_equal_distance() {
    let mut env = MockEnvironment::new(7, 1, Cell::new(3, 0));
    env.set_consumables(vec![Cell::new(0, 0)]);
    env.set_bonuses(vec![Cell::new(6, 0)]);

    let adapter = adapter(&env);
    assert_eq!(adapter.decide(&env).unwrap(), Action::East);
}

#[test]
fn desynchronized_hazard_is_surfaced() {
    let mut env = MockEnvironment::new(3, 3, Cell::new(1, 1));
    let adapter = adapter(&env);

    env.set_hazards(vec![Cell::new(8, 8)]);
    assert!(matches!(
        adapter.decide(&env),
        Err(AgentError::Model(_))
    ));
}

#[test]
fn position_off_the_grid_is_surfaced() {
    let mut env = MockEnvironment::new(3, 3, Cell::new(1, 1));
    let adapter = adapter(&env);

    env.set_position(Cell::new(5, 5));
    assert!(matches!(
        adapter.decide(&env),
        Err(AgentError::PositionNotOpen { .. })
    ));
}

#[test]
fn illegal_policy_choice_falls_back_deterministically() {
    let mut env = MockEnvironment::new(5, 1, Cell::new(0, 0));
    env.set_consumables(vec![Cell::new(4, 0)]);

    let adapter = adapter(&env);
    assert_eq!(adapter.decide(&env).unwrap(), Action::East);

    // Host refuses East this instant: the first remaining legal action
    // in fixed order wins.
    env.set_legal_actions(vec![Action::West, Action::North]);
    assert_eq!(adapter.decide(&env).unwrap(), Action::North);
}
