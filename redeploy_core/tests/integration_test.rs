//! Integration test: Roster -> Team scenarios -> Redeploy table -> Awakening
//!
//! Walks the same path a renderer does: select a pair from the roster,
//! compute the scenarios, then feed a redeployed unit into the gauge.

use redeploy_core::prelude::*;
use redeploy_core::redeploy::is_cost_exhausted;
use redeploy_core::scenario::ContinuationStrategy;

#[test]
fn test_documented_examples() {
    // Ideal: A (3.0, 3000) falls before B (1.5, 2000)
    let a = Character::new("A", 3000, Cost::Three);
    let b = Character::new("B", 2000, Cost::OneFive);
    let scenarios = calculate_team_hp_scenarios(Some(&a), Some(&b)).unwrap();
    let ideal = &scenarios.ideal_scenario;
    assert_eq!(ideal.sequence[1].char_name, "A");
    assert_eq!(ideal.sequence[1].hp_gained, 3000);
    assert_eq!(ideal.sequence[1].remaining_cost_label(), "3.0");
    assert_eq!(ideal.sequence[0].hp_gained + ideal.sequence[1].hp_gained, 8000);

    // Single redeploy at 1.0 of 2.0
    let unit = Character::new("U", 2000, Cost::Two);
    let single = calculate_single_redeploy_hp(&unit, 1.0);
    assert_eq!(single.calculated_hp, 1000);
    assert!((single.actual_cost_consumed - 1.0).abs() < f64::EPSILON);

    // Awakening with no bonuses
    let mut inputs = AwakeningInputs::new(Cost::Two, 2000.0);
    inputs.damage_taken_input_value = 1000.0;
    let result = calculate_awakening_gauge(&inputs);
    assert_eq!(result.breakdown.as_ref().unwrap().damage_gauge, 29);
    assert_eq!(result.final_predicted_gauge, 29);
    assert!(!result.is_threshold_met);

    // Awakening with own-down at cost 3.0
    let mut inputs = AwakeningInputs::new(Cost::Three, 2000.0);
    inputs.consider_own_down = true;
    let result = calculate_awakening_gauge(&inputs);
    assert_eq!(result.final_predicted_gauge, 22);
    assert!(!result.is_threshold_met);
}

#[test]
fn test_roster_pair_flow() {
    let roster = default_roster();
    let player = roster.find("Nu Gundam").expect("Nu Gundam in roster");
    let partner = roster.find("Zaku II").expect("Zaku II in roster");

    let scenarios = calculate_team_hp_scenarios(Some(player), Some(partner)).unwrap();

    for scenario in scenarios.iter() {
        // Every log opens with both units' HP (or the focus alone for lowest)
        assert_eq!(scenario.sequence[0].turn, 0);
        assert_eq!(scenario.sequence[0].notes, vec![RedeployNote::StartingHp]);

        // Logged HP adds up to the total
        let logged: u32 = scenario.sequence.iter().map(|s| s.hp_gained).sum();
        assert_eq!(logged, scenario.total_hp, "{}", scenario.name);

        // Turns are consecutive and the pool never grows
        for (i, step) in scenario.sequence.iter().enumerate() {
            assert_eq!(step.turn as usize, i);
        }
        let pools: Vec<f64> = scenario.sequence.iter().map(|s| s.remaining_cost).collect();
        assert!(pools.windows(2).all(|w| w[1] <= w[0]), "{}", scenario.name);
        assert!(pools.iter().all(|p| (0.0..=MAX_TEAM_COST).contains(p)));

        // Every scenario plays out until the team is out of cost
        let last = scenario.sequence.last().unwrap();
        assert!(is_cost_exhausted(last.remaining_cost), "{}", scenario.name);
    }

    // 3.0 + 1.5: Nu falls first in ideal, Zaku is the bomb
    assert_eq!(scenarios.ideal_scenario.focus, "Nu Gundam");
    assert_eq!(scenarios.compromise_scenario.focus, "Zaku II");
    assert_eq!(scenarios.bomb_scenario.focus, "Zaku II");

    // Zaku falling three times at full HP beats any ordering involving Nu
    let (low, high) = scenarios.hp_range();
    assert_eq!(high, scenarios.bomb_scenario.total_hp);
    assert_eq!(low, scenarios.lowest_scenario.total_hp);
    assert_eq!(scenarios.bomb_scenario.total_hp, 760 + 440 + 3 * 440);
}

#[test]
fn test_redeploy_table_and_awakening() {
    let roster = default_roster();
    let zeta = roster.find("Zeta Gundam").unwrap();

    let rows = roster.checkpoints.rows_for(zeta);
    let remaining: Vec<f64> = rows.iter().map(|r| r.remaining_cost).collect();
    assert_eq!(remaining, vec![0.5, 1.0, 1.5, 2.0]);
    // 680 * 1.0 / 2.5 = 272
    assert_eq!(rows[1].hp, 272);

    // Zeta comes back at 272 HP and takes all of it as damage
    let mut inputs = AwakeningInputs::for_redeployed(zeta, rows[1].hp);
    inputs.damage_taken_input_value = 272.0;
    inputs.consider_own_down = true;
    let result = calculate_awakening_gauge(&inputs);

    // 59 (100% damage) + 22 (own down at 2.5)
    assert_eq!(result.final_predicted_gauge, 81);
    assert!(result.is_threshold_met);
}

#[test]
fn test_compromise_continuation_on_roster() {
    let roster = default_roster();
    let gundam = roster.find("Gundam").unwrap();
    let gouf = roster.find("Gouf Custom").unwrap();

    let scenarios = calculate_team_hp_scenarios(Some(gundam), Some(gouf)).unwrap();

    // Equal costs: the higher HP Gundam falls first in ideal, Gouf in compromise
    assert_eq!(scenarios.ideal_scenario.focus, "Gundam");
    assert_eq!(scenarios.compromise_scenario.focus, "Gouf Custom");

    // After 6.0 -> 4.0 -> 2.0 no continuation can add HP; the first candidate stays
    assert_eq!(
        scenarios.ideal_scenario.continuation,
        Some(ContinuationStrategy::Alternating)
    );
    assert_eq!(scenarios.ideal_scenario.total_hp, 2 * (600 + 580));
}

#[test]
fn test_scenarios_serialize_for_renderer() {
    let roster = default_roster();
    let a = roster.find("Sazabi").unwrap();
    let b = roster.find("Gundam Exia").unwrap();

    let scenarios = calculate_team_hp_scenarios(Some(a), Some(b)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&scenarios.to_json().unwrap()).unwrap();

    let steps = json["ideal_scenario"]["sequence"].as_array().unwrap();
    assert_eq!(steps[0]["remaining_cost"], "6.0");
    assert_eq!(steps[1]["char_type"], "self");
    assert_eq!(steps[1]["char_name"], "Sazabi");
    assert_eq!(steps[2]["char_type"], "partner");
}
