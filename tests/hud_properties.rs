//! End-to-end behaviour of the HUD core against a scripted world.

use xibalba_hud::config::HudConfig;
use xibalba_hud::error::AttackError;
use xibalba_hud::gui::ActionId;
use xibalba_hud::hud::Hud;
use xibalba_hud::hud::panels::player_slot;
use xibalba_hud::input::{InputEvent, KeyChord};
use xibalba_hud::sim::{
    AbilitySlot, AttackRequest, AttackTarget, DisplayMode, FocusedAction, Position, ScriptedEntity,
    ScriptedSimulation,
};
use xibalba_hud::ui::{FADED, OPAQUE, Tone};

fn hud() -> Hud<ScriptedSimulation> {
    Hud::new(ScriptedSimulation::new("Ixchel"), HudConfig::default())
}

fn digit(d: u8) -> InputEvent {
    InputEvent::Key(KeyChord::Digit(d))
}

#[test]
fn test_repeated_frames_do_not_duplicate_rows() {
    let mut hud = hud();
    hud.simulation_mut().push_log("You descend into the cenote.");

    hud.tick(&[]);
    let player_rows = hud.panels().player.rows().to_vec();
    let log_rows = hud.panels().log.rows().to_vec();
    let created = hud.panels().player.rows_created();

    hud.tick(&[]);
    assert_eq!(hud.panels().player.rows(), player_rows.as_slice());
    assert_eq!(hud.panels().log.rows(), log_rows.as_slice());
    assert_eq!(hud.panels().player.rows_created(), created);
    assert_eq!(hud.panels().player.len(), 5);
}

#[test]
fn test_log_rows_only_grow_and_stay_capped() {
    let mut hud = hud();
    let cap = hud.config().log_rows;
    let mut previous = 0;

    for tick in 1..=25 {
        hud.simulation_mut().push_log(format!("Message {tick}"));
        hud.tick(&[]);

        let rows = hud.panels().log.len();
        assert!(rows >= previous, "log shrank at tick {tick}");
        assert!(rows <= tick && rows <= cap);
        previous = rows;
    }

    let log = &hud.panels().log;
    assert_eq!(log.text(0), Some("Message 25".to_string()));
    assert_eq!(log.row(0).map(|row| row.opacity), Some(OPAQUE));
    assert_eq!(log.row(1).map(|row| row.opacity), Some(FADED));
}

#[test]
fn test_focused_menu_exists_only_while_focused() {
    let mut hud = hud();
    let bat = hud
        .simulation_mut()
        .spawn(ScriptedEntity::enemy("Cave Bat", Position::new(1, 0)));

    hud.tick(&[]);
    assert!(hud.focused_menu().is_none());

    hud.simulation_mut().focus_on(bat, FocusedAction::Melee);
    hud.tick(&[]);
    let menu = hud.focused_menu().unwrap();
    assert_eq!(menu.len(), 6);
    assert_eq!(
        hud.registry().get(ActionId::BodyPart(2)).unwrap().label.plain(),
        "Left Arm"
    );
    assert_eq!(
        hud.panels().player.text(player_slot::NAME),
        Some("Ixchel [FOCUSED]".to_string())
    );

    hud.simulation_mut().mode = DisplayMode::Playing;
    hud.tick(&[]);
    assert!(hud.focused_menu().is_none());
    assert!(!hud.registry().contains(ActionId::BodyPart(0)));

    // Leaving again is a no-op
    hud.tick(&[]);
    assert!(hud.focused_menu().is_none());
}

#[test]
fn test_ability_cooldown_gating() {
    let mut sim = ScriptedSimulation::new("Ixchel");
    sim.abilities = vec![
        AbilitySlot {
            name: "Smoke Mirror".to_string(),
            counter: 3,
            recharge: 5,
        },
        AbilitySlot {
            name: "Jaguar Dash".to_string(),
            counter: 5,
            recharge: 5,
        },
    ];
    let mut hud = Hud::new(sim, HudConfig::default());
    hud.tick(&[]);

    let cooling = hud.registry().get(ActionId::Ability(0)).unwrap();
    assert!(!cooling.enabled);
    assert!(cooling.label.plain().ends_with("3/5"));

    let ready = hud.registry().get(ActionId::Ability(1)).unwrap();
    assert!(ready.enabled);
    assert_eq!(ready.label.plain(), "Jaguar Dash");

    hud.tick(&[digit(1), digit(2)]);
    assert_eq!(hud.simulation().abilities_used(), &[1]);
}

#[test]
fn test_health_bar_boundary() {
    let mut hud = hud();
    hud.simulation_mut().player.max_health = 20;

    hud.simulation_mut().player.health = 19;
    hud.tick(&[]);
    let row = &hud.panels().player.row(player_slot::HEALTH).unwrap().text;
    assert_eq!(row.plain(), "HP [xx] 19/20");
    assert_eq!(row.tone_of("19"), Some(Tone::Normal));

    hud.simulation_mut().player.health = 9;
    hud.tick(&[]);
    let row = &hud.panels().player.row(player_slot::HEALTH).unwrap().text;
    assert_eq!(row.plain(), "HP [xx] 9/20");
    assert_eq!(row.tone_of("9"), Some(Tone::Warning));
}

#[test]
fn test_striking_head_commits_one_attack() {
    let mut hud = hud();
    let bat = hud
        .simulation_mut()
        .spawn(ScriptedEntity::enemy("Cave Bat", Position::new(1, 0)));
    hud.simulation_mut().focus_on(bat, FocusedAction::Melee);
    hud.tick(&[]);

    hud.tick(&[InputEvent::Click(ActionId::BodyPart(0)), digit(2)]);

    let sim = hud.simulation();
    assert_eq!(
        sim.attack_requests(),
        &[AttackRequest {
            kind: FocusedAction::Melee,
            target: AttackTarget::Entity(bat),
            body_part: "head".to_string(),
            player_initiated: true,
        }]
    );
    assert_eq!(sim.mode, DisplayMode::Playing);
    assert!(sim.turn_requested());
    assert!(hud.focused_menu().is_none());
}

#[test]
fn test_strike_on_vanished_target_still_costs_a_turn() {
    let mut hud = hud();
    let bat = hud
        .simulation_mut()
        .spawn(ScriptedEntity::enemy("Cave Bat", Position::new(1, 0)));
    hud.simulation_mut().focus_on(bat, FocusedAction::Melee);
    hud.tick(&[]);

    hud.simulation_mut().despawn(bat);
    hud.simulation_mut().attack_failure = Some(AttackError::TargetGone);
    hud.tick(&[digit(1)]);

    let sim = hud.simulation();
    assert_eq!(sim.attack_requests().len(), 1);
    assert_eq!(sim.attack_requests()[0].body_part, "head");
    assert_eq!(sim.mode, DisplayMode::Playing);
    assert!(sim.turn_requested());
}

#[test]
fn test_summary_builds_once_across_dead_frames() {
    let mut hud = hud();
    hud.simulation_mut().player.stats.total_kills = 7;
    hud.simulation_mut().mode = DisplayMode::Dead;

    for _ in 0..100 {
        hud.tick(&[]);
    }

    assert_eq!(hud.summary().builds(), 1);
    assert_eq!(hud.frames(), 100);
    let last = hud.summary().lines().last().unwrap().plain();
    assert_eq!(last, "You killed 7 enemies");
}
