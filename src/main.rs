//! HUD demo
//!
//! Opens an SDL2 window and drives the HUD against a small scripted world:
//! a single cave bat that keeps attacking until the player falls.
//!
//! Controls come from the HUD itself: `Z` rests, `1`-`9` use abilities or,
//! while focusing, strike a body part. Every third turn the player focuses
//! on the bat.
//!
//! Set `RUST_LOG=xibalba_hud=debug` for per-event logging.

use std::time::{Duration, Instant};

use xibalba_hud::config::HudConfig;
use xibalba_hud::hud::{Hud, HudRequest};
use xibalba_hud::input::InputSystem;
use xibalba_hud::render::HudRenderer;
use xibalba_hud::sim::{
    AbilitySlot, DisplayMode, EntityRef, FocusedAction, Position, ScriptedEntity, ScriptedSimulation,
};
use xibalba_hud::text::to_color;
use xibalba_hud::ui::OPAQUE;

const TEXT_SCALE: u32 = 1;
const BAT_DAMAGE: i32 = 3;
const STRIKE_DAMAGE: i32 = 4;

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Fresh demo world; returns it with the bat's handle
fn new_world() -> (ScriptedSimulation, EntityRef) {
    let mut sim = ScriptedSimulation::new("Ixchel");
    sim.abilities = vec![
        AbilitySlot {
            name: "Jaguar Dash".to_string(),
            counter: 5,
            recharge: 5,
        },
        AbilitySlot {
            name: "Smoke Mirror".to_string(),
            counter: 0,
            recharge: 8,
        },
    ];
    sim.set_cell(Position::new(0, 0), "a damp limestone floor", false);
    sim.set_cell(Position::new(1, 0), "a damp limestone floor", false);
    sim.player.target = Some(Position::new(1, 0));

    let bat = sim.spawn(ScriptedEntity::enemy("Cave Bat", Position::new(1, 0)));
    sim.push_log("You descend into the cenote.");
    (sim, bat)
}

/// Resolves one world turn after the HUD committed it
fn run_world_turn(sim: &mut ScriptedSimulation, bat: EntityRef, strikes_seen: &mut usize) {
    let strikes = sim.attack_requests().len();
    if strikes > *strikes_seen {
        *strikes_seen = strikes;
        if let Some(entity) = sim.entity_mut(bat) {
            entity.snapshot.health -= STRIKE_DAMAGE;
        }
        sim.player.stats.total_hits += 1;
        sim.player.stats.total_damage_done += STRIKE_DAMAGE.unsigned_abs();
        sim.player.last_hit_entity = Some(bat);
        sim.push_log(format!("You strike the Cave Bat for {STRIKE_DAMAGE} damage."));
    }

    let bat_alive = match sim.entity_mut(bat).map(|entity| entity.snapshot.health) {
        Some(health) if health <= 0 => {
            sim.despawn(bat);
            sim.player.last_hit_entity = None;
            sim.player.stats.total_kills += 1;
            sim.push_log("The Cave Bat falls silent.");
            false
        }
        Some(_) => {
            sim.player.health -= BAT_DAMAGE;
            sim.player.stats.total_damage_received += BAT_DAMAGE.unsigned_abs();
            sim.push_log(format!("The Cave Bat bites you for {BAT_DAMAGE} damage."));
            true
        }
        // Already slain on an earlier turn
        None => false,
    };

    if sim.player.health <= 0 {
        sim.player.health = 0;
        sim.mode = DisplayMode::Dead;
    } else if sim.turn % 3 == 0 && bat_alive {
        sim.focus_on(bat, FocusedAction::Melee);
    }
}

fn main() -> xibalba_hud::Result<()> {
    init_logging();

    let config = HudConfig::discover()?;
    let viewport = config.viewport;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Xibalba HUD", viewport.width, viewport.height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas
        .set_logical_size(viewport.width, viewport.height)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut input = InputSystem::new();
    let mut renderer = HudRenderer::new(TEXT_SCALE);

    let (sim, mut bat) = new_world();
    let mut hud = Hud::new(sim, config.clone());
    let mut strikes_seen = 0;

    let mut frames_this_second = 0;
    let mut second_started = Instant::now();

    'running: loop {
        let events = input.poll_events(&mut event_pump, |x, y| renderer.hit_test(x, y));
        if input.quit_requested() {
            break 'running;
        }

        for request in hud.tick(&events) {
            match request {
                HudRequest::OpenCharacterScreen => tracing::info!("character screen requested"),
                HudRequest::OpenPauseMenu => tracing::info!("pause menu requested"),
                HudRequest::ReturnToMainMenu => {
                    tracing::info!("starting a new run");
                    let (sim, fresh_bat) = new_world();
                    bat = fresh_bat;
                    strikes_seen = 0;
                    hud = Hud::new(sim, config.clone());
                }
                HudRequest::Quit => break 'running,
            }
        }

        if hud.simulation_mut().advance_turn() {
            run_world_turn(hud.simulation_mut(), bat, &mut strikes_seen);
        }

        canvas.set_draw_color(to_color(config.theme.backdrop, OPAQUE));
        canvas.clear();
        renderer.render(&mut canvas, &hud)?;
        canvas.present();

        frames_this_second += 1;
        if second_started.elapsed() >= Duration::from_secs(1) {
            hud.set_frame_rate(frames_this_second);
            frames_this_second = 0;
            second_started = Instant::now();
        }

        // Cap framerate to ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xibalba_hud::sim::Simulation;

    #[test]
    fn test_world_turn_records_damage() {
        let (mut sim, bat) = new_world();
        let mut strikes_seen = 0;
        sim.focus_on(bat, FocusedAction::Melee);
        xibalba_hud::hud::commit_focused_attack(&mut sim, "head");

        run_world_turn(&mut sim, bat, &mut strikes_seen);
        assert_eq!(sim.player.stats.total_damage_done, 4);
        assert_eq!(sim.player.stats.total_damage_received, 3);
        assert_eq!(sim.player.health, 37);
        assert_eq!(sim.player.last_hit_entity, Some(bat));
    }

    #[test]
    fn test_slain_bat_counts_one_kill() {
        let (mut sim, bat) = new_world();
        let mut strikes_seen = 0;
        if let Some(entity) = sim.entity_mut(bat) {
            entity.snapshot.health = 0;
        }

        for _ in 0..3 {
            run_world_turn(&mut sim, bat, &mut strikes_seen);
        }
        assert_eq!(sim.player.stats.total_kills, 1);
        assert_eq!(sim.player.health, 40);
        assert!(sim.tracked_entity_snapshot(bat).is_none());
    }
}
