//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::body::Kinematic;
use super::bullet::Bullet;
use super::menu::MenuOption;
use super::rock::{Rock, RockTier};
use super::ship::{Ship, Thrust, Turn};
use super::state::{Difficulty, GameEvent, GamePhase, GameState, Lives, Score};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    /// Held fire; rate limited by the fire interval
    pub fire: bool,
    /// Pause trigger (level, not edge)
    pub pause: bool,
    /// Menu: choose the selected option
    pub confirm: bool,
    pub cursor_up: bool,
    pub cursor_down: bool,
    /// An external controller owns the input; intents arrive through the same fields
    pub external_controller: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;
    expire_menu_debounce(state, dt);
    track_controller(state, input.external_controller);

    if state.phase.shows_menu() {
        update_menu(state, input);
    }
    if state.phase != GamePhase::InGame || state.exit_requested {
        return;
    }

    apply_controls(state, input);
    if state.phase != GamePhase::InGame {
        // Paused this tick; the field stays as it was
        return;
    }
    update_spawn_timer(state, dt);

    // Move everything one tick
    let field = state.field();
    state.ship.tick(field);
    for rock in &mut state.rocks {
        rock.tick(field);
    }
    for bullet in &mut state.bullets {
        bullet.tick(field);
    }

    // Kills are flagged in place; children wait in `spawned` until the pass is over
    let spawned = resolve_bullet_hits(state);
    resolve_ship_hit(state);

    state.rocks.retain(|r| !r.is_removed());
    state.bullets.retain(|b| !b.is_removed());
    state.rocks.extend(spawned);
    state.normalize_order();

    log::trace!(
        "tick {}: {} rocks, {} bullets, score {}",
        state.time_ticks,
        state.rocks.len(),
        state.bullets.len(),
        state.score.value()
    );
}

/// Reset everything for a fresh game and enter play
pub fn start_new_game(state: &mut GameState) {
    let field = state.field();
    state.rocks.clear();
    state.bullets.clear();
    state.score = Score::default();
    state.lives = Lives::new(state.settings.starting_lives);
    state.difficulty = Difficulty::new(&state.settings);
    state.fire_counter = 0;

    state.ship = Ship::new(field.center());
    state.ship.activate_invincibility();

    for _ in 0..state.settings.starting_rocks {
        let pos = state.random_point();
        let rock = new_rock(state, RockTier::Big, pos, true);
        state.rocks.push(rock);
    }

    state.set_phase(GamePhase::InGame);
    log::info!(
        "New game: {} rocks, {} lives",
        state.rocks.len(),
        state.lives.count()
    );
}

/// Close the debounce window once enough time has passed
fn expire_menu_debounce(state: &mut GameState, dt: f32) {
    if let Some(elapsed) = state.menu_debounce {
        let elapsed = elapsed + dt;
        state.menu_debounce = (elapsed < state.settings.menu_debounce_secs()).then_some(elapsed);
    }
}

fn track_controller(state: &mut GameState, active: bool) {
    if state.external_controller != active {
        state.external_controller = active;
        log::info!(
            "External controller {}",
            if active { "connected" } else { "released" }
        );
    }
}

fn update_menu(state: &mut GameState, input: &TickInput) {
    let window_open = state.menu_debounce.is_some();
    let Some(menu) = state.menu.as_mut() else {
        return;
    };

    if !window_open && (input.cursor_up || input.cursor_down) {
        if input.cursor_up {
            menu.cursor_up();
        } else {
            menu.cursor_down();
        }
        state.menu_debounce = Some(0.0);
    }

    if !input.confirm {
        return;
    }
    match menu.selected() {
        MenuOption::Start | MenuOption::Restart => start_new_game(state),
        MenuOption::Resume => state.set_phase(GamePhase::InGame),
        MenuOption::Exit => {
            state.exit_requested = true;
            state.events.push(GameEvent::ExitRequested);
            log::info!("Exit chosen from {:?} menu", state.phase);
        }
    }
}

fn apply_controls(state: &mut GameState, input: &TickInput) {
    if input.rotate_left {
        state.ship.rotate(Turn::Left);
    }
    if input.rotate_right {
        state.ship.rotate(Turn::Right);
    }

    let thrust = if input.thrust_forward {
        Thrust::Forward
    } else if input.thrust_backward {
        Thrust::Backward
    } else {
        Thrust::None
    };
    state.ship.apply_thrust(thrust);

    if input.fire {
        if state.fire_counter % state.settings.fire_interval_ticks == 0 {
            state.fire_counter = 0;
            fire_bullet(state);
        }
        state.fire_counter += 1;
    } else {
        state.fire_counter = 0;
    }

    if input.pause {
        state.set_phase(GamePhase::PauseGame);
    }
}

fn fire_bullet(state: &mut GameState) {
    let field = state.field();
    let mut bullet = Bullet::new(state.ship.nose(), state.ship.heading());
    bullet.body.place(bullet.body.pos, field);
    state.bullets.push(bullet);
    state.events.push(GameEvent::BulletFired);
}

fn update_spawn_timer(state: &mut GameState, dt: f32) {
    state.difficulty.spawn_timer += dt;
    if state.difficulty.spawn_timer > state.difficulty.spawn_interval {
        state.difficulty.spawn_timer = 0.0;
        let pos = state.random_point();
        let rock = new_rock(state, RockTier::Big, pos, true);
        log::debug!("Timed spawn: rock {} at {:?}", rock.id, pos);
        state.rocks.push(rock);
    }
}

/// Rock with its mirrors already set up for `pos`
fn new_rock(state: &mut GameState, tier: RockTier, pos: Vec2, is_new: bool) -> Rock {
    let field = state.field();
    let mut rock = state.make_rock(tier, pos, is_new);
    rock.body.place(pos, field);
    rock
}

/// Each live bullet kills at most one live rock. Returns the split children.
fn resolve_bullet_hits(state: &mut GameState) -> Vec<Rock> {
    let mut spawned = Vec::new();

    for bi in 0..state.bullets.len() {
        if state.bullets[bi].is_removed() {
            continue;
        }
        let bullet = &state.bullets[bi].body;
        let Some(ri) = state
            .rocks
            .iter()
            .position(|r| !r.is_removed() && bullet.hits(&r.body))
        else {
            continue;
        };

        state.bullets[bi].kill();
        state.rocks[ri].kill();
        let tier = state.rocks[ri].tier();
        let pos = state.rocks[ri].body.pos;
        log::debug!("Rock {} ({:?}) destroyed", state.rocks[ri].id, tier);

        if let Some(child) = tier.split() {
            for _ in 0..ROCK_SPLIT_COUNT {
                let rock = new_rock(state, child, pos, false);
                spawned.push(rock);
            }
        }
        award_points(state, tier);
    }

    spawned
}

fn award_points(state: &mut GameState, tier: RockTier) {
    state
        .score
        .add(state.settings.base_rock_score * tier.ordinal());
    state.events.push(GameEvent::RockDestroyed { tier });

    // One hit can cross several thresholds when the step is small
    let step = state.settings.bonus_life_score;
    while step > 0
        && state.score.value() >= step.saturating_mul(state.difficulty.bonus_multiplier)
    {
        state.difficulty.bonus_multiplier += 1;
        state.difficulty.tighten(&state.settings);
        state.lives.gain();
        state.events.push(GameEvent::BonusLife {
            lives: state.lives.count(),
        });
        log::info!(
            "Bonus life at {} points; spawn interval now {:.1}s",
            state.score.value(),
            state.difficulty.spawn_interval
        );
    }
}

/// At most one hit per tick; fading and already-destroyed rocks are harmless
fn resolve_ship_hit(state: &mut GameState) {
    if state.ship.is_invincible() {
        return;
    }
    let ship = &state.ship.body;
    let hit = state
        .rocks
        .iter()
        .any(|r| !r.is_removed() && !r.is_fading_in() && ship.hits(&r.body));
    if !hit {
        return;
    }

    let lives_left = state.lives.lose();
    let center = state.field().center();
    state.ship.reset_to(center);
    state.events.push(GameEvent::ShipDamaged { lives_left });
    log::debug!("Ship hit, {} lives left", lives_left);

    if state.lives.is_depleted() {
        log::info!("Out of lives with {} points", state.score.value());
        state.set_phase(GamePhase::PostGame);
    } else {
        state.ship.activate_invincibility();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    const DT: f32 = 0.03;

    /// Running game with no rocks and a vulnerable ship at the centre
    fn empty_game(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Settings::default());
        start_new_game(&mut state);
        state.rocks.clear();
        state.ship.invincible = false;
        state
    }

    /// Motionless, already solid rock
    fn place_rock(state: &mut GameState, tier: RockTier, pos: Vec2, fading: bool) {
        let mut rock = new_rock(state, tier, pos, fading);
        rock.body.vel = Vec2::ZERO;
        state.rocks.push(rock);
    }

    /// Bullet one step short of `target`, flying straight up
    fn bullet_below(state: &mut GameState, target: Vec2) {
        let mut bullet = Bullet::new(target + Vec2::new(0.0, BULLET_SPEED), 0.0);
        let field = state.field();
        bullet.body.place(bullet.body.pos, field);
        state.bullets.push(bullet);
    }

    fn count_events(state: &GameState, pred: impl Fn(&GameEvent) -> bool) -> usize {
        state.events.iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_confirm_on_title_starts_game() {
        let mut state = GameState::new(12345, Settings::default());
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::PreGame);

        let input = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::InGame);
        assert!(state.menu.is_none());
        assert_eq!(state.rocks.len(), 5);
        assert!(state.rocks.iter().all(|r| r.tier() == RockTier::Big));
        assert!(state.rocks.iter().all(|r| r.is_fading_in()));
        assert!(state.ship.is_invincible());
        assert_eq!(state.lives.count(), 3);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut state = empty_game(7);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, DT);
        assert_eq!(state.phase, GamePhase::PauseGame);
        let options = state.menu.as_ref().map(|m| m.options().to_vec());
        assert_eq!(
            options,
            Some(vec![
                MenuOption::Resume,
                MenuOption::Restart,
                MenuOption::Exit
            ])
        );

        // Frozen while paused
        let ticks_before = state.ship.body.pos;
        state.ship.body.vel = Vec2::new(2.0, 0.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ship.body.pos, ticks_before);

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, DT);
        assert_eq!(state.phase, GamePhase::InGame);
        assert!(state.menu.is_none());
    }

    #[test]
    fn test_restart_from_pause_reinitialises() {
        let mut state = empty_game(7);
        state.score.add(500);
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            DT,
        );
        tick(
            &mut state,
            &TickInput {
                cursor_down: true,
                confirm: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(state.phase, GamePhase::InGame);
        assert_eq!(state.score.value(), 0);
        assert_eq!(state.rocks.len(), 5);
    }

    #[test]
    fn test_ship_hit_costs_a_life() {
        let mut state = empty_game(1);
        let center = state.field().center();
        state.ship.body.rotation = 1.0;
        place_rock(&mut state, RockTier::Big, center, false);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives.count(), 2);
        assert_eq!(state.ship.pos(), center);
        assert_eq!(state.ship.heading(), 0.0);
        assert!(state.ship.is_invincible());
        assert_eq!(state.phase, GamePhase::InGame);
        assert_eq!(
            count_events(&state, |e| matches!(e, GameEvent::ShipDamaged { lives_left: 2 })),
            1
        );

        // Invincible now, so the same rock does nothing
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives.count(), 2);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = empty_game(1);
        state.lives = Lives::new(1);
        let center = state.field().center();
        place_rock(&mut state, RockTier::Medium, center, false);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives.count(), 0);
        assert_eq!(state.phase, GamePhase::PostGame);
        let options = state.menu.as_ref().map(|m| m.options().to_vec());
        assert_eq!(options, Some(vec![MenuOption::Restart, MenuOption::Exit]));
    }

    #[test]
    fn test_fading_rock_spares_ship_but_not_bullets() {
        let mut state = empty_game(2);
        let center = state.field().center();
        place_rock(&mut state, RockTier::Big, center, true);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives.count(), 3);

        state.ship.invincible = true;
        let target = state.rocks[0].body.pos;
        bullet_below(&mut state, target);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.rocks.len(), 3);
        assert!(state.rocks.iter().all(|r| r.tier() == RockTier::Medium));
    }

    #[test]
    fn test_splitting_by_tier() {
        for (tier, children, points) in [
            (RockTier::Big, Some(RockTier::Medium), 100),
            (RockTier::Medium, Some(RockTier::Small), 200),
            (RockTier::Small, None, 300),
        ] {
            let mut state = empty_game(3);
            state.ship.invincible = true;
            let at = Vec2::new(400.0, 120.0);
            place_rock(&mut state, tier, at, false);
            bullet_below(&mut state, at);

            tick(&mut state, &TickInput::default(), DT);

            assert!(state.bullets.is_empty());
            assert_eq!(state.score.value(), points);
            match children {
                Some(child) => {
                    assert_eq!(state.rocks.len(), 3);
                    for rock in &state.rocks {
                        assert_eq!(rock.tier(), child);
                        assert_eq!(rock.body.pos, at);
                        assert!(!rock.is_fading_in());
                    }
                }
                None => assert!(state.rocks.is_empty()),
            }
            assert_eq!(
                count_events(&state, |e| matches!(e, GameEvent::RockDestroyed { .. })),
                1
            );
        }
    }

    #[test]
    fn test_one_bullet_one_rock() {
        let mut state = empty_game(4);
        state.ship.invincible = true;
        let at = Vec2::new(400.0, 120.0);
        place_rock(&mut state, RockTier::Small, at, false);
        place_rock(&mut state, RockTier::Small, at, false);
        bullet_below(&mut state, at);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.rocks.len(), 1);
        assert_eq!(state.score.value(), 300);
    }

    #[test]
    fn test_bonus_life_once_per_threshold() {
        let mut state = empty_game(5);
        state.ship.invincible = true;
        state.score.add(9_950);
        let at = Vec2::new(400.0, 120.0);

        place_rock(&mut state, RockTier::Small, at, false);
        bullet_below(&mut state, at);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives.count(), 4);
        assert_eq!(state.difficulty.bonus_multiplier, 2);
        assert_eq!(state.difficulty.spawn_interval, 16.0);
        assert_eq!(
            count_events(&state, |e| matches!(e, GameEvent::BonusLife { lives: 4 })),
            1
        );

        // Still above 10000 but short of 20000: no further award
        place_rock(&mut state, RockTier::Small, at, false);
        bullet_below(&mut state, at);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score.value(), 10_550);
        assert_eq!(state.lives.count(), 4);
        assert_eq!(state.difficulty.bonus_multiplier, 2);
    }

    #[test]
    fn test_timed_rock_spawn() {
        let mut state = empty_game(6);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), 1.0);
        }
        assert!(state.rocks.is_empty());

        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.rocks.len(), 1);
        assert_eq!(state.rocks[0].tier(), RockTier::Big);
        assert!(state.rocks[0].is_fading_in());
        assert_eq!(state.difficulty.spawn_timer, 0.0);
    }

    #[test]
    fn test_held_fire_is_rate_limited() {
        let mut state = empty_game(8);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &fire, DT);
        }
        assert_eq!(state.bullets.len(), 2);

        // Releasing resets the counter, so the next press fires at once
        tick(&mut state, &TickInput::default(), DT);
        tick(&mut state, &fire, DT);
        assert_eq!(state.bullets.len(), 3);
        assert_eq!(count_events(&state, |e| *e == GameEvent::BulletFired), 1);
    }

    #[test]
    fn test_bullet_leaves_from_nose() {
        let mut state = empty_game(8);
        let nose = state.ship.nose();
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
            DT,
        );
        let bullet = &state.bullets[0];
        let expected = nose + Vec2::new(0.0, -BULLET_SPEED);
        assert!((bullet.body.pos - expected).length() < 1e-3);
    }

    #[test]
    fn test_menu_cursor_is_debounced() {
        let mut state = GameState::new(9, Settings::default());
        let down = TickInput {
            cursor_down: true,
            ..Default::default()
        };
        let selected = |s: &GameState| s.menu.as_ref().map(|m| m.selected_index());

        tick(&mut state, &down, 0.06);
        assert_eq!(selected(&state), Some(1));
        tick(&mut state, &down, 0.06);
        assert_eq!(selected(&state), Some(1));
        tick(&mut state, &down, 0.06);
        assert_eq!(selected(&state), Some(0));
    }

    #[test]
    fn test_exit_from_menu() {
        let mut state = GameState::new(10, Settings::default());
        let input = TickInput {
            cursor_down: true,
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!(state.exit_requested);
        assert_eq!(state.events, vec![GameEvent::ExitRequested]);
        assert_eq!(state.phase, GamePhase::PreGame);
    }

    #[test]
    fn test_bullets_expire() {
        let mut state = empty_game(11);
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
            DT,
        );
        for _ in 1..BULLET_LIFETIME - 1 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.bullets.len(), 1);
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_restart_from_post_game_reinitialises() {
        let mut state = empty_game(14);
        state.lives = Lives::new(1);
        state.score.add(700);
        state.difficulty.bonus_multiplier = 3;
        let center = state.field().center();
        place_rock(&mut state, RockTier::Big, center, false);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::PostGame);

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, DT);
        assert_eq!(state.phase, GamePhase::InGame);
        assert!(state.menu.is_none());
        assert_eq!(state.score.value(), 0);
        assert_eq!(state.lives.count(), 3);
        assert_eq!(state.difficulty.bonus_multiplier, 1);
        assert_eq!(state.rocks.len(), 5);
        assert!(state.rocks.iter().all(|r| r.is_fading_in()));
        assert!(state.ship.is_invincible());
        assert_eq!(state.ship.pos(), center);
    }

    #[test]
    fn test_exit_from_pause_and_post_game_menus() {
        // Pause menu: Resume, Restart, Exit; up from the top wraps to Exit
        let mut state = empty_game(15);
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            DT,
        );
        let exit = TickInput {
            cursor_up: true,
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &exit, DT);
        assert!(state.exit_requested);
        assert_eq!(state.events, vec![GameEvent::ExitRequested]);
        assert_eq!(state.phase, GamePhase::PauseGame);

        // Game over menu: Restart, Exit
        let mut state = empty_game(16);
        state.lives = Lives::new(1);
        let center = state.field().center();
        place_rock(&mut state, RockTier::Medium, center, false);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::PostGame);
        let exit = TickInput {
            cursor_down: true,
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &exit, DT);
        assert!(state.exit_requested);
        assert_eq!(state.phase, GamePhase::PostGame);

        // Nothing moves once exit is requested
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.time_ticks, ticks + 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_pausing_freezes_the_rest_of_the_tick() {
        let mut state = empty_game(17);
        state.lives = Lives::new(1);
        let center = state.field().center();
        place_rock(&mut state, RockTier::Big, center, false);

        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(state.phase, GamePhase::PauseGame);
        assert_eq!(state.lives.count(), 1);
        assert_eq!(
            count_events(&state, |e| matches!(e, GameEvent::ShipDamaged { .. })),
            0
        );

        // Resuming runs the tick, and the waiting rock lands its hit
        tick(
            &mut state,
            &TickInput {
                confirm: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(state.lives.count(), 0);
        assert_eq!(state.phase, GamePhase::PostGame);
    }

    #[test]
    fn test_one_hit_can_cross_several_bonus_thresholds() {
        let settings = Settings {
            bonus_life_score: 100,
            ..Default::default()
        };
        let mut state = GameState::new(18, settings);
        start_new_game(&mut state);
        state.rocks.clear();
        let at = Vec2::new(400.0, 120.0);

        // Small rock: 300 points crosses 100, 200 and 300
        place_rock(&mut state, RockTier::Small, at, false);
        bullet_below(&mut state, at);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score.value(), 300);
        assert_eq!(state.lives.count(), 6);
        assert_eq!(state.difficulty.bonus_multiplier, 4);
        assert_eq!(
            count_events(&state, |e| matches!(e, GameEvent::BonusLife { .. })),
            3
        );

        // Big rock: 100 more reaches exactly the next threshold
        place_rock(&mut state, RockTier::Big, at, false);
        bullet_below(&mut state, at);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score.value(), 400);
        assert_eq!(state.lives.count(), 7);
        assert_eq!(state.difficulty.spawn_interval, 4.0);
    }

    #[test]
    fn test_external_controller_drives_the_ship() {
        let mut state = empty_game(19);
        let held = TickInput {
            external_controller: true,
            thrust_forward: true,
            rotate_left: true,
            fire: true,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut state, &held, DT);
        }
        assert!(state.external_controller);
        assert!(state.ship.heading() < 0.0);
        assert_ne!(state.ship.body.vel, Vec2::ZERO);
        assert_eq!(state.bullets.len(), 1);

        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.external_controller);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Settings::default());
        let mut state2 = GameState::new(99999, Settings::default());

        let inputs = [
            TickInput {
                confirm: true,
                ..Default::default()
            },
            TickInput {
                rotate_left: true,
                thrust_forward: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..20 {
            for input in &inputs {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.rocks.len(), state2.rocks.len());
        for (a, b) in state1.rocks.iter().zip(&state2.rocks) {
            assert_eq!(a.body.pos, b.body.pos);
        }
        assert_eq!(state1.ship.pos(), state2.ship.pos());
    }
}
