//! Property tests for the physics and superposition invariants

use glam::Vec2;
use proptest::prelude::*;
use quantum_leap::sim::{
    Body, Contact, GameState, Goal, Platform, Rect, SimEvent, TickInput, candidates_for,
    enter_superposition, integrate, select_at, tick,
};
use quantum_leap::{Level, Tuning};

fn open_level(platform: Platform) -> Level {
    Level {
        world: Vec2::new(800.0, 600.0),
        platforms: vec![platform],
        goal: Goal::new(760.0, platform.surface() - 40.0, 40.0),
        spawn: Rect::new(0.0, 0.0, 30.0, 30.0),
    }
}

proptest! {
    #[test]
    fn gravity_grows_dy_every_airborne_tick(
        x in 0.0f32..770.0,
        y in 0.0f32..200.0,
        gravity in 0.1f32..2.0,
    ) {
        let tuning = Tuning { gravity, ..Tuning::default() };
        let mut state = GameState::new(&Level::default());
        state.platforms.clear();
        // Out of reach so the fall never ends in a win
        state.goal = Goal::new(-100.0, -100.0, 10.0);
        state.body.pos = Vec2::new(x, y);

        loop {
            let before = state.body.vel.y;
            tick(&mut state, &TickInput::default(), &tuning);
            if state.body.on_ground {
                prop_assert_eq!(state.body.vel.y, 0.0);
                break;
            }
            prop_assert_eq!(state.body.vel.y, before + gravity);
            prop_assert!(state.body.vel.y > before);
        }
    }

    #[test]
    fn falling_body_lands_exactly_on_surface(
        surface in 100u16..580,
        drop in 1u16..300,
        offset in 0u16..170,
    ) {
        let surface = surface as f32;
        let platform = Platform::new(300.0, surface, 200.0, 20.0);
        let mut body = Body::new(Rect::new(
            300.0 + offset as f32,
            (surface - 30.0 - drop as f32).max(-400.0),
            30.0,
            30.0,
        ));

        let mut contact = Contact::Airborne;
        for _ in 0..200 {
            contact = integrate(&mut body, &[platform], 600.0, 0.5);
            if contact != Contact::Airborne {
                break;
            }
        }
        prop_assert_eq!(contact, Contact::Platform(0));
        prop_assert!(body.on_ground);
        prop_assert_eq!(body.vel.y, 0.0);
        prop_assert_eq!(body.pos.y + body.size.y, surface);
    }

    #[test]
    fn candidates_follow_fixed_offsets(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        left in any::<bool>(),
    ) {
        let leaps = Tuning::default().leaps;
        let facing = if left { -1.0 } else { 1.0 };
        let c = candidates_for(Vec2::new(x, y), facing, &leaps);
        prop_assert_eq!(c.len(), 3);
        prop_assert_eq!(c[0], Vec2::new(x + 250.0 * facing, y - 120.0));
        prop_assert_eq!(c[1], Vec2::new(x + 100.0 * facing, y - 180.0));
        prop_assert_eq!(c[2], Vec2::new(x + 100.0 * facing, y - 20.0));
    }

    #[test]
    fn airborne_enter_is_a_no_op(
        x in 0.0f32..770.0,
        y in 0.0f32..300.0,
        dy in -12.0f32..12.0,
    ) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&open_level(Platform::new(0.0, 580.0, 800.0, 20.0)));
        state.body.pos = Vec2::new(x, y);
        state.body.vel.y = dy;
        state.body.on_ground = false;

        let before = state.clone();
        let event = enter_superposition(&mut state, &TickInput::default(), &tuning);
        prop_assert!(event.is_rejection());
        prop_assert_eq!(state, before);
    }

    #[test]
    fn missed_selection_keeps_superposition(
        px in 0.0f32..800.0,
        py in 0.0f32..600.0,
    ) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&open_level(Platform::new(0.0, 500.0, 800.0, 20.0)));
        state.body.pos = Vec2::new(100.0, 470.0);
        state.body.on_ground = true;
        enter_superposition(&mut state, &TickInput::default(), &tuning);

        let hits_ghost = state
            .superposition
            .ghost_rects(state.body.size)
            .iter()
            .any(|r| r.contains_point(Vec2::new(px, py)));
        let before = state.clone();
        let event = select_at(&mut state, Vec2::new(px, py));

        if hits_ghost {
            prop_assert!(
                matches!(event, SimEvent::Collapsed { .. }),
                "expected a collapse, got {:?}",
                event
            );
            prop_assert!(!state.superposition.active);
            prop_assert!(state.superposition.candidates.is_empty());
        } else {
            prop_assert_eq!(event, SimEvent::CollapseMissed);
            prop_assert_eq!(state, before);
        }
    }
}

#[test]
fn candidates_at_100_200_facing_right() {
    let leaps = Tuning::default().leaps;
    assert_eq!(
        candidates_for(Vec2::new(100.0, 200.0), 1.0, &leaps),
        vec![
            Vec2::new(350.0, 80.0),
            Vec2::new(200.0, 20.0),
            Vec2::new(200.0, 180.0)
        ]
    );
}
