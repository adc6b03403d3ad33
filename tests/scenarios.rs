use canvas_pong::renderer::{CommandList, draw_frame};
use canvas_pong::sim::*;
use canvas_pong::Settings;
use glam::Vec2;

fn world(mode: Mode) -> World {
    World::new(Geometry::default(), mode, 2024).unwrap()
}

#[test]
fn test_one_step_free_flight() {
    let mut world = world(Mode::Ai);
    assert_eq!(world.ball.pos, Vec2::new(393.0, 243.0));
    world.ball.vel = Vec2::new(6.0, 3.0);

    step(&mut world, &InputState::default());

    assert_eq!(world.ball.pos, Vec2::new(399.0, 246.0));
}

#[test]
fn test_centered_hit_returns_flat() {
    let mut world = world(Mode::Player);
    world.ball.pos = Vec2::new(38.0, 243.0);
    world.ball.vel = Vec2::new(-6.0, 0.0);

    let report = step(&mut world, &InputState::default());

    assert_eq!(report.left_hit.map(|h| h.collide_point), Some(0.0));
    assert_eq!(world.ball.vel, Vec2::new(6.0, 0.0));
}

#[test]
fn test_rally_across_court() {
    // Flat shot from the left paddle reaches the right paddle and comes back
    let mut world = world(Mode::Player);
    world.ball.pos = Vec2::new(38.0, 243.0);
    world.ball.vel = Vec2::new(-6.0, 0.0);
    let input = InputState::default();

    let mut left_hits = 0;
    let mut right_hits = 0;
    for _ in 0..300 {
        let report = step(&mut world, &input);
        left_hits += report.left_hit.is_some() as u32;
        right_hits += report.right_hit.is_some() as u32;
        assert_eq!(report.scored, None);
    }

    assert!(left_hits >= 2);
    assert!(right_hits >= 1);
    assert_eq!(world.score, Score::default());
}

#[test]
fn test_missed_ball_scores_for_right() {
    let mut world = world(Mode::Player);
    world.left.y = 0.0;
    world.ball.pos = Vec2::new(100.0, 400.0);
    world.ball.vel = Vec2::new(-6.0, 0.0);
    let input = InputState::default();

    let mut frames = 0;
    while world.score.right == 0 {
        step(&mut world, &input);
        frames += 1;
        assert!(frames < 100, "ball never left the court");
    }

    assert_eq!(world.score, Score { left: 0, right: 1 });
    assert_eq!(world.ball.pos, world.geometry.centered_ball_pos());
    assert_eq!(world.ball.vel.x.abs(), 6.0);
}

#[test]
fn test_mode_change_event_resets_match() {
    let mut world = world(Mode::Ai);
    let mut input = InputState::default();
    world.score = Score { left: 5, right: 2 };
    world.left.y = 0.0;
    world.right.y = 400.0;

    let mut pending = vec![InputEvent::ModeChange(Mode::Player)];
    drain_events(&mut world, &mut input, &mut pending);

    assert_eq!(world.mode, Mode::Player);
    assert_eq!(world.score, Score::default());
    assert_eq!(world.left.y, 200.0);
    assert_eq!(world.right.y, 200.0);
}

#[test]
fn test_second_player_controls() {
    let mut world = world(Mode::Player);
    let mut input = InputState::default();
    let mut pending = Vec::new();

    if let Some(key) = Key::from_code("ArrowDown") {
        pending.push(InputEvent::KeyDown(key));
    }
    drain_events(&mut world, &mut input, &mut pending);
    for _ in 0..10 {
        step(&mut world, &input);
    }
    assert_eq!(world.right.y, 270.0);

    pending.push(InputEvent::KeyUp(Key::Down));
    drain_events(&mut world, &mut input, &mut pending);
    step(&mut world, &input);
    assert_eq!(world.right.y, 270.0);
}

#[test]
fn test_ai_tracks_ball_over_time() {
    let mut world = world(Mode::Ai);
    world.ball.pos = Vec2::new(393.0, 20.0);
    world.ball.vel = Vec2::new(0.0, 0.0);
    let input = InputState::default();

    for _ in 0..100 {
        step(&mut world, &input);
    }

    // Clamped at the top, the closest it can get to a ball near the wall
    assert_eq!(world.right.y, 0.0);
}

#[test]
fn test_settings_drive_world() {
    let settings = Settings::from_json(r#"{ "width": 640, "height": 360, "mode": "player", "seed": 1 }"#)
        .expect("valid settings");
    let geometry = settings.geometry().expect("playable surface");
    let world = World::new(geometry, settings.mode, settings.seed.unwrap_or_default()).unwrap();

    assert_eq!(world.right.y, 130.0);
    assert_eq!(world.geometry.right_paddle_x(), 608.0);

    let mut list = CommandList::new();
    draw_frame(&world, &mut list);
    assert_eq!(list.texts(), vec!["0", "0"]);
}
