//! End-to-end sessions through the public API

use floppy_bird::platform::{
    Autopilot, DrawCommand, InputEvent, Key, RecordingCanvas, ScriptedInput, SpriteSheet,
    StockAssets, Unpaced,
};
use floppy_bird::sim::{SessionState, TickInput, tick};
use floppy_bird::{Game, GameConfig, QuitReason};
use glam::Vec2;

#[test]
fn test_autopilot_scores() {
    // Keep every gap within ~54px of the last so the autopilot can follow
    let mut config = GameConfig::default();
    config.pipes.boundary = 200;
    let game = Game::setup(
        &config,
        &mut StockAssets,
        2024,
        RecordingCanvas::new(),
        Autopilot::new(30 * 60, 30),
        Unpaced,
    )
    .unwrap();
    let outcome = game.run();

    assert_eq!(outcome.reason, QuitReason::Closed);
    assert!(outcome.ticks_alive > 200, "crashed after {} ticks", outcome.ticks_alive);
    assert!(outcome.score >= 3);
}

#[test]
fn test_replay_is_deterministic() {
    let script = || {
        (0..400)
            .step_by(11)
            .fold(ScriptedInput::new(), |input, frame| input.flap_at(frame))
            .at(400, InputEvent::KeyDown(Key::Escape))
    };
    let run = || {
        Game::setup(
            &GameConfig::default(),
            &mut StockAssets,
            77,
            RecordingCanvas::new(),
            script(),
            Unpaced,
        )
        .unwrap()
        .run()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_frozen_frame_after_game_over() {
    let mut game = Game::setup(
        &GameConfig::default(),
        &mut StockAssets,
        3,
        RecordingCanvas::new(),
        ScriptedInput::new().at(120, InputEvent::Quit),
        Unpaced,
    )
    .unwrap();

    let mut frames: Vec<Vec<DrawCommand>> = Vec::new();
    while game.step().is_none() {
        frames.push(game.canvas().last_frame().to_vec());
    }

    assert!(game.state().is_over());
    let last = frames.len() - 1;
    assert_eq!(frames[last], frames[last - 1]);
    assert!(matches!(frames[last][1], DrawCommand::Rotated { .. }));
}

#[test]
fn test_pipe_pairs_recycle_during_play() {
    let mut state =
        SessionState::new(&GameConfig::default(), &SpriteSheet::stock(), 9).unwrap();
    // Hold the bird in the first pair's gap so it survives the pass
    for _ in 0..90 {
        let gap = state.pipes.pairs()[0].gap_center();
        state.bird.set_motion(Vec2::new(50.0, gap - 12.0), -1.0, 0.0);
        tick(&mut state, &TickInput::default());
        assert!(!state.is_over());
    }
    // 288 - 90 * 4 = -72 < -52: the first slot has been respawned
    assert!(state.pipes.pairs()[0].x() > 0.0);
    assert_eq!(state.score, 1);
}
