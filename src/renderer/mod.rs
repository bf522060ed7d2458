//! Frame rendering
//!
//! A read-only projection of the session onto a [`Canvas`]. Draw order is
//! back to front: background, bird, pipes, ground.

use glam::Vec2;

use crate::platform::assets::Sprite;
use crate::platform::canvas::Canvas;
use crate::sim::state::SessionState;

/// Draw one full frame and present it
pub fn render(state: &SessionState, canvas: &mut impl Canvas) {
    canvas.draw(Sprite::Background, Vec2::ZERO);

    let bird = &state.bird;
    canvas.draw_rotated(Sprite::for_wing(bird.wing()), bird.position(), bird.angle());

    for pair in state.pipes.visible() {
        canvas.draw(Sprite::PipeUpper, pair.upper.position());
        canvas.draw(Sprite::PipeLower, pair.lower.position());
    }

    let ground = &state.ground;
    canvas.draw(Sprite::Base, Vec2::new(ground.x1, ground.y));
    canvas.draw(Sprite::Base, Vec2::new(ground.x2, ground.y));

    canvas.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::assets::SpriteSheet;
    use crate::platform::canvas::{DrawCommand, RecordingCanvas};
    use crate::settings::GameConfig;

    #[test]
    fn test_draw_order() {
        let state = SessionState::new(&GameConfig::default(), &SpriteSheet::stock(), 11).unwrap();
        let mut canvas = RecordingCanvas::new();
        render(&state, &mut canvas);

        let frame = canvas.last_frame();
        // Second pair starts past the right edge and is skipped
        assert_eq!(frame.len(), 6);
        assert_eq!(
            frame[0],
            DrawCommand::Sprite {
                sprite: Sprite::Background,
                pos: Vec2::ZERO
            }
        );
        assert_eq!(
            frame[1],
            DrawCommand::Rotated {
                sprite: Sprite::BirdUp,
                pos: Vec2::new(50.0, 256.0),
                degrees: 20.0
            }
        );
        assert!(matches!(
            frame[2],
            DrawCommand::Sprite {
                sprite: Sprite::PipeUpper,
                ..
            }
        ));
        assert!(matches!(
            frame[3],
            DrawCommand::Sprite {
                sprite: Sprite::PipeLower,
                ..
            }
        ));
        assert_eq!(
            frame[5],
            DrawCommand::Sprite {
                sprite: Sprite::Base,
                pos: Vec2::new(288.0, state.ground.y)
            }
        );
        assert_eq!(canvas.frames_presented(), 1);
    }
}
