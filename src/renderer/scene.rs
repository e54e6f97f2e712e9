//! Frame drawing: entities, HUD and the game-over overlay

use glam::Vec2;

use super::shapes::entity_triangle;
use super::{RenderSurface, TextAlign, TextBaseline, TextStyle};
use crate::sim::{Entity, GameState, colors};

const HUD_FONT: f32 = 20.0;
const TITLE_FONT: f32 = 40.0;
const FINAL_SCORE_FONT: f32 = 24.0;

fn draw_entity(surface: &mut impl RenderSurface, entity: &Entity) {
    surface.fill_triangle(entity_triangle(&entity.rect), entity.color());
}

/// Draw the current state: clear, entities, then HUD or overlay
pub fn draw_frame(surface: &mut impl RenderSurface, state: &GameState) {
    surface.clear();

    draw_entity(surface, &state.player);
    for bullet in &state.bullets {
        draw_entity(surface, bullet);
    }
    for alien in &state.aliens {
        draw_entity(surface, alien);
    }

    if state.is_game_over() {
        draw_game_over(surface, state);
    } else {
        draw_hud(surface, state);
    }
}

fn draw_hud(surface: &mut impl RenderSurface, state: &GameState) {
    surface.draw_text(
        &format!("SCORE: {}", state.score),
        Vec2::new(state.bounds.x / 2.0, 10.0),
        TextStyle {
            font_size: HUD_FONT,
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
            color: colors::TEXT,
        },
    );
}

fn draw_game_over(surface: &mut impl RenderSurface, state: &GameState) {
    let style = TextStyle {
        font_size: TITLE_FONT,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
        color: colors::TEXT,
    };
    surface.draw_text(
        "GAME OVER",
        Vec2::new(state.bounds.x / 2.0, state.bounds.y / 2.0 - 60.0),
        style,
    );
    surface.draw_text(
        &format!("FINAL SCORE: {}", state.score),
        Vec2::new(state.bounds.x / 2.0, 10.0),
        TextStyle {
            font_size: FINAL_SCORE_FONT,
            ..style
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::tuning::Tuning;

    fn new_state() -> GameState {
        GameState::new(Vec2::new(800.0, 600.0), Tuning::default(), 1, 0.0)
    }

    #[test]
    fn test_playing_frame() {
        let mut state = new_state();
        state.score = 30;
        state.aliens.push(Entity::alien(100.0, 1.0));
        state.bullets.push(Entity::bullet_from(&state.player, 8.0));

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state);

        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(surface.triangle_count(), 3);
        assert_eq!(surface.texts(), vec!["SCORE: 30"]);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = new_state();
        state.score = 70;
        state.trigger_game_over();

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state);

        assert_eq!(surface.texts(), vec!["GAME OVER", "FINAL SCORE: 70"]);
        let title_pos = surface.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, pos, style } if text == "GAME OVER" => {
                Some((*pos, style.font_size))
            }
            _ => None,
        });
        assert_eq!(title_pos, Some((Vec2::new(400.0, 240.0), 40.0)));
    }
}
