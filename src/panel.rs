use crate::consts::{
    GAME_OVER_TEXT, MESSAGE_PANEL_FONT, MESSAGE_PANEL_X, MESSAGE_PANEL_Y, SCORE_PANEL_FONT,
    SCORE_PANEL_X, SCORE_PANEL_Y,
};
use crate::entity::{Drawable, Entity, Position};
use rand::RngCore;

/// Status line text for a score and the seconds left.
pub fn format_status(score: u32, time: u32) -> String {
    format!("Score: {}, Time: {:02}:{:02}", score, time / 60, time % 60)
}

#[derive(Debug, Clone)]
pub struct ScorePanel {
    pub position: Position,
    pub text: String,
}

impl ScorePanel {
    pub fn new() -> Self {
        Self {
            position: Position::new(SCORE_PANEL_X, SCORE_PANEL_Y),
            text: format_status(0, 0),
        }
    }

    pub fn set_current_score(&mut self, score: u32, time: u32) {
        self.text = format_status(score, time);
    }
}

impl Default for ScorePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for ScorePanel {
    /// Text is owned by the game's score/time; it refreshes it after a reset.
    fn reset(&mut self, _rng: &mut dyn RngCore) {
        self.position = Position::new(SCORE_PANEL_X, SCORE_PANEL_Y);
    }

    fn position(&self) -> Position {
        self.position
    }

    fn drawable(&self) -> Drawable {
        Drawable::Text {
            text: self.text.clone(),
            font: SCORE_PANEL_FONT,
            x: self.position.x,
            y: self.position.y,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessagePanel {
    pub position: Position,
    pub text: &'static str,
}

impl MessagePanel {
    pub fn new() -> Self {
        Self {
            position: Position::new(MESSAGE_PANEL_X, MESSAGE_PANEL_Y),
            text: GAME_OVER_TEXT,
        }
    }
}

impl Default for MessagePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for MessagePanel {
    fn reset(&mut self, _rng: &mut dyn RngCore) {}

    fn position(&self) -> Position {
        self.position
    }

    fn drawable(&self) -> Drawable {
        Drawable::Text {
            text: self.text.to_string(),
            font: MESSAGE_PANEL_FONT,
            x: self.position.x,
            y: self.position.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_status(0, 60), "Score: 0, Time: 01:00");
        assert_eq!(format_status(0, 59), "Score: 0, Time: 00:59");
        assert_eq!(format_status(15, 5), "Score: 15, Time: 00:05");
        assert_eq!(format_status(7, 0), "Score: 7, Time: 00:00");
        assert_eq!(format_status(1, 6000), "Score: 1, Time: 100:00");
    }

    proptest! {
        #[test]
        fn prop_status_round_trips_time(score in 0u32..10_000, time in 0u32..6000) {
            let text = format_status(score, time);
            let clock = text.rsplit("Time: ").next().unwrap_or_default();
            let (mm, ss) = clock.split_once(':').unwrap_or_default();
            prop_assert_eq!(mm.len(), 2);
            prop_assert_eq!(ss.len(), 2);
            let minutes: u32 = mm.parse().unwrap();
            let seconds: u32 = ss.parse().unwrap();
            prop_assert_eq!(minutes * 60 + seconds, time);
        }
    }

    #[test]
    fn panels_render_as_text() {
        let mut panel = ScorePanel::new();
        panel.set_current_score(10, 42);
        assert_eq!(
            panel.drawable(),
            Drawable::Text {
                text: "Score: 10, Time: 00:42".to_string(),
                font: "16px Georgia",
                x: 330.0,
                y: 80.0,
            }
        );

        match MessagePanel::new().drawable() {
            Drawable::Text { text, .. } => assert_eq!(text, "Game Over"),
            other => panic!("unexpected drawable {:?}", other),
        }
    }
}
