//! Scene state machine
//!
//! Exactly one scene is active at a time. Scenes never switch themselves;
//! they report a [`SceneAction`] and the [`Game`](crate::Game) looks the next
//! scene up in the transition table.

use crate::{Config, Court, Key, Session, Surface, TEXT_FONT, TITLE_FONT};

/// Scene identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Welcome,
    Court,
    EndGame,
}

/// Actions that trigger scene transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// The confirm key was released
    Confirm,
    /// A score went past the last playable point
    MatchOver,
}

impl SceneKind {
    /// Get next scene for a given action (if valid)
    pub fn next(self, action: SceneAction) -> Option<SceneKind> {
        match (self, action) {
            (SceneKind::Welcome, SceneAction::Confirm) => Some(SceneKind::Court),
            (SceneKind::Court, SceneAction::MatchOver) => Some(SceneKind::EndGame),
            (SceneKind::EndGame, SceneAction::Confirm) => Some(SceneKind::Welcome),
            _ => None,
        }
    }
}

/// Title screen with the controls
#[derive(Debug, Clone, Default)]
pub struct Welcome;

impl Welcome {
    pub fn draw(&self, surface: &mut dyn Surface, config: &Config) {
        let x = config.center().x;
        surface.clear();

        surface.fill_text("HTML5 PONG", x, 100.0, TITLE_FONT);

        surface.fill_text("Controls for the left player:", x, 200.0, TEXT_FONT);
        surface.fill_text("W and S", x, 240.0, TEXT_FONT);
        surface.fill_text("Controls for the right player:", x, 300.0, TEXT_FONT);
        surface.fill_text("UP-ARROW and DOWN-ARROW", x, 340.0, TEXT_FONT);

        surface.fill_text("Press [ENTER] to start the match", x, 500.0, TEXT_FONT);
    }
}

/// Results screen
#[derive(Debug, Clone, Default)]
pub struct EndGame;

impl EndGame {
    pub fn draw(&self, surface: &mut dyn Surface, session: &Session) {
        let x = session.config.center().x;
        let score = session.score;
        surface.clear();

        surface.fill_text("HTML5 PONG - RESULTS", x, 100.0, TITLE_FONT);

        surface.fill_text("Game has ended", x, 200.0, TEXT_FONT);
        let winner = if session.config.is_final_score(score.left) {
            "Left player won the game!"
        } else {
            "Right player won the game!"
        };
        surface.fill_text(winner, x, 240.0, TEXT_FONT);
        surface.fill_text("End results:", x, 300.0, TEXT_FONT);
        surface.fill_text(
            &format!("{} - {}", score.left, score.right),
            x,
            340.0,
            TEXT_FONT,
        );

        surface.fill_text("Press [ENTER] to proceed", x, 500.0, TEXT_FONT);
    }
}

/// The active scene
pub enum Scene {
    Welcome(Welcome),
    Court(Box<Court>),
    EndGame(EndGame),
}

impl Scene {
    /// Create a fresh scene. Court entities are built here, right before `enter`.
    pub fn new(kind: SceneKind, config: &Config) -> Self {
        match kind {
            SceneKind::Welcome => Scene::Welcome(Welcome),
            SceneKind::Court => Scene::Court(Box::new(Court::new(config))),
            SceneKind::EndGame => Scene::EndGame(EndGame),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Welcome(_) => SceneKind::Welcome,
            Scene::Court(_) => SceneKind::Court,
            Scene::EndGame(_) => SceneKind::EndGame,
        }
    }

    pub fn court_mut(&mut self) -> Option<&mut Court> {
        match self {
            Scene::Court(court) => Some(&mut **court),
            _ => None,
        }
    }

    pub fn enter(&mut self, session: &mut Session) {
        if let Scene::Court(court) = self {
            court.enter(session);
        }
    }

    pub fn exit(&mut self) {
        if let Scene::Court(court) = self {
            court.exit();
        }
    }

    /// Welcome and EndGame are idle between frames
    pub fn update(&mut self, session: &mut Session) -> Option<SceneAction> {
        match self {
            Scene::Court(court) => court.update(session),
            Scene::Welcome(_) | Scene::EndGame(_) => None,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, session: &Session) {
        match self {
            Scene::Welcome(welcome) => welcome.draw(surface, &session.config),
            Scene::Court(court) => court.draw(surface),
            Scene::EndGame(end_game) => end_game.draw(surface, session),
        }
    }

    pub fn key_down(&mut self, key: Key) -> Option<SceneAction> {
        if let Scene::Court(court) = self {
            court.key_down(key);
        }
        None
    }

    pub fn key_up(&mut self, key: Key) -> Option<SceneAction> {
        match self {
            Scene::Court(court) => {
                court.key_up(key);
                None
            }
            Scene::Welcome(_) | Scene::EndGame(_) => {
                (key == Key::Confirm).then_some(SceneAction::Confirm)
            }
        }
    }
}
