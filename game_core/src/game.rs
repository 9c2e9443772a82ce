//! Top-level driver
//!
//! The host calls [`Game::tick`] once per display refresh, forever, and never
//! re-entrantly. Key events may arrive between ticks.

use crate::{Config, GameRng, Key, Scene, SceneAction, SceneKind, Score, Surface};

/// Process-wide state shared by every scene
pub struct Session {
    pub config: Config,
    pub score: Score,
    pub rng: GameRng,
    /// Number of times the court has been entered
    pub matches_started: u32,
}

impl Session {
    pub fn new(config: Config, rng: GameRng) -> Self {
        Self {
            config,
            score: Score::new(),
            rng,
            matches_started: 0,
        }
    }
}

/// The game: one active scene plus the session
pub struct Game {
    scene: Option<Scene>,
    session: Session,
}

impl Game {
    pub fn new(config: Config, rng: GameRng) -> Self {
        Self {
            scene: None,
            session: Session::new(config, rng),
        }
    }

    /// Enter the welcome scene
    pub fn start(&mut self) {
        self.set_scene(SceneKind::Welcome);
    }

    /// Exit the current scene (if any), then create and enter `next`
    pub fn set_scene(&mut self, next: SceneKind) {
        if let Some(current) = self.scene.as_mut() {
            log::info!("Scene {:?} -> {:?}", current.kind(), next);
            current.exit();
        }
        let scene = self.scene.insert(Scene::new(next, &self.session.config));
        scene.enter(&mut self.session);
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    pub fn scene_kind(&self) -> Option<SceneKind> {
        self.scene.as_ref().map(Scene::kind)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn score(&self) -> Score {
        self.session.score
    }

    /// One frame: update, then draw whatever scene is active afterwards
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        self.update();
        self.draw(surface);
    }

    pub fn update(&mut self) {
        let action = match self.scene.as_mut() {
            Some(scene) => scene.update(&mut self.session),
            None => None,
        };
        self.apply(action);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if let Some(scene) = &self.scene {
            scene.draw(surface, &self.session);
        }
    }

    pub fn key_down(&mut self, key: Key) {
        let action = self.scene.as_mut().and_then(|scene| scene.key_down(key));
        self.apply(action);
    }

    pub fn key_up(&mut self, key: Key) {
        let action = self.scene.as_mut().and_then(|scene| scene.key_up(key));
        self.apply(action);
    }

    fn apply(&mut self, action: Option<SceneAction>) {
        let next = action.zip(self.scene_kind()).and_then(|(action, kind)| kind.next(action));
        if let Some(next) = next {
            self.set_scene(next);
        }
    }
}
