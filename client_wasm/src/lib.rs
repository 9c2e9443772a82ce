//! Canvas client for HTML5 Pong
//!
//! Finds the game canvas, forwards keyboard events to the game and ticks it
//! once per animation frame. All game logic lives in `game_core`.

pub mod error;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;

pub use error::ClientError;

/// Id of the canvas element the game draws into
pub const CANVAS_ID: &str = "game-canvas";

#[cfg(target_arch = "wasm32")]
pub use client::start_game;

#[cfg(target_arch = "wasm32")]
mod client {
    use crate::canvas::CanvasSurface;
    use crate::{input, ClientError, CANVAS_ID};
    use game_core::{Config, Game, GameRng, Key, Surface};
    #[cfg(test)]
    use game_core::SceneKind;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, Window};

    struct Client {
        game: Game,
        surface: CanvasSurface,
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    /// Find the canvas, enter the welcome scene and start the frame loop
    #[wasm_bindgen]
    pub fn start_game() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A second start keeps the first logger
        let _ = console_log::init_with_level(log::Level::Info);

        if CLIENT.with(|client| client.borrow().is_some()) {
            log::warn!("Game already started");
            return Ok(());
        }

        let window = web_sys::window().ok_or(ClientError::CanvasNotFound)?;
        let document = window.document().ok_or(ClientError::CanvasNotFound)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into().ok())
            .ok_or(ClientError::CanvasNotFound)?;

        let surface = CanvasSurface::new(canvas)?;
        let config = Config::with_canvas(surface.width(), surface.height());
        log::info!("Starting on a {}x{} canvas", config.canvas_width, config.canvas_height);

        let mut game = Game::new(config, GameRng::from_entropy());
        game.start();
        CLIENT.with(|client| *client.borrow_mut() = Some(Client { game, surface }));

        install_key_listeners(&document)?;
        start_frame_loop(window)?;
        Ok(())
    }

    fn with_game(f: impl FnOnce(&mut Game, Key), key: Key) {
        CLIENT.with(|client| {
            if let Some(client) = client.borrow_mut().as_mut() {
                f(&mut client.game, key);
            }
        });
    }

    fn install_key_listeners(document: &Document) -> Result<(), JsValue> {
        let on_key_down = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            if let Some(key) = input::key_from_name(&evt.key()) {
                with_game(Game::key_down, key);
            }
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        on_key_down.forget();

        let on_key_up = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            if let Some(key) = input::key_from_name(&evt.key()) {
                with_game(Game::key_up, key);
            }
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
        on_key_up.forget();

        Ok(())
    }

    fn request_frame(
        window: &Window,
        callback: &Closure<dyn FnMut(f64)>,
    ) -> Result<i32, JsValue> {
        window.request_animation_frame(callback.as_ref().unchecked_ref())
    }

    fn start_frame_loop(window: Window) -> Result<(), JsValue> {
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = frame.clone();
        let loop_window = window.clone();

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            CLIENT.with(|client| {
                if let Some(Client { game, surface }) = client.borrow_mut().as_mut() {
                    game.tick(surface);
                }
            });

            if let Some(callback) = next.borrow().as_ref() {
                if let Err(err) = request_frame(&loop_window, callback) {
                    log::error!("requestAnimationFrame failed: {:?}", err);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match frame.borrow().as_ref() {
            Some(callback) => request_frame(&window, callback).map(|_| ()),
            None => Ok(()),
        };
        first
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        fn ensure_canvas() {
            let document = web_sys::window().unwrap().document().unwrap();
            if document.get_element_by_id(CANVAS_ID).is_none() {
                let canvas = document.create_element("canvas").unwrap();
                canvas.set_id(CANVAS_ID);
                document.body().unwrap().append_child(&canvas).unwrap();
            }
        }

        fn scene_kind() -> Option<SceneKind> {
            CLIENT.with(|client| client.borrow().as_ref().and_then(|c| c.game.scene_kind()))
        }

        #[wasm_bindgen_test]
        fn test_second_start_keeps_running_game() {
            ensure_canvas();

            start_game().unwrap();
            assert_eq!(scene_kind(), Some(SceneKind::Welcome));
            with_game(Game::key_up, Key::Confirm);
            assert_eq!(scene_kind(), Some(SceneKind::Court));

            start_game().unwrap();
            assert_eq!(scene_kind(), Some(SceneKind::Court), "Game was not replaced");
        }
    }
}
