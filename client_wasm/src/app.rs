//! Browser wiring: listeners, the animation-frame loop and the session they drive

use crate::dom::{self, Hud};
use crate::input::{handle_keyboard_event, KeyPhase};
use crate::renderer::Renderer;
use game_core::{FrameDriver, Mode, Scoreboard, Session, SessionAction};
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent, Window};

type Shared = Rc<RefCell<App>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Main client state
pub struct App {
    session: Session,
    driver: FrameDriver,
    renderer: Renderer,
    hud: Hud,
}

impl App {
    pub fn new(renderer: Renderer, hud: Hud) -> Self {
        Self {
            session: Session::default(),
            driver: FrameDriver::new(),
            renderer,
            hud,
        }
    }

    /// Apply a button action. Returns true when a new frame loop is needed.
    pub fn dispatch(&mut self, action: SessionAction) -> bool {
        let result = self.session.transition(action);
        self.sync_hud();
        result.success() && action == SessionAction::Start && self.driver.launch()
    }

    /// One animation frame. Returns false once the loop should end.
    pub fn run_frame(&mut self) -> bool {
        let Some(scene) = self.driver.frame(&mut self.session) else {
            return false;
        };
        self.hud.show_scores(&scene.scoreboard);
        if let Err(e) = self.renderer.present(scene) {
            warn!("failed to draw frame: {:?}", e);
        }
        true
    }

    pub fn resize(&mut self, window: &Window) -> Result<(), JsValue> {
        let (width, height) = dom::viewport(window)?;
        if self.renderer.resize(width, height)? {
            debug!("canvas resized to {:?}", self.renderer.size());
        }
        Ok(())
    }

    pub fn key(&mut self, event: &KeyboardEvent, phase: KeyPhase) {
        handle_keyboard_event(event, self.session.controls_mut(), phase);
    }

    fn sync_hud(&mut self) {
        self.hud.show_panel(&self.session.panel());
        self.hud
            .show_scores(&Scoreboard::from_score(&self.session.sim().score));
    }
}

/// Bind to the page and wait for input
pub fn run() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;

    let canvas: HtmlCanvasElement = dom::element_by_id(&document, dom::CANVAS_ID)?;
    let renderer = Renderer::new(canvas)?;
    let hud = Hud::new(&document)?;
    let app: Shared = Rc::new(RefCell::new(App::new(renderer, hud)));

    {
        let mut app = app.borrow_mut();
        app.resize(&window)?;
        app.sync_hud();
    }

    listen_resize(&window, &app)?;
    listen_keys(&document, &app)?;

    let buttons = [
        (dom::TWO_PLAYER_BUTTON_ID, SessionAction::SelectMode(Mode::TwoPlayer)),
        (dom::AI_BUTTON_ID, SessionAction::SelectMode(Mode::VsAi)),
        (dom::START_BUTTON_ID, SessionAction::Start),
        (dom::PAUSE_BUTTON_ID, SessionAction::TogglePause),
        (dom::STOP_BUTTON_ID, SessionAction::Stop),
    ];
    for (id, action) in buttons {
        let button: HtmlButtonElement = dom::element_by_id(&document, id)?;
        listen_click(&button, &app, action)?;
    }

    info!("pong ready");
    Ok(())
}

fn listen_click(
    button: &HtmlButtonElement,
    app: &Shared,
    action: SessionAction,
) -> Result<(), JsValue> {
    let app = app.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let needs_loop = app.borrow_mut().dispatch(action);
        if needs_loop {
            if let Err(e) = launch_loop(&app) {
                error!("failed to start frame loop: {:?}", e);
                app.borrow_mut().driver.cancel();
            }
        }
    });
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    handler.forget();
    Ok(())
}

fn listen_keys(document: &web_sys::Document, app: &Shared) -> Result<(), JsValue> {
    for (kind, phase) in [("keydown", KeyPhase::Down), ("keyup", KeyPhase::Up)] {
        let app = app.clone();
        let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().key(&event, phase);
        });
        document.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}

fn listen_resize(window: &Window, app: &Shared) -> Result<(), JsValue> {
    let app = app.clone();
    let target = window.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        if let Err(e) = app.borrow_mut().resize(&target) {
            warn!("resize failed: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Schedule frames until the driver reports the session stopped. The
/// callback drops itself when the loop ends.
fn launch_loop(app: &Shared) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let pending = callback.clone();
    let app = app.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if !app.borrow_mut().run_frame() {
            let _ = pending.borrow_mut().take();
            return;
        }

        let scheduled = match pending.borrow().as_ref() {
            Some(next) => request_animation_frame(next).map(|_| ()),
            None => Ok(()),
        };
        if let Err(e) = scheduled {
            error!("failed to schedule frame: {:?}", e);
            app.borrow_mut().driver.cancel();
            let _ = pending.borrow_mut().take();
        }
    }));

    let first = match callback.borrow().as_ref() {
        Some(first) => request_animation_frame(first).map(|_| ()),
        None => Ok(()),
    };
    first
}
