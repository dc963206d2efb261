// Hooks a BubbleGame into the page: sizes the canvas to the window, forwards
// pointer presses (mouse, touch or pen) and window resizes, and drives `frame` from requestAnimationFrame.
// All callbacks run on the browser's event loop, so a RefCell is enough to share
// the game between them.

use crate::error::GameError;
use crate::BubbleGame;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, PointerEvent, Window};

pub fn start(canvas_id: &str, sound_url: &str) -> Result<(), GameError> {
    let window = web_sys::window().ok_or(GameError::NoWindow)?;
    let document = window.document().ok_or(GameError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| GameError::CanvasNotFound(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::NotACanvas(canvas_id.to_owned()))?;

    let (width, height) = window_size(&window)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let game = BubbleGame::create(canvas.clone(), sound_url, StdRng::from_entropy())?;
    let game = Rc::new(RefCell::new(game));

    listen_pointer_down(&canvas, game.clone())?;
    listen_resize(&window, game.clone())?;
    start_animation_loop(game)?;

    info!("bubble game running on #{}", canvas_id);
    Ok(())
}

fn window_size(window: &Window) -> Result<(u32, u32), GameError> {
    let width = window.inner_width().map_err(GameError::js)?;
    let height = window.inner_height().map_err(GameError::js)?;
    Ok((
        width.as_f64().unwrap_or(0.0) as u32,
        height.as_f64().unwrap_or(0.0) as u32,
    ))
}

pub(crate) const PRESS_EVENT: &str = "pointerdown";

fn listen_pointer_down(canvas: &HtmlCanvasElement, game: Rc<RefCell<BubbleGame>>) -> Result<(), GameError> {
    let closure = Closure::wrap(Box::new(move |event: PointerEvent| {
        game.borrow_mut()
            .pointer_pressed(event.offset_x() as f64, event.offset_y() as f64);
    }) as Box<dyn FnMut(PointerEvent)>);
    canvas
        .add_event_listener_with_callback(PRESS_EVENT, closure.as_ref().unchecked_ref())
        .map_err(GameError::js)?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn listen_resize(window: &Window, game: Rc<RefCell<BubbleGame>>) -> Result<(), GameError> {
    let target = window.clone();
    let closure = Closure::wrap(Box::new(move || match window_size(&target) {
        Ok((width, height)) => game.borrow_mut().resize(width, height),
        Err(err) => warn!("could not read window size: {}", err),
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(GameError::js)?;
    closure.forget();
    Ok(())
}

fn start_animation_loop(game: Rc<RefCell<BubbleGame>>) -> Result<(), GameError> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        game.borrow_mut().frame();

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                warn!("animation loop stopped: {}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    Ok(())
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, GameError> {
    web_sys::window()
        .ok_or(GameError::NoWindow)?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(GameError::js)
}
