//! Keyboard, touch and focus listeners feeding the engine's input flags

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

use crate::frame_loop::App;

/// Convert a touch's client X to play-field X, accounting for CSS scaling
fn touch_field_x(canvas: &HtmlCanvasElement, client_x: i32) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    let local = client_x as f64 - rect.left();
    if rect.width() > 0.0 {
        (local * canvas.width() as f64 / rect.width()) as f32
    } else {
        local as f32
    }
}

pub fn setup_input_listeners(
    window: &Window,
    canvas: &HtmlCanvasElement,
    restart_button: &web_sys::Element,
    app: Rc<RefCell<App>>,
) -> Result<(), JsValue> {
    // Keyboard down
    {
        let app = app.clone();
        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let key = e.key();
            let mut app = app.borrow_mut();
            if app.engine.wants_restart(&key) {
                app.restart();
                e.prevent_default();
            } else if app.engine.key_down(&key) {
                // Keep arrows from scrolling the page
                e.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        keydown.forget();
    }

    // Keyboard up
    {
        let app = app.clone();
        let keyup = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            app.borrow_mut().engine.key_up(&e.key());
        }) as Box<dyn FnMut(KeyboardEvent)>);
        window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
        keyup.forget();
    }

    // Touch start - steer toward the touched half
    {
        let app = app.clone();
        let canvas_for_touch = canvas.clone();
        let touchstart = Closure::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            if let Some(touch) = e.touches().get(0) {
                let x = touch_field_x(&canvas_for_touch, touch.client_x());
                app.borrow_mut().engine.touch_start(x);
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        canvas.add_event_listener_with_callback("touchstart", touchstart.as_ref().unchecked_ref())?;
        touchstart.forget();
    }

    // Touch end or cancel - release both directions
    for event in ["touchend", "touchcancel"] {
        let app = app.clone();
        let release = Closure::wrap(Box::new(move |_e: TouchEvent| {
            app.borrow_mut().engine.touch_end();
        }) as Box<dyn FnMut(TouchEvent)>);
        canvas.add_event_listener_with_callback(event, release.as_ref().unchecked_ref())?;
        release.forget();
    }

    // Focus loss - no stuck keys
    {
        let app = app.clone();
        let blur = Closure::wrap(Box::new(move |_e: Event| {
            app.borrow_mut().engine.input_mut().clear();
        }) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;
        blur.forget();
    }

    // Restart button
    {
        let click = Closure::wrap(Box::new(move |_e: MouseEvent| {
            app.borrow_mut().restart();
        }) as Box<dyn FnMut(MouseEvent)>);
        restart_button.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    Ok(())
}
