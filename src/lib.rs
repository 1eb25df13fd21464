mod app;
mod assets;
mod draw;
mod net;

use std::{cell::RefCell, rc::Rc};

use app::App;
use net::{fetch, request_content};
use shared::Point;
use wasm_bindgen::{prelude::*, JsCast};

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

/// Resizes the canvas backing store to the viewport at the device pixel
/// ratio and reports the viewport in CSS pixels.
fn fit_canvas(canvas: &web_sys::HtmlCanvasElement) -> Point {
    let dpr = window().device_pixel_ratio();
    let width = window()
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_default();
    let height = window()
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_default();

    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);

    Point(width, height)
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let canvas = document()
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let container_element = document().query_selector(&"main").unwrap().unwrap();
    container_element.append_child(&canvas)?;

    let viewport = fit_canvas(&canvas);

    let context = canvas
        .get_context("2d")?
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    let app = App::new();
    let app = Rc::new(RefCell::new(app));

    app.borrow_mut().relayout(viewport);

    let content_closure = {
        let app = app.clone();

        Closure::<dyn FnMut(JsValue)>::new(move |value| {
            app.borrow_mut().on_content_response(value);
        })
    };

    fetch(&request_content()).then(&content_closure);
    content_closure.forget();

    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let app = app.clone();
        let mut last_time = window()
            .performance()
            .map(|performance| performance.now())
            .unwrap_or_default();

        *g.borrow_mut() = Some(Closure::new(move || {
            let now = window()
                .performance()
                .map(|performance| performance.now())
                .unwrap_or_default();
            let delta_ms = now - last_time;
            last_time = now;

            {
                let mut app = app.borrow_mut();

                app.tick(delta_ms);
                app.draw(&context).unwrap();
            }

            request_animation_frame(f.borrow().as_ref().unwrap());
        }));

        request_animation_frame(g.borrow().as_ref().unwrap());
    }

    let canvas = Rc::new(canvas);
    let bound: Rc<RefCell<Option<web_sys::DomRect>>> =
        Rc::new(RefCell::new(Some(canvas.get_bounding_client_rect())));

    {
        let app = app.clone();
        let canvas = canvas.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            let viewport = fit_canvas(&canvas);
            bound.replace(Some(canvas.get_bounding_client_rect()));
            app.borrow_mut().relayout(viewport);
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            app.borrow_mut().on_mouse_down(event);
        });
        document()
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            app.borrow_mut().on_mouse_up(event);
        });
        document().add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let bound = bound.borrow();

            if let Some(bound) = bound.as_ref() {
                app.borrow_mut().on_mouse_move(bound, event);
            }
        });
        document()
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::MouseEvent| {
            app.borrow_mut().on_mouse_leave();
        });
        document()
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::WheelEvent| {
            app.borrow_mut().on_wheel(event);
        });
        document().add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
            let bound = bound.borrow();

            if let Some(bound) = bound.as_ref() {
                app.borrow_mut().on_touch_start(bound, event);
            }
        });
        document()
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
            let bound = bound.borrow();

            if let Some(bound) = bound.as_ref() {
                app.borrow_mut().on_touch_move(bound, event);
            }
        });
        document()
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
            app.borrow_mut().on_touch_end(event);
        });
        document()
            .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            app.borrow_mut().on_key_down(event);
        });
        document()
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
