use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use yew::prelude::*;
use yew_hooks::use_visible;

use crate::counter::{format_count, CounterEngine};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u64,
    /// Animation length in seconds.
    #[prop_or(2.0)]
    pub duration: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A stat number that counts up from 0 once it scrolls into view.
///
/// Visibility comes from an IntersectionObserver behind `use_visible`; the
/// count itself is advanced by a requestAnimationFrame loop feeding real
/// timestamps into [`CounterEngine`]. The animation fires once per mount and
/// the pending frame is cancelled if the component unmounts mid-count. When
/// no frame scheduler is available the display jumps straight to the target
/// instead of sitting at 0.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible(node.clone(), false);
    let display = use_state(|| 0u64);

    let engine = {
        let target = props.target;
        let duration = props.duration;
        use_mut_ref(move || CounterEngine::new(target, duration * 1000.0))
    };
    let raf_id = use_mut_ref(|| None::<i32>);
    let frame = use_mut_ref(|| None::<Closure<dyn FnMut()>>);

    // Start on the first false->true transition (or true at mount). Later
    // visibility changes re-run this effect but the engine ignores them, so
    // a section scrolling in and out cannot restart or kill the animation.
    {
        let engine = engine.clone();
        let display = display.clone();
        let raf_id = raf_id.clone();
        let frame = frame.clone();
        use_effect_with(visible, move |&visible| {
                if visible && !engine.borrow().has_started() {
                    engine.borrow_mut().start(js_sys::Date::now());
                    if engine.borrow().is_done() {
                        display.set(engine.borrow().value());
                    } else {
                        let cb = {
                            let engine = engine.clone();
                            let display = display.clone();
                            let raf_id = raf_id.clone();
                            let frame = frame.clone();
                            Closure::wrap(Box::new(move || {
                                let more = engine.borrow_mut().tick(js_sys::Date::now());
                                display.set(engine.borrow().value());
                                if more {
                                    if let Some(id) = request_frame(&frame) {
                                        raf_id.replace(Some(id));
                                        return;
                                    }
                                    // scheduler went away mid-count
                                    engine.borrow_mut().finish();
                                    display.set(engine.borrow().value());
                                }
                                raf_id.replace(None);
                            }) as Box<dyn FnMut()>)
                        };
                        frame.replace(Some(cb));
                        match request_frame(&frame) {
                            Some(id) => {
                                raf_id.replace(Some(id));
                            }
                            None => {
                                engine.borrow_mut().finish();
                                display.set(engine.borrow().value());
                            }
                        }
                    }
                }
                || ()
        });
    }

    // Unmount: cancel the in-flight frame so nothing mutates torn-down state.
    {
        let raf_id = raf_id.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(id) = raf_id.borrow_mut().take() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
                frame.borrow_mut().take();
            }
        });
    }

    html! {
        <span ref={node}>{ format_count(*display, &props.suffix) }</span>
    }
}

fn request_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web_sys::window()?;
    let cell = frame.borrow();
    let cb = cell.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}
