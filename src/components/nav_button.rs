use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, HtmlElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    /// Gradient call-to-action styling instead of the plain link look.
    #[prop_or(false)]
    pub special: bool,
    #[prop_or(false)]
    pub mobile: bool,
}

/// Nav button with the ripple/click-tone affordances. Both effects are
/// cosmetic: if the DOM or audio calls fail the click callback still fires.
#[function_component(NavButton)]
pub fn nav_button(props: &NavButtonProps) -> Html {
    let button_ref = use_node_ref();

    let handle_click = {
        let button_ref = button_ref.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = button_ref.cast::<HtmlElement>() {
                let _ = spawn_ripple(&button, &e);
            }
            if play_click_tone().is_err() {
                log!("audio not supported");
            }
            if let Some(onclick) = &onclick {
                onclick.emit(());
            }
        })
    };

    let mut class = classes!("nav-button");
    if props.special {
        class.push("nav-button-special");
    }
    if props.mobile {
        class.push("nav-button-mobile");
    }

    html! {
        <button ref={button_ref} {class} onclick={handle_click}>
            { for props.children.iter() }
        </button>
    }
}

/// Appends a `span.nav-ripple` sized to the button at the click point and
/// removes it again once the 600ms ripple animation has played out.
fn spawn_ripple(button: &HtmlElement, e: &MouseEvent) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let rect = button.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = e.client_x() as f64 - rect.left() - size / 2.0;
    let y = e.client_y() as f64 - rect.top() - size / 2.0;

    let ripple = document.create_element("span")?;
    ripple.set_class_name("nav-ripple");
    ripple.set_attribute(
        "style",
        &format!("width: {size}px; height: {size}px; left: {x}px; top: {y}px;"),
    )?;
    button.append_child(&ripple)?;

    Timeout::new(600, move || {
        ripple.remove();
    })
    .forget();

    Ok(())
}

/// Short descending blip: 600Hz falling to 200Hz over 100ms at low gain.
fn play_click_tone() -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let t = ctx.current_time();
    oscillator.frequency().set_value_at_time(600.0, t)?;
    oscillator
        .frequency()
        .exponential_ramp_to_value_at_time(200.0, t + 0.1)?;

    gain.gain().set_value_at_time(0.05, t)?;
    gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.1)?;

    oscillator.start_with_when(t)?;
    oscillator.stop_with_when(t + 0.1)?;

    Ok(())
}
