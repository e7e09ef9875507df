use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub src: String,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub caption: Option<String>,
    /// Hides the previous/next controls for single image sequences.
    pub has_neighbours: bool,
    pub on_close: Callback<()>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Prev,
    Next,
}

/// Maps a `KeyboardEvent::key` value to a lightbox command.
pub fn key_command(key: &str, has_neighbours: bool) -> Option<LightboxKey> {
    match key {
        "Escape" => Some(LightboxKey::Close),
        "ArrowLeft" if has_neighbours => Some(LightboxKey::Prev),
        "ArrowRight" if has_neighbours => Some(LightboxKey::Next),
        _ => None,
    }
}

/// Full-screen overlay showing one image of a sequence.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    // Parents rebuild their callbacks every render; the listener reads the latest ones
    let handlers = use_mut_ref(|| (props.on_close.clone(), props.on_prev.clone(), props.on_next.clone()));
    *handlers.borrow_mut() = (props.on_close.clone(), props.on_prev.clone(), props.on_next.clone());

    {
        let handlers = handlers.clone();
        use_effect_with_deps(
            move |has_neighbours: &bool| {
                let has_neighbours = *has_neighbours;
                let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let callback = key_command(&e.key(), has_neighbours).map(|command| {
                        let handlers = handlers.borrow();
                        match command {
                            LightboxKey::Close => handlers.0.clone(),
                            LightboxKey::Prev => handlers.1.clone(),
                            LightboxKey::Next => handlers.2.clone(),
                        }
                    });
                    if let Some(callback) = callback {
                        callback.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.has_neighbours,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let step = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(());
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox-backdrop" onclick={close.clone()}>
            <button class="lightbox-close" aria-label="Close" onclick={close}>{"×"}</button>
            if props.has_neighbours {
                <button class="lightbox-prev" aria-label="Previous image" onclick={step(&props.on_prev)}>{"‹"}</button>
            }
            <figure class="lightbox-figure" onclick={stop}>
                <img src={props.src.clone()} alt={props.caption.clone().unwrap_or_default()} />
                if props.title.is_some() || props.caption.is_some() {
                    <figcaption>
                        if let Some(title) = &props.title {
                            <strong>{ title }</strong>
                        }
                        if let Some(caption) = &props.caption {
                            <span>{ caption }</span>
                        }
                    </figcaption>
                }
            </figure>
            if props.has_neighbours {
                <button class="lightbox-next" aria-label="Next image" onclick={step(&props.on_next)}>{"›"}</button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_only_step_through_multi_image_sequences() {
        assert_eq!(key_command("Escape", false), Some(LightboxKey::Close));
        assert_eq!(key_command("ArrowLeft", false), None);
        assert_eq!(key_command("ArrowRight", false), None);

        assert_eq!(key_command("ArrowLeft", true), Some(LightboxKey::Prev));
        assert_eq!(key_command("ArrowRight", true), Some(LightboxKey::Next));
        assert_eq!(key_command("Enter", true), None);
    }
}
