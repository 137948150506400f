use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, KeyboardEvent};
use yew::prelude::*;

/// Either nothing, or exactly one record shown in the overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> Selection<T> {
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Shows `item`, replacing whatever was shown before.
    pub fn open(&mut self, item: T) {
        self.current = Some(item);
    }

    pub fn close(&mut self) {
        self.current = None;
    }
}

/// Where a click on the overlay started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The dimmed area around the content.
    Backdrop,
    /// Anywhere inside the content panel, close button excluded.
    Content,
}

pub fn dismisses(origin: ClickOrigin) -> bool {
    origin == ClickOrigin::Backdrop
}

/// Classifies a click that reached the backdrop listener: only clicks whose
/// target is the backdrop element itself count as backdrop clicks. Yew
/// delegates listeners to the app root, so `current_target` cannot be used.
pub fn click_origin(target: Option<EventTarget>, backdrop: Option<Element>) -> ClickOrigin {
    match (target, backdrop) {
        (Some(target), Some(backdrop)) if &target == AsRef::<EventTarget>::as_ref(&backdrop) => {
            ClickOrigin::Backdrop
        }
        _ => ClickOrigin::Content,
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Full-screen overlay around `children`. Closes on the close button, a
/// backdrop click or Escape; clicks inside the panel never close it.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let backdrop = use_node_ref();

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            if dismisses(click_origin(e.target(), backdrop.cast::<Element>())) {
                on_close.emit(());
            }
        })
    };

    let on_content = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div ref={backdrop} class="lightbox-backdrop" onclick={on_backdrop}>
            <div class="lightbox-panel glass-card neon-border" onclick={on_content}>
                <button class="lightbox-close" aria-label="Close" onclick={on_close_button}>{"✕"}</button>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                    .lightbox-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(7, 11, 20, 0.9);
                        backdrop-filter: blur(24px);
                        animation: lightbox-fade 0.25s ease-out;
                    }
                    .lightbox-panel {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        overflow: hidden;
                        animation: lightbox-in 0.35s cubic-bezier(0.25, 0.4, 0.25, 1);
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 10;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: none;
                        cursor: pointer;
                        color: var(--foreground);
                        background: rgba(7, 11, 20, 0.8);
                        transition: transform 0.3s ease;
                    }
                    .lightbox-close:hover {
                        transform: scale(1.1) rotate(90deg);
                    }
                    @keyframes lightbox-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes lightbox-in {
                        from { opacity: 0; transform: scale(0.9) rotateX(-15deg); }
                        to { opacity: 1; transform: scale(1) rotateX(0); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What the gallery does with an overlay click.
    fn overlay_click<T>(selection: &mut Selection<T>, origin: ClickOrigin) {
        if dismisses(origin) {
            selection.close();
        }
    }

    #[test]
    fn starts_closed() {
        let selection: Selection<u32> = Selection::default();
        assert!(!selection.is_open());
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn backdrop_click_clears_selection() {
        let mut selection = Selection::default();
        selection.open("RoboWars");
        overlay_click(&mut selection, ClickOrigin::Backdrop);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn content_click_keeps_selection() {
        let mut selection = Selection::default();
        selection.open("RoboWars");
        overlay_click(&mut selection, ClickOrigin::Content);
        assert_eq!(selection.get(), Some(&"RoboWars"));
    }

    #[test]
    fn opening_another_record_replaces_the_first() {
        let mut selection = Selection::default();
        selection.open(1);
        selection.open(2);
        assert_eq!(selection.get(), Some(&2));
    }

    #[test]
    fn explicit_close_clears() {
        let mut selection = Selection::default();
        selection.open(7);
        selection.close();
        assert!(!selection.is_open());
    }

    #[test]
    fn missing_target_or_backdrop_is_never_a_backdrop_click() {
        assert_eq!(click_origin(None, None), ClickOrigin::Content);
    }
}
