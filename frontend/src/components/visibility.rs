use js_sys::Array;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// A flag that can be raised once and never lowered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    pub fn is_set(&self) -> bool {
        self.fired
    }

    /// Feeds one observation into the latch. Returns `true` only for the
    /// observation that raised it.
    pub fn observe(&mut self, seen: bool) -> bool {
        if self.fired || !seen {
            return false;
        }
        self.fired = true;
        true
    }
}

/// True once the referenced element has intersected the viewport (shrunk or
/// grown by `root_margin`). Never returns to false for the life of the
/// component.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let latch = use_state(OnceLatch::default);

    {
        let setter = latch.setter();
        let fired = latch.is_set();
        use_effect_with_deps(
            move |(node, fired)| {
                let mut teardown: Option<(IntersectionObserver, Closure<dyn FnMut(Array)>)> = None;

                if !*fired {
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        let callback = Closure::<dyn FnMut(Array)>::new({
                            let setter = setter.clone();
                            let mut local = OnceLatch::default();
                            move |entries: Array| {
                                let seen = entries.iter().any(|entry| {
                                    entry
                                        .dyn_into::<IntersectionObserverEntry>()
                                        .map(|entry| entry.is_intersecting())
                                        .unwrap_or(false)
                                });
                                if local.observe(seen) {
                                    setter.set(local);
                                }
                            }
                        });

                        let mut options = IntersectionObserverInit::new();
                        options.root_margin(root_margin);

                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                teardown = Some((observer, callback));
                            }
                            Err(err) => {
                                warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
                                let mut shown = OnceLatch::default();
                                shown.observe(true);
                                setter.set(shown);
                            }
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            (node, fired),
        );
    }

    latch.is_set()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_lowered() {
        assert!(!OnceLatch::default().is_set());
    }

    #[test]
    fn misses_do_not_raise_the_latch() {
        let mut latch = OnceLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.is_set());
    }

    #[test]
    fn first_hit_raises_and_reports_once() {
        let mut latch = OnceLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_set());
        assert!(!latch.observe(true));
    }

    #[test]
    fn latch_never_lowers_after_leaving_view() {
        let mut latch = OnceLatch::default();
        latch.observe(true);
        latch.observe(false);
        latch.observe(false);
        assert!(latch.is_set());
    }
}
