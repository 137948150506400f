use yew::prelude::*;

use super::visibility::use_in_view;
use crate::config::REVEAL_MARGIN;

const EASING: &str = "cubic-bezier(0.25, 0.4, 0.25, 1)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealEffect {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    Scale,
    Blur,
    Split,
}

impl RevealEffect {
    /// Start-of-transition style. Every effect also starts fully transparent.
    pub fn hidden_style(self) -> &'static str {
        match self {
            RevealEffect::FadeUp => "opacity: 0; transform: translateY(80px);",
            RevealEffect::FadeLeft => "opacity: 0; transform: translateX(-100px);",
            RevealEffect::FadeRight => "opacity: 0; transform: translateX(100px);",
            RevealEffect::Scale => "opacity: 0; transform: scale(0.5);",
            RevealEffect::Blur => "opacity: 0; filter: blur(20px);",
            RevealEffect::Split => "opacity: 0; transform: translateY(50px) rotateX(-90deg);",
        }
    }

    /// Neutral end state the hidden style transitions back to.
    pub fn visible_style(self) -> &'static str {
        match self {
            RevealEffect::FadeUp | RevealEffect::FadeLeft | RevealEffect::FadeRight => {
                "opacity: 1; transform: translate(0, 0);"
            }
            RevealEffect::Scale => "opacity: 1; transform: scale(1);",
            RevealEffect::Blur => "opacity: 1; filter: blur(0px);",
            RevealEffect::Split => "opacity: 1; transform: translateY(0) rotateX(0deg);",
        }
    }

    fn transitioned_properties(self) -> &'static str {
        match self {
            RevealEffect::Blur => "opacity, filter",
            _ => "opacity, transform",
        }
    }

    /// Full inline style for the wrapper in the given visibility state.
    pub fn style(self, visible: bool, delay: f64, duration: f64) -> String {
        let state = if visible {
            self.visible_style()
        } else {
            self.hidden_style()
        };
        format!(
            "{} transition-property: {}; transition-duration: {}s; transition-delay: {}s; transition-timing-function: {};",
            state,
            self.transitioned_properties(),
            duration,
            delay,
            EASING
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub effect: RevealEffect,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.8)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Holds its children in the effect's hidden state until they first scroll
/// into view, then transitions them to the neutral state.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), REVEAL_MARGIN);
    let style = props.effect.style(visible, props.delay, props.duration);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={style}
            data-revealed={visible.to_string()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RevealEffect; 6] = [
        RevealEffect::FadeUp,
        RevealEffect::FadeLeft,
        RevealEffect::FadeRight,
        RevealEffect::Scale,
        RevealEffect::Blur,
        RevealEffect::Split,
    ];

    #[test]
    fn hidden_states_are_transparent_and_visible_states_opaque() {
        for effect in ALL {
            assert!(effect.hidden_style().starts_with("opacity: 0;"), "{:?}", effect);
            assert!(effect.visible_style().starts_with("opacity: 1;"), "{:?}", effect);
        }
    }

    #[test]
    fn horizontal_fades_start_on_opposite_sides() {
        assert!(RevealEffect::FadeLeft.hidden_style().contains("translateX(-100px)"));
        assert!(RevealEffect::FadeRight.hidden_style().contains("translateX(100px)"));
    }

    #[test]
    fn blur_transitions_the_filter_not_the_transform() {
        let style = RevealEffect::Blur.style(false, 0.0, 0.8);
        assert!(style.contains("blur(20px)"));
        assert!(style.contains("transition-property: opacity, filter;"));
    }

    #[test]
    fn style_carries_delay_and_duration() {
        let style = RevealEffect::Scale.style(true, 0.2, 0.5);
        assert!(style.starts_with("opacity: 1; transform: scale(1);"));
        assert!(style.contains("transition-duration: 0.5s;"));
        assert!(style.contains("transition-delay: 0.2s;"));
    }

    #[test]
    fn default_effect_is_fade_up() {
        assert_eq!(RevealEffect::default(), RevealEffect::FadeUp);
    }
}
