use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor styled as a button, with a looping shimmer sweep.
#[function_component(AnimatedButton)]
pub fn animated_button(props: &AnimatedButtonProps) -> Html {
    html! {
        <a href={props.href.clone()} class={classes!(props.variant.class(), props.class.clone())}>
            <span class="shimmer"></span>
            <span class="btn-label">{ for props.children.iter() }</span>
            <style>
                {r#"
                    .btn-label {
                        position: relative;
                        z-index: 1;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                "#}
            </style>
        </a>
    }
}
