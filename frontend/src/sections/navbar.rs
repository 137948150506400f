use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config::NAV_SCROLL_THRESHOLD;
use crate::content::{LOGO_SRC, NAV_LINKS};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Anchor links keep their default scroll; only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let glow = props.theme.primary_alpha(0.2);

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="container-custom nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-mark">
                        <img src={LOGO_SRC} alt="IEEE Karunya Logo" />
                        <span class="nav-logo-glow" style={format!("background: {};", glow)}></span>
                    </span>
                    <span class="font-display nav-brand">
                        {"IEEE "}<span class="nav-brand-accent">{"Karunya"}</span>
                    </span>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.name} href={link.href} class="nav-link">
                            {link.name}
                            <span class="nav-underline"></span>
                        </a>
                    }) }
                    <a href="#contact" class="btn-primary nav-cta">{"Join Us"}</a>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu glass-card">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a key={link.name} href={link.href} class="mobile-link" onclick={close_menu.clone()}>
                                    {link.name}
                                </a>
                            }) }
                            <a href="#contact" class="btn-primary nav-cta" onclick={close_menu.clone()}>
                                {"Join Us"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: all 0.3s ease;
                        animation: nav-drop 0.6s ease-out;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(14, 22, 38, 0.6);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid var(--border);
                    }
                    @keyframes nav-drop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-logo-mark {
                        position: relative;
                        width: 2rem;
                        height: 2rem;
                    }
                    .nav-logo-mark img {
                        width: 100%;
                        height: 100%;
                        transition: transform 0.3s ease;
                    }
                    .nav-logo:hover .nav-logo-mark img {
                        transform: scale(1.1);
                    }
                    .nav-logo-glow {
                        position: absolute;
                        inset: 0;
                        filter: blur(8px);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .nav-logo:hover .nav-logo-glow {
                        opacity: 1;
                    }
                    .nav-brand {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .nav-brand-accent {
                        color: var(--primary);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        color: var(--muted);
                        font-weight: 500;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: var(--foreground);
                    }
                    .nav-underline {
                        position: absolute;
                        left: 0;
                        bottom: -4px;
                        width: 0;
                        height: 2px;
                        background: var(--primary);
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover .nav-underline {
                        width: 100%;
                    }
                    .nav-cta {
                        padding: 0.625rem 1.5rem;
                        font-size: 0.875rem;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--foreground);
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin: 0.5rem 1rem 0 1rem;
                        padding: 1rem;
                        animation: menu-open 0.25s ease-out;
                    }
                    .mobile-link {
                        color: var(--muted);
                        font-weight: 500;
                        padding: 0.5rem 0;
                    }
                    @keyframes menu-open {
                        from { opacity: 0; transform: scaleY(0.8); }
                        to { opacity: 1; transform: scaleY(1); }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
