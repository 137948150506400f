use chrono::{Datelike, Utc};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::{
    CHAPTER_LONG_NAME, CHAPTER_NAME, CONTACT_EMAIL, CONTACT_LOCATION, LOGO_SRC, QUICK_LINKS,
    RESOURCES, SOCIAL_LINKS,
};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub theme: Theme,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    // No backend behind the form; the address only reaches the console.
    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            gloo_console::log!("Newsletter signup:", email.as_str());
            email.set(String::new());
        })
    };

    html! {
        <footer id="contact" class="footer">
            <div class="footer-rule" style={format!("background: linear-gradient(90deg, transparent, {}, transparent);", props.theme.primary_alpha(0.5))}></div>

            <div class="container-custom footer-main">
                <Reveal effect={RevealEffect::FadeUp} class={classes!("footer-brand")}>
                    <a href="#" class="footer-logo">
                        <img src={LOGO_SRC} alt="IEEE Karunya Logo" />
                        <span class="font-display">{CHAPTER_NAME}</span>
                    </a>
                    <p>
                        {"Empowering students to innovate, collaborate, and lead in technology. Join the community shaping tomorrow."}
                    </p>
                    <div class="footer-socials">
                        { for SOCIAL_LINKS.iter().map(|(label, glyph, href)| html! {
                            <a key={*label} href={*href} class="footer-social glass-card" aria-label={*label}>{*glyph}</a>
                        }) }
                    </div>
                </Reveal>

                <Reveal effect={RevealEffect::FadeUp} delay={0.1}>
                    <h3 class="footer-heading font-display">{"Quick Links"}</h3>
                    <ul class="footer-list">
                        { for QUICK_LINKS.iter().map(|link| html! {
                            <li key={link.name}><a href={link.href} class="footer-link">{link.name}</a></li>
                        }) }
                    </ul>
                </Reveal>

                <Reveal effect={RevealEffect::FadeUp} delay={0.2}>
                    <h3 class="footer-heading font-display">{"Resources"}</h3>
                    <ul class="footer-list">
                        { for RESOURCES.iter().map(|link| html! {
                            <li key={link.name}><a href={link.href} class="footer-link">{link.name}</a></li>
                        }) }
                    </ul>
                </Reveal>

                <Reveal effect={RevealEffect::FadeUp} delay={0.3}>
                    <h3 class="footer-heading font-display">{"Stay Updated"}</h3>
                    <p class="footer-note">{"Subscribe for event announcements and chapter news."}</p>
                    <form class="newsletter" onsubmit={onsubmit}>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            required={true}
                            value={(*email).clone()}
                            oninput={oninput}
                        />
                        <button type="submit" class="btn-primary" aria-label="Subscribe">{"➤"}</button>
                    </form>
                    <div class="footer-contact">
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{format!("✉ {}", CONTACT_EMAIL)}</a>
                        <span>{format!("📍 {}", CONTACT_LOCATION)}</span>
                    </div>
                </Reveal>
            </div>

            <div class="container-custom footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", Utc::now().year(), CHAPTER_LONG_NAME)}</span>
                <div class="footer-legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .footer {
                        position: relative;
                        padding-top: 5rem;
                        background: rgba(14, 22, 38, 0.5);
                    }
                    .footer-rule {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 1px;
                    }
                    .footer-main {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1.5fr;
                        gap: 3rem;
                        padding-bottom: 3rem;
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .footer-logo img {
                        width: 2.5rem;
                        height: 2.5rem;
                    }
                    .footer-brand p,
                    .footer-note {
                        color: var(--muted);
                        font-size: 0.875rem;
                        margin-bottom: 1.5rem;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .footer-social {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 10px;
                        color: var(--muted);
                        transition: all 0.3s ease;
                    }
                    .footer-social:hover {
                        color: var(--primary);
                        transform: translateY(-3px);
                        box-shadow: 0 0 16px var(--glow);
                    }
                    .footer-heading {
                        font-size: 1.125rem;
                        margin: 0 0 1.25rem 0;
                    }
                    .footer-list {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .footer-link {
                        color: var(--muted);
                        font-size: 0.875rem;
                        transition: color 0.3s ease, padding-left 0.3s ease;
                    }
                    .footer-link:hover {
                        color: var(--primary);
                        padding-left: 0.25rem;
                    }
                    .newsletter {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .newsletter input {
                        flex: 1;
                        min-width: 0;
                        padding: 0.75rem 1rem;
                        border-radius: 10px;
                        border: 1px solid var(--border);
                        background: rgba(7, 11, 20, 0.6);
                        color: var(--foreground);
                        font-size: 0.875rem;
                    }
                    .newsletter input:focus {
                        outline: none;
                        border-color: var(--primary);
                    }
                    .newsletter button {
                        padding: 0.75rem 1rem;
                        border: none;
                        cursor: pointer;
                    }
                    .footer-contact {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .footer-contact a:hover {
                        color: var(--primary);
                    }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-top: 1.5rem;
                        padding-bottom: 1.5rem;
                        border-top: 1px solid var(--border);
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-legal a:hover {
                        color: var(--primary);
                    }
                    @media (max-width: 1024px) {
                        .footer-main {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 640px) {
                        .footer-main {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
