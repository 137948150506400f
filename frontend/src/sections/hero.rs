use yew::prelude::*;

use crate::components::animated_button::{AnimatedButton, ButtonVariant};
use crate::content::{CHAPTER_LONG_NAME, HERO_STATS};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub theme: Theme,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = props.theme;

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-overlay"></div>
            <div class="orb" style={format!("top: 25%; left: 25%; background: {};", theme.primary_alpha(0.2))}></div>
            <div class="orb" style={format!("bottom: 25%; right: 25%; animation-delay: 1s; background: {};", theme.accent_alpha(0.2))}></div>

            <div class="container-custom hero-content">
                <div class="hero-badge glass-card rise" style="animation-delay: 0s;">
                    <span class="hero-badge-dot"></span>
                    <span>{CHAPTER_LONG_NAME.replace(", ", " • ")}</span>
                </div>

                <h1 class="hero-title font-display rise" style="animation-delay: 0.2s;">
                    {"Innovate."}
                    <span class="text-gradient">{" Engineer."}</span>
                    <br />
                    <span class="text-gradient">{"Excel."}</span>
                </h1>

                <p class="hero-subtitle rise" style="animation-delay: 0.4s;">
                    {"Empowering future engineers through technology, innovation, and collaboration. Join the largest technical community at Karunya University."}
                </p>

                <div class="hero-cta-group rise" style="animation-delay: 0.6s;">
                    <AnimatedButton href="#contact">{"Join Our Chapter 👥"}</AnimatedButton>
                    <AnimatedButton href="#events" variant={ButtonVariant::Outline}>{"▶ Watch Highlights"}</AnimatedButton>
                </div>

                <div class="hero-stats rise" style="animation-delay: 0.8s;">
                    { for HERO_STATS.iter().map(|(icon, value, label)| html! {
                        <div key={*label} class="hero-stat">
                            <div class="hero-stat-icon glass-card">{*icon}</div>
                            <div class="hero-stat-value font-display text-gradient">{*value}</div>
                            <div class="hero-stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <a href="#about" class="scroll-indicator">
                <span>{"Scroll to explore"}</span>
                <span class="scroll-chevron">{"⌄"}</span>
            </a>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-image: url('https://images.unsplash.com/photo-1518770660439-4636190af475?w=1600&q=80');
                        background-size: cover;
                        background-position: center;
                        opacity: 0.4;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(7, 11, 20, 0.8), rgba(7, 11, 20, 0.6), var(--background));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        max-width: 64rem;
                    }
                    .rise {
                        animation: rise 0.8s ease-out both;
                    }
                    @keyframes rise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 2rem;
                        border-radius: 999px;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .hero-badge-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: var(--primary);
                        animation: pulse-glow 2s ease-in-out infinite;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 8vw, 6rem);
                        line-height: 1.1;
                        margin: 0 0 1.5rem 0;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: var(--muted);
                        max-width: 42rem;
                        margin: 0 auto 3rem auto;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 4rem;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .hero-stat-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        margin-bottom: 0.75rem;
                        border-radius: 12px;
                        transition: box-shadow 0.3s ease;
                    }
                    .hero-stat:hover .hero-stat-icon {
                        box-shadow: 0 0 0 1px var(--primary), 0 0 24px var(--glow);
                    }
                    .hero-stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .hero-stat-label {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: var(--muted);
                        animation: rise 0.6s ease-out 1.5s both;
                    }
                    .scroll-indicator:hover {
                        color: var(--primary);
                    }
                    .scroll-chevron {
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(6px); }
                    }
                "#}
            </style>
        </header>
    }
}
