use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::{ABOUT_FEATURES, ABOUT_STATS};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub theme: Theme,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id="about" class="section-padding about">
            <div class="about-glow" style={format!("background: {};", props.theme.primary_alpha(0.05))}></div>

            <div class="container-custom about-inner">
                <Reveal effect={RevealEffect::FadeUp} class={classes!("section-header")}>
                    <span class="section-badge glass-card">{"About Us"}</span>
                    <h2>
                        {"Shaping the Future of"}
                        <span class="text-gradient">{" Technology"}</span>
                    </h2>
                    <p>
                        {"IEEE Student Branch at Karunya University is a vibrant community of tech enthusiasts, innovators, and future engineers working together to advance technology for humanity."}
                    </p>
                </Reveal>

                <div class="about-stats">
                    { for ABOUT_STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal key={stat.label} effect={RevealEffect::Scale} delay={index as f64 * 0.1}>
                            <div class="glass-card hover-glow about-stat">
                                <div class="about-stat-value font-display text-gradient">
                                    <AnimatedCounter end={stat.value} suffix={stat.suffix} />
                                </div>
                                <div class="about-stat-label">{stat.label}</div>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <div class="about-features">
                    { for ABOUT_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <Reveal key={feature.title} effect={RevealEffect::FadeUp} delay={0.2 + index as f64 * 0.1}>
                            <div class="glass-card hover-glow about-feature">
                                <div class="about-feature-icon">{feature.icon}</div>
                                <h3 class="font-display">{feature.title}</h3>
                                <p>{feature.description}</p>
                                <div class="about-more">
                                    <span>{"Learn more"}</span>
                                    <span class="about-arrow">{"→"}</span>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .about-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 800px;
                        height: 800px;
                        border-radius: 50%;
                        filter: blur(64px);
                        transform: translate(-50%, -50%);
                        animation: breathe 8s ease-in-out infinite;
                    }
                    @keyframes breathe {
                        0%, 100% { transform: translate(-50%, -50%) scale(1); opacity: 0.3; }
                        50% { transform: translate(-50%, -50%) scale(1.2); opacity: 0.5; }
                    }
                    .about-inner {
                        position: relative;
                        z-index: 1;
                    }
                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 5rem;
                    }
                    .about-stat {
                        padding: 1.5rem;
                        text-align: center;
                        cursor: default;
                    }
                    .about-stat-value {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .about-stat-label {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .about-features {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .about-feature {
                        height: 100%;
                        padding: 1.5rem;
                        box-sizing: border-box;
                        cursor: default;
                    }
                    .about-feature-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        margin-bottom: 1rem;
                        border-radius: 12px;
                        font-size: 1.75rem;
                        background: rgba(0, 229, 255, 0.1);
                        transition: transform 0.5s ease;
                    }
                    .about-feature-icon:hover {
                        transform: rotate(360deg);
                    }
                    .about-feature h3 {
                        font-size: 1.125rem;
                        margin: 0 0 0.5rem 0;
                        transition: color 0.3s ease;
                    }
                    .about-feature:hover h3 {
                        color: var(--primary);
                    }
                    .about-feature p {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .about-more {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 1rem;
                        color: var(--primary);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .about-feature:hover .about-more {
                        opacity: 1;
                    }
                    .about-arrow {
                        animation: nudge 1s ease-in-out infinite;
                    }
                    @keyframes nudge {
                        0%, 100% { transform: translateX(0); }
                        50% { transform: translateX(5px); }
                    }
                    @media (max-width: 1024px) {
                        .about-features {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .about-stats {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .about-features {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
