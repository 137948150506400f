use yew::prelude::*;

use crate::components::animated_button::{AnimatedButton, ButtonVariant};
use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::{CONTACT_EMAIL, CTA_STATS};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub theme: Theme,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let theme = props.theme;

    html! {
        <section class="section-padding cta">
            <div class="cta-backdrop" style={format!("background: linear-gradient(135deg, {}, transparent, {});", theme.primary_alpha(0.1), theme.accent_alpha(0.1))}></div>
            <div class="orb" style={format!("top: 0; left: 25%; background: {};", theme.primary_alpha(0.2))}></div>
            <div class="orb" style={format!("bottom: 0; right: 25%; animation-delay: 2s; background: {};", theme.accent_alpha(0.2))}></div>

            <div class="container-custom cta-inner">
                <Reveal effect={RevealEffect::Scale}>
                    <div class="glass-card neon-border cta-card">
                        <div class="cta-icon">{"✦"}</div>
                        <h2 class="font-display">
                            {"Ready to "}<span class="text-gradient">{"Shape the Future"}</span>{"?"}
                        </h2>
                        <p>
                            {"Join a global network of innovators. Build projects, attend world-class events, and grow with peers who share your passion for technology."}
                        </p>
                        <div class="cta-actions">
                            <AnimatedButton href="#contact">{"Become a Member →"}</AnimatedButton>
                            <AnimatedButton href={format!("mailto:{}", CONTACT_EMAIL)} variant={ButtonVariant::Ghost}>
                                {"Contact Us"}
                            </AnimatedButton>
                        </div>
                        <div class="cta-stats">
                            { for CTA_STATS.iter().enumerate().map(|(index, (value, label))| html! {
                                <Reveal key={*label} effect={RevealEffect::FadeUp} delay={0.3 + index as f64 * 0.1}>
                                    <div class="cta-stat-value font-display text-gradient">{*value}</div>
                                    <div class="cta-stat-label">{*label}</div>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .cta-backdrop {
                        position: absolute;
                        inset: 0;
                    }
                    .cta-inner {
                        position: relative;
                        z-index: 1;
                    }
                    .cta-card {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        text-align: center;
                    }
                    .cta-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1.5rem;
                        border-radius: 16px;
                        font-size: 2rem;
                        color: var(--primary-foreground);
                        background: var(--gradient);
                        animation: pulse-glow 2s ease-in-out infinite;
                    }
                    .cta-card h2 {
                        font-size: clamp(2rem, 5vw, 3rem);
                        margin: 0 0 1.5rem 0;
                    }
                    .cta-card p {
                        font-size: 1.125rem;
                        color: var(--muted);
                        max-width: 40rem;
                        margin: 0 auto 2.5rem auto;
                    }
                    .cta-actions {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .cta-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                    }
                    .cta-stat-value {
                        font-size: 1.875rem;
                        font-weight: 700;
                    }
                    .cta-stat-label {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    @media (max-width: 768px) {
                        .cta-stats {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
