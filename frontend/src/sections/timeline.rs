use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::MILESTONES;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub theme: Theme,
}

/// Even entries sit on the left of the spine and slide in from the left.
fn entry_effect(index: usize) -> RevealEffect {
    if index % 2 == 0 {
        RevealEffect::FadeLeft
    } else {
        RevealEffect::FadeRight
    }
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <section id="timeline" class="section-padding timeline">
            <div class="timeline-glow" style={format!("background: {};", props.theme.accent_alpha(0.05))}></div>

            <div class="container-custom timeline-inner">
                <Reveal effect={RevealEffect::FadeUp} class={classes!("section-header")}>
                    <span class="section-badge glass-card">{"Our Journey"}</span>
                    <h2>{"A Legacy of "}<span class="text-gradient">{"Excellence"}</span></h2>
                    <p>{"Over a decade of innovation, growth, and achievements"}</p>
                </Reveal>

                <div class="timeline-track">
                    <div class="timeline-spine"></div>
                    { for MILESTONES.iter().enumerate().map(|(index, milestone)| {
                        let left = index % 2 == 0;
                        html! {
                            <div key={milestone.year} class={classes!("timeline-row", (!left).then(|| "flipped"))}>
                                <Reveal effect={entry_effect(index)} delay={index as f64 * 0.1} class={classes!("timeline-side")}>
                                    <div class="glass-card hover-glow timeline-card">
                                        <span class="timeline-year font-display text-gradient">{milestone.year}</span>
                                        <h3 class="font-display">{milestone.title}</h3>
                                        <p>{milestone.description}</p>
                                    </div>
                                </Reveal>
                                <div class="timeline-node">
                                    <span class="timeline-icon">{milestone.icon}</span>
                                </div>
                                <div class="timeline-side"></div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .timeline-glow {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 600px;
                        height: 600px;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .timeline-inner {
                        position: relative;
                        z-index: 1;
                    }
                    .timeline-track {
                        position: relative;
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .timeline-spine {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 50%;
                        width: 2px;
                        transform: translateX(-50%);
                        background: linear-gradient(to bottom, var(--primary), var(--accent), var(--primary));
                        opacity: 0.4;
                    }
                    .timeline-row {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .timeline-row.flipped {
                        flex-direction: row-reverse;
                    }
                    .timeline-side {
                        flex: 1;
                    }
                    .timeline-row .timeline-card {
                        text-align: right;
                    }
                    .timeline-row.flipped .timeline-card {
                        text-align: left;
                    }
                    .timeline-card {
                        padding: 1.5rem;
                    }
                    .timeline-year {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .timeline-card h3 {
                        margin: 0.5rem 0;
                        font-size: 1.25rem;
                    }
                    .timeline-card p {
                        margin: 0;
                        color: var(--muted);
                    }
                    .timeline-node {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        background: var(--card);
                        border: 2px solid var(--primary);
                        box-shadow: 0 0 24px var(--glow);
                        transition: transform 0.3s ease;
                    }
                    .timeline-row:hover .timeline-node {
                        transform: scale(1.15);
                    }
                    .timeline-icon {
                        font-size: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .timeline-spine {
                            left: 1.75rem;
                        }
                        .timeline-row,
                        .timeline-row.flipped {
                            flex-direction: row-reverse;
                        }
                        .timeline-row .timeline-card,
                        .timeline-row.flipped .timeline-card {
                            text-align: left;
                        }
                        .timeline-side:empty {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_alternate_sides() {
        let effects: Vec<_> = (0..4).map(entry_effect).collect();
        assert_eq!(
            effects,
            vec![
                RevealEffect::FadeLeft,
                RevealEffect::FadeRight,
                RevealEffect::FadeLeft,
                RevealEffect::FadeRight,
            ]
        );
    }
}
