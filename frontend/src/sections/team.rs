use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::{TeamMember, TEAM};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub theme: Theme,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    // At most one card shows its bio overlay at a time.
    let hovered = use_state(|| None::<usize>);

    html! {
        <section id="team" class="section-padding team">
            <div class="container-custom">
                <Reveal effect={RevealEffect::FadeUp} class={classes!("section-header")}>
                    <span class="section-badge glass-card">{"Leadership"}</span>
                    <h2>{"Meet Our "}<span class="text-gradient">{"Team"}</span></h2>
                    <p>{"The passionate individuals driving innovation and excellence at our chapter"}</p>
                </Reveal>

                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| {
                        let enter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let leave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <Reveal key={member.name} effect={RevealEffect::FadeUp} delay={index as f64 * 0.1}>
                                <div class="team-card glass-card" onmouseenter={enter} onmouseleave={leave}>
                                    { member_card(member, *hovered == Some(index), &props.theme) }
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .team-card {
                        overflow: hidden;
                        transition: transform 0.3s ease;
                    }
                    .team-card:hover {
                        transform: translateY(-10px);
                    }
                    .team-photo {
                        position: relative;
                        aspect-ratio: 1;
                        overflow: hidden;
                    }
                    .team-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .team-card:hover .team-photo img {
                        transform: scale(1.1);
                    }
                    .team-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.5rem;
                        background: linear-gradient(to top, var(--background), rgba(7, 11, 20, 0.8), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .team-overlay.shown {
                        opacity: 1;
                    }
                    .team-overlay p {
                        margin: 0 0 1rem 0;
                        font-size: 0.875rem;
                        color: var(--muted);
                        transform: translateY(20px);
                        transition: transform 0.3s ease;
                    }
                    .team-overlay.shown p {
                        transform: translateY(0);
                    }
                    .team-socials {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .team-social {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 50%;
                        font-size: 0.875rem;
                        transition: transform 0.2s ease, color 0.2s ease;
                    }
                    .team-social:hover {
                        transform: scale(1.15);
                        color: var(--primary);
                    }
                    .team-info {
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .team-info h3 {
                        margin: 0 0 0.25rem 0;
                        font-size: 1.25rem;
                    }
                    .team-role {
                        font-size: 0.875rem;
                    }
                    @media (max-width: 1024px) {
                        .team-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .team-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn member_card(member: &TeamMember, hovered: bool, theme: &Theme) -> Html {
    let socials = [
        ("in", "LinkedIn", member.social.linkedin.to_string()),
        ("𝕏", "Twitter", member.social.twitter.to_string()),
        ("⌥", "GitHub", member.social.github.to_string()),
        ("✉", "Email", member.mailto()),
    ];

    html! {
        <>
            <div class="team-photo">
                <img src={member.image} alt={member.name} />
                <div class={classes!("team-overlay", hovered.then(|| "shown"))}>
                    <p>{member.bio}</p>
                    <div class="team-socials">
                        { for socials.into_iter().map(|(glyph, label, href)| html! {
                            <a key={label} class="team-social glass-card" href={href} aria-label={label}>{glyph}</a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="team-info">
                <h3 class="font-display">{member.name}</h3>
                <span class="team-role" style={format!("color: {};", theme.primary)}>{member.role}</span>
            </div>
        </>
    }
}
