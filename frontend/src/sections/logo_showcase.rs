use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::{LOGO_SRC, SHOWCASE_FEATURES};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct LogoShowcaseProps {
    pub theme: Theme,
}

/// Decorative spinning logo next to a short pitch. The rotation is pure CSS.
#[function_component(LogoShowcase)]
pub fn logo_showcase(props: &LogoShowcaseProps) -> Html {
    let theme = props.theme;

    html! {
        <section class="section-padding logo-showcase">
            <div class="orb drift" style={format!("top: 25%; right: 25%; background: {};", theme.primary_alpha(0.1))}></div>
            <div class="orb drift reverse" style={format!("bottom: 25%; left: 25%; background: {};", theme.accent_alpha(0.1))}></div>

            <div class="container-custom showcase-grid">
                <div>
                    <Reveal effect={RevealEffect::FadeLeft}>
                        <span class="section-badge glass-card">{"Interactive Experience"}</span>
                    </Reveal>
                    <Reveal effect={RevealEffect::FadeUp} delay={0.1}>
                        <h2 class="font-display showcase-title">
                            {"Explore the Future of"}
                            <span class="text-gradient showcase-title-accent">{"Engineering"}</span>
                        </h2>
                    </Reveal>
                    <Reveal effect={RevealEffect::FadeUp} delay={0.2}>
                        <p class="showcase-copy">
                            {"From circuits to code, our members build the technology that connects the world. Hover over the emblem and see what drives us."}
                        </p>
                    </Reveal>
                    <div class="showcase-features">
                        { for SHOWCASE_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <Reveal key={feature.title} effect={RevealEffect::FadeLeft} delay={0.3 + index as f64 * 0.1}>
                                <div class="glass-card showcase-feature">
                                    <span class="showcase-feature-icon">{feature.icon}</span>
                                    <div>
                                        <h3>{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>

                <Reveal effect={RevealEffect::Scale} delay={0.2}>
                    <div class="logo-stage">
                        <div class="logo-ring" style={format!("border-color: {};", theme.primary_alpha(0.3))}></div>
                        <div class="logo-ring outer" style={format!("border-color: {};", theme.accent_alpha(0.2))}></div>
                        <img class="logo-spinner" src={LOGO_SRC} alt="Chapter emblem" />
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .logo-showcase {
                        background: linear-gradient(to bottom, var(--background), rgba(14, 22, 38, 0.3), var(--background));
                    }
                    .drift {
                        animation: drift 8s ease-in-out infinite;
                    }
                    .drift.reverse {
                        animation-direction: reverse;
                        animation-duration: 10s;
                    }
                    @keyframes drift {
                        0%, 100% { transform: translate(0, 0); }
                        50% { transform: translate(50px, -30px); }
                    }
                    .showcase-grid {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .showcase-title {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin: 0 0 1.5rem 0;
                    }
                    .showcase-title-accent {
                        display: block;
                    }
                    .showcase-copy {
                        font-size: 1.125rem;
                        color: var(--muted);
                        margin-bottom: 2rem;
                    }
                    .showcase-features {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .showcase-feature {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        transition: transform 0.3s ease;
                    }
                    .showcase-feature:hover {
                        transform: translateX(10px);
                    }
                    .showcase-feature-icon {
                        font-size: 1.75rem;
                    }
                    .showcase-feature h3 {
                        margin: 0;
                        font-size: 1rem;
                    }
                    .showcase-feature p {
                        margin: 0.25rem 0 0 0;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .logo-stage {
                        position: relative;
                        height: 420px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        perspective: 800px;
                    }
                    .logo-ring {
                        position: absolute;
                        width: 280px;
                        height: 280px;
                        border: 2px solid;
                        border-radius: 50%;
                        animation: ring-spin 12s linear infinite;
                    }
                    .logo-ring.outer {
                        width: 360px;
                        height: 360px;
                        animation-direction: reverse;
                        animation-duration: 18s;
                    }
                    .logo-spinner {
                        width: 200px;
                        height: 200px;
                        transform-style: preserve-3d;
                        animation: logo-spin 10s linear infinite;
                        filter: drop-shadow(0 0 24px var(--glow));
                    }
                    .logo-stage:hover .logo-spinner {
                        animation-duration: 3s;
                    }
                    @keyframes logo-spin {
                        from { transform: rotateY(0deg) rotateX(10deg); }
                        to { transform: rotateY(360deg) rotateX(10deg); }
                    }
                    @keyframes ring-spin {
                        from { transform: rotateX(70deg) rotateZ(0deg); }
                        to { transform: rotateX(70deg) rotateZ(360deg); }
                    }
                    @media (max-width: 1024px) {
                        .showcase-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
