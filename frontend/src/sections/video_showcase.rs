use yew::prelude::*;
use yew_hooks::use_bool_toggle;

use crate::components::countdown::CountdownTimer;
use crate::components::reveal::{Reveal, RevealEffect};
use crate::components::visibility::use_in_view;
use crate::config::REVEAL_MARGIN;
use crate::content::{resolved_countdowns, VIDEOS};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct VideoShowcaseProps {
    pub theme: Theme,
}

#[function_component(VideoShowcase)]
pub fn video_showcase(props: &VideoShowcaseProps) -> Html {
    let container = use_node_ref();
    let in_view = use_in_view(container.clone(), REVEAL_MARGIN);
    let active = use_state(|| 0usize);
    let playing = use_bool_toggle(false);
    let muted = use_bool_toggle(true);
    let countdowns = use_memo(|_| resolved_countdowns(), ());

    let clip = &VIDEOS[(*active).min(VIDEOS.len() - 1)];

    let toggle_play = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.toggle())
    };
    let toggle_mute = {
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| muted.toggle())
    };

    html! {
        <section id="videos" class="section-padding video-showcase">
            <div class="video-sweep" style={format!("background: radial-gradient(circle at 50% 50%, {} 0%, transparent 50%);", props.theme.primary_alpha(0.05))}></div>

            <div ref={container} class="container-custom video-inner">
                <Reveal effect={RevealEffect::FadeUp} class={classes!("countdown-panel-wrap")}>
                    <div class="glass-card neon-border countdown-panel">
                        <h3 class="font-display"><span class="text-gradient">{"Upcoming Events"}</span></h3>
                        <div class="countdown-grid">
                            { for countdowns.iter().map(|(name, target_ms)| html! {
                                <CountdownTimer key={*name} event_name={*name} target_ms={*target_ms} />
                            }) }
                        </div>
                    </div>
                </Reveal>

                <Reveal effect={RevealEffect::FadeUp} class={classes!("section-header")}>
                    <span class="section-badge glass-card">{"Media Gallery"}</span>
                    <h2>{"Our "}<span class="text-gradient">{"Story"}</span>{" in Motion"}</h2>
                    <p>{"Experience the energy and innovation through our video highlights"}</p>
                </Reveal>

                <Reveal effect={RevealEffect::Scale} delay={0.2}>
                    <div class="player neon-border">
                        <img key={clip.id} class="player-frame" src={clip.thumbnail} alt={clip.title} />
                        <div class="player-shade"></div>

                        <button class="player-play" aria-label={if *playing { "Pause" } else { "Play" }} onclick={toggle_play}>
                            <span class="player-ping"></span>
                            <span class="player-play-inner">{ if *playing { "❚❚" } else { "▶" } }</span>
                        </button>

                        <div class="player-controls">
                            <div>
                                <h3 key={clip.title} class="font-display player-title">{clip.title}</h3>
                                <p class="player-description">{clip.description}</p>
                            </div>
                            <div class="player-buttons">
                                <button class="glass-card player-button" aria-label="Toggle sound" onclick={toggle_mute}>
                                    { if *muted { "🔇" } else { "🔊" } }
                                </button>
                                <button class="glass-card player-button" aria-label="Fullscreen">{"⛶"}</button>
                            </div>
                        </div>
                    </div>
                </Reveal>

                <div class="thumb-strip">
                    { for VIDEOS.iter().enumerate().map(|(index, video)| {
                        let select = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        let shown = if in_view {
                            format!("opacity: 1; transform: translateY(0); transition-delay: {}s;", 0.3 + index as f64 * 0.1)
                        } else {
                            "opacity: 0; transform: translateY(30px);".to_string()
                        };
                        html! {
                            <button
                                key={video.id}
                                class={classes!("thumb", (*active == index).then(|| "active"))}
                                style={shown}
                                onclick={select}
                            >
                                <img src={video.thumbnail} alt={video.title} />
                                <div class="thumb-shade"></div>
                                <div class="thumb-hover"><span>{"▶"}</span></div>
                                <div class="thumb-caption">
                                    <span class="thumb-category">{video.category}</span>
                                    <h4>{video.title}</h4>
                                </div>
                            </button>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .video-showcase {
                        background: rgba(14, 22, 38, 0.3);
                    }
                    .video-sweep {
                        position: absolute;
                        inset: 0;
                        animation: sweep 20s linear infinite alternate;
                    }
                    @keyframes sweep {
                        from { background-position: 0% 0%; }
                        to { background-position: 100% 100%; }
                    }
                    .video-inner {
                        position: relative;
                        z-index: 1;
                    }
                    .countdown-panel-wrap {
                        margin-bottom: 4rem;
                    }
                    .countdown-panel {
                        padding: 2rem;
                        text-align: center;
                    }
                    .countdown-panel h3 {
                        font-size: 1.5rem;
                        margin: 0 0 1.5rem 0;
                    }
                    .countdown-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .player {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        border-radius: 16px;
                        overflow: hidden;
                        margin-bottom: 2rem;
                    }
                    .player-frame {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        animation: frame-in 0.5s ease-out;
                    }
                    @keyframes frame-in {
                        from { opacity: 0; transform: scale(1.1); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .player-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--background), rgba(7, 11, 20, 0.2), transparent);
                    }
                    .player-play {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 5rem;
                        height: 5rem;
                        border: none;
                        border-radius: 50%;
                        background: transparent;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .player-play:hover {
                        transform: translate(-50%, -50%) scale(1.1);
                    }
                    .player-ping {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: var(--glow);
                        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    @keyframes ping {
                        75%, 100% { transform: scale(1.6); opacity: 0; }
                    }
                    .player-play-inner {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        margin: 0.5rem;
                        border-radius: 50%;
                        font-size: 1.5rem;
                        color: var(--primary-foreground);
                        background: var(--primary);
                        box-shadow: 0 8px 24px var(--glow);
                    }
                    .player-controls {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.5rem;
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-between;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .player:hover .player-controls {
                        opacity: 1;
                    }
                    .player-title {
                        font-size: 1.5rem;
                        margin: 0 0 0.25rem 0;
                        animation: rise 0.4s ease-out;
                    }
                    .player-description {
                        margin: 0;
                        color: var(--muted);
                    }
                    .player-buttons {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .player-button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        cursor: pointer;
                        color: var(--foreground);
                    }
                    .thumb-strip {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }
                    .thumb {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        padding: 0;
                        border: none;
                        border-radius: 12px;
                        overflow: hidden;
                        cursor: pointer;
                        color: var(--foreground);
                        text-align: left;
                        transition: opacity 0.5s ease, transform 0.3s ease;
                    }
                    .thumb:hover {
                        transform: translateY(-5px) scale(1.05);
                    }
                    .thumb.active {
                        box-shadow: 0 0 0 2px var(--background), 0 0 0 4px var(--primary);
                    }
                    .thumb img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .thumb:hover img {
                        transform: scale(1.1);
                    }
                    .thumb-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(7, 11, 20, 0.8), transparent);
                    }
                    .thumb-hover {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 229, 255, 0.2);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .thumb:hover .thumb-hover {
                        opacity: 1;
                    }
                    .thumb-caption {
                        position: absolute;
                        left: 0.75rem;
                        right: 0.75rem;
                        bottom: 0.75rem;
                    }
                    .thumb-category {
                        font-size: 0.75rem;
                        color: var(--primary);
                    }
                    .thumb-caption h4 {
                        margin: 0;
                        font-size: 0.875rem;
                        white-space: nowrap;
                        overflow: hidden;
                        text-overflow: ellipsis;
                    }
                    @media (max-width: 768px) {
                        .countdown-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
