use log::debug;
use yew::prelude::*;

use crate::components::animated_button::{AnimatedButton, ButtonVariant};
use crate::components::category_filter::{filter_by_category, ActiveCategory, CategoryBar};
use crate::components::lightbox::{Lightbox, Selection};
use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::{EventRecord, EVENTS, EVENT_CATEGORIES};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub theme: Theme,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let active = use_state(ActiveCategory::default);
    let selection = use_state(Selection::<EventRecord>::default);

    let on_select = {
        let active = active.clone();
        Callback::from(move |category: ActiveCategory| {
            debug!("Gallery filter set to {}", category.label());
            active.set(category);
        })
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.set(Selection::default()))
    };

    let shown = filter_by_category(EVENTS, &active);

    html! {
        <section id="events" class="section-padding gallery">
            <div class="container-custom">
                <Reveal effect={RevealEffect::FadeUp} class={classes!("section-header")}>
                    <span class="section-badge glass-card">{"Events & Projects"}</span>
                    <h2>{"Our "}<span class="text-gradient">{"Achievements"}</span></h2>
                    <p>{"Explore our workshops, competitions, and projects that have shaped the tech landscape at Karunya"}</p>
                </Reveal>

                <Reveal effect={RevealEffect::FadeUp} delay={0.1}>
                    <CategoryBar categories={EVENT_CATEGORIES} active={*active} on_select={on_select} />
                </Reveal>

                <div class="gallery-grid">
                    { for shown.iter().enumerate().map(|(index, record)| {
                        let record = **record;
                        let open = {
                            let selection = selection.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*selection).clone();
                                next.open(record);
                                selection.set(next);
                            })
                        };
                        html! {
                            <div
                                key={record.id}
                                class="gallery-card glass-card"
                                style={format!("animation-delay: {}s;", index as f64 * 0.05)}
                                onclick={open}
                            >
                                <div class="gallery-media">
                                    <img src={record.image} alt={record.title} />
                                    <div class="gallery-shade"></div>
                                    <span class="gallery-tag" style={format!("background: {};", props.theme.primary_alpha(0.9))}>
                                        {record.category}
                                    </span>
                                    <div class="gallery-zoom"><span class="glass-card">{"⤢"}</span></div>
                                </div>
                                <div class="gallery-body">
                                    <h3 class="font-display">{record.title}</h3>
                                    <p class="gallery-meta">{format!("📅 {}", record.date)}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <Reveal effect={RevealEffect::FadeUp} delay={0.4} class={classes!("gallery-more")}>
                    <AnimatedButton href="#events" variant={ButtonVariant::Outline}>{"View All Projects ↗"}</AnimatedButton>
                </Reveal>
            </div>

            {
                if let Some(record) = selection.get() {
                    html! {
                        <Lightbox on_close={on_close}>
                            <div class="detail-media">
                                <img src={record.image} alt={record.title} />
                                <div class="detail-shade"></div>
                            </div>
                            <div class="detail-body">
                                <span class="detail-tag">{record.category}</span>
                                <h3 class="font-display">{record.title}</h3>
                                <div class="detail-meta">
                                    <span>{format!("📅 {}", record.date)}</span>
                                    <span>{format!("📍 {}", record.location)}</span>
                                </div>
                                <p>{record.description}</p>
                                <AnimatedButton href="#contact">{"Learn More ↗"}</AnimatedButton>
                            </div>
                        </Lightbox>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .gallery-card {
                        overflow: hidden;
                        cursor: pointer;
                        animation: card-in 0.4s ease-out both;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .gallery-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 0 0 1px var(--primary), 0 12px 32px var(--glow);
                    }
                    @keyframes card-in {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .gallery-media {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                    }
                    .gallery-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .gallery-card:hover .gallery-media img {
                        transform: scale(1.1);
                    }
                    .gallery-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--background), rgba(7, 11, 20, 0.2), transparent);
                    }
                    .gallery-tag {
                        position: absolute;
                        top: 0.75rem;
                        left: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: var(--primary-foreground);
                    }
                    .gallery-zoom {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .gallery-zoom span {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        color: var(--primary);
                        font-size: 1.5rem;
                    }
                    .gallery-card:hover .gallery-zoom {
                        opacity: 1;
                    }
                    .gallery-body {
                        padding: 1rem;
                    }
                    .gallery-body h3 {
                        margin: 0 0 0.5rem 0;
                        font-size: 1rem;
                        transition: color 0.3s ease;
                    }
                    .gallery-card:hover .gallery-body h3 {
                        color: var(--primary);
                    }
                    .gallery-meta {
                        margin: 0;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .gallery-more {
                        margin-top: 3rem;
                        text-align: center;
                    }
                    .detail-media {
                        position: relative;
                        aspect-ratio: 16 / 9;
                    }
                    .detail-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .detail-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--card), transparent);
                    }
                    .detail-body {
                        padding: 2rem;
                        animation: rise 0.4s ease-out 0.2s both;
                    }
                    .detail-tag {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        margin-bottom: 1rem;
                        border-radius: 999px;
                        font-size: 0.875rem;
                        color: var(--primary);
                        background: rgba(0, 229, 255, 0.2);
                    }
                    .detail-body h3 {
                        font-size: 1.875rem;
                        margin: 0 0 1rem 0;
                    }
                    .detail-meta {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                        color: var(--muted);
                    }
                    .detail-body p {
                        font-size: 1.125rem;
                        color: var(--muted);
                        margin-bottom: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .gallery-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .gallery-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 480px) {
                        .gallery-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
