use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_button::AnimatedButton;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let home = Route::Home.to_path();

    html! {
        <div class="not-found">
            <div class="glass-card neon-border not-found-card">
                <h1 class="font-display text-gradient">{"404"}</h1>
                <p>{"This page drifted out of range."}</p>
                <AnimatedButton href={home}>{"Back to the chapter"}</AnimatedButton>
            </div>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .not-found-card {
                        padding: 3rem;
                        text-align: center;
                    }
                    .not-found-card h1 {
                        font-size: 6rem;
                        margin: 0;
                    }
                    .not-found-card p {
                        color: var(--muted);
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
        </div>
    }
}
