use yew::prelude::*;

use crate::sections::{
    about::About, cta::CallToAction, footer::Footer, gallery::Gallery, hero::Hero,
    logo_showcase::LogoShowcase, navbar::Navbar, team::Team, timeline::Timeline,
    video_showcase::VideoShowcase,
};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub theme: Theme,
}

/// The single landing page: every section in scroll order.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let theme = props.theme;

    html! {
        <div class="home">
            <Navbar theme={theme} />
            <main>
                <Hero theme={theme} />
                <About theme={theme} />
                <LogoShowcase theme={theme} />
                <VideoShowcase theme={theme} />
                <Gallery theme={theme} />
                <Timeline theme={theme} />
                <Team theme={theme} />
                <CallToAction theme={theme} />
            </main>
            <Footer theme={theme} />
        </div>
    }
}
