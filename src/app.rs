mod contact;
mod experience;
mod projects;
mod reveal;

pub use contact::get_contact_config;

use contact::ContactSection;
use experience::ExperienceTimeline;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use projects::ProjectGallery;
use reveal::{Direction, Reveal};

use crate::portfolio::{copyright_year, Icon};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Sibiharan - {title}") />

        <Router>
            <main class="flex flex-col w-full min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <ExperienceTimeline />
        <ProjectGallery />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="max-w-6xl w-full mx-auto px-6 pb-12">
            <Reveal direction=Direction::Fade delay_ms=500 class="text-center pt-8 border-t border-gray-700/50">
                <p class="text-gray-500">
                    "© " {copyright_year()} " Sibiharan. Engineering the future with AI."
                </p>
            </Reveal>
        </footer>
    }
}

fn icon_view(icon: Icon) -> AnyView {
    match icon.class() {
        Some(class) => view! { <i class=class></i> }.into_any(),
        None => view! { <span aria-hidden="true">{icon.glyph()}</span> }.into_any(),
    }
}
