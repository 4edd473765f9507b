mod contact;
mod footer;
mod hero;
mod navigation;
mod projects;
mod reveal;
mod skills;
mod toast;

pub use contact::send_contact;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::portfolio::SITE_OWNER;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;
use toast::{provide_toaster, Toasts};

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
            <body class="min-h-screen bg-background text-foreground overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
        <Toasts />
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Navigation />
        <main>
            <HeroSection />
            <ProjectsSection />
            <SkillsSection />
            <ContactSection />
        </main>
        <Footer />
    }
}

/// Smooth-scrolls the element with id `section_id` to the top of the viewport.
pub fn scroll_to_section(section_id: &str) {
    let el = if let Some(el) = document().get_element_by_id(section_id) {
        el
    } else {
        log::debug!("no section with id {section_id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
