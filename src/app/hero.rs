use leptos::prelude::*;

use super::{reveal::Reveal, scroll_to_section};
use crate::portfolio::{SITE_OWNER, SITE_ROLE};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-16"
        >
            <div class="hero-background" />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center">
                    <Reveal class="mb-6">
                        <span class="inline-block px-4 py-2 bg-muted rounded-full text-sm font-mono text-muted-foreground mb-4">
                            "👋 Welcome to my portfolio"
                        </span>
                    </Reveal>
                    <Reveal delay_ms=200>
                        <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-black mb-6 leading-tight">
                            <span class="gradient-text">{SITE_OWNER}</span>
                        </h1>
                    </Reveal>
                    <Reveal delay_ms=400 class="flex items-center justify-center mb-8">
                        <div class="typewriter">
                            <h2 class="text-2xl sm:text-3xl md:text-4xl font-bold text-primary">
                                {SITE_ROLE}
                            </h2>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=600>
                        <p class="text-lg sm:text-xl text-muted-foreground max-w-2xl mx-auto mb-12 leading-relaxed">
                            "Crafting beautiful, responsive, and performant web experiences with modern technologies. Passionate about clean code and pixel-perfect designs."
                        </p>
                    </Reveal>
                    <Reveal delay_ms=800 class="flex flex-wrap items-center justify-center gap-4">
                        <button
                            data-testid="button-view-work"
                            class="btn-primary px-8 py-4 rounded-lg text-primary-foreground font-semibold inline-flex items-center gap-2"
                            on:click=move |_| scroll_to_section("projects")
                        >
                            "View My Work"
                            <span aria-hidden="true">"↓"</span>
                        </button>
                        <button
                            data-testid="button-get-in-touch"
                            class="px-8 py-4 border-2 border-primary rounded-lg text-primary font-semibold hover:bg-primary hover:text-primary-foreground transition-all duration-300"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Get In Touch"
                        </button>
                    </Reveal>
                    <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-primary text-3xl">
                        "⌄"
                    </div>
                </div>
            </div>
            // floating blurs
            <div class="absolute top-20 left-10 w-20 h-20 bg-white/5 rounded-full blur-xl animate-float" />
            <div class="absolute bottom-20 right-10 w-32 h-32 bg-white/5 rounded-full blur-xl animate-float [animation-delay:1s]" />
            <div class="absolute top-1/2 right-20 w-24 h-24 bg-white/5 rounded-full blur-xl animate-float [animation-delay:2s]" />
        </section>
    }
}
