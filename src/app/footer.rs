use leptos::prelude::*;

use super::reveal::Reveal;
use crate::portfolio::SITE_OWNER;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-border bg-background">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                        <p class="text-muted-foreground text-sm">
                            "© " {BUILD_YEAR} " "
                            <span class="gradient-text font-semibold">{SITE_OWNER}</span>
                            ". All rights reserved."
                        </p>
                        <div class="flex items-center gap-6">
                            <a
                                href="#"
                                data-testid="link-privacy-policy"
                                class="text-muted-foreground hover:text-primary transition-colors text-sm font-medium"
                            >
                                "Privacy Policy"
                            </a>
                            <a
                                href="#"
                                data-testid="link-terms-of-service"
                                class="text-muted-foreground hover:text-primary transition-colors text-sm font-medium"
                            >
                                "Terms of Service"
                            </a>
                        </div>
                    </div>
                </Reveal>
            </div>
        </footer>
    }
}
