use leptos::prelude::*;

use super::reveal::{Reveal, Revealed};
use crate::motion::RevealVariant;
use crate::portfolio::{ring_circumference, tech_slug, Skill, ADDITIONAL_TECHS, RING_RADIUS, SKILLS};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 md:py-32 bg-background">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <div class="text-center mb-16">
                        <span class="inline-block px-4 py-2 bg-secondary/10 rounded-full text-sm font-mono text-secondary mb-4">
                            "🔧 Technical Skills"
                        </span>
                        <h2 class="text-4xl sm:text-5xl md:text-6xl font-black mb-6">
                            <span class="gradient-text">"Tech Stack"</span>
                        </h2>
                        <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                            "Technologies and tools I use to bring ideas to life"
                        </p>
                    </div>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-16">
                    {SKILLS.iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
                <Reveal>
                    <div class="gradient-border p-8 rounded-2xl">
                        <h3 class="text-2xl font-bold mb-6 text-center gradient-text">
                            "Additional Technologies"
                        </h3>
                        <div class="flex flex-wrap justify-center gap-3">
                            {ADDITIONAL_TECHS
                                .iter()
                                .enumerate()
                                .map(|(index, tech)| {
                                    view! {
                                        <Reveal
                                            variant=RevealVariant::ScaleIn
                                            delay_ms={index as u32 * 50}
                                        >
                                            <span
                                                class="tech-badge inline-block px-4 py-2 bg-muted rounded-lg text-sm font-mono text-foreground cursor-default hover:scale-110 transition-transform"
                                                data-testid=format!("tech-{}", tech_slug(tech))
                                            >
                                                {*tech}
                                            </span>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    view! {
        <Reveal variant=RevealVariant::ScaleIn delay_ms=200>
            <div class="gradient-border p-6 rounded-2xl text-center">
                <div class="relative w-32 h-32 mx-auto mb-4">
                    <ProgressRing skill />
                    <div class="absolute inset-0 flex items-center justify-center">
                        <span class="text-4xl">{skill.icon}</span>
                    </div>
                </div>
                <h3 class="text-xl font-bold mb-2 text-foreground">{skill.name}</h3>
                <p class="text-primary font-mono text-sm">{skill.tier().label()}</p>
            </div>
        </Reveal>
    }
}

#[component]
fn ProgressRing(skill: &'static Skill) -> impl IntoView {
    let circumference = ring_circumference();
    let revealed = use_context::<Revealed>();
    // ring stays empty until the surrounding card has been revealed
    let offset = move || {
        let shown = revealed.map(|r| r.0.get()).unwrap_or(true);
        let offset = if shown { skill.dash_offset() } else { circumference };
        format!("{offset:.3}")
    };

    view! {
        <svg class="w-full h-full -rotate-90" viewBox="0 0 120 120">
            <circle
                cx="60"
                cy="60"
                r=RING_RADIUS.to_string()
                fill="none"
                stroke="hsl(0, 0%, 15%)"
                stroke-width="8"
            />
            <circle
                cx="60"
                cy="60"
                r=RING_RADIUS.to_string()
                fill="none"
                stroke-width="8"
                stroke-linecap="round"
                stroke="currentColor"
                class="text-primary"
                stroke-dasharray=format!("{circumference:.3}")
                stroke-dashoffset=offset
                style="transition: stroke-dashoffset 1.5s ease-out 0.5s"
            />
        </svg>
    }
}
