use leptos::prelude::*;

use super::reveal::Reveal;
use crate::portfolio::{featured_project, other_projects, Project};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 md:py-32 projects-background text-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <div class="text-center mb-16">
                        <span class="inline-block px-4 py-2 bg-primary/10 rounded-full text-sm font-mono text-primary mb-4">
                            "</> Featured Work"
                        </span>
                        <h2 class="text-4xl sm:text-5xl md:text-6xl font-black mb-6">
                            <span class="gradient-text">"Projects"</span>
                        </h2>
                        <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                            "A collection of my recent work showcasing my skills in frontend development"
                        </p>
                    </div>
                </Reveal>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 mb-8">
                    {featured_project().map(|project| view! { <FeaturedProject project /> })}
                    {other_projects()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
                <Reveal class="text-center mt-12">
                    <button
                        data-testid="button-view-all-projects"
                        class="inline-flex items-center gap-2 px-8 py-4 border-2 border-primary text-primary rounded-lg font-semibold hover:bg-primary hover:text-primary-foreground transition-all duration-300"
                    >
                        "View All Projects →"
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn TechBadges(tech: &'static [&'static str], #[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "text-sm" } else { "text-xs" };
    view! {
        <div class="flex flex-wrap gap-2">
            {tech
                .iter()
                .map(|t| {
                    view! {
                        <span class=format!(
                            "tech-badge px-3 py-1 bg-muted rounded-lg font-mono text-foreground {size}",
                        )>{*t}</span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeaturedProject(project: &'static Project) -> impl IntoView {
    view! {
        <Reveal class="lg:col-span-2">
            <div class="project-card gradient-border p-8 rounded-2xl hover:-translate-y-2 transition-transform duration-300">
                <div class="grid md:grid-cols-2 gap-8 items-center">
                    <img
                        src=project.image
                        alt=format!("{} Interface", project.title)
                        class="rounded-xl shadow-2xl w-full"
                    />
                    <div>
                        <span class="inline-block px-3 py-1 bg-primary/20 text-primary rounded-full text-xs font-mono mb-4">
                            "FEATURED PROJECT"
                        </span>
                        <h3 class="text-3xl md:text-4xl font-bold mb-4 gradient-text">
                            {project.title}
                        </h3>
                        <p class="text-muted-foreground mb-6 text-lg leading-relaxed">
                            {project.description}
                        </p>
                        <h4 class="text-sm font-semibold text-foreground mb-3 uppercase tracking-wide">
                            "Tech Stack"
                        </h4>
                        <TechBadges tech=project.tech large=true />
                        <div class="flex flex-wrap gap-4 mt-6">
                            {project
                                .live_url
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            data-testid="button-live-demo"
                                            class="inline-flex items-center gap-2 px-6 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:bg-primary/90 transition-colors"
                                        >
                                            "↗ Live Demo"
                                        </a>
                                    }
                                })}
                            {project
                                .code_url
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            data-testid="button-view-code"
                                            class="inline-flex items-center gap-2 px-6 py-3 border-2 border-border text-foreground rounded-lg font-semibold hover:border-primary hover:text-primary transition-colors"
                                        >
                                            <i class="devicon-github-plain" />
                                            "View Code"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <Reveal>
            <div class="project-card gradient-border p-6 rounded-2xl h-full hover:-translate-y-2 transition-transform duration-300">
                <img
                    src=project.image
                    alt=project.title
                    class="rounded-lg mb-6 w-full h-48 object-cover"
                />
                <h3 class="text-2xl font-bold mb-3 text-foreground">{project.title}</h3>
                <p class="text-muted-foreground mb-4 leading-relaxed">{project.description}</p>
                <div class="mb-4">
                    <TechBadges tech=project.tech />
                </div>
                <div class="flex gap-3">
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    data-testid=format!("link-demo-{index}")
                                    class="text-primary hover:text-primary/80 font-semibold text-sm inline-flex items-center gap-1"
                                >
                                    "↗ Demo"
                                </a>
                            }
                        })}
                    {project
                        .code_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    data-testid=format!("link-code-{index}")
                                    class="text-foreground hover:text-primary font-semibold text-sm inline-flex items-center gap-1"
                                >
                                    <i class="devicon-github-plain" />
                                    "Code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </Reveal>
    }
}
