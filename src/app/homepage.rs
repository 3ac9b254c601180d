use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactSection;
use super::nav::scroll_to;
use crate::portfolio::{
    copyright_year, Project, Section, HEADLINE, OWNER, PROJECTS, SKILLS, SOCIAL_LINKS, TAGLINE,
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Projects />
        <Skills />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="relative py-20 px-4 bg-hero-bg border-b">
            <div class="max-w-4xl mx-auto text-center">
                <h1 class="text-5xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-gradient-start to-gradient-end bg-clip-text text-transparent">
                    {HEADLINE}
                </h1>
                <p class="text-xl md:text-2xl text-muted-foreground mb-8">{TAGLINE}</p>
                <div class="flex gap-4 justify-center">
                    <button
                        class="inline-flex items-center gap-2 rounded-md bg-primary text-primary-foreground px-8 py-3 font-medium hover:bg-primary/90"
                        on:click=move |_| scroll_to(Section::Contact)
                    >
                        <i class="extra-email" />
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold mb-12 text-center">"Featured Projects"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="rounded-lg border bg-card p-6 shadow-sm hover:shadow-xl transition-shadow duration-300">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="text-2xl font-semibold mb-2">{project.title}</h3>
                    <p class="text-base text-muted-foreground">{project.subtitle}</p>
                </div>
                {project
                    .link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-muted-foreground hover:text-primary transition-colors"
                                aria-label=format!("Open {}", project.title)
                            >
                                <i class="extra-link" />
                            </a>
                        }
                    })}
            </div>
            {(!project.sub_projects.is_empty())
                .then(|| {
                    view! {
                        <div class="flex flex-wrap gap-2 mt-3">
                            {project
                                .sub_projects
                                .iter()
                                .map(|sub| {
                                    view! {
                                        <a
                                            href=sub.link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="inline-flex items-center gap-1 text-sm text-primary hover:underline"
                                        >
                                            <i class="extra-link" />
                                            {sub.name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            <div class="mt-6 space-y-4">
                <p>{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-full bg-secondary px-2.5 py-0.5 text-xs font-semibold">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <ul class="space-y-2 text-sm text-muted-foreground">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-start">
                                    <span class="text-primary mr-2">"•"</span>
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-4 bg-skill-bg border-t">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold mb-12 text-center">"Technical Skills"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="rounded-lg border bg-card p-6 shadow-sm">
                                    <h3 class="text-lg font-semibold mb-4">{category.name}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="rounded-full border bg-background px-2.5 py-0.5 text-xs font-semibold">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-muted/50 border-t py-8">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center justify-between gap-4 md:flex-row">
                    <p class="text-sm text-muted-foreground">
                        {format!("© {} {OWNER}. All rights reserved.", copyright_year())}
                    </p>
                    <div class="flex space-x-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target=link.external.then_some("_blank")
                                        rel=link.external.then_some("noopener noreferrer")
                                        class="text-muted-foreground hover:text-foreground transition-colors text-xl"
                                    >
                                        <span class="sr-only">{link.label}</span>
                                        <i class=link.icon aria-hidden="true" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
