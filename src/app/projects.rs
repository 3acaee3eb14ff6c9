use leptos::prelude::*;

use crate::portfolio::{Icon, Project, PROJECTS};

use super::{
    icon_view,
    reveal::{stagger_delay_ms, Reveal},
};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                        "Featured Projects"
                    </h2>
                    <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                        "Interactive gallery showcasing AI/ML projects that push the boundaries of what's possible"
                    </p>
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, &project)| {
                            view! {
                                <Reveal delay_ms=stagger_delay_ms(index, 200, 0) class="group">
                                    <ProjectCard project=project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden rounded-lg border bg-gray-900/50 border-gray-700/50 hover:border-blue-400/50 transition-all duration-300 hover:-translate-y-2.5 hover:scale-[1.02]">
            // hover tint
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-5 transition-opacity duration-300",
                project.gradient,
            ) />
            <div class="relative p-6">
                <div class="flex items-center justify-between mb-4">
                    <div class=format!(
                        "p-3 rounded-full bg-gradient-to-r {} text-2xl transition-transform duration-500 hover:rotate-[360deg]",
                        project.gradient,
                    )>{icon_view(project.icon)}</div>
                    <div class="flex space-x-2">
                        <a
                            href=project.demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 rounded-md hover:bg-gray-800"
                            aria-label="Live Demo"
                        >
                            {icon_view(Icon::ExternalLink)}
                        </a>
                        <a
                            href=project.source
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 rounded-md hover:bg-gray-800"
                            aria-label="Source Code"
                        >
                            {icon_view(Icon::Github)}
                        </a>
                    </div>
                </div>
                <h3 class="text-xl font-semibold text-white group-hover:text-blue-400 transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="mt-2 text-gray-400">{project.description}</p>
            </div>
            <div class="relative px-6 pb-6 flex flex-wrap gap-2">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 bg-blue-500/20 text-blue-300 rounded-full text-sm border border-blue-400/30">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
