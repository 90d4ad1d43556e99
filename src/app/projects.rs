use leptos::{either::Either, prelude::*};

use crate::catalog::{filter_projects, Category, FilterCriterion, ProjectRecord};
use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    let (criterion, set_criterion) = signal(FilterCriterion::All);
    let visible = Memo::new(move |_| filter_projects(&PROJECTS, criterion.get()));

    view! {
        <section id="projects" class="w-full py-8 px-10 relative overflow-hidden">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-8">
                    <h2 class="text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-indigo-400 via-purple-400 to-pink-400 inline-block mb-2">
                        "My Projects"
                    </h2>
                    <div class="h-px bg-gradient-to-r from-transparent via-indigo-500/50 to-transparent mb-4 mx-auto w-3/4" />
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Explore my latest work and personal projects. Each project represents my passion for creating innovative and user-friendly digital experiences."
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mb-8">
                    {FilterCriterion::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    class=move || {
                                        if criterion.get() == c {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-indigo-600"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-gray-800 text-gray-300 hover:bg-gray-700"
                                        }
                                    }
                                    on:click=move |_| set_criterion.set(c)
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let projects = visible.get();
                    if projects.is_empty() {
                        Either::Left(
                            view! {
                                <div class="text-center py-20">
                                    <p class="text-gray-400 text-lg">
                                        "No projects found in this category."
                                    </p>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                    {projects
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project /> })
                                        .collect_view()}
                                </div>
                            },
                        )
                    }
                }}
            </div>
        </section>
    }
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Web => "🖥️",
        Category::Mobile => "📱",
        Category::Ai => "🧠",
    }
}

#[component]
fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let alt = project.title.clone();
    view! {
        <div class="h-full overflow-hidden rounded-2xl bg-gradient-to-br from-gray-800/90 to-gray-900/90 border border-gray-700 hover:border-indigo-500/50 hover:scale-[1.02] transition duration-300">
            <div class="relative h-48 overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900 to-transparent opacity-60 z-10" />
                <img
                    src=project.image
                    alt=alt
                    class="w-full h-full object-cover hover:scale-105 transition-transform duration-500"
                />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <div class="absolute top-3 right-3 bg-indigo-600 text-xs font-bold px-2 py-1 rounded-full z-20 flex items-center gap-1">
                                <span class="w-2 h-2 rounded-full bg-white animate-pulse"></span>
                                "Featured"
                            </div>
                        }
                    })}
                <div class="absolute top-3 left-3 bg-gray-800/80 text-xs px-2 py-1 rounded-full z-20 flex items-center gap-1 border border-gray-700">
                    {category_icon(project.category)}
                    <span>{project.category.label()}</span>
                </div>
            </div>
            <div class="p-5">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-gray-300 text-sm mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-5">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-gray-800 text-xs text-gray-300 rounded-md border border-gray-700 hover:-translate-y-0.5 hover:bg-indigo-600/20 transition">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3">
                    <a
                        href=project.demo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-1 px-3 py-1.5 bg-indigo-600 hover:bg-indigo-700 text-sm rounded-lg transition-colors"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-1 px-3 py-1.5 bg-gray-700 hover:bg-gray-600 text-sm rounded-lg transition-colors"
                    >
                        <i class="devicon-github-plain" />
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
