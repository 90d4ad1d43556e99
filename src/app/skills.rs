use leptos::prelude::*;

use crate::content::{SkillGroup, SKILL_GROUPS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="w-full py-20 px-4 relative overflow-hidden">
            <div class="absolute top-0 left-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-[100px] -z-10" />
            <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-[100px] -z-10" />
            <div class="max-w-6xl mx-auto relative">
                <div class="mb-16 text-center">
                    <h2 class="text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-400 to-green-400 inline-block mb-4">
                        "My Technical Expertise"
                    </h2>
                    <div class="h-px bg-gradient-to-r from-transparent via-white/50 to-transparent mb-6 mx-auto w-3/4" />
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Leveraging cutting-edge technologies to build modern, efficient, and scalable solutions"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {SKILL_GROUPS
                        .iter()
                        .cloned()
                        .map(|group| view! { <SkillCard group /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    let tokens = group.accent.tokens();
    view! {
        <div class="relative rounded-3xl p-8 h-full flex flex-col backdrop-blur-lg bg-white/5 border border-white/10 hover:scale-[1.02] transition-transform duration-300">
            <h3 class=format!("text-2xl font-semibold mb-6 {}", tokens.text)>{group.title}</h3>
            <p class="text-gray-300 mb-6 text-sm leading-relaxed flex-grow">{group.description}</p>
            <div class="flex flex-wrap gap-2 mt-auto">
                {group
                    .technologies
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <span class=format!(
                                "px-3 py-1 rounded-full text-xs border {}",
                                tokens.badge,
                            )>{tech}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
