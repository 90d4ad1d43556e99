use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_timeout_fn, UseTimeoutFnReturn};

use crate::content::SKILL_BADGES;

const SPARKLE_EVERY_MS: u64 = 5000;
const SPARKLE_FOR_MS: f64 = 1000.0;

#[component]
pub fn About() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);
    let (sparkling, set_sparkling) = signal(false);

    // both timers belong to this component and stop when it is disposed
    let UseTimeoutFnReturn { start: fade, .. } =
        use_timeout_fn(move |_: ()| set_sparkling.set(false), SPARKLE_FOR_MS);
    let _sparkle = use_interval_fn(
        move || {
            set_sparkling.set(true);
            fade(());
        },
        SPARKLE_EVERY_MS,
    );

    view! {
        <section id="about" class="w-full py-16 px-4">
            <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class="text-4xl font-bold mb-8 bg-clip-text text-transparent bg-gradient-to-r from-blue-400 to-purple-400">
                        "Skills"
                    </h2>
                    <div class="grid grid-cols-3 sm:grid-cols-4 gap-4">
                        {SKILL_BADGES
                            .iter()
                            .enumerate()
                            .map(|(i, badge)| {
                                let tokens = badge.accent.tokens();
                                let label = badge.label.clone();
                                let initial = label.chars().next().unwrap_or('?').to_string();
                                view! {
                                    <div
                                        class=format!(
                                            "relative flex flex-col items-center justify-center h-20 rounded-xl border border-white/10 {}",
                                            tokens.soft_bg,
                                        )
                                        on:mouseenter=move |_| set_hovered.set(Some(i))
                                        on:mouseleave=move |_| set_hovered.set(None)
                                    >
                                        <span class=format!("text-2xl font-bold {}", tokens.text)>
                                            {initial}
                                        </span>
                                        <span class=move || {
                                            if hovered.get() == Some(i) {
                                                "absolute -bottom-6 text-xs text-white opacity-100 transition-opacity"
                                            } else {
                                                "absolute -bottom-6 text-xs text-white opacity-0 transition-opacity"
                                            }
                                        }>{label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="relative rounded-3xl p-8 bg-white/5 border border-white/10 backdrop-blur-lg">
                    {move || {
                        sparkling
                            .get()
                            .then(|| {
                                view! {
                                    <div class="absolute top-4 right-6 w-3 h-3 rounded-full bg-blue-300 animate-ping" />
                                    <div class="absolute top-16 right-16 w-2 h-2 rounded-full bg-purple-300 animate-ping" />
                                    <div class="absolute bottom-10 right-10 w-2 h-2 rounded-full bg-green-300 animate-ping" />
                                }
                            })
                    }}
                    <p class="text-2xl font-medium mb-4 relative z-10">"I'm Ujang Herlan"</p>
                    <p class="leading-relaxed text-gray-300 mb-6 relative z-10">
                        "Experienced Full Stack Developer with a passion for creating dynamic, intuitive, and responsive applications. "
                        "Proficient in multiple programming languages and frameworks, as well as database design and management. "
                        "Strong problem-solving and analytical skills, and a track record of delivering high-quality code on time and on budget."
                    </p>
                    <a
                        href="/#contact"
                        class="inline-block mt-8 relative z-10 bg-gradient-to-r from-blue-500/90 to-purple-600/90 hover:from-blue-600 hover:to-purple-700 px-8 py-3 rounded-full font-medium shadow-lg transition-all duration-300 border border-white/20"
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>
        </section>
    }
}
