use leptos::prelude::*;

use crate::content::{ServiceCard, SERVICES};
use crate::theme::Accent;

const SOCIALS: [(&str, &str, &str); 3] = [
    ("https://github.com/HerlanAja", "devicon-github-plain", "GitHub"),
    (
        "https://www.linkedin.com/in/ujang-herlan-92a30b273/",
        "devicon-linkedin-plain",
        "LinkedIn",
    ),
    ("https://www.tiktok.com/@ujangherlan_", "extra-tiktok", "TikTok"),
];

fn icon_for(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "✏️",
        Accent::Purple => "🔄",
        Accent::Green => "🎤",
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="w-full py-4 px-2">
            <div class="max-w-7xl mx-auto">
                <div class="flex justify-center w-full">
                    <h1 class="text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-400 to-green-400 mb-4">
                        "Services"
                    </h1>
                </div>
                <div class="h-px bg-gradient-to-r from-transparent via-white/50 to-transparent mb-8 mx-auto w-3/4" />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {SERVICES
                        .iter()
                        .cloned()
                        .map(|service| view! { <ServiceCardView service /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCardView(service: ServiceCard) -> impl IntoView {
    let tokens = service.accent.tokens();
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            class=move || {
                if hovered.get() {
                    "relative rounded-3xl p-8 overflow-hidden h-full backdrop-blur-lg bg-white/5 border border-white/10 scale-[1.02] transition-transform duration-300"
                } else {
                    "relative rounded-3xl p-8 overflow-hidden h-full backdrop-blur-lg bg-white/5 border border-white/10 transition-transform duration-300"
                }
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="relative z-10 h-full flex flex-col">
                <div class=format!(
                    "{} w-12 h-12 rounded-full flex items-center justify-center mb-6 border border-white/10",
                    tokens.icon_bg,
                )>{icon_for(service.accent)}</div>
                <h2 class=format!("text-3xl font-bold mb-4 {}", tokens.text)>{service.title}</h2>
                <p class="text-gray-300 mb-12 flex-grow">{service.description}</p>
                <div class="flex space-x-4 mt-auto">
                    {SOCIALS
                        .into_iter()
                        .map(|(href, icon, label)| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" aria-label=label>
                                    <div class=format!(
                                        "w-10 h-10 rounded-full flex items-center justify-center border {}",
                                        tokens.badge,
                                    )>
                                        <i class=icon />
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class=format!(
                "absolute top-4 right-4 w-32 h-32 rounded-full blur-xl {}",
                tokens.glow[0],
            )></div>
            <div class=format!(
                "absolute top-8 right-8 w-24 h-24 rounded-full blur-lg {}",
                tokens.glow[1],
            )></div>
            <div class=format!(
                "absolute top-12 right-12 w-16 h-16 rounded-full blur-md {}",
                tokens.glow[2],
            )></div>
        </div>
    }
}
