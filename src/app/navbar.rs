use leptos::prelude::*;

const RESUME_PATH: &str = "/CV-Ujang-Herlan.pdf";
const RESUME_FILE: &str = "CV-Ujang-Herlan.pdf";

const NAV_LINKS: [(&str, &str); 6] = [
    ("About", "/#about"),
    ("Services", "/#services"),
    ("Skills", "/#skills"),
    ("Projects", "/#projects"),
    ("Testimonial", "/#testimonials"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <nav class="fixed top-5 left-1/2 -translate-x-1/2 z-50 w-[95%] md:w-[90%] lg:w-[80%] px-6 py-3 bg-gray-900/80 backdrop-blur-xl rounded-full flex items-center justify-between shadow-md border border-white/10">
            <a href="/#home" class="w-8 h-8 rounded-full bg-white/10 flex items-center justify-center">
                <img src="/logo.png" alt="Logo" class="w-6 h-6 object-contain" />
            </a>
            <ul class="hidden md:flex items-center space-x-8 font-medium">
                {NAV_LINKS
                    .into_iter()
                    .map(|(name, href)| {
                        view! {
                            <li>
                                <a href=href class="relative group hover:text-gray-300 transition duration-200">
                                    {name}
                                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-white group-hover:w-full transition-all duration-300"></span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <HireMe layout="hidden md:flex items-center space-x-2 px-4 py-2" />
            <button
                class="md:hidden flex flex-col items-center justify-center w-10 h-10 bg-gray-800/80 rounded-full shadow-lg hover:bg-gray-700/80 transition-colors duration-200"
                aria-label="Menu"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class=move || {
                    if open.get() {
                        "w-6 h-0.5 bg-white mb-1.5 rotate-45 translate-y-1.5 transition-transform"
                    } else {
                        "w-6 h-0.5 bg-white mb-1.5 transition-transform"
                    }
                }></span>
                <span class=move || {
                    if open.get() {
                        "w-6 h-0.5 bg-white -rotate-45 -translate-y-1.5 transition-transform"
                    } else {
                        "w-6 h-0.5 bg-white transition-transform"
                    }
                }></span>
            </button>
            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="fixed inset-0 z-50 px-6" on:click=move |_| set_open.set(false)>
                                <ul
                                    class="container mx-auto max-w-md bg-gray-900/90 backdrop-blur-lg rounded-lg shadow-xl border border-white/10 p-6 mt-20"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    {NAV_LINKS
                                        .into_iter()
                                        .map(|(name, href)| {
                                            view! {
                                                <li class="border-b border-white/10 last:border-0">
                                                    <a
                                                        href=href
                                                        class="block py-4 text-xl font-medium hover:text-purple-400 transition duration-200"
                                                        on:click=move |_| set_open.set(false)
                                                    >
                                                        {name}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                    <li class="mt-6">
                                        <HireMe layout="inline-flex items-center space-x-2 px-6 py-3 text-lg" />
                                    </li>
                                </ul>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

/// Downloads the résumé.
#[component]
fn HireMe(layout: &'static str) -> impl IntoView {
    view! {
        <a
            href=RESUME_PATH
            download=RESUME_FILE
            class=format!(
                "{layout} bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 rounded-full font-medium transition-all duration-200 shadow-lg",
            )
        >
            <span>"Hire Me"</span>
            <i class="extra-download" />
        </a>
    }
}
