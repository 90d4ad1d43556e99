use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

const FLOAT_MS: f64 = 1000.0;

#[component]
pub fn Hero() -> impl IntoView {
    let (first_load, set_first_load) = signal(true);
    // cleared with the component if it unmounts early
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_first_load.set(false), FLOAT_MS);
    start(());

    view! {
        <div id="home" class="relative pt-8 md:pt-12 px-4 sm:px-6 md:px-10 lg:px-16 xl:px-20 max-w-7xl mx-auto">
            <div class="flex flex-col lg:flex-row items-center justify-between min-h-[60vh]">
                <section class="text-left w-full lg:w-1/2 z-10 mb-4 lg:mb-0">
                    <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-3 md:mb-4 leading-tight">
                        "Welcome to my "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-blue-600">
                            "portfolio"
                        </span>
                    </h1>
                    <p class="text-lg sm:text-xl md:text-2xl mb-6 text-gray-300">
                        "Crafting digital experiences that matter."
                    </p>
                    <a
                        href="/#projects"
                        class="inline-block px-6 py-2 bg-gradient-to-r from-blue-600 to-blue-800 rounded-lg font-medium shadow-lg hover:shadow-xl hover:scale-105 transition-all"
                    >
                        "Explore My Work"
                    </a>
                </section>
                <div class="block w-full lg:w-1/2 relative z-10 mt-6 lg:mt-0">
                    <div class="relative w-full h-full min-h-[250px] sm:min-h-[350px] flex justify-end items-center">
                        <div class=move || {
                            if first_load.get() {
                                "w-[280px] sm:w-[320px] md:w-[360px] lg:w-[400px] h-[360px] sm:h-[400px] md:h-[440px] lg:h-[480px] animate-bounce"
                            } else {
                                "w-[280px] sm:w-[320px] md:w-[360px] lg:w-[400px] h-[360px] sm:h-[400px] md:h-[440px] lg:h-[480px]"
                            }
                        }>
                            <img
                                src="/profile.png"
                                alt="Portfolio"
                                class="w-full h-full object-cover rounded-xl shadow-2xl"
                            />
                        </div>
                    </div>
                </div>
            </div>
            <div class="-mt-12">
                <HeroStats />
            </div>
        </div>
    }
}

const DEVELOPER_CARD: &str = r#"const developer = {
  firstName: "Ujang",
  lastName: "Herlan",
  aka: "Mr Uhe",
  hobby: repeat = () => {
    //eat();
    //sleep();
    //code();
    //repeat();
  }
};"#;

const STATS: [(&str, &str); 3] = [
    ("10+", "Years Of Experience"),
    ("150+", "Completed Projects"),
    ("2.5K", "Satisfied Clients"),
];

#[component]
fn HeroStats() -> impl IntoView {
    view! {
        <div class="bg-gray-900/80 backdrop-blur-xl p-6 md:p-10 mt-12 flex flex-col lg:flex-row gap-10 items-center shadow-xl border border-white/10 rounded-[20px]">
            <div class="bg-gray-900/70 w-full lg:w-1/2 rounded-lg p-4 shadow-lg border border-white/10">
                <div class="flex items-center space-x-2 mb-3">
                    <span class="w-3 h-3 bg-red-500 rounded-full" />
                    <span class="w-3 h-3 bg-yellow-500 rounded-full" />
                    <span class="w-3 h-3 bg-green-500 rounded-full" />
                </div>
                <pre class="text-sm md:text-base text-gray-300 whitespace-pre-wrap">{DEVELOPER_CARD}</pre>
            </div>
            <div class="text-center lg:text-left w-full lg:w-1/2">
                <p class="text-gray-300 mb-6 text-lg">
                    "I dissect intricate user experience challenges to engineer integrity-focused solutions that resonate with billions of users."
                </p>
                <div class="flex justify-around font-bold text-2xl md:text-3xl mb-4">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div>
                                    <p>{value}</p>
                                    <span class="text-sm font-normal text-gray-400">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-center lg:justify-start gap-6 mt-4 text-xl text-gray-400">
                    <a
                        href="https://github.com/HerlanAja"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white hover:scale-110 transition"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain" />
                    </a>
                    <a
                        href="https://www.linkedin.com/in/ujang-herlan-92a30b273/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white hover:scale-110 transition"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain" />
                    </a>
                </div>
            </div>
        </div>
    }
}
