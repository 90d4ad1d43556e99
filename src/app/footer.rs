use chrono::{DateTime, Datelike, Utc};
use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{NewsletterForm, SubmissionError, SubmitStatus};
#[cfg(feature = "ssr")]
use crate::relay::RelayClient;

#[server]
pub async fn subscribe_newsletter(email: String) -> Result<(), SubmissionError> {
    let relay = use_context::<RelayClient>().ok_or(SubmissionError::Unavailable)?;
    relay.subscribe(&email).await
}

const QUICK_LINKS: [(&str, &str); 6] = [
    ("Home", "/#home"),
    ("About", "/#about"),
    ("Skills", "/#skills"),
    ("Projects", "/#projects"),
    ("Testimonials", "/#testimonials"),
    ("Contact", "/#contact"),
];

const SOCIALS: [(&str, &str, &str); 4] = [
    ("https://github.com/HerlanAja", "devicon-github-plain", "GitHub"),
    ("https://twitter.com/", "devicon-twitter-original", "Twitter"),
    ("https://linkedin.com/", "devicon-linkedin-plain", "LinkedIn"),
    ("https://instagram.com/herlaaannn", "extra-instagram", "Instagram"),
];

fn build_date() -> String {
    let stamp = env!("BUILD_TIME");
    DateTime::parse_from_rfc3339(stamp)
        .map(|d| d.format("%b %e %Y").to_string())
        .unwrap_or_else(|_| stamp.to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="w-full bg-gradient-to-b from-gray-900 to-black relative overflow-hidden pt-16 pb-8">
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-indigo-500/50 to-transparent" />
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 lg:gap-12 mb-12">
                    <FooterSection title="About">
                        <div class="space-y-4">
                            <h2 class="text-2xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-indigo-400 to-purple-400">
                                "DevPortfolio"
                            </h2>
                            <p class="text-gray-400 text-sm">
                                "Showcasing my journey as a developer through innovative projects and creative solutions. Building digital experiences that make a difference."
                            </p>
                            <div class="flex space-x-3 pt-2">
                                {SOCIALS
                                    .into_iter()
                                    .map(|(href, icon, label)| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=label
                                                class="w-10 h-10 rounded-full bg-gray-800 flex items-center justify-center text-gray-300 hover:bg-indigo-600 hover:text-white transition-colors duration-300"
                                            >
                                                <i class=icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </FooterSection>
                    <FooterSection title="Quick Links">
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|(name, href)| {
                                    view! {
                                        <li class="hover:translate-x-1 transition-transform">
                                            <a
                                                href=href
                                                class="text-gray-400 hover:text-indigo-400 transition-colors duration-300"
                                            >
                                                {name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </FooterSection>
                    <FooterSection title="Contact Info">
                        <ul class="space-y-3 text-gray-400">
                            <li>"📍 Pasir Datar Indah, Kec. Caringin, Kabupaten Sukabumi, Jawa Barat"</li>
                            <li>"📞 +6285846537024"</li>
                            <li>"✉️ ujangherlaan@gmail.com"</li>
                        </ul>
                    </FooterSection>
                    <FooterSection title="Newsletter">
                        <Newsletter />
                    </FooterSection>
                </div>
                <div class="h-px bg-gradient-to-r from-transparent via-gray-800 to-transparent mb-6" />
                <div class="flex flex-col md:flex-row justify-between items-center text-gray-500 text-sm">
                    <p>{format!("© {year} Ujang Herlan. All rights reserved.")}</p>
                    <p class="mt-4 md:mt-0">
                        "Made with ❤️ using Rust & Leptos · built " {build_date()}
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="mb-8 md:mb-0">
            <h3 class="font-bold text-lg mb-4 border-b border-gray-800 pb-2">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let form = RwSignal::new(NewsletterForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(Some(email))) => spawn_local(async move {
                let res = subscribe_newsletter(email).await;
                if let Err(e) = &res {
                    log::warn!("newsletter sign-up failed: {e}");
                }
                form.update(|f| f.resolve(res));
            }),
            Some(Err(e)) => log::debug!("newsletter form not sent: {e:?}"),
            _ => {}
        }
    };

    view! {
        <div class="space-y-4">
            <p class="text-gray-400 text-sm">
                "Subscribe to receive updates on new projects, blog posts, and tech insights."
            </p>
            {move || {
                if form.with(NewsletterForm::is_subscribed) {
                    Either::Left(
                        view! {
                            <div class="bg-indigo-900/30 border border-indigo-800/50 rounded-lg p-3 text-center">
                                <p class="text-indigo-300 text-sm">
                                    "Thank you for subscribing! You'll receive updates soon."
                                </p>
                            </div>
                        },
                    )
                } else {
                    let sending = move || form.with(|f| f.status()) == SubmitStatus::Sending;
                    Either::Right(
                        view! {
                            <form class="space-y-3" on:submit=on_submit>
                                <input
                                    type="email"
                                    placeholder="Your email address"
                                    prop:value=move || form.with(|f| f.email().to_string())
                                    on:input=move |ev| {
                                        form.update(|f| f.set_email(event_target_value(&ev)))
                                    }
                                    class="w-full px-4 py-2.5 bg-gray-800/50 border border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500 text-gray-300 placeholder-gray-500"
                                />
                                <button
                                    type="submit"
                                    disabled=sending
                                    class="w-full px-4 py-2.5 bg-gradient-to-r from-indigo-600 to-purple-600 rounded-lg font-medium disabled:opacity-70"
                                >
                                    {move || if sending() { "Subscribing..." } else { "Subscribe →" }}
                                </button>
                                {move || {
                                    form.with(|f| f.error().map(str::to_string))
                                        .map(|e| view! { <p class="text-red-400 text-sm">{e}</p> })
                                }}
                            </form>
                        },
                    )
                }
            }}
        </div>
    }
}
