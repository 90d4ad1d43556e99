use leptos::{ev::SubmitEvent, prelude::*, server_fn::codec::Json, task::spawn_local};

use crate::contact::{ContactForm, ContactMessage, Field, SubmissionError, SubmitStatus};
#[cfg(feature = "ssr")]
use crate::relay::RelayClient;
use crate::theme::Accent;

#[server(input = Json)]
pub async fn send_contact(message: ContactMessage) -> Result<(), SubmissionError> {
    let relay = use_context::<RelayClient>().ok_or(SubmissionError::Unavailable)?;
    relay.send_contact(&message).await
}

const METHODS: [(Accent, &str, &str, &str, &str); 3] = [
    (
        Accent::Blue,
        "Email",
        "ujangherlaan@gmail.com",
        "mailto:ujangherlaan@gmail.com",
        "📧",
    ),
    (
        Accent::Purple,
        "LinkedIn",
        "Ujang Herlan",
        "https://www.linkedin.com/in/ujangherlan",
        "💼",
    ),
    (
        Accent::Green,
        "WhatsApp",
        "+6285846537024",
        "https://wa.me/6285846537024",
        "💬",
    ),
];

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(Some(message))) => spawn_local(async move {
                let res = send_contact(message).await;
                if let Err(e) = &res {
                    log::warn!("contact submission failed: {e}");
                }
                form.update(|f| f.resolve(res));
            }),
            Some(Err(e)) => log::debug!("contact form not sent: {e:?}"),
            // already sending
            _ => {}
        }
    };

    view! {
        <section id="contact" class="w-full py-16 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="flex justify-center w-full">
                    <h1 class="text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-400 to-green-400 mb-4">
                        "Let's Talk About Your Great Project"
                    </h1>
                </div>
                <div class="h-px bg-gradient-to-r from-transparent via-white/50 to-transparent mb-12 mx-auto w-3/4" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="space-y-6">
                        {METHODS
                            .into_iter()
                            .map(|(accent, title, value, href, icon)| {
                                let tokens = accent.tokens();
                                view! {
                                    <div class="p-6 rounded-2xl backdrop-blur-lg bg-white/5 border border-white/10 hover:-translate-y-1 transition">
                                        <div class="flex items-center gap-4 mb-3">
                                            <div class=format!(
                                                "p-3 rounded-full border {}",
                                                tokens.badge,
                                            )>{icon}</div>
                                            <h3 class=format!(
                                                "text-xl font-semibold {}",
                                                tokens.text,
                                            )>{title}</h3>
                                        </div>
                                        <p class="text-gray-300 mb-2">{value}</p>
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=format!("hover:underline {}", tokens.text)
                                        >
                                            "Message"
                                        </a>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="relative rounded-3xl p-8 overflow-hidden backdrop-blur-lg bg-white/5 border border-white/10">
                        <div class="relative z-10">
                            {move || {
                                (form.with(|f| f.status()) == SubmitStatus::Succeeded)
                                    .then(|| {
                                        view! {
                                            <div class="mb-6 p-4 bg-green-900/20 rounded-lg border border-green-400/30">
                                                <p class="text-green-400">
                                                    "Message sent successfully! We'll get back to you soon."
                                                </p>
                                            </div>
                                        }
                                    })
                            }}
                            {move || {
                                form.with(|f| f.error().map(str::to_string))
                                    .map(|e| {
                                        view! {
                                            <div class="mb-6 p-4 bg-red-900/20 rounded-lg border border-red-400/30">
                                                <p class="text-red-400">{e}</p>
                                            </div>
                                        }
                                    })
                            }}
                            <form class="space-y-6" on:submit=on_submit>
                                <div>
                                    <label for="from_name" class="block text-gray-300 mb-2">
                                        "Your full name"
                                    </label>
                                    <input
                                        id="from_name"
                                        type="text"
                                        name="from_name"
                                        prop:value=move || form.with(|f| f.name().to_string())
                                        on:input=move |ev| {
                                            form.update(|f| f.set_field(Field::Name, event_target_value(&ev)))
                                        }
                                        class=format!(
                                            "w-full px-5 py-3 bg-white/5 rounded-xl border border-white/10 focus:outline-none focus:ring-2 {}",
                                            Accent::Blue.tokens().ring,
                                        )
                                    />
                                </div>
                                <div>
                                    <label for="from_email" class="block text-gray-300 mb-2">
                                        "Your Email"
                                    </label>
                                    <input
                                        id="from_email"
                                        type="email"
                                        name="from_email"
                                        prop:value=move || form.with(|f| f.email().to_string())
                                        on:input=move |ev| {
                                            form.update(|f| f.set_field(Field::Email, event_target_value(&ev)))
                                        }
                                        class=format!(
                                            "w-full px-5 py-3 bg-white/5 rounded-xl border border-white/10 focus:outline-none focus:ring-2 {}",
                                            Accent::Purple.tokens().ring,
                                        )
                                    />
                                </div>
                                <div>
                                    <label for="message" class="block text-gray-300 mb-2">
                                        "Your Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="5"
                                        prop:value=move || form.with(|f| f.message().to_string())
                                        on:input=move |ev| {
                                            form.update(|f| {
                                                f.set_field(Field::Message, event_target_value(&ev))
                                            })
                                        }
                                        class=format!(
                                            "w-full px-5 py-3 bg-white/5 rounded-xl border border-white/10 focus:outline-none focus:ring-2 {}",
                                            Accent::Green.tokens().ring,
                                        )
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || form.with(ContactForm::is_sending)
                                    class=move || {
                                        if form.with(ContactForm::is_sending) {
                                            "w-full py-3 px-6 rounded-xl font-medium flex items-center justify-center gap-2 bg-blue-900/50"
                                        } else {
                                            "w-full py-3 px-6 rounded-xl font-medium flex items-center justify-center gap-2 bg-gradient-to-r from-blue-600 via-purple-600 to-green-600 hover:opacity-90"
                                        }
                                    }
                                >
                                    {move || {
                                        if form.with(ContactForm::is_sending) {
                                            "Sending..."
                                        } else {
                                            "Send Now"
                                        }
                                    }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
