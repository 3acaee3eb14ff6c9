use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    server_fn::codec::GetUrl,
    task::spawn_local,
};

use crate::contact::{
    ContactConfig, ContactSubmission, EmailJsSender, Field, MessageSender, SendError,
    SubmissionStatus,
};
use crate::portfolio::SOCIAL_LINKS;

use super::{
    icon_view,
    reveal::{stagger_delay_ms, Direction, Reveal},
};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border bg-gray-800/50 border-gray-600 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Provider routing identifiers, resolved by the server at startup.
#[server(input = GetUrl)]
pub async fn get_contact_config() -> Result<ContactConfig, ServerFnError> {
    use_context::<ContactConfig>()
        .ok_or_else(|| ServerFnError::new("contact form is not configured"))
}

fn status_class(status: &SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Failed(_) => "text-center text-red-400",
        _ => "text-center text-green-400",
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-blue-400 to-green-400 bg-clip-text text-transparent">
                        "Let's Connect"
                    </h2>
                    <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                        "Ready to collaborate on the next big AI innovation? Let's build something amazing together."
                    </p>
                </Reveal>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <Reveal direction=Direction::Left>
                        <ContactForm />
                    </Reveal>
                    <Reveal direction=Direction::Right delay_ms=200 class="space-y-8">
                        <ContactAvatar />
                        <SocialLinks />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let config = OnceResource::new(get_contact_config());
    let submission = RwSignal::new(ContactSubmission::new());
    let is_sending = move || submission.with(|s| s.is_sending());

    let value_of = move |field: Field| move || submission.with(|s| s.draft().get(field).to_string());
    let on_input = move |field: Field| {
        move |ev: Event| submission.update(|s| s.update_field(field, event_target_value(&ev)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = submission.try_update(|s| s.begin()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = match config.await {
                Ok(config) => EmailJsSender::new(config).send(&draft).await,
                Err(err) => {
                    log::error!("contact configuration unavailable: {err}");
                    Err(SendError::Unconfigured)
                }
            };
            submission.update(|s| s.resolve(outcome));
        });
    };

    view! {
        <div class="rounded-lg border bg-gray-900/80 backdrop-blur-sm border-gray-700/50 hover:border-blue-400/50 transition-all duration-300">
            <div class="p-6">
                <h3 class="text-white text-xl font-semibold flex items-center space-x-2">
                    <span aria-hidden="true">"💬"</span>
                    <span>"Send a Message"</span>
                </h3>
            </div>
            <form class="px-6 pb-6 space-y-6" on:submit=on_submit>
                <input
                    type="text"
                    name=Field::Name.as_str()
                    placeholder="Your Name"
                    class=INPUT_CLASS
                    required=true
                    prop:value=value_of(Field::Name)
                    on:input=on_input(Field::Name)
                />
                <input
                    type="email"
                    name=Field::Email.as_str()
                    placeholder="Your Email"
                    class=INPUT_CLASS
                    required=true
                    prop:value=value_of(Field::Email)
                    on:input=on_input(Field::Email)
                />
                <textarea
                    name=Field::Message.as_str()
                    placeholder="Your Message"
                    rows=5
                    class=format!("{INPUT_CLASS} resize-none")
                    required=true
                    prop:value=value_of(Field::Message)
                    on:input=on_input(Field::Message)
                ></textarea>
                <button
                    type="submit"
                    disabled=is_sending
                    class="w-full px-4 py-2 rounded-md font-medium text-white bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 disabled:opacity-60"
                >
                    {move || {
                        if is_sending() {
                            "Sending...".into_any()
                        } else {
                            view! {
                                <span class="mr-2" aria-hidden="true">"🚀"</span>
                                "Launch Message"
                            }
                                .into_any()
                        }
                    }}
                </button>
                {move || {
                    submission
                        .with(|s| {
                            s.status()
                                .message()
                                .map(|msg| (msg.to_string(), status_class(s.status())))
                        })
                        .map(|(msg, class)| view! { <p class=class>{msg}</p> })
                }}
            </form>
        </div>
    }
}

#[component]
fn ContactAvatar() -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-40 h-40 mx-auto mb-6 relative animate-float">
                <div class="w-full h-full rounded-full bg-gradient-to-r from-blue-500/20 to-purple-500/20 border-2 border-blue-400/30 flex items-center justify-center text-6xl">
                    "🤖"
                </div>
                <div class="absolute inset-0 border-2 border-dashed border-purple-400/20 rounded-full animate-spin-slow" />
            </div>
            <p class="text-gray-300 text-lg">"\"Ready to process your ideas into reality!\""</p>
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h3 class="text-xl font-bold text-white text-center mb-6">"Connect With Me"</h3>
            {SOCIAL_LINKS
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    view! {
                        <Reveal delay_ms=stagger_delay_ms(index, 100, 0) duration_ms=500>
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="group flex items-center space-x-4 p-4 bg-gray-900/50 rounded-lg border border-gray-700/50 hover:border-blue-400/50 transition-all duration-300 hover:scale-105 hover:translate-x-2.5"
                            >
                                <div class=format!(
                                    "p-2 rounded-full bg-gradient-to-r {} text-white",
                                    link.gradient,
                                )>{icon_view(link.icon)}</div>
                                <span class="text-gray-300 group-hover:text-white transition-colors duration-300">
                                    {link.label}
                                </span>
                            </a>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
