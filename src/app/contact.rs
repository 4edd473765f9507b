use std::future::Future;

use leptos::{either::Either, ev::SubmitEvent, prelude::*, server_fn::codec::Json, task::spawn_local};

use super::{reveal::Reveal, toast::Toaster};
use crate::contact::{
    Attempt, ContactEndpoint, ContactForm, ContactSubmission, Field, SubmitError,
};
use crate::motion::RevealVariant;
use crate::portfolio::{CONTACT_INFO, SOCIAL_LINKS};

/// `POST /api/contact` with a JSON body of the four contact fields.
#[server(prefix = "/api", endpoint = "contact", input = Json)]
pub async fn send_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    use http::StatusCode;
    use leptos_axum::ResponseOptions;

    use crate::contact::ContactFields;

    let fields = ContactFields {
        name,
        email,
        subject,
        message,
    };
    match ContactSubmission::parse(&fields) {
        Ok(submission) => {
            tracing::info!(
                name = submission.name(),
                email = submission.email(),
                subject = submission.subject(),
                message_len = submission.message().len(),
                "contact submission received"
            );
            Ok(())
        }
        Err(errors) => {
            if let Some(res) = use_context::<ResponseOptions>() {
                res.set_status(StatusCode::UNPROCESSABLE_ENTITY);
            }
            let reason = errors.first().map(|e| e.to_string()).unwrap_or_default();
            tracing::warn!(%reason, "rejected contact submission");
            Err(ServerFnError::new(reason))
        }
    }
}

struct ServerFnEndpoint;

impl ContactEndpoint for ServerFnEndpoint {
    fn send(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), SubmitError>> {
        let (name, email, subject, message) = submission.into_parts();
        async move {
            send_contact(name, email, subject, message)
                .await
                .map_err(submit_error)
        }
    }
}

fn submit_error(err: ServerFnError) -> SubmitError {
    match err {
        ServerFnError::ServerError(msg) => SubmitError::from_message(msg),
        ServerFnError::Request(msg) | ServerFnError::Response(msg) => {
            log::warn!("contact request transport failure: {msg}");
            SubmitError::from_message(msg)
        }
        other => {
            log::error!("contact request failed: {other}");
            SubmitError::Unknown
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 md:py-32 bg-gradient-to-b from-muted/20 to-background">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <div class="text-center mb-16">
                        <span class="inline-block px-4 py-2 bg-accent/10 rounded-full text-sm font-mono text-accent mb-4">
                            "✉️ Get In Touch"
                        </span>
                        <h2 class="text-4xl sm:text-5xl md:text-6xl font-black mb-6">
                            <span class="gradient-text">"Let's Work Together"</span>
                        </h2>
                        <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                            "Have a project in mind? Let's discuss how I can help bring your ideas to life"
                        </p>
                    </div>
                </Reveal>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <Reveal>
                        <div class="gradient-border p-8 rounded-2xl">
                            <MessageForm />
                        </div>
                    </Reveal>
                    <div class="space-y-8">
                        <ContactInfoCards />
                        <SocialLinks />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match form.try_update(ContactForm::begin_submit) {
            Some(Attempt::Send(submission)) => submission,
            Some(Attempt::Invalid) => {
                log::debug!("contact form has invalid fields");
                return;
            }
            Some(Attempt::InFlight) | None => return,
        };
        spawn_local(async move {
            let result = ServerFnEndpoint.send(submission).await;
            if let Err(err) = &result {
                log::warn!("contact submission failed: {err}");
            }
            if let Some(toast) = form.try_update(|f| f.finish(result)) {
                toaster.show(toast);
            }
        });
    };

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <form class="space-y-6" novalidate on:submit=on_submit>
            <FormField form field=Field::Name placeholder="John Doe" />
            <FormField form field=Field::Email input_type="email" placeholder="hello@johndoe.dev" />
            <FormField form field=Field::Subject placeholder="Project Inquiry" />
            <FormField
                form
                field=Field::Message
                placeholder="Tell me about your project..."
                multiline=true
            />
            <button
                type="submit"
                data-testid="button-send-message"
                disabled=submitting
                class="btn-primary w-full px-8 py-4 rounded-lg text-primary-foreground font-semibold inline-flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {move || {
                    if submitting() {
                        Either::Left(
                            view! {
                                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin" />
                                "Sending..."
                            },
                        )
                    } else {
                        Either::Right(view! { "➤ Send Message" })
                    }
                }}
            </button>
        </form>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-muted border-2 border-border rounded-lg text-foreground placeholder-muted-foreground focus:border-primary focus:ring-2 focus:ring-primary/20 transition-all duration-300";

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let test_id = if multiline {
        format!("textarea-{}", field.id())
    } else {
        format!("input-{}", field.id())
    };

    view! {
        <div>
            <label for=field.id() class="block text-sm font-semibold mb-2 text-foreground">
                {field.label()}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=field.id()
                            name=field.id()
                            rows="6"
                            data-testid=test_id
                            placeholder=placeholder
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value
                            on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                        />
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=field.id()
                            name=field.id()
                            type=input_type
                            data-testid=test_id
                            placeholder=placeholder
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                        />
                    },
                )
            }}
            {move || {
                form.with(|f| f.error(field).map(ToString::to_string))
                    .map(|msg| view! { <p class="text-destructive text-sm mt-1">{msg}</p> })
            }}
        </div>
    }
}

#[component]
fn ContactInfoCards() -> impl IntoView {
    CONTACT_INFO
        .iter()
        .enumerate()
        .map(|(index, info)| {
            view! {
                <Reveal variant=RevealVariant::FadeInRight delay_ms={index as u32 * 100}>
                    <div class="gradient-border p-6 rounded-2xl">
                        <div class="flex items-start gap-4">
                            <div class="flex-shrink-0 w-12 h-12 bg-primary/20 rounded-lg flex items-center justify-center text-xl">
                                {info.icon}
                            </div>
                            <div>
                                <h3 class="text-lg font-bold mb-1 text-foreground">{info.title}</h3>
                                {match info.link {
                                    Some(href) => {
                                        Either::Left(
                                            view! {
                                                <a
                                                    href=href
                                                    data-testid=format!(
                                                        "link-{}",
                                                        info.title.to_lowercase(),
                                                    )
                                                    class="text-muted-foreground hover:text-primary transition-colors"
                                                >
                                                    {info.value}
                                                </a>
                                            },
                                        )
                                    }
                                    None => {
                                        Either::Right(
                                            view! {
                                                <p class="text-muted-foreground">{info.value}</p>
                                            },
                                        )
                                    }
                                }}
                            </div>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view()
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <Reveal>
            <div class="gradient-border p-8 rounded-2xl">
                <h3 class="text-xl font-bold mb-6 text-center text-foreground">"Connect With Me"</h3>
                <div class="flex justify-center gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    aria-label=social.label
                                    data-testid=format!("social-{}", social.label.to_lowercase())
                                    class="social-icon w-12 h-12 bg-muted rounded-lg flex items-center justify-center text-foreground text-xl hover:text-primary hover:-translate-y-1 hover:scale-110 transition-all"
                                >
                                    <i class=social.icon_class />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
