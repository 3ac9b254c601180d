use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::toaster::use_toasts;
use crate::contact::{ContactForm, Field, SubmissionTicket, SubmitOutcome, SUBMIT_DELAY};
use crate::portfolio::{ChannelKind, Section, CONTACT_CHANNELS};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-4 border-t">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-4xl font-bold mb-4">"Get In Touch"</h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Have a project in mind or want to discuss opportunities? Feel free to reach out!"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| {
                            let icon = match channel.kind {
                                ChannelKind::Email => "extra-email",
                                ChannelKind::Phone => "extra-phone",
                                ChannelKind::Location => "extra-location",
                            };
                            view! {
                                <div class="rounded-lg border bg-card p-6 text-center hover:shadow-lg transition-shadow animate-fade-in">
                                    <div class="w-12 h-12 bg-primary/10 rounded-full flex items-center justify-center mx-auto mb-4 text-primary">
                                        <i class=icon />
                                    </div>
                                    <h3 class="text-lg font-semibold">{channel.label}</h3>
                                    <p class="mt-2 text-sm text-muted-foreground">{channel.value}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="rounded-lg border bg-card p-6 shadow-sm max-w-2xl mx-auto animate-scale-in">
                    <h3 class="text-2xl font-semibold">"Send Me a Message"</h3>
                    <p class="text-sm text-muted-foreground mt-1 mb-6">
                        "Fill out the form below and I'll get back to you as soon as possible."
                    </p>
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(ContactForm::new());

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |ticket: SubmissionTicket| {
            if let Some(note) = form.try_update(|f| f.complete(ticket)).flatten() {
                toasts.push(note);
            }
        },
        SUBMIT_DELAY.as_millis() as f64,
    );

    // use_timeout_fn stops its own timer on cleanup
    on_cleanup(move || {
        form.try_update_untracked(|f| f.cancel());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(SubmitOutcome::Started(ticket)) = form.try_update(|f| f.submit()) {
            start(ticket);
        }
    };

    let is_submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <form on:submit=on_submit class="space-y-6">
            <FormField form field=Field::Name placeholder="John Doe" />
            <FormField form field=Field::Email input_type="email" placeholder="john@example.com" />
            <FormField form field=Field::Subject placeholder="Project Inquiry" />
            <FormField form field=Field::Message placeholder="Tell me about your project..." rows=6 />
            <button
                type="submit"
                class="w-full rounded-md bg-primary text-primary-foreground px-8 py-3 font-medium hover:bg-primary/90 disabled:opacity-50 disabled:pointer-events-none"
                disabled=is_submitting
            >
                {move || if is_submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

/// One labelled input bound to a form field, with its error underneath.
/// Passing `rows` renders a textarea.
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.edit(field, value));
    };
    let class = move || {
        let base = "w-full rounded-md border bg-background px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary";
        if form.with(|f| f.errors().contains(field)) {
            format!("{base} border-destructive")
        } else {
            base.to_string()
        }
    };

    view! {
        <div class="space-y-2">
            <label for=field.as_str() class="text-sm font-medium">
                {format!("{} *", field.label())}
            </label>
            {match rows {
                Some(rows) => {
                    Either::Left(
                        view! {
                            <textarea
                                id=field.as_str()
                                name=field.as_str()
                                placeholder=placeholder
                                rows=rows.to_string()
                                class=class
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
                None => {
                    Either::Right(
                        view! {
                            <input
                                id=field.as_str()
                                name=field.as_str()
                                type=input_type
                                placeholder=placeholder
                                class=class
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
            }}
            {move || {
                form.with(|f| f.error(field))
                    .map(|e| view! { <p class="text-sm text-destructive">{e}</p> })
            }}
        </div>
    }
}
