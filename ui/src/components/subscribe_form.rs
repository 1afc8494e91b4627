use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::config::SiteConfig;
use crate::core::submit;
use crate::core::subscribe::{
    dismiss_after, submit_once, Handled, SubscribeEngine, SubscribeStatus,
};
use crate::i18n::SubscribeText;

#[component]
pub fn SubscribeForm(text: &'static SubscribeText) -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let dismiss_after_ms = config.dismiss_after_ms;
    let mut engine = use_signal(move || SubscribeEngine::new(dismiss_after_ms));
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let events = use_coroutine(move |mut rx: UnboundedReceiver<SubscribeEvent>| {
        let config = config.clone();
        async move {
            while let Some(SubscribeEvent::Submit {
                name: entered_name,
                email: entered_email,
            }) = rx.next().await
            {
                let config = config.clone();
                let handled =
                    submit_once(&mut engine, &entered_name, &entered_email, move |submission| {
                        async move { submit::send(&config, &submission).await }
                    })
                    .await;

                let Handled::Sent { result, dismiss } = handled else {
                    continue;
                };
                if result.is_ok() {
                    name.set(String::new());
                    email.set(String::new());
                }
                if let Some(dismiss) = dismiss {
                    // Scoped to this component: cancelled if the form unmounts first.
                    spawn(async move {
                        dismiss_after(engine, dismiss).await;
                    });
                }
            }
        }
    });

    let state = engine();
    let sending = state.is_sending();
    let failed = matches!(state.status, SubscribeStatus::Failed(_));

    rsx! {
        if state.is_submitted() {
            div { class: "subscribe__success", role: "status",
                span { class: "subscribe__check", aria_hidden: "true", "✓" }
                p { class: "subscribe__success-text", "{text.success}" }
            }
        } else {
            form {
                class: "subscribe__form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    events.send(SubscribeEvent::Submit {
                        name: name(),
                        email: email(),
                    });
                },

                div { class: "subscribe__field",
                    label { class: "subscribe__label", r#for: "subscribe-name", "{text.name}" }
                    input {
                        id: "subscribe-name",
                        class: "subscribe__input",
                        r#type: "text",
                        name: "name",
                        required: true,
                        placeholder: "{text.name_placeholder}",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div { class: "subscribe__field",
                    label { class: "subscribe__label", r#for: "subscribe-email", "{text.email}" }
                    input {
                        id: "subscribe-email",
                        class: "subscribe__input",
                        r#type: "email",
                        name: "email",
                        required: true,
                        placeholder: "{text.email_placeholder}",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                if state.last_field_error.is_some() {
                    p { class: "subscribe__notice", "{text.missing_fields}" }
                }
                if failed {
                    p { class: "subscribe__notice subscribe__notice--error", role: "alert",
                        "{text.error}"
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary subscribe__button",
                    disabled: sending,
                    if sending { "{text.sending}" } else { "{text.button}" }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
enum SubscribeEvent {
    Submit { name: String, email: String },
}
