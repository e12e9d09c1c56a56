//! Contact form: collects name, email and message, POSTs them as a
//! multipart field set to the Cloudflare Worker and surfaces the outcome
//! inline. One attempt in flight at a time; no retries, no timeout beyond
//! the browser's own.

use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::icons::SendIcon;
use crate::components::turnstile::{TurnstileWidget, WidgetResetGuard};
use crate::config;
use crate::submission::{Outcome, SubmissionState};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let status = use_state(SubmissionState::idle);

    let onsubmit = {
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The disabled submit button is only a UI convention; the flag
            // is what actually keeps a second attempt out.
            if !status.accepts_submit() {
                return;
            }

            let form: HtmlFormElement = e.target_unchecked_into();
            status.set(SubmissionState::in_flight());

            // Multipart snapshot of every field, including the Turnstile
            // token the widget injected.
            let fields = match FormData::new_with_form(&form) {
                Ok(fields) => fields,
                Err(_) => {
                    status.set(SubmissionState::failed("no se pudo leer el formulario"));
                    return;
                }
            };

            let status = status.clone();
            spawn_local(async move {
                // Dropped on every exit path, so the widget issues a fresh
                // token whether the attempt succeeded, was rejected or
                // never reached the worker.
                let _reset = WidgetResetGuard;

                let outcome = match Request::post(config::worker_url())
                    .body(fields)
                    .send()
                    .await
                {
                    Ok(response) => Outcome::from_attempt(response.ok(), response.text().await),
                    Err(e) => Outcome::Unreachable(e.to_string()),
                };

                if outcome.clears_form() {
                    form.reset();
                } else if let Some(detail) = outcome.detail() {
                    gloo_console::error!("contact submission failed:", detail);
                }

                status.set(outcome.settle());
            });
        })
    };

    html! {
        <div class="contact-form-wrap">
            <h3 class="section-title">{"Conecta con Nosotros"}</h3>
            <p class="section-subtitle">{"Completa el formulario y te contactaremos a la brevedad."}</p>

            <form {onsubmit} class="contact-form">
                <div class="form-field">
                    <label for="name" class="form-label">{"Tu Nombre Completo"}</label>
                    <input type="text" id="name" name="name" required={true} class="form-input" />
                </div>
                <div class="form-field">
                    <label for="email" class="form-label">{"Correo Electrónico Empresarial"}</label>
                    <input type="email" id="email" name="email" required={true} class="form-input" />
                </div>
                <div class="form-field">
                    <label for="message" class="form-label">{"Tu Mensaje o Consulta"}</label>
                    <textarea id="message" name="message" rows="5" required={true} class="form-input"></textarea>
                </div>

                <TurnstileWidget />

                <div class="form-actions">
                    <button type="submit" disabled={status.submitting} class="submit-button">
                        <SendIcon />
                        { if status.submitting { "Enviando..." } else { "Enviar Consulta" } }
                    </button>
                </div>
            </form>

            if !status.message.is_empty() {
                <p class={classes!("status-message", status.color.css_class())}>
                    { status.message.clone() }
                </p>
            }
        </div>
    }
}
