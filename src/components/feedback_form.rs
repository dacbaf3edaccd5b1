use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::utils::feedback::{post_feedback, FeedbackKind, FeedbackSubmission, SubmissionStatus};

#[function_component(FeedbackForm)]
pub fn feedback_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let kind = use_state(|| FeedbackKind::Suggestion);
    let message = use_state(String::new);
    let status = use_state(|| SubmissionStatus::Idle);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(FeedbackKind::parse(&select.value()));
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let kind = kind.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The submit button is disabled while Submitting; this is the
            // state-level guard against a second in-flight request.
            let Some(next) = (*status).begin() else {
                return;
            };
            status.set(next);

            let submission = FeedbackSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                kind: *kind,
                message: (*message).clone(),
            };
            let name = name.clone();
            let email = email.clone();
            let kind = kind.clone();
            let message = message.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let accepted = post_feedback(&submission).await;
                if accepted {
                    // Fields are cleared only on success; on failure the
                    // user's input stays put for a manual resubmit.
                    name.set(String::new());
                    email.set(String::new());
                    kind.set(FeedbackKind::Suggestion);
                    message.set(String::new());
                }
                status.set(SubmissionStatus::Submitting.finish(accepted));
            });
        })
    };

    let on_send_another = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            status.set((*status).reset());
        })
    };

    if *status == SubmissionStatus::Success {
        return html! {
            <div class="feedback-success">
                <h3>{"Thanks for the feedback! 💌"}</h3>
                <p>{"Your message is on its way. It genuinely helps shape StudyPrint."}</p>
                <button class="btn btn-secondary" onclick={on_send_another}>
                    {"Send another message"}
                </button>
            </div>
        };
    }

    let submitting = status.is_submitting();
    html! {
        <form class="feedback-form" onsubmit={onsubmit}>
            <div class="form-row">
                <label for="feedback-name">{"Name"}</label>
                <input
                    id="feedback-name"
                    type="text"
                    placeholder="Your name"
                    required=true
                    value={(*name).clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-row">
                <label for="feedback-email">{"Email"}</label>
                <input
                    id="feedback-email"
                    type="email"
                    placeholder="you@example.com"
                    required=true
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </div>
            <div class="form-row">
                <label for="feedback-type">{"Type"}</label>
                <select id="feedback-type" onchange={on_kind}>
                    <option value="suggestion" selected={*kind == FeedbackKind::Suggestion}>{"Suggestion"}</option>
                    <option value="bug" selected={*kind == FeedbackKind::Bug}>{"Bug report"}</option>
                    <option value="feature" selected={*kind == FeedbackKind::Feature}>{"Feature request"}</option>
                    <option value="other" selected={*kind == FeedbackKind::Other}>{"Other"}</option>
                </select>
            </div>
            <div class="form-row">
                <label for="feedback-message">{"Message"}</label>
                <textarea
                    id="feedback-message"
                    rows="5"
                    placeholder="What should StudyPrint do better?"
                    required=true
                    value={(*message).clone()}
                    oninput={on_message}
                />
            </div>
            if *status == SubmissionStatus::Error {
                <p class="feedback-error">
                    {"Something went wrong sending your message. Please try again."}
                </p>
            }
            <button class="btn btn-primary" type="submit" disabled={submitting}>
                { if submitting { "Sending..." } else { "Send feedback" } }
            </button>
        </form>
    }
}
