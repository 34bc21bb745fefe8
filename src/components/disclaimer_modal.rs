use leptos::*;

/// Content warning overlay. No close button and no backdrop dismissal;
/// acknowledging is the only way out.
#[component]
pub fn DisclaimerModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_acknowledge: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div
                    class="modal"
                    role="alertdialog"
                    aria-modal="true"
                    aria-labelledby="disclaimer-title"
                >
                    <h2 id="disclaimer-title" class="modal-title">{ "⚠️ Content Disclaimer" }</h2>
                    <p class="modal-lead">{ "Please read carefully before continuing:" }</p>
                    <ul class="modal-points">
                        <li>
                            "The reviews displayed on this platform may contain "
                            <strong>"strong language"</strong>" and "<strong>"explicit content"</strong>"."
                        </li>
                        <li>
                            "Some reviews may use "<strong>"profanity"</strong>", "
                            <strong>"offensive terms"</strong>", or "
                            <strong>"controversial opinions"</strong>"."
                        </li>
                        <li>{ "Reviews represent individual experiences and opinions, not the views of OpenHeart Reviews." }</li>
                        <li>{ "We provide this platform for honest feedback, but cannot control the language used by reviewers." }</li>
                        <li>{ "By continuing, you acknowledge that you may encounter content that could be considered offensive or inappropriate." }</li>
                    </ul>
                    <p class="modal-legal">
                        <strong>"Legal Notice:"</strong>
                        " OpenHeart Reviews is not liable for the content of user-generated reviews. "
                        "This disclaimer is provided to avoid potential disputes and legal concerns regarding review content."
                    </p>
                    <div class="modal-actions">
                        <button
                            class="btn-primary disclaimer-accept"
                            on:click=move |_| on_acknowledge.call(())
                        >
                            { "I Understand, Continue" }
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
