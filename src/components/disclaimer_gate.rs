//! Hides its children behind the content disclaimer until the visitor has
//! acknowledged it in the current browsing session.
use leptos::*;
use crate::components::disclaimer_modal::DisclaimerModal;
use crate::gates::disclaimer::DisclaimerState;
use crate::storage::use_session_store;

#[component]
pub fn DisclaimerGate(children: ChildrenFn) -> impl IntoView {
    let store = use_session_store();
    // Stays Pending through server rendering; the flag is only readable in the browser.
    let (gate, set_gate) = create_signal(DisclaimerState::Pending);

    let check_store = store.clone();
    create_effect(move |_| {
        set_gate.set(DisclaimerState::check(check_store.as_ref()));
    });

    let acknowledge = Callback::new(move |_: ()| {
        set_gate.set(DisclaimerState::acknowledge_or_reveal(store.as_ref()));
    });

    view! {
        <DisclaimerModal
            open=Signal::derive(move || gate.get().modal_visible())
            on_acknowledge=acknowledge
        />
        {move || if gate.get().content_visible() {
            children().into_view()
        } else {
            view! {
                <div class="gate-placeholder">
                    <p>{ "Please accept the disclaimer to view reviews." }</p>
                </div>
            }.into_view()
        }}
    }
}
