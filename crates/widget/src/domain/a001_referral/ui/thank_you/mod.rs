use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

/// Shown after both webhooks went through. Dismiss only.
#[component]
pub fn ThankYouModal(reward_text: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <ModalFrame on_close=on_close modal_class="crw-thank-you".to_string()>
            <button
                type="button"
                class="crw-thank-you__close"
                on:click=move |_| on_close.run(())
            >
                {icon("x")}
            </button>
            <div class="crw-thank-you__icon">{icon("gift")}</div>
            <h3 class="crw-thank-you__title">"Thank you for your referral!"</h3>
            <p class="crw-thank-you__reward">{reward_text}</p>
            <button
                type="button"
                class="crw-thank-you__ok"
                on:click=move |_| on_close.run(())
            >
                "Close"
            </button>
        </ModalFrame>
    }
}
