use super::view_model::ReferralWidgetViewModel;
use crate::domain::a001_referral::ui::thank_you::ThankYouModal;
use crate::shared::icons::icon;
use contracts::domain::a001_referral::FormField;
use contracts::shared::widget_config::WidgetConfig;
use leptos::ev;
use leptos::prelude::*;

const VIDEO_TITLE: &str = "Clicki Referrals | Affiliate Program";
const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn ReferralWidget(config: WidgetConfig) -> impl IntoView {
    let vm = ReferralWidgetViewModel::new(config);
    let reward_text = vm.config.with_value(|c| c.reward_text.clone());

    view! {
        <div class="crw-root">
            <Show
                when=move || vm.is_open()
                fallback=move || view! { <TriggerButton vm=vm /> }
            >
                <ReferralPanel vm=vm />
            </Show>

            <Show when=move || vm.show_thank_you()>
                <ThankYouModal
                    reward_text=reward_text.clone()
                    on_close=Callback::new(move |_| vm.dismiss_thank_you_command())
                />
            </Show>
        </div>
    }
}

#[component]
fn TriggerButton(vm: ReferralWidgetViewModel) -> impl IntoView {
    view! {
        <button
            type="button"
            class="crw-trigger"
            style=vm.accent_style()
            on:click=move |_| vm.open_command()
        >
            {icon("gift")}
            "Refer & Earn"
        </button>
    }
}

#[component]
fn ReferralPanel(vm: ReferralWidgetViewModel) -> impl IntoView {
    let config = vm.config.get_value();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div class="crw-backdrop" on:click=move |_| vm.close_command()>
            <div class="crw-panel" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="crw-panel__header">
                    <button
                        type="button"
                        class="crw-panel__close"
                        on:click=move |_| vm.close_command()
                    >
                        {icon("x")}
                    </button>
                    <h2 class="crw-panel__title">{format!("{} 👋", config.header_text)}</h2>
                    <div class="crw-video">
                        <iframe
                            width="100%"
                            height="100%"
                            src=config.video_embed_url()
                            title=VIDEO_TITLE
                            style="border: 0;"
                            allow=VIDEO_ALLOW
                            allowfullscreen=true
                        ></iframe>
                    </div>
                    <div class="crw-reward">
                        <div class="crw-reward__title">
                            {icon("dollar-sign")}
                            "Earn rewards!"
                        </div>
                        <p class="crw-reward__text">{config.reward_text.clone()}</p>
                    </div>
                </div>

                <form class="crw-form" on:submit=on_submit>
                    <FieldGroup
                        vm=vm
                        label="What's your name?"
                        fields=vec![FormField::FirstName, FormField::LastName]
                    />
                    <FieldGroup
                        vm=vm
                        label="What's your phone number?"
                        fields=vec![FormField::PhoneNumber]
                    />
                    <FieldGroup
                        vm=vm
                        label="Who are you referring?"
                        fields=vec![FormField::ReferralFirstName, FormField::ReferralLastName]
                    />
                    <FieldGroup
                        vm=vm
                        label="What's their number?"
                        fields=vec![FormField::ReferralPhone]
                    />

                    <button
                        type="submit"
                        class="crw-submit"
                        style=vm.accent_style()
                        disabled=move || vm.is_submitting()
                    >
                        {move || {
                            if vm.is_submitting() {
                                view! { "Submitting..." }.into_any()
                            } else {
                                view! { {icon("gift")} "Send Referral" }.into_any()
                            }
                        }}
                    </button>
                </form>

                <div class="crw-footer">"Get more referrals with Clicki ✨"</div>
            </div>
        </div>
    }
}

#[component]
fn FieldGroup(
    vm: ReferralWidgetViewModel,
    label: &'static str,
    fields: Vec<FormField>,
) -> impl IntoView {
    view! {
        <div class="crw-field-group">
            <label class="crw-field-group__label">{label}</label>
            <div class="crw-field-group__inputs">
                {fields
                    .into_iter()
                    .map(|field| view! { <FieldInput vm=vm field=field /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FieldInput(vm: ReferralWidgetViewModel, field: FormField) -> impl IntoView {
    view! {
        <input
            type=field.input_type()
            name=field.name()
            placeholder=field.placeholder()
            class="crw-input"
            required=true
            prop:value=move || vm.field_value(field)
            on:input=move |ev| vm.update_field(field, event_target_value(&ev))
        />
    }
}
