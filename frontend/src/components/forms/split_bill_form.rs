use shared::{Friend, Payer, SplitBillForm as SplitBillFields, SplitBillLabels};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::button::Button;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SplitBillFormProps {
    pub friend: Friend,
    pub on_split: Callback<f64>,
}

/// Mount with `key` set to the friend id so switching friends starts a fresh form.
#[function_component(SplitBillForm)]
pub fn split_bill_form(props: &SplitBillFormProps) -> Html {
    let fields = use_state(SplitBillFields::new);
    let labels = SplitBillLabels::for_friend(&props.friend);

    let on_bill_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_bill_value(input.value());
            fields.set(next);
        })
    };

    let on_expense_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_your_expense(input.value());
            fields.set(next);
        })
    };

    let on_payer_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_payer(Payer::from_value(&select.value()));
            fields.set(next);
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let on_split = props.on_split.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match fields.submit() {
                Ok(delta) => on_split.emit(delta),
                Err(err) => Logger::warn_with_component("split_bill_form", &err.to_string()),
            }
        })
    };

    let payer = fields.payer;
    html! {
        <form class="form-split-bill" onsubmit={on_submit}>
            <h2>{labels.title}</h2>

            <label for="bill-value">{"💰 Bill value"}</label>
            <input
                type="text"
                id="bill-value"
                inputmode="decimal"
                value={fields.bill_value.clone()}
                oninput={on_bill_input}
            />

            <label for="your-expense">{"🧍 Your expense"}</label>
            <input
                type="text"
                id="your-expense"
                inputmode="decimal"
                value={fields.your_expense.clone()}
                oninput={on_expense_input}
            />

            <label for="friend-expense">{format!("🧑‍🤝‍🧑 {}", labels.friend_expense)}</label>
            <input
                type="text"
                id="friend-expense"
                disabled=true
                value={fields.friend_expense_display()}
            />

            <label for="payer">{"🤑 Who is paying the bill"}</label>
            <select id="payer" onchange={on_payer_change}>
                <option value="" disabled=true selected={payer.is_none()}>{"Choose..."}</option>
                <option value={Payer::You.as_value()} selected={payer == Some(Payer::You)}>{"You"}</option>
                <option value={Payer::Friend.as_value()} selected={payer == Some(Payer::Friend)}>
                    {labels.friend_option}
                </option>
            </select>

            <Button disabled={!fields.can_submit()}>{"Split bill"}</Button>
        </form>
    }
}
