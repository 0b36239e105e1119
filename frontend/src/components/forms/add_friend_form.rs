use shared::{AddFriendForm as AddFriendFields, Friend, SplitterConfig};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::button::Button;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AddFriendFormProps {
    pub config: SplitterConfig,
    pub on_add: Callback<Friend>,
}

#[function_component(AddFriendForm)]
pub fn add_friend_form(props: &AddFriendFormProps) -> Html {
    let fields = {
        let config = props.config.clone();
        use_state(move || AddFriendFields::new(&config))
    };

    let on_name_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_name(input.value());
            fields.set(next);
        })
    };

    let on_image_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_image(input.value());
            fields.set(next);
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*fields).clone();
            match next.submit() {
                Some(friend) => {
                    fields.set(next);
                    on_add.emit(friend);
                }
                None => {
                    Logger::debug_with_component("add_friend_form", "Name and image are required");
                }
            }
        })
    };

    html! {
        <form class="form-add-friend" onsubmit={on_submit}>
            <label for="friend-name">{"🧑 Name"}</label>
            <input
                type="text"
                id="friend-name"
                value={fields.name.clone()}
                oninput={on_name_input}
            />

            <label for="friend-image">{"🖼️ Image"}</label>
            <input
                type="text"
                id="friend-image"
                value={fields.image.clone()}
                oninput={on_image_input}
            />

            <Button>{"Add"}</Button>
        </form>
    }
}
