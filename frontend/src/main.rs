use log::LevelFilter;
use shared::SplitterConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::button::Button;
use components::forms::add_friend_form::AddFriendForm;
use components::forms::split_bill_form::SplitBillForm;
use components::friend_list::FriendList;
use hooks::use_friends::{use_friends, UseFriendsResult};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SplitterConfig::default());
    let UseFriendsResult { state, actions } = use_friends(&config);

    let on_toggle = actions.toggle_add_friend.reform(|_: MouseEvent| ());

    html! {
        <div class="app">
            <div class="sidebar">
                <FriendList
                    friends={state.friends.clone()}
                    on_select={actions.select_friend.clone()}
                />

                if state.form_visible {
                    <AddFriendForm
                        config={(*config).clone()}
                        on_add={actions.add_friend.clone()}
                    />
                }

                <Button onclick={on_toggle}>{state.toggle_label()}</Button>
            </div>

            if let Some(friend) = state.selected() {
                <SplitBillForm
                    key={friend.id.to_string()}
                    friend={friend.clone()}
                    on_split={actions.split_bill.clone()}
                />
            }
        </div>
    }
}

fn main() {
    services::logging::Logger::init(LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
