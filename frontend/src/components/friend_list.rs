use shared::{Friend, FriendId, FriendRegistry};
use yew::prelude::*;

use super::button::Button;

#[derive(Properties, PartialEq)]
pub struct FriendListProps {
    pub friends: FriendRegistry,
    pub on_select: Callback<FriendId>,
}

#[function_component(FriendList)]
pub fn friend_list(props: &FriendListProps) -> Html {
    html! {
        <ul>
            {for props.friends.friends().iter().map(|friend| {
                html! {
                    <FriendRow
                        key={friend.id.to_string()}
                        friend={friend.clone()}
                        selected={props.friends.is_selected(&friend.id)}
                        on_select={props.on_select.clone()}
                    />
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct FriendRowProps {
    pub friend: Friend,
    pub selected: bool,
    pub on_select: Callback<FriendId>,
}

fn row_class(selected: bool) -> &'static str {
    if selected {
        "selected"
    } else {
        ""
    }
}

fn row_button_label(selected: bool) -> &'static str {
    if selected {
        "Close"
    } else {
        "Select"
    }
}

#[function_component(FriendRow)]
pub fn friend_row(props: &FriendRowProps) -> Html {
    let onclick = {
        let id = props.friend.id.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    let friend = &props.friend;
    html! {
        <li class={row_class(props.selected)} {onclick}>
            <img src={friend.image.clone()} alt="" />
            <h3>{friend.name.clone()}</h3>
            <p class={friend.balance_status().css_class()}>{friend.balance_label()}</p>
            <Button>{row_button_label(props.selected)}</Button>
        </li>
    }
}
