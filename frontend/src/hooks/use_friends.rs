use std::rc::Rc;

use shared::{AppAction, AppState, Friend, FriendId, SplitterConfig};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Reducer wrapper so `AppState` transitions run through `use_reducer`
#[derive(Clone, PartialEq)]
struct FriendsReducer(AppState);

impl Reducible for FriendsReducer {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.reduce(action)))
    }
}

pub struct UseFriendsResult {
    pub state: AppState,
    pub actions: UseFriendsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFriendsActions {
    pub toggle_add_friend: Callback<()>,
    pub add_friend: Callback<Friend>,
    pub select_friend: Callback<FriendId>,
    pub split_bill: Callback<f64>,
}

#[hook]
pub fn use_friends(config: &SplitterConfig) -> UseFriendsResult {
    let reducer = {
        let config = config.clone();
        use_reducer(move || FriendsReducer(AppState::from_config(&config)))
    };

    let toggle_add_friend = {
        let dispatcher = reducer.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AppAction::ToggleAddFriend))
    };

    let add_friend = {
        let dispatcher = reducer.dispatcher();
        Callback::from(move |friend: Friend| {
            match serde_json::to_string(&friend) {
                Ok(json) => Logger::info_with_component("use_friends", &format!("Adding friend {}", json)),
                Err(e) => Logger::error_with_component("use_friends", &format!("Failed to serialize friend: {}", e)),
            }
            dispatcher.dispatch(AppAction::AddFriend(friend));
        })
    };

    let select_friend = {
        let dispatcher = reducer.dispatcher();
        Callback::from(move |id: FriendId| dispatcher.dispatch(AppAction::SelectFriend(id)))
    };

    let split_bill = {
        let dispatcher = reducer.dispatcher();
        Callback::from(move |delta: f64| {
            Logger::info_with_component("use_friends", &format!("Splitting bill, delta {}", delta));
            dispatcher.dispatch(AppAction::SplitBill(delta));
        })
    };

    UseFriendsResult {
        state: reducer.0.clone(),
        actions: UseFriendsActions {
            toggle_add_friend,
            add_friend,
            select_friend,
            split_bill,
        },
    }
}
