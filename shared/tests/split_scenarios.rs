use shared::{AddFriendForm, AppAction, AppState, FriendId, Payer, SplitBillForm, SplitterConfig};

fn balance(state: &AppState, id: &str) -> f64 {
    state.friends.get(&FriendId::new(id)).unwrap().balance
}

fn split(bill: &str, yours: &str, payer: Payer) -> f64 {
    let mut form = SplitBillForm::new();
    form.set_bill_value(bill);
    form.set_your_expense(yours);
    form.set_payer(Some(payer));
    form.submit().unwrap()
}

#[test]
fn test_you_pay_for_rohan() {
    let state = AppState::default()
        .reduce(AppAction::SelectFriend(FriendId::new("118836")))
        .reduce(AppAction::SplitBill(split("100", "40", Payer::You)));

    assert_eq!(balance(&state, "118836"), 33.0);
    assert_eq!(balance(&state, "933372"), 20.0);
    assert_eq!(balance(&state, "499476"), 0.0);
}

#[test]
fn test_aaron_pays() {
    let state = AppState::default()
        .reduce(AppAction::SelectFriend(FriendId::new("933372")))
        .reduce(AppAction::SplitBill(split("50", "20", Payer::Friend)));

    assert_eq!(balance(&state, "933372"), 0.0);
    assert_eq!(
        state.selected().unwrap().balance_label(),
        "You and Aaron are even"
    );
}

#[test]
fn test_add_then_split_with_new_friend() {
    let config = SplitterConfig::default();
    let mut add_form = AddFriendForm::new(&config);

    let state = AppState::from_config(&config).reduce(AppAction::ToggleAddFriend);
    add_form.set_name("Mia");
    let mia = add_form.submit().unwrap();
    let mia_id = mia.id.clone();

    let state = state.reduce(AppAction::AddFriend(mia));
    assert!(!state.form_visible);
    assert_eq!(add_form.name, "");
    assert_eq!(add_form.image, config.placeholder_image);

    let state = state
        .reduce(AppAction::SelectFriend(mia_id.clone()))
        .reduce(AppAction::SplitBill(split("30", "10", Payer::You)))
        .reduce(AppAction::SplitBill(split("30", "5", Payer::Friend)));

    assert_eq!(state.friends.get(&mia_id).unwrap().balance, 5.0);
    assert_eq!(state.friends.friends().last().unwrap().id, mia_id);
}

#[test]
fn test_reselecting_hides_split_form() {
    let rohan = FriendId::new("118836");
    let state = AppState::default()
        .reduce(AppAction::SelectFriend(rohan.clone()))
        .reduce(AppAction::SelectFriend(rohan));
    assert!(state.selected().is_none());
}
