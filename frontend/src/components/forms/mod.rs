pub mod add_friend_form;
pub mod split_bill_form;
