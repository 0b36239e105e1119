pub mod button;
pub mod forms;
pub mod friend_list;
