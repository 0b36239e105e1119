pub mod use_friends;
