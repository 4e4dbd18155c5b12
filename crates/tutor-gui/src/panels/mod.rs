pub mod chat;
pub mod follow_up;
pub mod helpers;
pub mod menu_bar;
pub mod preview;
pub mod status;
