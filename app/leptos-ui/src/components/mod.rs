pub mod file_upload;
pub mod item_card;
pub mod nav_bar;
pub mod skeleton;
pub mod spinner;
