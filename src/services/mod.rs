pub mod audio;
pub mod chat;
pub mod images;
