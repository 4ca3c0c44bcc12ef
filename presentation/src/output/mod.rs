//! Output formatting and image saving

pub mod console;
pub mod formatter;
pub mod saver;
