pub mod error_notice;
pub mod ui;

pub use error_notice::ErrorNotice;
