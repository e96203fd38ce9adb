pub mod application;
pub mod comment;

pub use application::application_block;
pub use comment::comment_block;
