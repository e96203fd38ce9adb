pub mod digest;

pub use digest::digest_page;
