pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::email::email_layout;
pub use pages::digest_page;

use maud::{html, PreEscaped};

/// `value` as it appears once maud has escaped it into a document.
pub fn escaped(value: &str) -> String {
    let PreEscaped(s) = html! { (value) };
    s
}
