use maud::{html, Markup, DOCTYPE};

/// Bare document shell for HTML email. Mail clients strip most of `head`,
/// so there is nothing in it besides the charset and title.
pub fn email_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                (content)
            }
        }
    }
}
