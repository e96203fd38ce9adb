use crate::digest::facts::CommentFact;
use maud::{html, Markup};

pub fn comment_block(comment: &CommentFact) -> Markup {
    html! {
        div class="comment" {
            p class="commenter" {
                strong { (comment.name) }
                " commented on "
                @if let Some(link) = &comment.link {
                    a href=(link) { (comment.application_address) }
                } @else {
                    (comment.application_address)
                }
            }
            blockquote { (comment.text) }
        }
    }
}
