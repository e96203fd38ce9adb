mod composer;
pub mod facts;
mod subject;
mod text;

pub use composer::DigestComposer;
pub use facts::DigestFacts;
pub use subject::subject_line;
pub use text::render_text;
