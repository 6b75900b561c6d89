// Pure rendering: ResumeDocument -> Node tree -> HTML.

pub mod assets;
pub mod contact;
pub mod document;
pub mod node;
pub mod page;

pub use page::render_page;
