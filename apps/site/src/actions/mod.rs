// Ancillary page actions. Each host primitive sits behind a trait so the
// browser bindings in `render::assets` and the test doubles are interchangeable.

pub mod location;
pub mod print;
pub mod qr;
pub mod share_link;
