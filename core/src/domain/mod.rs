pub mod common;
pub mod profile;
pub mod recommendation;
pub mod rendering;
pub mod session;
