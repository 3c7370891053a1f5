pub mod notification;
pub mod recommendation;
