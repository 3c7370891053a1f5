pub mod entities;
pub mod markup;
pub mod ports;
pub mod services;

pub use entities::*;
pub use markup::LightweightMarkup;
pub use ports::*;
pub use services::*;
