pub mod clip;
pub mod error;
pub mod fallback;
pub mod plan;
pub mod project;
pub mod request;
pub mod validate;

pub use clip::*;
pub use error::*;
pub use fallback::*;
pub use plan::*;
pub use project::*;
pub use request::*;
pub use validate::*;
