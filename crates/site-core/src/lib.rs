pub mod carousel;
pub mod constants;
pub mod effects;
pub mod error;
pub mod form;
pub mod gesture;
pub mod reveal;
pub mod scene;
pub mod toggle;

pub use carousel::*;
pub use constants::*;
pub use error::*;
pub use form::*;
pub use gesture::*;
pub use reveal::*;
pub use toggle::*;
