//! Override records and the store that owns them

mod field;
mod overrides;
mod record;
mod store;
mod verify;


pub use field::*;
pub use overrides::*;
pub use record::*;
pub use store::*;
pub use verify::*;
