pub mod driver;
pub mod error;
pub mod traits;

pub use self::driver::apply;
pub use self::error::*;
pub use self::traits::*;
