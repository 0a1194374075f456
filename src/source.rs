pub mod fail;
pub mod file;
pub mod iter;

pub use self::fail::FailSource;
pub use self::file::{CsvSource, JsonLinesSource};
pub use self::iter::IterSource;
