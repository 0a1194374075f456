pub mod file;
pub mod memory;

pub use self::file::JsonLinesSink;
pub use self::memory::VecSink;
