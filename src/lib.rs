pub mod config;
pub mod error;
pub mod stream;

pub use config::StreamConfig;
pub use error::{ErrorKind, StreamError, UnpackMismatchError};
pub use stream::{stream_file, StreamReport};
