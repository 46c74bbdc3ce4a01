mod client;
mod contracts;
mod error;
mod response;
mod types;

pub use client::*;
pub use contracts::*;
pub use error::*;
pub use response::*;
pub use types::*;
