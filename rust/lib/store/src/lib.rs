pub mod error;
pub mod jsonbin;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use jsonbin::{JsonBinConfig, JsonBinStore};
pub use memory::MemoryStore;
pub use traits::BlobStore;
