pub mod cep;
pub mod document;
pub mod gate;
pub mod mask;

pub use crate::domain::model::{Address, Document, DocumentKind};
pub use crate::domain::ports::AddressProvider;
pub use crate::utils::error::Result;
