pub mod store;
pub mod types;

pub use store::{ReceiptStore, StoreError};
pub use types::{Item, Receipt, StoredReceipt, Submitted};
