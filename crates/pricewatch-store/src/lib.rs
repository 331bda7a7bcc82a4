mod store;

pub use store::{PriceStore, StoreError, DISCREPANCIES_FILE, PRICES_FILE};
