pub mod app_config;
pub mod config;
pub mod prices;
pub mod products;
pub mod retailer;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use prices::{PriceDiscrepancy, ProductPrice, UNKNOWN_PRODUCT_NAME};
pub use products::{load_products, ProductEntry, ProductsError};
pub use retailer::Retailer;
