pub mod product;
pub mod status;

pub use product::{catalog, ProductRecord};
pub use status::{ApplicationInfo, HealthStatus, ProductList, WelcomeMessage};
