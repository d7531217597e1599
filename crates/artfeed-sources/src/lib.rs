pub mod backend;
pub mod commerce_hub;
pub mod error;
pub mod html;
pub(crate) mod http;
pub mod observer;
pub mod woocommerce;

pub use backend::Backend;
pub use commerce_hub::{CommerceHubClient, StoreFilter};
pub use error::{ErrorKind, SourceError};
pub use observer::{FetchObserver, TracingObserver};
pub use woocommerce::WooCommerceClient;
