//! Nithara Delivery Adapters
//!
//! One delivery contract, two capability-polymorphic implementations:
//! a native-bridge-backed adapter for app shells and a browser-backed
//! adapter for plain web hosts. The orchestrator picks per strategy.

mod adapter;
mod bridge;
mod error;
mod handle;
mod web;

pub use adapter::{BrowserAdapter, DeliveryAdapter, NativeAdapter};
pub use bridge::{NativeBridge, PermissionState, ShareRequest};
pub use error::{BridgeError, PersistenceError, ShareError, WebHostError};
pub use handle::{Durability, Handle, StorageDirectory};
pub use web::WebHost;
