//! # Host Capability Dispatcher
//!
//! Detects which container a page runs in and routes device-capability calls
//! (camera, gallery, file picker, QR scan, geolocation) to the matching host
//! integration.
//!
//! ## Overview
//!
//! ```text
//! DispatchConfig ──> classify ──> Classification ──> select ──> AdapterKind
//!                                                                  │
//!                         CapabilityFacade <── build_adapter <─────┘
//! ```
//!
//! The pipeline runs once, when [`CapabilityFacade`] is constructed. Every
//! capability call afterwards is a direct delegation to the bound adapter.
//!
//! ## Usage
//!
//! ```
//! use core_dispatch::CapabilityFacade;
//! use core_runtime::DispatchConfig;
//! use bridge_traits::AdapterKind;
//!
//! let config = DispatchConfig::builder()
//!     .user_agent("Mozilla/5.0 (Windows NT 10.0) Mobile")
//!     .host_config_flag(true)
//!     .build()?;
//!
//! let facade = CapabilityFacade::new(config);
//! assert_eq!(facade.platform_label(), "Web");
//! assert_eq!(facade.adapter_kind(), AdapterKind::GenericHostApp);
//! facade.open_camera();
//! # Ok::<(), core_runtime::Error>(())
//! ```

pub mod adapters;
pub mod classifier;
pub mod facade;
pub mod selector;

pub use classifier::{classify, is_mobile, Classification, Device, PlatformKind, PlatformLabel};
pub use facade::CapabilityFacade;
pub use selector::select;
