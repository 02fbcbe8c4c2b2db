//! # solidapp
//!
//! Two small, independent components:
//!
//! - **Specification filtering**: [`specification`] defines composable
//!   predicates over records ([`model::Product`] being the stock record type),
//!   and [`filter`] applies one lazily to a sequence. New criteria are new
//!   specification values, never new filter methods.
//! - **Journal and persistence**: [`journal::Journal`] is a numbered log of
//!   notes that knows nothing about storage; [`persistence`] writes anything
//!   renderable to text into a file and reads it back.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ filter                   │   │ persistence              │
//! │  lazy, order preserving  │   │  Render + backends       │
//! └────────────┬─────────────┘   └────────────┬─────────────┘
//!              │                              │ Display
//! ┌────────────▼─────────────┐   ┌────────────▼─────────────┐
//! │ specification            │   │ journal                  │
//! │  Specification<T>, And   │   │  add / remove / render   │
//! └────────────┬─────────────┘   └──────────────────────────┘
//!              │ HasAttribute
//! ┌────────────▼─────────────┐
//! │ model                    │
//! │  Product, Color, Size    │
//! └──────────────────────────┘
//! ```
//!
//! Everything here is UI agnostic: functions take ordinary Rust values and
//! return [`error::Result`]. The `solid` binary is one client.

pub mod config;
pub mod error;
pub mod filter;
pub mod journal;
pub mod model;
pub mod persistence;
pub mod specification;

pub use error::{Result, SolidError};
