//! Runtime type dispatch core for GPU-accelerated columnar compute
//!
//! Compute kernels in a columnar engine are written generically over an
//! element type, but the element type of a given column is only known at run
//! time, carried as a [`TypeId`]. This crate provides the bridge between the
//! two worlds: a compile-time bijection between `TypeId` values and concrete
//! element types, and a dispatch operation that selects and invokes the one
//! monomorphized instantiation of a generic callable matching a runtime id.
//!
//! # Architecture Overview
//!
//! - **Registry** - the `TypeId` <-> concrete type mapping ([`Element`],
//!   [`TypeMap`], [`DefaultTypeMap`]), generated from one paired declaration
//!   so the two directions cannot drift apart
//! - **Dispatch** - [`dispatch`] / [`dispatch_with`] for host call sites
//!   (recoverable, returns [`Result`]) and [`dispatch_or_trap`] /
//!   [`dispatch_or_trap_with`] for device-kernel call sites (fatal abort on
//!   an unsupported id)
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Dispatch**: no trait objects, no heap-allocated type
//!   erasure; branch selection is the only runtime work
//! - **Closed Type Set**: adding an element type is a source change, not a
//!   runtime registration
//! - **Fail Before Running**: an unsupported id never executes a mismatched
//!   instantiation, in either execution context
//!
//! # Example
//!
//! A callable is any type implementing [`ElementVisitor`]; its arguments
//! travel as fields, so the caller picks value or reference semantics per
//! field:
//!
//! ```rust
//! use columnar_core::{dispatch, DataType, Element, ElementVisitor, TypeId};
//!
//! /// Counts how many elements of the dispatched type fit in a raw buffer.
//! struct ElementCount<'a> {
//!     bytes: &'a [u8],
//! }
//!
//! impl ElementVisitor for ElementCount<'_> {
//!     type Output = usize;
//!
//!     fn visit<T: Element>(&mut self) -> usize {
//!         self.bytes.len() / std::mem::size_of::<T>()
//!     }
//! }
//!
//! let raw = [0u8; 24];
//! let mut count = ElementCount { bytes: &raw };
//! assert_eq!(dispatch(DataType::new(TypeId::Float64), &mut count).unwrap(), 3);
//! assert_eq!(dispatch(DataType::new(TypeId::Int16), &mut count).unwrap(), 12);
//! ```

pub mod dispatch;
pub mod element;
pub mod error;
pub mod registry;
pub mod types;

pub use dispatch::{
    dispatch, dispatch_or_trap, dispatch_or_trap_with, dispatch_with, ElementVisitor, SizeOf,
};
pub use element::{Element, Unsupported};
pub use error::{Error, Result};
pub use registry::{type_to_id, DefaultTypeMap, TypeMap};
pub use types::{DataType, TypeId};
