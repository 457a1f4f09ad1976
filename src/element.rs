//! The element-type contract for dispatched kernels
//!
//! Every concrete type a column can hold implements [`Element`]; the bound
//! set is what the compute kernels downstream rely on (plain-old-data layout,
//! arithmetic, thread-safety). Implementations are generated by the registry,
//! one per supported [`TypeId`].

use std::fmt::Debug;

use bytemuck::Pod;
use num_traits::Num;

use crate::types::TypeId;

/// A concrete element type registered in the dispatch core.
///
/// `TYPE_ID` is the type-to-id direction of the registry; it is a zero-cost
/// constant, so generic code can recover the runtime id of the type it was
/// instantiated with.
pub trait Element: Pod + Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// The runtime id registered for this type.
    const TYPE_ID: TypeId;
}

/// Uninhabited marker for the sentinel id.
///
/// `TypeId::Empty` maps to this type and nothing else does; since it has no
/// values and does not implement [`Element`], no dispatch branch can ever
/// instantiate a kernel for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unsupported {}
