//! Runtime-to-compile-time dispatch
//!
//! One dispatch core, two thin wrappers. The core is an exhaustive match
//! over the supported [`TypeId`] set that invokes the one monomorphized
//! instantiation of the caller's visitor; branch order carries no meaning
//! because exactly one arm matches any runtime value, and branch selection (a
//! jump over a small dense enum) is the only runtime cost. The wrappers
//! differ solely in unsupported-id policy:
//!
//! - [`dispatch`] / [`dispatch_with`] - host call sites; return
//!   [`Error::UnsupportedType`] before any instantiation runs
//! - [`dispatch_or_trap`] / [`dispatch_or_trap_with`] - device-kernel call
//!   sites with no error propagation; halt the executing lane via an abort
//!   primitive that never allocates, formats, or unwinds
//!
//! Dispatch is a pure function over compile-time tables and caller-supplied
//! values: no shared state, no locking, safe from any number of threads or
//! lanes at once.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::registry::{DefaultTypeMap, TypeMap};
use crate::types::{DataType, TypeId};

/// A generic callable dispatchable over every supported element type.
///
/// The single `Output` associated type is the uniform-return contract: all
/// per-type instantiations of [`visit`](Self::visit) produce the same result
/// type, and a visitor whose bodies would disagree fails to compile rather
/// than misbehaving at run time:
///
/// ```compile_fail
/// use columnar_core::{Element, ElementVisitor};
///
/// struct Mixed;
///
/// impl ElementVisitor for Mixed {
///     type Output = usize;
///
///     fn visit<T: Element>(&mut self) -> Self::Output {
///         std::mem::size_of::<T>() as u64 // u64 is not the declared Output
///     }
/// }
/// ```
///
/// Arguments travel as fields of the visitor value, with whatever value or
/// reference semantics the caller chooses; `visit` takes `&mut self` so a
/// visitor can also accumulate state across calls. The core never retains
/// the visitor.
pub trait ElementVisitor {
    /// Result type shared by every instantiation of `visit`.
    type Output;

    /// Invoked with the concrete element type resolved for the runtime id.
    fn visit<T: Element>(&mut self) -> Self::Output;
}

/// The shared dispatch core: resolves `id` through `M` and invokes the
/// matching instantiation, or reports `None` without invoking anything.
#[inline]
fn try_dispatch<M, V>(id: TypeId, visitor: &mut V) -> Option<V::Output>
where
    M: TypeMap,
    V: ElementVisitor,
{
    match id {
        TypeId::Int8 => Some(visitor.visit::<M::Int8>()),
        TypeId::Int16 => Some(visitor.visit::<M::Int16>()),
        TypeId::Int32 => Some(visitor.visit::<M::Int32>()),
        TypeId::Int64 => Some(visitor.visit::<M::Int64>()),
        TypeId::Float32 => Some(visitor.visit::<M::Float32>()),
        TypeId::Float64 => Some(visitor.visit::<M::Float64>()),
        TypeId::Empty => None,
    }
}

/// Dispatches `visitor` on the element type registered for `dtype`.
///
/// Host entry point using the canonical [`DefaultTypeMap`] registry. The
/// unsupported sentinel id fails with [`Error::UnsupportedType`] strictly
/// before any instantiation runs, so no side effect can be attributed to a
/// mismatched type.
///
/// ```rust
/// use columnar_core::{dispatch, DataType, SizeOf, TypeId};
///
/// let width = dispatch(DataType::new(TypeId::Int32), &mut SizeOf).unwrap();
/// assert_eq!(width, 4);
/// ```
#[inline]
pub fn dispatch<V>(dtype: DataType, visitor: &mut V) -> Result<V::Output>
where
    V: ElementVisitor,
{
    dispatch_with::<DefaultTypeMap, V>(dtype, visitor)
}

/// Like [`dispatch`], resolving ids through a caller-supplied [`TypeMap`].
///
/// Substituting a map changes only which concrete type each branch
/// instantiates; branch selection and the unsupported-id policy are fixed.
#[inline]
pub fn dispatch_with<M, V>(dtype: DataType, visitor: &mut V) -> Result<V::Output>
where
    M: TypeMap,
    V: ElementVisitor,
{
    match try_dispatch::<M, V>(dtype.id(), visitor) {
        Some(out) => Ok(out),
        None => {
            log::trace!("dispatch rejected unsupported type id {}", dtype.id());
            Err(Error::UnsupportedType(dtype.id()))
        }
    }
}

/// Dispatches `visitor`, halting the executing thread or lane on an
/// unsupported id.
///
/// Device-kernel entry point for contexts with no error propagation: the
/// failure path is an unconditional abort with no diagnostic, allocation, or
/// unwinding, so it is safe inside capability-restricted parallel kernels.
/// The abort never returns, so no placeholder result is ever constructed.
#[inline]
pub fn dispatch_or_trap<V>(dtype: DataType, visitor: &mut V) -> V::Output
where
    V: ElementVisitor,
{
    dispatch_or_trap_with::<DefaultTypeMap, V>(dtype, visitor)
}

/// Like [`dispatch_or_trap`], resolving ids through a caller-supplied
/// [`TypeMap`].
#[inline]
pub fn dispatch_or_trap_with<M, V>(dtype: DataType, visitor: &mut V) -> V::Output
where
    M: TypeMap,
    V: ElementVisitor,
{
    match try_dispatch::<M, V>(dtype.id(), visitor) {
        Some(out) => out,
        None => unsupported_type_trap(),
    }
}

/// Abort primitive for the non-recoverable path. `abort` lowers to a trap
/// instruction: no unwinding, no allocation, no formatted diagnostics.
#[cold]
#[inline(never)]
fn unsupported_type_trap() -> ! {
    std::process::abort()
}

/// Visitor returning the byte width of the dispatched element type.
///
/// The canonical smoke-test callable; also backs
/// [`DataType::size_of`](crate::DataType::size_of).
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeOf;

impl ElementVisitor for SizeOf {
    type Output = usize;

    #[inline]
    fn visit<T: Element>(&mut self) -> usize {
        std::mem::size_of::<T>()
    }
}
