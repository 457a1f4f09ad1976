//! The compile-time registry: `TypeId` <-> concrete type
//!
//! Both directions of the mapping, plus the runtime lookup, are generated
//! from the single paired list at the bottom of this file. Registering a new
//! element type is one line there (after adding the [`TypeId`] variant); the
//! two directions cannot drift apart because they share a source of truth,
//! and forgetting the dispatch arm for a new variant is a compile error, not
//! a latent runtime bug.

use crate::element::Element;
use crate::types::TypeId;

macro_rules! element_type_registry {
    ($($ty:ty => $id:ident),+ $(,)?) => {
        $(
            impl Element for $ty {
                const TYPE_ID: TypeId = TypeId::$id;
            }
        )+

        /// The id-to-type direction of the registry, as a structural contract.
        ///
        /// One associated type per supported [`TypeId`]. Dispatch is generic
        /// over an implementor of this trait, so a call site may substitute
        /// its own map to change which concrete type each id resolves to,
        /// without touching branch selection or the unsupported-id policy.
        /// Conformance is checked by the build; there is no runtime state.
        ///
        /// ```rust
        /// use columnar_core::{dispatch_with, DataType, SizeOf, TypeMap, TypeId};
        ///
        /// /// Forces every branch to operate on f64, e.g. for testing.
        /// struct AlwaysF64;
        ///
        /// impl TypeMap for AlwaysF64 {
        ///     type Int8 = f64;
        ///     type Int16 = f64;
        ///     type Int32 = f64;
        ///     type Int64 = f64;
        ///     type Float32 = f64;
        ///     type Float64 = f64;
        /// }
        ///
        /// let width = dispatch_with::<AlwaysF64, _>(DataType::new(TypeId::Int8), &mut SizeOf);
        /// assert_eq!(width.unwrap(), 8);
        /// ```
        pub trait TypeMap {
            $(
                /// Concrete type dispatched for this id.
                type $id: Element;
            )+
        }

        /// The canonical registry mapping, used by the plain dispatch entry
        /// points.
        #[derive(Debug, Clone, Copy, Default)]
        pub struct DefaultTypeMap;

        impl TypeMap for DefaultTypeMap {
            $(
                type $id = $ty;
            )+
        }

        /// Runtime lookup of the id registered for a type.
        ///
        /// Unregistered types yield the `Empty` sentinel. For registered
        /// types inside generic code, prefer the associated constant
        /// `<T as Element>::TYPE_ID`.
        pub fn type_to_id<T: 'static>() -> TypeId {
            let t = ::core::any::TypeId::of::<T>();
            $(
                if t == ::core::any::TypeId::of::<$ty>() {
                    return TypeId::$id;
                }
            )+
            TypeId::Empty
        }
    };
}

element_type_registry! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
}
