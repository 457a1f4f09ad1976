//! End-to-end tests for the dispatch core: bijection, failure policy,
//! substitute maps, wire stability, and cross-thread independence.

use columnar_core::{
    dispatch, dispatch_with, type_to_id, DataType, Element, ElementVisitor, Error, SizeOf, TypeId,
    TypeMap,
};
use proptest::prelude::*;
use rayon::prelude::*;

/// Reports which id the dispatched concrete type is registered under.
struct ResolvedId;

impl ElementVisitor for ResolvedId {
    type Output = TypeId;

    fn visit<T: Element>(&mut self) -> TypeId {
        T::TYPE_ID
    }
}

fn expected_width(id: TypeId) -> usize {
    match id {
        TypeId::Empty => 0,
        TypeId::Int8 => 1,
        TypeId::Int16 => 2,
        TypeId::Int32 => 4,
        TypeId::Int64 => 8,
        TypeId::Float32 => 4,
        TypeId::Float64 => 8,
    }
}

#[test]
fn size_of_visitor_yields_byte_widths() {
    for id in TypeId::SUPPORTED {
        let width = dispatch(DataType::new(id), &mut SizeOf).unwrap();
        assert_eq!(width, expected_width(id), "wrong width for {id}");
    }
}

#[test]
fn registry_round_trips_every_supported_id() {
    // id -> type (via dispatch) -> id gives back the original
    for id in TypeId::SUPPORTED {
        let resolved = dispatch(DataType::new(id), &mut ResolvedId).unwrap();
        assert_eq!(resolved, id);
    }
    // and the runtime lookup agrees with the registered constants
    assert_eq!(type_to_id::<i8>(), TypeId::Int8);
    assert_eq!(type_to_id::<i16>(), TypeId::Int16);
    assert_eq!(type_to_id::<i32>(), TypeId::Int32);
    assert_eq!(type_to_id::<i64>(), TypeId::Int64);
    assert_eq!(type_to_id::<f32>(), TypeId::Float32);
    assert_eq!(type_to_id::<f64>(), TypeId::Float64);
}

#[test]
fn sentinel_dispatch_reports_error_without_invoking() {
    struct Counting {
        calls: usize,
    }

    impl ElementVisitor for Counting {
        type Output = ();

        fn visit<T: Element>(&mut self) {
            self.calls += 1;
        }
    }

    let mut counting = Counting { calls: 0 };
    let err = dispatch(DataType::new(TypeId::Empty), &mut counting).unwrap_err();
    assert_eq!(err, Error::UnsupportedType(TypeId::Empty));
    assert_eq!(counting.calls, 0);
}

#[test]
fn substitute_map_fixes_every_branch_to_one_type() {
    struct AlwaysF64;

    impl TypeMap for AlwaysF64 {
        type Int8 = f64;
        type Int16 = f64;
        type Int32 = f64;
        type Int64 = f64;
        type Float32 = f64;
        type Float64 = f64;
    }

    for id in TypeId::SUPPORTED {
        let resolved = dispatch_with::<AlwaysF64, _>(DataType::new(id), &mut ResolvedId).unwrap();
        assert_eq!(resolved, TypeId::Float64);
    }
}

#[test]
fn concurrent_dispatch_matches_sequential() {
    // Many independent callers, differing ids, independent visitors
    let ids: Vec<TypeId> = (0..10_000)
        .map(|i| TypeId::SUPPORTED[i % TypeId::SUPPORTED.len()])
        .collect();

    let sequential: Vec<usize> = ids
        .iter()
        .map(|&id| dispatch(DataType::new(id), &mut SizeOf).unwrap())
        .collect();

    let parallel: Vec<usize> = ids
        .par_iter()
        .map(|&id| dispatch(DataType::new(id), &mut SizeOf).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn wire_integers_round_trip_through_metadata() {
    for id in TypeId::SUPPORTED {
        let raw = id.as_raw();
        assert_eq!(TypeId::from_raw(raw), Some(id));

        let json = serde_json::to_string(&DataType::new(id)).unwrap();
        let back: DataType = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), id);
    }
    // integers never released decode to nothing, not to a wrong type
    assert_eq!(TypeId::from_raw(42), None);
}

proptest! {
    #[test]
    fn dispatched_width_always_matches(id in proptest::sample::select(TypeId::SUPPORTED.to_vec())) {
        let width = dispatch(DataType::new(id), &mut SizeOf).unwrap();
        prop_assert_eq!(width, expected_width(id));
    }

    #[test]
    fn raw_decode_never_invents_ids(raw in 7u32..) {
        prop_assert_eq!(TypeId::from_raw(raw), None);
    }
}
