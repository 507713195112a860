//! Three-way comparison of projections and their construction parameters.
//!
//! Two projections are interchangeable within an event when they are of the
//! same concrete kind and their construction parameters compare as equal.
//! Because the event's registry holds projections of many kinds behind one
//! trait object, it needs more than equality: a total order. [`projections`]
//! supplies it by ordering on the kind descriptor first and only delegating
//! to the kind's own parameter comparison when the kinds coincide. The kind
//! order carries no meaning beyond being total and stable within a run.
//!
//! Comparison results are plain [`Ordering`] values: `Less` and `Greater`
//! mean the two operands are ordered, `Equal` means they are equivalent.
//! Chains over several parameters short-circuit with [`Ordering::then_with`],
//! like lexicographic tuple comparison generalized to arbitrary fields.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::projection::Projection;

/// A total, three-way comparison over construction parameters.
///
/// Unlike [`Ord`], this is implemented for floating-point cut values (via
/// [`f64::total_cmp`], so the relation stays total even for NaN) and for
/// projection kinds themselves, which lets a dependency projection take part
/// in its owner's parameter chain. Implementations must form a strict weak
/// ordering and must not have side effects.
pub trait ParamOrd {
    /// Compare two values of the same static type.
    fn param_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! ord_params {
    ($($ty:ty),* $(,)?) => {
        $(impl ParamOrd for $ty {
            fn param_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

ord_params! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, str, String, &str,
}

impl ParamOrd for f32 {
    fn param_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl ParamOrd for f64 {
    fn param_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// `None` orders before any `Some`.
impl<T: ParamOrd> ParamOrd for Option<T> {
    fn param_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.param_cmp(b),
        }
    }
}

/// Lexicographic over the elements, shorter sequences first on a tie.
impl<T: ParamOrd> ParamOrd for Vec<T> {
    fn param_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other) {
            let ord = a.param_cmp(b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.len().cmp(&other.len())
    }
}

impl<T: Ord> ParamOrd for BTreeSet<T> {
    fn param_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

macro_rules! tuple_params {
    ($($param:tt $idx:tt),*) => {
        impl<$($param: ParamOrd),*> ParamOrd for ($($param,)*) {
            fn param_cmp(&self, other: &Self) -> Ordering {
                Ordering::Equal $(.then_with(|| self.$idx.param_cmp(&other.$idx)))*
            }
        }
    };
}

tuple_params! { A 0, B 1 }
tuple_params! { A 0, B 1, C 2 }
tuple_params! { A 0, B 1, C 2, D 3 }

/// Compare two values of the same static type.
pub fn params<T: ParamOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.param_cmp(b)
}

/// Compare two type-erased projections.
///
/// This is the registry's ordering relation: the kind descriptors are
/// compared first and the kind's own [`Projection::cmp_same_kind`] is
/// consulted only when they are identical, so no kind needs to know about
/// any other kind for the order to be total.
pub fn projections(a: &dyn Projection, b: &dyn Projection) -> Ordering {
    kind_id(a).cmp(&kind_id(b)).then_with(|| a.cmp_same_kind(b))
}

/// Compare a concrete projection against a type-erased one of the same kind.
///
/// The intended body of [`Projection::cmp_same_kind`]: downcast and compare
/// by parameters. The engine only calls `cmp_same_kind` with a matching
/// kind; should the kinds nevertheless differ, the kind-descriptor order is
/// used so the relation stays total.
pub fn by_params<P>(a: &P, b: &dyn Projection) -> Ordering
where
    P: Projection + ParamOrd,
{
    let any: &dyn Any = b;
    match any.downcast_ref::<P>() {
        Some(b) => a.param_cmp(b),
        None => TypeId::of::<P>().cmp(&kind_id(b)),
    }
}

/// The concrete kind descriptor behind a projection trait object.
fn kind_id(p: &dyn Projection) -> TypeId {
    // Upcast before asking, so that the id describes the concrete kind
    // rather than the trait object type.
    let any: &dyn Any = p;
    any.type_id()
}
