//! The ordering capability required of everything stored in a [`Queue`](crate::Queue).
use std::cmp::Reverse;

/// A value that can be strictly ordered against another value of the same type.
///
/// [`Item::less`] must behave as a strict weak ordering: irreflexive (`!a.less(&a)`), asymmetric
/// and transitive. Two items are considered equal when neither is less than the other. The queue
/// never checks these properties; an ordering that violates them leaves the queue's order
/// unspecified.
///
/// To obtain a max-priority queue, invert the predicate, for example by wrapping items in
/// [`Reverse`]:
///
/// ```rust
/// # use insertion_queue::Queue;
/// use std::cmp::Reverse;
///
/// let mut q = Queue::new();
/// q.push(Reverse(1));
/// q.push(Reverse(3));
/// q.push(Reverse(2));
///
/// assert_eq!(q.pop_front(), Some(Reverse(3)));
/// ```
pub trait Item {
    /// Whether `self` sorts strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

macro_rules! impl_item_via_partial_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Item for $ty {
                #[inline]
                fn less(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_item_via_partial_ord! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    bool, char, (), str, String,
}

impl<T: Item + ?Sized> Item for &T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        T::less(*self, *other)
    }
}

impl<T: Item + ?Sized> Item for Box<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        T::less(self, other)
    }
}

impl<T: Item> Item for Reverse<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        other.0.less(&self.0)
    }
}

/// Lexicographic comparison, component by component.
///
/// A component only decides the result when one side is strictly less than the other; otherwise
/// the next component is consulted.
macro_rules! impl_item_for_tuple {
    ($($idx:tt : $name:ident),+) => {
        impl<$($name: Item),+> Item for ($($name,)+) {
            fn less(&self, other: &Self) -> bool {
                $(
                    if self.$idx.less(&other.$idx) {
                        return true;
                    }
                    if other.$idx.less(&self.$idx) {
                        return false;
                    }
                )+
                false
            }
        }
    };
}

impl_item_for_tuple!(0: A);
impl_item_for_tuple!(0: A, 1: B);
impl_item_for_tuple!(0: A, 1: B, 2: C);
impl_item_for_tuple!(0: A, 1: B, 2: C, 3: D);
