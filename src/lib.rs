//! Always-sorted priority queues, maintained by insertion sort.
//!
//! See documentation for [`Queue`] and [`Item`].
//!
//! ## Usage
//!
//! ```rust
//! use insertion_queue::{Item, Queue};
//!
//! #[derive(Debug)]
//! struct Job {
//!     priority: u8,
//!     name: &'static str,
//! }
//!
//! impl Item for Job {
//!     fn less(&self, other: &Self) -> bool {
//!         self.priority < other.priority
//!     }
//! }
//!
//! let mut q = Queue::new();
//! q.push(Job { priority: 2, name: "render" });
//! q.push(Job { priority: 1, name: "fetch" });
//! q.push(Job { priority: 2, name: "upload" });
//!
//! assert_eq!(q.pop_front().map(|j| j.name), Some("fetch"));
//! assert_eq!(q.pop_front().map(|j| j.name), Some("render"));
//! assert_eq!(q.pop_front().map(|j| j.name), Some("upload"));
//! assert!(q.pop_front().is_none());
//! ```

mod item;
mod queue;

pub use item::Item;
pub use queue::Queue;

/// Derive [`Item`] for a struct from one or more of its fields.
///
/// The `Job` above could instead be written as:
///
/// ```rust
/// use insertion_queue::Item;
///
/// #[derive(Debug, Item)]
/// struct Job {
///     #[item(key)]
///     priority: u8,
///     name: &'static str,
/// }
///
/// let (a, b) = (Job { priority: 1, name: "a" }, Job { priority: 2, name: "b" });
/// assert!(a.less(&b));
/// ```
///
///
/// Fields marked `#[item(key)]` are compared in declaration order; a struct with a single field
/// uses that field without marking it. `#[item(reverse)]` on the struct inverts the order.
///
/// ```rust
/// use insertion_queue::{Item, Queue};
///
/// #[derive(Item)]
/// #[item(reverse)]
/// struct Score(u32);
///
/// let mut q = Queue::new();
/// q.push(Score(10));
/// q.push(Score(30));
/// q.push(Score(20));
///
/// assert_eq!(q[0].0, 30);
/// ```
#[cfg(feature = "derive")]
pub use insertion_queue_macros::Item;
