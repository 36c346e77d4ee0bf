//! Case paths for enums.
//!
//! A case path is to an enum case what a field accessor is to a struct field:
//! a value that can wrap a payload into one particular case and try to pull it
//! back out of an arbitrary value of the enum.
//!
//! ```
//! use case_paths::{CasePathable, case_pathable};
//!
//! #[case_pathable]
//! #[derive(Debug, PartialEq)]
//! enum Shape {
//!     Point,
//!     Circle(f64),
//!     Rect { width: f64, height: f64 },
//! }
//!
//! let paths = Shape::all_case_paths();
//! assert_eq!(paths.circle().extract(Shape::Circle(1.0)), Some(1.0));
//! assert_eq!(paths.circle().extract(Shape::Point), None);
//! assert_eq!(
//!     paths.rect().embed((2.0, 3.0)),
//!     Shape::Rect { width: 2.0, height: 3.0 }
//! );
//!
//! let paths = <Shape as CasePathable>::all_case_paths();
//! assert_eq!(paths.point().extract(Shape::Point), Some(()));
//! ```
//!
//! `#[case_pathable]` generates, next to the enum:
//!
//! - a container type `<Enum>CasePaths` with one method per case, named after
//!   the case in `snake_case` and returning an [`AnyCasePath`];
//! - an inherent `const fn all_case_paths()` on the enum;
//! - an implementation of [`CasePathable`].
//!
//! The payload value of a case is `()` when it has no fields, the field type
//! for a single unnamed field, and a tuple otherwise. Cases under `#[cfg]`
//! get accessors under the same `#[cfg]`.
//!
//! # Options
//!
//! Options go in the attribute arguments or in a `#[case_paths(...)]`
//! attribute on the enum:
//!
//! - `crate = <Path>`: where the runtime items live (default `::case_paths`);
//! - `container = <Ident>`: name of the container type;
//! - `dbg`: print the expansion to stderr while compiling.
//!
//! Writing `#[derive(CasePathable)]` on the enum as well is allowed, before or
//! after `#[case_pathable]`. The impl always comes from `#[case_pathable]`; the
//! derive only checks that it sits on an enum.

pub use case_paths_core::{AnyCasePath, CasePathable};

#[cfg(feature = "derive")]
pub use case_paths_derive::{CasePathable, case_pathable};
