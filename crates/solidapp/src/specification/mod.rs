//! # Specifications
//!
//! A specification is a predicate over a record type. Instead of growing a
//! filter type with one method per attribute combination (by color, by size,
//! by color and size, ...), each criterion is its own [`Specification`] value
//! and criteria are combined with [`Specification::and`].
//!
//! ## Kinds
//!
//! | Kind | Satisfied when |
//! |------|----------------|
//! | [`AttributeEquals`] | the record's attribute of that type equals the stored value |
//! | [`AndSpecification`] | every wrapped specification is satisfied |
//!
//! The trait is open: new kinds (an `Or`, a `Not`, a name match) are added by
//! implementing [`Specification`], without touching the filter or existing
//! kinds.
//!
//! ## Usage
//!
//! ```
//! use solidapp::model::{sample_catalog, Color, Size};
//! use solidapp::specification::{ColorSpecification, SizeSpecification, Specification};
//! use solidapp::filter::filter;
//!
//! let products = sample_catalog();
//! let green = ColorSpecification::new(Color::Green);
//! let large = SizeSpecification::new(Size::Large);
//! let green_and_large = green.and(&large);
//!
//! let names: Vec<_> = filter(&products, &green_and_large).map(|p| p.name()).collect();
//! assert_eq!(names, vec!["Tree"]);
//! ```

mod and;
mod attribute;

pub use and::AndSpecification;
pub use attribute::{AttributeEquals, ColorSpecification, HasAttribute, SizeSpecification};

/// A predicate over records of type `T`.
///
/// Implementations must be pure: the answer depends only on the record.
pub trait Specification<T> {
    /// Whether `item` meets this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Combine with `other` into a conjunction.
    ///
    /// Both operands are borrowed, not cloned, and neither is modified. The
    /// result is itself a specification and can be combined further.
    fn and<'a, S>(&'a self, other: &'a S) -> AndSpecification<'a, T>
    where
        Self: Sized + 'a,
        S: Specification<T> + 'a,
        T: 'a,
    {
        AndSpecification::new(self, other)
    }
}
