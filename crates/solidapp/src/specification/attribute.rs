//! Attribute equality specifications.

use super::Specification;
use crate::model::{Color, Size};

/// Exposes the record's attribute of type `A`.
///
/// A record implements this once per attribute type it carries. An
/// [`AttributeEquals<A>`] is only a specification for records implementing
/// `HasAttribute<A>`, so asking about an attribute a record doesn't have is a
/// compile error rather than a runtime failure.
pub trait HasAttribute<A> {
    fn attribute(&self) -> &A;
}

/// Satisfied when the record's `A` attribute equals the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEquals<A> {
    value: A,
}

impl<A> AttributeEquals<A> {
    pub fn new(value: A) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &A {
        &self.value
    }
}

impl<T, A> Specification<T> for AttributeEquals<A>
where
    T: HasAttribute<A>,
    A: PartialEq,
{
    fn is_satisfied(&self, item: &T) -> bool {
        HasAttribute::<A>::attribute(item) == &self.value
    }
}

/// Matches products of one color.
pub type ColorSpecification = AttributeEquals<Color>;

/// Matches products of one size.
pub type SizeSpecification = AttributeEquals<Size>;
