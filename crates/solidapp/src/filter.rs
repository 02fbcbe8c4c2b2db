//! # Filtering
//!
//! [`filter`] applies one [`Specification`] to a sequence of borrowed records.
//! Adding a new criterion never requires a new filter function: build the
//! specification and pass it in.
//!
//! The result is a lazy iterator that borrows both the records and the
//! specification. It keeps the input order, never mutates the input and caches
//! nothing; calling `filter` again on a restartable input (a slice, a `Vec`)
//! starts a fresh pass. Since the output is itself a sequence of borrowed
//! records, it can be fed straight into another `filter`.

use crate::specification::Specification;

/// Yield the items satisfying `spec`, in input order.
///
/// The yielded references live as long as the input items, not as long as
/// the borrow of `spec`, so collected results can outlive a temporary
/// specification.
pub fn filter<'a, 's, T, I, S>(items: I, spec: &'s S) -> impl Iterator<Item = &'a T> + 's
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 's,
    S: Specification<T> + ?Sized,
{
    items.into_iter().filter(move |item| spec.is_satisfied(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_catalog, Color, Product, Size};
    use crate::specification::{ColorSpecification, SizeSpecification};

    fn names<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        products.into_iter().map(|p| p.name()).collect()
    }

    fn wide_catalog() -> Vec<Product> {
        let mut products = Vec::new();
        for (i, color) in Color::ALL.into_iter().enumerate() {
            for (j, size) in Size::ALL.into_iter().enumerate() {
                products.push(Product::new(format!("p{}{}", i, j), color, size));
                products.push(Product::new(format!("q{}{}", i, j), color, size));
            }
        }
        products
    }

    #[test]
    fn green_matches_apple_and_tree() {
        let products = sample_catalog();
        let green = ColorSpecification::new(Color::Green);
        assert_eq!(names(filter(&products, &green)), vec!["Apple", "Tree"]);
    }

    #[test]
    fn green_and_large_matches_tree_only() {
        let products = sample_catalog();
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);
        let spec = green.and(&large);
        assert_eq!(names(filter(&products, &spec)), vec!["Tree"]);
    }

    #[test]
    fn output_is_exactly_the_satisfying_items_in_order() {
        let products = wide_catalog();
        for color in Color::ALL {
            let spec = ColorSpecification::new(color);
            let expected: Vec<&Product> = products.iter().filter(|p| p.color() == color).collect();
            let actual: Vec<&Product> = filter(&products, &spec).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn conjunction_equals_sequential_filtering() {
        let products = wide_catalog();
        for color in Color::ALL {
            for size in Size::ALL {
                let p = ColorSpecification::new(color);
                let q = SizeSpecification::new(size);
                let both = p.and(&q);

                let combined: Vec<&Product> = filter(&products, &both).collect();
                let p_then_q: Vec<&Product> = filter(filter(&products, &p), &q).collect();
                let q_then_p: Vec<&Product> = filter(filter(&products, &q), &p).collect();

                assert_eq!(combined, p_then_q);
                assert_eq!(combined, q_then_p);
                assert_eq!(combined.len(), 2);
            }
        }
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let products = wide_catalog();
        let spec = SizeSpecification::new(Size::Medium);
        let once: Vec<&Product> = filter(&products, &spec).collect();
        let twice: Vec<&Product> = filter(filter(&products, &spec), &spec).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn is_lazy_and_restartable() {
        let products = sample_catalog();
        let green = ColorSpecification::new(Color::Green);

        let mut first = filter(&products, &green);
        assert_eq!(first.next().map(|p| p.name()), Some("Apple"));

        let second: Vec<_> = names(filter(&products, &green));
        assert_eq!(second, vec!["Apple", "Tree"]);
        assert_eq!(first.next().map(|p| p.name()), Some("Tree"));
        assert!(first.next().is_none());
    }

    #[test]
    fn results_outlive_a_temporary_spec() {
        let products = sample_catalog();
        let green = ColorSpecification::new(Color::Green);
        let small = SizeSpecification::new(Size::Small);

        let matched: Vec<&Product> = filter(&products, &green.and(&small)).collect();
        assert_eq!(names(matched), vec!["Apple"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let products: Vec<Product> = Vec::new();
        let green = ColorSpecification::new(Color::Green);
        assert_eq!(filter(&products, &green).count(), 0);
    }

    #[test]
    fn accepts_trait_objects() {
        let products = sample_catalog();
        let blue = ColorSpecification::new(Color::Blue);
        let spec: &dyn Specification<Product> = &blue;
        assert_eq!(names(filter(&products, spec)), vec!["House"]);
    }
}
