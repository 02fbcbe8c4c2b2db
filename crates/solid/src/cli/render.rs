use console::style;
use solidapp::model::Product;

/// One product name per line.
pub fn product_list(products: &[&Product]) -> String {
    products
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn heading(text: &str) -> String {
    style(text).bold().to_string()
}
