use super::render;
use anyhow::Result;
use solidapp::filter::filter;
use solidapp::journal::Journal;
use solidapp::model::{parse_catalog, sample_catalog, Color, Product, Size};
use solidapp::persistence;
use solidapp::specification::{ColorSpecification, SizeSpecification, Specification};
use std::path::Path;
use tracing::debug;

pub fn products(color: Option<Color>, size: Option<Size>, catalog: Option<&Path>) -> Result<()> {
    let products = match catalog {
        Some(path) => {
            let json = persistence::load(path)?;
            parse_catalog(&json)?
        }
        None => sample_catalog(),
    };
    debug!(count = products.len(), "catalog ready");

    let color_spec = color.map(ColorSpecification::new);
    let size_spec = size.map(SizeSpecification::new);

    let matched: Vec<&Product> = match (&color_spec, &size_spec) {
        (Some(c), Some(s)) => filter(&products, &c.and(s)).collect(),
        (Some(c), None) => filter(&products, c).collect(),
        (None, Some(s)) => filter(&products, s).collect(),
        (None, None) => products.iter().collect(),
    };

    if !matched.is_empty() {
        println!("{}", render::product_list(&matched));
    }
    Ok(())
}

pub fn journal(entries: &[String], remove: &[usize], path: &Path) -> Result<()> {
    let mut journal = Journal::new();
    for entry in entries {
        journal.add(entry);
    }
    for &index in remove {
        journal.remove(index)?;
    }
    println!("{}", journal);

    persistence::save(&journal, path)?;
    let loaded = persistence::load(path)?;

    println!();
    println!("{}", render::heading("loaded journal"));
    println!("{}", loaded);
    Ok(())
}
