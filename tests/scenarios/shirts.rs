//! Scenario: a shop owner looks for red shirts.

use std::fs;

use tempfile::tempdir;

use sift::presentation::create_query_use_case;
use sift::{
    and, by_color, by_name, Color, Filter, MatchMode, PriceRange, Product, ProductQuery,
    SpecFilter, SpecificationExt,
};

fn shop() -> Vec<Product> {
    vec![
        Product::new("Red Shirt", Color::Red),
        Product::new("Blue Shirt", Color::Blue),
        Product::new("Green Hat", Color::Green),
    ]
}

#[test]
fn scenario_red_shirts() {
    let products = shop();
    let filter = SpecFilter;

    let reds: Vec<&str> = filter
        .filter(&products, &by_color(Color::Red))
        .into_iter()
        .map(Product::name)
        .collect();
    assert_eq!(reds, ["Red Shirt"]);

    let shirts: Vec<&str> = filter
        .filter(&products, &by_name("Shirt"))
        .into_iter()
        .map(Product::name)
        .collect();
    assert_eq!(shirts, ["Red Shirt", "Blue Shirt"]);

    let red_shirts = filter.filter(&products, &and(by_color(Color::Red), by_name("Shirt")));
    assert_eq!(red_shirts, vec![&products[0]]);

    let green_shirts = filter.filter(&products, &by_color(Color::Green).and(by_name("Shirt")));
    assert!(green_shirts.is_empty());
}

#[test]
fn scenario_everything_but_shirts() {
    let products = shop();
    let out = SpecFilter.filter(&products, &by_name("Shirt").not());
    assert_eq!(out, vec![&products[2]]);
}

#[test]
fn scenario_query_from_catalog_file() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("catalog.toml");
    fs::write(
        &catalog,
        r#"
[[products]]
name = "Red Shirt"
color = "red"
price = 1999

[[products]]
name = "Blue Shirt"
color = "blue"
price = 2499

[[products]]
name = "Green Hat"
color = "green"
"#,
    )
    .unwrap();

    let use_case = create_query_use_case();

    let query = ProductQuery::new()
        .with_color(Color::Red)
        .with_color(Color::Blue)
        .with_price(PriceRange::new(None, Some(2000)).unwrap());
    let result = use_case.execute(&catalog, &query).unwrap();
    assert_eq!(result.total, 3);
    let names: Vec<&str> = result.matched.iter().map(Product::name).collect();
    assert_eq!(names, ["Red Shirt"]);
    assert!(result.warnings.is_empty());

    let query = ProductQuery::new()
        .with_name("Hat")
        .with_price(PriceRange::new(Some(2000), None).unwrap())
        .with_mode(MatchMode::Any);
    let result = use_case.execute(&catalog, &query).unwrap();
    let names: Vec<&str> = result.matched.iter().map(Product::name).collect();
    assert_eq!(names, ["Blue Shirt", "Green Hat"]);

    let everything = use_case.execute(&catalog, &ProductQuery::new()).unwrap();
    assert_eq!(everything.matched_count(), 3);
}
