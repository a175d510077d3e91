//! Scenario: a downstream crate adds its own conditions and item types
//! without modifying any library code.

use sift::{
    all_of, any_of, by_color, by_name, from_fn, BoxedSpecification, Color, Filter, HasColor,
    HasName, Product, SpecFilter, Specification, SpecificationExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, PartialEq)]
struct Garment {
    name: &'static str,
    color: Color,
    size: Size,
}

impl HasName for Garment {
    fn name(&self) -> &str {
        self.name
    }
}

impl HasColor for Garment {
    fn color(&self) -> Color {
        self.color
    }
}

/// A condition the library knows nothing about
struct SizeSpecification(Size);

impl Specification for SizeSpecification {
    type Item = Garment;

    fn is_satisfied(&self, item: &Garment) -> bool {
        item.size == self.0
    }
}

fn wardrobe() -> Vec<Garment> {
    vec![
        Garment {
            name: "Red Shirt",
            color: Color::Red,
            size: Size::Large,
        },
        Garment {
            name: "Red Scarf",
            color: Color::Red,
            size: Size::Small,
        },
        Garment {
            name: "Blue Shirt",
            color: Color::Blue,
            size: Size::Large,
        },
        Garment {
            name: "White Sock",
            color: Color::White,
            size: Size::Medium,
        },
    ]
}

#[test]
fn scenario_new_condition_composes_with_builtins() {
    let items = wardrobe();
    let spec = by_color(Color::Red).and(SizeSpecification(Size::Large));
    let names: Vec<&str> = SpecFilter
        .filter(&items, &spec)
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, ["Red Shirt"]);
}

#[test]
fn scenario_closure_condition() {
    let items = wardrobe();
    let not_small = from_fn(|g: &Garment| g.size > Size::Small);
    let spec = by_name("S").and(not_small);
    let names: Vec<&str> = SpecFilter
        .filter(&items, &spec)
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, ["Red Shirt", "Blue Shirt", "White Sock"]);
}

#[test]
fn scenario_conditions_chosen_at_runtime() {
    let items = wardrobe();
    let wanted = ["red", "white"];

    let colors: Vec<BoxedSpecification<'_, Garment>> = wanted
        .iter()
        .map(|token| by_color(token.parse::<Color>().unwrap()).boxed())
        .collect();
    let spec = all_of([
        any_of(colors).boxed(),
        SizeSpecification(Size::Small).not().boxed(),
    ]);

    let names: Vec<&str> = SpecFilter
        .filter(&items, &spec)
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, ["Red Shirt", "White Sock"]);
}

#[test]
fn scenario_one_child_in_two_composites() {
    let items = wardrobe();
    let shirts = std::rc::Rc::new(by_name::<Garment>("Shirt"));

    let red_shirts = by_color(Color::Red).and(shirts.clone());
    let large_shirts = SizeSpecification(Size::Large).and(shirts);

    assert_eq!(SpecFilter.filter(&items, &red_shirts).len(), 1);
    assert_eq!(SpecFilter.filter(&items, &large_shirts).len(), 2);
}

#[test]
fn scenario_products_and_garments_share_leaves() {
    let product = Product::new("Red Shirt", Color::Red);
    let items = wardrobe();
    let garment = &items[0];

    assert!(by_color(Color::Red).is_satisfied(&product));
    assert!(by_color(Color::Red).is_satisfied(garment));
}
