use restaurant_core::{FixedFraction, MenuItem, Order};

const EPSILON: f64 = 1e-9;

fn item(name: &str, price: u64) -> MenuItem {
    MenuItem::new(name, price).unwrap()
}

#[test]
fn quantity_expands_into_numbered_lines() {
    let mut order = Order::new(false);
    let added = order.add_item(&item("X", 1_000), 3);

    assert_eq!(added, 3);
    let entries: Vec<(&str, u64)> = order.entries().collect();
    assert_eq!(entries, vec![("X 1", 1_000), ("X 2", 1_000), ("X 3", 1_000)]);
    assert_eq!(order.subtotal(), 3_000);
    assert_eq!(order.price_of("X 2"), Some(1_000));
    assert_eq!(order.price_of("X 4"), None);
}

#[test]
fn lines_copy_name_and_price_only() {
    let mut order = Order::new(false);
    order.add_item(&MenuItem::dessert("Arroz con Leche", 3_500, 200).unwrap(), 1);

    let line = &order.lines()[0];
    assert_eq!(line.label, "Arroz con Leche 1");
    assert_eq!(line.item_name, "Arroz con Leche");
    assert_eq!(line.ordinal, 1);
    assert_eq!(line.price, 3_500);
}

#[test]
fn total_without_promotions_equals_subtotal() {
    let mut order = Order::new(true);
    order.add_item(&item("Ajiaco", 18_000), 1);
    order.add_item(&item("Jugo de Lulo", 2_500), 2);

    assert_eq!(order.subtotal(), 23_000);
    assert!((order.calculate_total() - 23_000.0).abs() < EPSILON);
}

#[test]
fn student_discount_on_ten_thousand_yields_eight_thousand() {
    let mut order = Order::new(true);
    order.add_item(&item("Menu del dia", 5_000), 2);

    order.promos(&mut FixedFraction(0.5));

    assert!((order.discount_fraction() - 0.20).abs() < EPSILON);
    assert!((order.calculate_total() - 8_000.0).abs() < EPSILON);
}

#[test]
fn total_matches_formula_for_every_discount_branch() {
    let cases = [(false, 2, 0.9), (false, 6, 0.9), (true, 7, 0.9), (true, 3, 0.05)];

    for (is_student, quantity, draw) in cases {
        let mut order = Order::new(is_student);
        order.add_item(&item("Tamales", 7_000), quantity);
        order.add_item(&item("Café", 2_000), 1);
        order.promos(&mut FixedFraction(draw));

        let expected = order.subtotal() as f64 * (1.0 - order.discount_fraction());
        assert!(
            (order.calculate_total() - expected).abs() < EPSILON,
            "student={is_student} quantity={quantity} draw={draw}"
        );
    }
}

#[test]
fn jackpot_makes_the_order_free() {
    let mut order = Order::new(false);
    order.add_item(&item("Bandeja Paisa", 25_000), 1);

    order.promos(&mut FixedFraction(0.0));

    assert_eq!(order.discount_fraction(), 1.0);
    assert!(order.calculate_total().abs() < EPSILON);
}
