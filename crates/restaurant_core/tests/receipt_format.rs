use restaurant_core::{FixedFraction, IterationSummary, MenuItem, Order, Receipt};

fn student_order() -> Order {
    let mut order = Order::new(true);
    order.add_item(&MenuItem::new("Arepa con queso", 8_000).unwrap(), 2);
    order.add_item(&MenuItem::new("Café", 2_000).unwrap(), 1);
    order.add_item(&MenuItem::new("Bandeja Paisa", 25_000).unwrap(), 1);
    order.add_item(&MenuItem::new("Arroz con Leche", 3_500).unwrap(), 1);
    order
}

#[test]
fn receipt_lists_lines_discount_and_total() {
    let mut order = student_order();
    order.promos(&mut FixedFraction(0.5));

    let receipt = Receipt::from_order(&order);

    assert_eq!(receipt.subtotal, 46_500);
    assert_eq!(
        receipt.to_string(),
        "Arepa con queso 1 - 8,000\n\
         Arepa con queso 2 - 8,000\n\
         Café 1 - 2,000\n\
         Bandeja Paisa 1 - 25,000\n\
         Arroz con Leche 1 - 3,500\n\
         Descuento: 20%\n\
         Total: $37,200 pesos"
    );
}

#[test]
fn receipt_is_a_snapshot() {
    let mut order = student_order();
    let receipt = Receipt::from_order(&order);

    order.add_item(&MenuItem::new("Tamales", 7_000).unwrap(), 1);

    assert_eq!(receipt.lines.len(), 5);
    assert_eq!(order.item_count(), 6);
}

#[test]
fn receipt_serializes_for_front_ends() {
    let order = student_order();
    let receipt = Receipt::from_order(&order);

    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["order_id"], order.id().to_string());
    assert_eq!(json["lines"][0]["label"], "Arepa con queso 1");
    assert_eq!(json["lines"][0]["price"], 8_000);
    assert_eq!(json["subtotal"], 46_500);
}

#[test]
fn iteration_summary_resums_through_labels() {
    let mut order = Order::new(false);
    order.add_item(&MenuItem::new("Ajiaco", 18_000).unwrap(), 1);
    order.add_item(&MenuItem::new("Arepas con Huevo", 5_000).unwrap(), 5);
    order.promos(&mut FixedFraction(0.9));

    let summary = IterationSummary::from_order(&order);

    assert_eq!(summary.item_count, 6);
    assert_eq!(summary.sum, 43_000);
    assert_eq!(
        summary.to_string(),
        "Total: 43,000 pesos, descuento aplicado: 10%, total con descuento: 38,700 pesos"
    );
}

#[test]
fn iteration_summary_counts_every_repeated_line() {
    let mut order = Order::new(false);
    let arepa = MenuItem::new("Arepa con queso", 8_000).unwrap();
    order.add_item(&arepa, 2);
    order.add_item(&MenuItem::new("Café", 2_000).unwrap(), 1);
    order.add_item(&arepa, 3);

    let summary = IterationSummary::from_order(&order);

    assert_eq!(summary.item_count, order.item_count());
    assert_eq!(summary.item_count, 6);
    assert_eq!(summary.sum, order.subtotal());
    assert_eq!(summary.sum, 42_000);
}
