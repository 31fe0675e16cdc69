use restaurant_core::{
    FixedFraction, Menu, OrderService, OrderServiceError, PromotionEngine, PromotionRules,
};

fn service_with_draw(draw: f64) -> OrderService<FixedFraction> {
    let menu = Menu::colombian().unwrap();
    let engine = PromotionEngine::new(PromotionRules::default(), FixedFraction(draw)).unwrap();
    OrderService::new(menu, engine)
}

#[test]
fn add_by_name_copies_menu_price() {
    let service = service_with_draw(0.5);
    let mut order = service.open_order(false);

    let added = service.add_by_name(&mut order, "Ajiaco", 2).unwrap();

    assert_eq!(added, 2);
    assert_eq!(order.price_of("Ajiaco 1"), Some(18_000));
    assert_eq!(order.price_of("Ajiaco 2"), Some(18_000));
}

#[test]
fn unknown_item_leaves_order_untouched() {
    let service = service_with_draw(0.5);
    let mut order = service.open_order(true);

    let err = service
        .add_by_name(&mut order, "Hamburguesa", 1)
        .unwrap_err();

    assert_eq!(err, OrderServiceError::UnknownItem("Hamburguesa".to_string()));
    assert!(order.is_empty());
}

#[test]
fn checkout_applies_promotions_to_sample_order() {
    let mut service = service_with_draw(0.5);
    let mut order = service.open_order(false);
    for (name, quantity) in [
        ("Ajiaco", 1),
        ("Jugo de Lulo", 1),
        ("Sancocho de gallina", 1),
        ("Pastel Tres Leches", 1),
        ("Arepas con Huevo", 5),
        ("Empanadas", 2),
        ("Torta de Guanábana", 1),
        ("Agua de panela", 1),
    ] {
        service.add_by_name(&mut order, name, quantity).unwrap();
    }

    let receipt = service.checkout(&mut order);

    assert_eq!(order.item_count(), 13);
    assert_eq!(receipt.subtotal, 78_500);
    assert!((receipt.discount - 0.10).abs() < 1e-9);
    assert!((receipt.total - 70_650.0).abs() < 1e-6);
}

#[test]
fn checkout_jackpot_zeroes_total() {
    let mut service = service_with_draw(0.01);
    let mut order = service.open_order(true);
    service.add_by_name(&mut order, "Calentado", 1).unwrap();

    let receipt = service.checkout(&mut order);

    assert_eq!(receipt.discount, 1.0);
    assert_eq!(receipt.total, 0.0);
}

#[test]
fn service_menu_is_the_catalog_it_resolves_against() {
    let service = service_with_draw(0.5);

    let menu = service.menu();
    assert_eq!(menu.items().len(), menu.len());
    assert_eq!(menu.items()[0].name(), "Café");
    assert_eq!(menu.items().last().map(|item| item.name()), Some("Empanadas con Aji"));

    let mut order = service.open_order(false);
    for item in menu.items() {
        service.add_by_name(&mut order, item.name(), 1).unwrap();
    }
    assert_eq!(order.item_count(), 21);
    assert_eq!(
        order.subtotal(),
        menu.items().iter().map(|item| item.price()).sum::<u64>()
    );
}
