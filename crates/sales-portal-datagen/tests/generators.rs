// crates/sales-portal-datagen/tests/generators.rs
// ============================================================================
// Module: Generator Integration Tests
// Description: Validity, override fidelity, and sampling checks for payloads.
// Purpose: Ensure generated payloads always pass backend field rules.
// Dependencies: sales-portal-datagen, sales-portal-core, sales-portal-config, rand, proptest
// ============================================================================

//! Generator integration tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sales_portal_config::GeneratorConfig;
use sales_portal_core::Country;
use sales_portal_core::DeliveryCondition;
use sales_portal_core::Manufacturer;
use sales_portal_core::ValueSet;
use sales_portal_core::constraints::check_customer;
use sales_portal_core::constraints::check_delivery;
use sales_portal_core::constraints::check_product;
use sales_portal_core::dates::api_date_from_today;
use sales_portal_datagen::CustomerOverrides;
use sales_portal_datagen::DataGenerator;
use sales_portal_datagen::DeliveryOverrides;
use sales_portal_datagen::PRODUCT_NAME_PREFIX;
use sales_portal_datagen::ProductOverrides;
use sales_portal_datagen::generate_customer_data;
use sales_portal_datagen::generate_delivery_data;
use sales_portal_datagen::generate_order_data;
use sales_portal_datagen::generate_product_data;

fn seeded(seed: u64) -> DataGenerator<StdRng> {
    DataGenerator::with_rng(StdRng::seed_from_u64(seed))
}

fn pool(size: usize) -> Vec<String> {
    (0..size).map(|index| format!("{index:024x}")).collect()
}

// ============================================================================
// SECTION: Validity
// ============================================================================

#[test]
fn thousand_customers_pass_every_rule() {
    let mut generator = seeded(11);
    for _ in 0..1000 {
        let customer = generator.customer(CustomerOverrides::default());
        let violations = check_customer(&customer);
        assert!(violations.is_empty(), "{customer:?} -> {violations:?}");
        assert!(customer.notes.is_none());
    }
}

#[test]
fn thousand_products_pass_every_rule() {
    let mut generator = seeded(12);
    for _ in 0..1000 {
        let product = generator.product(ProductOverrides::default());
        let violations = check_product(&product);
        assert!(violations.is_empty(), "{product:?} -> {violations:?}");
    }
}

#[test]
fn thousand_deliveries_pass_every_rule() {
    let mut generator = seeded(13);
    for _ in 0..1000 {
        let delivery = generator.delivery(DeliveryOverrides::default());
        let violations = check_delivery(&delivery);
        assert!(violations.is_empty(), "{delivery:?} -> {violations:?}");
    }
}

#[test]
fn thread_local_entry_points_produce_valid_payloads() {
    assert!(check_customer(&generate_customer_data(CustomerOverrides::default())).is_empty());
    assert!(check_product(&generate_product_data(ProductOverrides::default())).is_empty());
    assert!(check_delivery(&generate_delivery_data(DeliveryOverrides::default())).is_empty());
}

#[test]
fn generated_enum_fields_are_members() {
    let mut generator = seeded(14);
    for _ in 0..200 {
        assert!(Country::contains(&generator.customer(CustomerOverrides::default()).country));
        assert!(Manufacturer::contains(&generator.product(ProductOverrides::default()).manufacturer));
        assert!(DeliveryCondition::contains(&generator.delivery(DeliveryOverrides::default()).condition));
    }
}

// ============================================================================
// SECTION: Field Shapes
// ============================================================================

#[test]
fn phone_numbers_are_plus_and_fourteen_digits() {
    let mut generator = seeded(21);
    for _ in 0..100 {
        let phone = generator.customer(CustomerOverrides::default()).phone;
        assert_eq!(phone.len(), 15, "{phone}");
        assert!(phone.starts_with('+'));
        assert!(phone[1..].chars().all(|ch| ch.is_ascii_digit()));
    }
}

#[test]
fn product_names_have_prefix_letters_and_digits() {
    let mut generator = seeded(22);
    for _ in 0..100 {
        let name = generator.product(ProductOverrides::default()).name;
        let suffix = name.strip_prefix(PRODUCT_NAME_PREFIX).expect("prefix");
        assert_eq!(suffix.len(), 8);
        assert!(suffix[..4].chars().all(|ch| ch.is_ascii_alphabetic()));
        assert!(suffix[4..].chars().all(|ch| ch.is_ascii_digit()));
    }
}

#[test]
fn generated_emails_and_product_names_do_not_repeat() {
    // Identical seeds replay identical fake draws; the ledger must still disambiguate.
    let mut first = seeded(23);
    let mut second = seeded(23);
    let mut emails = HashSet::new();
    let mut names = HashSet::new();
    for _ in 0..200 {
        assert!(emails.insert(first.customer(CustomerOverrides::default()).email));
        assert!(emails.insert(second.customer(CustomerOverrides::default()).email));
        assert!(names.insert(first.product(ProductOverrides::default()).name));
        assert!(names.insert(second.product(ProductOverrides::default()).name));
    }
}

#[test]
fn duplicate_customer_reuses_email_only() {
    let mut generator = seeded(24);
    let original = generator.customer(CustomerOverrides::default());
    let duplicate = generator.duplicate_customer(&original);
    assert_eq!(duplicate.email, original.email);
    assert!(check_customer(&duplicate).is_empty());
}

#[test]
fn delivery_date_defaults_to_configured_offset() {
    let mut generator = seeded(25);
    let delivery = generator.delivery(DeliveryOverrides::default());
    assert_eq!(delivery.final_date, api_date_from_today(7));

    let mut generator = seeded(25).with_config(GeneratorConfig {
        delivery_days_offset: 30,
        ..GeneratorConfig::default()
    });
    assert_eq!(generator.delivery(DeliveryOverrides::default()).final_date, api_date_from_today(30));

    let delivery = generator.delivery(DeliveryOverrides {
        days_offset: Some(2),
        ..DeliveryOverrides::default()
    });
    assert_eq!(delivery.final_date, api_date_from_today(2));
}

#[test]
fn extreme_day_offsets_still_produce_a_date() {
    let mut generator = seeded(26);
    for offset in [i64::MAX, i64::MIN] {
        let delivery = generator.delivery(DeliveryOverrides {
            days_offset: Some(offset),
            ..DeliveryOverrides::default()
        });
        assert_eq!(delivery.final_date, api_date_from_today(offset));
    }

    let mut generator = seeded(26).with_config(GeneratorConfig {
        delivery_days_offset: i64::MAX,
        ..GeneratorConfig::default()
    });
    let delivery = generator.delivery(DeliveryOverrides::default());
    assert_eq!(delivery.final_date, api_date_from_today(i64::MAX));
}

// ============================================================================
// SECTION: Overrides
// ============================================================================

#[test]
fn customer_overrides_are_copied_verbatim() {
    let mut generator = seeded(31);
    let customer = generator.customer(CustomerOverrides {
        email: Some("not-an-email".to_string()),
        name: Some(String::new()),
        country: Some("Atlantis".to_string()),
        house: Some(0),
        flat: Some(10_000),
        phone: Some("123".to_string()),
        notes: Some("<script>".to_string()),
        ..CustomerOverrides::default()
    });
    assert_eq!(customer.email, "not-an-email");
    assert_eq!(customer.name, "");
    assert_eq!(customer.country, "Atlantis");
    assert_eq!(customer.house, 0);
    assert_eq!(customer.flat, 10_000);
    assert_eq!(customer.phone, "123");
    assert_eq!(customer.notes.as_deref(), Some("<script>"));

    let fields: Vec<&str> = check_customer(&customer).iter().map(|violation| violation.field).collect();
    for field in ["email", "name", "country", "house", "flat", "phone", "notes"] {
        assert!(fields.contains(&field), "missing {field} in {fields:?}");
    }
    assert!(!fields.contains(&"city"));
    assert!(!fields.contains(&"street"));
}

#[test]
fn product_overrides_are_copied_verbatim() {
    let mut generator = seeded(32);
    let product = generator.product(ProductOverrides {
        name: Some("ab".to_string()),
        amount: Some(-1),
        price: Some(100_000),
        manufacturer: Some("Nokia".to_string()),
        notes: Some("fine".to_string()),
    });
    assert_eq!(product.name, "ab");
    assert_eq!(product.amount, -1);
    assert_eq!(product.price, 100_000);
    assert_eq!(product.manufacturer, "Nokia");
    assert_eq!(check_product(&product).len(), 4);
}

#[test]
fn delivery_overrides_are_copied_verbatim() {
    let mut generator = seeded(33);
    let delivery = generator.delivery(DeliveryOverrides {
        condition: Some("Teleport".to_string()),
        final_date: Some("tomorrow".to_string()),
        city: Some("Paris".to_string()),
        ..DeliveryOverrides::default()
    });
    assert_eq!(delivery.condition, "Teleport");
    assert_eq!(delivery.final_date, "tomorrow");
    assert_eq!(delivery.address.city, "Paris");
    let fields: Vec<&str> = check_delivery(&delivery).iter().map(|violation| violation.field).collect();
    assert_eq!(fields, vec!["condition", "finalDate"]);
}

// ============================================================================
// SECTION: Orders
// ============================================================================

#[test]
fn order_keeps_customer_and_samples_distinct_products() {
    let mut generator = seeded(41);
    let products = pool(10);
    for _ in 0..200 {
        let order = generator.order("customer-1", &products, None);
        assert_eq!(order.customer, "customer-1");
        let settings = generator.settings();
        assert!(order.products.len() >= settings.min_products_per_order);
        assert!(order.products.len() <= settings.max_products_per_order);
        let distinct: HashSet<&String> = order.products.iter().collect();
        assert_eq!(distinct.len(), order.products.len());
        assert!(order.products.iter().all(|id| products.contains(id)));
    }
}

#[test]
fn order_honors_requested_count() {
    let mut generator = seeded(42);
    let products = pool(6);
    assert_eq!(generator.order("c", &products, Some(3)).products.len(), 3);
    assert_eq!(generator.order("c", &products, Some(6)).products.len(), 6);
    assert!(generator.order("c", &products, Some(0)).products.is_empty());
}

#[test]
fn order_count_is_capped_by_pool() {
    let products = pool(2);
    let order = generate_order_data("c", &products, Some(5));
    assert_eq!(order.products.len(), 2);
    assert!(generate_order_data("c", &[], None).products.is_empty());
}

proptest! {
    #[test]
    fn sampled_orders_never_exceed_pool(seed in any::<u64>(), size in 0_usize..12, wanted in proptest::option::of(0_usize..20)) {
        let mut generator = seeded(seed);
        let products = pool(size);
        let order = generator.order("c", &products, wanted);
        prop_assert!(order.products.len() <= size);
        if let Some(wanted) = wanted {
            prop_assert_eq!(order.products.len(), wanted.min(size));
        }
        let distinct: HashSet<&String> = order.products.iter().collect();
        prop_assert_eq!(distinct.len(), order.products.len());
    }
}
