// crates/sales-portal-datagen/src/generator.rs
// ============================================================================
// Module: Constrained Data Generator
// Description: Randomized payload builders that satisfy backend field rules.
// Purpose: Produce valid customers, products, deliveries, and orders on demand.
// Dependencies: fake, rand, sales-portal-core, sales-portal-config
// ============================================================================

//! ## Overview
//! [`DataGenerator`] owns its randomness source. [`DataGenerator::new`] uses
//! the thread-local generator, which is safe under parallel test threads;
//! [`DataGenerator::with_rng`] accepts a seeded generator for reproducible
//! runs. Uniqueness of emails and product names is process-wide regardless of
//! the source.
//!
//! Invariants:
//! - Every generated field satisfies [`sales_portal_core::constraints`].
//! - Override values are copied verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::address::en::StreetName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::FirstName;
use fake::faker::name::en::LastName;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use sales_portal_config::GeneratorConfig;
use sales_portal_core::Country;
use sales_portal_core::CustomerData;
use sales_portal_core::DeliveryAddress;
use sales_portal_core::DeliveryCondition;
use sales_portal_core::DeliveryData;
use sales_portal_core::Manufacturer;
use sales_portal_core::OrderData;
use sales_portal_core::ProductData;
use sales_portal_core::ValueSet;
use sales_portal_core::constraints::AMOUNT_RANGE;
use sales_portal_core::constraints::CITY_MAX;
use sales_portal_core::constraints::CUSTOMER_NAME_MAX;
use sales_portal_core::constraints::FLAT_RANGE;
use sales_portal_core::constraints::HOUSE_RANGE;
use sales_portal_core::constraints::PRICE_RANGE;
use sales_portal_core::constraints::STREET_MAX;
use sales_portal_core::constraints::WordCharset;
use sales_portal_core::dates::api_date_from_today;

use crate::overrides::CustomerOverrides;
use crate::overrides::DeliveryOverrides;
use crate::overrides::ProductOverrides;
use crate::text::NAME_FALLBACK;
use crate::text::STREET_FALLBACK;
use crate::text::phone_number;
use crate::text::random_digit;
use crate::text::random_letter;
use crate::text::sanitize_words;
use crate::unique::UniqueKind;
use crate::unique::claim;
use crate::unique::next_sequence;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Prefix of generated product names.
pub const PRODUCT_NAME_PREFIX: &str = "Product ";
/// Fake email draws attempted before a sequence suffix is added.
const EMAIL_DRAWS: usize = 8;
/// Upper bound of the house number appended to generated streets.
const STREET_NUMBER_MAX: u32 = 99;

// ============================================================================
// SECTION: Generator
// ============================================================================

/// Payload generator over a randomness source.
#[derive(Debug, Clone)]
pub struct DataGenerator<R = ThreadRng> {
    /// Randomness source.
    rng: R,
    /// Order sizing and delivery date settings.
    settings: GeneratorConfig,
}

impl DataGenerator<ThreadRng> {
    /// Creates a generator over the thread-local randomness source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for DataGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DataGenerator<R> {
    /// Creates a generator over `rng` with default settings.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            settings: GeneratorConfig::default(),
        }
    }

    /// Replaces the generator settings.
    #[must_use]
    pub fn with_config(mut self, settings: GeneratorConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the generator settings.
    #[must_use]
    pub const fn settings(&self) -> &GeneratorConfig {
        &self.settings
    }

    /// Generates a customer payload.
    pub fn customer(&mut self, overrides: CustomerOverrides) -> CustomerData {
        CustomerData {
            email: overrides.email.unwrap_or_else(|| self.unique_email()),
            name: overrides.name.unwrap_or_else(|| self.person_name()),
            country: overrides.country.unwrap_or_else(|| self.pick::<Country>()),
            city: overrides.city.unwrap_or_else(|| self.city()),
            street: overrides.street.unwrap_or_else(|| self.street()),
            house: overrides.house.unwrap_or_else(|| self.rng.gen_range(HOUSE_RANGE)),
            flat: overrides.flat.unwrap_or_else(|| self.rng.gen_range(FLAT_RANGE)),
            phone: overrides.phone.unwrap_or_else(|| phone_number(&mut self.rng)),
            notes: overrides.notes,
        }
    }

    /// Generates a fresh customer that reuses `original`'s email.
    pub fn duplicate_customer(&mut self, original: &CustomerData) -> CustomerData {
        self.customer(CustomerOverrides {
            email: Some(original.email.clone()),
            ..CustomerOverrides::default()
        })
    }

    /// Generates a product payload.
    pub fn product(&mut self, overrides: ProductOverrides) -> ProductData {
        ProductData {
            name: overrides.name.unwrap_or_else(|| self.unique_product_name()),
            amount: overrides.amount.unwrap_or_else(|| self.rng.gen_range(AMOUNT_RANGE)),
            price: overrides.price.unwrap_or_else(|| self.rng.gen_range(PRICE_RANGE)),
            manufacturer: overrides.manufacturer.unwrap_or_else(|| self.pick::<Manufacturer>()),
            notes: overrides.notes,
        }
    }

    /// Generates a delivery payload.
    pub fn delivery(&mut self, overrides: DeliveryOverrides) -> DeliveryData {
        let days_offset = overrides.days_offset.unwrap_or(self.settings.delivery_days_offset);
        DeliveryData {
            address: DeliveryAddress {
                country: overrides.country.unwrap_or_else(|| self.pick::<Country>()),
                city: overrides.city.unwrap_or_else(|| self.city()),
                street: overrides.street.unwrap_or_else(|| self.street()),
                house: overrides.house.unwrap_or_else(|| self.rng.gen_range(HOUSE_RANGE)),
                flat: overrides.flat.unwrap_or_else(|| self.rng.gen_range(FLAT_RANGE)),
            },
            condition: overrides.condition.unwrap_or_else(|| self.pick::<DeliveryCondition>()),
            final_date: overrides.final_date.unwrap_or_else(|| api_date_from_today(days_offset)),
        }
    }

    /// Generates an order payload for `customer_id` from a product pool.
    ///
    /// Products are sampled without replacement. The count is `num_products`
    /// when given, otherwise uniform in the configured range; either way it is
    /// capped at the pool size.
    pub fn order(
        &mut self,
        customer_id: &str,
        product_ids: &[String],
        num_products: Option<usize>,
    ) -> OrderData {
        let count = num_products.unwrap_or_else(|| {
            let min = self.settings.min_products_per_order;
            let max = self.settings.max_products_per_order.max(min);
            self.rng.gen_range(min..=max)
        });
        let products =
            product_ids.choose_multiple(&mut self.rng, count.min(product_ids.len())).cloned().collect();
        OrderData {
            customer: customer_id.to_string(),
            products,
        }
    }

    // ------------------------------------------------------------------------
    // Field sources
    // ------------------------------------------------------------------------

    /// Picks a uniform member of a value set.
    fn pick<T: ValueSet>(&mut self) -> String {
        T::all().choose(&mut self.rng).map(|member| member.as_str().to_string()).unwrap_or_default()
    }

    /// Realistic full name, letters only.
    fn person_name(&mut self) -> String {
        let first: String = FirstName().fake_with_rng(&mut self.rng);
        let last: String = LastName().fake_with_rng(&mut self.rng);
        sanitize_words(
            &format!("{first} {last}"),
            CUSTOMER_NAME_MAX,
            WordCharset::Alphabetic,
            NAME_FALLBACK,
        )
    }

    /// Realistic city name, letters only.
    fn city(&mut self) -> String {
        let raw: String = CityName().fake_with_rng(&mut self.rng);
        sanitize_words(&raw, CITY_MAX, WordCharset::Alphabetic, NAME_FALLBACK)
    }

    /// Realistic street name followed by a number.
    fn street(&mut self) -> String {
        let name: String = StreetName().fake_with_rng(&mut self.rng);
        let number = self.rng.gen_range(1..=STREET_NUMBER_MAX);
        sanitize_words(
            &format!("{name} {number}"),
            STREET_MAX,
            WordCharset::Alphanumeric,
            STREET_FALLBACK,
        )
    }

    /// Realistic email not generated before in this process.
    fn unique_email(&mut self) -> String {
        for _ in 0..EMAIL_DRAWS {
            let candidate: String = SafeEmail().fake_with_rng(&mut self.rng);
            if claim(UniqueKind::Email, &candidate) {
                return candidate;
            }
        }
        loop {
            let candidate: String = SafeEmail().fake_with_rng(&mut self.rng);
            let suffixed = match candidate.split_once('@') {
                Some((local, domain)) => format!("{local}{}@{domain}", next_sequence()),
                None => format!("user{}@example.com", next_sequence()),
            };
            if claim(UniqueKind::Email, &suffixed) {
                return suffixed;
            }
        }
    }

    /// `Product ` plus four letters and four digits, not generated before in this process.
    fn unique_product_name(&mut self) -> String {
        loop {
            let mut name = String::from(PRODUCT_NAME_PREFIX);
            name.extend((0..4).map(|_| random_letter(&mut self.rng)));
            name.extend((0..4).map(|_| random_digit(&mut self.rng)));
            if claim(UniqueKind::ProductName, &name) {
                return name;
            }
        }
    }
}

// ============================================================================
// SECTION: Thread-Local Entry Points
// ============================================================================

/// Generates a customer payload with the thread-local randomness source.
#[must_use]
pub fn generate_customer_data(overrides: CustomerOverrides) -> CustomerData {
    DataGenerator::new().customer(overrides)
}

/// Generates a product payload with the thread-local randomness source.
#[must_use]
pub fn generate_product_data(overrides: ProductOverrides) -> ProductData {
    DataGenerator::new().product(overrides)
}

/// Generates a delivery payload with the thread-local randomness source.
#[must_use]
pub fn generate_delivery_data(overrides: DeliveryOverrides) -> DeliveryData {
    DataGenerator::new().delivery(overrides)
}

/// Generates an order payload with the thread-local randomness source.
#[must_use]
pub fn generate_order_data(
    customer_id: &str,
    product_ids: &[String],
    num_products: Option<usize>,
) -> OrderData {
    DataGenerator::new().order(customer_id, product_ids, num_products)
}
