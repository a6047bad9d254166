// crates/sales-portal-core/src/enums.rs
// ============================================================================
// Module: Sales Portal Enumerated Value Sets
// Description: Closed, ordered value sets mirrored from the backend enums.
// Purpose: Single source of truth for generator choices and schema enum lists.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Every domain dimension with a closed set of wire values (country,
//! manufacturer, order status, ...) is an enum implementing [`ValueSet`].
//! Generators pick from [`ValueSet::all`] and schemas embed
//! [`ValueSet::wire_values`], so the two can never drift apart.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Value Set Trait
// ============================================================================

/// Closed, ordered set of wire values for one domain dimension.
///
/// # Invariants
/// - [`ValueSet::all`] is non-empty and lists every variant exactly once, in backend order.
/// - [`ValueSet::as_str`] is the exact wire token the backend accepts and returns.
pub trait ValueSet: Copy + Eq + 'static {
    /// Human-readable label for the dimension (used in diagnostics).
    const LABEL: &'static str;

    /// Returns every member of the set in canonical order.
    fn all() -> &'static [Self];

    /// Returns the wire value for the member.
    fn as_str(self) -> &'static str;

    /// Parses a wire value into a member of the set.
    #[must_use]
    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|candidate| candidate.as_str() == value)
    }

    /// Returns true when `value` is a wire value of this set.
    #[must_use]
    fn contains(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    /// Returns the wire values in canonical order.
    #[must_use]
    fn wire_values() -> Vec<&'static str> {
        Self::all().iter().map(|member| member.as_str()).collect()
    }
}

/// Error returned when a string is not a member of a value set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {set}")]
pub struct UnknownValue {
    /// Label of the value set that rejected the input.
    pub set: &'static str,
    /// Rejected input.
    pub value: String,
}

/// Declares a value set enum with serde wire names and a [`ValueSet`] impl.
macro_rules! value_set {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl ValueSet for $name {
            const LABEL: &'static str = $label;

            fn all() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <Self as ValueSet>::parse(value).ok_or_else(|| UnknownValue {
                    set: $label,
                    value: value.to_string(),
                })
            }
        }
    };
}

// ============================================================================
// SECTION: Address Value Sets
// ============================================================================

value_set! {
    /// Countries accepted by the backend for customers and delivery addresses.
    Country ("country") {
        /// United States.
        Usa => "USA",
        /// Canada.
        Canada => "Canada",
        /// Belarus.
        Belarus => "Belarus",
        /// Ukraine.
        Ukraine => "Ukraine",
        /// Germany.
        Germany => "Germany",
        /// France.
        France => "France",
        /// Great Britain.
        GreatBritain => "Great Britain",
        /// Russia.
        Russia => "Russia",
    }
}

value_set! {
    /// Delivery conditions for scheduled deliveries.
    DeliveryCondition ("delivery condition") {
        /// Courier delivery to an address.
        Delivery => "Delivery",
        /// Customer pickup.
        Pickup => "Pickup",
    }
}

value_set! {
    /// Delivery location choice offered by the delivery form.
    DeliveryLocation ("delivery location") {
        /// Customer's own address.
        Home => "Home",
        /// Another address.
        Other => "Other",
    }
}

// ============================================================================
// SECTION: Catalog Value Sets
// ============================================================================

value_set! {
    /// Product manufacturers accepted by the backend.
    Manufacturer ("manufacturer") {
        /// Apple.
        Apple => "Apple",
        /// Samsung.
        Samsung => "Samsung",
        /// Google.
        Google => "Google",
        /// Microsoft.
        Microsoft => "Microsoft",
        /// Sony.
        Sony => "Sony",
        /// Xiaomi.
        Xiaomi => "Xiaomi",
        /// Amazon.
        Amazon => "Amazon",
        /// Tesla.
        Tesla => "Tesla",
    }
}

// ============================================================================
// SECTION: Order Value Sets
// ============================================================================

value_set! {
    /// Order lifecycle status.
    OrderStatus ("order status") {
        /// Created, not yet processed.
        Draft => "Draft",
        /// Processing started.
        InProcess => "In Process",
        /// Some products received.
        PartiallyReceived => "Partially Received",
        /// All products received.
        Received => "Received",
        /// Order canceled.
        Canceled => "Canceled",
    }
}

value_set! {
    /// Action recorded in an order history entry.
    OrderHistoryAction ("order history action") {
        /// Order created.
        Created => "Order created",
        /// Customer replaced.
        CustomerChanged => "Customer changed",
        /// Requested products replaced.
        RequiredProductsChanged => "Requested products changed",
        /// Processing started.
        Processed => "Order processing started",
        /// Delivery scheduled.
        DeliveryScheduled => "Delivery Scheduled",
        /// Delivery edited.
        DeliveryEdited => "Delivery Edited",
        /// Some products received.
        Received => "Received",
        /// All products received.
        ReceivedAll => "All products received",
        /// Order canceled.
        Canceled => "Order canceled",
        /// Manager assigned.
        ManagerAssigned => "Manager Assigned",
        /// Manager unassigned.
        ManagerUnassigned => "Manager Unassigned",
        /// Canceled order reopened.
        Reopened => "Order reopened",
    }
}

value_set! {
    /// Sortable columns of the orders list endpoint.
    OrderSortField ("order sort field") {
        /// Order number.
        OrderNumber => "orderNumber",
        /// Customer email.
        Email => "email",
        /// Total price.
        Price => "price",
        /// Delivery date.
        Delivery => "delivery",
        /// Order status.
        Status => "status",
        /// Assigned manager.
        AssignedManager => "assignedManager",
        /// Creation timestamp.
        CreatedOn => "createdOn",
    }
}

value_set! {
    /// Sortable columns of the customers list endpoint.
    CustomerSortField ("customer sort field") {
        /// Customer email.
        Email => "email",
        /// Customer name.
        Name => "name",
        /// Customer country.
        Country => "country",
        /// Creation timestamp.
        CreatedOn => "createdOn",
    }
}

value_set! {
    /// Sort direction for list endpoints.
    SortOrder ("sort order") {
        /// Ascending.
        Asc => "asc",
        /// Descending.
        Desc => "desc",
    }
}

// ============================================================================
// SECTION: User Value Sets
// ============================================================================

value_set! {
    /// Roles a backend user may hold.
    UserRole ("user role") {
        /// Administrator.
        Admin => "ADMIN",
        /// Regular user.
        User => "USER",
    }
}

value_set! {
    /// Notification kinds emitted for order events.
    NotificationType ("notification type") {
        /// Manager assigned to an order.
        Assigned => "assigned",
        /// Order status changed.
        StatusChanged => "statusChanged",
        /// Order customer changed.
        CustomerChanged => "customerChanged",
        /// Order products changed.
        ProductsChanged => "productsChanged",
        /// Delivery updated.
        DeliveryUpdated => "deliveryUpdated",
        /// Products delivered.
        ProductsDelivered => "productsDelivered",
        /// Manager changed.
        ManagerChanged => "managerChanged",
        /// Comment added.
        CommentAdded => "commentAdded",
        /// Comment deleted.
        CommentDeleted => "commentDeleted",
        /// New order created.
        NewOrder => "newOrder",
        /// Manager unassigned.
        Unassigned => "unassigned",
    }
}
