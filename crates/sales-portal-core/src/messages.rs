// crates/sales-portal-core/src/messages.rs
// ============================================================================
// Module: Backend Message Catalog
// Description: Validation and response error strings returned by the backend.
// Purpose: Let tests assert exact backend error text without retyping it.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The backend answers rejected requests with a fixed message per field rule
//! and a small set of templated not-found and conflict messages. The strings
//! here are bit-exact copies of what the backend sends in `ErrorMessage`.

// ============================================================================
// SECTION: Field Validation Messages
// ============================================================================

/// Field validation messages returned on 400 responses.
pub mod validation {
    /// Customer name rule.
    pub const CUSTOMER_NAME: &str =
        "Customer's name should contain only 1-40 alphabetical characters and one space between";
    /// City rule.
    pub const CITY: &str =
        "City's name should contain only 1-20 alphabetical characters and one space between";
    /// Legacy address rule.
    pub const ADDRESS: &str =
        "Address should contain only 1-20 alphanumerical characters and one space between";
    /// Street rule.
    pub const STREET: &str =
        "Street should contain only 1-40 alphanumerical characters and one space between";
    /// House number rule.
    pub const HOUSE: &str = "House number should be in range 1-999";
    /// Flat number rule.
    pub const FLAT: &str = "Flat number should be in range 1-9999";
    /// Email rule.
    pub const EMAIL: &str = "Invalid Email Address";
    /// Phone rule.
    pub const PHONE: &str = "Mobile Number should be at least 10 characters and start with a +";
    /// Notes rule.
    pub const NOTES: &str = "Notes should be in range 0-250 and without < or > symbols";
    /// Product name rule (backend spelling preserved).
    pub const PRODUCTS_NAME: &str =
        "Products's name should contain only 3-40 alphanumerical characters and one space between";
    /// Product amount rule.
    pub const AMOUNT: &str = "Amount should be in range 0-999";
    /// Product price rule.
    pub const PRICE: &str = "Price should be in range 1-99999";
    /// Country membership rule.
    pub const COUNTRY: &str = "No such country is defined";
    /// Manufacturer membership rule.
    pub const MANUFACTURER: &str = "No such manufacturer is defined";
    /// Order customer reference rule.
    pub const CUSTOMER: &str = "Incorrect Customer";
    /// Order product reference rule (the backend reuses the customer text).
    pub const PRODUCT: &str = "Incorrect Customer";
    /// Delivery condition rule.
    pub const DELIVERY: &str = "Incorrect Delivery";
    /// Malformed body.
    pub const BODY: &str = "Incorrect request body";
    /// Missing comment.
    pub const COMMENT_NOT_FOUND: &str = "Comment was not found";
    /// User listing failure.
    pub const GET_USERS: &str = "Failed to get users";
}

// ============================================================================
// SECTION: Response Error Messages
// ============================================================================

/// Fixed and templated response error messages.
pub mod response {
    /// Malformed body.
    pub const BAD_REQUEST: &str = "Incorrect request body";
    /// Missing or invalid token.
    pub const UNAUTHORIZED: &str = "Not authorized";
    /// Invalid delivery condition.
    pub const INCORRECT_DELIVERY: &str = "Incorrect Delivery";
    /// Invalid delivery date.
    pub const INVALID_DATE: &str = "Invalid final date";
    /// Order created without a customer.
    pub const CUSTOMER_MISSING: &str = "Missing customer";
    /// Invalid order status transition.
    pub const INVALID_ORDER_STATUS: &str = "Invalid order status";
    /// Processing attempted before delivery was scheduled.
    pub const ORDER_IS_NOT_PROCESSED: &str = "Can't process order. Please, schedule delivery";
    /// Malformed object identifier.
    pub const INVALID_PAYLOAD: &str = "Argument passed in must be a string of 12 bytes or a string of 24 hex characters or an integer";

    /// Product lookup miss.
    #[must_use]
    pub fn product_not_found(product_id: &str) -> String {
        format!("Product with id '{product_id}' wasn't found")
    }

    /// Customer lookup miss.
    #[must_use]
    pub fn customer_not_found(customer_id: &str) -> String {
        format!("Customer with id '{customer_id}' wasn't found")
    }

    /// Duplicate product name.
    #[must_use]
    pub fn conflict(name: &str) -> String {
        format!("Product with name '{name}' already exists")
    }

    /// Manager lookup miss.
    #[must_use]
    pub fn manager_not_found(manager_id: &str) -> String {
        format!("Manager with id '{manager_id}' wasn't found")
    }

    /// Order lookup miss.
    #[must_use]
    pub fn order_not_found(order_id: &str) -> String {
        format!("Order with id '{order_id}' wasn't found")
    }

    /// Receive attempted for a product the order does not contain.
    #[must_use]
    pub fn product_not_requested(product_id: &str) -> String {
        format!("Product with Id '{product_id}' is not requested")
    }
}
