// crates/sales-portal-config/src/endpoints.rs
// ============================================================================
// Module: Backend Endpoints
// Description: URL builders for every backend API route.
// Purpose: Keep route paths in one place, derived from the configured base URL.
// Dependencies: url
// ============================================================================

//! ## Overview
//! [`Endpoints`] holds a validated API base URL and renders absolute route
//! URLs. Identifier segments are inserted verbatim.

use crate::config::ConfigError;
use crate::config::parse_http_url;

/// Route builders rooted at the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL without a trailing slash.
    base: String,
}

impl Endpoints {
    /// Creates builders for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        parse_http_url("api.base_url", base_url)?;
        Ok(Self {
            base: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Renders `/api/{path}`.
    fn api(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base)
    }

    /// Login route.
    #[must_use]
    pub fn login(&self) -> String {
        self.api("login")
    }

    /// Logout route.
    #[must_use]
    pub fn logout(&self) -> String {
        self.api("logout")
    }

    /// Product collection route.
    #[must_use]
    pub fn products(&self) -> String {
        self.api("products")
    }

    /// Unpaged product listing route.
    #[must_use]
    pub fn products_all(&self) -> String {
        self.api("products/all")
    }

    /// Single product route.
    #[must_use]
    pub fn product_by_id(&self, product_id: &str) -> String {
        self.api(&format!("products/{product_id}"))
    }

    /// Customer collection route.
    #[must_use]
    pub fn customers(&self) -> String {
        self.api("customers")
    }

    /// Unpaged customer listing route.
    #[must_use]
    pub fn customers_all(&self) -> String {
        self.api("customers/all")
    }

    /// Single customer route.
    #[must_use]
    pub fn customer_by_id(&self, customer_id: &str) -> String {
        self.api(&format!("customers/{customer_id}"))
    }

    /// Orders of one customer.
    #[must_use]
    pub fn customer_orders(&self, customer_id: &str) -> String {
        self.api(&format!("customers/{customer_id}/orders"))
    }

    /// Order collection route.
    #[must_use]
    pub fn orders(&self) -> String {
        self.api("orders")
    }

    /// Single order route.
    #[must_use]
    pub fn order_by_id(&self, order_id: &str) -> String {
        self.api(&format!("orders/{order_id}"))
    }

    /// Order delivery route.
    #[must_use]
    pub fn order_delivery(&self, order_id: &str) -> String {
        self.api(&format!("orders/{order_id}/delivery"))
    }

    /// Order status route.
    #[must_use]
    pub fn order_status(&self, order_id: &str) -> String {
        self.api(&format!("orders/{order_id}/status"))
    }

    /// Order receive route.
    #[must_use]
    pub fn order_receive(&self, order_id: &str) -> String {
        self.api(&format!("orders/{order_id}/receive"))
    }

    /// Order comments route.
    #[must_use]
    pub fn order_comments(&self, order_id: &str) -> String {
        self.api(&format!("orders/{order_id}/comments"))
    }

    /// Single order comment route.
    #[must_use]
    pub fn order_comment_by_id(&self, order_id: &str, comment_id: &str) -> String {
        self.api(&format!("orders/{order_id}/comments/{comment_id}"))
    }

    /// Manager assignment route.
    #[must_use]
    pub fn assign_manager(&self, order_id: &str, manager_id: &str) -> String {
        self.api(&format!("orders/{order_id}/assign-manager/{manager_id}"))
    }

    /// Manager removal route.
    #[must_use]
    pub fn unassign_manager(&self, order_id: &str) -> String {
        self.api(&format!("orders/{order_id}/unassign-manager"))
    }

    /// Notification collection route.
    #[must_use]
    pub fn notifications(&self) -> String {
        self.api("notifications")
    }

    /// Mark-all-read route.
    #[must_use]
    pub fn notifications_mark_all_read(&self) -> String {
        self.api("notifications/mark-all-read")
    }

    /// Single notification read route.
    #[must_use]
    pub fn notification_read(&self, notification_id: &str) -> String {
        self.api(&format!("notifications/{notification_id}/read"))
    }

    /// Metrics route.
    #[must_use]
    pub fn metrics(&self) -> String {
        self.api("metrics")
    }

    /// User collection route.
    #[must_use]
    pub fn users(&self) -> String {
        self.api("users")
    }

    /// Single user route.
    #[must_use]
    pub fn user_by_id(&self, user_id: &str) -> String {
        self.api(&format!("users/{user_id}"))
    }

    /// User password route.
    #[must_use]
    pub fn user_password(&self, user_id: &str) -> String {
        self.api(&format!("users/password/{user_id}"))
    }
}
