// crates/sales-portal-contract/src/registry.rs
// ============================================================================
// Module: Schema Registry
// Description: Named, precompiled response schemas.
// Purpose: Compile every response schema once and look it up by name.
// Dependencies: jsonschema, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The registry compiles each named response schema (draft 2020-12) the first
//! time it is requested and is read-only afterwards, so parallel test threads
//! can share it without locking. A compile failure means a schema builder is
//! broken and is reported as [`SchemaRegistryError`] rather than a panic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::schemas;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry construction and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaRegistryError {
    /// A schema failed to compile.
    #[error("schema '{name}' failed to compile: {reason}")]
    Compile {
        /// Schema name.
        name: String,
        /// Compiler diagnostic.
        reason: String,
    },
    /// A schema name is not registered.
    #[error("schema '{0}' is not registered")]
    Unknown(String),
}

/// Immediate schema validation failure carrying the first violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("JSON schema validation failed: {message}")]
pub struct SchemaViolation {
    /// Validator message for the first violation.
    pub message: String,
}

// ============================================================================
// SECTION: Schema Names
// ============================================================================

/// Named response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaName {
    /// Login reply.
    Login,
    /// Envelope-only reply.
    Envelope,
    /// Customer creation reply.
    CreateCustomer,
    /// Customer lookup reply.
    GetCustomer,
    /// Customer update reply.
    UpdateCustomer,
    /// All customers reply.
    GetAllCustomers,
    /// Paged customer list reply.
    GetCustomersList,
    /// Product creation reply.
    CreateProduct,
    /// Product lookup reply.
    GetProduct,
    /// Product update reply.
    UpdateProduct,
    /// All products reply.
    GetAllProducts,
    /// Order creation reply.
    CreateOrder,
    /// Order lookup reply.
    GetOrder,
    /// Order update reply.
    UpdateOrder,
    /// All orders reply.
    GetAllOrders,
    /// Paged order list reply.
    GetOrdersList,
    /// User lookup reply.
    GetUser,
    /// All users reply.
    GetAllUsers,
    /// Notifications reply.
    GetNotifications,
}

impl SchemaName {
    /// Every registered name, in registry order.
    const ALL: [Self; 19] = [
        Self::Login,
        Self::Envelope,
        Self::CreateCustomer,
        Self::GetCustomer,
        Self::UpdateCustomer,
        Self::GetAllCustomers,
        Self::GetCustomersList,
        Self::CreateProduct,
        Self::GetProduct,
        Self::UpdateProduct,
        Self::GetAllProducts,
        Self::CreateOrder,
        Self::GetOrder,
        Self::UpdateOrder,
        Self::GetAllOrders,
        Self::GetOrdersList,
        Self::GetUser,
        Self::GetAllUsers,
        Self::GetNotifications,
    ];

    /// Returns every registered name.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Returns the snake-case registry key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Envelope => "envelope",
            Self::CreateCustomer => "create_customer",
            Self::GetCustomer => "get_customer",
            Self::UpdateCustomer => "update_customer",
            Self::GetAllCustomers => "get_all_customers",
            Self::GetCustomersList => "get_customers_list",
            Self::CreateProduct => "create_product",
            Self::GetProduct => "get_product",
            Self::UpdateProduct => "update_product",
            Self::GetAllProducts => "get_all_products",
            Self::CreateOrder => "create_order",
            Self::GetOrder => "get_order",
            Self::UpdateOrder => "update_order",
            Self::GetAllOrders => "get_all_orders",
            Self::GetOrdersList => "get_orders_list",
            Self::GetUser => "get_user",
            Self::GetAllUsers => "get_all_users",
            Self::GetNotifications => "get_notifications",
        }
    }

    /// Builds the raw schema for the name.
    fn schema(self) -> Value {
        match self {
            Self::Login | Self::Envelope => schemas::envelope_schema(),
            Self::CreateCustomer | Self::GetCustomer | Self::UpdateCustomer => {
                schemas::customer_response_schema()
            }
            Self::GetAllCustomers => schemas::customers_response_schema(),
            Self::GetCustomersList => schemas::customers_list_schema(),
            Self::CreateProduct | Self::GetProduct | Self::UpdateProduct => {
                schemas::product_response_schema()
            }
            Self::GetAllProducts => schemas::products_response_schema(),
            Self::CreateOrder | Self::GetOrder | Self::UpdateOrder => {
                schemas::order_response_schema()
            }
            Self::GetAllOrders => schemas::orders_response_schema(),
            Self::GetOrdersList => schemas::orders_list_schema(),
            Self::GetUser => schemas::user_response_schema(),
            Self::GetAllUsers => schemas::users_response_schema(),
            Self::GetNotifications => schemas::notifications_response_schema(),
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaName {
    type Err = SchemaRegistryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| SchemaRegistryError::Unknown(value.to_string()))
    }
}

// ============================================================================
// SECTION: Schema Entries
// ============================================================================

/// Compiles a JSON schema (draft 2020-12).
///
/// # Errors
///
/// Returns [`SchemaRegistryError::Compile`] when the schema is invalid.
pub fn compile_schema(name: &str, schema: &Value) -> Result<Validator, SchemaRegistryError> {
    jsonschema::options().with_draft(Draft::Draft202012).build(schema).map_err(|err| {
        SchemaRegistryError::Compile {
            name: name.to_string(),
            reason: err.to_string(),
        }
    })
}

/// Returns the first violation of `body` against `validator`, if any.
#[must_use]
pub fn first_violation(validator: &Validator, body: &Value) -> Option<SchemaViolation> {
    validator.iter_errors(body).next().map(|err| SchemaViolation {
        message: err.to_string(),
    })
}

/// One named schema together with its compiled validator.
pub struct SchemaEntry {
    /// Registry name; `None` for caller-supplied schemas.
    name: Option<SchemaName>,
    /// Display label used in diagnostics and audit events.
    label: String,
    /// Raw schema document.
    schema: Value,
    /// Compiled validator.
    validator: Validator,
}

impl SchemaEntry {
    /// Compiles the schema for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaRegistryError::Compile`] when the schema is invalid.
    pub fn compile(name: SchemaName) -> Result<Self, SchemaRegistryError> {
        let schema = name.schema();
        let validator = compile_schema(name.as_str(), &schema)?;
        Ok(Self {
            name: Some(name),
            label: name.as_str().to_string(),
            schema,
            validator,
        })
    }

    /// Compiles an arbitrary schema document under `label`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaRegistryError::Compile`] when the schema is invalid.
    pub fn from_value(label: &str, schema: &Value) -> Result<Self, SchemaRegistryError> {
        let validator = compile_schema(label, schema)?;
        Ok(Self {
            name: None,
            label: label.to_string(),
            schema: schema.clone(),
            validator,
        })
    }

    /// Returns the registry name, or `None` for caller-supplied schemas.
    #[must_use]
    pub const fn name(&self) -> Option<SchemaName> {
        self.name
    }

    /// Returns the label: the registry key or the caller-supplied label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the raw schema document.
    #[must_use]
    pub const fn schema(&self) -> &Value {
        &self.schema
    }

    /// Returns true when `body` conforms.
    #[must_use]
    pub fn is_valid(&self, body: &Value) -> bool {
        self.validator.is_valid(body)
    }

    /// Validates `body`, failing on the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaViolation`] describing the first violation found.
    pub fn validate(&self, body: &Value) -> Result<(), SchemaViolation> {
        first_violation(&self.validator, body).map_or(Ok(()), Err)
    }

    /// Returns every violation message for diagnostics.
    #[must_use]
    pub fn violations(&self, body: &Value) -> Vec<String> {
        self.validator.iter_errors(body).map(|err| err.to_string()).collect()
    }
}

impl fmt::Debug for SchemaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaEntry").field("label", &self.label).finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// All named response schemas, compiled.
#[derive(Debug)]
pub struct SchemaRegistry {
    /// Entries keyed by name.
    entries: BTreeMap<SchemaName, SchemaEntry>,
}

impl SchemaRegistry {
    /// Compiles every named schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaRegistryError::Compile`] for the first schema that fails.
    pub fn build() -> Result<Self, SchemaRegistryError> {
        let mut entries = BTreeMap::new();
        for name in SchemaName::all() {
            entries.insert(*name, SchemaEntry::compile(*name)?);
        }
        Ok(Self {
            entries,
        })
    }

    /// Returns the entry for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaRegistryError::Unknown`] when the name is missing.
    pub fn get(&self, name: SchemaName) -> Result<&SchemaEntry, SchemaRegistryError> {
        self.entries.get(&name).ok_or_else(|| SchemaRegistryError::Unknown(name.to_string()))
    }

    /// Returns the entry registered under a snake-case key.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaRegistryError::Unknown`] when the key is not registered.
    pub fn get_by_key(&self, key: &str) -> Result<&SchemaEntry, SchemaRegistryError> {
        self.get(key.parse()?)
    }

    /// Iterates entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.values()
    }
}

/// Returns the process-wide registry, compiling it on first use.
///
/// # Errors
///
/// Returns the compile failure recorded on first use.
pub fn registry() -> Result<&'static SchemaRegistry, SchemaRegistryError> {
    static REGISTRY: OnceLock<Result<SchemaRegistry, SchemaRegistryError>> = OnceLock::new();
    REGISTRY.get_or_init(SchemaRegistry::build).as_ref().map_err(Clone::clone)
}

/// Returns the process-wide entry for `name`.
///
/// # Errors
///
/// Returns [`SchemaRegistryError`] when the registry failed to build.
pub fn schema(name: SchemaName) -> Result<&'static SchemaEntry, SchemaRegistryError> {
    registry()?.get(name)
}
