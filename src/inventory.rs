//! Inventory record value types.
//!
//! An inventory record describes one resource class's total, reserved,
//! step-size, ratio, and bounds. The report client and the remote service
//! each populate overlapping but non-identical sets of fields, so change
//! detection only ever compares fields present on both sides (see
//! [`crate::node::ProviderNode::inventory_changed`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single scalar field of an inventory record.
///
/// Inventory fields mix integers (`total`, `reserved`) with floats
/// (`allocation_ratio`) and the occasional string or boolean, so records hold
/// a small scalar enum rather than a single numeric type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InventoryValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<i64> for InventoryValue {
    fn from(v: i64) -> Self {
        InventoryValue::Integer(v)
    }
}

impl From<f64> for InventoryValue {
    fn from(v: f64) -> Self {
        InventoryValue::Float(v)
    }
}

impl From<bool> for InventoryValue {
    fn from(v: bool) -> Self {
        InventoryValue::Bool(v)
    }
}

impl From<String> for InventoryValue {
    fn from(v: String) -> Self {
        InventoryValue::Text(v)
    }
}

impl From<&str> for InventoryValue {
    fn from(v: &str) -> Self {
        InventoryValue::Text(v.to_owned())
    }
}

/// A resource class's field-name-to-scalar mapping (e.g. `VCPU` ->
/// `{total: 8, allocation_ratio: 16.0}`).
pub type InventoryRecord = HashMap<String, InventoryValue>;

/// The full per-provider inventory: resource-class name to record.
pub type Inventory = HashMap<String, InventoryRecord>;
