use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Incoming Order Fields
// ============================================================================
//
// The flat field set submitted by the browser form. Values are kept as raw
// JSON so that whatever the caller sends (string or number) is relayed to the
// upstream platform untouched, and a missing field stays absent rather than
// being replaced by a default.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub province: Option<Value>,
    #[serde(default)]
    pub variant_id: Option<Value>,
    #[serde(default)]
    pub product_title: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub delivery_method: Option<Value>,
    #[serde(default)]
    pub shipment_price: Option<Value>,
}
