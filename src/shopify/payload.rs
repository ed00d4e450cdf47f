use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::OrderForm;

// ============================================================================
// Upstream Order Payload
// ============================================================================
//
// The nested structure the Admin API's order-creation endpoint expects.
// Built as a pure function of the incoming flat fields: no defaults, no
// timestamps, no generated ids. A field the caller never sent is omitted from
// the wire payload entirely and left for the upstream platform to reject.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderPayload {
    pub customer: Customer,
    pub shipping_address: ShippingAddress,
    pub line_items: Vec<LineItem>,
    pub shipping_lines: Vec<ShippingLine>,
}

/// Wire wrapper: the Admin API takes the order under an `order` key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderEnvelope {
    pub order: OrderPayload,
}

impl From<OrderForm> for OrderEnvelope {
    fn from(form: OrderForm) -> Self {
        Self {
            order: OrderPayload {
                customer: Customer {
                    first_name: form.name,
                    phone: form.phone,
                },
                shipping_address: ShippingAddress {
                    address1: form.address,
                    // The upstream city field is fed from the form's
                    // province value.
                    city: form.province,
                },
                line_items: vec![LineItem {
                    variant_id: form.variant_id,
                    title: form.product_title,
                    quantity: form.quantity,
                    price: form.price,
                }],
                shipping_lines: vec![ShippingLine {
                    title: form.delivery_method,
                    price: form.shipment_price,
                }],
            },
        }
    }
}
