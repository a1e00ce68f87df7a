//! Shopify order payload model.
//!
//! Every field is optional at every nesting level; Shopify omits whole
//! sections (no customer, no shipping address) depending on the sales
//! channel. An unparseable body degrades to the empty payload rather than an
//! error, which downstream resolves to the no-phone skip outcome.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderPayload {
    pub customer: Option<Party>,
    pub shipping_address: Option<Party>,
    pub billing_address: Option<Party>,
    /// Display order number, e.g. `"#1001"`.
    pub name: Option<String>,
    /// Numeric fallback when `name` is absent.
    pub order_number: Option<u64>,
    pub total_price: Option<String>,
    pub order_status_url: Option<String>,
}

/// Contact section shared by customer, shipping and billing addresses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Party {
    pub first_name: Option<String>,
    pub phone: Option<String>,
}

impl OrderPayload {
    /// Best-effort parse of the raw webhook body.
    pub fn from_bytes(raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_default()
    }

    /// Candidate destination phone: shipping address, then customer, then
    /// billing address.
    pub fn phone(&self) -> Option<&str> {
        first_non_empty([
            self.shipping_address.as_ref().and_then(|p| p.phone.as_deref()),
            self.customer.as_ref().and_then(|p| p.phone.as_deref()),
            self.billing_address.as_ref().and_then(|p| p.phone.as_deref()),
        ])
    }

    /// Customer first name, falling back to the shipping address.
    pub fn first_name(&self) -> Option<&str> {
        first_non_empty([
            self.customer.as_ref().and_then(|p| p.first_name.as_deref()),
            self.shipping_address
                .as_ref()
                .and_then(|p| p.first_name.as_deref()),
        ])
    }

    /// Display order id: the `name` field, else `#` + `order_number`
    /// (just `#` when both are absent).
    pub fn order_id(&self) -> String {
        match first_non_empty([self.name.as_deref()]) {
            Some(name) => name.to_string(),
            None => format!(
                "#{}",
                self.order_number.map(|n| n.to_string()).unwrap_or_default()
            ),
        }
    }
}

/// First candidate that is present and non-empty.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_optional_fields() {
        let raw = br##"{
            "customer": {"first_name": "Rahim", "phone": "01712345678"},
            "name": "#1001",
            "total_price": "500.00",
            "order_status_url": "https://x/y"
        }"##;
        let order = OrderPayload::from_bytes(raw);
        assert_eq!(order.phone(), Some("01712345678"));
        assert_eq!(order.first_name(), Some("Rahim"));
        assert_eq!(order.order_id(), "#1001");
        assert_eq!(order.total_price.as_deref(), Some("500.00"));
    }

    #[test]
    fn garbage_body_degrades_to_empty_payload() {
        let order = OrderPayload::from_bytes(b"not json at all");
        assert_eq!(order.phone(), None);
        assert_eq!(order.order_id(), "#");
    }

    #[test]
    fn shipping_phone_wins_over_customer_and_billing() {
        let raw = br#"{
            "customer": {"phone": "01000000001"},
            "shipping_address": {"phone": "01000000002"},
            "billing_address": {"phone": "01000000003"}
        }"#;
        let order = OrderPayload::from_bytes(raw);
        assert_eq!(order.phone(), Some("01000000002"));
    }

    #[test]
    fn empty_phone_falls_through_to_next_source() {
        let raw = br#"{
            "shipping_address": {"phone": ""},
            "billing_address": {"phone": "01712345678"}
        }"#;
        let order = OrderPayload::from_bytes(raw);
        assert_eq!(order.phone(), Some("01712345678"));
    }

    #[test]
    fn order_number_fallback_builds_hash_id() {
        let order = OrderPayload::from_bytes(br#"{"order_number": 1001}"#);
        assert_eq!(order.order_id(), "#1001");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = br##"{"id": 42, "line_items": [], "name": "#7"}"##;
        let order = OrderPayload::from_bytes(raw);
        assert_eq!(order.order_id(), "#7");
    }

    #[test]
    fn first_non_empty_skips_blanks() {
        assert_eq!(first_non_empty([None, Some(""), Some("x")]), Some("x"));
        assert_eq!(first_non_empty::<[Option<&str>; 2]>([None, Some("")]), None);
    }
}
