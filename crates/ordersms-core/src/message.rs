//! Confirmation message rendering.
//!
//! The wording is deploy-time configuration; the interpolated fields and
//! their resolution order are fixed contract.

use crate::order::OrderPayload;

/// Default Bengali confirmation text. Placeholders: `{name}`, `{order}`,
/// `{total}`, `{url}`.
pub const DEFAULT_TEMPLATE: &str =
    "ধন্যবাদ {name}! আপনার অর্ডার {order} নিশ্চিত হয়েছে। মোট: ৳{total}. ট্র্যাক: {url}";

/// Fallback used when no first name is present anywhere in the payload.
pub const FALLBACK_NAME: &str = "Customer";

/// Resolved interpolation values for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFields {
    pub name: String,
    pub order_id: String,
    pub total: String,
    pub status_url: String,
}

impl MessageFields {
    pub fn from_order(order: &OrderPayload) -> Self {
        Self {
            name: order.first_name().unwrap_or(FALLBACK_NAME).to_string(),
            order_id: order.order_id(),
            total: order.total_price.clone().unwrap_or_default(),
            status_url: order.order_status_url.clone().unwrap_or_default(),
        }
    }
}

/// Interpolate `fields` into `template`. Pure formatting, no validation.
pub fn render(template: &str, fields: &MessageFields) -> String {
    template
        .replace("{name}", &fields.name)
        .replace("{order}", &fields.order_id)
        .replace("{total}", &fields.total)
        .replace("{url}", &fields.status_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderPayload;

    #[test]
    fn renders_all_fields_in_default_template() {
        let fields = MessageFields {
            name: "Rahim".into(),
            order_id: "#1001".into(),
            total: "500.00".into(),
            status_url: "https://x/y".into(),
        };
        let text = render(DEFAULT_TEMPLATE, &fields);
        assert!(text.contains("Rahim"));
        assert!(text.contains("#1001"));
        assert!(text.contains("500.00"));
        assert!(text.contains("https://x/y"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn missing_name_falls_back_to_customer_literal() {
        let order = OrderPayload::from_bytes(br##"{"name": "#9"}"##);
        let fields = MessageFields::from_order(&order);
        assert_eq!(fields.name, "Customer");
        assert_eq!(fields.order_id, "#9");
        assert_eq!(fields.total, "");
        assert_eq!(fields.status_url, "");
    }

    #[test]
    fn shipping_first_name_is_second_choice() {
        let order = OrderPayload::from_bytes(
            br#"{"shipping_address": {"first_name": "Karim"}}"#,
        );
        let fields = MessageFields::from_order(&order);
        assert_eq!(fields.name, "Karim");
    }

    #[test]
    fn custom_template_keeps_field_set() {
        let fields = MessageFields {
            name: "A".into(),
            order_id: "#2".into(),
            total: "9.99".into(),
            status_url: "u".into(),
        };
        let text = render("Hi {name}, order {order} ({total}) -> {url}", &fields);
        assert_eq!(text, "Hi A, order #2 (9.99) -> u");
    }
}
