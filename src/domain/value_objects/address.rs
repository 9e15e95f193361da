//! Customer address value object.

use serde::{Deserialize, Serialize};

/// Postal address of a customer.
///
/// Immutable once built. Changing a customer's address means replacing the
/// whole value. Field rules are enforced by the customer's validation pass,
/// not here, so every violation is reported together with the customer's own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: i32,
    city: String,
    zip: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i32,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number,
            city: city.into(),
            zip: zip.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let address = Address::new("Main St", 123, "New York", "10001");
        assert_eq!(address.to_string(), "Main St, 123, 10001 New York");
    }

    #[test]
    fn test_address_equality_by_value() {
        let a = Address::new("Main St", 123, "New York", "10001");
        let b = Address::new("Main St", 123, "New York", "10001");
        let c = Address::new("Main St", 124, "New York", "10001");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_address_serializes_all_fields() {
        let address = Address::new("Main St", 123, "New York", "10001");
        let json = serde_json::to_value(&address).unwrap();

        assert_eq!(json["street"], "Main St");
        assert_eq!(json["number"], 123);
        assert_eq!(json["city"], "New York");
        assert_eq!(json["zip"], "10001");
    }
}
