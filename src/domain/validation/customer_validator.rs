//! Customer rule set.

use crate::domain::entities::Customer;

use super::notification::{ErrorCollector, ErrorRecord};
use super::strategy::{EntityKind, Validatable, ValidationStrategy};

/// Field rules for [`Customer`].
///
/// A missing address is accepted here; it only matters on activation. Once an
/// address is present its street, city and zip must be non-empty. The house
/// number is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerValidationStrategy;

impl ValidationStrategy<Customer> for CustomerValidationStrategy {
    fn validate(&self, customer: &Customer, collector: &mut ErrorCollector) {
        let context = EntityKind::Customer.context();

        if customer.id().is_empty() {
            collector.add_error(&ErrorRecord::new("Id is required", context));
        }
        if customer.name().is_empty() {
            collector.add_error(&ErrorRecord::new("Name is required", context));
        }

        if let Some(address) = customer.address() {
            if address.street().is_empty() {
                collector.add_error(&ErrorRecord::new("Street is required", context));
            }
            if address.city().is_empty() {
                collector.add_error(&ErrorRecord::new("City is required", context));
            }
            if address.zip().is_empty() {
                collector.add_error(&ErrorRecord::new("Zip is required", context));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Address;
    use pretty_assertions::assert_eq;

    fn messages_for(customer: &Customer) -> Vec<String> {
        let mut collector = ErrorCollector::new();
        CustomerValidationStrategy.validate(customer, &mut collector);
        collector.errors().iter().map(|e| e.message.clone()).collect()
    }

    fn valid_customer() -> Customer {
        Customer::with_address("c1", "John", Address::new("Main St", 1, "Springfield", "12345"))
            .unwrap()
    }

    #[test]
    fn test_valid_customer_has_no_errors() {
        assert!(messages_for(&valid_customer()).is_empty());
    }

    #[test]
    fn test_missing_address_is_not_flagged() {
        let customer = Customer::new("c1", "John").unwrap();
        assert!(messages_for(&customer).is_empty());
    }

    #[test]
    fn test_all_address_fields_reported() {
        let mut customer = valid_customer();
        let _ = customer.change_address(Address::new("", 0, "", ""));

        assert_eq!(
            messages_for(&customer),
            vec!["Street is required", "City is required", "Zip is required"]
        );
    }

    #[test]
    fn test_empty_name_and_street_both_reported() {
        let mut customer = valid_customer();
        let _ = customer.change_address(Address::new("", 10, "Springfield", "12345"));
        let _ = customer.change_name("");

        assert_eq!(messages_for(&customer), vec!["Name is required", "Street is required"]);
    }

    #[test]
    fn test_non_positive_house_number_is_accepted() {
        let mut customer = valid_customer();
        assert!(customer
            .change_address(Address::new("Main St", -5, "Springfield", "12345"))
            .is_ok());
        assert!(messages_for(&customer).is_empty());
    }

    #[test]
    fn test_errors_use_customer_context() {
        let mut customer = valid_customer();
        let _ = customer.change_name("");

        let mut collector = ErrorCollector::new();
        CustomerValidationStrategy.validate(&customer, &mut collector);
        assert_eq!(collector.messages(Some("Customer")), "Customer: Name is required");
    }
}
