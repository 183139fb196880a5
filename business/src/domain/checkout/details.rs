use super::errors::{CheckoutError, DeliveryField};

/// Customer part of an order, as typed into the delivery form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryDetails {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
}

impl DeliveryDetails {
    pub fn missing_fields(&self) -> Vec<DeliveryField> {
        let mut missing = Vec::new();
        if self.customer_name.trim().is_empty() {
            missing.push(DeliveryField::Name);
        }
        if self.phone.trim().is_empty() {
            missing.push(DeliveryField::Phone);
        }
        if self.address.trim().is_empty() {
            missing.push(DeliveryField::Address);
        }
        missing
    }

    pub fn validate(&self) -> Result<(), CheckoutError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::MissingFields(missing))
        }
    }

    /// Notes with surrounding whitespace removed; blank notes count as none.
    pub fn trimmed_notes(&self) -> Option<String> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }
}
