use crate::domain::cart::errors::CartError;
use crate::domain::order::errors::OrderError;
use crate::domain::payment::errors::PaymentError;

use super::flow::CheckoutStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryField {
    Name,
    Phone,
    Address,
}

impl std::fmt::Display for DeliveryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryField::Name => write!(f, "name"),
            DeliveryField::Phone => write!(f, "phone"),
            DeliveryField::Address => write!(f, "address"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Number,
    Expiry,
    Cvv,
    CardholderName,
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardField::Number => write!(f, "card_number"),
            CardField::Expiry => write!(f, "expiry"),
            CardField::Cvv => write!(f, "cvv"),
            CardField::CardholderName => write!(f, "cardholder_name"),
        }
    }
}

fn join<T: std::fmt::Display>(fields: &[T]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.missing_fields: {}", join(.0))]
    MissingFields(Vec<DeliveryField>),
    #[error("checkout.invalid_card: {}", join(.0))]
    InvalidCard(Vec<CardField>),
    #[error("checkout.invalid_transition: {action} from {from}")]
    InvalidTransition {
        from: CheckoutStep,
        action: &'static str,
    },
    #[error("checkout.unauthenticated")]
    Unauthenticated,
    #[error("checkout.cart_rejected")]
    Cart(#[from] CartError),
    #[error("checkout.payment_failed")]
    Payment(#[from] PaymentError),
    #[error("checkout.submission_failed")]
    Submission(#[from] OrderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_missing_fields_in_message() {
        let err = CheckoutError::MissingFields(vec![DeliveryField::Phone, DeliveryField::Address]);

        assert_eq!(err.to_string(), "checkout.missing_fields: phone, address");
    }

    #[test]
    fn should_describe_invalid_transition() {
        let err = CheckoutError::InvalidTransition {
            from: CheckoutStep::Reviewing,
            action: "choose_payment",
        };

        assert_eq!(
            err.to_string(),
            "checkout.invalid_transition: choose_payment from reviewing"
        );
    }
}
