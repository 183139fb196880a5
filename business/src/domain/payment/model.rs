use chrono::{DateTime, Utc};

/// Card data that passed form validation. Never logged in full.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub cardholder_name: String,
}

impl CardDetails {
    /// Last four digits behind a mask, e.g. `**** 1111`.
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(4);
        let last_four: String = digits[start..].iter().collect();
        format!("**** {}", last_four)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub reference: String,
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mask_all_but_last_four_digits() {
        let card = CardDetails {
            number: "4111 1111 1111 1234".to_string(),
            expiry: "12/25".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "Thabo Mokoena".to_string(),
        };

        assert_eq!(card.masked_number(), "**** 1234");
    }
}
