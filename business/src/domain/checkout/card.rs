use crate::domain::payment::model::CardDetails;

use super::errors::{CardField, CheckoutError};

const CARD_GROUP: usize = 4;
const CARD_MAX_DIGITS: usize = 16;
// The input mask keeps at most CARD_MAX_DIGITS, so 17 to 19 digit numbers
// never reach validation.
const CARD_VALID_DIGITS: std::ops::RangeInclusive<usize> = 13..=19;
const EXPIRY_LEN: usize = 5;
const CVV_LEN: usize = 3;

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Masks card number input as `#### #### #### ####`.
///
/// Fewer than four digits are returned unchanged; longer input keeps only the
/// first sixteen digits.
pub fn format_card_number(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() < CARD_GROUP {
        return digits;
    }

    let kept: Vec<char> = digits.chars().take(CARD_MAX_DIGITS).collect();
    kept.chunks(CARD_GROUP)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Masks expiry input as `MM/YY`. The slash appears as soon as two digits are typed.
pub fn format_expiry(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() < 2 {
        return digits;
    }

    let year: String = digits.chars().skip(2).take(2).collect();
    format!("{}/{}", &digits[..2], year)
}

pub fn format_cvv(value: &str) -> String {
    digits_only(value).chars().take(CVV_LEN).collect()
}

/// Card entry sub-form. Every setter applies the input mask, so the stored
/// values are always in display format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardForm {
    card_number: String,
    expiry: String,
    cvv: String,
    cardholder_name: String,
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_card_number(&mut self, value: &str) {
        self.card_number = format_card_number(value);
    }

    pub fn set_expiry(&mut self, value: &str) {
        self.expiry = format_expiry(value);
    }

    pub fn set_cvv(&mut self, value: &str) {
        self.cvv = format_cvv(value);
    }

    pub fn set_cardholder_name(&mut self, value: &str) {
        self.cardholder_name = value.to_string();
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    pub fn cardholder_name(&self) -> &str {
        &self.cardholder_name
    }

    pub fn invalid_fields(&self) -> Vec<CardField> {
        let mut invalid = Vec::new();
        if !CARD_VALID_DIGITS.contains(&digits_only(&self.card_number).len()) {
            invalid.push(CardField::Number);
        }
        if self.expiry.len() != EXPIRY_LEN {
            invalid.push(CardField::Expiry);
        }
        if self.cvv.len() != CVV_LEN {
            invalid.push(CardField::Cvv);
        }
        if self.cardholder_name.trim().is_empty() {
            invalid.push(CardField::CardholderName);
        }
        invalid
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    pub fn validate(&self) -> Result<CardDetails, CheckoutError> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(CheckoutError::InvalidCard(invalid));
        }

        Ok(CardDetails {
            number: self.card_number.clone(),
            expiry: self.expiry.clone(),
            cvv: self.cvv.clone(),
            cardholder_name: self.cardholder_name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_group_sixteen_digits_in_fours() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
    }

    #[test]
    fn should_strip_separators_before_grouping() {
        assert_eq!(format_card_number("4111-1111 1111-1111"), "4111 1111 1111 1111");
    }

    #[test]
    fn should_leave_short_card_input_ungrouped() {
        // Short input is returned as its digits, not as the raw text.
        assert_eq!(format_card_number("41a1"), "411");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn should_group_partial_card_input() {
        assert_eq!(format_card_number("411111"), "4111 11");
    }

    #[test]
    fn should_truncate_card_number_to_sixteen_digits() {
        assert_eq!(
            format_card_number("41111111111111119999"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn should_insert_slash_in_expiry() {
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("12/25"), "12/25");
    }

    #[test]
    fn should_add_slash_once_two_digits_typed() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("122"), "12/2");
    }

    #[test]
    fn should_truncate_expiry_to_five_characters() {
        assert_eq!(format_expiry("122599"), "12/25");
    }

    #[test]
    fn should_keep_three_cvv_digits() {
        assert_eq!(format_cvv("12a34"), "123");
    }

    fn filled_form() -> CardForm {
        let mut form = CardForm::new();
        form.set_card_number("4111111111111111");
        form.set_expiry("1225");
        form.set_cvv("123");
        form.set_cardholder_name("Thabo Mokoena");
        form
    }

    #[test]
    fn should_be_valid_when_all_fields_complete() {
        let form = filled_form();

        assert!(form.is_valid());
        let card = form.validate().unwrap();
        assert_eq!(card.number, "4111 1111 1111 1111");
        assert_eq!(card.expiry, "12/25");
    }

    #[test]
    fn should_accept_thirteen_digit_card() {
        let mut form = filled_form();
        form.set_card_number("4222222222222");

        assert!(form.is_valid());
    }

    #[test]
    fn should_validate_nineteen_digit_input_as_its_first_sixteen() {
        let mut form = filled_form();
        form.set_card_number("4222222222222222222");

        assert_eq!(form.card_number(), "4222 2222 2222 2222");
        assert!(form.is_valid());
    }

    #[test]
    fn should_reject_twelve_digit_card() {
        let mut form = filled_form();
        form.set_card_number("422222222222");

        assert_eq!(form.invalid_fields(), vec![CardField::Number]);
    }

    #[test]
    fn should_reject_incomplete_expiry_and_blank_holder() {
        let mut form = filled_form();
        form.set_expiry("12");
        form.set_cardholder_name("   ");

        assert_eq!(
            form.invalid_fields(),
            vec![CardField::Expiry, CardField::CardholderName]
        );
        assert!(matches!(
            form.validate().unwrap_err(),
            CheckoutError::InvalidCard(_)
        ));
    }

    #[test]
    fn should_reject_short_cvv() {
        let mut form = filled_form();
        form.set_cvv("12");

        assert_eq!(form.invalid_fields(), vec![CardField::Cvv]);
    }
}
