use serde::{Deserialize, Serialize};

/// Represents an authenticated user identifier (Firebase UID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Explicit session state handed to the checkout flow.
///
/// Replaces listener-driven global auth state: whoever drives the checkout
/// decides which session it runs under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Option<UserId>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Monetary amount in cents (rand).
///
/// Integer cents keep threshold comparisons exact: 200.00 and 200.01 never
/// collapse into the same value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Converts a decimal amount, rounding to the nearest cent.
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Formats as `R159.00`.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}R{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("firebase-uid-456");
        assert_eq!(user_id.as_str(), "firebase-uid-456");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("test-user");
        assert_eq!(format!("{}", user_id), "test-user");
    }

    #[test]
    fn should_report_session_authentication() {
        assert!(!SessionContext::anonymous().is_authenticated());
        assert!(SessionContext::authenticated(UserId::new("uid")).is_authenticated());
    }

    #[test]
    fn should_round_decimal_amount_to_nearest_cent() {
        assert_eq!(Money::from_decimal(200.01).cents(), 20001);
        assert_eq!(Money::from_decimal(19.999).cents(), 2000);
    }

    #[test]
    fn should_multiply_by_quantity() {
        assert_eq!(Money::from_major(159).times(3), Money::from_major(477));
    }

    #[test]
    fn should_sum_amounts() {
        let total: Money = vec![Money::from_cents(150), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(400));
    }

    #[test]
    fn should_display_with_currency_and_two_decimals() {
        assert_eq!(Money::from_major(250).to_string(), "R250.00");
        assert_eq!(Money::from_cents(20001).to_string(), "R200.01");
        assert_eq!(Money::from_cents(5).to_string(), "R0.05");
    }
}
