use crate::domain::cart::model::Cart;
use crate::domain::order::value_objects::PaymentMethod;
use crate::domain::payment::model::CardDetails;
use crate::domain::shared::value_objects::SessionContext;

use super::card::CardForm;
use super::details::DeliveryDetails;
use super::errors::CheckoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Reviewing,
    EnteringDetails,
    ChoosingPayment,
    PayingByCard,
    Submitting,
    Completed,
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutStep::Reviewing => write!(f, "reviewing"),
            CheckoutStep::EnteringDetails => write!(f, "entering_details"),
            CheckoutStep::ChoosingPayment => write!(f, "choosing_payment"),
            CheckoutStep::PayingByCard => write!(f, "paying_by_card"),
            CheckoutStep::Submitting => write!(f, "submitting"),
            CheckoutStep::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutPolicy {
    pub require_authentication: bool,
}

/// Checkout state machine.
///
/// ```text
/// Reviewing -> EnteringDetails -> ChoosingPayment -(cash)-> Submitting -> Completed
///                                       |   ^
///                                 (card)v   | cancel
///                                  PayingByCard -(paid)-> Submitting
/// ```
///
/// A rejected transition leaves the step untouched. The cart is not owned
/// here; guards that need it borrow it.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    policy: CheckoutPolicy,
    details: DeliveryDetails,
    card: CardForm,
    payment_method: Option<PaymentMethod>,
}

impl CheckoutFlow {
    pub fn new(policy: CheckoutPolicy) -> Self {
        Self {
            step: CheckoutStep::Reviewing,
            policy,
            details: DeliveryDetails::default(),
            card: CardForm::new(),
            payment_method: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn details(&self) -> &DeliveryDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut DeliveryDetails {
        &mut self.details
    }

    pub fn card(&self) -> &CardForm {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut CardForm {
        &mut self.card
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    fn expect_step(&self, expected: CheckoutStep, action: &'static str) -> Result<(), CheckoutError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CheckoutError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }

    /// Reviewing -> EnteringDetails.
    pub fn begin(&mut self, cart: &Cart, session: &SessionContext) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Reviewing, "begin")?;
        if self.policy.require_authentication && !session.is_authenticated() {
            return Err(CheckoutError::Unauthenticated);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.step = CheckoutStep::EnteringDetails;
        Ok(())
    }

    /// EnteringDetails -> ChoosingPayment, once name, phone and address are filled in.
    pub fn confirm_details(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::EnteringDetails, "confirm_details")?;
        self.details.validate()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.step = CheckoutStep::ChoosingPayment;
        Ok(())
    }

    /// ChoosingPayment -> Submitting (cash) or PayingByCard (card).
    pub fn choose_payment(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::ChoosingPayment, "choose_payment")?;

        self.payment_method = Some(method);
        self.step = match method {
            PaymentMethod::Cash => CheckoutStep::Submitting,
            PaymentMethod::Card => CheckoutStep::PayingByCard,
        };
        Ok(())
    }

    /// PayingByCard -> ChoosingPayment. Typed card data is kept.
    pub fn cancel_card(&mut self) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::PayingByCard, "cancel_card")?;

        self.payment_method = None;
        self.step = CheckoutStep::ChoosingPayment;
        Ok(())
    }

    /// Validated card data for the processor. The step does not change.
    pub fn card_for_payment(&self) -> Result<CardDetails, CheckoutError> {
        self.expect_step(CheckoutStep::PayingByCard, "pay_by_card")?;
        self.card.validate()
    }

    /// PayingByCard -> Submitting, after the processor accepted the card.
    pub fn mark_paid(&mut self) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::PayingByCard, "mark_paid")?;
        self.card.validate()?;

        self.step = CheckoutStep::Submitting;
        Ok(())
    }

    /// Submitting -> ChoosingPayment when the order could not be handed over.
    pub fn submission_failed(&mut self) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Submitting, "submission_failed")?;

        self.payment_method = None;
        self.step = CheckoutStep::ChoosingPayment;
        Ok(())
    }

    /// Submitting -> Completed.
    pub fn complete(&mut self) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Submitting, "complete")?;

        self.step = CheckoutStep::Completed;
        Ok(())
    }

    /// Back to the initial step with an empty form.
    pub fn reset(&mut self) {
        *self = Self::new(self.policy);
    }
}
