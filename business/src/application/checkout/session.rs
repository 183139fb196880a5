use std::sync::Arc;

use crate::domain::cart::model::{Cart, CartTotals};
use crate::domain::checkout::card::CardForm;
use crate::domain::checkout::details::DeliveryDetails;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::flow::{CheckoutFlow, CheckoutPolicy, CheckoutStep};
use crate::domain::checkout::use_cases::place_order::CheckoutOutcome;
use crate::domain::logger::Logger;
use crate::domain::menu::model::MenuItem;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::submit::SubmitOrderUseCase;
use crate::domain::order::value_objects::PaymentMethod;
use crate::domain::payment::model::PaymentReceipt;
use crate::domain::payment::services::CardPaymentProcessor;
use crate::domain::shared::value_objects::{Money, SessionContext};

/// A card charge already accepted by the processor for this cart total.
struct CardCharge {
    receipt: PaymentReceipt,
    amount: Money,
}

/// One customer's cart plus the checkout flow driving it.
///
/// Owned by a single caller; every operation runs to completion before the
/// next one starts. After a successful submission the cart is emptied and the
/// flow is back at `Reviewing`.
pub struct CheckoutSession {
    session: SessionContext,
    cart: Cart,
    flow: CheckoutFlow,
    card_charge: Option<CardCharge>,
    submitter: Arc<dyn SubmitOrderUseCase>,
    payment_processor: Arc<dyn CardPaymentProcessor>,
    logger: Arc<dyn Logger>,
}

impl CheckoutSession {
    pub fn new(
        session: SessionContext,
        policy: CheckoutPolicy,
        submitter: Arc<dyn SubmitOrderUseCase>,
        payment_processor: Arc<dyn CardPaymentProcessor>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            session,
            cart: Cart::new(),
            flow: CheckoutFlow::new(policy),
            card_charge: None,
            submitter,
            payment_processor,
            logger,
        }
    }

    /// Starts from an already filled cart.
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    pub fn step(&self) -> CheckoutStep {
        self.flow.step()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.compute_totals()
    }

    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) -> Result<(), CheckoutError> {
        self.cart.add_item(item, quantity)?;
        Ok(())
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        self.cart.update_quantity(id, quantity);
    }

    pub fn remove_item(&mut self, id: &str) {
        self.cart.remove_item(id);
    }

    pub fn details(&self) -> &DeliveryDetails {
        self.flow.details()
    }

    pub fn details_mut(&mut self) -> &mut DeliveryDetails {
        self.flow.details_mut()
    }

    /// Overwrites the address, e.g. with a geolocation prefill.
    pub fn prefill_address(&mut self, address: String) {
        self.flow.details_mut().address = address;
    }

    pub fn card_mut(&mut self) -> &mut CardForm {
        self.flow.card_mut()
    }

    pub fn begin(&mut self) -> Result<(), CheckoutError> {
        self.flow.begin(&self.cart, &self.session)
    }

    pub fn confirm_details(&mut self) -> Result<(), CheckoutError> {
        if let Err(e) = self.flow.confirm_details(&self.cart) {
            self.logger
                .debug(&format!("Delivery details rejected: {}", e));
            return Err(e);
        }
        Ok(())
    }

    /// Cash submits right away and returns the outcome; card opens the card
    /// form and returns `None`.
    pub async fn choose_payment(
        &mut self,
        method: PaymentMethod,
    ) -> Result<Option<CheckoutOutcome>, CheckoutError> {
        self.flow.choose_payment(method)?;
        match method {
            PaymentMethod::Cash => {
                if let Some(charge) = &self.card_charge {
                    self.logger.warn(&format!(
                        "Submitting cash order although card payment {} was accepted",
                        charge.receipt.reference
                    ));
                }
                self.submit(method).await.map(Some)
            }
            PaymentMethod::Card => Ok(None),
        }
    }

    pub fn cancel_card(&mut self) -> Result<(), CheckoutError> {
        self.flow.cancel_card()
    }

    /// Charges the card, then submits. A declined card keeps the session on
    /// the card form. When an earlier charge for the same total was accepted
    /// but its submission failed, that charge is reused instead of charging
    /// again.
    pub async fn pay_by_card(&mut self) -> Result<CheckoutOutcome, CheckoutError> {
        let card = self.flow.card_for_payment()?;
        let amount = self.totals().total;

        let receipt = match self.card_charge.take() {
            Some(charge) if charge.amount == amount => {
                self.logger.info(&format!(
                    "Reusing card payment {} for {}",
                    charge.receipt.reference, amount
                ));
                charge.receipt
            }
            previous => {
                if let Some(charge) = previous {
                    self.logger.warn(&format!(
                        "Dropping card payment {} for {}; cart total is now {}",
                        charge.receipt.reference, charge.amount, amount
                    ));
                }
                self.logger.info(&format!(
                    "Processing card {} for {}",
                    card.masked_number(),
                    amount
                ));
                let receipt = self.payment_processor.process(&card, amount).await?;
                self.logger
                    .info(&format!("Card payment accepted: {}", receipt.reference));
                receipt
            }
        };
        self.card_charge = Some(CardCharge { receipt, amount });

        self.flow.mark_paid()?;
        self.submit(PaymentMethod::Card).await
    }

    async fn submit(&mut self, method: PaymentMethod) -> Result<CheckoutOutcome, CheckoutError> {
        let totals = self.totals();
        let order = match Order::place(self.flow.details(), &self.cart, method) {
            Ok(order) => order,
            Err(e) => {
                self.flow.submission_failed()?;
                return Err(e.into());
            }
        };

        let report = match self.submitter.execute(order).await {
            Ok(report) => report,
            Err(e) => {
                self.logger
                    .error(&format!("Checkout could not submit order: {}", e));
                self.flow.submission_failed()?;
                return Err(e.into());
            }
        };

        self.flow.complete()?;
        self.cart.clear();
        self.flow.reset();
        self.card_charge = None;

        Ok(CheckoutOutcome {
            order_id: report.order_id,
            totals,
            payment_method: method,
            warnings: report.warnings,
        })
    }
}
