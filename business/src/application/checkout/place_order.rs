use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::price::build_cart;
use crate::application::checkout::session::CheckoutSession;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::flow::CheckoutPolicy;
use crate::domain::checkout::use_cases::place_order::{
    CheckoutOutcome, PaymentInput, PlaceOrderParams, PlaceOrderUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::order::use_cases::submit::SubmitOrderUseCase;
use crate::domain::order::value_objects::PaymentMethod;
use crate::domain::payment::services::CardPaymentProcessor;

/// Runs a whole checkout in one call: the cart is rebuilt from menu prices and
/// a fresh session is walked through every step.
pub struct PlaceOrderUseCaseImpl {
    pub menu_repository: Arc<dyn MenuRepository>,
    pub submitter: Arc<dyn SubmitOrderUseCase>,
    pub payment_processor: Arc<dyn CardPaymentProcessor>,
    pub policy: CheckoutPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<CheckoutOutcome, CheckoutError> {
        let cart = build_cart(self.menu_repository.as_ref(), &params.lines).await?;

        let mut session = CheckoutSession::new(
            params.session,
            self.policy,
            self.submitter.clone(),
            self.payment_processor.clone(),
            self.logger.clone(),
        )
        .with_cart(cart);

        session.begin()?;
        *session.details_mut() = params.details;
        session.confirm_details()?;

        let outcome = match params.payment {
            PaymentInput::Cash => session
                .choose_payment(PaymentMethod::Cash)
                .await?
                .ok_or(CheckoutError::InvalidTransition {
                    from: session.step(),
                    action: "choose_payment",
                })?,
            PaymentInput::Card(input) => {
                session.choose_payment(PaymentMethod::Card).await?;
                let card = session.card_mut();
                card.set_card_number(&input.card_number);
                card.set_expiry(&input.expiry);
                card.set_cvv(&input.cvv);
                card.set_cardholder_name(&input.cardholder_name);
                session.pay_by_card().await?
            }
        };

        self.logger.info(&format!(
            "Checkout completed: order {} ({}, total {})",
            outcome.order_id, outcome.payment_method, outcome.totals.total
        ));
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::errors::CartError;
    use crate::domain::cart::use_cases::price::RequestedLine;
    use crate::domain::checkout::details::DeliveryDetails;
    use crate::domain::checkout::use_cases::place_order::CardInput;
    use crate::domain::errors::RepositoryError;
    use crate::domain::menu::catalog::braai_menu;
    use crate::domain::menu::model::MenuItem;
    use crate::domain::order::errors::OrderError;
    use crate::domain::order::model::Order;
    use crate::domain::order::use_cases::submit::SubmissionReport;
    use crate::domain::payment::errors::PaymentError;
    use crate::domain::payment::model::{CardDetails, PaymentReceipt};
    use crate::domain::shared::value_objects::{Money, SessionContext, UserId};
    use mockall::mock;

    mock! {
        pub MenuRepo {}

        #[async_trait]
        impl MenuRepository for MenuRepo {
            async fn get_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;
            async fn get_by_id(&self, id: &str) -> Result<MenuItem, RepositoryError>;
        }
    }

    mock! {
        pub Submitter {}

        #[async_trait]
        impl SubmitOrderUseCase for Submitter {
            async fn execute(&self, order: Order) -> Result<SubmissionReport, OrderError>;
        }
    }

    mock! {
        pub Processor {}

        #[async_trait]
        impl CardPaymentProcessor for Processor {
            async fn process(&self, card: &CardDetails, amount: Money) -> Result<PaymentReceipt, PaymentError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn catalog_repo() -> MockMenuRepo {
        let mut repo = MockMenuRepo::new();
        repo.expect_get_by_id().returning(|id| {
            braai_menu()
                .into_iter()
                .find(|item| item.id == id)
                .ok_or(RepositoryError::NotFound)
        });
        repo
    }

    fn accepting_submitter() -> MockSubmitter {
        let mut submitter = MockSubmitter::new();
        submitter.expect_execute().returning(|order| {
            Ok(SubmissionReport {
                order_id: order.id,
                persisted: true,
                notified: true,
                warnings: vec![],
            })
        });
        submitter
    }

    fn use_case(
        repo: MockMenuRepo,
        submitter: MockSubmitter,
        processor: MockProcessor,
        policy: CheckoutPolicy,
    ) -> PlaceOrderUseCaseImpl {
        PlaceOrderUseCaseImpl {
            menu_repository: Arc::new(repo),
            submitter: Arc::new(submitter),
            payment_processor: Arc::new(processor),
            policy,
            logger: mock_logger(),
        }
    }

    fn details() -> DeliveryDetails {
        DeliveryDetails {
            customer_name: "Zanele Dube".to_string(),
            phone: "0823456789".to_string(),
            address: "14 Long St, Cape Town".to_string(),
            notes: Some("Gate code 1234".to_string()),
        }
    }

    fn params(lines: Vec<RequestedLine>, payment: PaymentInput) -> PlaceOrderParams {
        PlaceOrderParams {
            session: SessionContext::authenticated(UserId::new("firebase-uid")),
            lines,
            details: details(),
            payment,
        }
    }

    fn line(id: &str, quantity: u32) -> RequestedLine {
        RequestedLine {
            item_id: id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_place_cash_order_priced_from_menu() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_execute()
            .withf(|order| {
                order.total == Money::from_major(318)
                    && order.special_instructions.as_deref() == Some("Gate code 1234")
            })
            .times(1)
            .returning(|order| {
                Ok(SubmissionReport {
                    order_id: order.id,
                    persisted: true,
                    notified: true,
                    warnings: vec![],
                })
            });
        let use_case = use_case(
            catalog_repo(),
            submitter,
            MockProcessor::new(),
            CheckoutPolicy::default(),
        );

        let outcome = use_case
            .execute(params(vec![line("1", 2)], PaymentInput::Cash))
            .await
            .unwrap();

        assert_eq!(outcome.totals.subtotal, Money::from_major(318));
        assert_eq!(outcome.totals.delivery_fee, Money::ZERO);
        assert_eq!(outcome.payment_method, PaymentMethod::Cash);
    }

    #[tokio::test]
    async fn should_charge_card_total_including_delivery() {
        let mut processor = MockProcessor::new();
        processor
            .expect_process()
            .withf(|_, amount| *amount == Money::from_major(124))
            .times(1)
            .returning(|_, _| {
                Ok(PaymentReceipt {
                    reference: "sim-42".to_string(),
                    processed_at: chrono::Utc::now(),
                })
            });
        let use_case = use_case(
            catalog_repo(),
            accepting_submitter(),
            processor,
            CheckoutPolicy::default(),
        );
        let card = CardInput {
            card_number: "4111111111111111".to_string(),
            expiry: "0128".to_string(),
            cvv: "999".to_string(),
            cardholder_name: "Zanele Dube".to_string(),
        };

        let outcome = use_case
            .execute(params(vec![line("5", 1)], PaymentInput::Card(card)))
            .await
            .unwrap();

        assert_eq!(outcome.totals.total, Money::from_major(124));
        assert_eq!(outcome.payment_method, PaymentMethod::Card);
    }

    #[tokio::test]
    async fn should_reject_unknown_menu_item() {
        let use_case = use_case(
            catalog_repo(),
            MockSubmitter::new(),
            MockProcessor::new(),
            CheckoutPolicy::default(),
        );

        let result = use_case
            .execute(params(vec![line("99", 1)], PaymentInput::Cash))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::Cart(CartError::UnknownMenuItem(_))
        ));
    }

    #[tokio::test]
    async fn should_reject_empty_cart() {
        let use_case = use_case(
            catalog_repo(),
            MockSubmitter::new(),
            MockProcessor::new(),
            CheckoutPolicy::default(),
        );

        let result = use_case.execute(params(vec![], PaymentInput::Cash)).await;

        assert!(matches!(result.unwrap_err(), CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn should_reject_anonymous_session_when_login_required() {
        let use_case = use_case(
            catalog_repo(),
            MockSubmitter::new(),
            MockProcessor::new(),
            CheckoutPolicy {
                require_authentication: true,
            },
        );
        let mut params = params(vec![line("1", 1)], PaymentInput::Cash);
        params.session = SessionContext::anonymous();

        let result = use_case.execute(params).await;

        assert!(matches!(result.unwrap_err(), CheckoutError::Unauthenticated));
    }

    #[tokio::test]
    async fn should_report_missing_phone() {
        let use_case = use_case(
            catalog_repo(),
            MockSubmitter::new(),
            MockProcessor::new(),
            CheckoutPolicy::default(),
        );
        let mut params = params(vec![line("1", 1)], PaymentInput::Cash);
        params.details.phone = "  ".to_string();

        let result = use_case.execute(params).await;

        match result.unwrap_err() {
            CheckoutError::MissingFields(fields) => {
                assert_eq!(fields, vec![crate::domain::checkout::errors::DeliveryField::Phone])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn should_surface_submission_failure() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_execute()
            .returning(|_| Err(OrderError::SubmissionFailed));
        let use_case = use_case(
            catalog_repo(),
            submitter,
            MockProcessor::new(),
            CheckoutPolicy::default(),
        );

        let result = use_case
            .execute(params(vec![line("4", 1)], PaymentInput::Cash))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::Submission(OrderError::SubmissionFailed)
        ));
    }
}
