use std::sync::Arc;

use business::domain::checkout::flow::CheckoutPolicy;
use business::domain::location::services::GeocodingService;
use logger::TracingLogger;
use maps::geocoder::GoogleGeocoder;
use payment::simulated::SimulatedCardProcessor;
use persistence::menu::repository::StaticMenuRepository;
use persistence::order::repository::OrderRepositoryPostgres;
use resend::client::ResendClient;
use resend::order_email::OrderEmailNotifier;

use business::application::cart::price::PriceCartUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::location::prefill_address::PrefillAddressUseCaseImpl;
use business::application::menu::list::ListMenuUseCaseImpl;
use business::application::menu::list_categories::ListCategoriesUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::submit::SubmitOrderUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub menu_api: crate::api::menu::routes::MenuApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub location_api: crate::api::location::routes::LocationApi,
    pub admin_order_api: crate::api::order::routes::AdminOrderApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();
        tracing::info!(
            "Checkout accepts ID tokens from Firebase project {}",
            config.firebase.project_id
        );

        // Infrastructure adapters
        let menu_repository = Arc::new(StaticMenuRepository::new());
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool));
        let notifier = Arc::new(OrderEmailNotifier::new(
            ResendClient::new(config.email.api_key.clone()),
            config.email.from.clone(),
            config.email.to.clone(),
        ));
        let payment_processor = Arc::new(SimulatedCardProcessor::new(
            config.checkout.card_processing_delay,
        ));
        let geocoder: Option<Arc<dyn GeocodingService>> = match &config.maps.api_key {
            Some(key) => Some(Arc::new(GoogleGeocoder::new(key.clone()))),
            None => {
                tracing::warn!("GOOGLE_MAPS_API_KEY not set; addresses fall back to coordinates");
                None
            }
        };

        // Menu use cases
        let list_menu_use_case = Arc::new(ListMenuUseCaseImpl {
            repository: menu_repository.clone(),
            logger: logger.clone(),
        });
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            repository: menu_repository.clone(),
            logger: logger.clone(),
        });

        // Cart and checkout use cases
        let price_cart_use_case = Arc::new(PriceCartUseCaseImpl {
            menu_repository: menu_repository.clone(),
            logger: logger.clone(),
        });
        let submit_order_use_case = Arc::new(SubmitOrderUseCaseImpl {
            repository: order_repository.clone(),
            notifier,
            logger: logger.clone(),
        });
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            menu_repository,
            submitter: submit_order_use_case,
            payment_processor,
            policy: CheckoutPolicy {
                require_authentication: true,
            },
            logger: logger.clone(),
        });

        // Location use cases
        let prefill_address_use_case = Arc::new(PrefillAddressUseCaseImpl {
            geocoder,
            logger: logger.clone(),
        });

        // Admin order use cases
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository,
            logger,
        });

        Ok(Self {
            health_api,
            menu_api: crate::api::menu::routes::MenuApi::new(
                list_menu_use_case,
                list_categories_use_case,
            ),
            cart_api: crate::api::cart::routes::CartApi::new(price_cart_use_case),
            checkout_api: crate::api::checkout::routes::CheckoutApi::new(place_order_use_case),
            location_api: crate::api::location::routes::LocationApi::new(prefill_address_use_case),
            admin_order_api: crate::api::order::routes::AdminOrderApi::new(
                get_all_orders_use_case,
                update_order_status_use_case,
            ),
        })
    }
}
