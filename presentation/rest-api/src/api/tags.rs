use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Menu,
    Cart,
    Checkout,
    Location,
    /// Restaurant staff only
    AdminOrders,
}
