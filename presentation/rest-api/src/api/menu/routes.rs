use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::menu::errors::MenuError;
use business::domain::menu::use_cases::list::{ListMenuParams, ListMenuUseCase};
use business::domain::menu::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::menu::value_objects::CategoryFilter;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::MenuItemResponse;
use crate::api::tags::ApiTags;

pub struct MenuApi {
    list_use_case: Arc<dyn ListMenuUseCase>,
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
}

impl MenuApi {
    pub fn new(
        list_use_case: Arc<dyn ListMenuUseCase>,
        list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            list_categories_use_case,
        }
    }
}

#[OpenApi]
impl MenuApi {
    /// List the menu
    ///
    /// Optionally filtered by category. `All` or no category returns everything.
    #[oai(path = "/menu", method = "get", tag = "ApiTags::Menu")]
    async fn list_menu(
        &self,
        /// Category name, e.g. "Combo Meals" or "Drinks"
        category: Query<Option<String>>,
    ) -> ListMenuResponse {
        let filter = match category.0.as_deref() {
            None => CategoryFilter::All,
            Some(raw) => match raw.parse::<CategoryFilter>() {
                Ok(filter) => filter,
                Err(_) => {
                    let (_, json) = MenuError::InvalidCategory.into_error_response();
                    return ListMenuResponse::BadRequest(json);
                }
            },
        };

        match self.list_use_case.execute(ListMenuParams { filter }).await {
            Ok(items) => ListMenuResponse::Ok(Json(
                items.into_iter().map(MenuItemResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListMenuResponse::BadRequest(json),
                    _ => ListMenuResponse::InternalError(json),
                }
            }
        }
    }

    /// List category filters
    ///
    /// "All" first, then each category in menu order.
    #[oai(path = "/menu/categories", method = "get", tag = "ApiTags::Menu")]
    async fn list_categories(&self) -> ListCategoriesResponse {
        match self.list_categories_use_case.execute().await {
            Ok(filters) => {
                ListCategoriesResponse::Ok(Json(filters.iter().map(|f| f.to_string()).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListCategoriesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListMenuResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MenuItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
