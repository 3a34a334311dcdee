use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use catalog_core::{ErrorBody, FilterableColumn};
use catalog_models::{
    CompanyType, Country, CreateCountryDto, CreateDistrictDto, District, LoginRequest,
    LoginResponse, MessageResponse, Module, ModulePage, RegisterRequest, Right,
    UpdateCountryDto, UpdateDistrictDto, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::update_user_status,
        crate::modules::users::controller::get_users,
        crate::modules::countries::controller::get_countries,
        crate::modules::countries::controller::get_country,
        crate::modules::countries::controller::create_country,
        crate::modules::countries::controller::update_country,
        crate::modules::countries::controller::delete_country,
        crate::modules::countries::controller::update_country_status,
        crate::modules::countries::controller::get_country_filter_columns,
        crate::modules::districts::controller::get_districts,
        crate::modules::districts::controller::get_district,
        crate::modules::districts::controller::create_district,
        crate::modules::districts::controller::update_district,
        crate::modules::districts::controller::delete_district,
        crate::modules::districts::controller::update_district_status,
        crate::modules::districts::controller::get_district_filter_columns,
        crate::modules::navigation::controller::get_user_modules,
        crate::modules::navigation::controller::get_module_pages,
        crate::modules::rights::controller::get_rights,
        crate::modules::company_types::controller::get_company_types,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorBody,
            User,
            Country,
            CreateCountryDto,
            UpdateCountryDto,
            District,
            CreateDistrictDto,
            UpdateDistrictDto,
            FilterableColumn,
            Module,
            ModulePage,
            Right,
            CompanyType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and account activation"),
        (name = "Users", description = "User listing"),
        (name = "Countries", description = "Country management"),
        (name = "Districts", description = "District management"),
        (name = "Navigation", description = "Modules and module pages"),
        (name = "Reference data", description = "Rights and company types")
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Reference data API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
