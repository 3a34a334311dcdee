//! Table mappings for the models served through [`Repository`].
//!
//! [`Repository`]: crate::Repository

use catalog_models::{CompanyType, Country, District, Module, ModulePage, Right, User};

use crate::repository::{Entity, SoftDelete};

impl Entity for User {
    const TABLE: &'static str = "users";
    const NAME: &'static str = "User";
    const COLUMNS: &'static str =
        "id_hash, username, password, role, is_active, created_at, updated_at";
}

impl Entity for Country {
    const TABLE: &'static str = "countries";
    const NAME: &'static str = "Country";
    const COLUMNS: &'static str = "id_hash, name, code, is_deleted, inserted_user, \
        inserted_user_id_hash, created_at, updated_at";
}

impl SoftDelete for Country {}

impl Entity for District {
    const TABLE: &'static str = "districts";
    const NAME: &'static str = "District";
    const COLUMNS: &'static str = "id_hash, name, country_name, country_id_hash, is_deleted, \
        inserted_user, inserted_user_id_hash, created_at, updated_at";
}

impl SoftDelete for District {}

impl Entity for Module {
    const TABLE: &'static str = "modules";
    const NAME: &'static str = "Module";
    const COLUMNS: &'static str =
        "id_hash, name, key, icon, display_order, description, created_at, updated_at";
    const ORDER_BY: &'static str = "display_order, created_at";
}

impl Entity for ModulePage {
    const TABLE: &'static str = "module_pages";
    const NAME: &'static str = "Module page";
    const COLUMNS: &'static str =
        "id_hash, module_id, name, key, icon, display_order, route, created_at, updated_at";
    const ORDER_BY: &'static str = "display_order, created_at";
}

impl Entity for Right {
    const TABLE: &'static str = "rights";
    const NAME: &'static str = "Right";
    const ID_COLUMN: &'static str = "value_hash";
    const COLUMNS: &'static str = "value_hash, display_text, key";
    const ORDER_BY: &'static str = "key";
}

impl Entity for CompanyType {
    const TABLE: &'static str = "company_types";
    const NAME: &'static str = "Company type";
    const ID_COLUMN: &'static str = "value_hash";
    const COLUMNS: &'static str = "value_hash, display_text, key";
    const ORDER_BY: &'static str = "key";
}
