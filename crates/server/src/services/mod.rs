////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain(Entity)单独一个文件夹
// 2. 每个Domain由两部分组成:
//    - service: 业务逻辑
//    - (底层操作在database crate的repository中)
//
//////////////////////////////////////////////////////////////////////

pub mod auth;
pub mod form;
pub mod order;
pub mod product;

use auth::auth_service::{AuthService, DynAuthService};
use auth::RewardPolicy;
use database::Database;
use form::form_service::{DynFormService, FormService};
use order::order_service::{DynOrderService, OrderService};
use product::product_service::{DynProductService, ProductService};
use std::sync::Arc;
use tracing::info;
use utils::AppConfig;

#[derive(Clone)]
pub struct Services {
    pub auth: DynAuthService,
    pub order: DynOrderService,
    pub product: DynProductService,
    pub form: DynFormService,
    pub database: Arc<Database>,
}

impl Services {
    pub fn new(db: Database, config: Arc<AppConfig>) -> Self {
        let database = Arc::new(db);

        let auth = Arc::new(AuthService::new(database.clone(), RewardPolicy::from_config(&config))) as DynAuthService;
        let order = Arc::new(OrderService::new(database.clone())) as DynOrderService;
        let product = Arc::new(ProductService::new(database.clone())) as DynProductService;
        let form = Arc::new(FormService::new(database.clone())) as DynFormService;

        info!("🧠 services initialized");

        Self {
            auth,
            order,
            product,
            form,
            database,
        }
    }
}
