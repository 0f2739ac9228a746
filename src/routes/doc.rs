use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{AdminStats, ClearDataRequest, ExportSnapshot},
        auth::{LoginRequest, RegisterRequest},
        cart::{AddToCartRequest, CartLine, CartSummary, UpdateQuantityRequest},
        orders::{OrderLine, OrderList, OrderView},
        products::ProductList,
    },
    models::{CartEntry, Order, OrderStatus, Product, User},
    render::Page,
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, health, navigation, orders, params, products},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Local Storefront",
        description = "Action surface of a single-shopper storefront: catalog search, cart, demo sign-in, checkout and order history."
    ),
    paths(
        health::health_check,
        auth::login,
        auth::register,
        auth::logout,
        auth::me,
        cart::cart_summary,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        products::list_products,
        products::featured_products,
        products::get_product,
        orders::list_order,
        orders::checkout,
        orders::get_order,
        admin::admin_stats,
        admin::export_data,
        admin::clear_all_data,
        navigation::navigate
    ),
    components(
        schemas(
            User,
            Product,
            CartEntry,
            Order,
            OrderStatus,
            Page,
            AddToCartRequest,
            UpdateQuantityRequest,
            CartLine,
            CartSummary,
            OrderLine,
            OrderView,
            OrderList,
            LoginRequest,
            RegisterRequest,
            ClearDataRequest,
            ExportSnapshot,
            AdminStats,
            ProductList,
            params::Pagination,
            params::ProductQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartSummary>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<OrderView>,
            ApiResponse<User>,
            ApiResponse<AdminStats>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog and search"),
        (name = "Cart", description = "Cart actions"),
        (name = "Orders", description = "Checkout and order history"),
        (name = "Auth", description = "Demo sign-in, no credentials are verified"),
        (name = "Admin", description = "Export and reset"),
        (name = "Navigation", description = "Page routing"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
