//! JSON API handler modules.

pub mod coerce;
#[allow(clippy::missing_errors_doc)]
pub mod employees;

use axum::Router;
use axum::routing::get;

use roster_app::ports::EmployeeRepository;

use crate::state::AppState;

/// Build the `/employees` routes.
///
/// The collection is reachable with and without a trailing slash.
pub fn routes<ER>() -> Router<AppState<ER>>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/employees",
            get(employees::list::<ER>).post(employees::create::<ER>),
        )
        .route(
            "/employees/",
            get(employees::list::<ER>).post(employees::create::<ER>),
        )
        .route(
            "/employees/{id}",
            get(employees::get::<ER>)
                .put(employees::update::<ER>)
                .delete(employees::delete::<ER>),
        )
}
