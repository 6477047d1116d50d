// Export route modules
pub mod tags;

use crate::state::AppState;
use axum::Router;

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    Router::new().merge(tags::routes(state))
}
