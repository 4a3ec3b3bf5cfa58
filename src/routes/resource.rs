//! Resource CRUD routes built from application state.
//! Each resource gets static paths (`/{name}`, `/{name}/:id`, `/_schema/{name}`) bound to its own service.

use crate::handlers::resource::{create, delete, list, read, replace, schema, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    let mut router = Router::new();
    for name in state.names.iter() {
        let Some(service) = state.service(name) else {
            continue;
        };
        let resource = Router::new()
            .route(&format!("/{}", name), get(list).post(create))
            .route(
                &format!("/{}/:id", name),
                get(read).put(replace).patch(update).delete(delete),
            )
            .route(&format!("/_schema/{}", name), get(schema))
            .with_state(service.clone());
        router = router.merge(resource);
    }
    router
}
