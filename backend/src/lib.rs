pub mod catchers;
pub mod config;
pub mod error;
pub mod processor;
pub mod queries;
pub mod routes;
pub mod store;
pub mod utils;
pub use shared::models::*;

use std::sync::Arc;
use rocket::{Build, Rocket, routes, catchers, fairing::AdHoc, figment::Figment};
use tracing::info;
use rocket_dyn_templates::Template;
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable_entity},
    routes::{create_record, delete_record, edit_record, list_records, update_record, AppState},
    config::Config,
    store::ElectionStore,
};

/// Assembles the server around an already-constructed store.
pub fn build_rocket(figment: Figment, store: Arc<dyn ElectionStore>) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Template::fairing())
        .manage(AppState::new(store))
        .mount(
            "/",
            routes![
                list_records,
                create_record,
                edit_record,
                update_record,
                delete_record
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable_entity,
                internal_error
            ],
        )
}

/// Runs the server until shutdown. A failed ignition (bad template dir,
/// port already taken) comes back as the error.
pub async fn serve(config: &Config, store: Arc<dyn ElectionStore>) -> Result<(), rocket::Error> {
    build_rocket(config.figment(), store)
        .attach(AdHoc::on_liftoff("Listening", |rocket| Box::pin(async move {
            let config = rocket.config();
            info!("Listening on http://{}:{}", config.address, config.port);
        })))
        .launch()
        .await?;
    Ok(())
}
