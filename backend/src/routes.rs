use std::sync::Arc;
use rocket::{State, get, post, uri, form::Form, response::Redirect};
use rocket_dyn_templates::{Template, context};
use tracing::instrument;
use shared::models::*;
use crate::{
    error::ApiError,
    processor::ElectionProcessor,
    store::ElectionStore,
    utils::parse_record_id,
};

pub struct AppState {
    pub store: Arc<dyn ElectionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ElectionStore>) -> Self {
        Self { store }
    }
}

#[get("/")]
pub async fn list_records(state: &State<AppState>) -> Result<Template, ApiError> {
    let records = ElectionProcessor::list_all(state.store.as_ref()).await?;
    Ok(Template::render("list", context! { records }))
}

#[instrument(skip(state, form), fields(province = %form.province_name))]
#[post("/create", data = "<form>")]
pub async fn create_record(
    state: &State<AppState>,
    form: Form<ElectionForm>,
) -> Result<Redirect, ApiError> {
    ElectionProcessor::create(state.store.as_ref(), &form).await?;
    Ok(Redirect::found(uri!(list_records)))
}

#[instrument(skip(state))]
#[get("/edit/<id>")]
pub async fn edit_record(state: &State<AppState>, id: &str) -> Result<Template, ApiError> {
    let record = match parse_record_id(id) {
        Some(id) => ElectionProcessor::find_by_id(state.store.as_ref(), id).await?,
        None => None,
    };
    Ok(Template::render("edit", context! { record }))
}

#[instrument(skip(state, form))]
#[post("/update/<id>", data = "<form>")]
pub async fn update_record(
    state: &State<AppState>,
    id: &str,
    form: Form<ElectionForm>,
) -> Result<Redirect, ApiError> {
    if let Some(id) = parse_record_id(id) {
        ElectionProcessor::update_by_id(state.store.as_ref(), id, &form).await?;
    }
    Ok(Redirect::found(uri!(list_records)))
}

#[instrument(skip(state))]
#[post("/delete/<id>")]
pub async fn delete_record(state: &State<AppState>, id: &str) -> Result<Redirect, ApiError> {
    if let Some(id) = parse_record_id(id) {
        ElectionProcessor::delete_by_id(state.store.as_ref(), id).await?;
    }
    Ok(Redirect::found(uri!(list_records)))
}
