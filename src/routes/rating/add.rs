use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::rating::RatingStore;
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add rating.", skip(service))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::rating::Add>,
    service: web::Data<Arc<dyn RatingStore>>,
) -> Result<impl Responder> {
    let rating = service.create(form.into_inner().into()).await?;
    tracing::info!("New rating {} has been saved", rating.id);

    Ok(JsonResponse::build()
        .set_id(rating.id)
        .set_item(rating)
        .created("Saved"))
}
