use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::rating::RatingStore;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Edit rating.", skip(service))]
#[put("/{id}")]
pub async fn edit_handler(
    path: web::Path<(i64,)>,
    form: web::Json<forms::rating::Edit>,
    service: web::Data<Arc<dyn RatingStore>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Rating>::build().form_error(errors.to_string()));
    }

    let rating = service.update(form.into_inner().into_rating(path.0)).await?;

    Ok(JsonResponse::build().set_id(rating.id).set_item(rating).ok("Updated"))
}
