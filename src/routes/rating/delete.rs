use crate::helpers::JsonResponse;
use crate::models;
use crate::services::rating::RatingStore;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Delete rating.", skip(service))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i64,)>,
    service: web::Data<Arc<dyn RatingStore>>,
) -> Result<impl Responder> {
    let id = path.0;
    service.delete(id).await?;

    Ok(JsonResponse::<models::Rating>::build().set_id(id).ok("Deleted"))
}
