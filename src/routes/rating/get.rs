use crate::helpers::JsonResponse;
use crate::services::rating::RatingStore;
use crate::views;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get rating.", skip(service))]
#[get("/{id}")]
pub async fn get_handler(
    path: web::Path<(i64,)>,
    service: web::Data<Arc<dyn RatingStore>>,
) -> Result<impl Responder> {
    let rating = service.by_id(path.0).await?;

    Ok(JsonResponse::build().set_id(rating.id).set_item(rating).ok("OK"))
}

#[tracing::instrument(name = "List ratings of a target.", skip(service))]
#[get("/target/{target}")]
pub async fn target_list_handler(
    path: web::Path<(i64,)>,
    service: web::Data<Arc<dyn RatingStore>>,
) -> Result<impl Responder> {
    let ratings = service
        .by_target(path.0)
        .await?
        .into_iter()
        .filter(|rating| rating.active)
        .map(Into::into)
        .collect::<Vec<views::rating::Public>>();

    Ok(JsonResponse::build().set_list(ratings).ok("OK"))
}
