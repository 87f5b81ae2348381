use crate::routes;
use crate::services::rating::{self, RatingStore};
use actix_web::{dev::Server, error, web, App, HttpResponse, HttpServer};
use serde_json::json;
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, pg_pool: Pool<Postgres>) -> Result<Server, std::io::Error> {
    let rating_service: Arc<dyn RatingStore> = rating::new_rating_service(pg_pool);
    let rating_service = web::Data::new(rating_service);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = json_error_body(&err);
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/rating")
                    .service(routes::rating::add_handler)
                    .service(routes::rating::target_list_handler)
                    .service(routes::rating::get_handler)
                    .service(routes::rating::edit_handler)
                    .service(routes::rating::delete_handler),
            )
            .app_data(json_config.clone())
            .app_data(rating_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn json_error_body(err: &error::JsonPayloadError) -> serde_json::Value {
    match err {
        error::JsonPayloadError::Deserialize(err) => json!({
            "kind": "deserialize",
            "line": err.line(),
            "column": err.column(),
            "msg": err.to_string(),
        }),
        _ => json!({
            "kind": "other",
            "msg": err.to_string(),
        }),
    }
}
