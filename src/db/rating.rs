use crate::models;
use crate::services::rating::{RatingError, Reason, ValidationError};
use sqlx::PgPool;
use tracing::Instrument;

const PRIMARY_KEY: &str = "rating_pkey";
const ACTIVE_PER_AUTHOR: &str = "rating_target_user_active_idx";
const AUTHOR_FOREIGN_KEY: &str = "rating_user_id_fkey";

/// Maps a failed statement to the error callers are allowed to see.
fn translate(err: sqlx::Error) -> RatingError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint();
        if db_err.is_unique_violation() {
            match constraint {
                Some(PRIMARY_KEY) => {
                    return ValidationError::single("id", Reason::IdTaken).into();
                }
                Some(ACTIVE_PER_AUTHOR) => {
                    return ValidationError::single("target", Reason::Duplicate).into();
                }
                _ => {}
            }
        }
        if db_err.is_foreign_key_violation() && constraint == Some(AUTHOR_FOREIGN_KEY) {
            return ValidationError::single("user_id", Reason::RefNotFound).into();
        }
    }

    tracing::error!("Failed to execute query: {:?}", err);
    RatingError::internal(err)
}

pub async fn fetch(pool: &PgPool, id: i64) -> Result<Option<models::Rating>, RatingError> {
    tracing::info!("Fetch rating {}", id);
    sqlx::query_as::<_, models::Rating>(
        r#"
        SELECT
            *
        FROM rating
        WHERE id=$1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        err => Err(translate(err)),
    })
}

pub async fn fetch_by_target(pool: &PgPool, target: i64) -> Result<Vec<models::Rating>, RatingError> {
    let query_span = tracing::info_span!("Fetch ratings by target.", target = target);
    sqlx::query_as::<_, models::Rating>(
        r#"
        SELECT
            *
        FROM rating
        WHERE target=$1
        ORDER BY date ASC, id ASC
        "#,
    )
    .bind(target)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(translate)
}

pub async fn insert(pool: &PgPool, mut rating: models::Rating) -> Result<models::Rating, RatingError> {
    let query_span = tracing::info_span!("Saving new rating details into the database");
    let explicit_id = rating.id != 0;

    // A zero id leaves the choice to the sequence.
    let query = if explicit_id {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO rating (id, target, user_id, score, comment, extra, active, anonymous, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(rating.id)
    } else {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO rating (target, user_id, score, comment, extra, active, anonymous, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
    };

    let mut tx = pool.begin().await.map_err(translate)?;

    let id = query
        .bind(rating.target)
        .bind(rating.user_id)
        .bind(rating.score)
        .bind(rating.comment.clone())
        .bind(rating.extra.clone())
        .bind(rating.active)
        .bind(rating.anonymous)
        .bind(rating.date)
        .fetch_one(&mut *tx)
        .instrument(query_span)
        .await
        .map_err(translate)?;

    // Keep the sequence ahead of ids chosen by the caller.
    if explicit_id {
        sqlx::query(
            r#"
            SELECT setval(pg_get_serial_sequence('rating', 'id'), GREATEST(MAX(id), 1))
            FROM rating
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(translate)?;
    }

    tx.commit().await.map_err(translate)?;

    tracing::info!("New rating {} has been saved to database", id);
    rating.id = id;
    Ok(rating)
}

pub async fn update(pool: &PgPool, rating: models::Rating) -> Result<models::Rating, RatingError> {
    let query_span = tracing::info_span!("Updating rating", id = rating.id);
    sqlx::query_as::<_, models::Rating>(
        r#"
        UPDATE rating
        SET
            target=$2,
            user_id=$3,
            score=$4,
            comment=$5,
            extra=$6,
            active=$7,
            anonymous=$8,
            date=$9
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(rating.id)
    .bind(rating.target)
    .bind(rating.user_id)
    .bind(rating.score)
    .bind(&rating.comment)
    .bind(&rating.extra)
    .bind(rating.active)
    .bind(rating.anonymous)
    .bind(rating.date)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| match err {
        sqlx::Error::RowNotFound => RatingError::NotFound,
        err => translate(err),
    })
}

#[tracing::instrument(name = "Delete rating.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, RatingError> {
    sqlx::query("DELETE FROM rating WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(translate)
}
