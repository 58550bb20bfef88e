use sqlx::{Executor, Postgres};

use crate::models::{PRO_TIER, Profile};

pub async fn find_profile<'e, E>(executor: E, user_id: &str) -> Result<Option<Profile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, subscription_tier, paypal_subscription_id, updated_at
            FROM profiles
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Overwrite a profile's tier to pro and store the external subscription id.
///
/// Returns whether a profile row was updated. Profiles are never created here.
pub async fn activate_subscription<'e, E>(
    executor: E,
    user_id: &str,
    subscription_id: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE profiles
            SET subscription_tier = $2,
                paypal_subscription_id = $3,
                updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(PRO_TIER)
    .bind(subscription_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}
