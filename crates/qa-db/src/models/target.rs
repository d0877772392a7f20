//! Question/answer row projected to the columns voting needs

use sqlx::FromRow;

/// `id` and `author_id` from the questions or answers table
#[derive(Debug, Clone, FromRow)]
pub struct TargetModel {
    pub id: i64,
    pub author_id: i64,
}
