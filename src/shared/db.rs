use sea_orm::DbErr;

/// True when the error is a PostgreSQL unique violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}
