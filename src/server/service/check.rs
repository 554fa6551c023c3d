//! Input checks shared by the catalog and account services.

use sea_orm::DatabaseConnection;

use crate::server::{data::jurisdiction::JurisdictionRepository, error::AppError};

/// Rejects a required text field that is blank after trimming.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(())
}

/// Like [`require_text`] for a field an update may leave out.
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}

/// Answers `BadRequest` when a jurisdiction id points at nothing.
pub async fn ensure_jurisdiction(db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
    let Some(id) = id else {
        return Ok(());
    };

    match JurisdictionRepository::new(db).find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!("Jurisdiction {} not found", id))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(matches!(
            require_text("Name", "   "),
            Err(AppError::BadRequest(msg)) if msg == "Name is required"
        ));
        assert!(require_text("Name", "Water").is_ok());
    }

    #[test]
    fn absent_text_is_accepted() {
        assert!(require_text_if_present("Code", None).is_ok());
        assert!(require_text_if_present("Code", Some("")).is_err());
    }
}
