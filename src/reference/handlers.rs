use super::loader::ReferenceLoader;
use super::types::Town;
use crate::error::AppError;

use axum::extract::{Extension, Path};
use axum::Json;
use std::sync::Arc;

/// `GET /api/towns/:department_code`
///
/// Returns the towns belonging to the given department as JSON. A department
/// with no towns (or an unknown code) yields an empty array with status 200.
pub async fn handle_towns_by_department(
    Path(department_code): Path<String>,
    Extension(reference): Extension<Arc<ReferenceLoader>>,
) -> Result<Json<Vec<Town>>, AppError> {
    let towns = reference.towns_in(&department_code).await?;
    tracing::debug!(
        "Filtered {} towns for department {}",
        towns.len(),
        department_code
    );

    Ok(Json(towns))
}
