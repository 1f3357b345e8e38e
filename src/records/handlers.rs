use super::store::RecordStore;
use super::types::{DisplayRecord, NewRecordForm};
use crate::error::AppError;
use crate::reference::loader::ReferenceLoader;
use crate::web::templates::Templates;

use axum::extract::Extension;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use minijinja::context;
use std::sync::Arc;

/// `GET /`
///
/// Lists all stored records with department and town codes resolved to
/// display names.
pub async fn handle_home(
    Extension(store): Extension<Arc<RecordStore>>,
    Extension(reference): Extension<Arc<ReferenceLoader>>,
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, AppError> {
    let department_names = reference.department_names().await?;
    let town_names = reference.town_names().await?;

    let records: Vec<DisplayRecord> = store
        .list_all()
        .into_iter()
        .map(|record| DisplayRecord::resolve(record, &department_names, &town_names))
        .collect();

    let page = templates.render(
        "index.html",
        context! {
            title => "Página Principal",
            records => records,
        },
    )?;

    Ok(Html(page))
}

/// `GET /new-record`
///
/// Shows the entry form. Only departments are rendered server-side; the town
/// selector is populated client-side from `/api/towns/:department_code` once
/// a department is chosen.
pub async fn handle_new_record(
    Extension(reference): Extension<Arc<ReferenceLoader>>,
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, AppError> {
    let departments = reference.departments().await?;

    let page = templates.render(
        "add-record.html",
        context! {
            title => "Nuevo Registro",
            departments => departments,
        },
    )?;

    Ok(Html(page))
}

/// `POST /`
///
/// Validates that all three fields are present, appends the record, and
/// redirects back to the list. No check is made that the town belongs to the
/// submitted department.
pub async fn handle_submit_record(
    Extension(store): Extension<Arc<RecordStore>>,
    Form(form): Form<NewRecordForm>,
) -> Result<Response, AppError> {
    if !form.is_complete() {
        return Err(AppError::MissingFields);
    }

    let record = store.append(form.date, form.department, form.town);
    tracing::info!(
        "Stored record {} ({} / {})",
        record.id,
        record.department,
        record.town
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}
