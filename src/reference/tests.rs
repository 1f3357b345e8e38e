//! Reference Data Tests
//!
//! Validates dataset loading, lookup map construction, and town filtering
//! against fixture files written to a temporary directory.

#[cfg(test)]
mod tests {
    use crate::reference::handlers::handle_towns_by_department;
    use crate::reference::loader::{ReferenceError, ReferenceLoader, DEPARTMENTS_FILE, TOWNS_FILE};
    use axum::extract::{Extension, Path};
    use axum::Json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn write_fixtures(dir: &TempDir, departments: &str, towns: &str) {
        std::fs::write(dir.path().join(DEPARTMENTS_FILE), departments).unwrap();
        std::fs::write(dir.path().join(TOWNS_FILE), towns).unwrap();
    }

    fn loader_with_defaults(dir: &TempDir) -> ReferenceLoader {
        write_fixtures(
            dir,
            r#"[
                {"code": "05", "name": "Antioquia"},
                {"code": "08", "name": "Atlántico"}
            ]"#,
            r#"[
                {"code": "05001", "name": "Medellín", "department": "05"},
                {"code": "05088", "name": "Bello", "department": "05"},
                {"code": "08001", "name": "Barranquilla", "department": "08"}
            ]"#,
        );
        ReferenceLoader::new(dir.path())
    }

    // ============================================================
    // LOADING
    // ============================================================

    #[tokio::test]
    async fn test_departments_loaded_in_source_order() {
        let dir = TempDir::new().unwrap();
        let loader = loader_with_defaults(&dir);

        let departments = loader.departments().await.unwrap();

        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0].code, "05");
        assert_eq!(departments[0].name, "Antioquia");
        assert_eq!(departments[1].code, "08");
    }

    #[tokio::test]
    async fn test_towns_carry_department_reference() {
        let dir = TempDir::new().unwrap();
        let loader = loader_with_defaults(&dir);

        let towns = loader.towns().await.unwrap();

        assert_eq!(towns.len(), 3);
        assert_eq!(towns[0].name, "Medellín");
        assert_eq!(towns[0].department, "05");
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let loader = ReferenceLoader::new(dir.path());

        let result = loader.departments().await;

        assert!(matches!(result, Err(ReferenceError::Read { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir, "not json at all", "[]");
        let loader = ReferenceLoader::new(dir.path());

        let result = loader.departments().await;

        assert!(matches!(result, Err(ReferenceError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let dir = TempDir::new().unwrap();
        // Array of objects without the required fields.
        write_fixtures(&dir, r#"[{"id": 1}]"#, "[]");
        let loader = ReferenceLoader::new(dir.path());

        let result = loader.departments().await;

        assert!(matches!(result, Err(ReferenceError::Parse { .. })));
    }

    // ============================================================
    // LOOKUP MAPS
    // ============================================================

    #[tokio::test]
    async fn test_department_names_maps_code_to_name() {
        let dir = TempDir::new().unwrap();
        let loader = loader_with_defaults(&dir);

        let names = loader.department_names().await.unwrap();

        assert_eq!(names.len(), 2);
        assert_eq!(names.get("05"), Some(&"Antioquia".to_string()));
        assert_eq!(names.get("08"), Some(&"Atlántico".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_codes_last_entry_wins() {
        let dir = TempDir::new().unwrap();
        write_fixtures(
            &dir,
            r#"[
                {"code": "05", "name": "First"},
                {"code": "05", "name": "Second"}
            ]"#,
            "[]",
        );
        let loader = ReferenceLoader::new(dir.path());

        let names = loader.department_names().await.unwrap();

        assert_eq!(names.len(), 1);
        assert_eq!(names.get("05"), Some(&"Second".to_string()));
    }

    #[tokio::test]
    async fn test_each_call_rereads_the_file() {
        let dir = TempDir::new().unwrap();
        let loader = loader_with_defaults(&dir);

        let before = loader.department_names().await.unwrap();
        assert_eq!(before.get("05"), Some(&"Antioquia".to_string()));

        std::fs::write(
            dir.path().join(DEPARTMENTS_FILE),
            r#"[{"code": "05", "name": "Renamed"}]"#,
        )
        .unwrap();

        let after = loader.department_names().await.unwrap();
        assert_eq!(after.get("05"), Some(&"Renamed".to_string()));
    }

    // ============================================================
    // TOWN FILTERING
    // ============================================================

    #[tokio::test]
    async fn test_towns_in_returns_only_matching_department() {
        let dir = TempDir::new().unwrap();
        let loader = loader_with_defaults(&dir);

        let towns = loader.towns_in("05").await.unwrap();

        assert_eq!(towns.len(), 2);
        assert!(towns.iter().all(|town| town.department == "05"));
        // Source order preserved
        assert_eq!(towns[0].code, "05001");
        assert_eq!(towns[1].code, "05088");
    }

    #[tokio::test]
    async fn test_towns_in_unknown_department_is_empty() {
        let dir = TempDir::new().unwrap();
        let loader = loader_with_defaults(&dir);

        let towns = loader.towns_in("99").await.unwrap();

        assert!(towns.is_empty());
    }

    #[tokio::test]
    async fn test_towns_endpoint_returns_empty_array_for_unknown_code() {
        let dir = TempDir::new().unwrap();
        let loader = Arc::new(loader_with_defaults(&dir));

        let result =
            handle_towns_by_department(Path("99".to_string()), Extension(loader)).await;

        let Json(towns) = result.expect("unknown department should not be an error");
        assert!(towns.is_empty());
    }
}
