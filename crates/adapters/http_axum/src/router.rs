//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use roster_app::ports::EmployeeRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the employee routes at the root and a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<ER>(state: AppState<ER>) -> Router
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use roster_app::services::employee_service::EmployeeService;
    use roster_domain::employee::{Employee, NewEmployee};
    use roster_domain::error::RosterError;
    use roster_domain::id::EmployeeId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Knows exactly one employee, id 1.
    struct StubEmployeeRepo;

    fn known() -> Employee {
        NewEmployee::new("Ada", 36, "Engineering").with_id(EmployeeId::new(1))
    }

    impl EmployeeRepository for StubEmployeeRepo {
        async fn create(&self, employee: NewEmployee) -> Result<Employee, RosterError> {
            Ok(employee.with_id(EmployeeId::new(2)))
        }
        async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RosterError> {
            Ok((id == known().id).then(known))
        }
        async fn get_all(&self) -> Result<Vec<Employee>, RosterError> {
            Ok(vec![known()])
        }
        async fn update(&self, employee: Employee) -> Result<Option<Employee>, RosterError> {
            Ok((employee.id == known().id).then_some(employee))
        }
        async fn delete(&self, id: EmployeeId) -> Result<bool, RosterError> {
            Ok(id == known().id)
        }
    }

    /// Fails every call, standing in for an unreachable database.
    struct BrokenEmployeeRepo;

    fn broken() -> RosterError {
        RosterError::Storage(Box::new(std::io::Error::other("database is locked")))
    }

    impl EmployeeRepository for BrokenEmployeeRepo {
        async fn create(&self, _employee: NewEmployee) -> Result<Employee, RosterError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: EmployeeId) -> Result<Option<Employee>, RosterError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Employee>, RosterError> {
            Err(broken())
        }
        async fn update(&self, _employee: Employee) -> Result<Option<Employee>, RosterError> {
            Err(broken())
        }
        async fn delete(&self, _id: EmployeeId) -> Result<bool, RosterError> {
            Err(broken())
        }
    }

    fn app() -> Router {
        build(AppState::new(EmployeeService::new(StubEmployeeRepo)))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_wrap_created_employee_with_message() {
        let payload = json!({"name": "Grace", "age": 45, "department": "Research"});
        let (status, body) = send(app(), "POST", "/employees/", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Employee created successfully",
                "employee": {"id": 2, "name": "Grace", "age": 45, "department": "Research"},
            })
        );
    }

    #[tokio::test]
    async fn should_serve_collection_with_and_without_trailing_slash() {
        let expected = json!([{"id": 1, "name": "Ada", "age": 36, "department": "Engineering"}]);

        let (status, body) = send(app(), "GET", "/employees/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);

        let (status, body) = send(app(), "GET", "/employees", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn should_return_bare_employee_when_found() {
        let (status, body) = send(app(), "GET", "/employees/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 1, "name": "Ada", "age": 36, "department": "Engineering"})
        );
    }

    #[tokio::test]
    async fn should_return_not_found_detail_when_missing() {
        let (status, body) = send(app(), "GET", "/employees/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Employee not found"}));
    }

    #[tokio::test]
    async fn should_wrap_updated_employee_with_message() {
        let payload = json!({"name": "Ada L.", "age": 37, "department": "Math"});
        let (status, body) = send(app(), "PUT", "/employees/1", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Employee updated successfully");
        assert_eq!(
            body["employee"],
            json!({"id": 1, "name": "Ada L.", "age": 37, "department": "Math"})
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing() {
        let payload = json!({"name": "X", "age": 1, "department": "Y"});
        let (status, body) = send(app(), "PUT", "/employees/9", Some(payload)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Employee not found"}));
    }

    #[tokio::test]
    async fn should_confirm_delete() {
        let (status, body) = send(app(), "DELETE", "/employees/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Employee deleted successfully"}));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing() {
        let (status, body) = send(app(), "DELETE", "/employees/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Employee not found"}));
    }

    #[tokio::test]
    async fn should_reject_non_integer_id_as_unprocessable() {
        let payload = json!({"name": "Ada", "age": 36, "department": "Engineering"});
        for (method, body) in [("GET", None), ("PUT", Some(payload)), ("DELETE", None)] {
            let (status, body) = send(app(), method, "/employees/abc", body).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{method}");
            assert!(body["detail"].is_string(), "{method}: {body}");
        }
    }

    #[tokio::test]
    async fn should_coerce_string_and_float_age_on_create() {
        for age in [json!("45"), json!(45.0)] {
            let payload = json!({"name": "Grace", "age": age, "department": "Research"});
            let (status, body) = send(app(), "POST", "/employees/", Some(payload)).await;
            assert_eq!(status, StatusCode::OK, "age {age}");
            assert_eq!(body["employee"]["age"], 45, "age {age}");
        }
    }

    #[tokio::test]
    async fn should_coerce_string_age_on_update() {
        let payload = json!({"name": "Ada", "age": "37", "department": "Math"});
        let (status, body) = send(app(), "PUT", "/employees/1", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employee"]["age"], 37);
    }

    #[tokio::test]
    async fn should_reject_fractional_age() {
        let payload = json!({"name": "Ada", "age": 36.5, "department": "Engineering"});
        let (status, _) = send(app(), "POST", "/employees/", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_reject_body_with_wrong_field_type() {
        let payload = json!({"name": "Ada", "age": "old", "department": "Engineering"});
        let (status, _) = send(app(), "POST", "/employees/", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_hide_storage_failures_behind_internal_error() {
        let app = build(AppState::new(EmployeeService::new(BrokenEmployeeRepo)));
        let (status, body) = send(app, "GET", "/employees/", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Internal Server Error"}));
    }
}
