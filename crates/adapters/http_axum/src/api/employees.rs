//! JSON handlers for employee records.

use axum::Json;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use roster_app::ports::EmployeeRepository;
use roster_domain::employee::{Employee, NewEmployee};
use roster_domain::id::EmployeeId;

use crate::api::coerce;
use crate::error::{ApiError, InvalidInput};
use crate::state::AppState;

/// Request body for creating or replacing an employee.
///
/// `age` is coerced from integers, integral floats, and numeric strings.
#[derive(Deserialize)]
pub struct EmployeeRequest {
    pub name: String,
    #[serde(deserialize_with = "coerce::integer")]
    pub age: i64,
    pub department: String,
}

/// `{id}` path segment decoded as an [`EmployeeId`].
///
/// Rejects non-integer segments with `422`, like malformed bodies.
pub struct EmployeePath(pub EmployeeId);

impl<S> FromRequestParts<S> for EmployeePath
where
    S: Send + Sync,
{
    type Rejection = InvalidInput;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| InvalidInput(rejection.body_text()))?;
        Ok(Self(EmployeeId::new(id)))
    }
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            department: req.department,
        }
    }
}

/// Confirmation message paired with the affected record.
#[derive(Serialize)]
pub struct EmployeeMessage {
    pub message: &'static str,
    pub employee: Employee,
}

/// Bare confirmation message.
#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Employee>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Employee>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create and update endpoints.
pub enum WriteResponse {
    Ok(Json<EmployeeMessage>),
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Message>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /employees/`
pub async fn create<ER>(
    State(state): State<AppState<ER>>,
    Json(req): Json<EmployeeRequest>,
) -> Result<WriteResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let employee = state.employee_service.create_employee(req.into()).await?;
    Ok(WriteResponse::Ok(Json(EmployeeMessage {
        message: "Employee created successfully",
        employee,
    })))
}

/// `GET /employees/`
pub async fn list<ER>(State(state): State<AppState<ER>>) -> Result<ListResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /employees/{id}`
pub async fn get<ER>(
    State(state): State<AppState<ER>>,
    EmployeePath(id): EmployeePath,
) -> Result<GetResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let employee = state.employee_service.get_employee(id).await?;
    Ok(GetResponse::Ok(Json(employee)))
}

/// `PUT /employees/{id}`
pub async fn update<ER>(
    State(state): State<AppState<ER>>,
    EmployeePath(id): EmployeePath,
    Json(req): Json<EmployeeRequest>,
) -> Result<WriteResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let employee = state
        .employee_service
        .update_employee(id, req.into())
        .await?;
    Ok(WriteResponse::Ok(Json(EmployeeMessage {
        message: "Employee updated successfully",
        employee,
    })))
}

/// `DELETE /employees/{id}`
pub async fn delete<ER>(
    State(state): State<AppState<ER>>,
    EmployeePath(id): EmployeePath,
) -> Result<DeleteResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    state.employee_service.delete_employee(id).await?;
    Ok(DeleteResponse::Ok(Json(Message {
        message: "Employee deleted successfully",
    })))
}
