// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Response data
    pub data: T,
    /// Optional human-readable outcome
    #[schema(example = "Role created successfully")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Success without a payload (deletes, password operations)
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Role deleted successfully")]
    pub message: String,
}

/// One page of a paginated list (`paginate=true`). Without `paginate`
/// the `data` field is a bare array instead.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PageResponse<T> {
    /// Total number of matching rows
    #[schema(example = 12)]
    pub count: u64,
    pub rows: Vec<T>,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: ErrorDetail,
}

/// Either a single `message` or one entry per invalid field
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "Role not found")]
    pub message: String,
}
