//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// Send verification code request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAuthCodeRequest {
    pub email: String,
}

/// Verify code request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAuthCodeRequest {
    pub email: String,
    pub auth_code: String,
}
