//! 认证信息提取
//!
//! 实际的认证由上游网关完成（外部协作方），网关认证通过后会在请求头中
//! 注入 `x-user-id`。这里只负责把它提取为 [`CurrentUser`]，
//! 缺失或格式不正确时返回401。

use crate::models::err::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// 网关注入的用户标识请求头
pub const USER_ID_HEADER: &str = "x-user-id";

/// 已认证的当前用户
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: i64,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AppError::AuthenticationFailed(format!("缺少 {USER_ID_HEADER} 请求头")))?;

        let user_id = value
            .to_str()
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| AppError::AuthenticationFailed(format!("{USER_ID_HEADER} 请求头格式不正确")))?;

        Ok(CurrentUser { user_id })
    }
}
