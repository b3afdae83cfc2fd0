//! 主页查询相关的请求/响应模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 查询文档
///
/// 保存查询的结构化内容（展示字段、过滤条件、环境等）。
/// 序列化时跳过未提供的可选字段，数据库中只存储用户实际提交的键。
#[derive(Deserialize, Debug, Clone, ToSchema, Serialize, Validate)]
pub struct SavedQueryDocument {
    /// 查询的展示字段列表，至少一个
    #[validate(length(min = 1))]
    pub fields: Vec<String>,

    /// 查询覆盖的项目ID列表，`-1`表示全部项目
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,

    /// 环境过滤
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<String>>,

    /// 排序字段，`-`前缀表示降序
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    /// 相对时间范围，例如 `14d`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// 查询文档的版本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u16>,

    /// 过滤条件列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<serde_json::Value>,

    #[schema(example = 10)]
    /// 返回条数限制
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// 主页查询的PUT请求体
///
/// `name` 之外的字段会被平铺进查询文档中整体存储
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct HomepageQueryPayload {
    /// 查询名称
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub query: SavedQueryDocument,
}

/// 查询收藏返回对象
#[derive(Serialize, Debug, ToSchema)]
pub struct SavedQueryInfo {
    pub id: i64,
    pub name: String,

    /// 存储的查询文档
    #[schema(value_type = Object)]
    pub query: serde_json::Value,
    pub is_homepage: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<database::SavedQueryInfo> for SavedQueryInfo {
    fn from(info: database::SavedQueryInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            query: info.query,
            is_homepage: info.is_homepage,
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}
