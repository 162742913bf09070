use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocateFileQuery {
    /// 待检查的 JSON 文件路径
    pub file_path: Option<String>,
}

impl LocateFileQuery {
    pub fn path(&self) -> &str {
        self.file_path.as_deref().unwrap_or_default()
    }
}
