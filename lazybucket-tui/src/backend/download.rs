//! 下载到本地文件

use std::path::{Path, PathBuf};

use lazybucket_gateway::StorageGateway;

use super::TaskError;

/// 把内容写入 `dir/name`，目录不存在时创建，已有文件直接覆盖
pub async fn write_local_file(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, TaskError> {
    let target = dir.join(name);

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| TaskError::LocalIo {
            path: dir.to_path_buf(),
            source,
        })?;
    tokio::fs::write(&target, bytes)
        .await
        .map_err(|source| TaskError::LocalIo {
            path: target.clone(),
            source,
        })?;

    Ok(target)
}

/// 读取对象并写入本地目录
pub async fn download_object(
    gateway: &dyn StorageGateway,
    bucket: &str,
    object: &str,
    dir: &Path,
    name: &str,
) -> Result<PathBuf, TaskError> {
    let bytes = gateway.fetch_content(bucket, object).await?;
    let target = write_local_file(dir, name, &bytes).await?;
    log::info!(
        "Downloaded {bucket}/{object} ({} bytes) to {}",
        bytes.len(),
        target.display()
    );
    Ok(target)
}
