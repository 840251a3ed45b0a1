//! GCS StorageGateway trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::listing::{ListedObject, build_listing};
use crate::traits::{ErrorContext, StorageGateway};
use crate::types::Entry;
use crate::utils::path::{SEPARATOR, ensure_trailing_separator};

use super::{GcsBucketList, GcsGateway, GcsObjectList, MAX_PAGE_SIZE};

impl GcsGateway {
    /// 将 GCS object 转换为后端无关的列举结果
    fn to_listed_object(object: super::types::GcsObject) -> ListedObject {
        ListedObject {
            size: object.size_bytes(),
            name: object.name,
            updated: object.updated,
        }
    }
}

#[async_trait]
impl StorageGateway for GcsGateway {
    fn id(&self) -> &'static str {
        "gcs"
    }

    async fn list_containers(&self) -> Result<Vec<Entry>> {
        let url = self.buckets_url();
        let page_size = MAX_PAGE_SIZE.to_string();
        let mut entries = Vec::new();
        let mut page_token: Option<String> = None;

        // 逐页读取直到没有 nextPageToken
        loop {
            let mut query = vec![
                ("project", self.project_id.as_str()),
                ("maxResults", page_size.as_str()),
            ];
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let page: GcsBucketList = self
                .get_json(&url, &query, ErrorContext::default())
                .await?;
            entries.extend(
                page.items
                    .into_iter()
                    .map(|bucket| Entry::bucket(bucket.name, bucket.updated)),
            );

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        log::debug!("[{}] Listed {} buckets", self.id(), entries.len());
        Ok(entries)
    }

    async fn list_children(&self, bucket: &str, prefix: &str) -> Result<Vec<Entry>> {
        let prefix = ensure_trailing_separator(prefix);
        let url = self.objects_url(bucket);
        let delimiter = SEPARATOR.to_string();
        let page_size = MAX_PAGE_SIZE.to_string();

        let mut prefixes = Vec::new();
        let mut objects = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![
                ("delimiter", delimiter.as_str()),
                ("maxResults", page_size.as_str()),
            ];
            if !prefix.is_empty() {
                query.push(("prefix", prefix.as_str()));
            }
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let page: GcsObjectList = self
                .get_json(&url, &query, ErrorContext::bucket(bucket))
                .await?;
            prefixes.extend(page.prefixes);
            objects.extend(page.items.into_iter().map(Self::to_listed_object));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        log::debug!(
            "[{}] Listed gs://{bucket}/{prefix}: {} prefixes, {} objects",
            self.id(),
            prefixes.len(),
            objects.len()
        );
        Ok(build_listing(bucket, &prefix, &prefixes, &objects))
    }

    async fn fetch_content(&self, bucket: &str, object: &str) -> Result<Vec<u8>> {
        let url = self.object_url(bucket, object);
        let content = self
            .get_media(&url, ErrorContext::object(bucket, object))
            .await?;
        log::debug!(
            "[{}] Fetched gs://{bucket}/{object} ({} bytes)",
            self.id(),
            content.len()
        );
        Ok(content)
    }
}
