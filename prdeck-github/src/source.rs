//! GitHub-backed record source for list views

use async_trait::async_trait;
use prdeck_core::{ListSource, Record, RecordSource};

use crate::GitHubClient;

/// Feeds a list view from one GitHub listing endpoint
#[derive(Debug)]
pub struct GitHubSource {
    client: GitHubClient,
    endpoint: ListSource,
}

impl GitHubSource {
    pub fn new(client: GitHubClient, endpoint: ListSource) -> Self {
        Self { client, endpoint }
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    pub fn endpoint(&self) -> ListSource {
        self.endpoint
    }
}

#[async_trait]
impl RecordSource for GitHubSource {
    fn describe(&self) -> String {
        format!("{} {}", self.client.full_name(), self.endpoint)
    }

    async fn fetch_records(&self) -> prdeck_core::Result<Vec<Record>> {
        let records = match self.endpoint {
            ListSource::Issues => self.client.list_issue_records().await?,
            ListSource::Pulls => self.client.list_pull_records().await?,
        };
        Ok(records)
    }
}
