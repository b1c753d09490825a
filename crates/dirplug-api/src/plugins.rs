// Plugin configuration endpoints
//
// All plugin variants share one collection (`/config/v1/plugins`) and one
// modify request shape; only the add request and the response schemas
// differ per variant.

use tracing::debug;

use crate::client::ConfigClient;
use crate::error::Error;
use crate::types::{AddPluginRequest, ListResponse, PluginResponse, UpdateRequest};

const COLLECTION: &str = "plugins";

impl ConfigClient {
    /// List every configured plugin.
    ///
    /// `GET /config/v1/plugins`
    pub async fn list_plugins(&self) -> Result<Vec<PluginResponse>, Error> {
        let url = self.url(&[COLLECTION])?;
        debug!("listing plugins");
        let list: ListResponse = self.get(url).await?;
        Ok(list.resources)
    }

    /// Fetch one plugin by id.
    ///
    /// `GET /config/v1/plugins/{id}`
    pub async fn get_plugin(&self, id: &str) -> Result<PluginResponse, Error> {
        let url = self.url(&[COLLECTION, id])?;
        debug!(id, "fetching plugin");
        self.get(url).await
    }

    /// Create a plugin. The response is the stored object.
    ///
    /// `POST /config/v1/plugins`
    pub async fn add_plugin(&self, request: &AddPluginRequest) -> Result<PluginResponse, Error> {
        let url = self.url(&[COLLECTION])?;
        debug!(id = %request.plugin_name, schemas = ?request.schemas, "adding plugin");
        self.post(url, request).await
    }

    /// Apply modify operations to a plugin. The response is the updated object.
    ///
    /// `PATCH /config/v1/plugins/{id}`
    pub async fn update_plugin(
        &self,
        id: &str,
        request: &UpdateRequest,
    ) -> Result<PluginResponse, Error> {
        let url = self.url(&[COLLECTION, id])?;
        debug!(id, operations = request.operations.len(), "updating plugin");
        self.patch(url, request).await
    }

    /// Delete a plugin.
    ///
    /// `DELETE /config/v1/plugins/{id}`
    pub async fn delete_plugin(&self, id: &str) -> Result<(), Error> {
        let url = self.url(&[COLLECTION, id])?;
        debug!(id, "deleting plugin");
        self.delete(url).await
    }
}
