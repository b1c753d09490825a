// ── Plugin lifecycle controller ──
//
// Drives create / read / update / delete for plugin objects: reads the
// server, runs the registry's decode and the reconciliation engine, and
// submits the resulting operations. Every call talks to the server
// directly; nothing is cached and nothing is retried.

use tracing::{debug, info};

use dirplug_api::transport::{TlsMode, TransportConfig};
use dirplug_api::{ConfigClient, Credentials};

use crate::config::{AuthCredentials, ControllerConfig, TlsVerification};
use crate::error::CoreError;
use crate::lifecycle::{LifecycleState, ManagedObject, PlannedChange, Removal};
use crate::model::{DesiredPlugin, ObservedPlugin};
use crate::operation::{self, Operation};
use crate::reconcile::reconcile;
use crate::registry::{self, DeletionPolicy, PluginKind};

/// Result of a successful create, adopt, or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The object as the server reports it afterwards.
    pub plugin: ObservedPlugin,
    /// Lifecycle state the object is now in.
    pub state: LifecycleState,
    /// Operations that were submitted (empty for creates and no-ops).
    pub ops: Vec<Operation>,
}

// ── PluginController ─────────────────────────────────────────────────

/// Entry point for plugin lifecycle management against one server.
pub struct PluginController {
    config: ControllerConfig,
    client: ConfigClient,
}

impl PluginController {
    /// Build a controller and its API client from configuration.
    pub fn new(config: ControllerConfig) -> Result<Self, CoreError> {
        let client = ConfigClient::new(
            config.url.as_str(),
            build_credentials(&config.auth),
            &build_transport(&config),
        )?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Every plugin on the server, decoded.
    pub async fn list(&self) -> Result<Vec<ObservedPlugin>, CoreError> {
        let responses = self.client.list_plugins().await.map_err(|e| self.api_error(e))?;
        debug!(count = responses.len(), "decoding plugin list");
        responses
            .iter()
            .map(|r| registry::decode(r).map_err(CoreError::from))
            .collect()
    }

    /// Read and decode one plugin. A missing object is `None`, not an error.
    pub async fn read(&self, id: &str) -> Result<Option<ObservedPlugin>, CoreError> {
        match self.client.get_plugin(id).await {
            Ok(response) => Ok(Some(registry::decode(&response)?)),
            Err(e) if e.is_not_found() => {
                debug!(id, "plugin not present on server");
                Ok(None)
            }
            Err(e) => Err(self.api_error(e)),
        }
    }

    // ── Planning ─────────────────────────────────────────────────────

    /// Decide what applying `desired` would do, based on a fresh read.
    pub async fn plan(
        &self,
        desired: &DesiredPlugin,
        tracked: Option<&ManagedObject>,
    ) -> Result<PlannedChange, CoreError> {
        let variant = desired.kind.descriptor();

        let Some(observed) = self.read(&desired.id).await? else {
            if variant.is_edit_only() {
                return Err(missing_remotely(desired));
            }
            return Ok(PlannedChange::Create);
        };
        check_kind(desired, &observed)?;

        let ops = reconcile(variant, &desired.attributes, &observed.attributes);
        let managed = tracked.is_some_and(|t| t.state.is_tracked());
        Ok(match (managed, ops.is_empty()) {
            (true, true) => PlannedChange::NoChange,
            (true, false) => PlannedChange::Update { ops },
            (false, _) => PlannedChange::Adopt { ops },
        })
    }

    /// What dropping a tracked object from the manifest would do.
    pub fn plan_removal(kind: PluginKind) -> PlannedChange {
        match kind.descriptor().deletion {
            DeletionPolicy::Delete => PlannedChange::Delete,
            DeletionPolicy::Forget => PlannedChange::Forget,
        }
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Converge the server to `desired`, creating, adopting, or updating
    /// as the current remote state requires.
    pub async fn apply(
        &self,
        desired: &DesiredPlugin,
        tracked: Option<&ManagedObject>,
    ) -> Result<Applied, CoreError> {
        match (self.read(&desired.id).await?, tracked) {
            (None, _) => self.create(desired).await,
            (Some(observed), Some(t)) if t.state.is_tracked() => {
                check_kind(desired, &observed)?;
                let mut applied = self.update(desired, &observed).await?;
                applied.state = t.state.after_update();
                Ok(applied)
            }
            (Some(observed), _) => self.adopt_observed(desired, observed).await,
        }
    }

    /// Create `desired` on the server.
    ///
    /// If the object already exists, or the variant is edit-only, it is
    /// adopted instead.
    pub async fn create(&self, desired: &DesiredPlugin) -> Result<Applied, CoreError> {
        let variant = desired.kind.descriptor();
        if variant.is_edit_only() {
            debug!(id = %desired.id, variant = variant.name(), "edit-only variant, adopting");
            return self.adopt(desired).await;
        }
        if let Some(observed) = self.read(&desired.id).await? {
            debug!(id = %desired.id, "plugin already exists, adopting");
            return self.adopt_observed(desired, observed).await;
        }

        let request = registry::encode_add(&desired.id, desired.kind, &desired.attributes);
        let response = self
            .client
            .add_plugin(&request)
            .await
            .map_err(|e| self.api_error(e))?;
        let plugin = registry::decode(&response)?;
        check_kind(desired, &plugin)?;

        info!(id = %plugin.id, variant = plugin.resource_type(), "created plugin");
        Ok(Applied {
            plugin,
            state: LifecycleState::Managed,
            ops: Vec::new(),
        })
    }

    /// Take over an object that already exists remotely and converge it.
    pub async fn adopt(&self, desired: &DesiredPlugin) -> Result<Applied, CoreError> {
        let Some(observed) = self.read(&desired.id).await? else {
            return Err(missing_remotely(desired));
        };
        self.adopt_observed(desired, observed).await
    }

    async fn adopt_observed(
        &self,
        desired: &DesiredPlugin,
        observed: ObservedPlugin,
    ) -> Result<Applied, CoreError> {
        check_kind(desired, &observed)?;
        let mut applied = self.update(desired, &observed).await?;
        applied.state = LifecycleState::Adopted;
        info!(id = %desired.id, ops = applied.ops.len(), "adopted plugin");
        Ok(applied)
    }

    /// Submit the operations that converge `observed` to `desired`.
    ///
    /// An empty operation list means no remote call; `observed` is
    /// returned as-is.
    pub async fn update(
        &self,
        desired: &DesiredPlugin,
        observed: &ObservedPlugin,
    ) -> Result<Applied, CoreError> {
        let ops = reconcile(
            desired.kind.descriptor(),
            &desired.attributes,
            &observed.attributes,
        );
        if ops.is_empty() {
            debug!(id = %desired.id, "already converged");
            return Ok(Applied {
                plugin: observed.clone(),
                state: LifecycleState::Managed,
                ops,
            });
        }

        let response = self
            .client
            .update_plugin(&desired.id, &operation::update_request(&ops))
            .await
            .map_err(|e| self.api_error(e))?;
        let plugin = registry::decode(&response)?;
        check_kind(desired, &plugin)?;

        info!(id = %desired.id, ops = ops.len(), "updated plugin");
        Ok(Applied {
            plugin,
            state: LifecycleState::Managed,
            ops,
        })
    }

    /// Remove a plugin according to its variant's deletion policy.
    ///
    /// Edit-only variants are only forgotten. A remote 404 on delete
    /// counts as already gone.
    pub async fn remove(&self, kind: PluginKind, id: &str) -> Result<Removal, CoreError> {
        match kind.descriptor().deletion {
            DeletionPolicy::Forget => {
                info!(id, variant = kind.name(), "forgetting edit-only plugin");
                Ok(Removal::Forgotten)
            }
            DeletionPolicy::Delete => match self.client.delete_plugin(id).await {
                Ok(()) => {
                    info!(id, variant = kind.name(), "deleted plugin");
                    Ok(Removal::Deleted)
                }
                Err(e) if e.is_not_found() => {
                    debug!(id, "plugin already absent");
                    Ok(Removal::AlreadyGone)
                }
                Err(e) => Err(self.api_error(e)),
            },
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────

    /// Translate an API error, filling in the configured timeout.
    fn api_error(&self, err: dirplug_api::Error) -> CoreError {
        match CoreError::from(err) {
            CoreError::Timeout { .. } => CoreError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            },
            other => other,
        }
    }
}

fn check_kind(desired: &DesiredPlugin, observed: &ObservedPlugin) -> Result<(), CoreError> {
    if desired.kind == observed.kind {
        Ok(())
    } else {
        Err(CoreError::VariantMismatch {
            id: desired.id.clone(),
            expected: desired.kind.to_string(),
            found: observed.kind.to_string(),
        })
    }
}

/// Edit-only variants can only be adopted, so a missing one is not found
/// whichever entry point asked.
fn missing_remotely(desired: &DesiredPlugin) -> CoreError {
    CoreError::NotFound {
        entity_type: format!("{} plugin", desired.kind),
        identifier: desired.id.clone(),
    }
}

fn build_credentials(auth: &AuthCredentials) -> Credentials {
    match auth {
        AuthCredentials::Basic { username, password } => Credentials::Basic {
            username: username.clone(),
            password: password.clone(),
        },
        AuthCredentials::Bearer(token) => Credentials::Bearer {
            token: token.clone(),
        },
    }
}

/// Build a [`TransportConfig`] from the controller configuration.
fn build_transport(config: &ControllerConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}
