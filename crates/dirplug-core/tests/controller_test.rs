#![allow(clippy::unwrap_used)]
// Integration tests for `PluginController` against a wiremock server.

use chrono::Utc;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dirplug_core::registry::{desired_from_input, observed_from_attributes};
use dirplug_core::{
    AuthCredentials, ControllerConfig, CoreError, DesiredPlugin, LifecycleState, ManagedObject,
    Operation, PlannedChange, PluginController, PluginKind, Removal,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PluginController) {
    let server = MockServer::start().await;
    let config = ControllerConfig::new(
        server.uri().parse().unwrap(),
        AuthCredentials::Basic {
            username: "cn=Directory Manager".into(),
            password: SecretString::from("password".to_string()),
        },
    );
    let controller = PluginController::new(config).unwrap();
    (server, controller)
}

fn desired(id: &str, kind: PluginKind, attrs: Value) -> DesiredPlugin {
    DesiredPlugin {
        id: id.into(),
        kind,
        attributes: desired_from_input(kind, attrs.as_object().unwrap()).unwrap(),
    }
}

fn seven_bit_clean(enabled: bool, plugin_types: &[&str]) -> Value {
    json!({
        "schemas": ["urn:pingidentity:schemas:configuration:2.0:plugin:seven-bit-clean"],
        "id": "7-Bit Clean",
        "enabled": enabled,
        "plugin-type": plugin_types,
        "attribute-type": ["uid", "mail"],
        "meta": { "resourceType": "/config/v1/plugins" }
    })
}

const SEVEN_BIT_PATH: &str = "/config/v1/plugins/7-Bit%20Clean";

fn tracked(kind: PluginKind, id: &str) -> ManagedObject {
    ManagedObject {
        id: id.into(),
        kind,
        state: LifecycleState::Managed,
        observed: observed_from_attributes(kind, &serde_json::Map::new()).unwrap(),
        last_applied: Utc::now(),
    }
}

// ── Create / adopt ──────────────────────────────────────────────────

#[tokio::test]
async fn test_create_posts_only_declared_attributes() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/config/v1/plugins/slow-binds"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "404", "detail": "Plugin 'slow-binds' does not exist"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/config/v1/plugins"))
        .and(body_json(json!({
            "pluginName": "slow-binds",
            "schemas": ["urn:pingidentity:schemas:configuration:2.0:plugin:delay"],
            "enabled": true,
            "delay": "250 ms"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "schemas": ["urn:pingidentity:schemas:configuration:2.0:plugin:delay"],
            "id": "slow-binds",
            "enabled": true,
            "delay": "250 ms",
            "plugin-type": ["preoperationbind"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let plan = desired(
        "slow-binds",
        PluginKind::Delay,
        json!({ "enabled": true, "delay": "250 ms" }),
    );
    assert_eq!(controller.plan(&plan, None).await.unwrap(), PlannedChange::Create);

    let applied = controller.create(&plan).await.unwrap();
    assert_eq!(applied.state, LifecycleState::Managed);
    assert!(applied.ops.is_empty());
    assert_eq!(applied.plugin.resource_type(), "delay");
}

#[tokio::test]
async fn test_create_adopts_existing_object() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path(SEVEN_BIT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(seven_bit_clean(false, &["preoperation", "postoperation"])),
        )
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(SEVEN_BIT_PATH))
        .and(body_json(json!({
            "operations": [
                { "op": "replace", "path": "enabled", "values": ["true"] },
                { "op": "delete", "path": "plugin-type", "values": ["postoperation"] }
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(seven_bit_clean(true, &["preoperation"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let plan = desired(
        "7-Bit Clean",
        PluginKind::SevenBitClean,
        json!({ "enabled": true, "plugin-type": ["preoperation"] }),
    );
    let applied = controller.create(&plan).await.unwrap();

    assert_eq!(applied.state, LifecycleState::Adopted);
    assert_eq!(
        applied.ops,
        vec![
            Operation::replace("enabled", vec!["true".into()]),
            Operation::delete("plugin-type", vec!["postoperation".into()]),
        ]
    );
}

#[tokio::test]
async fn test_edit_only_variant_missing_remotely() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/config/v1/plugins/Custom"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let plan = desired("Custom", PluginKind::Custom, json!({ "enabled": true }));

    let err = controller.create(&plan).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }), "got {err:?}");

    let err = controller.plan(&plan, None).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }), "got {err:?}");

    let err = controller.apply(&plan, None).await.unwrap_err();
    match err {
        CoreError::NotFound { entity_type, identifier } => {
            assert_eq!(entity_type, "custom plugin");
            assert_eq!(identifier, "Custom");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// ── Update / plan ───────────────────────────────────────────────────

#[tokio::test]
async fn test_converged_object_skips_remote_write() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path(SEVEN_BIT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(seven_bit_clean(true, &["preoperation"])),
        )
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let plan = desired(
        "7-Bit Clean",
        PluginKind::SevenBitClean,
        json!({ "enabled": true, "plugin-type": ["PreOperation"] }),
    );
    let managed = tracked(PluginKind::SevenBitClean, "7-Bit Clean");

    assert_eq!(
        controller.plan(&plan, Some(&managed)).await.unwrap(),
        PlannedChange::NoChange
    );

    let applied = controller.apply(&plan, Some(&managed)).await.unwrap();
    assert!(applied.ops.is_empty());
    assert_eq!(applied.state, LifecycleState::Managed);
}

#[tokio::test]
async fn test_plan_reports_drift_for_tracked_object() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path(SEVEN_BIT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(seven_bit_clean(true, &["preoperation"])),
        )
        .mount(&server)
        .await;

    let plan = desired(
        "7-Bit Clean",
        PluginKind::SevenBitClean,
        json!({ "enabled": false, "attribute-type": ["uid", "mail", "cn"] }),
    );
    let managed = tracked(PluginKind::SevenBitClean, "7-Bit Clean");

    let change = controller.plan(&plan, Some(&managed)).await.unwrap();
    let rendered: Vec<String> = change.operations().iter().map(ToString::to_string).collect();
    assert_eq!(change.label(), "update");
    assert_eq!(
        rendered,
        vec!["replace enabled [false]", "add attribute-type [cn]"]
    );
}

#[tokio::test]
async fn test_variant_mismatch_is_rejected() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/config/v1/plugins/Delay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schemas": ["urn:pingidentity:schemas:configuration:2.0:plugin:delay"],
            "id": "Delay",
            "enabled": true,
            "delay": "1 s"
        })))
        .mount(&server)
        .await;

    let plan = desired("Delay", PluginKind::SevenBitClean, json!({ "enabled": true }));
    let err = controller.plan(&plan, None).await.unwrap_err();

    match err {
        CoreError::VariantMismatch { expected, found, .. } => {
            assert_eq!(expected, "seven-bit-clean");
            assert_eq!(found, "delay");
        }
        other => panic!("expected VariantMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_conflicting_discriminators_fail_decode() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/config/v1/plugins/odd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schemas": [
                "urn:pingidentity:schemas:configuration:2.0:plugin:seven-bit-clean",
                "urn:pingidentity:schemas:configuration:2.0:plugin:delay"
            ],
            "id": "odd",
            "enabled": true
        })))
        .mount(&server)
        .await;

    let err = controller.read("odd").await.unwrap_err();
    assert!(matches!(err, CoreError::Schema(_)), "got {err:?}");
}

// ── Remove ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_remove_treats_missing_as_gone() {
    let (server, controller) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/config/v1/plugins/slow-binds"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let removal = controller
        .remove(PluginKind::Delay, "slow-binds")
        .await
        .unwrap();
    assert_eq!(removal, Removal::AlreadyGone);
}

#[tokio::test]
async fn test_remove_edit_only_never_calls_server() {
    let (server, controller) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let removal = controller
        .remove(PluginKind::LdapResultCodeTracker, "LDAP Result Code Tracker")
        .await
        .unwrap();
    assert_eq!(removal, Removal::Forgotten);
    assert_eq!(
        PluginController::plan_removal(PluginKind::LdapResultCodeTracker),
        PlannedChange::Forget
    );
}

#[tokio::test]
async fn test_rejected_credentials() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "401", "detail": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let err = controller.read("Delay").await.unwrap_err();
    assert!(matches!(err, CoreError::AuthenticationFailed { .. }), "got {err:?}");
}
