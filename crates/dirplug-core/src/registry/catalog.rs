// Static attribute tables for every plugin variant.
//
// Order matters: reconciliation walks each table top to bottom, so the
// operation list for a given (plan, state) pair is always the same.

use super::domains;
use super::{DeletionPolicy, PluginKind, VariantDescriptor};
use crate::model::{AttributeDescriptor as Attr, AttributeKind as Kind};

// ── Shorthand ───────────────────────────────────────────────────────

const fn req_str(name: &'static str) -> Attr {
    Attr::required(name, Kind::String)
}

const fn opt_str(name: &'static str) -> Attr {
    Attr::optional(name, Kind::String)
}

const fn opt_bool(name: &'static str) -> Attr {
    Attr::optional(name, Kind::Bool)
}

const fn opt_int(name: &'static str) -> Attr {
    Attr::optional(name, Kind::Int)
}

const fn opt_set(name: &'static str) -> Attr {
    Attr::optional(name, Kind::StringSet)
}

// ── Shared attributes ───────────────────────────────────────────────

const DESCRIPTION: Attr = opt_str("description");
const ENABLED: Attr = Attr::required("enabled", Kind::Bool);
const PLUGIN_TYPE: Attr = Attr::optional("plugin-type", Kind::EnumSet(&domains::PLUGIN_TYPE));
// Built-in plugins register for fixed phases.
const PLUGIN_TYPE_FIXED: Attr =
    Attr::computed("plugin-type", Kind::EnumSet(&domains::PLUGIN_TYPE));
const INVOKE_INTERNAL: Attr = opt_bool("invoke-for-internal-operations");
const BASE_DN: Attr = opt_set("base-dn");
const FILTER: Attr = opt_str("filter");
const REQUEST_CRITERIA: Attr = opt_str("request-criteria");
const CONNECTION_CRITERIA: Attr = opt_str("connection-criteria");
const EXTENSION_CLASS: Attr = req_str("extension-class");
const EXTENSION_ARGUMENT: Attr = opt_set("extension-argument");
const POLLING_INTERVAL: Attr = opt_str("polling-interval");
const MAX_UPDATES_PER_SECOND: Attr = opt_int("max-updates-per-second");
const NUM_DELETE_THREADS: Attr = opt_int("num-delete-threads");
const PEER_SERVER_PRIORITY_INDEX: Attr = opt_int("peer-server-priority-index");
const LOG_FILE: Attr = req_str("log-file");
const LOG_FILE_PERMISSIONS: Attr = opt_str("log-file-permissions");
const APPEND: Attr = opt_bool("append");
const TRY_LOCAL_BIND: Attr = opt_bool("try-local-bind");
const OVERRIDE_LOCAL_PASSWORD: Attr = opt_bool("override-local-password");
const UPDATE_LOCAL_PASSWORD: Attr = opt_bool("update-local-password");
const UPDATE_LOCAL_PASSWORD_DN: Attr = opt_str("update-local-password-dn");
const ALLOW_LAX_PASSWORDS: Attr = opt_bool("allow-lax-pass-through-authentication-passwords");
const IGNORED_POLICY_ERRORS: Attr = Attr::optional(
    "ignored-password-policy-state-error-condition",
    Kind::EnumSet(&domains::PASSWORD_POLICY_ERROR),
);
const INCLUDED_LOCAL_ENTRY_BASE_DN: Attr = opt_set("included-local-entry-base-dn");
const ENABLE_CONTROL_MAPPING: Attr = opt_bool("enable-control-mapping");
const ALWAYS_MAP_RESPONSES: Attr = opt_bool("always-map-responses");
const SCOPE: Attr = Attr::optional("scope", Kind::Enum(&domains::SEARCH_SCOPE));

const fn stats_detail(name: &'static str) -> Attr {
    Attr::optional(name, Kind::Enum(&domains::STATS_DETAIL))
}

// ── Variant tables ──────────────────────────────────────────────────

static ATTRIBUTE_MAPPER: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::AttributeMapper,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("source-attribute"),
        req_str("target-attribute"),
        ENABLE_CONTROL_MAPPING,
        ALWAYS_MAP_RESPONSES,
    ],
    deletion: DeletionPolicy::Delete,
};

static CHANGE_SUBSCRIPTION_NOTIFICATION: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::ChangeSubscriptionNotification,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        EXTENSION_CLASS,
        EXTENSION_ARGUMENT,
    ],
    deletion: DeletionPolicy::Delete,
};

static CHANGELOG_PASSWORD_ENCRYPTION: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::ChangelogPasswordEncryption,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE_FIXED,
        INVOKE_INTERNAL,
        opt_str("changelog-password-encryption-key").sensitive(),
        opt_str("changelog-password-encryption-key-passphrase-provider"),
    ],
    deletion: DeletionPolicy::Forget,
};

static CLEAN_UP_EXPIRED_PINGFEDERATE_PERSISTENT_SESSIONS: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::CleanUpExpiredPingfederatePersistentSessions,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        POLLING_INTERVAL,
        PEER_SERVER_PRIORITY_INDEX,
        opt_str("base-dn"),
        MAX_UPDATES_PER_SECOND,
        NUM_DELETE_THREADS,
    ],
    deletion: DeletionPolicy::Delete,
};

static CLEAN_UP_INACTIVE_PINGFEDERATE_PERSISTENT_SESSIONS: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::CleanUpInactivePingfederatePersistentSessions,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("expiration-offset"),
        POLLING_INTERVAL,
        PEER_SERVER_PRIORITY_INDEX,
        opt_str("base-dn"),
        MAX_UPDATES_PER_SECOND,
        NUM_DELETE_THREADS,
    ],
    deletion: DeletionPolicy::Delete,
};

static COALESCE_MODIFICATIONS: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::CoalesceModifications,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("request-criteria"),
        opt_set("allowed-request-control"),
    ],
    deletion: DeletionPolicy::Delete,
};

static COMPOSED_ATTRIBUTE: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::ComposedAttribute,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("attribute-type"),
        Attr::required("value-pattern", Kind::StringSet),
        Attr::optional(
            "multiple-value-pattern-behavior",
            Kind::Enum(&domains::MULTIPLE_VALUE_PATTERN_BEHAVIOR),
        ),
        Attr::optional(
            "multi-valued-attribute-behavior",
            Kind::Enum(&domains::MULTI_VALUED_ATTRIBUTE_BEHAVIOR),
        ),
        Attr::optional(
            "target-attribute-exists-during-initial-population-behavior",
            Kind::Enum(&domains::INITIAL_POPULATION_BEHAVIOR),
        ),
        BASE_DN,
        opt_set("exclude-base-dn"),
        opt_set("include-filter"),
        opt_set("exclude-filter"),
    ],
    deletion: DeletionPolicy::Delete,
};

static CUSTOM: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::Custom,
    attributes: &[DESCRIPTION, ENABLED, PLUGIN_TYPE_FIXED, INVOKE_INTERNAL],
    deletion: DeletionPolicy::Forget,
};

static DELAY: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::Delay,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("delay"),
        REQUEST_CRITERIA,
    ],
    deletion: DeletionPolicy::Delete,
};

static DN_MAPPER: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::DnMapper,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("source-dn"),
        req_str("target-dn"),
        opt_bool("enable-attribute-mapping"),
        opt_set("map-attribute"),
        ENABLE_CONTROL_MAPPING,
        ALWAYS_MAP_RESPONSES,
    ],
    deletion: DeletionPolicy::Delete,
};

static GROOVY_SCRIPTED: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::GroovyScripted,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("script-class"),
        opt_set("script-argument"),
    ],
    deletion: DeletionPolicy::Delete,
};

static INTERNAL_SEARCH_RATE: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::InternalSearchRate,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        opt_int("num-threads"),
        req_str("base-dn"),
        opt_int("lower-bound"),
        opt_int("upper-bound"),
        req_str("filter-prefix"),
        opt_str("filter-suffix"),
        SCOPE,
    ],
    deletion: DeletionPolicy::Delete,
};

static LAST_ACCESS_TIME: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::LastAccessTime,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        opt_str("max-update-frequency"),
        Attr::optional("operation-type", Kind::EnumSet(&domains::OPERATION_TYPE)),
        opt_bool("invoke-for-failed-binds"),
        opt_int("max-search-result-entries-to-update"),
        REQUEST_CRITERIA,
    ],
    deletion: DeletionPolicy::Delete,
};

static LDAP_RESULT_CODE_TRACKER: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::LdapResultCodeTracker,
    attributes: &[DESCRIPTION, ENABLED, PLUGIN_TYPE_FIXED, INVOKE_INTERNAL],
    deletion: DeletionPolicy::Forget,
};

static MONITOR_HISTORY: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::MonitorHistory,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        opt_str("log-interval"),
        LOG_FILE,
        LOG_FILE_PERMISSIONS,
        APPEND,
        opt_str("retention-policy"),
        opt_bool("retain-files-sparsely-by-age"),
        opt_bool("sanitize"),
    ],
    deletion: DeletionPolicy::Delete,
};

static PASS_THROUGH_AUTHENTICATION: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::PassThroughAuthentication,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        Attr::required("server", Kind::StringSet),
        Attr::optional("server-access-mode", Kind::Enum(&domains::SERVER_ACCESS_MODE)),
        opt_set("dn-map"),
        opt_str("bind-dn-pattern"),
        opt_str("search-base-dn"),
        opt_str("search-filter-pattern"),
        opt_int("initial-connections"),
        opt_int("max-connections"),
        TRY_LOCAL_BIND,
        OVERRIDE_LOCAL_PASSWORD,
        UPDATE_LOCAL_PASSWORD,
        UPDATE_LOCAL_PASSWORD_DN,
        ALLOW_LAX_PASSWORDS,
        IGNORED_POLICY_ERRORS,
        INCLUDED_LOCAL_ENTRY_BASE_DN,
        CONNECTION_CRITERIA,
        REQUEST_CRITERIA,
    ],
    deletion: DeletionPolicy::Delete,
};

static PASSWORD_POLICY_IMPORT: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::PasswordPolicyImport,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE_FIXED,
        INVOKE_INTERNAL,
        opt_set("default-user-password-storage-scheme"),
        opt_set("default-auth-password-storage-scheme"),
    ],
    deletion: DeletionPolicy::Forget,
};

static PERIODIC_GC: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::PeriodicGc,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        Attr::required("gc-time", Kind::StringSet),
        opt_str("delay-after-alert"),
        opt_str("delay-post-gc"),
    ],
    deletion: DeletionPolicy::Delete,
};

static PERIODIC_STATS_LOGGER: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::PeriodicStatsLogger,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        opt_str("log-interval"),
        opt_str("collection-interval"),
        opt_bool("suppress-if-idle"),
        opt_bool("header-prefix-per-column"),
        opt_bool("empty-instead-of-zero"),
        opt_int("lines-between-header"),
        Attr::optional("included-ldap-stat", Kind::EnumSet(&domains::LDAP_STAT)),
        Attr::optional("included-resource-stat", Kind::EnumSet(&domains::RESOURCE_STAT)),
        Attr::optional("histogram-format", Kind::Enum(&domains::HISTOGRAM_FORMAT)),
        Attr::optional("histogram-op-type", Kind::EnumSet(&domains::HISTOGRAM_OP_TYPE)),
        stats_detail("local-db-backend-info"),
        stats_detail("replication-info"),
        stats_detail("entry-cache-info"),
        Attr::optional("log-file-format", Kind::Enum(&domains::LOG_FILE_FORMAT)),
        LOG_FILE,
        LOG_FILE_PERMISSIONS,
        APPEND,
        opt_str("retention-policy"),
    ],
    deletion: DeletionPolicy::Delete,
};

static PING_ONE_PASS_THROUGH_AUTHENTICATION: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::PingOnePassThroughAuthentication,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("api-url"),
        req_str("auth-url"),
        req_str("oauth-client-id"),
        opt_str("oauth-client-secret").sensitive(),
        opt_str("oauth-client-secret-passphrase-provider"),
        req_str("environment-id"),
        opt_str("http-proxy-external-server"),
        opt_set("user-mapping-local-attribute"),
        opt_set("user-mapping-remote-json-field"),
        opt_str("additional-user-mapping-scim-filter"),
        TRY_LOCAL_BIND,
        OVERRIDE_LOCAL_PASSWORD,
        UPDATE_LOCAL_PASSWORD,
        UPDATE_LOCAL_PASSWORD_DN,
        ALLOW_LAX_PASSWORDS,
        IGNORED_POLICY_ERRORS,
        INCLUDED_LOCAL_ENTRY_BASE_DN,
        CONNECTION_CRITERIA,
        REQUEST_CRITERIA,
    ],
    deletion: DeletionPolicy::Delete,
};

static PROCESSING_TIME_HISTOGRAM: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::ProcessingTimeHistogram,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE_FIXED,
        INVOKE_INTERNAL,
        opt_set("histogram-category-boundary"),
        opt_bool("include-queue-time"),
        opt_bool("separate-monitor-entry-per-tracked-application"),
    ],
    deletion: DeletionPolicy::Forget,
};

static PROFILER: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::Profiler,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        opt_int("profile-sample-interval"),
        opt_str("profile-directory"),
        opt_bool("enable-profiling-on-startup"),
        Attr::optional("profile-action", Kind::Enum(&domains::PROFILE_ACTION)),
    ],
    deletion: DeletionPolicy::Delete,
};

static PURGE_EXPIRED_DATA: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::PurgeExpiredData,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("datetime-attribute"),
        opt_str("datetime-json-field"),
        Attr::optional("datetime-format", Kind::Enum(&domains::DATETIME_FORMAT)),
        opt_str("custom-datetime-format"),
        opt_str("custom-timezone"),
        req_str("expiration-offset"),
        Attr::optional("purge-behavior", Kind::Enum(&domains::PURGE_BEHAVIOR)),
        opt_str("base-dn"),
        FILTER,
        POLLING_INTERVAL,
        MAX_UPDATES_PER_SECOND,
        PEER_SERVER_PRIORITY_INDEX,
        NUM_DELETE_THREADS,
    ],
    deletion: DeletionPolicy::Delete,
};

static REFERENTIAL_INTEGRITY: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::ReferentialIntegrity,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        Attr::required("attribute-type", Kind::StringSet),
        BASE_DN,
        opt_str("log-file"),
        opt_str("update-interval"),
        Attr::optional("update-mode", Kind::Enum(&domains::REFERENTIAL_INTEGRITY_MODE)),
    ],
    deletion: DeletionPolicy::Delete,
};

static REFERRAL_ON_UPDATE: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::ReferralOnUpdate,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        Attr::required("referral-base-url", Kind::StringSet),
        BASE_DN,
    ],
    deletion: DeletionPolicy::Delete,
};

static SEARCH_SHUTDOWN: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::SearchShutdown,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        req_str("base-dn"),
        SCOPE,
        req_str("filter"),
        opt_set("include-attribute"),
        req_str("output-file"),
        opt_str("previous-file-extension"),
    ],
    deletion: DeletionPolicy::Delete,
};

static SEVEN_BIT_CLEAN: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::SevenBitClean,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        opt_set("attribute-type"),
        BASE_DN,
    ],
    deletion: DeletionPolicy::Delete,
};

static SIMPLE_TO_EXTERNAL_BIND: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::SimpleToExternalBind,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        CONNECTION_CRITERIA,
        REQUEST_CRITERIA,
    ],
    deletion: DeletionPolicy::Delete,
};

static SNMP_SUBAGENT: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::SnmpSubagent,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        opt_str("context-name"),
        opt_str("agentx-address"),
        opt_int("agentx-port"),
        opt_int("num-worker-threads"),
        opt_str("session-timeout"),
        opt_str("connect-retry-max-wait"),
        opt_str("ping-interval"),
    ],
    deletion: DeletionPolicy::Delete,
};

static SUB_OPERATION_TIMING: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::SubOperationTiming,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        REQUEST_CRITERIA,
        opt_int("num-most-expensive-phases-shown"),
    ],
    deletion: DeletionPolicy::Delete,
};

static THIRD_PARTY: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::ThirdParty,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        EXTENSION_CLASS,
        EXTENSION_ARGUMENT,
    ],
    deletion: DeletionPolicy::Delete,
};

static UNIQUE_ATTRIBUTE: VariantDescriptor = VariantDescriptor {
    kind: PluginKind::UniqueAttribute,
    attributes: &[
        DESCRIPTION,
        ENABLED,
        PLUGIN_TYPE,
        INVOKE_INTERNAL,
        Attr::required("type", Kind::StringSet),
        Attr::optional(
            "multiple-attribute-behavior",
            Kind::Enum(&domains::MULTIPLE_ATTRIBUTE_BEHAVIOR),
        ),
        BASE_DN,
        opt_bool("prevent-conflicts-with-soft-deleted-entries"),
        FILTER,
    ],
    deletion: DeletionPolicy::Delete,
};

/// The static table for a variant.
pub(super) fn descriptor(kind: PluginKind) -> &'static VariantDescriptor {
    match kind {
        PluginKind::AttributeMapper => &ATTRIBUTE_MAPPER,
        PluginKind::ChangeSubscriptionNotification => &CHANGE_SUBSCRIPTION_NOTIFICATION,
        PluginKind::ChangelogPasswordEncryption => &CHANGELOG_PASSWORD_ENCRYPTION,
        PluginKind::CleanUpExpiredPingfederatePersistentSessions => {
            &CLEAN_UP_EXPIRED_PINGFEDERATE_PERSISTENT_SESSIONS
        }
        PluginKind::CleanUpInactivePingfederatePersistentSessions => {
            &CLEAN_UP_INACTIVE_PINGFEDERATE_PERSISTENT_SESSIONS
        }
        PluginKind::CoalesceModifications => &COALESCE_MODIFICATIONS,
        PluginKind::ComposedAttribute => &COMPOSED_ATTRIBUTE,
        PluginKind::Custom => &CUSTOM,
        PluginKind::Delay => &DELAY,
        PluginKind::DnMapper => &DN_MAPPER,
        PluginKind::GroovyScripted => &GROOVY_SCRIPTED,
        PluginKind::InternalSearchRate => &INTERNAL_SEARCH_RATE,
        PluginKind::LastAccessTime => &LAST_ACCESS_TIME,
        PluginKind::LdapResultCodeTracker => &LDAP_RESULT_CODE_TRACKER,
        PluginKind::MonitorHistory => &MONITOR_HISTORY,
        PluginKind::PassThroughAuthentication => &PASS_THROUGH_AUTHENTICATION,
        PluginKind::PasswordPolicyImport => &PASSWORD_POLICY_IMPORT,
        PluginKind::PeriodicGc => &PERIODIC_GC,
        PluginKind::PeriodicStatsLogger => &PERIODIC_STATS_LOGGER,
        PluginKind::PingOnePassThroughAuthentication => &PING_ONE_PASS_THROUGH_AUTHENTICATION,
        PluginKind::ProcessingTimeHistogram => &PROCESSING_TIME_HISTOGRAM,
        PluginKind::Profiler => &PROFILER,
        PluginKind::PurgeExpiredData => &PURGE_EXPIRED_DATA,
        PluginKind::ReferentialIntegrity => &REFERENTIAL_INTEGRITY,
        PluginKind::ReferralOnUpdate => &REFERRAL_ON_UPDATE,
        PluginKind::SearchShutdown => &SEARCH_SHUTDOWN,
        PluginKind::SevenBitClean => &SEVEN_BIT_CLEAN,
        PluginKind::SimpleToExternalBind => &SIMPLE_TO_EXTERNAL_BIND,
        PluginKind::SnmpSubagent => &SNMP_SUBAGENT,
        PluginKind::SubOperationTiming => &SUB_OPERATION_TIMING,
        PluginKind::ThirdParty => &THIRD_PARTY,
        PluginKind::UniqueAttribute => &UNIQUE_ATTRIBUTE,
    }
}
