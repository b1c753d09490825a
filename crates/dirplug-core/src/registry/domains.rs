// Enumeration domains shared by the plugin variant tables.
//
// Values are the server's canonical wire spellings.

use crate::model::EnumDomain;

pub const PLUGIN_TYPE: EnumDomain = EnumDomain {
    name: "plugin-type",
    values: &[
        "startup",
        "shutdown",
        "postconnect",
        "postdisconnect",
        "ldifimport",
        "ldifexport",
        "preparse",
        "preparseabandon",
        "preparseadd",
        "preparsebind",
        "preparsecompare",
        "preparsedelete",
        "preparseextended",
        "preparsemodify",
        "preparsemodifydn",
        "preparsesearch",
        "preparseunbind",
        "preoperation",
        "preoperationadd",
        "preoperationbind",
        "preoperationcompare",
        "preoperationdelete",
        "preoperationextended",
        "preoperationmodify",
        "preoperationmodifydn",
        "preoperationsearch",
        "postoperation",
        "postoperationabandon",
        "postoperationadd",
        "postoperationbind",
        "postoperationcompare",
        "postoperationdelete",
        "postoperationextended",
        "postoperationmodify",
        "postoperationmodifydn",
        "postoperationsearch",
        "postoperationunbind",
        "postresponse",
        "postresponseadd",
        "postresponsebind",
        "postresponsecompare",
        "postresponsedelete",
        "postresponseextended",
        "postresponsemodify",
        "postresponsemodifydn",
        "postresponsesearch",
        "postsynchronizationadd",
        "postsynchronizationdelete",
        "postsynchronizationmodify",
        "postsynchronizationmodifydn",
        "searchresultentry",
        "searchresultreference",
        "subordinatemodifydn",
        "intermediateresponse",
    ],
};

pub const SEARCH_SCOPE: EnumDomain = EnumDomain {
    name: "search-scope",
    values: &[
        "base-object",
        "single-level",
        "whole-subtree",
        "subordinate-subtree",
    ],
};

pub const OPERATION_TYPE: EnumDomain = EnumDomain {
    name: "operation-type",
    values: &["add", "bind", "compare", "modify", "modify-dn", "search"],
};

pub const LOG_FILE_FORMAT: EnumDomain = EnumDomain {
    name: "log-file-format",
    values: &["csv", "json"],
};

pub const STATS_DETAIL: EnumDomain = EnumDomain {
    name: "stats-detail",
    values: &["none", "basic", "extended"],
};

pub const LDAP_STAT: EnumDomain = EnumDomain {
    name: "ldap-stat",
    values: &[
        "active-operations",
        "num-connections",
        "op-count-and-latency",
        "work-queue",
    ],
};

pub const RESOURCE_STAT: EnumDomain = EnumDomain {
    name: "resource-stat",
    values: &["memory-utilization", "gc-stats", "disk-info", "host-info"],
};

pub const HISTOGRAM_FORMAT: EnumDomain = EnumDomain {
    name: "histogram-format",
    values: &["none", "count", "percent", "count-and-percent"],
};

pub const HISTOGRAM_OP_TYPE: EnumDomain = EnumDomain {
    name: "histogram-op-type",
    values: &["all", "add", "bind", "compare", "delete", "modify", "modifydn", "search"],
};

pub const PROFILE_ACTION: EnumDomain = EnumDomain {
    name: "profile-action",
    values: &["none", "start", "stop", "cancel"],
};

pub const SERVER_ACCESS_MODE: EnumDomain = EnumDomain {
    name: "server-access-mode",
    values: &["round-robin", "failover"],
};

pub const PASSWORD_POLICY_ERROR: EnumDomain = EnumDomain {
    name: "password-policy-state-error",
    values: &[
        "account-disabled",
        "account-expired",
        "account-locked",
        "account-not-yet-active",
        "password-expired",
        "must-change-password",
        "password-too-old",
    ],
};

pub const MULTIPLE_ATTRIBUTE_BEHAVIOR: EnumDomain = EnumDomain {
    name: "multiple-attribute-behavior",
    values: &[
        "unique-within-each-attribute",
        "unique-across-all-attributes-including-in-same-entry",
        "unique-across-all-attributes-except-in-same-entry",
        "unique-in-combination",
    ],
};

pub const PURGE_BEHAVIOR: EnumDomain = EnumDomain {
    name: "purge-behavior",
    values: &[
        "subtree-delete-entries",
        "delete-entries",
        "delete-json-object-value",
    ],
};

pub const DATETIME_FORMAT: EnumDomain = EnumDomain {
    name: "datetime-format",
    values: &["generalized-time", "custom"],
};

pub const MULTIPLE_VALUE_PATTERN_BEHAVIOR: EnumDomain = EnumDomain {
    name: "multiple-value-pattern-behavior",
    values: &[
        "use-first-non-blank-value-pattern",
        "use-all-non-blank-value-patterns",
    ],
};

pub const MULTI_VALUED_ATTRIBUTE_BEHAVIOR: EnumDomain = EnumDomain {
    name: "multi-valued-attribute-behavior",
    values: &[
        "use-first-value",
        "use-all-values",
        "reject-entries-with-multiple-values",
    ],
};

pub const INITIAL_POPULATION_BEHAVIOR: EnumDomain = EnumDomain {
    name: "initial-population-behavior",
    values: &[
        "preserve-existing-values",
        "merge-existing-and-composed-values",
        "overwrite-existing-values",
    ],
};

pub const REFERENTIAL_INTEGRITY_MODE: EnumDomain = EnumDomain {
    name: "referential-integrity-mode",
    values: &["synchronous", "background"],
};
