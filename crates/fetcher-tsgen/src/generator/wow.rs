//! Fixed mapping from Wow framework schema keys to types that already exist
//! in `@ahoo-wang/fetcher-wow`.
//!
//! Schemas with an entry here are substituted with an import rather than
//! generated. The table is a versioned constant and is never derived from the
//! input document.

use std::{collections::HashMap, sync::LazyLock};

pub const WOW_MODULE_SPECIFIER: &str = "@ahoo-wang/fetcher-wow";

pub static WOW_TYPE_MAPPING: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
  HashMap::from([
    ("wow.api.BindingError", "BindingError"),
    ("wow.api.ErrorInfo", "ErrorInfo"),
    ("wow.api.RecoverableType", "RecoverableType"),
    ("wow.api.RetrySpec", "RetrySpec"),
    ("wow.api.Identifier", "Identifier"),
    ("wow.api.Version", "Version"),
    ("wow.command.CommandResult", "CommandResult"),
    ("wow.command.CommandOk", "CommandOk"),
    ("wow.command.CommandStage", "CommandStage"),
    ("wow.command.WaitSignal", "WaitSignal"),
    ("wow.command.SignalType", "SignalType"),
    ("wow.event.DomainEvent", "DomainEvent"),
    ("wow.event.DomainEventStream", "DomainEventStream"),
    ("wow.event.StateEvent", "StateEvent"),
    ("wow.messaging.FunctionInfo", "FunctionInfo"),
    ("wow.messaging.FunctionKind", "FunctionKind"),
    ("wow.modeling.AggregateId", "AggregateId"),
    ("wow.modeling.OwnerId", "OwnerId"),
    ("wow.query.Condition", "Condition"),
    ("wow.query.ConditionOptions", "ConditionOptions"),
    ("wow.query.Operator", "Operator"),
    ("wow.query.Sort", "Sort"),
    ("wow.query.SortDirection", "SortDirection"),
    ("wow.query.Pagination", "Pagination"),
    ("wow.query.PagedQuery", "PagedQuery"),
    ("wow.query.PagedList", "PagedList"),
    ("wow.query.ListQuery", "ListQuery"),
    ("wow.query.SingleQuery", "SingleQuery"),
    ("wow.query.Projection", "Projection"),
    ("wow.snapshot.Snapshot", "Snapshot"),
    ("wow.snapshot.MaterializedSnapshot", "MaterializedSnapshot"),
  ])
});

pub fn lookup(schema_key: &str) -> Option<&'static str> {
  WOW_TYPE_MAPPING.get(schema_key).copied()
}
