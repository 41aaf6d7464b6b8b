//! Path filtering: which files and directories a scan may visit

mod filter_set;

pub use filter_set::{
    default_exclude_pattern, normalize_root, path_str, FilterRule, PathFilterSet, RuleKind,
    DEFAULT_EXCLUDED_DIRS,
};
