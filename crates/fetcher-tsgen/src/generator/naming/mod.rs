pub mod identifiers;
pub mod module_info;
