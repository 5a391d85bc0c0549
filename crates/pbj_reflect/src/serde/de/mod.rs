// -----------------------------------------------------------------------------
// Modules

mod enum_visitor;

// -----------------------------------------------------------------------------
// Exports

pub use enum_visitor::deserialize_enum;
