//! # quorum-template — Field Template Compiler
//!
//! Turns an organization-editable field template into runtime artifacts:
//! a validation schema, a default-value map, and a render plan.
//!
//! ## Pipeline
//!
//! ```text
//! FieldTemplate ──compile()──▶ CompiledTemplate
//!                                ├── CompiledSchema   (fail-fast validation)
//!                                ├── defaults         (form initialisation)
//!                                └── RenderPlan       (widgets, pairing, asterisks)
//! ```
//!
//! ## Design Decision
//!
//! Per-kind validation is a tagged-variant dispatch: one `FieldValidator`
//! variant per field kind, each carrying its own validate logic, selected by
//! a lookup keyed on the kind. A data-described conditional chain would grow
//! unboundedly as kinds are added; the enum forces every consumer to handle
//! a new kind at compile time.
//!
//! Requiredness has a single source of truth: [`compiler::effective_required`]
//! feeds BOTH the compiled schema and the render plan's asterisk flag. The
//! two surfaces cannot drift apart, and a test pins the equality.

pub mod compiler;
pub mod definition;
pub mod render;

pub use compiler::{
    compile, effective_required, CompiledField, CompiledSchema, CompiledTemplate,
    FieldValidator, ALWAYS_OPTIONAL,
};
pub use definition::{FieldDefinition, FieldTemplate};
pub use render::{DateWindow, RenderField, RenderPlan, WidgetKind};
