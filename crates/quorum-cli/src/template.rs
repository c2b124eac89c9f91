//! # Template Subcommand
//!
//! Loads a field template from a YAML or JSON file, compiles it, and
//! reports the compiled field table or the compile error.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use quorum_core::FieldClass;
use quorum_template::{compile, FieldTemplate, WidgetKind};

/// Arguments for the template subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Path to the template file (YAML or JSON).
    #[arg(long)]
    pub file: PathBuf,
}

/// Compile the template file and print the compiled field table.
pub fn run(args: &TemplateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    // YAML is a superset of JSON, so one parser covers both spellings.
    let template: FieldTemplate = serde_yaml::from_str(&text)
        .with_context(|| format!("parsing {}", args.file.display()))?;

    tracing::debug!(
        organization = %template.organization,
        category = %template.category,
        fields = template.fields.len(),
        "template loaded"
    );
    let compiled = compile(&template)
        .with_context(|| format!("compiling template for {}", template.organization))?;

    println!(
        "template for {} / {}: {} field(s)",
        template.organization,
        template.category,
        compiled.schema.fields.len()
    );
    for (field, render) in compiled
        .schema
        .fields
        .iter()
        .zip(&compiled.render_plan.fields)
    {
        let shard = match field.class {
            FieldClass::Standard(_) => "standard",
            FieldClass::Sensitive(_) => "sensitive",
            FieldClass::Custom => "custom",
        };
        println!(
            "  {:<28} {:<9} {:<9} required={:<5} widget={} {}",
            field.id,
            field.kind,
            shard,
            field.required,
            widget_name(&render.widget),
            if render.paired_with_next { "(paired)" } else { "" }
        );
    }
    Ok(())
}

fn widget_name(widget: &WidgetKind) -> &'static str {
    match widget {
        WidgetKind::Input(_) => "input",
        WidgetKind::PositionPicker { .. } => "position-picker",
        WidgetKind::Calendar { .. } => "calendar",
        WidgetKind::ReportsTo => "reports-to",
        WidgetKind::Phone => "phone",
        WidgetKind::LongText => "long-text",
    }
}
