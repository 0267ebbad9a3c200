//! Validate every track of the repository

use anyhow::Context as _;

use ctf::context::Context;
use ctf::core::services::validate_repository;
use ctf::core::validators::select_validators;
use ctf::output::{OutputMode, SchemaResult, ValidationResult};

/// Run the JSON Schema gate, then every enabled validator
///
/// Exits with status 1 when a schema violation or a validation error is found.
pub fn validate(ctx: &Context, skip_schemas: bool, mode: OutputMode) -> anyhow::Result<()> {
    if skip_schemas {
        log::info!("Skipping JSON Schema validation");
    } else {
        let gate = ctx.schema_gate().context("failed to load JSON schemas")?;
        let violations = gate
            .check_repository(ctx.root())
            .context("failed to read track documents")?;
        if !violations.is_empty() {
            SchemaResult::new(violations).render(mode);
            std::process::exit(1);
        }
    }

    let mut validators = select_validators(&ctx.config().validate.skip);
    let report = validate_repository(&ctx.repository(), &mut validators)
        .context("failed to load tracks")?;

    let result = ValidationResult::from(report);
    result.render(mode);

    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
