use super::ui;
use crate::core::export;
use crate::core::project::Projection;
use crate::core::session::Session;
use anyhow::Result;
use std::path::Path;

/// Writes the aggregated rate tables as a spreadsheet covering the full
/// requested range.
pub fn run(session: &Session, output: &Path) -> Result<()> {
    let projection = Projection::for_export(&session.rates, &session.selection, session.requested());

    let spinner = ui::new_spinner("Writing workbook...");
    let result = export::write_to_path(&projection, output);
    spinner.finish_and_clear();
    result?;

    println!(
        "Exported {} rows to {}",
        projection.rows.len(),
        ui::style_text(&output.display().to_string(), ui::StyleType::Success)
    );
    Ok(())
}
