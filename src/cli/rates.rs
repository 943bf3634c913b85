use super::ui;
use crate::core::project::Projection;
use crate::core::session::Session;
use anyhow::Result;

/// Renders the aggregated rate tables for the current selection.
pub fn run(session: &Session) -> Result<()> {
    let projection = Projection::for_display(&session.rates, &session.selection);

    let mut table = ui::new_styled_table();
    table.set_header(
        projection
            .header
            .iter()
            .map(|h| ui::header_cell(h))
            .collect::<Vec<_>>(),
    );
    for row in &projection.rows {
        table.add_row(row.iter().map(ui::body_cell).collect::<Vec<_>>());
    }

    println!("{table}");

    // Failed dates stay out of the table; mention them so an absent row is
    // distinguishable from a never-requested one.
    let failed = session.rates.failures().len();
    if failed > 0 {
        let requested = session.requested().len();
        println!(
            "{}",
            ui::style_text(
                &format!("{failed} of {requested} requested dates unavailable"),
                ui::StyleType::Subtle
            )
        );
    }

    Ok(())
}
