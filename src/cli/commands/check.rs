//! Check command: report whether the external PDF tools are installed.

use console::style;

use crate::extract::{PdfTextExtractor, REQUIRED_TOOLS};

/// Check PDF tool availability.
pub async fn cmd_check() -> anyhow::Result<()> {
    println!("\n{}", style("PDF Tool Status").bold());
    println!("{}", "-".repeat(50));

    let tools = PdfTextExtractor::check_tools();
    let mut all_found = true;

    for (tool, available) in &tools {
        let status = if *available {
            style("✓ found").green()
        } else {
            all_found = false;
            style("✗ not found").red()
        };
        println!("  {:<15} {}", tool, status);
    }

    if all_found {
        println!("\n{} All required tools are installed", style("✓").green());
    } else {
        println!(
            "\n{} Missing tools; install poppler-utils to get {}",
            style("✗").red(),
            REQUIRED_TOOLS.join(" and ")
        );
    }

    Ok(())
}
