use colored::Colorize;
use comfy_table::{Cell, Table};

use ledgerlint::error::Result;
use ledgerlint::taxonomy::CategoryTaxonomy;

/// Print the category registry the budgeting collaborators read from:
/// every name in display order with its direction.
pub fn run() -> Result<()> {
    let taxonomy = CategoryTaxonomy::standard();

    let mut table = Table::new();
    table.set_header(vec!["Category", "Direction"]);
    for name in taxonomy.all_categories() {
        let direction = if taxonomy.income_categories().contains(name) {
            Cell::new("income".green())
        } else if taxonomy.expense_categories().contains(name) {
            Cell::new("expense".red())
        } else {
            Cell::new("either")
        };
        table.add_row(vec![Cell::new(name), direction]);
    }
    println!("Categories\n{table}");
    Ok(())
}
