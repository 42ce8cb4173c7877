//! Renders a small roster to stdout: one auto-adjusting column, two
//! fixed-width columns that wrap long text, section headers, and dividers.

use anyhow::Result;
use textgrid::{Column, SymbolKind, Table};

fn main() -> Result<()> {
    let mut table = Table::new();
    table.set_margin_size(1);
    table.set_symbol(SymbolKind::Vertical, '|');
    table.set_symbol(SymbolKind::Horizontal, '-');
    table.set_symbol(SymbolKind::Crossing, '+');

    table.add_column(Column::auto("Name").center());
    table.add_column(Column::fixed("Age", 3).center());
    table.add_column(Column::fixed("Description", 48).center());

    table.add_divider();
    table.add_header("Morning shift");
    table.add_divider();
    table.add_column_headers();
    table.add_divider();
    table.add_row([
        "Jhon",
        "12",
        "On the other hand, we denounce with righteous indignation and \
         dislike men who are so beguiled and demoralized by the charms of \
         pleasure of the moment, so blinded by desire, that they cannot \
         foresee the pain and trouble that are bound to ensue.",
    ])?;
    table.add_divider();
    table.add_header("Evening shift");
    table.add_divider();
    table.add_row([
        "Tabita",
        "24",
        "At vero eos et accusamus et iusto odio dignissimos ducimus, qui \
         blanditiis praesentium voluptatum deleniti atque corrupti, quos \
         dolores et quas molestias excepturi sint, obcaecati cupiditate non \
         provident, similique sunt in culpa.",
    ])?;
    table.add_divider();

    print!("{}", table.render());
    Ok(())
}
