//! Row model.
//!
//! A row is a closed set of variants rather than a cell list with boolean
//! tags, so a divider can never carry cells and a section header always
//! carries exactly one text.

/// One horizontal record of a table.
///
/// A single logical insertion through [`Table::add_row`](crate::Table::add_row)
/// may produce several physical `Data` rows when a fixed-width column wraps
/// an oversized cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// An ordinary row: one cell per column, in column order.
    Data(Vec<String>),
    /// A horizontal rule. Renders as one unbroken bar at the table's outer
    /// edges and as per-column segments in the interior.
    Divider,
    /// A full-width centered annotation, distinct from the column-title row.
    SectionHeader(String),
}

impl Row {
    /// Returns the cells of a `Data` row.
    pub fn cells(&self) -> Option<&[String]> {
        match self {
            Row::Data(cells) => Some(cells),
            _ => None,
        }
    }

    /// Whether this row is a divider.
    pub fn is_divider(&self) -> bool {
        matches!(self, Row::Divider)
    }

    /// Whether this row is a section header.
    pub fn is_section_header(&self) -> bool {
        matches!(self, Row::SectionHeader(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_predicates() {
        assert!(Row::Divider.is_divider());
        assert!(Row::SectionHeader("x".into()).is_section_header());
        assert!(!Row::Data(vec![]).is_divider());
    }

    #[test]
    fn cells_only_on_data_rows() {
        let row = Row::Data(vec!["a".into(), "b".into()]);
        assert_eq!(row.cells(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(Row::Divider.cells(), None);
        assert_eq!(Row::SectionHeader("x".into()).cells(), None);
    }
}
