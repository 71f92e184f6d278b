//! Grid layout resolution.
//!
//! Turns the positional merge markers of a [`Table`] into the spans and
//! styles of the cells that are actually drawn:
//!
//! - A [`MergeMarker::Right`] column is folded into the next rendered cell
//!   of its row, so a cell spans itself plus the run of `>` columns
//!   directly before it.
//! - A [`MergeMarker::Up`] column is folded into the cell above, so a cell
//!   spans itself plus the run of `~` columns directly below it.
//! - Cells inherit the style of the active formatting row: the first
//!   non-merge column at or after their own index. The cell's own style is
//!   layered over the inherited one.
//!
//! [`resolve_cell_span`] answers for a single cell; [`layout`] resolves the
//! whole table in one pass.

use serde::Serialize;

use crate::error::{Result, TableError};
use crate::model::{Column, MergeMarker, Row, RowKind, Style, Table};

/// Resolved geometry and style of a rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSpan {
    /// Number of rows covered, at least 1.
    pub rowspan: usize,
    /// Number of columns covered, at least 1.
    pub colspan: usize,
    /// Effective style, if any.
    pub style: Option<Style>,
}

/// A cell that is drawn, with its resolved span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell<'a> {
    /// Column index within the source row.
    pub column: usize,
    /// The source column.
    pub content: &'a Column,
    /// Resolved span and style.
    pub span: CellSpan,
}

/// A visible row with its drawn cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow<'a> {
    /// Row index within the source table.
    pub index: usize,
    /// Role of the row.
    pub kind: RowKind,
    /// Drawn cells, left to right.
    pub cells: Vec<RenderedCell<'a>>,
}

/// Resolves the span and style of the cell at (`row`, `column`).
///
/// # Errors
///
/// Returns [`TableError::RowOutOfRange`] or [`TableError::ColumnOutOfRange`]
/// for positions outside the table, and [`TableError::MergedCell`] when the
/// position holds a merge marker, which is never drawn.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Column, Row, Table, resolve_cell_span};
///
/// let table = Table::new(vec![
///     Row::record(vec![Column::merge_right(), Column::text("wide"), Column::text("a")]),
///     Row::record(vec![Column::text("b"), Column::text("c"), Column::merge_up()]),
/// ]);
///
/// let span = resolve_cell_span(&table, 0, 1).unwrap();
/// assert_eq!((span.rowspan, span.colspan), (1, 2));
///
/// let span = resolve_cell_span(&table, 0, 2).unwrap();
/// assert_eq!((span.rowspan, span.colspan), (2, 1));
///
/// assert!(resolve_cell_span(&table, 0, 0).is_err());
/// assert!(resolve_cell_span(&table, 2, 0).is_err());
/// ```
pub fn resolve_cell_span(table: &Table, row: usize, column: usize) -> Result<CellSpan> {
    let source = table.row(row).ok_or(TableError::RowOutOfRange {
        row,
        rows: table.rows.len(),
    })?;
    let cell = source
        .columns
        .get(column)
        .ok_or(TableError::ColumnOutOfRange {
            row,
            column,
            columns: source.len(),
        })?;
    if cell.is_merge() {
        return Err(TableError::MergedCell { row, column });
    }

    let formatting = table.rows[..row].iter().rev().find(|r| r.is_formatting());
    Ok(span_of(&table.rows, row, column, cell, formatting))
}

/// Resolves every visible row of the table.
///
/// Formatting rows produce no output; each one becomes the style context of
/// the rows after it. The result agrees cell for cell with
/// [`resolve_cell_span`].
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Align, Column, Row, Style, Table, layout};
///
/// let table = Table::new(vec![
///     Row::formatting(vec![Column::styled(Style::new().align(Align::Right))]),
///     Row::record(vec![Column::text("1")]),
/// ]);
/// let rows = layout(&table);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].cells[0].span.style, Some(Style::new().align(Align::Right)));
/// ```
#[must_use]
pub fn layout(table: &Table) -> Vec<RenderedRow<'_>> {
    let (_, rendered) = table.rows.iter().enumerate().fold(
        (None::<&Row>, Vec::with_capacity(table.rows.len())),
        |(formatting, mut rendered), (index, row)| {
            if row.is_formatting() {
                return (Some(row), rendered);
            }
            let cells = row
                .columns
                .iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_merge())
                .map(|(column, cell)| RenderedCell {
                    column,
                    content: cell,
                    span: span_of(&table.rows, index, column, cell, formatting),
                })
                .collect();
            rendered.push(RenderedRow {
                index,
                kind: row.kind,
                cells,
            });
            (formatting, rendered)
        },
    );
    rendered
}

fn span_of(
    rows: &[Row],
    row: usize,
    column: usize,
    cell: &Column,
    formatting: Option<&Row>,
) -> CellSpan {
    CellSpan {
        rowspan: rowspan(rows, row, column),
        colspan: colspan(&rows[row], column),
        style: effective_style(cell, inherited_style(formatting, column)),
    }
}

/// Counts the run of `>` columns directly before `column`. A `~` column
/// ends the run like any other cell.
fn colspan(row: &Row, column: usize) -> usize {
    1 + row.columns[..column]
        .iter()
        .rev()
        .take_while(|c| c.merge == Some(MergeMarker::Right))
        .count()
}

fn rowspan(rows: &[Row], row: usize, column: usize) -> usize {
    1 + rows[row + 1..]
        .iter()
        .take_while(|r| {
            r.columns
                .get(column)
                .is_some_and(|c| c.merge == Some(MergeMarker::Up))
        })
        .count()
}

fn inherited_style(formatting: Option<&Row>, column: usize) -> Option<&Style> {
    formatting?
        .columns
        .iter()
        .skip(column)
        .find(|c| !c.is_merge())?
        .style
        .as_ref()
}

fn effective_style(cell: &Column, inherited: Option<&Style>) -> Option<Style> {
    match (&cell.style, inherited) {
        (Some(own), Some(base)) => Some(own.over(base)),
        (Some(own), None) => Some(own.clone()),
        (None, Some(base)) => Some(base.clone()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Align;

    fn text(s: &str) -> Column {
        Column::text(s)
    }

    #[test]
    fn consecutive_merge_right_accumulate() {
        let table = Table::new(vec![Row::header(vec![
            Column::merge_right(),
            Column::merge_right(),
            Column::merge_right(),
            text("title"),
        ])]);
        let span = resolve_cell_span(&table, 0, 3).unwrap();
        assert_eq!(span.colspan, 4);
        assert_eq!(span.rowspan, 1);
    }

    #[test]
    fn merge_right_run_is_broken_by_a_cell() {
        let table = Table::new(vec![Row::record(vec![
            Column::merge_right(),
            text("a"),
            text("b"),
        ])]);
        assert_eq!(resolve_cell_span(&table, 0, 1).unwrap().colspan, 2);
        assert_eq!(resolve_cell_span(&table, 0, 2).unwrap().colspan, 1);
    }

    #[test]
    fn merge_right_run_is_broken_by_merge_up() {
        let table = Table::new(vec![
            Row::record(vec![text("a"), text("b"), text("c")]),
            Row::record(vec![Column::merge_right(), Column::merge_up(), text("x")]),
        ]);
        assert_eq!(resolve_cell_span(&table, 1, 2).unwrap().colspan, 1);
        assert_eq!(resolve_cell_span(&table, 0, 1).unwrap().rowspan, 2);
    }

    #[test]
    fn merge_up_counts_until_first_other_cell() {
        let table = Table::new(vec![
            Row::record(vec![text("p")]),
            Row::record(vec![Column::merge_up()]),
            Row::record(vec![Column::merge_up()]),
            Row::record(vec![text("q")]),
            Row::record(vec![Column::merge_up()]),
        ]);
        assert_eq!(resolve_cell_span(&table, 0, 0).unwrap().rowspan, 3);
        assert_eq!(resolve_cell_span(&table, 3, 0).unwrap().rowspan, 2);
    }

    #[test]
    fn merge_up_stops_at_short_row() {
        let table = Table::new(vec![
            Row::record(vec![text("a"), text("b")]),
            Row::record(vec![text("c")]),
            Row::record(vec![text("d"), Column::merge_up()]),
        ]);
        assert_eq!(resolve_cell_span(&table, 0, 1).unwrap().rowspan, 1);
    }

    #[test]
    fn out_of_range_and_merged_positions_are_errors() {
        let table = Table::new(vec![Row::record(vec![text("a"), Column::merge_up()])]);
        assert!(matches!(
            resolve_cell_span(&table, 1, 0),
            Err(TableError::RowOutOfRange { row: 1, rows: 1 })
        ));
        assert!(matches!(
            resolve_cell_span(&table, 0, 2),
            Err(TableError::ColumnOutOfRange { column: 2, columns: 2, .. })
        ));
        assert!(matches!(
            resolve_cell_span(&table, 0, 1),
            Err(TableError::MergedCell { row: 0, column: 1 })
        ));
    }

    #[test]
    fn style_comes_from_first_non_merge_formatting_column() {
        let table = Table::new(vec![
            Row::formatting(vec![
                Column::merge_right(),
                Column::merge_right(),
                Column::styled(Style::new().bg_color("khaki")),
            ]),
            Row::record(vec![text("a"), text("b"), text("c")]),
        ]);
        for column in 0..3 {
            let span = resolve_cell_span(&table, 1, column).unwrap();
            assert_eq!(span.style, Some(Style::new().bg_color("khaki")));
        }
    }

    #[test]
    fn no_formatting_row_means_no_style() {
        let table = Table::new(vec![Row::record(vec![text("a")])]);
        assert_eq!(resolve_cell_span(&table, 0, 0).unwrap().style, None);
    }

    #[test]
    fn formatting_column_without_style_gives_none() {
        let table = Table::new(vec![
            Row::formatting(vec![Column::empty(), Column::styled(Style::new().width(40))]),
            Row::record(vec![text("a"), text("b")]),
        ]);
        assert_eq!(resolve_cell_span(&table, 1, 0).unwrap().style, None);
        assert_eq!(
            resolve_cell_span(&table, 1, 1).unwrap().style,
            Some(Style::new().width(40))
        );
    }

    #[test]
    fn own_style_layers_over_inherited() {
        let table = Table::new(vec![
            Row::formatting(vec![Column::styled(
                Style::new().align(Align::Left).width(240),
            )]),
            Row::record(vec![text("a").with_style(Style::new().bg_color("gold"))]),
        ]);
        assert_eq!(
            resolve_cell_span(&table, 1, 0).unwrap().style,
            Some(Style::new().bg_color("gold").align(Align::Left).width(240))
        );
    }

    #[test]
    fn later_formatting_row_replaces_context() {
        let table = Table::new(vec![
            Row::formatting(vec![Column::styled(Style::new().width(10))]),
            Row::record(vec![text("a")]),
            Row::formatting(vec![Column::styled(Style::new().width(20))]),
            Row::record(vec![text("b")]),
        ]);
        let rows = layout(&table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0].span.style, Some(Style::new().width(10)));
        assert_eq!(rows[1].cells[0].span.style, Some(Style::new().width(20)));
        assert_eq!(rows[1].index, 3);
    }

    #[test]
    fn layout_skips_merge_columns() {
        let table = Table::new(vec![
            Row::header(vec![Column::merge_right(), text("h")]),
            Row::record(vec![text("a"), text("b")]),
            Row::record(vec![Column::merge_up(), text("c")]),
        ]);
        let rows = layout(&table);
        assert_eq!(rows[0].cells.len(), 1);
        assert_eq!(rows[0].cells[0].column, 1);
        assert_eq!(rows[0].cells[0].span.colspan, 2);
        assert_eq!(rows[1].cells[0].span.rowspan, 2);
        assert_eq!(rows[2].cells.len(), 1);
        assert_eq!(rows[2].kind, RowKind::Record);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::model::proptest_tests::{arb_column, arb_table};
    use proptest::prelude::*;

    proptest! {
        /// Tests that without vertical merges and a trailing `>`, rendered
        /// colspans add up to the row width.
        #[test]
        fn colspans_sum_to_row_width(
            columns in proptest::collection::vec(arb_column(), 1..8),
            last in "[a-z]{1,4}",
        ) {
            let mut columns: Vec<Column> = columns
                .into_iter()
                .filter(|c| c.merge != Some(MergeMarker::Up))
                .collect();
            columns.push(Column::text(last));
            let width = columns.len();
            let table = Table::new(vec![Row::record(columns)]);

            let total: usize = (0..width)
                .filter_map(|column| resolve_cell_span(&table, 0, column).ok())
                .map(|span| span.colspan)
                .sum();
            prop_assert_eq!(total, width);
        }

        /// Tests that nothing in the last row spans downward.
        #[test]
        fn last_row_rowspan_is_one(table in arb_table()) {
            if let Some(last) = table.rows.len().checked_sub(1) {
                for column in 0..table.rows[last].len() {
                    if let Ok(span) = resolve_cell_span(&table, last, column) {
                        prop_assert_eq!(span.rowspan, 1);
                    }
                }
            }
        }

        /// Tests that the whole-table fold agrees with single-cell resolution.
        #[test]
        fn layout_matches_resolve_cell_span(table in arb_table()) {
            for row in layout(&table) {
                for cell in row.cells {
                    let span = resolve_cell_span(&table, row.index, cell.column)
                        .expect("rendered cells resolve");
                    prop_assert_eq!(span, cell.span);
                }
            }
        }

        /// Tests that every span is at least one by one.
        #[test]
        fn spans_are_positive(table in arb_table()) {
            for row in layout(&table) {
                for cell in row.cells {
                    prop_assert!(cell.span.rowspan >= 1);
                    prop_assert!(cell.span.colspan >= 1);
                }
            }
        }
    }
}
