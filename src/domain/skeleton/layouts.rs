use std::iter;

use super::entities::{
  BlockShape, Dimension, SkeletonBlock, SkeletonCard, SkeletonLayout, SkeletonRow,
};

pub const JOBS_LIST_ROWS: usize = 6;
pub const INVOICING_TABLE_ROWS: usize = 5;
const INVOICING_STAT_CARDS: usize = 3;

/// Page header: title, subtitle and a primary action.
fn page_header(title_width: u16) -> SkeletonRow {
  SkeletonRow::new(vec![
    SkeletonBlock::heading(Dimension::Px(title_width)),
    SkeletonBlock::text(Dimension::Px(280)),
    SkeletonBlock::button(132),
  ])
}

fn stat_card() -> SkeletonCard {
  SkeletonCard {
    header: vec![SkeletonBlock::text(Dimension::Percent(50))],
    rows: vec![
      SkeletonRow::new(vec![SkeletonBlock::heading(Dimension::Percent(70))]),
      SkeletonRow::new(vec![SkeletonBlock::text(Dimension::Percent(40))]),
    ],
    span: 1,
  }
}

/// Number, client, property, amount, status.
fn invoice_table_row() -> SkeletonRow {
  SkeletonRow::new(vec![
    SkeletonBlock::text(Dimension::Px(88)),
    SkeletonBlock::text(Dimension::Percent(22)),
    SkeletonBlock::text(Dimension::Percent(30)),
    SkeletonBlock::text(Dimension::Px(96)),
    SkeletonBlock::badge(),
  ])
}

/// Avatar, reference and address stacked, valuer, status badge.
fn job_row() -> SkeletonRow {
  SkeletonRow::new(vec![
    SkeletonBlock::avatar(40),
    SkeletonBlock::text(Dimension::Percent(35)),
    SkeletonBlock::text(Dimension::Percent(55)),
    SkeletonBlock::text(Dimension::Px(120)),
    SkeletonBlock::badge(),
  ])
}

/// Placeholder for the invoicing list: three stat cards above the table.
pub fn invoicing_list() -> SkeletonLayout {
  let mut cards: Vec<SkeletonCard> = iter::repeat_with(stat_card)
    .take(INVOICING_STAT_CARDS)
    .collect();

  let mut table_rows = Vec::with_capacity(INVOICING_TABLE_ROWS + 1);
  table_rows.push(SkeletonRow::new(vec![
    SkeletonBlock::new(BlockShape::Panel, Dimension::Full, Dimension::Px(36)),
  ]));
  table_rows.extend(iter::repeat_with(invoice_table_row).take(INVOICING_TABLE_ROWS));

  cards.push(SkeletonCard {
    header: vec![
      SkeletonBlock::heading(Dimension::Px(160)),
      SkeletonBlock::text(Dimension::Px(220)),
    ],
    rows: table_rows,
    span: INVOICING_STAT_CARDS as u8,
  });

  SkeletonLayout {
    name: "invoicing-list",
    header: page_header(180),
    grid_columns: INVOICING_STAT_CARDS as u8,
    cards,
  }
}

/// Placeholder for the jobs list: a single card of six job rows.
pub fn jobs_list() -> SkeletonLayout {
  let rows: Vec<SkeletonRow> = iter::repeat_with(job_row).take(JOBS_LIST_ROWS).collect();

  SkeletonLayout {
    name: "jobs-list",
    header: page_header(120),
    grid_columns: 1,
    cards: vec![SkeletonCard {
      header: vec![
        SkeletonBlock::heading(Dimension::Px(140)),
        SkeletonBlock::button(96),
      ],
      rows,
      span: 1,
    }],
  }
}
