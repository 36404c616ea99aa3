use serde::Serialize;

/// CSS length of a placeholder block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Dimension {
  Px(u16),
  Percent(u8),
  Full,
}

impl From<Dimension> for String {
  fn from(dimension: Dimension) -> Self {
    match dimension {
      Dimension::Px(px) => format!("{}px", px),
      Dimension::Percent(pct) => format!("{}%", pct.min(100)),
      Dimension::Full => "100%".to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockShape {
  Text,
  Heading,
  Avatar,
  Button,
  Badge,
  Panel,
}

/// A single neutral placeholder shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkeletonBlock {
  pub shape: BlockShape,
  pub width: Dimension,
  pub height: Dimension,
}

impl SkeletonBlock {
  pub const fn new(shape: BlockShape, width: Dimension, height: Dimension) -> Self {
    Self {
      shape,
      width,
      height,
    }
  }

  pub const fn text(width: Dimension) -> Self {
    Self::new(BlockShape::Text, width, Dimension::Px(16))
  }

  pub const fn heading(width: Dimension) -> Self {
    Self::new(BlockShape::Heading, width, Dimension::Px(32))
  }

  pub const fn avatar(size: u16) -> Self {
    Self::new(BlockShape::Avatar, Dimension::Px(size), Dimension::Px(size))
  }

  pub const fn button(width: u16) -> Self {
    Self::new(BlockShape::Button, Dimension::Px(width), Dimension::Px(40))
  }

  pub const fn badge() -> Self {
    Self::new(BlockShape::Badge, Dimension::Px(72), Dimension::Px(24))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkeletonRow {
  pub blocks: Vec<SkeletonBlock>,
}

impl SkeletonRow {
  pub fn new(blocks: Vec<SkeletonBlock>) -> Self {
    Self { blocks }
  }
}

/// A card outline: header blocks above a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkeletonCard {
  pub header: Vec<SkeletonBlock>,
  pub rows: Vec<SkeletonRow>,
  /// Number of grid columns the card spans.
  pub span: u8,
}

/// Full placeholder page: a header row followed by a grid of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkeletonLayout {
  pub name: &'static str,
  pub header: SkeletonRow,
  pub grid_columns: u8,
  pub cards: Vec<SkeletonCard>,
}

impl SkeletonLayout {
  /// Rows across all cards.
  pub fn row_count(&self) -> usize {
    self.cards.iter().map(|card| card.rows.len()).sum()
  }

  pub fn block_count(&self) -> usize {
    self.header.blocks.len()
      + self
        .cards
        .iter()
        .map(|card| {
          card.header.len() + card.rows.iter().map(|r| r.blocks.len()).sum::<usize>()
        })
        .sum::<usize>()
  }
}
