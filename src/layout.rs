//! Parser for layout descriptions.
//!
//! ```text
//! 5
//! DESTROYER;1*1;1*2
//! SUBMARINE;3*1;4*1;5*1
//! ```
//!
//! The first line is the side `N` of an `N × N` board. Every following
//! non-blank line is one ship: a kind name, then `row*col` pairs (1-based),
//! separated by `;`.

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::common::{BoardError, Coord};
use crate::config::{is_valid_board_size, layout_ship_count_range};
use crate::ship::ShipKind;

const FIELD_SEPARATOR: char = ';';
const PAIR_SEPARATOR: char = '*';

/// One ship line, kind resolved and coordinates converted to 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipSpec {
    pub kind: ShipKind,
    pub coords: Vec<Coord>,
}

/// A description whose header and ship count have been checked.
///
/// Ship lines are parsed lazily by [`LayoutDescription::ships`] so that
/// errors surface in file order, interleaved with placement.
#[derive(Debug, Clone)]
pub struct LayoutDescription<'a> {
    size: usize,
    ship_lines: Vec<(usize, &'a str)>,
}

impl<'a> LayoutDescription<'a> {
    pub fn parse(text: &'a str) -> Result<Self, BoardError> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (line_no, header) = lines.next().ok_or_else(|| BoardError::MalformedLayout {
            line: 1,
            reason: "missing board size".to_string(),
        })?;
        let header = header.trim();
        let size: usize = header.parse().map_err(|_| BoardError::MalformedLayout {
            line: line_no,
            reason: format!("board size `{}` is not a number", header),
        })?;
        if !is_valid_board_size(size) {
            return Err(BoardError::InvalidDimension {
                width: size,
                height: size,
            });
        }

        let ship_lines: Vec<(usize, &str)> = lines.filter(|(_, l)| !l.trim().is_empty()).collect();
        let allowed = layout_ship_count_range(size);
        if !allowed.contains(&ship_lines.len()) {
            return Err(BoardError::InvalidShipCount {
                count: ship_lines.len(),
                min: *allowed.start(),
                max: *allowed.end(),
            });
        }

        Ok(Self { size, ship_lines })
    }

    /// Side length of the square board.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ship_count(&self) -> usize {
        self.ship_lines.len()
    }

    /// Ship lines in file order, paired with their 1-based ship ordinal.
    pub fn ships(&self) -> impl Iterator<Item = (usize, Result<ShipSpec, BoardError>)> + '_ {
        self.ship_lines
            .iter()
            .enumerate()
            .map(|(i, &(line_no, line))| (i + 1, parse_ship_line(line, i + 1, line_no)))
    }
}

/// Parse `<kind>;<row>*<col>;...` into a [`ShipSpec`].
///
/// Trailing empty fields are ignored; an empty field anywhere else is a
/// syntax error. A coordinate below 1 cannot lie on the board, so it is
/// reported as an invalid ship rather than a syntax error.
pub fn parse_ship_line(line: &str, ship_index: usize, line_no: usize) -> Result<ShipSpec, BoardError> {
    let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let mut fields = fields.into_iter();

    let kind: ShipKind = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| BoardError::MalformedLayout {
            line: line_no,
            reason: "missing ship kind".to_string(),
        })?
        .parse()?;

    let mut coords = Vec::with_capacity(kind.length());
    for field in fields {
        if field.is_empty() {
            return Err(BoardError::MalformedLayout {
                line: line_no,
                reason: "empty coordinate field".to_string(),
            });
        }
        let (row, col) = field
            .split_once(PAIR_SEPARATOR)
            .ok_or_else(|| BoardError::MalformedLayout {
                line: line_no,
                reason: format!("`{}` is not a row*col pair", field),
            })?;
        let row = to_zero_based(parse_one_based(row, line_no)?, ship_index)?;
        let col = to_zero_based(parse_one_based(col, line_no)?, ship_index)?;
        coords.push(Coord::new(row, col));
    }

    Ok(ShipSpec { kind, coords })
}

/// Values below 1, or too large for the platform, cannot lie on the board.
fn to_zero_based(value: i64, ship_index: usize) -> Result<usize, BoardError> {
    value
        .checked_sub(1)
        .filter(|v| *v >= 0)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or(BoardError::InvalidShipShape { ship_index })
}

fn parse_one_based(value: &str, line_no: usize) -> Result<i64, BoardError> {
    let value = value.trim();
    value.parse().map_err(|_| BoardError::MalformedLayout {
        line: line_no,
        reason: format!("coordinate `{}` is not a number", value),
    })
}
