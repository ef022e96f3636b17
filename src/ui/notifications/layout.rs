// SPDX-License-Identifier: MPL-2.0
//! Grouping of notifications into the six anchored rails.

use super::notification::{Notification, Position};
use crate::ui::design_tokens::spacing;
use iced::alignment::{Horizontal, Vertical};
use iced::Padding;

/// Distance a toast travels while sliding in or out.
pub const SLIDE_DISTANCE: f32 = spacing::LG;

/// Notifications sharing one screen anchor, in insertion order.
#[derive(Debug, Clone)]
pub struct Rail {
    pub position: Position,
    pub notifications: Vec<Notification>,
}

/// Splits records into one rail per non-empty position.
///
/// Rails come out in [`Position::ALL`] order; records keep their relative
/// order within a rail.
#[must_use]
pub fn group_by_position(records: &[Notification]) -> Vec<Rail> {
    Position::ALL
        .into_iter()
        .filter_map(|position| {
            let notifications: Vec<Notification> = records
                .iter()
                .filter(|n| n.position() == position)
                .cloned()
                .collect();
            (!notifications.is_empty()).then_some(Rail {
                position,
                notifications,
            })
        })
        .collect()
}

/// Screen alignment of a rail anchored at `position`.
#[must_use]
pub fn alignment(position: Position) -> (Horizontal, Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => Horizontal::Center,
        Position::TopRight | Position::BottomRight => Horizontal::Right,
    };
    let vertical = if position.is_top() {
        Vertical::Top
    } else {
        Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Padding that slides a toast between its screen edge and its resting place.
///
/// At `presence == 1.0` the toast rests [`SLIDE_DISTANCE`] away from the edge
/// its rail is anchored to; at `0.0` it sits on that edge. The total padding
/// is constant, so siblings in the rail do not move.
#[must_use]
pub fn slide_padding(position: Position, presence: f32) -> Padding {
    let presence = presence.clamp(0.0, 1.0);
    let outer = SLIDE_DISTANCE * presence;
    let inner = SLIDE_DISTANCE - outer;
    let (top, bottom) = if position.is_top() {
        (outer, inner)
    } else {
        (inner, outer)
    };
    Padding {
        top,
        right: 0.0,
        bottom,
        left: 0.0,
    }
}
