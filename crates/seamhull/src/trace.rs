//! Append-only, replayable log of the geometric constructs a hull build
//! produces.
//!
//! The engine writes through two patterns: `record(.., Permanent)` for
//! durable parts of the answer and `record(.., Transient)` for search
//! candidates that exist for exactly one frame, plus `retire` to cancel a
//! previously permanent item (merged children). Replaying the entries
//! `[0, k)` yields the renderable state at frame `k`; this is the contract
//! the external renderer scrubs against.

use crate::geom::{Edge, Point};
use crate::polygon::Polygon;

/// Anything the renderer boundary can draw.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Drawable {
    Point(Point),
    Edge(Edge),
    Polygon(Polygon),
}

impl From<Point> for Drawable {
    fn from(p: Point) -> Self {
        Drawable::Point(p)
    }
}

impl From<Edge> for Drawable {
    fn from(e: Edge) -> Self {
        Drawable::Edge(e)
    }
}

impl From<Polygon> for Drawable {
    fn from(p: Polygon) -> Self {
        Drawable::Polygon(p)
    }
}

impl From<&Polygon> for Drawable {
    fn from(p: &Polygon) -> Self {
        Drawable::Polygon(p.clone())
    }
}

/// Whether an entry adds its item to the live set or cancels an earlier add.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Mark {
    Add,
    Remove,
}

/// How long a recorded item is meant to survive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    /// Part of the final answer until explicitly retired.
    Permanent,
    /// Visible for a single frame: the add is paired with an immediate
    /// removal entry.
    Transient,
}

/// One frame of the log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceEntry {
    pub item: Drawable,
    pub mark: Mark,
}

/// Ordered, append-only record of a hull build. Entries are never reordered
/// or deleted; "undo" during playback is just replaying a shorter prefix.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Append an item. `Transient` pairs the add with an immediate removal,
    /// so the item is live only while scrubbing past this frame.
    pub fn record(&mut self, item: impl Into<Drawable>, persistence: Persistence) {
        let item = item.into();
        match persistence {
            Persistence::Permanent => self.entries.push(TraceEntry {
                item,
                mark: Mark::Add,
            }),
            Persistence::Transient => {
                self.entries.push(TraceEntry {
                    item: item.clone(),
                    mark: Mark::Add,
                });
                self.entries.push(TraceEntry {
                    item,
                    mark: Mark::Remove,
                });
            }
        }
    }

    /// Cancel a previously permanent item (a merged child polygon).
    pub fn retire(&mut self, item: impl Into<Drawable>) {
        self.entries.push(TraceEntry {
            item: item.into(),
            mark: Mark::Remove,
        });
    }

    /// Live drawables after replaying the first `frame` entries. A removal
    /// cancels the most recent live add of an equal item.
    pub fn snapshot(&self, frame: usize) -> Vec<Drawable> {
        let upto = frame.min(self.entries.len());
        let mut live: Vec<Drawable> = Vec::new();
        for entry in &self.entries[..upto] {
            match entry.mark {
                Mark::Add => live.push(entry.item.clone()),
                Mark::Remove => {
                    if let Some(pos) = live.iter().rposition(|d| *d == entry.item) {
                        live.remove(pos);
                    }
                }
            }
        }
        live
    }

    /// State after the full replay: exactly the durable result.
    pub fn final_state(&self) -> Vec<Drawable> {
        self.snapshot(self.entries.len())
    }
}
