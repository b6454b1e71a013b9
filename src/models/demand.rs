//! Demand lines are the flat "we need N of this part" records the expander
//! produces and the stock checker consumes.

use crate::models::frame::{ComponentKind, Dimension, FrameType};
use getset::CopyGetters;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::fmt;

/// Identifies one physical part: its kind, its profile family (crossbars have
/// none), and its length. This is the key demand is summed under and the key
/// inventory is looked up by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get_copy = "pub")]
pub struct ComponentKey {
    kind: ComponentKind,
    frame_type: Option<FrameType>,
    length: Dimension,
}

impl ComponentKey {
    pub fn new(kind: ComponentKind, frame_type: Option<FrameType>, length: Dimension) -> Self {
        Self {
            kind,
            frame_type,
            length,
        }
    }

    /// Key for a stretcher bar of the given profile.
    pub fn stretcher(frame_type: FrameType, length: Dimension) -> Self {
        Self::new(ComponentKind::Stretcher, Some(frame_type), length)
    }

    /// Key for a crossbar. Crossbars are shared between profiles.
    pub fn crossbar(length: Dimension) -> Self {
        Self::new(ComponentKind::Crossbar, None, length)
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frame_type {
            Some(ty) => write!(f, "{} {} {}cm", ty, self.kind, self.length),
            None => write!(f, "{} {}cm", self.kind, self.length),
        }
    }
}

/// A quantity of one part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get_copy = "pub")]
pub struct DemandLine {
    key: ComponentKey,
    quantity: u64,
}

impl DemandLine {
    pub fn new(key: ComponentKey, quantity: u64) -> Self {
        Self {
            key,
            quantity,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.key.kind()
    }

    pub fn frame_type(&self) -> Option<FrameType> {
        self.key.frame_type()
    }

    pub fn length(&self) -> Dimension {
        self.key.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        let key = ComponentKey::stretcher(FrameType::Thick, 100);
        assert_eq!(key.kind(), ComponentKind::Stretcher);
        assert_eq!(key.frame_type(), Some(FrameType::Thick));
        assert_eq!(key.length(), 100);
        assert_eq!(format!("{}", key), "THICK stretcher 100cm");

        let key = ComponentKey::crossbar(70);
        assert_eq!(key.frame_type(), None);
        assert_eq!(format!("{}", key), "crossbar 70cm");
    }

    #[test]
    fn orders_stretchers_first() {
        let mut keys = vec![
            ComponentKey::crossbar(50),
            ComponentKey::stretcher(FrameType::Thick, 60),
            ComponentKey::stretcher(FrameType::Thin, 80),
            ComponentKey::stretcher(FrameType::Thin, 40),
        ];
        keys.sort();
        assert_eq!(keys, vec![
            ComponentKey::stretcher(FrameType::Thin, 40),
            ComponentKey::stretcher(FrameType::Thin, 80),
            ComponentKey::stretcher(FrameType::Thick, 60),
            ComponentKey::crossbar(50),
        ]);
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes() {
        let line = DemandLine::new(ComponentKey::stretcher(FrameType::Thick, 100), 10);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"key":{"kind":"STRETCHER","frame_type":"THICK","length":100},"quantity":10}"#);
        let parsed: DemandLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);

        let crossbar = DemandLine::new(ComponentKey::crossbar(70), 2);
        let parsed: DemandLine = serde_json::from_str(&serde_json::to_string(&crossbar).unwrap()).unwrap();
        assert_eq!(parsed.frame_type(), None);
        assert_eq!(parsed, crossbar);
    }
}
