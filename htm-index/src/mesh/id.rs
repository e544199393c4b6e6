//! Trixel identifiers.
//!
//! A [`MeshId`] packs a base trixel and a path of quadrant digits into one
//! integer:
//!
//! ```text
//! name      N  0  1  2  3
//! bits      1 100 01 10 11      = 795
//!           ^ ^^^ ^^^^^^^^
//!           | |   one 2-bit digit per level
//!           | base index (S0..S3 = 0..3, N0..N3 = 4..7)
//!           leading 1 (every id >= 8)
//! ```
//!
//! A valid id therefore has an even bit length of `4 + 2·level`. Sorting ids
//! of one level sorts trixels along the mesh's space-filling order, and every
//! trixel's descendants at a deeper level form one contiguous id block.
//!
//! Values below 8 are never valid; [`MeshId::INVALID`] (0) is returned when a
//! point cannot be placed in the mesh.

use crate::constants::MAX_LEVEL;
use crate::{IndexError, IndexResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeshId(u64);

impl MeshId {
    /// Sentinel for "no trixel".
    pub const INVALID: MeshId = MeshId(0);

    /// Wraps a raw id without checking it; see [`MeshId::is_valid`].
    #[inline]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Wraps a raw id, rejecting values that are not a trixel.
    pub fn new(id: u64) -> IndexResult<Self> {
        let candidate = Self(id);
        if candidate.is_valid() {
            Ok(candidate)
        } else {
            Err(IndexError::invalid_name(
                id.to_string(),
                "not a trixel id (must be >= 8 with an even bit length)",
            ))
        }
    }

    /// Level-0 id of base trixel `index` (0..=3 are S0..S3, 4..=7 are N0..N3).
    pub fn base(index: usize) -> IndexResult<Self> {
        if index >= crate::constants::BASE_TRIXELS {
            return Err(IndexError::invalid_name(
                index.to_string(),
                "base index must be 0-7",
            ));
        }
        Ok(Self(8 + index as u64))
    }

    #[inline]
    pub const fn id(&self) -> u64 {
        self.0
    }

    #[inline]
    fn bit_len(&self) -> u32 {
        u64::BITS - self.0.leading_zeros()
    }

    pub fn is_valid(&self) -> bool {
        self.0 >= 8 && self.bit_len() % 2 == 0
    }

    /// Number of quadrant digits after the base selector; 0 for base
    /// trixels and for the sentinel.
    pub fn level(&self) -> u32 {
        if self.is_valid() {
            (self.bit_len() - 4) / 2
        } else {
            0
        }
    }

    /// Index of the base trixel this id descends from.
    pub fn base_index(&self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        Some(((self.0 >> (2 * self.level())) - 8) as usize)
    }

    /// Quadrant digits from the base down, one per level.
    pub fn digits(&self) -> Vec<u8> {
        (0..self.level())
            .rev()
            .map(|i| ((self.0 >> (2 * i)) & 3) as u8)
            .collect()
    }

    pub fn child(&self, digit: u8) -> IndexResult<Self> {
        if digit > 3 {
            return Err(IndexError::invalid_name(
                self.name(),
                format!("child digit {} is not 0-3", digit),
            ));
        }
        if !self.is_valid() {
            return Err(IndexError::invalid_name(self.name(), "sentinel has no children"));
        }
        let level = self.level();
        if level >= MAX_LEVEL {
            return Err(IndexError::depth_out_of_range(level + 1, MAX_LEVEL));
        }
        Ok(Self(self.0 * 4 + digit as u64))
    }

    /// `None` for base trixels and the sentinel.
    pub fn parent(&self) -> Option<Self> {
        if self.is_valid() && self.level() > 0 {
            Some(Self(self.0 >> 2))
        } else {
            None
        }
    }

    /// Ancestor at `level`, or `self` when already at that level.
    pub fn ancestor(&self, level: u32) -> Option<Self> {
        let own = self.level();
        if !self.is_valid() || level > own {
            return None;
        }
        Some(Self(self.0 >> (2 * (own - level))))
    }

    /// First and last descendant at `level`, inclusive.
    ///
    /// ```
    /// use htm_index::MeshId;
    ///
    /// let n0: MeshId = "N0".parse().unwrap();
    /// let (low, high) = n0.descendant_range(2).unwrap();
    /// assert_eq!(low.name(), "N000");
    /// assert_eq!(high.name(), "N033");
    /// ```
    pub fn descendant_range(&self, level: u32) -> IndexResult<(Self, Self)> {
        if !self.is_valid() {
            return Err(IndexError::invalid_name(self.name(), "sentinel has no descendants"));
        }
        if level > MAX_LEVEL {
            return Err(IndexError::depth_out_of_range(level, MAX_LEVEL));
        }
        let own = self.level();
        if level < own {
            return Err(IndexError::invalid_name(
                self.name(),
                format!("level {} is above this trixel's level {}", level, own),
            ));
        }
        let shift = 2 * (level - own);
        let low = self.0 << shift;
        let high = low | ((1u64 << shift) - 1);
        Ok((Self(low), Self(high)))
    }

    /// Textual form, e.g. `"N0123"`; `"INVALID"` for non-trixel ids.
    pub fn name(&self) -> String {
        let Some(base) = self.base_index() else {
            return "INVALID".to_string();
        };
        let mut name = String::with_capacity(2 + self.level() as usize);
        name.push(if base < 4 { 'S' } else { 'N' });
        name.push(char::from(b'0' + (base % 4) as u8));
        for digit in self.digits() {
            name.push(char::from(b'0' + digit));
        }
        name
    }

    /// Parses `"N0123"`-style names: `N` or `S`, a base digit 0-3, then one
    /// quadrant digit 0-3 per level.
    pub fn parse(name: &str) -> IndexResult<Self> {
        let bytes = name.as_bytes();
        let hemisphere = match bytes.first() {
            Some(b'S') => 0,
            Some(b'N') => 4,
            _ => return Err(IndexError::invalid_name(name, "must start with N or S")),
        };
        let Some(&base_digit) = bytes.get(1) else {
            return Err(IndexError::invalid_name(name, "missing base digit"));
        };
        let level = bytes.len() - 2;
        if level > MAX_LEVEL as usize {
            return Err(IndexError::invalid_name(
                name,
                format!("level {} exceeds maximum {}", level, MAX_LEVEL),
            ));
        }

        let quadrant = |b: u8| -> IndexResult<u64> {
            match b {
                b'0'..=b'3' => Ok((b - b'0') as u64),
                _ => Err(IndexError::invalid_name(
                    name,
                    format!("'{}' is not a quadrant digit 0-3", char::from(b)),
                )),
            }
        };

        let mut id = 8 + hemisphere + quadrant(base_digit)?;
        for &b in &bytes[2..] {
            id = id * 4 + quadrant(b)?;
        }
        Ok(Self(id))
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for MeshId {
    type Err = IndexError;

    fn from_str(s: &str) -> IndexResult<Self> {
        Self::parse(s)
    }
}

impl From<MeshId> for u64 {
    fn from(id: MeshId) -> u64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_ids() {
        assert_eq!(MeshId::base(0).unwrap().id(), 8);
        assert_eq!(MeshId::base(0).unwrap().name(), "S0");
        assert_eq!(MeshId::base(4).unwrap().name(), "N0");
        assert_eq!(MeshId::base(7).unwrap().name(), "N3");
        assert_eq!(MeshId::base(7).unwrap().level(), 0);
        assert!(MeshId::base(8).is_err());
    }

    #[test]
    fn test_parse_and_render() {
        let id = MeshId::parse("N0123").unwrap();
        assert_eq!(id.id(), 795);
        assert_eq!(id.level(), 3);
        assert_eq!(id.name(), "N0123");
        assert_eq!(id.to_string(), "N0123");
        assert_eq!("S3".parse::<MeshId>().unwrap().id(), 11);
    }

    #[test]
    fn test_name_matches_digit_count() {
        let mut id = MeshId::parse("S2").unwrap();
        for (level, digit) in [3u8, 0, 1, 2, 2, 1].into_iter().enumerate() {
            id = id.child(digit).unwrap();
            assert_eq!(id.level(), level as u32 + 1);
            assert_eq!(id.name().len(), level + 3);
        }
        assert_eq!(id.name(), "S2301221");
        assert_eq!(MeshId::parse(&id.name()).unwrap(), id);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "N", "X0", "n0", "N4", "N05", "N0a", "S0 1"] {
            let err = MeshId::parse(bad).unwrap_err();
            assert!(matches!(err, IndexError::InvalidName { .. }), "{bad}");
        }
        let too_deep = format!("N0{}", "1".repeat(31));
        assert!(MeshId::parse(&too_deep).is_err());
        let deepest = format!("N0{}", "3".repeat(30));
        assert_eq!(MeshId::parse(&deepest).unwrap().level(), MAX_LEVEL);
    }

    #[test]
    fn test_validity() {
        assert!(!MeshId::INVALID.is_valid());
        assert!(!MeshId::from_raw(7).is_valid());
        assert!(!MeshId::from_raw(16).is_valid());
        assert!(MeshId::from_raw(32).is_valid());
        assert_eq!(MeshId::from_raw(32).name(), "S00");
        assert_eq!(MeshId::INVALID.name(), "INVALID");
        assert_eq!(MeshId::INVALID.level(), 0);
        assert!(MeshId::new(16).is_err());
        assert_eq!(MeshId::new(795).unwrap().name(), "N0123");
    }

    #[test]
    fn test_hierarchy() {
        let id = MeshId::from_raw(795);
        assert_eq!(id.base_index(), Some(4));
        assert_eq!(id.digits(), vec![1, 2, 3]);
        assert_eq!(id.parent().unwrap().name(), "N012");
        assert_eq!(id.ancestor(1).unwrap().name(), "N01");
        assert_eq!(id.ancestor(3), Some(id));
        assert_eq!(id.ancestor(4), None);
        assert_eq!(MeshId::from_raw(12).parent(), None);
        assert_eq!(MeshId::from_raw(12).child(2).unwrap().name(), "N02");
        assert!(MeshId::from_raw(12).child(4).is_err());
        assert!(MeshId::INVALID.child(0).is_err());
    }

    #[test]
    fn test_child_beyond_max_level() {
        let deepest = MeshId::parse(&format!("S1{}", "0".repeat(30))).unwrap();
        assert_eq!(
            deepest.child(0).unwrap_err(),
            IndexError::depth_out_of_range(31, MAX_LEVEL)
        );
    }

    #[test]
    fn test_descendant_range() {
        let n0 = MeshId::from_raw(12);
        let (low, high) = n0.descendant_range(2).unwrap();
        assert_eq!((low.id(), high.id()), (192, 207));
        assert_eq!(n0.descendant_range(0).unwrap(), (n0, n0));
        assert!(MeshId::from_raw(795).descendant_range(2).is_err());
        assert!(n0.descendant_range(MAX_LEVEL + 1).is_err());

        let (low, high) = n0.descendant_range(MAX_LEVEL).unwrap();
        assert_eq!(low.level(), MAX_LEVEL);
        assert_eq!(high.level(), MAX_LEVEL);
        assert_eq!(low.ancestor(0), Some(n0));
        assert_eq!(high.ancestor(0), Some(n0));
    }

    #[test]
    fn test_ordering_follows_id() {
        let mut ids: Vec<MeshId> = ["N3", "S0", "N01", "S12"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        ids.sort();
        let names: Vec<String> = ids.iter().map(MeshId::name).collect();
        assert_eq!(names, vec!["S0", "N3", "S12", "N01"]);
    }

    #[test]
    fn test_serde_as_integer() {
        let id = MeshId::from_raw(795);
        assert_eq!(serde_json::to_string(&id).unwrap(), "795");
        let back: MeshId = serde_json::from_str("795").unwrap();
        assert_eq!(back, id);
        assert_eq!(u64::from(id), 795);
    }
}
