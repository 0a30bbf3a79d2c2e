//! Layout computation for fixed, C-compatible structs.
//!
//! A [`Layout`] is computed once from an ordered list of [`FieldDescriptor`]s using
//! the usual C rules: every field is placed at the next offset that is a multiple
//! of its own alignment, the struct alignment is the largest field alignment, and
//! the total size is rounded up to that alignment. Array fields are `count`
//! contiguous elements whose element size equals the field alignment.

use rivet_bytes::align::checked_align_up;
use rivet_common::{Error, Result, verify_index};
use serde::{Deserialize, Serialize};

/// Input description of one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Byte alignment of the field, which is also the size of one element.
    pub alignment: usize,
    /// Element count: 1 for scalars, N for fixed-length arrays.
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

impl FieldDescriptor {
    /// A scalar field of `alignment` bytes.
    pub const fn scalar(alignment: usize) -> FieldDescriptor {
        FieldDescriptor {
            alignment,
            count: 1,
        }
    }

    /// A fixed-length array of `count` elements, each `alignment` bytes.
    pub const fn array(alignment: usize, count: usize) -> FieldDescriptor {
        FieldDescriptor { alignment, count }
    }

    /// Total byte size of the field, `None` on overflow.
    pub fn size(&self) -> Option<usize> {
        self.alignment.checked_mul(self.count)
    }

    pub fn is_array(&self) -> bool {
        self.count != 1
    }
}

/// Placement of one field within a computed [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLayout {
    pub offset: usize,
    pub alignment: usize,
    pub count: usize,
}

impl FieldLayout {
    /// Size of a single element.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.alignment
    }

    /// Total size of the field in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.alignment * self.count
    }

    /// Offset one past the last byte of the field.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.size()
    }
}

/// Computed size, alignment and per-field placement of a struct.
///
/// A `Layout` is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<FieldLayout>,
    size: usize,
    alignment: usize,
}

impl Layout {
    /// Computes the layout of a struct with the given fields, in declaration order.
    ///
    /// Fails with a configuration error if a field has a zero or non-power-of-two
    /// alignment, a zero count, if the field list is empty, or if the struct size
    /// does not fit in `isize`.
    pub fn build(fields: &[FieldDescriptor]) -> Result<Layout> {
        if fields.is_empty() {
            return Err(Error::configuration(
                "struct",
                "a struct must declare at least one field",
            ));
        }

        let mut placed = Vec::with_capacity(fields.len());
        let mut offset = 0usize;
        let mut alignment = 1usize;
        for (i, field) in fields.iter().enumerate() {
            let name = || format!("field {i}");
            if field.alignment == 0 {
                return Err(Error::configuration(name(), "alignment must be non-zero"));
            }
            if !field.alignment.is_power_of_two() {
                return Err(Error::configuration(
                    name(),
                    format!("alignment {} is not a power of two", field.alignment),
                ));
            }
            if field.count == 0 {
                return Err(Error::configuration(name(), "count must be non-zero"));
            }
            let size = field
                .size()
                .ok_or_else(|| Error::configuration(name(), "field size overflows"))?;
            offset = checked_align_up(offset, field.alignment)
                .ok_or_else(|| Error::configuration(name(), "struct size overflows"))?;
            placed.push(FieldLayout {
                offset,
                alignment: field.alignment,
                count: field.count,
            });
            offset = offset
                .checked_add(size)
                .ok_or_else(|| Error::configuration(name(), "struct size overflows"))?;
            alignment = alignment.max(field.alignment);
        }

        let size = checked_align_up(offset, alignment)
            .filter(|&size| size <= isize::MAX as usize)
            .ok_or_else(|| Error::configuration("struct", "struct size overflows"))?;

        log::debug!(
            "Built struct layout: {} fields, size {size}, alignment {alignment}",
            placed.len()
        );
        Ok(Layout {
            fields: placed,
            size,
            alignment,
        })
    }

    /// Parses a JSON array of field descriptors, e.g.
    /// `[{"alignment": 1, "count": 15}, {"alignment": 4, "count": 6}]`, and builds
    /// the layout.
    ///
    /// Negative or zero values are reported as configuration errors, like any
    /// other invalid field specification.
    pub fn from_json(json: &str) -> Result<Layout> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawField {
            alignment: i64,
            #[serde(default)]
            count: Option<i64>,
        }

        let raw: Vec<RawField> =
            serde_json::from_str(json).map_err(|e| Error::invalid_config("struct layout", e))?;
        let fields = raw
            .iter()
            .enumerate()
            .map(|(i, f)| -> Result<FieldDescriptor> {
                let count = f.count.unwrap_or(1);
                let non_negative = |value: i64, what: &str| {
                    usize::try_from(value).map_err(|_| {
                        Error::configuration(format!("field {i}"), format!("{what} {value} is negative"))
                    })
                };
                Ok(FieldDescriptor {
                    alignment: non_negative(f.alignment, "alignment")?,
                    count: non_negative(count, "count")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Layout::build(&fields)
    }

    /// Total size of the struct in bytes, a multiple of [`Layout::alignment`].
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alignment of the struct: the maximum field alignment.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Placement of the field at `index`.
    pub fn field(&self, index: usize) -> Result<&FieldLayout> {
        verify_index!("field", index, self.fields.len());
        Ok(&self.fields[index])
    }

    /// Byte offset of the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.field_count()`.
    #[inline]
    pub fn offsetof(&self, index: usize) -> usize {
        self.fields[index].offset
    }

    /// Byte size of the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.field_count()`.
    #[inline]
    pub fn sizeof(&self, index: usize) -> usize {
        self.fields[index].size()
    }

    /// # Panics
    ///
    /// Panics if `index >= self.field_count()`.
    #[inline]
    pub fn alignof(&self, index: usize) -> usize {
        self.fields[index].alignment
    }

    /// # Panics
    ///
    /// Panics if `index >= self.field_count()`.
    #[inline]
    pub fn countof(&self, index: usize) -> usize {
        self.fields[index].count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamepad_shape() {
        let layout =
            Layout::build(&[FieldDescriptor::array(1, 15), FieldDescriptor::array(4, 6)]).unwrap();
        assert_eq!(layout.size(), 40);
        assert_eq!(layout.alignment(), 4);
        assert_eq!(layout.field_count(), 2);
        assert_eq!(layout.offsetof(0), 0);
        assert_eq!(layout.offsetof(1), 16);
        assert_eq!(layout.sizeof(0), 15);
        assert_eq!(layout.sizeof(1), 24);
        assert_eq!(layout.countof(1), 6);
        assert_eq!(layout.alignof(1), 4);
    }

    #[test]
    fn test_tail_padding() {
        // { double; char } pads to 16
        let layout =
            Layout::build(&[FieldDescriptor::scalar(8), FieldDescriptor::scalar(1)]).unwrap();
        assert_eq!(layout.offsetof(1), 8);
        assert_eq!(layout.size(), 16);
        assert_eq!(layout.alignment(), 8);

        let layout = Layout::build(&[FieldDescriptor::array(1, 3)]).unwrap();
        assert_eq!(layout.size(), 3);
        assert_eq!(layout.alignment(), 1);
    }

    #[test]
    fn test_offsets_respect_alignment() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..200 {
            let fields = (0..rng.usize(1..10))
                .map(|_| FieldDescriptor::array(1 << rng.u32(0..4), rng.usize(1..5)))
                .collect::<Vec<_>>();
            let layout = Layout::build(&fields).unwrap();
            let mut end = 0;
            for field in layout.fields() {
                assert_eq!(field.offset % field.alignment, 0);
                assert!(field.offset >= end);
                assert!(field.offset - end < field.alignment);
                end = field.end();
            }
            assert_eq!(layout.size() % layout.alignment(), 0);
            assert!(layout.size() >= end);
            assert!(layout.size() - end < layout.alignment());
        }
    }

    #[test]
    fn test_invalid_fields() {
        for fields in [
            vec![],
            vec![FieldDescriptor::scalar(0)],
            vec![FieldDescriptor::scalar(3)],
            vec![FieldDescriptor::scalar(4), FieldDescriptor::array(2, 0)],
            vec![FieldDescriptor::array(8, usize::MAX / 4)],
        ] {
            let err = Layout::build(&fields).unwrap_err();
            assert!(err.is_configuration(), "{fields:?}: {err}");
        }
    }

    #[test]
    fn test_field_lookup() {
        let layout = Layout::build(&[FieldDescriptor::scalar(4)]).unwrap();
        assert_eq!(layout.field(0).unwrap().offset, 0);
        assert!(layout.field(1).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_from_json() {
        let layout =
            Layout::from_json(r#"[{"alignment": 1, "count": 15}, {"alignment": 4, "count": 6}]"#)
                .unwrap();
        assert_eq!(layout.size(), 40);

        let layout = Layout::from_json(r#"[{"alignment": 4}, {"alignment": 8}]"#).unwrap();
        assert_eq!(layout.offsetof(1), 8);
        assert_eq!(layout.size(), 16);

        let err = Layout::from_json(r#"[{"alignment": 4, "count": -1}]"#).unwrap_err();
        assert!(err.is_configuration());
        let err = Layout::from_json(r#"[{"alignment": 0}]"#).unwrap_err();
        assert!(err.is_configuration());
        let err = Layout::from_json(r#"{"alignment": 4}"#).unwrap_err();
        assert!(!err.is_configuration());
    }
}
